//! Display name selection for cycle values.

use std::fmt::{Display, Formatter};
use std::str::FromStr;

use crate::branch::Branch;
use crate::element::Element;
use crate::moon_phase::MoonPhase;
use crate::sexagenary::Sexagenary;
use crate::stem::Stem;
use crate::trigram::Trigram;

/// How a cycle value is rendered for humans.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum NameStyle {
    /// Romanized name, e.g. `Jia-Zi`.
    #[default]
    Pinyin,
    /// Chinese characters, e.g. `甲子`.
    Hanzi,
    /// Bare integer index.
    Index,
}

impl NameStyle {
    pub const fn name(self) -> &'static str {
        match self {
            Self::Pinyin => "pinyin",
            Self::Hanzi => "hanzi",
            Self::Index => "index",
        }
    }
}

impl Display for NameStyle {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for NameStyle {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "pinyin" => Ok(Self::Pinyin),
            "hanzi" => Ok(Self::Hanzi),
            "index" => Ok(Self::Index),
            other => Err(format!(
                "unknown name style '{other}' (expected pinyin, hanzi or index)"
            )),
        }
    }
}

/// A value that can be rendered in any [`NameStyle`].
pub trait Label {
    fn label(&self, style: NameStyle) -> String;
}

impl Label for Stem {
    fn label(&self, style: NameStyle) -> String {
        match style {
            NameStyle::Pinyin => self.name().to_string(),
            NameStyle::Hanzi => self.hanzi().to_string(),
            NameStyle::Index => self.index().to_string(),
        }
    }
}

impl Label for Branch {
    fn label(&self, style: NameStyle) -> String {
        match style {
            NameStyle::Pinyin => self.name().to_string(),
            NameStyle::Hanzi => self.hanzi().to_string(),
            NameStyle::Index => self.index().to_string(),
        }
    }
}

impl Label for Sexagenary {
    fn label(&self, style: NameStyle) -> String {
        match style {
            NameStyle::Pinyin => self.name(),
            NameStyle::Hanzi => self.hanzi(),
            NameStyle::Index => self.index().to_string(),
        }
    }
}

impl Label for Trigram {
    fn label(&self, style: NameStyle) -> String {
        match style {
            NameStyle::Pinyin => self.name().to_string(),
            NameStyle::Hanzi => self.hanzi().to_string(),
            NameStyle::Index => self.index().to_string(),
        }
    }
}

impl Label for Element {
    fn label(&self, style: NameStyle) -> String {
        match style {
            NameStyle::Pinyin => self.name().to_string(),
            NameStyle::Hanzi => self.hanzi().to_string(),
            NameStyle::Index => self.index().to_string(),
        }
    }
}

impl Label for MoonPhase {
    fn label(&self, style: NameStyle) -> String {
        match style {
            NameStyle::Hanzi if !self.hanzi().is_empty() => self.hanzi().to_string(),
            NameStyle::Index => (*self as u8).to_string(),
            _ => self.name().to_string(),
        }
    }
}
