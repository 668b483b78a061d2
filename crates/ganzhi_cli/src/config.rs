use std::path::Path;

use anyhow::{Context, Result, anyhow};
use ganzhi_base::NameStyle;
use serde::Deserialize;
use tracing::info;

/// Top-level CLI configuration.
#[derive(Debug, Deserialize, Default)]
#[serde(deny_unknown_fields)]
pub struct GanzhiConfig {
    /// Output rendering settings.
    #[serde(default)]
    pub display: DisplayToml,
}

#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct DisplayToml {
    #[serde(default = "default_style")]
    pub style: String,
    #[serde(default)]
    pub show_hanzi_alongside: bool,
}

impl Default for DisplayToml {
    fn default() -> Self {
        Self {
            style: default_style(),
            show_hanzi_alongside: false,
        }
    }
}

fn default_style() -> String {
    "pinyin".to_string()
}

/// Resolved display settings.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Display {
    pub style: NameStyle,
    pub show_hanzi_alongside: bool,
}

impl GanzhiConfig {
    /// Read and parse a TOML config file.
    pub fn load(path: &Path) -> Result<Self> {
        let toml_str = std::fs::read_to_string(path)
            .with_context(|| format!("failed to read config: {}", path.display()))?;
        let config: Self = toml::from_str(&toml_str).context("failed to parse TOML config")?;
        info!(path = %path.display(), style = %config.display.style, "config loaded");
        Ok(config)
    }

    /// Resolve display settings; a CLI style takes precedence over the file.
    pub fn display(&self, style_override: Option<NameStyle>) -> Result<Display> {
        let style = match style_override {
            Some(style) => style,
            None => self
                .display
                .style
                .parse::<NameStyle>()
                .map_err(|e| anyhow!("[display].style: {e}"))?,
        };
        Ok(Display {
            style,
            show_hanzi_alongside: self.display.show_hanzi_alongside,
        })
    }
}
