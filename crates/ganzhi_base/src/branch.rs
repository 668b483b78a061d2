//! Earthly Branches (di zhi), the 12-fold half of the sexagenary cycle.
//!
//! Branch order Zi=0 .. Hai=11 is part of the integer contract with the
//! calendrical engine, same as the stem order.

use crate::element::Element;
use crate::error::GanzhiError;
use crate::stem::Polarity;

/// Number of Earthly Branches.
pub const BRANCH_COUNT: u8 = 12;

/// The 12 Earthly Branches, starting from Zi.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Branch {
    Zi,
    Chou,
    Yin,
    Mao,
    Chen,
    Si,
    Wu,
    Wei,
    Shen,
    You,
    Xu,
    Hai,
}

/// All 12 branches in order, for FFI indexing (0 = Zi, 11 = Hai).
pub const ALL_BRANCHES: [Branch; 12] = [
    Branch::Zi,
    Branch::Chou,
    Branch::Yin,
    Branch::Mao,
    Branch::Chen,
    Branch::Si,
    Branch::Wu,
    Branch::Wei,
    Branch::Shen,
    Branch::You,
    Branch::Xu,
    Branch::Hai,
];

impl Branch {
    /// Validate a raw branch index.
    pub fn from_index(index: u8) -> Result<Self, GanzhiError> {
        ALL_BRANCHES
            .get(index as usize)
            .copied()
            .ok_or(GanzhiError::out_of_range("branch", index as u32, BRANCH_COUNT as u32))
    }

    /// Branch of the double-hour containing a 24-hour clock hour.
    ///
    /// Zi spans 23:00-00:59, Chou 01:00-02:59, and so on.
    pub fn from_clock_hour(hour: u8) -> Result<Self, GanzhiError> {
        if hour >= 24 {
            return Err(GanzhiError::out_of_range("clock hour", hour as u32, 24));
        }
        Ok(ALL_BRANCHES[(((hour + 1) / 2) % BRANCH_COUNT) as usize])
    }

    /// 0-based index (Zi=0 .. Hai=11).
    pub const fn index(self) -> u8 {
        self as u8
    }

    /// Pinyin name of the branch.
    pub const fn name(self) -> &'static str {
        match self {
            Self::Zi => "Zi",
            Self::Chou => "Chou",
            Self::Yin => "Yin",
            Self::Mao => "Mao",
            Self::Chen => "Chen",
            Self::Si => "Si",
            Self::Wu => "Wu",
            Self::Wei => "Wei",
            Self::Shen => "Shen",
            Self::You => "You",
            Self::Xu => "Xu",
            Self::Hai => "Hai",
        }
    }

    /// Chinese character of the branch.
    pub const fn hanzi(self) -> &'static str {
        match self {
            Self::Zi => "子",
            Self::Chou => "丑",
            Self::Yin => "寅",
            Self::Mao => "卯",
            Self::Chen => "辰",
            Self::Si => "巳",
            Self::Wu => "午",
            Self::Wei => "未",
            Self::Shen => "申",
            Self::You => "酉",
            Self::Xu => "戌",
            Self::Hai => "亥",
        }
    }

    /// Zodiac animal of the branch.
    pub const fn animal(self) -> &'static str {
        match self {
            Self::Zi => "Rat",
            Self::Chou => "Ox",
            Self::Yin => "Tiger",
            Self::Mao => "Rabbit",
            Self::Chen => "Dragon",
            Self::Si => "Snake",
            Self::Wu => "Horse",
            Self::Wei => "Goat",
            Self::Shen => "Monkey",
            Self::You => "Rooster",
            Self::Xu => "Dog",
            Self::Hai => "Pig",
        }
    }

    /// Even branches are Yang, odd branches Yin.
    pub const fn parity(self) -> Polarity {
        Polarity::of_index(self.index())
    }

    /// Native (seasonal) element of the branch.
    pub const fn element(self) -> Element {
        match self {
            Self::Yin | Self::Mao => Element::Wood,
            Self::Si | Self::Wu => Element::Fire,
            Self::Shen | Self::You => Element::Metal,
            Self::Hai | Self::Zi => Element::Water,
            Self::Chen | Self::Wei | Self::Xu | Self::Chou => Element::Earth,
        }
    }

    /// Branch `steps` positions further along the cycle.
    pub const fn advance(self, steps: u8) -> Self {
        ALL_BRANCHES[((self.index() as u16 + steps as u16) % BRANCH_COUNT as u16) as usize]
    }

    /// All 12 branches in order.
    pub const fn all() -> &'static [Branch; 12] {
        &ALL_BRANCHES
    }
}
