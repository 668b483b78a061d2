//! Lunar phase category from the lunar day-of-month.
//!
//! Rules are evaluated in order and the first match wins, so day 1 of a
//! one-day month is still New and never Dark.

/// Named phase category of a lunar day.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum MoonPhase {
    /// Day 1 (shuo).
    New,
    /// Days 7, 8 (first quarter) and 22, 23 (last quarter).
    Quarter,
    /// Day 15 (wang).
    Full,
    /// Last day of the month (hui).
    Dark,
    /// Any other day.
    Unclassified,
}

impl MoonPhase {
    /// English name of the category.
    pub const fn name(self) -> &'static str {
        match self {
            Self::New => "New",
            Self::Quarter => "Quarter",
            Self::Full => "Full",
            Self::Dark => "Dark",
            Self::Unclassified => "Unclassified",
        }
    }

    /// Traditional character, empty for [`MoonPhase::Unclassified`].
    pub const fn hanzi(self) -> &'static str {
        match self {
            Self::New => "朔",
            Self::Quarter => "弦",
            Self::Full => "望",
            Self::Dark => "晦",
            Self::Unclassified => "",
        }
    }
}

/// Classify a lunar day (1-based) into its phase category.
pub const fn classify_moon_phase(lunar_day: u8, is_last_day_of_month: bool) -> MoonPhase {
    match lunar_day {
        1 => MoonPhase::New,
        7 | 8 | 22 | 23 => MoonPhase::Quarter,
        15 => MoonPhase::Full,
        _ if is_last_day_of_month => MoonPhase::Dark,
        _ => MoonPhase::Unclassified,
    }
}
