//! Heavenly Stems (tian gan), the 10-fold half of the sexagenary cycle.
//!
//! The numeric order Jia=0 .. Gui=9 is shared with whatever calendrical
//! engine supplies stem indices, so it must never be reordered.

use crate::element::{ALL_ELEMENTS, Element};
use crate::error::GanzhiError;

/// Number of Heavenly Stems.
pub const STEM_COUNT: u8 = 10;

/// Yang/Yin polarity of a stem or branch, given by index parity.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Polarity {
    /// Even index.
    Yang,
    /// Odd index.
    Yin,
}

impl Polarity {
    /// Polarity of a raw cycle index.
    pub const fn of_index(index: u8) -> Self {
        if index % 2 == 0 { Self::Yang } else { Self::Yin }
    }

    /// `"Yang"` or `"Yin"`.
    pub const fn name(self) -> &'static str {
        match self {
            Self::Yang => "Yang",
            Self::Yin => "Yin",
        }
    }
}

/// The 10 Heavenly Stems, starting from Jia.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Stem {
    Jia,
    Yi,
    Bing,
    Ding,
    Wu,
    Ji,
    Geng,
    Xin,
    Ren,
    Gui,
}

/// All 10 stems in order, for FFI indexing (0 = Jia, 9 = Gui).
pub const ALL_STEMS: [Stem; 10] = [
    Stem::Jia,
    Stem::Yi,
    Stem::Bing,
    Stem::Ding,
    Stem::Wu,
    Stem::Ji,
    Stem::Geng,
    Stem::Xin,
    Stem::Ren,
    Stem::Gui,
];

impl Stem {
    /// Validate a raw stem index.
    pub fn from_index(index: u8) -> Result<Self, GanzhiError> {
        ALL_STEMS
            .get(index as usize)
            .copied()
            .ok_or(GanzhiError::out_of_range("stem", index as u32, STEM_COUNT as u32))
    }

    /// 0-based index (Jia=0 .. Gui=9).
    pub const fn index(self) -> u8 {
        self as u8
    }

    /// Pinyin name of the stem.
    pub const fn name(self) -> &'static str {
        match self {
            Self::Jia => "Jia",
            Self::Yi => "Yi",
            Self::Bing => "Bing",
            Self::Ding => "Ding",
            Self::Wu => "Wu",
            Self::Ji => "Ji",
            Self::Geng => "Geng",
            Self::Xin => "Xin",
            Self::Ren => "Ren",
            Self::Gui => "Gui",
        }
    }

    /// Chinese character of the stem.
    pub const fn hanzi(self) -> &'static str {
        match self {
            Self::Jia => "甲",
            Self::Yi => "乙",
            Self::Bing => "丙",
            Self::Ding => "丁",
            Self::Wu => "戊",
            Self::Ji => "己",
            Self::Geng => "庚",
            Self::Xin => "辛",
            Self::Ren => "壬",
            Self::Gui => "癸",
        }
    }

    /// Even stems are Yang, odd stems Yin.
    pub const fn parity(self) -> Polarity {
        Polarity::of_index(self.index())
    }

    /// Native element: consecutive pairs share Wood, Fire, Earth, Metal, Water.
    pub const fn element(self) -> Element {
        ALL_ELEMENTS[(self.index() / 2) as usize]
    }

    /// Stem `steps` positions further along the cycle.
    pub const fn advance(self, steps: u8) -> Self {
        ALL_STEMS[((self.index() as u16 + steps as u16) % STEM_COUNT as u16) as usize]
    }

    /// All 10 stems in order.
    pub const fn all() -> &'static [Stem; 10] {
        &ALL_STEMS
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn all_stems_count() {
        assert_eq!(ALL_STEMS.len(), STEM_COUNT as usize);
    }

    #[test]
    fn stem_indices_sequential() {
        for (i, s) in ALL_STEMS.iter().enumerate() {
            assert_eq!(s.index() as usize, i);
        }
    }

    #[test]
    fn stem_names_nonempty() {
        for s in ALL_STEMS {
            assert!(!s.name().is_empty());
            assert!(!s.hanzi().is_empty());
        }
    }

    #[test]
    fn from_index_round_trips() {
        for s in ALL_STEMS {
            assert_eq!(Stem::from_index(s.index()), Ok(s));
        }
    }

    #[test]
    fn from_index_rejects_ten() {
        assert_eq!(
            Stem::from_index(10),
            Err(GanzhiError::OutOfRange {
                kind: "stem",
                value: 10,
                bound: 10
            })
        );
        assert!(Stem::from_index(u8::MAX).is_err());
    }

    #[test]
    fn parity_alternates() {
        assert_eq!(Stem::Jia.parity(), Polarity::Yang);
        assert_eq!(Stem::Yi.parity(), Polarity::Yin);
        assert_eq!(Stem::Gui.parity(), Polarity::Yin);
    }

    #[test]
    fn native_elements() {
        assert_eq!(Stem::Jia.element(), Element::Wood);
        assert_eq!(Stem::Ding.element(), Element::Fire);
        assert_eq!(Stem::Ji.element(), Element::Earth);
        assert_eq!(Stem::Geng.element(), Element::Metal);
        assert_eq!(Stem::Gui.element(), Element::Water);
    }

    #[test]
    fn advance_wraps() {
        assert_eq!(Stem::Gui.advance(1), Stem::Jia);
        assert_eq!(Stem::Bing.advance(10), Stem::Bing);
        assert_eq!(Stem::Jia.advance(255), Stem::Ji);
    }
}
