//! Eight trigrams (ba gua) and the Na Jia stem assignment.
//!
//! Trigram indices follow binary line order, reading lines bottom-up as
//! bits 0..2 with a solid (yang) line set: Kun=000 .. Qian=111.
//!
//! The Na Jia table below is a compatibility surface shared with chart
//! renderers downstream and is reproduced entry for entry.

use crate::stem::Stem;

/// The eight trigrams in binary line order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Trigram {
    Kun,
    Zhen,
    Kan,
    Dui,
    Gen,
    Li,
    Xun,
    Qian,
}

/// All 8 trigrams in order (0 = Kun, 7 = Qian).
pub const ALL_TRIGRAMS: [Trigram; 8] = [
    Trigram::Kun,
    Trigram::Zhen,
    Trigram::Kan,
    Trigram::Dui,
    Trigram::Gen,
    Trigram::Li,
    Trigram::Xun,
    Trigram::Qian,
];

impl Trigram {
    /// Decode a trigram index produced by [`trigram_index_of`].
    pub fn from_index(index: u8) -> Option<Self> {
        ALL_TRIGRAMS.get(index as usize).copied()
    }

    /// 0-based index (Kun=0 .. Qian=7).
    pub const fn index(self) -> u8 {
        self as u8
    }

    /// Pinyin name of the trigram.
    pub const fn name(self) -> &'static str {
        match self {
            Self::Kun => "Kun",
            Self::Zhen => "Zhen",
            Self::Kan => "Kan",
            Self::Dui => "Dui",
            Self::Gen => "Gen",
            Self::Li => "Li",
            Self::Xun => "Xun",
            Self::Qian => "Qian",
        }
    }

    /// Chinese character of the trigram.
    pub const fn hanzi(self) -> &'static str {
        match self {
            Self::Kun => "坤",
            Self::Zhen => "震",
            Self::Kan => "坎",
            Self::Dui => "兌",
            Self::Gen => "艮",
            Self::Li => "離",
            Self::Xun => "巽",
            Self::Qian => "乾",
        }
    }

    /// Conventional English gloss (Earth, Thunder, ...).
    pub const fn english_name(self) -> &'static str {
        match self {
            Self::Kun => "Earth",
            Self::Zhen => "Thunder",
            Self::Kan => "Water",
            Self::Dui => "Lake",
            Self::Gen => "Mountain",
            Self::Li => "Fire",
            Self::Xun => "Wind",
            Self::Qian => "Heaven",
        }
    }

    /// Line pattern as `[bottom, middle, top]`, `true` for a solid line.
    pub const fn lines(self) -> [bool; 3] {
        let bits = self.index();
        [bits & 1 != 0, bits & 2 != 0, bits & 4 != 0]
    }
}

const NA_JIA_TABLE: [u8; 10] = [7, 0, 4, 3, 2, 5, 1, 5, 7, 0];

/// Na Jia trigram index of a stem.
pub const fn trigram_index_of(stem: Stem) -> u8 {
    NA_JIA_TABLE[stem.index() as usize]
}

/// Na Jia trigram of a stem.
pub const fn trigram_of(stem: Stem) -> Trigram {
    ALL_TRIGRAMS[trigram_index_of(stem) as usize]
}
