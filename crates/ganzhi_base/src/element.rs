//! Five Elements (wu xing) and the two branch-grouping schemes.
//!
//! Branches are assigned elements by two independent traditional groupings:
//!
//! - **Triad (San He)**: the 12 branches fall into four groups of three,
//!   members spaced four apart, so the element depends only on `branch % 4`.
//! - **Union (Liu He)**: the branches pair off as Zi-Chou, Yin-Hai, Mao-Xu,
//!   Chen-You, Si-Shen, Wu-Wei. Counting Zi as 12, the two members of a pair
//!   fold onto the same slot of a 6-entry table.
//!
//! Both tables are part of the integer compatibility surface and must not
//! be "corrected". Read with the Wood..Water index order, the Triad table
//! gives Water to Shen-Zi-Chen and Fire to Yin-Wu-Xu as tradition does, but
//! Wood to Si-You-Chou and Metal to Hai-Mao-Wei, the reverse of the
//! traditional Metal and Wood for those two groups.

use crate::branch::Branch;

/// The five elements, in generating-cycle order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Element {
    Wood,
    Fire,
    Earth,
    Metal,
    Water,
}

/// All 5 elements in order (0 = Wood, 4 = Water).
pub const ALL_ELEMENTS: [Element; 5] = [
    Element::Wood,
    Element::Fire,
    Element::Earth,
    Element::Metal,
    Element::Water,
];

impl Element {
    /// Decode an element index produced by one of the mappers.
    pub fn from_index(index: u8) -> Option<Self> {
        ALL_ELEMENTS.get(index as usize).copied()
    }

    /// 0-based index (Wood=0 .. Water=4).
    pub const fn index(self) -> u8 {
        self as u8
    }

    /// Pinyin name of the element.
    pub const fn name(self) -> &'static str {
        match self {
            Self::Wood => "Mu",
            Self::Fire => "Huo",
            Self::Earth => "Tu",
            Self::Metal => "Jin",
            Self::Water => "Shui",
        }
    }

    /// English name of the element.
    pub const fn english_name(self) -> &'static str {
        match self {
            Self::Wood => "Wood",
            Self::Fire => "Fire",
            Self::Earth => "Earth",
            Self::Metal => "Metal",
            Self::Water => "Water",
        }
    }

    /// Single Chinese character of the element.
    pub const fn hanzi(self) -> &'static str {
        match self {
            Self::Wood => "木",
            Self::Fire => "火",
            Self::Earth => "土",
            Self::Metal => "金",
            Self::Water => "水",
        }
    }
}

/// Branch-grouping scheme used to derive an element.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ElementScheme {
    /// San He: period-4 grouping.
    Triad,
    /// Liu He: symmetric pairing.
    Union,
}

impl ElementScheme {
    /// Lowercase label used in CLI output.
    pub const fn name(self) -> &'static str {
        match self {
            Self::Triad => "triad",
            Self::Union => "union",
        }
    }
}

const TRIAD_TABLE: [u8; 4] = [4, 0, 1, 3];

const UNION_TABLE: [u8; 6] = [2, 0, 1, 3, 4, 2];

/// Triad (San He) element index of a branch.
pub const fn triad_element_index(branch: Branch) -> u8 {
    TRIAD_TABLE[(branch.index() % 4) as usize]
}

/// Union (Liu He) element index of a branch.
pub const fn union_element_index(branch: Branch) -> u8 {
    // Zi sits at position 12 for the fold.
    let v = if branch.index() == 0 { 12 } else { branch.index() };
    let slot = if v < 7 { v - 1 } else { 12 - v };
    UNION_TABLE[slot as usize]
}

/// Triad (San He) element of a branch.
pub const fn triad_element_of(branch: Branch) -> Element {
    ALL_ELEMENTS[triad_element_index(branch) as usize]
}

/// Union (Liu He) element of a branch.
pub const fn union_element_of(branch: Branch) -> Element {
    ALL_ELEMENTS[union_element_index(branch) as usize]
}

/// Element of a branch under the given scheme.
pub const fn element_of(branch: Branch, scheme: ElementScheme) -> Element {
    match scheme {
        ElementScheme::Triad => triad_element_of(branch),
        ElementScheme::Union => union_element_of(branch),
    }
}
