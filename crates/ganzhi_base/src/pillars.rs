//! Four Pillars (year, month, day, hour) assembled from an external source.
//!
//! Which stem and branch govern a given instant is decided by a calendrical
//! engine outside this crate. [`StemBranchSource`] is the seam: it hands
//! back raw `(stem, branch)` indices per unit, and this module validates them
//! and derives everything the algebra offers for each pillar.

use crate::branch::Branch;
use crate::element::{Element, triad_element_of, union_element_of};
use crate::error::GanzhiError;
use crate::sexagenary::{Sexagenary, combine};
use crate::stem::Stem;
use crate::trigram::{Trigram, trigram_of};

/// Calendar unit a pillar describes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PillarUnit {
    Year,
    Month,
    Day,
    Hour,
}

/// All 4 units in chart order.
pub const ALL_PILLAR_UNITS: [PillarUnit; 4] = [
    PillarUnit::Year,
    PillarUnit::Month,
    PillarUnit::Day,
    PillarUnit::Hour,
];

impl PillarUnit {
    /// English label, as printed in chart headers.
    pub const fn name(self) -> &'static str {
        match self {
            Self::Year => "Year",
            Self::Month => "Month",
            Self::Day => "Day",
            Self::Hour => "Hour",
        }
    }
}

/// Supplier of raw stem/branch indices for a resolved calendar instant.
pub trait StemBranchSource {
    /// Raw `(stem, branch)` indices for `unit`.
    fn stem_branch(&self, unit: PillarUnit) -> (u8, u8);
}

/// A validated stem/branch pair.
///
/// Fields are private: a `Pillar` only comes from [`Pillar::new`],
/// [`Pillar::from_parts`] or [`Pillar::from_sexagenary`], so its stem and
/// branch always share parity and `sexagenary` always decodes back to them.
///
/// ```compile_fail
/// use ganzhi_base::{Branch, Pillar, Sexagenary, Stem};
///
/// let _ = Pillar {
///     stem: Stem::Jia,
///     branch: Branch::Chou,
///     sexagenary: Sexagenary::from_index(0).unwrap(),
/// };
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Pillar {
    stem: Stem,
    branch: Branch,
    sexagenary: Sexagenary,
}

impl Pillar {
    /// Validate raw indices: range first, then parity.
    pub fn new(stem: u8, branch: u8) -> Result<Self, GanzhiError> {
        let stem = Stem::from_index(stem)?;
        let branch = Branch::from_index(branch)?;
        Self::from_parts(stem, branch)
    }

    /// Validate a typed pair; fails only on a parity mismatch.
    pub fn from_parts(stem: Stem, branch: Branch) -> Result<Self, GanzhiError> {
        let sexagenary = combine(stem, branch)?;
        Ok(Self {
            stem,
            branch,
            sexagenary,
        })
    }

    /// Pillar at a cycle position. Infallible, every position is a valid pair.
    pub const fn from_sexagenary(sexagenary: Sexagenary) -> Self {
        Self {
            stem: sexagenary.stem(),
            branch: sexagenary.branch(),
            sexagenary,
        }
    }

    pub const fn stem(&self) -> Stem {
        self.stem
    }

    pub const fn branch(&self) -> Branch {
        self.branch
    }

    /// Position in the 60-cycle.
    pub const fn sexagenary(&self) -> Sexagenary {
        self.sexagenary
    }

    /// Na Jia trigram of the stem.
    pub const fn trigram(&self) -> Trigram {
        trigram_of(self.stem)
    }

    /// Triad (San He) element of the branch.
    pub const fn triad_element(&self) -> Element {
        triad_element_of(self.branch)
    }

    /// Union (Liu He) element of the branch.
    pub const fn union_element(&self) -> Element {
        union_element_of(self.branch)
    }
}

/// The four pillars of an instant, built by [`FourPillars::from_source`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct FourPillars {
    year: Pillar,
    month: Pillar,
    day: Pillar,
    hour: Pillar,
}

impl FourPillars {
    /// Pull and validate all four units, failing on the first bad one.
    pub fn from_source<S: StemBranchSource + ?Sized>(source: &S) -> Result<Self, GanzhiError> {
        let fetch = |unit| {
            let (s, b) = source.stem_branch(unit);
            Pillar::new(s, b)
        };
        Ok(Self {
            year: fetch(PillarUnit::Year)?,
            month: fetch(PillarUnit::Month)?,
            day: fetch(PillarUnit::Day)?,
            hour: fetch(PillarUnit::Hour)?,
        })
    }

    pub const fn year(&self) -> &Pillar {
        &self.year
    }

    pub const fn month(&self) -> &Pillar {
        &self.month
    }

    pub const fn day(&self) -> &Pillar {
        &self.day
    }

    pub const fn hour(&self) -> &Pillar {
        &self.hour
    }

    /// Pillar for one unit.
    pub const fn get(&self, unit: PillarUnit) -> &Pillar {
        match unit {
            PillarUnit::Year => &self.year,
            PillarUnit::Month => &self.month,
            PillarUnit::Day => &self.day,
            PillarUnit::Hour => &self.hour,
        }
    }

    /// Pillars paired with their unit, in chart order.
    pub fn iter(&self) -> impl Iterator<Item = (PillarUnit, &Pillar)> {
        ALL_PILLAR_UNITS.into_iter().map(move |u| (u, self.get(u)))
    }
}

/// Source backed by fixed raw indices, in [`ALL_PILLAR_UNITS`] order.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FixedSource {
    pub units: [(u8, u8); 4],
}

impl FixedSource {
    pub const fn new(year: (u8, u8), month: (u8, u8), day: (u8, u8), hour: (u8, u8)) -> Self {
        Self {
            units: [year, month, day, hour],
        }
    }
}

impl StemBranchSource for FixedSource {
    fn stem_branch(&self, unit: PillarUnit) -> (u8, u8) {
        match unit {
            PillarUnit::Year => self.units[0],
            PillarUnit::Month => self.units[1],
            PillarUnit::Day => self.units[2],
            PillarUnit::Hour => self.units[3],
        }
    }
}
