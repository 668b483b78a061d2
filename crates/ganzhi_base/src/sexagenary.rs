//! Sexagenary (60-position) Stem–Branch cycle.
//!
//! Stems advance mod 10 and branches mod 12 in lockstep. Because both moduli
//! share the factor 2, only pairs of equal parity ever meet: 60 of the 120
//! naive pairings. Position 0 is Jia-Zi, position 59 is Gui-Hai.
//!
//! [`combine`] solves the Chinese-remainder correspondence in closed form
//! instead of searching the cycle.

use std::fmt::{Display, Formatter};

use crate::branch::{ALL_BRANCHES, BRANCH_COUNT, Branch};
use crate::error::GanzhiError;
use crate::stem::{ALL_STEMS, STEM_COUNT, Stem};

/// Length of the sexagenary cycle.
pub const CYCLE_LENGTH: u8 = 60;

/// A position in the 60-cycle, always in [0, 60).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Sexagenary(u8);

impl Sexagenary {
    /// Validate a raw cycle index.
    pub fn from_index(index: u8) -> Result<Self, GanzhiError> {
        if index >= CYCLE_LENGTH {
            return Err(GanzhiError::out_of_range(
                "sexagenary",
                index as u32,
                CYCLE_LENGTH as u32,
            ));
        }
        Ok(Self(index))
    }

    /// 0-based index (Jia-Zi=0 .. Gui-Hai=59).
    pub const fn index(self) -> u8 {
        self.0
    }

    /// Stem at this position (`index % 10`).
    pub const fn stem(self) -> Stem {
        ALL_STEMS[(self.0 % STEM_COUNT) as usize]
    }

    /// Branch at this position (`index % 12`).
    pub const fn branch(self) -> Branch {
        ALL_BRANCHES[(self.0 % BRANCH_COUNT) as usize]
    }

    /// Decode into its `(stem, branch)` pair.
    pub const fn parts(self) -> (Stem, Branch) {
        (self.stem(), self.branch())
    }

    /// Pinyin name, e.g. `"Jia-Zi"`.
    pub fn name(self) -> String {
        self.to_string()
    }

    /// Two-character Chinese name, e.g. `"甲子"`.
    pub fn hanzi(self) -> String {
        format!("{}{}", self.stem().hanzi(), self.branch().hanzi())
    }

    /// Position `steps` further along the cycle.
    pub const fn advance(self, steps: u8) -> Self {
        Self(((self.0 as u16 + steps as u16) % CYCLE_LENGTH as u16) as u8)
    }
}

impl Display for Sexagenary {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}-{}", self.stem().name(), self.branch().name())
    }
}

impl TryFrom<u8> for Sexagenary {
    type Error = GanzhiError;

    fn try_from(value: u8) -> Result<Self, Self::Error> {
        Self::from_index(value)
    }
}

impl From<Sexagenary> for u8 {
    fn from(value: Sexagenary) -> Self {
        value.0
    }
}

/// Whether a stem and branch can co-occur in the cycle.
pub const fn is_valid_pair(stem: Stem, branch: Branch) -> bool {
    (stem.index() + branch.index()) % 2 == 0
}

/// Combine a stem and branch into their cycle position.
///
/// Fails with [`GanzhiError::InvalidCombination`] when the parities differ.
pub fn combine(stem: Stem, branch: Branch) -> Result<Sexagenary, GanzhiError> {
    if !is_valid_pair(stem, branch) {
        return Err(GanzhiError::InvalidCombination {
            stem: stem.index(),
            branch: branch.index(),
        });
    }
    Ok(combine_unchecked(stem, branch))
}

/// Closed-form cycle position; the caller guarantees equal parity.
pub(crate) const fn combine_unchecked(stem: Stem, branch: Branch) -> Sexagenary {
    let s = stem.index();
    let b = branch.index();
    // b / 2 <= 5, so the subtraction never underflows.
    let cycle = (6 - b / 2 + s / 2) % 6;
    Sexagenary(s + cycle * 10)
}

/// Combine raw indices, validating ranges first.
pub fn combine_indices(stem: u8, branch: u8) -> Result<Sexagenary, GanzhiError> {
    combine(Stem::from_index(stem)?, Branch::from_index(branch)?)
}

/// Iterate the full cycle from Jia-Zi.
pub fn cycle() -> impl Iterator<Item = Sexagenary> {
    (0..CYCLE_LENGTH).map(Sexagenary)
}
