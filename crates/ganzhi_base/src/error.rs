//! Error types for Stem–Branch calculations.

use std::error::Error;
use std::fmt::{Display, Formatter};

/// Errors from Stem–Branch calculations.
#[derive(Debug, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum GanzhiError {
    /// An index lies outside its cyclic domain (stem, branch, sexagenary, ...).
    OutOfRange {
        /// What kind of value was rejected.
        kind: &'static str,
        /// The offending value.
        value: u32,
        /// Exclusive upper bound of the legal range.
        bound: u32,
    },
    /// Stem and branch parities differ, so the pair never occurs in the cycle.
    InvalidCombination {
        /// Stem index of the rejected pair.
        stem: u8,
        /// Branch index of the rejected pair.
        branch: u8,
    },
}

impl GanzhiError {
    pub(crate) const fn out_of_range(kind: &'static str, value: u32, bound: u32) -> Self {
        Self::OutOfRange { kind, value, bound }
    }
}

impl Display for GanzhiError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::OutOfRange { kind, value, bound } => {
                write!(f, "{kind} index {value} out of range [0, {bound})")
            }
            Self::InvalidCombination { stem, branch } => write!(
                f,
                "invalid combination: stem {stem} and branch {branch} differ in parity"
            ),
        }
    }
}

impl Error for GanzhiError {}
