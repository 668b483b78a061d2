//! Heavenly Stem / Earthly Branch (gan zhi) algebra.
//!
//! This crate provides:
//! - Stem and Branch value types with range validation
//! - Na Jia stem-to-trigram mapping
//! - Triad (San He) and Union (Liu He) branch-to-element mappings
//! - Closed-form sexagenary combination with parity validation
//! - Five Rats (hour) and Five Tigers (month) stem rules
//! - Lunar phase classification by lunar day
//! - Four Pillars assembly from an external stem/branch source
//!
//! Everything here is pure integer arithmetic over fixed traditional tables.
//! Deciding which stem and branch apply to a calendar date is left to the
//! calendrical engine behind [`StemBranchSource`].

pub mod branch;
pub mod element;
pub mod error;
pub mod hour_stem;
pub mod moon_phase;
pub mod names;
pub mod pillars;
pub mod sexagenary;
pub mod stem;
pub mod trigram;

pub use branch::{ALL_BRANCHES, BRANCH_COUNT, Branch};
pub use element::{
    ALL_ELEMENTS, Element, ElementScheme, element_of, triad_element_index, triad_element_of,
    union_element_index, union_element_of,
};
pub use error::GanzhiError;
pub use hour_stem::{hour_pillar, hour_stem_of, month_pillar, month_stem_of, zi_hour_stem_of};
pub use moon_phase::{MoonPhase, classify_moon_phase};
pub use names::{Label, NameStyle};
pub use pillars::{ALL_PILLAR_UNITS, FixedSource, FourPillars, Pillar, PillarUnit, StemBranchSource};
pub use sexagenary::{CYCLE_LENGTH, Sexagenary, combine, combine_indices, cycle, is_valid_pair};
pub use stem::{ALL_STEMS, Polarity, STEM_COUNT, Stem};
pub use trigram::{ALL_TRIGRAMS, Trigram, trigram_index_of, trigram_of};
