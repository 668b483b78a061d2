//! Pillar stem derivation rules.
//!
//! - **Five Rats Escape** (wu shu dun): the day stem fixes the stem of the
//!   Zi double-hour, and each later hour branch advances the stem by one.
//!   Stems pair up by `stem % 5`, so Jia and Ji days share the same hours.
//! - **Five Tigers Escape** (wu hu dun): the year stem fixes the stem of the
//!   Yin month (first month of the solar year) in the same way.
//!
//! Both rules are pure arithmetic; the derived stem always has the parity of
//! the branch it is paired with, so the resulting pillar is always valid.

use crate::branch::Branch;
use crate::sexagenary::{Sexagenary, combine_unchecked};
use crate::stem::{ALL_STEMS, STEM_COUNT, Stem};

/// Hour stem for a day stem and hour branch.
///
/// `((day_stem % 5) * 2 + hour_branch) % 10`
pub const fn hour_stem_of(day_stem: Stem, hour_branch: Branch) -> Stem {
    let base = (day_stem.index() % 5) * 2;
    ALL_STEMS[((base + hour_branch.index()) % STEM_COUNT) as usize]
}

/// Stem of the Zi hour (hour branch 0) for a day stem.
pub const fn zi_hour_stem_of(day_stem: Stem) -> Stem {
    hour_stem_of(day_stem, Branch::Zi)
}

/// Full hour pillar for a day stem and hour branch.
pub const fn hour_pillar(day_stem: Stem, hour_branch: Branch) -> Sexagenary {
    combine_unchecked(hour_stem_of(day_stem, hour_branch), hour_branch)
}

/// Month stem for a year stem and month branch.
///
/// The Yin month starts at `(year_stem % 5) * 2 + 2`; months are counted from
/// Yin, so Zi and Chou close the year as its 11th and 12th months.
pub const fn month_stem_of(year_stem: Stem, month_branch: Branch) -> Stem {
    let base = (year_stem.index() % 5) * 2 + 2;
    let months_from_yin = (month_branch.index() + 10) % 12;
    ALL_STEMS[((base + months_from_yin) % STEM_COUNT) as usize]
}

/// Full month pillar for a year stem and month branch.
pub const fn month_pillar(year_stem: Stem, month_branch: Branch) -> Sexagenary {
    combine_unchecked(month_stem_of(year_stem, month_branch), month_branch)
}
