//! Four Pillars assembly through a caller-supplied stem/branch source.

use ganzhi_base::{
    Branch, Element, FourPillars, GanzhiError, PillarUnit, Stem, StemBranchSource, Trigram,
    hour_pillar, month_pillar,
};

/// Stand-in for a calendrical engine that has already resolved an instant
/// to its year and day pillars, deriving month and hour by the stem rules.
struct RuleEngine {
    year: (u8, u8),
    month_branch: u8,
    day: (u8, u8),
    hour_branch: u8,
}

impl StemBranchSource for RuleEngine {
    fn stem_branch(&self, unit: PillarUnit) -> (u8, u8) {
        match unit {
            PillarUnit::Year => self.year,
            PillarUnit::Month => {
                let year_stem = Stem::from_index(self.year.0).unwrap();
                let branch = Branch::from_index(self.month_branch).unwrap();
                let p = month_pillar(year_stem, branch);
                (p.stem().index(), p.branch().index())
            }
            PillarUnit::Day => self.day,
            PillarUnit::Hour => {
                let day_stem = Stem::from_index(self.day.0).unwrap();
                let branch = Branch::from_index(self.hour_branch).unwrap();
                let p = hour_pillar(day_stem, branch);
                (p.stem().index(), p.branch().index())
            }
        }
    }
}

/// Raw values straight from an engine that got parity wrong for one unit.
struct BrokenEngine;

impl StemBranchSource for BrokenEngine {
    fn stem_branch(&self, unit: PillarUnit) -> (u8, u8) {
        match unit {
            PillarUnit::Day => (3, 4),
            _ => (0, 0),
        }
    }
}

#[test]
fn jia_chen_year_chart() {
    // Jia-Chen year, Yin month, Wu-Wu day, Zi hour.
    let engine = RuleEngine {
        year: (0, 4),
        month_branch: 2,
        day: (4, 6),
        hour_branch: 0,
    };
    let chart = FourPillars::from_source(&engine).unwrap();

    assert_eq!(chart.year().sexagenary().name(), "Jia-Chen");
    assert_eq!(chart.month().sexagenary().name(), "Bing-Yin");
    assert_eq!(chart.day().sexagenary().name(), "Wu-Wu");
    assert_eq!(chart.hour().sexagenary().name(), "Ren-Zi");

    assert_eq!(chart.year().sexagenary().index(), 40);
    assert_eq!(chart.day().sexagenary().index(), 54);
}

#[test]
fn chart_derivations() {
    let engine = RuleEngine {
        year: (0, 4),
        month_branch: 2,
        day: (4, 6),
        hour_branch: 0,
    };
    let chart = FourPillars::from_source(&engine).unwrap();

    assert_eq!(chart.year().trigram(), Trigram::Qian);
    assert_eq!(chart.day().trigram(), Trigram::Kan);
    assert_eq!(chart.year().triad_element(), Element::Water);
    assert_eq!(chart.day().triad_element(), Element::Fire);
    assert_eq!(chart.hour().union_element(), Element::Earth);
}

#[test]
fn every_hour_of_every_day_builds() {
    for day in 0..60u8 {
        let day_pair = (day % 10, day % 12);
        for hour_branch in 0..12u8 {
            let engine = RuleEngine {
                year: (0, 0),
                month_branch: 2,
                day: day_pair,
                hour_branch,
            };
            let chart = FourPillars::from_source(&engine).unwrap();
            assert_eq!(chart.hour().branch().index(), hour_branch);
        }
    }
}

#[test]
fn parity_error_surfaces_from_source() {
    assert_eq!(
        FourPillars::from_source(&BrokenEngine),
        Err(GanzhiError::InvalidCombination { stem: 3, branch: 4 })
    );
}

#[test]
fn iteration_order_matches_chart() {
    let engine = RuleEngine {
        year: (6, 0),
        month_branch: 5,
        day: (1, 3),
        hour_branch: 7,
    };
    let chart = FourPillars::from_source(&engine).unwrap();
    let rows: Vec<_> = chart.iter().map(|(u, p)| (u, p.sexagenary())).collect();
    assert_eq!(rows[0], (PillarUnit::Year, chart.year().sexagenary()));
    assert_eq!(rows[3], (PillarUnit::Hour, chart.hour().sexagenary()));
}
