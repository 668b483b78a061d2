//! Integration tests for the Stem–Branch algebra.
//!
//! Exhaustive over the small domains; no external data needed.

use std::collections::HashSet;

use ganzhi_base::{
    ALL_BRANCHES, ALL_STEMS, Branch, Element, GanzhiError, MoonPhase, Stem, Trigram,
    classify_moon_phase, combine, combine_indices, cycle, hour_stem_of, triad_element_index,
    trigram_index_of, trigram_of, union_element_index,
};

// ---------------------------------------------------------------------------
// Sexagenary combination
// ---------------------------------------------------------------------------

#[test]
fn combine_is_bijection_onto_cycle() {
    let mut seen = HashSet::new();
    for s in ALL_STEMS {
        for b in ALL_BRANCHES {
            if (s.index() + b.index()) % 2 != 0 {
                continue;
            }
            let idx = combine(s, b).unwrap().index();
            assert!(idx < 60, "{s:?}-{b:?} -> {idx}");
            assert!(seen.insert(idx), "duplicate index {idx} for {s:?}-{b:?}");
        }
    }
    assert_eq!(seen.len(), 60);
}

#[test]
fn combine_rejects_every_mismatched_pair() {
    let mut rejected = 0;
    for s in ALL_STEMS {
        for b in ALL_BRANCHES {
            if (s.index() + b.index()) % 2 == 0 {
                continue;
            }
            assert_eq!(
                combine(s, b),
                Err(GanzhiError::InvalidCombination {
                    stem: s.index(),
                    branch: b.index()
                })
            );
            rejected += 1;
        }
    }
    assert_eq!(rejected, 60);
}

#[test]
fn combine_matches_cycle_walk() {
    // Walking stems and branches in lockstep visits the cycle in order.
    for (i, pos) in cycle().enumerate() {
        let stem = ALL_STEMS[i % 10];
        let branch = ALL_BRANCHES[i % 12];
        assert_eq!(combine(stem, branch), Ok(pos));
        assert_eq!(pos.index() as usize, i);
    }
}

#[test]
fn combine_anchors() {
    assert_eq!(combine_indices(0, 0).unwrap().index(), 0);
    assert_eq!(combine_indices(1, 1).unwrap().index(), 1);
    assert_eq!(combine_indices(9, 11).unwrap().index(), 59);
    assert_eq!(combine_indices(2, 0).unwrap().name(), "Bing-Zi");
    assert_eq!(combine_indices(0, 10).unwrap().index(), 10);
}

// ---------------------------------------------------------------------------
// Trigram and element tables
// ---------------------------------------------------------------------------

#[test]
fn na_jia_full_table() {
    let expected = [7u8, 0, 4, 3, 2, 5, 1, 5, 7, 0];
    for s in ALL_STEMS {
        assert_eq!(trigram_index_of(s), expected[s.index() as usize]);
    }
    assert_eq!(trigram_of(Stem::Jia), trigram_of(Stem::Ren));
    assert_eq!(trigram_of(Stem::Yi), Trigram::Kun);
    assert_eq!(trigram_of(Stem::Gui), Trigram::Kun);
}

#[test]
fn triad_has_period_four() {
    for b in 0..8u8 {
        let here = Branch::from_index(b).unwrap();
        let later = Branch::from_index(b + 4).unwrap();
        assert_eq!(triad_element_index(here), triad_element_index(later));
    }
    assert_eq!(triad_element_index(Branch::Zi), 4);
    assert_eq!(triad_element_index(Branch::Chou), 0);
    assert_eq!(triad_element_index(Branch::Yin), 1);
    assert_eq!(triad_element_index(Branch::Mao), 3);
}

#[test]
fn union_fold_symmetry() {
    // With Zi counted as 12, positions v and 13 - v share a slot.
    for v in 1..=12u8 {
        let a = Branch::from_index(v % 12).unwrap();
        let b = Branch::from_index((13 - v) % 12).unwrap();
        assert_eq!(union_element_index(a), union_element_index(b), "{a:?}/{b:?}");
    }
}

#[test]
fn union_table_entries() {
    let table = [2u8, 0, 1, 3, 4, 2];
    for v in 1..=6u8 {
        let b = Branch::from_index(v).unwrap();
        assert_eq!(union_element_index(b), table[(v - 1) as usize]);
    }
    assert_eq!(union_element_index(Branch::Zi), 2);
    assert_eq!(
        Element::from_index(union_element_index(Branch::Si)),
        Some(Element::Water)
    );
}

// ---------------------------------------------------------------------------
// Hour stem and moon phase
// ---------------------------------------------------------------------------

#[test]
fn hour_stem_anchors() {
    let hs = |d: u8, h: u8| {
        hour_stem_of(Stem::from_index(d).unwrap(), Branch::from_index(h).unwrap()).index()
    };
    assert_eq!(hs(0, 0), 0);
    assert_eq!(hs(0, 1), 1);
    assert_eq!(hs(5, 0), 0);
    assert_eq!(hs(5, 11), 1);
}

#[test]
fn hour_stem_matches_formula_everywhere() {
    for d in ALL_STEMS {
        for h in ALL_BRANCHES {
            let want = ((d.index() % 5) * 2 + h.index()) % 10;
            assert_eq!(hour_stem_of(d, h).index(), want);
        }
    }
}

#[test]
fn moon_phase_anchors() {
    assert_eq!(classify_moon_phase(1, false), MoonPhase::New);
    assert_eq!(classify_moon_phase(15, false), MoonPhase::Full);
    assert_eq!(classify_moon_phase(8, false), MoonPhase::Quarter);
    assert_eq!(classify_moon_phase(10, true), MoonPhase::Dark);
    assert_eq!(classify_moon_phase(10, false), MoonPhase::Unclassified);
}

// ---------------------------------------------------------------------------
// Purity
// ---------------------------------------------------------------------------

#[test]
fn repeated_calls_agree() {
    for s in ALL_STEMS {
        assert_eq!(trigram_of(s), trigram_of(s));
        for b in ALL_BRANCHES {
            assert_eq!(combine(s, b), combine(s, b));
            assert_eq!(hour_stem_of(s, b), hour_stem_of(s, b));
        }
    }
    for d in 0..=31u8 {
        for last in [false, true] {
            assert_eq!(classify_moon_phase(d, last), classify_moon_phase(d, last));
        }
    }
}

#[test]
fn concurrent_callers_agree() {
    let handles: Vec<_> = (0..4)
        .map(|_| {
            std::thread::spawn(|| {
                cycle()
                    .map(|p| combine(p.stem(), p.branch()).map(|q| q.index()))
                    .collect::<Result<Vec<_>, _>>()
            })
        })
        .collect();
    for h in handles {
        let indices = h.join().unwrap().unwrap();
        assert_eq!(indices, (0..60).collect::<Vec<u8>>());
    }
}
