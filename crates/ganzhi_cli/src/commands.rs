use std::fmt::Write as _;

use anyhow::{Context, Result};
use ganzhi_base::{
    Branch, ElementScheme, FixedSource, FourPillars, Label, NameStyle, Sexagenary, Stem,
    classify_moon_phase, combine, cycle, element_of, hour_stem_of, month_stem_of, trigram_of,
};
use tracing::debug;

use crate::cli::Command;
use crate::config::Display;

/// Execute one subcommand and return its rendered output.
pub fn run(command: &Command, display: &Display) -> Result<String> {
    match *command {
        Command::Trigram { stem } => {
            let stem = Stem::from_index(stem)?;
            let trigram = trigram_of(stem);
            debug!(stem = stem.index(), trigram = trigram.index(), "na jia lookup");
            Ok(format!(
                "{} -> {} ({})",
                label(&stem, display),
                label(&trigram, display),
                trigram.english_name()
            ))
        }

        Command::Element { branch, scheme } => {
            let branch = Branch::from_index(branch)?;
            let scheme = ElementScheme::from(scheme);
            let element = element_of(branch, scheme);
            debug!(branch = branch.index(), scheme = scheme.name(), "element lookup");
            Ok(format!(
                "{} -> {} ({}, {})",
                label(&branch, display),
                label(&element, display),
                element.english_name(),
                scheme.name()
            ))
        }

        Command::Combine { stem, branch } => {
            let stem = Stem::from_index(stem)?;
            let branch = Branch::from_index(branch)?;
            let pos = combine(stem, branch).with_context(|| {
                format!("cannot combine {} with {}", stem.name(), branch.name())
            })?;
            Ok(format!("{} (index {})", label(&pos, display), pos.index()))
        }

        Command::Decode { index } => {
            let pos = Sexagenary::from_index(index)?;
            let (stem, branch) = pos.parts();
            Ok(format!(
                "{}: stem {} ({}), branch {} ({})",
                pos.index(),
                stem.index(),
                label(&stem, display),
                branch.index(),
                label(&branch, display)
            ))
        }

        Command::HourStem {
            day_stem,
            branch,
            clock_hour,
        } => {
            let day_stem = Stem::from_index(day_stem)?;
            let hour_branch = match (branch, clock_hour) {
                (_, Some(h)) => Branch::from_clock_hour(h)?,
                (Some(b), None) => Branch::from_index(b)?,
                (None, None) => Branch::Zi,
            };
            let stem = hour_stem_of(day_stem, hour_branch);
            debug!(
                day_stem = day_stem.index(),
                hour_branch = hour_branch.index(),
                "five rats"
            );
            Ok(format!(
                "{} day, {} hour -> {}",
                label(&day_stem, display),
                label(&hour_branch, display),
                label(&stem, display)
            ))
        }

        Command::MonthStem {
            year_stem,
            month_branch,
        } => {
            let year_stem = Stem::from_index(year_stem)?;
            let month_branch = Branch::from_index(month_branch)?;
            let stem = month_stem_of(year_stem, month_branch);
            Ok(format!(
                "{} year, {} month -> {}",
                label(&year_stem, display),
                label(&month_branch, display),
                label(&stem, display)
            ))
        }

        Command::MoonPhase { day, last_day } => {
            let phase = classify_moon_phase(day, last_day);
            Ok(format!("day {day} -> {}", label(&phase, display)))
        }

        Command::Pillars {
            year,
            month,
            day,
            hour,
        } => {
            let source = FixedSource::new(year, month, day, hour);
            let pillars = FourPillars::from_source(&source).context("invalid pillar")?;
            let mut out = String::new();
            for (unit, p) in pillars.iter() {
                writeln!(
                    out,
                    "{:<5}  {:<10}  trigram {:<6}  triad {:<6}  union {:<6}",
                    unit.name(),
                    label(&p.sexagenary(), display),
                    label(&p.trigram(), display),
                    label(&p.triad_element(), display),
                    label(&p.union_element(), display),
                )?;
            }
            Ok(out.trim_end().to_string())
        }

        Command::Cycle => {
            let mut out = String::new();
            for pos in cycle() {
                writeln!(out, "{:>2}  {}", pos.index(), label(&pos, display))?;
            }
            Ok(out.trim_end().to_string())
        }
    }
}

fn label<T: Label>(value: &T, display: &Display) -> String {
    let primary = value.label(display.style);
    if display.show_hanzi_alongside && display.style != NameStyle::Hanzi {
        let hanzi = value.label(NameStyle::Hanzi);
        if hanzi != primary {
            return format!("{primary} {hanzi}");
        }
    }
    primary
}
