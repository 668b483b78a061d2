use std::path::PathBuf;

use clap::{Parser, Subcommand, ValueEnum};
use ganzhi_base::{ElementScheme, NameStyle};

/// Stem–Branch (gan zhi) calculator.
#[derive(Parser)]
#[command(name = "ganzhi", version, about = "Heavenly Stem / Earthly Branch calculator")]
pub struct Cli {
    /// Increase verbosity (-v info, -vv debug, -vvv trace).
    #[arg(short, long, global = true, action = clap::ArgAction::Count)]
    pub verbose: u8,

    /// Path to TOML configuration file.
    #[arg(short, long, global = true)]
    pub config: Option<PathBuf>,

    /// Name style: pinyin, hanzi or index. Overrides the config file.
    #[arg(long, global = true)]
    pub style: Option<NameStyle>,

    /// Subcommand to run.
    #[command(subcommand)]
    pub command: Command,
}

/// Available subcommands.
#[derive(Subcommand)]
pub enum Command {
    /// Na Jia trigram of a stem
    Trigram {
        /// Stem index (0-9)
        stem: u8,
    },
    /// Five-element group of a branch
    Element {
        /// Branch index (0-11)
        branch: u8,
        /// Grouping scheme
        #[arg(long, value_enum, default_value_t = SchemeArg::Triad)]
        scheme: SchemeArg,
    },
    /// Sexagenary position of a stem/branch pair
    Combine {
        /// Stem index (0-9)
        stem: u8,
        /// Branch index (0-11)
        branch: u8,
    },
    /// Decode a sexagenary position into its stem and branch
    Decode {
        /// Cycle position (0-59)
        index: u8,
    },
    /// Hour stem by the Five Rats rule
    HourStem {
        /// Day stem index (0-9)
        day_stem: u8,
        /// Hour branch index (0-11, default 0 = Zi)
        #[arg(long, conflicts_with = "clock_hour")]
        branch: Option<u8>,
        /// 24-hour clock hour (0-23), converted to its branch
        #[arg(long)]
        clock_hour: Option<u8>,
    },
    /// Month stem by the Five Tigers rule
    MonthStem {
        /// Year stem index (0-9)
        year_stem: u8,
        /// Month branch index (0-11, 2 = Yin = first month)
        month_branch: u8,
    },
    /// Lunar phase category of a lunar day
    MoonPhase {
        /// Lunar day of month (1-30)
        day: u8,
        /// The day is the last day of its lunar month
        #[arg(long)]
        last_day: bool,
    },
    /// Four Pillars chart from stem,branch pairs
    Pillars {
        /// Year pillar as STEM,BRANCH
        #[arg(long, value_parser = parse_pair)]
        year: (u8, u8),
        /// Month pillar as STEM,BRANCH
        #[arg(long, value_parser = parse_pair)]
        month: (u8, u8),
        /// Day pillar as STEM,BRANCH
        #[arg(long, value_parser = parse_pair)]
        day: (u8, u8),
        /// Hour pillar as STEM,BRANCH
        #[arg(long, value_parser = parse_pair)]
        hour: (u8, u8),
    },
    /// List the full 60-position cycle
    Cycle,
}

/// CLI spelling of [`ElementScheme`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum SchemeArg {
    Triad,
    Union,
}

impl From<SchemeArg> for ElementScheme {
    fn from(value: SchemeArg) -> Self {
        match value {
            SchemeArg::Triad => Self::Triad,
            SchemeArg::Union => Self::Union,
        }
    }
}

fn parse_pair(s: &str) -> Result<(u8, u8), String> {
    let (stem, branch) = s
        .split_once(',')
        .ok_or_else(|| format!("expected STEM,BRANCH, got '{s}'"))?;
    let stem = stem
        .trim()
        .parse::<u8>()
        .map_err(|e| format!("bad stem '{stem}': {e}"))?;
    let branch = branch
        .trim()
        .parse::<u8>()
        .map_err(|e| format!("bad branch '{branch}': {e}"))?;
    Ok((stem, branch))
}
