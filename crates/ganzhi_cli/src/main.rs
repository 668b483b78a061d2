mod cli;
mod commands;
mod config;
mod logging;

use std::process;

use anyhow::Result;
use clap::Parser;

use crate::cli::Cli;
use crate::config::GanzhiConfig;

fn main() {
    let cli = Cli::parse();
    logging::init(cli.verbose);

    if let Err(e) = run(&cli) {
        eprintln!("Error: {e:#}");
        process::exit(1);
    }
}

fn run(cli: &Cli) -> Result<()> {
    let config = match &cli.config {
        Some(path) => GanzhiConfig::load(path)?,
        None => GanzhiConfig::default(),
    };
    let display = config.display(cli.style)?;
    let output = commands::run(&cli.command, &display)?;
    println!("{output}");
    Ok(())
}
