#![deny(
    warnings,
    clippy::all,
    clippy::pedantic,
    clippy::nursery,
    clippy::cargo
)]
#![allow(clippy::multiple_crate_versions, clippy::cargo_common_metadata)]

use anyhow::Result;
use clap::Parser;
use std::io::{self, Write};
use workout_stats::{cli, packages, runner, utils};

#[macro_use]
extern crate workout_stats;

fn main() -> Result<()> {
    let cli = cli::Cli::parse();
    utils::init_logging(cli.verbose, cli.quiet);

    let format = cli.output_format();
    let packages = if let Some(path) = cli.input.as_deref() {
        dlog!("mode=file input={}", path.display());
        packages::load_packages(path)?
    } else if cli.packages.is_empty() {
        dlog!("mode=samples");
        packages::sample_packages()
    } else {
        dlog!("mode=args packages={}", cli.packages.len());
        cli.packages
    };

    if packages.is_empty() {
        anyhow::bail!("No workout packages to process.");
    }

    let stdout = io::stdout();
    let mut out = stdout.lock();
    let report = runner::run(&packages, &mut out, format)?;
    out.flush()?;

    if report.printed == 0 {
        anyhow::bail!(
            "None of the {} packages had a known activity code (RUN, WLK, SWM).",
            report.skipped
        );
    }

    Ok(())
}
