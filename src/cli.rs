use crate::packages::Package;
use crate::runner::OutputFormat;
use clap::{ArgAction, Parser};
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(
    name = "workout-stats",
    about = "Compute distance, average speed and calories burned for workouts"
)]
pub struct Cli {
    /// Workout packages as CODE:v1,v2,... (RUN, WLK or SWM).
    ///
    /// Example: RUN:15000,1,75. Without packages or --input, built-in samples are used.
    #[arg(value_name = "PACKAGE", conflicts_with = "input")]
    pub packages: Vec<Package>,

    /// JSON file holding an array of packages, e.g. [["RUN", [15000, 1, 75]]]
    #[arg(short, long, value_name = "FILE")]
    pub input: Option<PathBuf>,

    /// Print one JSON object per workout instead of text.
    #[arg(long)]
    pub json: bool,

    /// Increase log verbosity (-v, -vv). Defaults to INFO.
    #[arg(short = 'v', long, action = ArgAction::Count, global = true)]
    pub verbose: u8,

    /// Decrease log verbosity (-q, -qq). Defaults to INFO.
    #[arg(short = 'q', long, action = ArgAction::Count, global = true)]
    pub quiet: u8,
}

impl Cli {
    pub const fn output_format(&self) -> OutputFormat {
        if self.json {
            OutputFormat::Json
        } else {
            OutputFormat::Text
        }
    }
}
