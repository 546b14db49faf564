//! Workout statistics for running, sports walking and swimming.
//!
//! Raw sensor packages (`"RUN"`, `"WLK"`, `"SWM"` plus positional readings)
//! are turned into a [`Training`] by [`read_package`], which computes distance,
//! mean speed and calories and renders an [`InfoMessage`].

pub mod cli;
pub mod dispatch;
pub mod error;
pub mod message;
pub mod packages;
pub mod runner;
pub mod training;
pub mod types;
pub mod utils;

pub use dispatch::{lookup, read_package};
pub use error::WorkoutError;
pub use message::InfoMessage;
pub use packages::{Package, load_packages, sample_packages};
pub use runner::{OutputFormat, RunReport, run};
pub use types::{ActivityKind, Metrics, Running, SportsWalking, Swimming, Training, Workout};
