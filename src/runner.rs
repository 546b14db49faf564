use crate::dispatch::read_package;
use crate::dlog;
use crate::error::WorkoutError;
use crate::packages::Package;
use anyhow::{Context, Result};
use std::io::Write;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum OutputFormat {
    /// Human-readable summary line.
    #[default]
    Text,
    /// One JSON object per line.
    Json,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct RunReport {
    pub printed: usize,
    pub skipped: usize,
}

/// Processes packages in order, writing one line per workout to `out`.
///
/// Unknown activity codes are logged and skipped. Any other construction error
/// stops the run.
pub fn run<W: Write>(packages: &[Package], out: &mut W, format: OutputFormat) -> Result<RunReport> {
    let mut report = RunReport::default();

    for (i, p) in packages.iter().enumerate() {
        let training = match read_package(&p.code, &p.data) {
            Ok(t) => t,
            Err(WorkoutError::UnknownActivityCode(code)) => {
                tracing::warn!(index = i + 1, code = %code, "skipping package with unknown activity code");
                report.skipped += 1;
                continue;
            }
            Err(e) => {
                return Err(e).with_context(|| format!("Reading package #{} ({})", i + 1, p.code));
            }
        };

        let info = training.summary();
        dlog!(
            "workout index={} kind={} distance={} speed={} calories={}",
            i + 1,
            info.training_type,
            info.distance,
            info.speed,
            info.calories
        );

        let written = match format {
            OutputFormat::Text => writeln!(out, "{info}"),
            OutputFormat::Json => serde_json::to_writer(&mut *out, &info)
                .map_err(std::io::Error::from)
                .and_then(|()| writeln!(out)),
        };
        written.context("Writing workout summary")?;
        report.printed += 1;
    }

    tracing::info!(
        printed = report.printed,
        skipped = report.skipped,
        "run done"
    );

    Ok(report)
}
