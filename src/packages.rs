use crate::error::WorkoutError;
use anyhow::{Context, Result};
use serde::Deserialize;
use std::fs;
use std::path::Path;
use std::str::FromStr;

/// One raw sensor package: an activity code and its positional readings.
///
/// In JSON either `["RUN", [15000, 1, 75]]` or
/// `{"code": "RUN", "data": [15000, 1, 75]}`.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct Package {
    pub code: String,
    pub data: Vec<f64>,
}

impl Package {
    pub fn new(code: impl Into<String>, data: impl Into<Vec<f64>>) -> Self {
        Self {
            code: code.into(),
            data: data.into(),
        }
    }
}

/// Parses `CODE:v1,v2,...`, e.g. `RUN:15000,1,75`.
impl FromStr for Package {
    type Err = WorkoutError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let invalid = || WorkoutError::InvalidPackage(s.to_string());

        let (code, rest) = s.split_once(':').ok_or_else(invalid)?;
        let code = code.trim();
        if code.is_empty() {
            return Err(invalid());
        }

        let rest = rest.trim();
        let data = if rest.is_empty() {
            Vec::new()
        } else {
            rest.split(',')
                .map(|v| v.trim().parse::<f64>().map_err(|_| invalid()))
                .collect::<Result<Vec<_>, _>>()?
        };

        Ok(Self::new(code, data))
    }
}

/// Readings the tool runs on when no input is given.
pub fn sample_packages() -> Vec<Package> {
    vec![
        Package::new("SWM", [720.0, 1.0, 80.0, 25.0, 40.0]),
        Package::new("RUN", [15000.0, 1.0, 75.0]),
        Package::new("WLK", [9000.0, 1.0, 75.0, 180.0]),
    ]
}

/// Reads a JSON array of packages from `path`.
pub fn load_packages(path: &Path) -> Result<Vec<Package>> {
    let shown = path.display();
    let raw = fs::read_to_string(path).with_context(|| format!("Reading packages: {shown}"))?;
    let packages: Vec<Package> =
        serde_json::from_str(&raw).with_context(|| format!("Parsing packages JSON: {shown}"))?;
    tracing::info!(path = %path.display(), packages = packages.len(), "loaded packages");
    Ok(packages)
}
