use thiserror::Error;

/// Errors raised while turning raw readings into a workout.
#[derive(Debug, Error, PartialEq)]
pub enum WorkoutError {
    #[error("unknown activity code: {0:?}")]
    UnknownActivityCode(String),

    #[error("activity {code} expects {expected} fields, got {actual}")]
    ArgumentCountMismatch {
        code: &'static str,
        expected: usize,
        actual: usize,
    },

    #[error("duration must be a positive number of hours, got {0}")]
    NonPositiveDuration(f64),

    #[error("{metric} is not a finite number ({value}); check the readings")]
    NonFiniteMetric { metric: &'static str, value: f64 },

    #[error("invalid {field}: {value}")]
    InvalidField { field: &'static str, value: f64 },

    #[error("invalid package {0:?}, expected CODE:v1,v2,...")]
    InvalidPackage(String),
}
