use serde::Serialize;
use std::fmt;

/// Display projection of one finished workout.
///
/// Values are kept at full precision; rounding to three decimals happens only
/// when the message is rendered. Rust's `{:.3}` rounds the exact binary value
/// to nearest, ties to even.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct InfoMessage {
    pub training_type: &'static str,
    /// Hours.
    pub duration: f64,
    /// Kilometers.
    pub distance: f64,
    /// Kilometers per hour.
    pub speed: f64,
    /// Kilocalories.
    pub calories: f64,
}

impl InfoMessage {
    pub fn get_message(&self) -> String {
        self.to_string()
    }
}

impl fmt::Display for InfoMessage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Activity type: {}; Duration: {:.3} h; Distance: {:.3} km; \
             Avg. speed: {:.3} km/h; Calories burned: {:.3}.",
            self.training_type, self.duration, self.distance, self.speed, self.calories
        )
    }
}
