use crate::dlog;
use crate::error::WorkoutError;
use crate::types::{ActivityKind, Running, SportsWalking, Swimming, Training, Workout};

type Constructor = fn(&[f64]) -> Result<Training, WorkoutError>;

const TRAININGS: [(&str, Constructor); 3] = [
    (ActivityKind::Running.code(), build_running),
    (ActivityKind::SportsWalking.code(), build_sports_walking),
    (ActivityKind::Swimming.code(), build_swimming),
];

/// Resolves a sensor code. Codes are case-sensitive.
pub fn lookup(code: &str) -> Option<ActivityKind> {
    ActivityKind::ALL.into_iter().find(|k| k.code() == code)
}

/// Builds a training from a sensor code and its positional readings.
///
/// Field order follows the sensor package layout:
/// - `RUN`: action, duration, weight
/// - `WLK`: action, duration, weight, height
/// - `SWM`: action, duration, weight, pool length, pool count
pub fn read_package(code: &str, data: &[f64]) -> Result<Training, WorkoutError> {
    let Some((_, build)) = TRAININGS.iter().find(|(c, _)| *c == code) else {
        return Err(WorkoutError::UnknownActivityCode(code.to_string()));
    };
    dlog!("read_package code={code} fields={}", data.len());
    build(data)?.checked()
}

fn build_running(data: &[f64]) -> Result<Training, WorkoutError> {
    let [action, duration, weight] = fields::<3>(ActivityKind::Running, data)?;
    let workout = Workout::new(count("action", action)?, duration, weight)?;
    Ok(Training::Running(Running::new(workout)))
}

fn build_sports_walking(data: &[f64]) -> Result<Training, WorkoutError> {
    let [action, duration, weight, height] = fields::<4>(ActivityKind::SportsWalking, data)?;
    let workout = Workout::new(count("action", action)?, duration, weight)?;
    Ok(Training::SportsWalking(SportsWalking::new(workout, height)?))
}

fn build_swimming(data: &[f64]) -> Result<Training, WorkoutError> {
    let [action, duration, weight, pool_length, pool_count] =
        fields::<5>(ActivityKind::Swimming, data)?;
    let workout = Workout::new(count("action", action)?, duration, weight)?;
    Ok(Training::Swimming(Swimming::new(
        workout,
        pool_length,
        count("pool_count", pool_count)?,
    )?))
}

fn fields<const N: usize>(kind: ActivityKind, data: &[f64]) -> Result<[f64; N], WorkoutError> {
    <[f64; N]>::try_from(data).map_err(|_| WorkoutError::ArgumentCountMismatch {
        code: kind.code(),
        expected: kind.field_count(),
        actual: data.len(),
    })
}

/// Accepts whole, non-negative numbers that fit in a `u32`.
#[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
fn count(field: &'static str, value: f64) -> Result<u32, WorkoutError> {
    if value.is_finite() && value >= 0.0 && value.fract() == 0.0 && value <= f64::from(u32::MAX) {
        Ok(value as u32)
    } else {
        Err(WorkoutError::InvalidField { field, value })
    }
}
