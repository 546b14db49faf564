use crate::error::WorkoutError;
use crate::message::InfoMessage;
use crate::types::{ActivityKind, Metrics, Running, SportsWalking, Swimming, Training, Workout};

const M_IN_KM: f64 = 1000.0;
const MIN_IN_H: f64 = 60.0;

impl Workout {
    /// Distance from step count, in km.
    fn step_distance(&self, kind: ActivityKind) -> f64 {
        f64::from(self.action) * kind.step_length_m() / M_IN_KM
    }
}

impl Running {
    const CALORIES_MEAN_SPEED_MULTIPLIER: f64 = 18.0;
    const CALORIES_MEAN_SPEED_SHIFT: f64 = 1.79;

    fn spent_calories(&self, mean_speed_kmh: f64) -> f64 {
        let w = &self.workout;
        (Self::CALORIES_MEAN_SPEED_MULTIPLIER * mean_speed_kmh + Self::CALORIES_MEAN_SPEED_SHIFT)
            * w.weight_kg
            / M_IN_KM
            * (w.duration_h * MIN_IN_H)
    }
}

impl SportsWalking {
    const CALORIES_WEIGHT_MULTIPLIER: f64 = 0.035;
    const CALORIES_SPEED_HEIGHT_MULTIPLIER: f64 = 0.029;
    const KMH_IN_MSEC: f64 = 0.278;
    const CM_IN_M: f64 = 100.0;

    fn spent_calories(&self, mean_speed_kmh: f64) -> f64 {
        let w = &self.workout;
        let mean_speed_msec = mean_speed_kmh * Self::KMH_IN_MSEC;
        let height_m = self.height_cm / Self::CM_IN_M;
        (Self::CALORIES_WEIGHT_MULTIPLIER * w.weight_kg
            + (mean_speed_msec.powi(2) / height_m)
                * Self::CALORIES_SPEED_HEIGHT_MULTIPLIER
                * w.weight_kg)
            * (w.duration_h * MIN_IN_H)
    }
}

impl Swimming {
    const CALORIES_MEAN_SPEED_SHIFT: f64 = 1.1;
    const CALORIES_WEIGHT_MULTIPLIER: f64 = 2.0;

    /// Pool laps are the source of truth; stroke count is not used.
    fn pool_distance(&self) -> f64 {
        self.pool_length_m * f64::from(self.pool_count) / M_IN_KM
    }

    fn mean_speed(&self) -> f64 {
        self.pool_length_m * f64::from(self.pool_count) / M_IN_KM / self.workout.duration_h
    }

    fn spent_calories(&self, mean_speed_kmh: f64) -> f64 {
        let w = &self.workout;
        (mean_speed_kmh + Self::CALORIES_MEAN_SPEED_SHIFT)
            * Self::CALORIES_WEIGHT_MULTIPLIER
            * w.weight_kg
            * w.duration_h
    }
}

impl Training {
    pub const fn kind(&self) -> ActivityKind {
        match self {
            Self::Running(_) => ActivityKind::Running,
            Self::SportsWalking(_) => ActivityKind::SportsWalking,
            Self::Swimming(_) => ActivityKind::Swimming,
        }
    }

    pub const fn workout(&self) -> &Workout {
        match self {
            Self::Running(r) => &r.workout,
            Self::SportsWalking(w) => &w.workout,
            Self::Swimming(s) => &s.workout,
        }
    }

    /// Distance covered, in km.
    pub fn distance(&self) -> f64 {
        match self {
            Self::Running(r) => r.workout.step_distance(ActivityKind::Running),
            Self::SportsWalking(w) => w.workout.step_distance(ActivityKind::SportsWalking),
            Self::Swimming(s) => s.pool_distance(),
        }
    }

    /// Mean speed, in km/h.
    pub fn mean_speed(&self) -> f64 {
        match self {
            Self::Swimming(s) => s.mean_speed(),
            Self::Running(_) | Self::SportsWalking(_) => {
                self.distance() / self.workout().duration_h
            }
        }
    }

    /// Calories burned, in kcal.
    pub fn spent_calories(&self) -> f64 {
        let speed = self.mean_speed();
        match self {
            Self::Running(r) => r.spent_calories(speed),
            Self::SportsWalking(w) => w.spent_calories(speed),
            Self::Swimming(s) => s.spent_calories(speed),
        }
    }

    pub fn metrics(&self) -> Metrics {
        Metrics {
            distance_km: self.distance(),
            mean_speed_kmh: self.mean_speed(),
            calories_kcal: self.spent_calories(),
        }
    }

    /// Rejects readings whose metrics overflow, e.g. a subnormal duration
    /// that makes speed infinite.
    pub fn checked(self) -> Result<Self, WorkoutError> {
        let m = self.metrics();
        for (metric, value) in [
            ("distance", m.distance_km),
            ("mean_speed", m.mean_speed_kmh),
            ("calories", m.calories_kcal),
        ] {
            if !value.is_finite() {
                return Err(WorkoutError::NonFiniteMetric { metric, value });
            }
        }
        Ok(self)
    }

    /// Builds the display summary for this session.
    pub fn summary(&self) -> InfoMessage {
        let Metrics {
            distance_km,
            mean_speed_kmh,
            calories_kcal,
        } = self.metrics();

        InfoMessage {
            training_type: self.kind().name(),
            duration: self.workout().duration_h,
            distance: distance_km,
            speed: mean_speed_kmh,
            calories: calories_kcal,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const EPS: f64 = 1e-9;

    fn running(action: u32, duration: f64, weight: f64) -> Training {
        Training::Running(Running::new(Workout::new(action, duration, weight).unwrap()))
    }

    fn walking(action: u32, duration: f64, weight: f64, height: f64) -> Training {
        let w = Workout::new(action, duration, weight).unwrap();
        Training::SportsWalking(SportsWalking::new(w, height).unwrap())
    }

    fn swimming(action: u32, duration: f64, weight: f64, length: f64, count: u32) -> Training {
        let w = Workout::new(action, duration, weight).unwrap();
        Training::Swimming(Swimming::new(w, length, count).unwrap())
    }

    #[test]
    fn running_sample_metrics() {
        let t = running(15000, 1.0, 75.0);
        assert!((t.distance() - 9.75).abs() < EPS);
        assert!((t.mean_speed() - 9.75).abs() < EPS);
        assert!((t.spent_calories() - 797.805).abs() < 1e-6);
    }

    #[test]
    fn running_calories_follow_formula() {
        for (action, duration, weight) in [(1, 0.1, 50.0), (8000, 0.75, 62.5), (42000, 3.5, 90.0)] {
            let t = running(action, duration, weight);
            let expected = (18.0 * t.mean_speed() + 1.79) * weight / 1000.0 * duration * 60.0;
            assert!(
                (t.spent_calories() - expected).abs() < EPS,
                "action={action} duration={duration} weight={weight}"
            );
        }
    }

    #[test]
    fn walking_sample_metrics() {
        let t = walking(9000, 1.0, 75.0, 180.0);
        assert!((t.distance() - 5.85).abs() < EPS);
        assert!((t.mean_speed() - 5.85).abs() < EPS);
        assert!((t.spent_calories() - 349.251_747_525).abs() < 1e-6);
    }

    #[test]
    fn walking_taller_athlete_burns_less() {
        let short = walking(9000, 1.0, 75.0, 160.0);
        let tall = walking(9000, 1.0, 75.0, 200.0);
        assert!(tall.spent_calories() < short.spent_calories());
    }

    #[test]
    fn swimming_uses_pool_geometry() {
        let t = swimming(720, 1.0, 80.0, 25.0, 40);
        assert!((t.distance() - 1.0).abs() < EPS);
        assert!((t.mean_speed() - 1.0).abs() < EPS);
        assert!((t.spent_calories() - 336.0).abs() < EPS);
    }

    #[test]
    fn swimming_mean_speed_ignores_strokes() {
        let few = swimming(10, 2.0, 70.0, 50.0, 30);
        let many = swimming(5000, 2.0, 70.0, 50.0, 30);
        let expected = 50.0 * 30.0 / 1000.0 / 2.0;
        assert!((few.mean_speed() - expected).abs() < EPS);
        assert!((many.mean_speed() - expected).abs() < EPS);
    }

    #[test]
    fn zero_actions_yield_zero_distance() {
        let t = running(0, 1.0, 75.0);
        assert_eq!(t.distance(), 0.0);
        assert_eq!(t.mean_speed(), 0.0);
        // Shift term still applies at rest.
        assert!((t.spent_calories() - 1.79 * 75.0 / 1000.0 * 60.0).abs() < EPS);
    }

    #[test]
    fn checked_passes_finite_metrics() {
        let t = walking(9000, 1.0, 75.0, 180.0);
        assert_eq!(t.checked(), Ok(t));
    }

    #[test]
    fn checked_rejects_subnormal_duration() {
        let t = walking(9000, 1e-320, 75.0, 180.0);
        assert!(t.mean_speed().is_infinite());
        assert_eq!(
            t.checked(),
            Err(WorkoutError::NonFiniteMetric {
                metric: "mean_speed",
                value: f64::INFINITY,
            })
        );
    }

    #[test]
    fn metrics_are_recomputed_each_call() {
        let t = running(15000, 2.0, 75.0);
        assert_eq!(t.metrics(), t.metrics());
        assert!((t.metrics().mean_speed_kmh - 4.875).abs() < EPS);
    }

    #[test]
    fn info_message_carries_kind_name() {
        let info = swimming(720, 1.0, 80.0, 25.0, 40).summary();
        assert_eq!(info.training_type, "Swimming");
        assert_eq!(info.duration, 1.0);
        assert!((info.calories - 336.0).abs() < EPS);
    }

    #[test]
    fn kind_matches_variant() {
        assert_eq!(running(1, 1.0, 1.0).kind(), ActivityKind::Running);
        assert_eq!(walking(1, 1.0, 1.0, 1.0).kind(), ActivityKind::SportsWalking);
        assert_eq!(swimming(1, 1.0, 1.0, 1.0, 1).kind(), ActivityKind::Swimming);
    }
}
