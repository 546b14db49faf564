use crate::error::WorkoutError;

/// Closed set of supported activities.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ActivityKind {
    Running,
    SportsWalking,
    Swimming,
}

impl ActivityKind {
    pub const ALL: [Self; 3] = [Self::Running, Self::SportsWalking, Self::Swimming];

    /// Sensor code used in raw packages.
    pub const fn code(self) -> &'static str {
        match self {
            Self::Running => "RUN",
            Self::SportsWalking => "WLK",
            Self::Swimming => "SWM",
        }
    }

    pub const fn name(self) -> &'static str {
        match self {
            Self::Running => "Running",
            Self::SportsWalking => "SportsWalking",
            Self::Swimming => "Swimming",
        }
    }

    /// Meters covered per step or stroke.
    pub const fn step_length_m(self) -> f64 {
        match self {
            Self::Running | Self::SportsWalking => 0.65,
            Self::Swimming => 1.38,
        }
    }

    /// Number of positional raw fields a package of this kind carries.
    pub const fn field_count(self) -> usize {
        match self {
            Self::Running => 3,
            Self::SportsWalking => 4,
            Self::Swimming => 5,
        }
    }
}

/// Readings shared by every activity.
///
/// Construction rejects a non-positive duration, so speed never divides by zero.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Workout {
    pub(crate) action: u32,
    pub(crate) duration_h: f64,
    pub(crate) weight_kg: f64,
}

impl Workout {
    pub fn new(action: u32, duration_h: f64, weight_kg: f64) -> Result<Self, WorkoutError> {
        if !(duration_h.is_finite() && duration_h > 0.0) {
            return Err(WorkoutError::NonPositiveDuration(duration_h));
        }
        Ok(Self {
            action,
            duration_h,
            weight_kg: positive("weight", weight_kg)?,
        })
    }

    /// Steps or strokes taken.
    pub const fn action(&self) -> u32 {
        self.action
    }

    pub const fn duration_h(&self) -> f64 {
        self.duration_h
    }

    pub const fn weight_kg(&self) -> f64 {
        self.weight_kg
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Running {
    pub(crate) workout: Workout,
}

impl Running {
    pub const fn new(workout: Workout) -> Self {
        Self { workout }
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SportsWalking {
    pub(crate) workout: Workout,
    pub(crate) height_cm: f64,
}

impl SportsWalking {
    pub fn new(workout: Workout, height_cm: f64) -> Result<Self, WorkoutError> {
        Ok(Self {
            workout,
            height_cm: positive("height", height_cm)?,
        })
    }

    pub const fn height_cm(&self) -> f64 {
        self.height_cm
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Swimming {
    pub(crate) workout: Workout,
    pub(crate) pool_length_m: f64,
    pub(crate) pool_count: u32,
}

impl Swimming {
    pub fn new(workout: Workout, pool_length_m: f64, pool_count: u32) -> Result<Self, WorkoutError> {
        Ok(Self {
            workout,
            pool_length_m: positive("pool_length", pool_length_m)?,
            pool_count,
        })
    }

    pub const fn pool_length_m(&self) -> f64 {
        self.pool_length_m
    }

    pub const fn pool_count(&self) -> u32 {
        self.pool_count
    }
}

/// One validated workout session, tagged with its activity.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Training {
    Running(Running),
    SportsWalking(SportsWalking),
    Swimming(Swimming),
}

/// Derived values for one session. Recomputed on every request.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Metrics {
    pub distance_km: f64,
    pub mean_speed_kmh: f64,
    pub calories_kcal: f64,
}

pub(crate) fn positive(field: &'static str, value: f64) -> Result<f64, WorkoutError> {
    if value.is_finite() && value > 0.0 {
        Ok(value)
    } else {
        Err(WorkoutError::InvalidField { field, value })
    }
}
