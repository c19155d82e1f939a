use crate::types::WorkoutSummary;

const M_IN_KM: f64 = 1000.0;
const MIN_IN_H: f64 = 60.0;

/// Distance covered per step, in meters.
const STEP_LEN_M: f64 = 0.65;
/// Distance covered per swim stroke, in meters.
const STROKE_LEN_M: f64 = 1.38;

// Calorie constants stay per-variant even where values repeat across
// activities; each formula is tuned independently.
const RUN_SPEED_MULTIPLIER: f64 = 18.0;
const RUN_SPEED_SHIFT: f64 = 1.79;

const WLK_WEIGHT_MULTIPLIER: f64 = 0.035;
const WLK_SPEED_HEIGHT_MULTIPLIER: f64 = 0.029;
const KMH_TO_MS: f64 = 0.278;
const CM_IN_M: f64 = 100.0;

const SWM_SPEED_SHIFT: f64 = 1.1;
const SWM_WEIGHT_MULTIPLIER: f64 = 2.0;

/// One recorded workout with its raw sensor inputs.
///
/// `action` is the generic sensor unit count: steps for running and
/// race-walking, strokes for swimming.
#[derive(Debug, Clone, PartialEq)]
pub enum Workout {
    Running {
        action: u32,
        duration_h: f64,
        weight_kg: f64,
    },
    SportsWalking {
        action: u32,
        duration_h: f64,
        weight_kg: f64,
        height_cm: f64,
    },
    Swimming {
        action: u32,
        duration_h: f64,
        weight_kg: f64,
        length_pool_m: f64,
        count_pool: u32,
    },
}

impl Workout {
    pub fn label(&self) -> &'static str {
        match self {
            Self::Running { .. } => "Running",
            Self::SportsWalking { .. } => "SportsWalking",
            Self::Swimming { .. } => "Swimming",
        }
    }

    pub fn duration_h(&self) -> f64 {
        match self {
            Self::Running { duration_h, .. }
            | Self::SportsWalking { duration_h, .. }
            | Self::Swimming { duration_h, .. } => *duration_h,
        }
    }

    fn action(&self) -> u32 {
        match self {
            Self::Running { action, .. }
            | Self::SportsWalking { action, .. }
            | Self::Swimming { action, .. } => *action,
        }
    }

    fn weight_kg(&self) -> f64 {
        match self {
            Self::Running { weight_kg, .. }
            | Self::SportsWalking { weight_kg, .. }
            | Self::Swimming { weight_kg, .. } => *weight_kg,
        }
    }

    /// Distance in km: action count times the per-action stride length.
    pub fn distance_km(&self) -> f64 {
        let step_m = match self {
            Self::Swimming { .. } => STROKE_LEN_M,
            Self::Running { .. } | Self::SportsWalking { .. } => STEP_LEN_M,
        };
        f64::from(self.action()) * step_m / M_IN_KM
    }

    /// Mean speed in km/h over the whole workout.
    ///
    /// Swimming derives speed from pool geometry, not from stroke count.
    pub fn mean_speed_kmh(&self) -> f64 {
        match self {
            Self::Swimming {
                duration_h,
                length_pool_m,
                count_pool,
                ..
            } => length_pool_m * f64::from(*count_pool) / M_IN_KM / duration_h,
            Self::Running { .. } | Self::SportsWalking { .. } => {
                self.distance_km() / self.duration_h()
            }
        }
    }

    /// Calories burned, one formula per activity.
    pub fn spent_calories_kcal(&self) -> f64 {
        match self {
            Self::Running {
                duration_h,
                weight_kg,
                ..
            } => {
                (RUN_SPEED_MULTIPLIER * self.mean_speed_kmh() + RUN_SPEED_SHIFT)
                    * (weight_kg / M_IN_KM * duration_h * MIN_IN_H)
            }
            Self::SportsWalking {
                duration_h,
                weight_kg,
                height_cm,
                ..
            } => {
                let speed_ms = self.mean_speed_kmh() * KMH_TO_MS;
                let speed_height = speed_ms.powi(2) / (height_cm / CM_IN_M);
                (WLK_WEIGHT_MULTIPLIER * weight_kg
                    + speed_height * WLK_SPEED_HEIGHT_MULTIPLIER * weight_kg)
                    * duration_h
                    * MIN_IN_H
            }
            Self::Swimming {
                duration_h,
                weight_kg,
                ..
            } => {
                (self.mean_speed_kmh() + SWM_SPEED_SHIFT)
                    * SWM_WEIGHT_MULTIPLIER
                    * weight_kg
                    * duration_h
            }
        }
    }

    /// Assemble the printable summary for this workout.
    pub fn summary(&self) -> WorkoutSummary {
        WorkoutSummary {
            label: self.label(),
            duration_h: self.duration_h(),
            distance_km: self.distance_km(),
            mean_speed_kmh: self.mean_speed_kmh(),
            calories_kcal: self.spent_calories_kcal(),
        }
    }
}
