use std::fmt;

/// Computed summary of one workout, ready to print.
///
/// Built once per report by `Workout::summary`; never mutated afterwards.
#[derive(Debug, Clone, PartialEq)]
pub struct WorkoutSummary {
    pub label: &'static str,
    pub duration_h: f64,
    pub distance_km: f64,
    pub mean_speed_kmh: f64,
    pub calories_kcal: f64,
}

impl fmt::Display for WorkoutSummary {
    /// One fixed-format line, every numeric field at 3 decimal places.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Тип тренировки: {}; \
             Длительность: {:.3} ч.; \
             Дистанция: {:.3} км; \
             Ср. скорость: {:.3} км/ч; \
             Потрачено ккал: {:.3}.",
            self.label, self.duration_h, self.distance_km, self.mean_speed_kmh, self.calories_kcal
        )
    }
}
