use crate::workout::Workout;
use thiserror::Error;

/// Why a sensor packet could not be turned into a `Workout`.
#[derive(Debug, Error, PartialEq)]
pub enum DispatchError {
    #[error("unknown workout type: {code:?}")]
    UnknownWorkoutType { code: String },

    #[error("{code}: expected {expected} sensor values, got {got}")]
    WrongArgCount {
        code: &'static str,
        expected: usize,
        got: usize,
    },

    #[error("{field} must be a non-negative whole number, got {value}")]
    NotACount { field: &'static str, value: f64 },

    #[error("duration must be positive, got {0} h")]
    NonPositiveDuration(f64),
}

/// Build a workout from a raw sensor packet: an activity code plus a flat,
/// positional argument list.
///
/// Codes are exact and case-sensitive:
/// - `RUN` -> Running(action, duration, weight)
/// - `WLK` -> SportsWalking(action, duration, weight, height)
/// - `SWM` -> Swimming(action, duration, weight, pool_length, lap_count)
pub fn read_package(code: &str, data: &[f64]) -> Result<Workout, DispatchError> {
    match code {
        "RUN" => {
            let [action, duration, weight] = expect_args("RUN", data)?;
            Ok(Workout::Running {
                action: count("action", action)?,
                duration_h: positive_duration(duration)?,
                weight_kg: weight,
            })
        }
        "WLK" => {
            let [action, duration, weight, height] = expect_args("WLK", data)?;
            Ok(Workout::SportsWalking {
                action: count("action", action)?,
                duration_h: positive_duration(duration)?,
                weight_kg: weight,
                height_cm: height,
            })
        }
        "SWM" => {
            let [action, duration, weight, length_pool, count_pool] = expect_args("SWM", data)?;
            Ok(Workout::Swimming {
                action: count("action", action)?,
                duration_h: positive_duration(duration)?,
                weight_kg: weight,
                length_pool_m: length_pool,
                count_pool: count("count_pool", count_pool)?,
            })
        }
        _ => Err(DispatchError::UnknownWorkoutType {
            code: code.to_string(),
        }),
    }
}

fn expect_args<const N: usize>(
    code: &'static str,
    data: &[f64],
) -> Result<[f64; N], DispatchError> {
    <[f64; N]>::try_from(data).map_err(|_| DispatchError::WrongArgCount {
        code,
        expected: N,
        got: data.len(),
    })
}

/// Sensor counts arrive as floats; accept only exact non-negative integers.
#[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
fn count(field: &'static str, value: f64) -> Result<u32, DispatchError> {
    let bad = DispatchError::NotACount { field, value };
    if !value.is_finite() || value.fract() != 0.0 {
        return Err(bad);
    }
    if value < 0.0 || value > f64::from(u32::MAX) {
        return Err(bad);
    }
    Ok(value as u32)
}

fn positive_duration(value: f64) -> Result<f64, DispatchError> {
    // NaN fails the comparison too.
    if value > 0.0 {
        Ok(value)
    } else {
        Err(DispatchError::NonPositiveDuration(value))
    }
}

#[cfg(test)]
mod tests {
    use super::{DispatchError, read_package};
    use crate::workout::Workout;

    #[test]
    fn run_packet_maps_fields_in_order() {
        let w = read_package("RUN", &[15000.0, 1.0, 75.0]).unwrap();
        assert_eq!(
            w,
            Workout::Running {
                action: 15000,
                duration_h: 1.0,
                weight_kg: 75.0,
            }
        );
    }

    #[test]
    fn wlk_packet_maps_fields_in_order() {
        let w = read_package("WLK", &[9000.0, 1.0, 75.0, 180.0]).unwrap();
        assert_eq!(
            w,
            Workout::SportsWalking {
                action: 9000,
                duration_h: 1.0,
                weight_kg: 75.0,
                height_cm: 180.0,
            }
        );
    }

    #[test]
    fn swm_packet_maps_fields_in_order() {
        let w = read_package("SWM", &[720.0, 1.0, 80.0, 25.0, 40.0]).unwrap();
        assert_eq!(
            w,
            Workout::Swimming {
                action: 720,
                duration_h: 1.0,
                weight_kg: 80.0,
                length_pool_m: 25.0,
                count_pool: 40,
            }
        );
    }

    #[test]
    fn unknown_code_is_rejected() {
        let err = read_package("XYZ", &[1.0, 1.0, 1.0]).unwrap_err();
        assert_eq!(
            err,
            DispatchError::UnknownWorkoutType {
                code: "XYZ".to_string()
            }
        );
    }

    #[test]
    fn codes_are_case_sensitive() {
        assert!(matches!(
            read_package("run", &[15000.0, 1.0, 75.0]),
            Err(DispatchError::UnknownWorkoutType { .. })
        ));
    }

    #[test]
    fn wrong_arity_is_rejected() {
        let err = read_package("RUN", &[15000.0, 1.0]).unwrap_err();
        assert_eq!(
            err,
            DispatchError::WrongArgCount {
                code: "RUN",
                expected: 3,
                got: 2,
            }
        );

        let err = read_package("WLK", &[9000.0, 1.0, 75.0, 180.0, 5.0]).unwrap_err();
        assert_eq!(
            err,
            DispatchError::WrongArgCount {
                code: "WLK",
                expected: 4,
                got: 5,
            }
        );
    }

    #[test]
    fn zero_duration_is_rejected() {
        let err = read_package("RUN", &[15000.0, 0.0, 75.0]).unwrap_err();
        assert_eq!(err, DispatchError::NonPositiveDuration(0.0));
    }

    #[test]
    fn fractional_action_is_rejected() {
        let err = read_package("RUN", &[15000.5, 1.0, 75.0]).unwrap_err();
        assert_eq!(
            err,
            DispatchError::NotACount {
                field: "action",
                value: 15000.5,
            }
        );
    }

    #[test]
    fn negative_lap_count_is_rejected() {
        let err = read_package("SWM", &[720.0, 1.0, 80.0, 25.0, -40.0]).unwrap_err();
        assert_eq!(
            err,
            DispatchError::NotACount {
                field: "count_pool",
                value: -40.0,
            }
        );
    }
}
