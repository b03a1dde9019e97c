//! Calorie estimation using the MET formula.
//!
//! `kcal = MET x weight(kg) x hours`. Timed exercises use their explicit
//! per-set duration; rep-based exercises assume 3 seconds per repetition.
//! Every function here is total: missing or nonsense inputs fall back to
//! defaults instead of failing, so estimation can never abort a logging or
//! generation path.

use crate::reps::RepNotation;

/// Assumed MET when an exercise has none recorded
pub const DEFAULT_MET: f64 = 5.0;
/// Assumed body weight (kg) when the profile has none
pub const DEFAULT_WEIGHT_KG: f64 = 70.0;
/// Assumed seconds per repetition for rep-based exercises
pub const SECONDS_PER_REP: u32 = 3;

fn sanitize(value: Option<f64>, default: f64) -> f64 {
    match value {
        Some(v) if v.is_finite() && v > 0.0 => v,
        _ => default,
    }
}

/// Estimate calories for a single exercise.
///
/// With `duration_seconds` present the effort is `sets x duration`; otherwise
/// the leading rep count is parsed out of `reps` (defaulting to 10) and each
/// rep counts as 3 seconds.
pub fn exercise_calories(
    met: Option<f64>,
    weight_kg: Option<f64>,
    sets: u32,
    reps: &str,
    duration_seconds: Option<u32>,
) -> f64 {
    let met = sanitize(met, DEFAULT_MET);
    let weight = sanitize(weight_kg, DEFAULT_WEIGHT_KG);

    let total_seconds = match duration_seconds {
        Some(duration) if duration > 0 => u64::from(sets) * u64::from(duration),
        _ => {
            let reps_per_set = RepNotation::parse(reps).leading_rep_count();
            u64::from(sets) * u64::from(reps_per_set) * u64::from(SECONDS_PER_REP)
        }
    };

    let hours = total_seconds as f64 / 3600.0;
    met * weight * hours
}

/// Calories burned per minute at a steady MET, for projections
pub fn calories_per_minute(met: Option<f64>, weight_kg: Option<f64>) -> f64 {
    let met = sanitize(met, DEFAULT_MET);
    let weight = sanitize(weight_kg, DEFAULT_WEIGHT_KG);
    met * weight / 60.0
}

/// Work actually performed on one exercise, as reported by the caller
#[derive(Clone, Debug)]
pub struct ExerciseEffort {
    pub exercise_id: String,
    pub met_value: Option<f64>,
    pub sets: u32,
    pub reps: String,
    pub duration_seconds: Option<u32>,
}

/// Per-exercise and total estimate for a full session
#[derive(Clone, Debug, Default)]
pub struct SessionEstimate {
    /// `(exercise_id, kcal)` in input order
    pub per_exercise: Vec<(String, f64)>,
    pub total: f64,
}

/// Estimate a whole session by summing [`exercise_calories`] over every entry
pub fn session_calories(weight_kg: Option<f64>, entries: &[ExerciseEffort]) -> SessionEstimate {
    let mut estimate = SessionEstimate::default();

    for entry in entries {
        let kcal = exercise_calories(
            entry.met_value,
            weight_kg,
            entry.sets,
            &entry.reps,
            entry.duration_seconds,
        );
        estimate.total += kcal;
        estimate.per_exercise.push((entry.exercise_id.clone(), kcal));
    }

    estimate
}
