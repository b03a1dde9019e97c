//! Adaptive intensity: streak detection and plan-day volume escalation.
//!
//! A qualifying streak is a run of consecutive workout dates ending today.
//! When one is found, every exercise under the target plan day gets one more
//! set and a rep-notation shift, at most once per calendar day per exercise
//! (the `last_adapted` stamp is the guard). Evaluation is pure: it returns
//! the writes the caller must persist alongside the result.

use crate::config::AdaptationConfig;
use crate::reps::format_reps;
use crate::types::{AdaptationResult, Adjustment, PlanExercise, VolumeWrite};
use chrono::NaiveDate;
use std::collections::BTreeSet;

/// Length of the consecutive run of distinct dates ending exactly on `today`.
///
/// Input order does not matter; dates are deduplicated internally. A most
/// recent date other than today yields 0, so a streak computed from stale
/// history is never honored later.
pub fn streak_run(today: NaiveDate, dates: &[NaiveDate]) -> u32 {
    let distinct: BTreeSet<NaiveDate> = dates.iter().copied().collect();
    let mut descending = distinct.into_iter().rev();

    match descending.next() {
        Some(most_recent) if most_recent == today => {}
        _ => return 0,
    }

    let mut run = 1u32;
    let mut previous = today;
    for date in descending {
        if (previous - date).num_days() == 1 {
            run += 1;
            previous = date;
        } else {
            break;
        }
    }
    run
}

/// Evaluate a streak and, when it qualifies, propose volume writes for the
/// given plan day's exercises.
///
/// Exercises already stamped with today's date are skipped; when all of them
/// are, the result reports `already_adapted`. Proposed writes are
/// independent per exercise, so a caller that fails to persist one can still
/// apply the rest.
pub fn evaluate(
    today: NaiveDate,
    session_dates: &[NaiveDate],
    plan_exercises: &[PlanExercise],
    config: &AdaptationConfig,
) -> (AdaptationResult, Vec<VolumeWrite>) {
    let required = config.streak_required;
    let run = streak_run(today, session_dates);

    let mut result = AdaptationResult {
        has_streak: run >= required,
        streak_days: run,
        days_needed: required.saturating_sub(run),
        ..AdaptationResult::default()
    };

    if !result.has_streak {
        tracing::debug!(
            "No qualifying streak: {}/{} consecutive days",
            run,
            required
        );
        return (result, Vec::new());
    }

    let mut writes = Vec::new();
    for exercise in plan_exercises {
        if exercise.last_adapted == Some(today) {
            continue;
        }

        let new_sets = exercise.sets + config.set_increase;
        let new_reps = format_reps(&exercise.reps, config.rep_increase);

        result.adjustments.push(Adjustment {
            exercise_id: exercise.exercise_id.clone(),
            old_sets: exercise.sets,
            new_sets,
            old_reps: exercise.reps.clone(),
            new_reps: new_reps.clone(),
        });
        writes.push(VolumeWrite {
            exercise_id: exercise.exercise_id.clone(),
            sets: new_sets,
            reps: new_reps,
            last_adapted: today,
        });
    }

    if writes.is_empty() && !plan_exercises.is_empty() {
        result.already_adapted = true;
        tracing::info!("Streak confirmed but day already adapted on {}", today);
    } else {
        tracing::info!(
            "Streak of {} days confirmed, {} exercises to adjust",
            run,
            writes.len()
        );
    }

    (result, writes)
}

/// Apply persisted volume writes to a day's exercises, matching by id.
///
/// Writes with no matching exercise are skipped; the returned count reflects
/// only the exercises actually updated.
pub fn apply_writes(exercises: &mut [PlanExercise], writes: &[VolumeWrite]) -> usize {
    let mut applied = 0;
    for write in writes {
        match exercises
            .iter_mut()
            .find(|e| e.exercise_id == write.exercise_id)
        {
            Some(exercise) => {
                exercise.sets = write.sets;
                exercise.reps = write.reps.clone();
                exercise.last_adapted = Some(write.last_adapted);
                applied += 1;
            }
            None => {
                tracing::warn!(
                    "Adaptation write for unknown exercise '{}' skipped",
                    write.exercise_id
                );
            }
        }
    }
    applied
}
