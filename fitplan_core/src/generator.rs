//! Weekly plan generation.
//!
//! Builds a complete 7-day schedule from a profile and an exercise pool:
//! the goal's template decides which three weekdays are workout days, the
//! preferred session duration decides how many exercises each gets, and the
//! activity level drives both selection difficulty and the sets/reps volume
//! table. One exclusion set spans the whole week, so no exercise repeats.

use crate::calories::exercise_calories;
use crate::reps::RepNotation;
use crate::selector::select_exercises;
use crate::templates::template_for_goal;
use crate::types::*;
use rand::Rng;
use std::collections::HashSet;

/// Sets and reps adjustment for a difficulty tier
#[derive(Clone, Copy, Debug)]
pub struct VolumeOverride {
    pub sets: u32,
    pub reps_multiplier: f64,
}

/// Difficulty-to-volume table
pub fn volume_for(difficulty: Difficulty) -> VolumeOverride {
    match difficulty {
        Difficulty::Beginner => VolumeOverride {
            sets: 2,
            reps_multiplier: 0.8,
        },
        Difficulty::Intermediate => VolumeOverride {
            sets: 3,
            reps_multiplier: 1.0,
        },
        Difficulty::Advanced => VolumeOverride {
            sets: 4,
            reps_multiplier: 1.2,
        },
    }
}

/// Exercises per session as a step function of preferred duration (minutes)
pub fn exercises_per_day(workout_duration: u32) -> usize {
    if workout_duration <= 20 {
        3
    } else if workout_duration <= 30 {
        4
    } else if workout_duration <= 45 {
        5
    } else {
        6
    }
}

const REST_FOCUS: &str = "Rest & Recovery";

/// Generate a full 7-day plan for a profile.
///
/// An empty pool yields a plan whose workout days have empty exercise
/// lists, not an error. Selection is randomized through `rng`; pass a
/// seeded RNG for reproducible output.
pub fn generate_plan<R: Rng>(profile: &Profile, pool: &[Exercise], rng: &mut R) -> GeneratedPlan {
    let template = template_for_goal(profile.fitness_goal);
    let count = exercises_per_day(profile.workout_duration);
    let volume = volume_for(profile.activity_level);

    tracing::info!(
        "Generating '{}' for {} ({} exercises/day at {} level)",
        template.plan_name,
        profile.fitness_goal,
        count,
        profile.activity_level
    );

    let mut excluded: HashSet<String> = HashSet::new();
    let mut projected = 0.0;
    let mut days = Vec::with_capacity(Weekday::ALL.len());

    for day in Weekday::ALL {
        let Some(slot) = template.slot(day) else {
            days.push(PlanDay {
                day,
                order_index: day.order_index(),
                is_rest_day: true,
                focus: REST_FOCUS.into(),
                exercises: Vec::new(),
            });
            continue;
        };

        let (chosen, rest) = select_exercises(
            pool,
            slot.muscle_groups,
            profile.activity_level,
            count,
            excluded,
            rng,
        );
        excluded = rest;

        if chosen.len() < count {
            tracing::warn!(
                "{} '{}' filled {}/{} slots",
                day,
                slot.focus,
                chosen.len(),
                count
            );
        }

        let exercises: Vec<PlanExercise> = chosen
            .iter()
            .enumerate()
            .map(|(i, exercise)| {
                let reps = RepNotation::parse(&exercise.default_reps)
                    .scale(volume.reps_multiplier)
                    .to_string();

                projected += exercise_calories(
                    Some(exercise.met_value),
                    Some(profile.weight_kg),
                    volume.sets,
                    &reps,
                    exercise.duration_seconds,
                );

                PlanExercise {
                    exercise_id: exercise.id.clone(),
                    order_index: i,
                    sets: volume.sets,
                    reps,
                    duration_seconds: exercise.duration_seconds,
                    last_adapted: None,
                }
            })
            .collect();

        days.push(PlanDay {
            day,
            order_index: day.order_index(),
            is_rest_day: false,
            focus: slot.focus.into(),
            exercises,
        });
    }

    GeneratedPlan {
        name: template.plan_name.into(),
        goal: profile.fitness_goal,
        projected_weekly_calories: projected.round().max(0.0) as u32,
        days,
    }
}
