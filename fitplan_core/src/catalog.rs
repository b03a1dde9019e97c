//! Built-in exercise catalog.
//!
//! This module provides the reference exercises the planner draws from.
//! Exercises are immutable reference data; the rest of the system consumes
//! them through the `&[Exercise]` pool boundary so an external catalog can
//! be substituted.

use crate::types::*;
use once_cell::sync::Lazy;
use std::collections::HashMap;

/// Cached default catalog - built once and reused across all operations
static DEFAULT_CATALOG: Lazy<Catalog> = Lazy::new(build_default_catalog_internal);

/// Get a reference to the cached default catalog
pub fn get_default_catalog() -> &'static Catalog {
    &DEFAULT_CATALOG
}

/// Builds the default exercise catalog
///
/// **Note**: For production use, prefer `get_default_catalog()` which returns
/// a cached reference. This function is retained for testing and custom
/// catalog creation.
pub fn build_default_catalog() -> Catalog {
    build_default_catalog_internal()
}

struct Entry {
    id: &'static str,
    name: &'static str,
    muscle_group: MuscleGroup,
    difficulty: Difficulty,
    default_reps: &'static str,
    duration_seconds: Option<u32>,
    met_value: f64,
    tags: &'static [&'static str],
}

const ENTRIES: &[Entry] = &[
    // ========================================================================
    // Chest
    // ========================================================================
    Entry {
        id: "pushup",
        name: "Push-up",
        muscle_group: MuscleGroup::Chest,
        difficulty: Difficulty::Beginner,
        default_reps: "8-12",
        duration_seconds: None,
        met_value: 3.8,
        tags: &["push", "bodyweight", "upper-body"],
    },
    Entry {
        id: "incline_pushup",
        name: "Incline Push-up",
        muscle_group: MuscleGroup::Chest,
        difficulty: Difficulty::Beginner,
        default_reps: "10-15",
        duration_seconds: None,
        met_value: 3.5,
        tags: &["push", "bodyweight"],
    },
    Entry {
        id: "dumbbell_bench_press",
        name: "Dumbbell Bench Press",
        muscle_group: MuscleGroup::Chest,
        difficulty: Difficulty::Intermediate,
        default_reps: "8-12",
        duration_seconds: None,
        met_value: 5.0,
        tags: &["push", "dumbbell", "upper-body"],
    },
    Entry {
        id: "weighted_dip",
        name: "Weighted Dip",
        muscle_group: MuscleGroup::Chest,
        difficulty: Difficulty::Advanced,
        default_reps: "6-10",
        duration_seconds: None,
        met_value: 6.0,
        tags: &["push", "weighted"],
    },
    // ========================================================================
    // Back
    // ========================================================================
    Entry {
        id: "band_row",
        name: "Resistance Band Row",
        muscle_group: MuscleGroup::Back,
        difficulty: Difficulty::Beginner,
        default_reps: "12-15",
        duration_seconds: None,
        met_value: 3.5,
        tags: &["pull", "band"],
    },
    Entry {
        id: "superman_hold",
        name: "Superman Hold",
        muscle_group: MuscleGroup::Back,
        difficulty: Difficulty::Beginner,
        default_reps: "count: 20s hold",
        duration_seconds: Some(20),
        met_value: 2.5,
        tags: &["isometric", "bodyweight", "warmup"],
    },
    Entry {
        id: "dumbbell_row",
        name: "One-arm Dumbbell Row",
        muscle_group: MuscleGroup::Back,
        difficulty: Difficulty::Intermediate,
        default_reps: "10 each side",
        duration_seconds: None,
        met_value: 5.0,
        tags: &["pull", "dumbbell"],
    },
    Entry {
        id: "pullup",
        name: "Pull-up",
        muscle_group: MuscleGroup::Back,
        difficulty: Difficulty::Advanced,
        default_reps: "5-8",
        duration_seconds: None,
        met_value: 8.0,
        tags: &["pull", "bodyweight", "upper-body"],
    },
    // ========================================================================
    // Shoulders
    // ========================================================================
    Entry {
        id: "lateral_raise",
        name: "Lateral Raise",
        muscle_group: MuscleGroup::Shoulders,
        difficulty: Difficulty::Beginner,
        default_reps: "12-15",
        duration_seconds: None,
        met_value: 3.0,
        tags: &["dumbbell", "isolation"],
    },
    Entry {
        id: "pike_pushup",
        name: "Pike Push-up",
        muscle_group: MuscleGroup::Shoulders,
        difficulty: Difficulty::Intermediate,
        default_reps: "8-12",
        duration_seconds: None,
        met_value: 4.5,
        tags: &["push", "bodyweight"],
    },
    Entry {
        id: "overhead_press",
        name: "Overhead Press",
        muscle_group: MuscleGroup::Shoulders,
        difficulty: Difficulty::Intermediate,
        default_reps: "8-10",
        duration_seconds: None,
        met_value: 5.0,
        tags: &["push", "dumbbell"],
    },
    Entry {
        id: "handstand_pushup",
        name: "Handstand Push-up",
        muscle_group: MuscleGroup::Shoulders,
        difficulty: Difficulty::Advanced,
        default_reps: "5-8",
        duration_seconds: None,
        met_value: 7.0,
        tags: &["push", "bodyweight", "balance"],
    },
    // ========================================================================
    // Arms
    // ========================================================================
    Entry {
        id: "bicep_curl",
        name: "Bicep Curl",
        muscle_group: MuscleGroup::Arms,
        difficulty: Difficulty::Beginner,
        default_reps: "10-12",
        duration_seconds: None,
        met_value: 3.0,
        tags: &["pull", "dumbbell", "isolation"],
    },
    Entry {
        id: "tricep_dip",
        name: "Bench Tricep Dip",
        muscle_group: MuscleGroup::Arms,
        difficulty: Difficulty::Intermediate,
        default_reps: "10-12",
        duration_seconds: None,
        met_value: 4.5,
        tags: &["push", "bodyweight"],
    },
    Entry {
        id: "hammer_curl",
        name: "Hammer Curl",
        muscle_group: MuscleGroup::Arms,
        difficulty: Difficulty::Intermediate,
        default_reps: "10-12",
        duration_seconds: None,
        met_value: 3.5,
        tags: &["pull", "dumbbell", "isolation"],
    },
    Entry {
        id: "close_grip_pushup",
        name: "Close-grip Push-up",
        muscle_group: MuscleGroup::Arms,
        difficulty: Difficulty::Advanced,
        default_reps: "8-12",
        duration_seconds: None,
        met_value: 4.5,
        tags: &["push", "bodyweight"],
    },
    // ========================================================================
    // Legs
    // ========================================================================
    Entry {
        id: "bodyweight_squat",
        name: "Bodyweight Squat",
        muscle_group: MuscleGroup::Legs,
        difficulty: Difficulty::Beginner,
        default_reps: "12-15",
        duration_seconds: None,
        met_value: 5.0,
        tags: &["squat", "bodyweight", "lower-body"],
    },
    Entry {
        id: "walking_lunge",
        name: "Walking Lunge",
        muscle_group: MuscleGroup::Legs,
        difficulty: Difficulty::Intermediate,
        default_reps: "10 each leg",
        duration_seconds: None,
        met_value: 6.0,
        tags: &["lunge", "bodyweight", "lower-body"],
    },
    Entry {
        id: "goblet_squat",
        name: "Goblet Squat",
        muscle_group: MuscleGroup::Legs,
        difficulty: Difficulty::Intermediate,
        default_reps: "8-12",
        duration_seconds: None,
        met_value: 6.0,
        tags: &["squat", "dumbbell", "lower-body"],
    },
    Entry {
        id: "bulgarian_split_squat",
        name: "Bulgarian Split Squat",
        muscle_group: MuscleGroup::Legs,
        difficulty: Difficulty::Advanced,
        default_reps: "8 each leg",
        duration_seconds: None,
        met_value: 7.0,
        tags: &["lunge", "unilateral", "lower-body"],
    },
    Entry {
        id: "jump_squat",
        name: "Jump Squat",
        muscle_group: MuscleGroup::Legs,
        difficulty: Difficulty::Advanced,
        default_reps: "10-12",
        duration_seconds: None,
        met_value: 8.0,
        tags: &["squat", "explosive", "hiit"],
    },
    // ========================================================================
    // Glutes
    // ========================================================================
    Entry {
        id: "glute_bridge",
        name: "Glute Bridge",
        muscle_group: MuscleGroup::Glutes,
        difficulty: Difficulty::Beginner,
        default_reps: "12-15",
        duration_seconds: None,
        met_value: 3.5,
        tags: &["hinge", "bodyweight", "lower-body"],
    },
    Entry {
        id: "curtsy_lunge",
        name: "Curtsy Lunge",
        muscle_group: MuscleGroup::Glutes,
        difficulty: Difficulty::Beginner,
        default_reps: "10 each leg",
        duration_seconds: None,
        met_value: 4.5,
        tags: &["lunge", "bodyweight"],
    },
    Entry {
        id: "single_leg_bridge",
        name: "Single-leg Glute Bridge",
        muscle_group: MuscleGroup::Glutes,
        difficulty: Difficulty::Intermediate,
        default_reps: "10 each side",
        duration_seconds: None,
        met_value: 4.0,
        tags: &["hinge", "unilateral"],
    },
    Entry {
        id: "hip_thrust",
        name: "Hip Thrust",
        muscle_group: MuscleGroup::Glutes,
        difficulty: Difficulty::Intermediate,
        default_reps: "10-12",
        duration_seconds: None,
        met_value: 5.0,
        tags: &["hinge", "weighted", "lower-body"],
    },
    // ========================================================================
    // Core
    // ========================================================================
    Entry {
        id: "plank",
        name: "Plank",
        muscle_group: MuscleGroup::Core,
        difficulty: Difficulty::Beginner,
        default_reps: "count: 30s hold",
        duration_seconds: Some(30),
        met_value: 3.0,
        tags: &["isometric", "abs", "stability"],
    },
    Entry {
        id: "crunch",
        name: "Crunch",
        muscle_group: MuscleGroup::Core,
        difficulty: Difficulty::Beginner,
        default_reps: "15-20",
        duration_seconds: None,
        met_value: 3.0,
        tags: &["abs", "bodyweight"],
    },
    Entry {
        id: "russian_twist",
        name: "Russian Twist",
        muscle_group: MuscleGroup::Core,
        difficulty: Difficulty::Intermediate,
        default_reps: "12 each side",
        duration_seconds: None,
        met_value: 4.0,
        tags: &["abs", "rotation"],
    },
    Entry {
        id: "side_plank",
        name: "Side Plank",
        muscle_group: MuscleGroup::Core,
        difficulty: Difficulty::Intermediate,
        default_reps: "count: 20s each side",
        duration_seconds: Some(20),
        met_value: 3.0,
        tags: &["isometric", "abs", "stability"],
    },
    Entry {
        id: "hanging_leg_raise",
        name: "Hanging Leg Raise",
        muscle_group: MuscleGroup::Core,
        difficulty: Difficulty::Advanced,
        default_reps: "8-12",
        duration_seconds: None,
        met_value: 5.0,
        tags: &["abs", "bodyweight"],
    },
    // ========================================================================
    // Full body
    // ========================================================================
    Entry {
        id: "mountain_climber",
        name: "Mountain Climber",
        muscle_group: MuscleGroup::FullBody,
        difficulty: Difficulty::Beginner,
        default_reps: "12 each side",
        duration_seconds: None,
        met_value: 8.0,
        tags: &["cardio", "hiit", "bodyweight"],
    },
    Entry {
        id: "bear_crawl",
        name: "Bear Crawl",
        muscle_group: MuscleGroup::FullBody,
        difficulty: Difficulty::Intermediate,
        default_reps: "count: 30s",
        duration_seconds: Some(30),
        met_value: 6.0,
        tags: &["crawl", "stability"],
    },
    Entry {
        id: "burpee",
        name: "Burpee",
        muscle_group: MuscleGroup::FullBody,
        difficulty: Difficulty::Intermediate,
        default_reps: "8-12",
        duration_seconds: None,
        met_value: 8.0,
        tags: &["hiit", "explosive", "bodyweight"],
    },
    Entry {
        id: "thruster",
        name: "Dumbbell Thruster",
        muscle_group: MuscleGroup::FullBody,
        difficulty: Difficulty::Advanced,
        default_reps: "8-10",
        duration_seconds: None,
        met_value: 9.0,
        tags: &["hiit", "dumbbell", "explosive"],
    },
    // ========================================================================
    // Cardio
    // ========================================================================
    Entry {
        id: "jumping_jack",
        name: "Jumping Jack",
        muscle_group: MuscleGroup::Cardio,
        difficulty: Difficulty::Beginner,
        default_reps: "20-30",
        duration_seconds: None,
        met_value: 7.0,
        tags: &["cardio", "warmup"],
    },
    Entry {
        id: "high_knees",
        name: "High Knees",
        muscle_group: MuscleGroup::Cardio,
        difficulty: Difficulty::Beginner,
        default_reps: "count: 30s",
        duration_seconds: Some(30),
        met_value: 8.0,
        tags: &["cardio", "hiit"],
    },
    Entry {
        id: "skater_hop",
        name: "Skater Hop",
        muscle_group: MuscleGroup::Cardio,
        difficulty: Difficulty::Intermediate,
        default_reps: "10 each side",
        duration_seconds: None,
        met_value: 7.0,
        tags: &["cardio", "lateral", "explosive"],
    },
    Entry {
        id: "sprint_interval",
        name: "Sprint Interval",
        muscle_group: MuscleGroup::Cardio,
        difficulty: Difficulty::Advanced,
        default_reps: "count: 20s",
        duration_seconds: Some(20),
        met_value: 10.0,
        tags: &["cardio", "hiit", "explosive"],
    },
];

fn build_default_catalog_internal() -> Catalog {
    let mut exercises = HashMap::new();

    for e in ENTRIES {
        exercises.insert(
            e.id.to_string(),
            Exercise {
                id: e.id.into(),
                name: e.name.into(),
                muscle_group: e.muscle_group,
                difficulty: e.difficulty,
                default_reps: e.default_reps.into(),
                duration_seconds: e.duration_seconds,
                met_value: e.met_value,
                tags: e.tags.iter().map(|t| (*t).into()).collect(),
            },
        );
    }

    Catalog { exercises }
}

impl Catalog {
    /// All exercises as an owned pool, the boundary the planner consumes
    pub fn pool(&self) -> Vec<Exercise> {
        self.exercises.values().cloned().collect()
    }

    /// Validate the catalog for consistency and completeness
    ///
    /// Returns a list of validation errors, or empty Vec if valid.
    pub fn validate(&self) -> Vec<String> {
        let mut errors = Vec::new();

        for (id, exercise) in &self.exercises {
            if id.is_empty() || exercise.id.is_empty() {
                errors.push("Exercise has empty ID".to_string());
            }
            if id != &exercise.id {
                errors.push(format!(
                    "Exercise key '{}' doesn't match exercise.id '{}'",
                    id, exercise.id
                ));
            }
            if exercise.name.is_empty() {
                errors.push(format!("Exercise '{}' has empty name", id));
            }
            if !(exercise.met_value.is_finite() && exercise.met_value > 0.0) {
                errors.push(format!(
                    "Exercise '{}' has non-positive MET value {}",
                    id, exercise.met_value
                ));
            }
            if exercise.default_reps.trim().is_empty() {
                errors.push(format!("Exercise '{}' has empty rep notation", id));
            }
            if let Some(duration) = exercise.duration_seconds {
                if duration == 0 {
                    errors.push(format!("Exercise '{}' has zero duration", id));
                }
            }
        }

        // Every muscle group needs at least one exercise so no template
        // slot can come up completely empty
        for group in MuscleGroup::ALL {
            if !self.exercises.values().any(|e| e.muscle_group == group) {
                errors.push(format!("Catalog has no exercises for {}", group));
            }
        }

        errors
    }
}
