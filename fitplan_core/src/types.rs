//! Core domain types for the fitplan system.
//!
//! This module defines the fundamental types used throughout the system:
//! - Exercises and their classification (muscle group, difficulty)
//! - User profiles and fitness goals
//! - Generated weekly plans and their day/exercise entries
//! - Completed workout sessions
//! - Intensity adaptation results

use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::fmt;
use uuid::Uuid;

// ============================================================================
// Exercise Types
// ============================================================================

/// Muscle group targeted by an exercise
#[derive(Clone, Copy, Debug, Serialize, Deserialize, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[serde(rename_all = "snake_case")]
pub enum MuscleGroup {
    Chest,
    Back,
    Shoulders,
    Arms,
    Legs,
    Glutes,
    Core,
    FullBody,
    Cardio,
}

impl MuscleGroup {
    /// All muscle groups, in catalog display order
    pub const ALL: [MuscleGroup; 9] = [
        MuscleGroup::Chest,
        MuscleGroup::Back,
        MuscleGroup::Shoulders,
        MuscleGroup::Arms,
        MuscleGroup::Legs,
        MuscleGroup::Glutes,
        MuscleGroup::Core,
        MuscleGroup::FullBody,
        MuscleGroup::Cardio,
    ];

    pub fn parse(s: &str) -> Option<Self> {
        match s.to_lowercase().as_str() {
            "chest" => Some(Self::Chest),
            "back" => Some(Self::Back),
            "shoulders" => Some(Self::Shoulders),
            "arms" => Some(Self::Arms),
            "legs" => Some(Self::Legs),
            "glutes" => Some(Self::Glutes),
            "core" => Some(Self::Core),
            "full_body" | "fullbody" => Some(Self::FullBody),
            "cardio" => Some(Self::Cardio),
            _ => None,
        }
    }
}

impl fmt::Display for MuscleGroup {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            Self::Chest => "chest",
            Self::Back => "back",
            Self::Shoulders => "shoulders",
            Self::Arms => "arms",
            Self::Legs => "legs",
            Self::Glutes => "glutes",
            Self::Core => "core",
            Self::FullBody => "full_body",
            Self::Cardio => "cardio",
        };
        f.write_str(s)
    }
}

/// Exercise difficulty tier, also used as the user's activity level
#[derive(Clone, Copy, Debug, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "snake_case")]
pub enum Difficulty {
    Beginner,
    Intermediate,
    Advanced,
}

impl Difficulty {
    pub fn parse(s: &str) -> Option<Self> {
        match s.to_lowercase().as_str() {
            "beginner" => Some(Self::Beginner),
            "intermediate" => Some(Self::Intermediate),
            "advanced" => Some(Self::Advanced),
            _ => None,
        }
    }
}

impl fmt::Display for Difficulty {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            Self::Beginner => "beginner",
            Self::Intermediate => "intermediate",
            Self::Advanced => "advanced",
        };
        f.write_str(s)
    }
}

/// An exercise definition (e.g., "Push-up")
///
/// Immutable reference data owned by the catalog.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct Exercise {
    pub id: String,
    pub name: String,
    pub muscle_group: MuscleGroup,
    pub difficulty: Difficulty,
    /// Default rep notation, e.g. `"8-12"`, `"10 each leg"`, `"count: 30s hold"`
    pub default_reps: String,
    /// Fixed per-set duration for timed exercises (plank holds etc.)
    pub duration_seconds: Option<u32>,
    /// Metabolic equivalent used for calorie estimation
    pub met_value: f64,
    pub tags: Vec<String>,
}

/// The complete catalog of exercises, keyed by exercise id
#[derive(Clone, Debug)]
pub struct Catalog {
    pub exercises: HashMap<String, Exercise>,
}

// ============================================================================
// Profile Types
// ============================================================================

/// Fitness goal driving template selection
#[derive(Clone, Copy, Debug, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "snake_case")]
pub enum FitnessGoal {
    WeightLoss,
    MuscleGain,
    Flexibility,
    GeneralFitness,
}

impl FitnessGoal {
    pub fn parse(s: &str) -> Option<Self> {
        match s.to_lowercase().as_str() {
            "weight_loss" | "weightloss" => Some(Self::WeightLoss),
            "muscle_gain" | "musclegain" => Some(Self::MuscleGain),
            "flexibility" => Some(Self::Flexibility),
            "general_fitness" | "generalfitness" | "general" => Some(Self::GeneralFitness),
            _ => None,
        }
    }
}

impl fmt::Display for FitnessGoal {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            Self::WeightLoss => "weight_loss",
            Self::MuscleGain => "muscle_gain",
            Self::Flexibility => "flexibility",
            Self::GeneralFitness => "general_fitness",
        };
        f.write_str(s)
    }
}

fn default_goal() -> FitnessGoal {
    FitnessGoal::GeneralFitness
}

fn default_activity_level() -> Difficulty {
    Difficulty::Beginner
}

/// A user's physiological profile and preferences
///
/// Read-only input to the planning core; mutated only by profile management.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct Profile {
    pub weight_kg: f64,
    pub height_cm: f64,
    #[serde(default = "default_goal")]
    pub fitness_goal: FitnessGoal,
    #[serde(default = "default_activity_level")]
    pub activity_level: Difficulty,
    /// Preferred session length in minutes
    pub workout_duration: u32,
}

// ============================================================================
// Weekday
// ============================================================================

/// Day of the week; `order_index` encodes Monday=0 .. Sunday=6
#[derive(Clone, Copy, Debug, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "snake_case")]
pub enum Weekday {
    Monday,
    Tuesday,
    Wednesday,
    Thursday,
    Friday,
    Saturday,
    Sunday,
}

impl Weekday {
    /// All seven days in plan order
    pub const ALL: [Weekday; 7] = [
        Weekday::Monday,
        Weekday::Tuesday,
        Weekday::Wednesday,
        Weekday::Thursday,
        Weekday::Friday,
        Weekday::Saturday,
        Weekday::Sunday,
    ];

    pub fn order_index(self) -> usize {
        match self {
            Self::Monday => 0,
            Self::Tuesday => 1,
            Self::Wednesday => 2,
            Self::Thursday => 3,
            Self::Friday => 4,
            Self::Saturday => 5,
            Self::Sunday => 6,
        }
    }

    pub fn parse(s: &str) -> Option<Self> {
        match s.to_lowercase().as_str() {
            "monday" | "mon" => Some(Self::Monday),
            "tuesday" | "tue" => Some(Self::Tuesday),
            "wednesday" | "wed" => Some(Self::Wednesday),
            "thursday" | "thu" => Some(Self::Thursday),
            "friday" | "fri" => Some(Self::Friday),
            "saturday" | "sat" => Some(Self::Saturday),
            "sunday" | "sun" => Some(Self::Sunday),
            _ => None,
        }
    }
}

impl fmt::Display for Weekday {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            Self::Monday => "monday",
            Self::Tuesday => "tuesday",
            Self::Wednesday => "wednesday",
            Self::Thursday => "thursday",
            Self::Friday => "friday",
            Self::Saturday => "saturday",
            Self::Sunday => "sunday",
        };
        f.write_str(s)
    }
}

// ============================================================================
// Generated Plan Types
// ============================================================================

/// A concrete exercise slot inside a plan day
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct PlanExercise {
    pub exercise_id: String,
    pub order_index: usize,
    pub sets: u32,
    /// Rep notation string, e.g. `"8-12"` or `"count: 30s hold"`
    pub reps: String,
    pub duration_seconds: Option<u32>,
    /// Calendar date of the most recent intensity adaptation.
    /// Blocks a second adaptation on the same day.
    pub last_adapted: Option<NaiveDate>,
}

/// One day of a generated plan
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct PlanDay {
    pub day: Weekday,
    pub order_index: usize,
    pub is_rest_day: bool,
    pub focus: String,
    pub exercises: Vec<PlanExercise>,
}

/// A complete 7-day workout plan
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct GeneratedPlan {
    pub name: String,
    pub goal: FitnessGoal,
    /// Projected weekly energy expenditure at the profile's body weight
    pub projected_weekly_calories: u32,
    /// Exactly 7 entries, Monday first
    pub days: Vec<PlanDay>,
}

impl GeneratedPlan {
    /// Look up a day by weekday
    pub fn day(&self, weekday: Weekday) -> Option<&PlanDay> {
        self.days.iter().find(|d| d.day == weekday)
    }

    pub fn day_mut(&mut self, weekday: Weekday) -> Option<&mut PlanDay> {
        self.days.iter_mut().find(|d| d.day == weekday)
    }
}

// ============================================================================
// Session Types
// ============================================================================

/// Per-exercise completion detail within a session
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct CompletedExercise {
    pub exercise_id: String,
    pub sets_completed: u32,
    pub reps_completed: String,
    pub duration_seconds: Option<u32>,
    pub calories_burned: u32,
}

/// A completed workout session
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct SessionRecord {
    pub id: Uuid,
    /// Calendar date the workout was performed on (not a timestamp)
    pub workout_date: NaiveDate,
    /// Plan day this session fulfilled, if any
    pub day: Option<Weekday>,
    pub duration_minutes: u32,
    pub total_calories: u32,
    pub logged_at: DateTime<Utc>,
    pub exercises: Vec<CompletedExercise>,
}

// ============================================================================
// Adaptation Types
// ============================================================================

/// A single successful volume adjustment
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq, Eq)]
pub struct Adjustment {
    pub exercise_id: String,
    pub old_sets: u32,
    pub new_sets: u32,
    pub old_reps: String,
    pub new_reps: String,
}

/// Outcome of a streak evaluation and (possibly) adaptation
#[derive(Clone, Debug, Serialize, Deserialize, Default)]
pub struct AdaptationResult {
    pub has_streak: bool,
    /// Length of the consecutive run of workout dates ending today
    pub streak_days: u32,
    /// Additional consecutive days needed to qualify
    pub days_needed: u32,
    /// True when the day was already adapted on this calendar date
    pub already_adapted: bool,
    pub adjustments: Vec<Adjustment>,
}

impl AdaptationResult {
    /// Number of exercises successfully adjusted
    pub fn adjusted(&self) -> usize {
        self.adjustments.len()
    }
}

/// A pending write the caller must persist to apply an adaptation
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct VolumeWrite {
    pub exercise_id: String,
    pub sets: u32,
    pub reps: String,
    pub last_adapted: NaiveDate,
}
