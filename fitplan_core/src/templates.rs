//! Goal-indexed weekly plan templates.
//!
//! Each fitness goal maps to a plan name and exactly three workout slots;
//! the remaining weekdays are implicitly rest days. Templates are plain data
//! so new goals are a table entry, not a code branch.

use crate::types::{FitnessGoal, MuscleGroup, Weekday};
use once_cell::sync::Lazy;

/// One workout slot within a weekly template
#[derive(Clone, Debug)]
pub struct TemplateSlot {
    pub day: Weekday,
    pub focus: &'static str,
    pub muscle_groups: &'static [MuscleGroup],
    pub tags: &'static [&'static str],
}

/// A weekly plan template for one goal
#[derive(Clone, Debug)]
pub struct PlanTemplate {
    pub goal: FitnessGoal,
    pub plan_name: &'static str,
    pub slots: [TemplateSlot; 3],
}

impl PlanTemplate {
    /// Find the slot for a weekday, if it is a workout day
    pub fn slot(&self, day: Weekday) -> Option<&TemplateSlot> {
        self.slots.iter().find(|s| s.day == day)
    }
}

static TEMPLATES: Lazy<Vec<PlanTemplate>> = Lazy::new(|| {
    vec![
        PlanTemplate {
            goal: FitnessGoal::WeightLoss,
            plan_name: "Fat Burn Plan",
            slots: [
                TemplateSlot {
                    day: Weekday::Monday,
                    focus: "Full Body HIIT",
                    muscle_groups: &[MuscleGroup::FullBody, MuscleGroup::Cardio],
                    tags: &["hiit", "cardio", "explosive"],
                },
                TemplateSlot {
                    day: Weekday::Wednesday,
                    focus: "Core & Cardio",
                    muscle_groups: &[MuscleGroup::Core, MuscleGroup::Cardio],
                    tags: &["cardio", "abs"],
                },
                TemplateSlot {
                    day: Weekday::Friday,
                    focus: "Lower Body Burn",
                    muscle_groups: &[MuscleGroup::Legs, MuscleGroup::Glutes, MuscleGroup::Cardio],
                    tags: &["cardio", "lower-body"],
                },
            ],
        },
        PlanTemplate {
            goal: FitnessGoal::MuscleGain,
            plan_name: "Strength Builder Plan",
            slots: [
                TemplateSlot {
                    day: Weekday::Monday,
                    focus: "Push Day (Chest & Shoulders)",
                    muscle_groups: &[MuscleGroup::Chest, MuscleGroup::Shoulders, MuscleGroup::Arms],
                    tags: &["push", "upper-body"],
                },
                TemplateSlot {
                    day: Weekday::Wednesday,
                    focus: "Pull Day (Back & Arms)",
                    muscle_groups: &[MuscleGroup::Back, MuscleGroup::Arms],
                    tags: &["pull", "upper-body"],
                },
                TemplateSlot {
                    day: Weekday::Friday,
                    focus: "Legs & Glutes",
                    muscle_groups: &[MuscleGroup::Legs, MuscleGroup::Glutes],
                    tags: &["lower-body", "squat"],
                },
            ],
        },
        PlanTemplate {
            goal: FitnessGoal::Flexibility,
            plan_name: "Flexibility & Mobility Plan",
            slots: [
                TemplateSlot {
                    day: Weekday::Tuesday,
                    focus: "Upper Body Mobility",
                    muscle_groups: &[MuscleGroup::Shoulders, MuscleGroup::Back, MuscleGroup::Chest],
                    tags: &["mobility", "stretch", "warmup"],
                },
                TemplateSlot {
                    day: Weekday::Thursday,
                    focus: "Core & Stability",
                    muscle_groups: &[MuscleGroup::Core, MuscleGroup::FullBody],
                    tags: &["stability", "balance", "control"],
                },
                TemplateSlot {
                    day: Weekday::Saturday,
                    focus: "Lower Body Stretch",
                    muscle_groups: &[MuscleGroup::Legs, MuscleGroup::Glutes],
                    tags: &["mobility", "stretch", "flexibility"],
                },
            ],
        },
        PlanTemplate {
            goal: FitnessGoal::GeneralFitness,
            plan_name: "General Fitness Plan",
            slots: [
                TemplateSlot {
                    day: Weekday::Monday,
                    focus: "Upper Body",
                    muscle_groups: &[
                        MuscleGroup::Chest,
                        MuscleGroup::Back,
                        MuscleGroup::Shoulders,
                        MuscleGroup::Arms,
                    ],
                    tags: &["upper-body", "push", "pull"],
                },
                TemplateSlot {
                    day: Weekday::Wednesday,
                    focus: "Core & Cardio",
                    muscle_groups: &[MuscleGroup::Core, MuscleGroup::Cardio, MuscleGroup::FullBody],
                    tags: &["cardio", "abs", "hiit"],
                },
                TemplateSlot {
                    day: Weekday::Friday,
                    focus: "Lower Body",
                    muscle_groups: &[MuscleGroup::Legs, MuscleGroup::Glutes],
                    tags: &["lower-body", "squat", "lunge"],
                },
            ],
        },
    ]
});

/// Template for a goal; falls back to `general_fitness`
pub fn template_for_goal(goal: FitnessGoal) -> &'static PlanTemplate {
    TEMPLATES
        .iter()
        .find(|t| t.goal == goal)
        .unwrap_or_else(|| {
            TEMPLATES
                .iter()
                .find(|t| t.goal == FitnessGoal::GeneralFitness)
                .expect("general_fitness template is always present")
        })
}
