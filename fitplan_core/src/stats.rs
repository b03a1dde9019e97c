//! Performance summaries over the session history.
//!
//! Everything here is computed from an in-memory slice of sessions, so the
//! caller decides the window (`load_recent_sessions` with 7/30/90 days or
//! everything) and this module stays pure.

use crate::types::{Catalog, MuscleGroup, SessionRecord};
use chrono::{Datelike, NaiveDate};
use serde::Serialize;
use std::collections::BTreeMap;

/// One calendar day's totals
#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct DailyTotal {
    pub date: NaiveDate,
    pub sessions: u32,
    pub minutes: u32,
    pub calories: u32,
}

/// One ISO week's totals, keyed by the Monday that starts it
#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct WeeklyTotal {
    pub week_start: NaiveDate,
    pub sessions: u32,
    pub minutes: u32,
    pub calories: u32,
}

/// Summary of a period of workout history
#[derive(Debug, Clone, Serialize)]
pub struct StatsSummary {
    pub total_sessions: u32,
    pub total_minutes: u32,
    pub total_calories: u32,
    pub avg_minutes_per_session: f64,
    pub avg_calories_per_session: f64,
    pub daily: Vec<DailyTotal>,
    pub weekly: Vec<WeeklyTotal>,
    pub muscle_group_counts: Vec<(MuscleGroup, u32)>,
}

impl StatsSummary {
    pub fn is_empty(&self) -> bool {
        self.total_sessions == 0
    }
}

fn week_start(date: NaiveDate) -> NaiveDate {
    date.week(chrono::Weekday::Mon).first_day()
}

/// Compute a summary over the given sessions.
///
/// Muscle group counts need the catalog to resolve exercise ids; sessions
/// rolled into CSV carry no per-exercise detail and simply contribute
/// nothing to that breakdown.
pub fn summarize(sessions: &[SessionRecord], catalog: &Catalog) -> StatsSummary {
    let total_sessions = sessions.len() as u32;
    let total_minutes: u32 = sessions.iter().map(|s| s.duration_minutes).sum();
    let total_calories: u32 = sessions.iter().map(|s| s.total_calories).sum();

    let (avg_minutes, avg_calories) = if total_sessions > 0 {
        (
            total_minutes as f64 / total_sessions as f64,
            total_calories as f64 / total_sessions as f64,
        )
    } else {
        (0.0, 0.0)
    };

    let mut daily: BTreeMap<NaiveDate, DailyTotal> = BTreeMap::new();
    let mut weekly: BTreeMap<NaiveDate, WeeklyTotal> = BTreeMap::new();
    let mut group_counts: BTreeMap<MuscleGroup, u32> = BTreeMap::new();

    for session in sessions {
        let day = daily
            .entry(session.workout_date)
            .or_insert_with(|| DailyTotal {
                date: session.workout_date,
                sessions: 0,
                minutes: 0,
                calories: 0,
            });
        day.sessions += 1;
        day.minutes += session.duration_minutes;
        day.calories += session.total_calories;

        let monday = week_start(session.workout_date);
        let week = weekly.entry(monday).or_insert_with(|| WeeklyTotal {
            week_start: monday,
            sessions: 0,
            minutes: 0,
            calories: 0,
        });
        week.sessions += 1;
        week.minutes += session.duration_minutes;
        week.calories += session.total_calories;

        for completed in &session.exercises {
            match catalog.exercises.get(&completed.exercise_id) {
                Some(exercise) => {
                    *group_counts.entry(exercise.muscle_group).or_insert(0) += 1;
                }
                None => {
                    tracing::debug!(
                        "Exercise {} not in catalog, skipping for group counts",
                        completed.exercise_id
                    );
                }
            }
        }
    }

    let mut muscle_group_counts: Vec<(MuscleGroup, u32)> = group_counts.into_iter().collect();
    // Most worked groups first, ties broken by the enum's natural order
    muscle_group_counts.sort_by(|a, b| b.1.cmp(&a.1).then(a.0.cmp(&b.0)));

    StatsSummary {
        total_sessions,
        total_minutes,
        total_calories,
        avg_minutes_per_session: avg_minutes,
        avg_calories_per_session: avg_calories,
        daily: daily.into_values().collect(),
        weekly: weekly.into_values().collect(),
        muscle_group_counts,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::build_default_catalog;
    use crate::types::{CompletedExercise, Weekday};
    use chrono::Utc;
    use uuid::Uuid;

    fn session(date: NaiveDate, minutes: u32, calories: u32) -> SessionRecord {
        SessionRecord {
            id: Uuid::new_v4(),
            workout_date: date,
            day: Some(Weekday::Monday),
            duration_minutes: minutes,
            total_calories: calories,
            logged_at: Utc::now(),
            exercises: vec![],
        }
    }

    #[test]
    fn test_empty_history() {
        let summary = summarize(&[], &build_default_catalog());
        assert!(summary.is_empty());
        assert_eq!(summary.avg_calories_per_session, 0.0);
        assert!(summary.daily.is_empty());
        assert!(summary.weekly.is_empty());
    }

    #[test]
    fn test_totals_and_averages() {
        let d = NaiveDate::from_ymd_opt(2025, 3, 10).unwrap();
        let sessions = vec![session(d, 30, 200), session(d, 20, 100)];

        let summary = summarize(&sessions, &build_default_catalog());
        assert_eq!(summary.total_sessions, 2);
        assert_eq!(summary.total_minutes, 50);
        assert_eq!(summary.total_calories, 300);
        assert!((summary.avg_minutes_per_session - 25.0).abs() < f64::EPSILON);
        assert!((summary.avg_calories_per_session - 150.0).abs() < f64::EPSILON);
    }

    #[test]
    fn test_daily_series_merges_same_day() {
        let d1 = NaiveDate::from_ymd_opt(2025, 3, 10).unwrap();
        let d2 = NaiveDate::from_ymd_opt(2025, 3, 11).unwrap();
        let sessions = vec![session(d1, 30, 200), session(d1, 15, 80), session(d2, 20, 90)];

        let summary = summarize(&sessions, &build_default_catalog());
        assert_eq!(summary.daily.len(), 2);
        assert_eq!(summary.daily[0].date, d1);
        assert_eq!(summary.daily[0].sessions, 2);
        assert_eq!(summary.daily[0].calories, 280);
        assert_eq!(summary.daily[1].calories, 90);
    }

    #[test]
    fn test_weekly_grouping_starts_monday() {
        // 2025-03-10 is a Monday; 2025-03-16 (Sunday) is the same ISO week,
        // 2025-03-17 starts the next one.
        let mon = NaiveDate::from_ymd_opt(2025, 3, 10).unwrap();
        let sun = NaiveDate::from_ymd_opt(2025, 3, 16).unwrap();
        let next_mon = NaiveDate::from_ymd_opt(2025, 3, 17).unwrap();
        let sessions = vec![session(mon, 30, 100), session(sun, 30, 100), session(next_mon, 30, 100)];

        let summary = summarize(&sessions, &build_default_catalog());
        assert_eq!(summary.weekly.len(), 2);
        assert_eq!(summary.weekly[0].week_start, mon);
        assert_eq!(summary.weekly[0].sessions, 2);
        assert_eq!(summary.weekly[1].week_start, next_mon);
    }

    #[test]
    fn test_muscle_group_counts_resolve_through_catalog() {
        let catalog = build_default_catalog();
        // Pick two real ids from different groups
        let mut by_group: BTreeMap<MuscleGroup, String> = BTreeMap::new();
        for exercise in catalog.exercises.values() {
            by_group
                .entry(exercise.muscle_group)
                .or_insert_with(|| exercise.id.clone());
        }
        let (group_a, id_a) = by_group.iter().next().map(|(g, i)| (*g, i.clone())).unwrap();

        let mut s = session(NaiveDate::from_ymd_opt(2025, 3, 10).unwrap(), 30, 100);
        s.exercises = vec![
            CompletedExercise {
                exercise_id: id_a.clone(),
                sets_completed: 3,
                reps_completed: "10".into(),
                duration_seconds: None,
                calories_burned: 10,
            },
            CompletedExercise {
                exercise_id: id_a,
                sets_completed: 2,
                reps_completed: "10".into(),
                duration_seconds: None,
                calories_burned: 8,
            },
            CompletedExercise {
                exercise_id: "no-such-exercise".into(),
                sets_completed: 1,
                reps_completed: "10".into(),
                duration_seconds: None,
                calories_burned: 5,
            },
        ];

        let summary = summarize(&[s], &catalog);
        assert_eq!(summary.muscle_group_counts.len(), 1);
        assert_eq!(summary.muscle_group_counts[0], (group_a, 2));
    }
}
