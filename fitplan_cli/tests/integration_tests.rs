//! Integration tests for the fitplan binary.
//!
//! These tests verify end-to-end behavior including:
//! - Profile setup and validation
//! - Plan generation and display
//! - Session logging and streak adaptation
//! - CSV rollup operations

use assert_cmd::Command;
use chrono::{Duration, Utc};
use fitplan_core::{SessionLog, SessionRecord, SessionSink, Weekday};
use predicates::prelude::*;
use std::path::Path;
use tempfile::TempDir;

fn setup_test_dir() -> TempDir {
    tempfile::tempdir().expect("Failed to create temp dir")
}

fn cli() -> Command {
    Command::new(assert_cmd::cargo::cargo_bin!("fitplan"))
}

/// Create a profile in the data dir through the CLI
fn setup_profile(data_dir: &Path) {
    cli()
        .arg("profile")
        .arg("--data-dir")
        .arg(data_dir)
        .args(["--weight", "70", "--height", "175", "--duration", "30"])
        .assert()
        .success();
}

/// Append a session for a past day directly to the log
fn log_session_days_ago(data_dir: &Path, days_ago: i64, day: Option<Weekday>) {
    let session = SessionRecord {
        id: uuid::Uuid::new_v4(),
        workout_date: Utc::now().date_naive() - Duration::days(days_ago),
        day,
        duration_minutes: 30,
        total_calories: 180,
        logged_at: Utc::now() - Duration::days(days_ago),
        exercises: vec![],
    };
    let mut log = SessionLog::new(data_dir.join("sessions.jsonl"));
    log.append(&session).expect("Failed to append session");
}

#[test]
fn test_cli_help() {
    cli()
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("Rule-based workout planning"));
}

#[test]
fn test_profile_roundtrip() {
    let temp_dir = setup_test_dir();
    setup_profile(temp_dir.path());

    cli()
        .arg("profile")
        .arg("--data-dir")
        .arg(temp_dir.path())
        .assert()
        .success()
        .stdout(predicate::str::contains("70 kg"))
        .stdout(predicate::str::contains("general_fitness"));
}

#[test]
fn test_profile_rejects_out_of_range_weight() {
    let temp_dir = setup_test_dir();

    cli()
        .arg("profile")
        .arg("--data-dir")
        .arg(temp_dir.path())
        .args(["--weight", "2", "--height", "175", "--duration", "30"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Weight"));
}

#[test]
fn test_generate_requires_profile() {
    let temp_dir = setup_test_dir();

    cli()
        .arg("generate")
        .arg("--data-dir")
        .arg(temp_dir.path())
        .assert()
        .failure()
        .stderr(predicate::str::contains("Profile not found"));
}

#[test]
fn test_generate_then_plan_shows_all_seven_days() {
    let temp_dir = setup_test_dir();
    setup_profile(temp_dir.path());

    cli()
        .arg("generate")
        .arg("--data-dir")
        .arg(temp_dir.path())
        .args(["--seed", "42"])
        .assert()
        .success()
        .stdout(predicate::str::contains("General Fitness Plan"));

    assert!(temp_dir.path().join("plan.json").exists());

    let assert = cli()
        .arg("plan")
        .arg("--data-dir")
        .arg(temp_dir.path())
        .assert()
        .success();

    let stdout = String::from_utf8_lossy(&assert.get_output().stdout).to_string();
    for day in [
        "monday",
        "tuesday",
        "wednesday",
        "thursday",
        "friday",
        "saturday",
        "sunday",
    ] {
        assert!(stdout.contains(day), "missing {} in:\n{}", day, stdout);
    }
    assert!(stdout.contains("Rest & Recovery"));
}

#[test]
fn test_seeded_generation_is_reproducible() {
    let dir_a = setup_test_dir();
    let dir_b = setup_test_dir();
    setup_profile(dir_a.path());
    setup_profile(dir_b.path());

    for dir in [&dir_a, &dir_b] {
        cli()
            .arg("generate")
            .arg("--data-dir")
            .arg(dir.path())
            .args(["--seed", "7"])
            .assert()
            .success();
    }

    let plan_a = std::fs::read_to_string(dir_a.path().join("plan.json")).unwrap();
    let plan_b = std::fs::read_to_string(dir_b.path().join("plan.json")).unwrap();
    assert_eq!(plan_a, plan_b);
}

#[test]
fn test_plan_without_generate_fails() {
    let temp_dir = setup_test_dir();

    cli()
        .arg("plan")
        .arg("--data-dir")
        .arg(temp_dir.path())
        .assert()
        .failure()
        .stderr(predicate::str::contains("No active workout plan"));
}

#[test]
fn test_log_writes_session_and_refuses_duplicates() {
    let temp_dir = setup_test_dir();
    setup_profile(temp_dir.path());

    cli()
        .arg("generate")
        .arg("--data-dir")
        .arg(temp_dir.path())
        .args(["--seed", "1"])
        .assert()
        .success();

    cli()
        .arg("log")
        .arg("--data-dir")
        .arg(temp_dir.path())
        .args(["--day", "monday"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Logged monday session"));

    let log = std::fs::read_to_string(temp_dir.path().join("sessions.jsonl")).unwrap();
    assert!(log.contains("total_calories"));

    cli()
        .arg("log")
        .arg("--data-dir")
        .arg(temp_dir.path())
        .args(["--day", "monday"])
        .assert()
        .success()
        .stdout(predicate::str::contains("already logged today"));
}

#[test]
fn test_log_rejects_rest_day() {
    let temp_dir = setup_test_dir();
    setup_profile(temp_dir.path());

    cli()
        .arg("generate")
        .arg("--data-dir")
        .arg(temp_dir.path())
        .args(["--seed", "1"])
        .assert()
        .success();

    cli()
        .arg("log")
        .arg("--data-dir")
        .arg(temp_dir.path())
        .args(["--day", "sunday"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("rest day"));
}

#[test]
fn test_adapt_reports_missing_streak() {
    let temp_dir = setup_test_dir();
    setup_profile(temp_dir.path());

    cli()
        .arg("generate")
        .arg("--data-dir")
        .arg(temp_dir.path())
        .args(["--seed", "1"])
        .assert()
        .success();

    log_session_days_ago(temp_dir.path(), 0, Some(Weekday::Monday));

    cli()
        .arg("adapt")
        .arg("--data-dir")
        .arg(temp_dir.path())
        .args(["--day", "monday"])
        .assert()
        .success()
        .stdout(predicate::str::contains("No streak yet"));
}

#[test]
fn test_adapt_on_streak_then_already_adapted() {
    let temp_dir = setup_test_dir();
    setup_profile(temp_dir.path());

    cli()
        .arg("generate")
        .arg("--data-dir")
        .arg(temp_dir.path())
        .args(["--seed", "1"])
        .assert()
        .success();

    // Two consecutive days ending today qualifies
    log_session_days_ago(temp_dir.path(), 1, Some(Weekday::Sunday));
    log_session_days_ago(temp_dir.path(), 0, Some(Weekday::Monday));

    cli()
        .arg("adapt")
        .arg("--data-dir")
        .arg(temp_dir.path())
        .args(["--day", "monday"])
        .assert()
        .success()
        .stdout(predicate::str::contains("streak"))
        .stdout(predicate::str::contains("Increased intensity"));

    // Second run the same day must not escalate again
    cli()
        .arg("adapt")
        .arg("--data-dir")
        .arg(temp_dir.path())
        .args(["--day", "monday"])
        .assert()
        .success()
        .stdout(predicate::str::contains("already adapted today"));
}

#[test]
fn test_exercises_filters() {
    cli()
        .arg("exercises")
        .args(["--muscle", "chest", "--difficulty", "beginner"])
        .assert()
        .success()
        .stdout(predicate::str::contains("chest"));

    cli()
        .arg("exercises")
        .args(["--muscle", "elbows"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Unknown muscle group"));
}

#[test]
fn test_rollup_and_stats() {
    let temp_dir = setup_test_dir();

    log_session_days_ago(temp_dir.path(), 0, None);
    log_session_days_ago(temp_dir.path(), 1, None);

    cli()
        .arg("rollup")
        .arg("--data-dir")
        .arg(temp_dir.path())
        .arg("--cleanup")
        .assert()
        .success()
        .stdout(predicate::str::contains("Rolled up 2 sessions"));

    assert!(temp_dir.path().join("sessions.csv").exists());
    assert!(!temp_dir.path().join("sessions.jsonl").exists());

    // Stats still see the archived sessions through the CSV
    cli()
        .arg("stats")
        .arg("--data-dir")
        .arg(temp_dir.path())
        .args(["--period", "7"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Sessions:       2"))
        .stdout(predicate::str::contains("360 kcal"));
}

#[test]
fn test_stats_empty_period() {
    let temp_dir = setup_test_dir();

    cli()
        .arg("stats")
        .arg("--data-dir")
        .arg(temp_dir.path())
        .assert()
        .success()
        .stdout(predicate::str::contains("No sessions in this period"));
}
