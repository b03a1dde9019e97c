//! Session history: a JSONL log of completed workouts plus the read
//! primitives the streak and stats code needs.
//!
//! Sessions are appended to a JSON Lines file under an exclusive lock;
//! reads take a shared lock and skip malformed lines with a warning so one
//! bad record never poisons the history. Archived sessions rolled into CSV
//! (see `rollup`) are merged back in and deduplicated by session id.

use crate::types::{SessionRecord, Weekday};
use crate::Result;
use chrono::{DateTime, Duration, NaiveDate, Utc};
use csv::ReaderBuilder;
use fs2::FileExt;
use serde::Deserialize;
use std::collections::HashSet;
use std::fs::{File, OpenOptions};
use std::io::{BufRead, BufReader, Write};
use std::path::{Path, PathBuf};
use uuid::Uuid;

/// Sink for persisting completed sessions
pub trait SessionSink {
    fn append(&mut self, session: &SessionRecord) -> Result<()>;
}

/// JSONL-based session log with file locking
pub struct SessionLog {
    path: PathBuf,
}

impl SessionLog {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    fn ensure_parent_dir(&self) -> Result<()> {
        if let Some(parent) = self.path.parent() {
            std::fs::create_dir_all(parent)?;
        }
        Ok(())
    }
}

impl SessionSink for SessionLog {
    fn append(&mut self, session: &SessionRecord) -> Result<()> {
        self.ensure_parent_dir()?;

        let file = OpenOptions::new()
            .create(true)
            .append(true)
            .open(&self.path)?;

        file.lock_exclusive()?;

        let mut writer = std::io::BufWriter::new(&file);
        let line = serde_json::to_string(session)?;
        writer.write_all(line.as_bytes())?;
        writer.write_all(b"\n")?;
        writer.flush()?;

        file.unlock()?;

        tracing::debug!("Appended session {} to log", session.id);
        Ok(())
    }
}

/// Read every session from a JSONL log file
pub fn read_log(path: &Path) -> Result<Vec<SessionRecord>> {
    if !path.exists() {
        return Ok(Vec::new());
    }

    let file = File::open(path)?;
    file.lock_shared()?;

    let reader = BufReader::new(&file);
    let mut sessions = Vec::new();

    for (line_num, line_result) in reader.lines().enumerate() {
        let line = line_result?;
        if line.trim().is_empty() {
            continue;
        }

        match serde_json::from_str::<SessionRecord>(&line) {
            Ok(session) => sessions.push(session),
            Err(e) => {
                tracing::warn!("Failed to parse session at line {}: {}", line_num + 1, e);
            }
        }
    }

    file.unlock()?;
    Ok(sessions)
}

/// CSV row format for reading archived sessions
///
/// Per-exercise detail is not carried into the archive, only totals.
#[derive(Debug, Deserialize)]
struct CsvRow {
    id: String,
    workout_date: String,
    day: Option<String>,
    duration_minutes: u32,
    total_calories: u32,
    logged_at: String,
}

impl TryFrom<CsvRow> for SessionRecord {
    type Error = crate::Error;

    fn try_from(row: CsvRow) -> Result<Self> {
        let id = Uuid::parse_str(&row.id)
            .map_err(|e| crate::Error::Other(format!("Invalid UUID: {}", e)))?;

        let workout_date = row
            .workout_date
            .parse::<NaiveDate>()
            .map_err(|e| crate::Error::Other(format!("Invalid date: {}", e)))?;

        let logged_at = DateTime::parse_from_rfc3339(&row.logged_at)
            .map_err(|e| crate::Error::Other(format!("Invalid timestamp: {}", e)))?
            .with_timezone(&Utc);

        Ok(SessionRecord {
            id,
            workout_date,
            day: row.day.as_deref().and_then(Weekday::parse),
            duration_minutes: row.duration_minutes,
            total_calories: row.total_calories,
            logged_at,
            exercises: vec![], // Not stored in CSV
        })
    }
}

fn load_sessions_from_csv(path: &Path) -> Result<Vec<SessionRecord>> {
    let mut reader = ReaderBuilder::new().has_headers(true).from_path(path)?;

    let mut sessions = Vec::new();
    for result in reader.deserialize::<CsvRow>() {
        match result {
            Ok(row) => match SessionRecord::try_from(row) {
                Ok(session) => sessions.push(session),
                Err(e) => {
                    tracing::warn!("Failed to parse CSV row: {}", e);
                }
            },
            Err(e) => {
                tracing::warn!("Failed to deserialize CSV row: {}", e);
            }
        }
    }

    Ok(sessions)
}

/// Load sessions from the last `days` days from both the log and the CSV
/// archive, deduplicated by id and sorted newest first.
///
/// `days` of `None` loads everything.
pub fn load_recent_sessions(
    log_path: &Path,
    csv_path: &Path,
    days: Option<i64>,
) -> Result<Vec<SessionRecord>> {
    let cutoff = days.map(|d| Utc::now().date_naive() - Duration::days(d));
    let in_window =
        |s: &SessionRecord| cutoff.map_or(true, |cutoff| s.workout_date >= cutoff);

    let mut sessions = Vec::new();
    let mut seen_ids = HashSet::new();

    for session in read_log(log_path)? {
        if in_window(&session) {
            seen_ids.insert(session.id);
            sessions.push(session);
        }
    }

    if csv_path.exists() {
        for session in load_sessions_from_csv(csv_path)? {
            if in_window(&session) && !seen_ids.contains(&session.id) {
                seen_ids.insert(session.id);
                sessions.push(session);
            }
        }
    }

    sessions.sort_by(|a, b| {
        b.workout_date
            .cmp(&a.workout_date)
            .then(b.logged_at.cmp(&a.logged_at))
    });

    tracing::debug!("Loaded {} sessions", sessions.len());
    Ok(sessions)
}

/// Distinct workout dates, most recent first
pub fn distinct_workout_dates(sessions: &[SessionRecord]) -> Vec<NaiveDate> {
    let mut dates: Vec<NaiveDate> = sessions
        .iter()
        .map(|s| s.workout_date)
        .collect::<std::collections::BTreeSet<_>>()
        .into_iter()
        .collect();
    dates.reverse();
    dates
}

/// Whether a session for the given plan day was already logged on `date`
pub fn session_logged_on(sessions: &[SessionRecord], day: Weekday, date: NaiveDate) -> bool {
    sessions
        .iter()
        .any(|s| s.day == Some(day) && s.workout_date == date)
}
