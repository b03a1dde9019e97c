//! CSV archival of the session log.
//!
//! The JSONL log stays small by rolling completed sessions into an
//! append-only CSV. The CSV is fsynced before the log is renamed aside, so
//! a crash in between loses nothing; renamed logs keep a `.processed`
//! suffix for manual recovery and can be cleaned up separately.

use crate::types::SessionRecord;
use crate::Result;
use std::fs::OpenOptions;
use std::path::Path;

/// A row in the CSV archive; per-exercise detail stays in the log only
#[derive(Debug, serde::Serialize)]
struct CsvRow {
    id: String,
    workout_date: String,
    day: Option<String>,
    duration_minutes: u32,
    total_calories: u32,
    logged_at: String,
    exercises_completed: usize,
}

impl From<&SessionRecord> for CsvRow {
    fn from(session: &SessionRecord) -> Self {
        CsvRow {
            id: session.id.to_string(),
            workout_date: session.workout_date.to_string(),
            day: session.day.map(|d| d.to_string()),
            duration_minutes: session.duration_minutes,
            total_calories: session.total_calories,
            logged_at: session.logged_at.to_rfc3339(),
            exercises_completed: session.exercises.len(),
        }
    }
}

/// Roll the session log into the CSV archive and rename the log aside.
///
/// Returns the number of sessions archived. The CSV is created with
/// headers on first use and appended to afterwards.
pub fn log_to_csv_and_archive(log_path: &Path, csv_path: &Path) -> Result<usize> {
    let sessions = crate::history::read_log(log_path)?;

    if sessions.is_empty() {
        tracing::info!("No sessions in log to roll up");
        return Ok(0);
    }

    if let Some(parent) = csv_path.parent() {
        std::fs::create_dir_all(parent)?;
    }

    let file = OpenOptions::new()
        .create(true)
        .append(true)
        .open(csv_path)?;

    let needs_headers = file.metadata()?.len() == 0;

    let mut writer = csv::WriterBuilder::new()
        .has_headers(needs_headers)
        .from_writer(file);

    for session in &sessions {
        writer.serialize(CsvRow::from(session))?;
    }

    writer.flush()?;
    let file = writer
        .into_inner()
        .map_err(|e| std::io::Error::new(std::io::ErrorKind::Other, e))?;
    file.sync_all()?;

    tracing::info!("Wrote {} sessions to CSV", sessions.len());

    // Archive the log only after the CSV is durable
    let processed_path = log_path.with_extension("jsonl.processed");
    std::fs::rename(log_path, &processed_path)?;

    tracing::info!("Archived session log to {:?}", processed_path);

    Ok(sessions.len())
}

/// Remove processed session logs from a directory, returning the count
pub fn cleanup_processed_logs(dir: &Path) -> Result<usize> {
    if !dir.exists() {
        return Ok(0);
    }

    let mut count = 0;
    for entry in std::fs::read_dir(dir)? {
        let entry = entry?;
        let path = entry.path();

        if path.extension().is_some_and(|e| e == "processed") {
            std::fs::remove_file(&path)?;
            tracing::debug!("Removed processed log: {:?}", path);
            count += 1;
        }
    }

    Ok(count)
}
