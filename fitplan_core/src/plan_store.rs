//! Active plan persistence with file locking.
//!
//! The generated plan is the only mutable state the adapter touches (via
//! the `last_adapted` stamps), so writes go through an atomic
//! load-modify-save: the adaptation decision is re-made against the freshly
//! loaded plan, which keeps the once-per-day guard honest even when two
//! invocations race.

use crate::config::AdaptationConfig;
use crate::types::{AdaptationResult, GeneratedPlan, Weekday};
use crate::{intensity, Error, Result};
use chrono::NaiveDate;
use fs2::FileExt;
use std::fs::File;
use std::io::{Read, Write};
use std::path::Path;
use tempfile::NamedTempFile;

impl GeneratedPlan {
    /// Load the active plan from a file with shared locking
    pub fn load(path: &Path) -> Result<Self> {
        if !path.exists() {
            return Err(Error::NotFound(
                "No active workout plan found. Generate one with `fitplan generate`".into(),
            ));
        }

        let file = File::open(path)?;
        file.lock_shared()?;

        let mut contents = String::new();
        let mut reader = std::io::BufReader::new(&file);
        let read_result = reader.read_to_string(&mut contents);
        file.unlock()?;
        read_result?;

        let plan = serde_json::from_str::<GeneratedPlan>(&contents)?;
        tracing::debug!("Loaded plan '{}' from {:?}", plan.name, path);
        Ok(plan)
    }

    /// Save the plan atomically: temp file, exclusive lock, fsync, rename
    pub fn save(&self, path: &Path) -> Result<()> {
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)?;
        }

        let temp = NamedTempFile::new_in(path.parent().ok_or_else(|| {
            std::io::Error::new(std::io::ErrorKind::Other, "plan path missing parent")
        })?)?;

        temp.as_file().lock_exclusive()?;

        {
            let mut writer = std::io::BufWriter::new(temp.as_file());
            let contents = serde_json::to_string(self)?;
            writer.write_all(contents.as_bytes())?;
            writer.flush()?;
        }

        temp.as_file().sync_all()?;
        temp.as_file().unlock()?;

        temp.persist(path).map_err(|e| Error::Io(e.error))?;

        tracing::debug!("Saved plan '{}' to {:?}", self.name, path);
        Ok(())
    }

    /// Load the plan, run `f` against it, and save the result atomically
    pub fn update<T, F>(path: &Path, f: F) -> Result<T>
    where
        F: FnOnce(&mut GeneratedPlan) -> Result<T>,
    {
        let mut plan = Self::load(path)?;
        let value = f(&mut plan)?;
        plan.save(path)?;
        Ok(value)
    }
}

/// Evaluate a streak against the stored plan and, when it qualifies, apply
/// the volume writes for `weekday` in the same load-modify-save pass.
///
/// The `last_adapted` stamps are read from the freshly loaded plan, so a
/// second call on the same calendar day reports `already_adapted` instead
/// of escalating twice.
pub fn adapt_day(
    path: &Path,
    weekday: Weekday,
    today: NaiveDate,
    session_dates: &[NaiveDate],
    config: &AdaptationConfig,
) -> Result<AdaptationResult> {
    GeneratedPlan::update(path, |plan| {
        let day = plan
            .day_mut(weekday)
            .ok_or_else(|| Error::NotFound(format!("No plan day for {}", weekday)))?;

        if day.is_rest_day {
            return Err(Error::Plan(format!(
                "{} is a rest day; nothing to adapt",
                weekday
            )));
        }

        let (result, writes) = intensity::evaluate(today, session_dates, &day.exercises, config);
        let applied = intensity::apply_writes(&mut day.exercises, &writes);
        if applied < writes.len() {
            tracing::warn!("Applied {}/{} adaptation writes", applied, writes.len());
        }

        Ok(result)
    })
}
