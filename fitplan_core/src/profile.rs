//! Profile validation and persistence.
//!
//! The profile lives as a single JSON file in the data directory. Validation
//! runs before anything is saved and before plan generation, so a malformed
//! profile is rejected whole rather than partially applied.

use crate::types::Profile;
use crate::{Error, Result};
use std::path::Path;
use tempfile::NamedTempFile;

/// Allowed body weight range in kg
pub const WEIGHT_RANGE_KG: (f64, f64) = (10.0, 500.0);
/// Allowed height range in cm
pub const HEIGHT_RANGE_CM: (f64, f64) = (50.0, 300.0);
/// Allowed preferred session duration in minutes
pub const DURATION_RANGE_MIN: (u32, u32) = (5, 300);

impl Profile {
    /// Check all field bounds; the first violation is reported
    pub fn validate(&self) -> Result<()> {
        if !self.weight_kg.is_finite()
            || self.weight_kg < WEIGHT_RANGE_KG.0
            || self.weight_kg > WEIGHT_RANGE_KG.1
        {
            return Err(Error::Validation(format!(
                "Weight must be between {} and {} kg",
                WEIGHT_RANGE_KG.0, WEIGHT_RANGE_KG.1
            )));
        }

        if !self.height_cm.is_finite()
            || self.height_cm < HEIGHT_RANGE_CM.0
            || self.height_cm > HEIGHT_RANGE_CM.1
        {
            return Err(Error::Validation(format!(
                "Height must be between {} and {} cm",
                HEIGHT_RANGE_CM.0, HEIGHT_RANGE_CM.1
            )));
        }

        if self.workout_duration < DURATION_RANGE_MIN.0
            || self.workout_duration > DURATION_RANGE_MIN.1
        {
            return Err(Error::Validation(format!(
                "Workout duration must be between {} and {} minutes",
                DURATION_RANGE_MIN.0, DURATION_RANGE_MIN.1
            )));
        }

        Ok(())
    }

    /// Load the profile from a JSON file
    ///
    /// A missing file is `NotFound` (the user has not completed a profile);
    /// a malformed file is a JSON error rather than silently defaulted,
    /// since there is no sensible default body weight.
    pub fn load(path: &Path) -> Result<Self> {
        if !path.exists() {
            return Err(Error::NotFound(
                "Profile not found. Set one up with `fitplan profile` first".into(),
            ));
        }

        let contents = std::fs::read_to_string(path)?;
        let profile: Profile = serde_json::from_str(&contents)?;
        tracing::debug!("Loaded profile from {:?}", path);
        Ok(profile)
    }

    /// Validate and save the profile atomically (temp file + rename)
    pub fn save(&self, path: &Path) -> Result<()> {
        self.validate()?;

        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)?;
        }

        let temp = NamedTempFile::new_in(path.parent().ok_or_else(|| {
            std::io::Error::new(std::io::ErrorKind::Other, "profile path missing parent")
        })?)?;

        serde_json::to_writer_pretty(temp.as_file(), self)?;
        temp.as_file().sync_all()?;
        temp.persist(path).map_err(|e| Error::Io(e.error))?;

        tracing::debug!("Saved profile to {:?}", path);
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::{Difficulty, FitnessGoal};

    fn valid_profile() -> Profile {
        Profile {
            weight_kg: 70.0,
            height_cm: 175.0,
            fitness_goal: FitnessGoal::GeneralFitness,
            activity_level: Difficulty::Beginner,
            workout_duration: 30,
        }
    }

    #[test]
    fn test_valid_profile_passes() {
        assert!(valid_profile().validate().is_ok());
    }

    #[test]
    fn test_weight_bounds() {
        let mut profile = valid_profile();
        profile.weight_kg = 9.9;
        assert!(profile.validate().is_err());
        profile.weight_kg = 500.1;
        assert!(profile.validate().is_err());
        profile.weight_kg = f64::NAN;
        assert!(profile.validate().is_err());
        profile.weight_kg = 10.0;
        assert!(profile.validate().is_ok());
    }

    #[test]
    fn test_height_bounds() {
        let mut profile = valid_profile();
        profile.height_cm = 49.0;
        assert!(profile.validate().is_err());
        profile.height_cm = 301.0;
        assert!(profile.validate().is_err());
        profile.height_cm = 300.0;
        assert!(profile.validate().is_ok());
    }

    #[test]
    fn test_duration_bounds() {
        let mut profile = valid_profile();
        profile.workout_duration = 4;
        assert!(profile.validate().is_err());
        profile.workout_duration = 301;
        assert!(profile.validate().is_err());
        profile.workout_duration = 5;
        assert!(profile.validate().is_ok());
    }

    #[test]
    fn test_save_and_load_roundtrip() {
        let temp_dir = tempfile::tempdir().unwrap();
        let path = temp_dir.path().join("profile.json");

        let profile = valid_profile();
        profile.save(&path).unwrap();

        let loaded = Profile::load(&path).unwrap();
        assert_eq!(loaded.weight_kg, 70.0);
        assert_eq!(loaded.fitness_goal, FitnessGoal::GeneralFitness);
    }

    #[test]
    fn test_invalid_profile_is_not_saved() {
        let temp_dir = tempfile::tempdir().unwrap();
        let path = temp_dir.path().join("profile.json");

        let mut profile = valid_profile();
        profile.weight_kg = 2.0;
        assert!(profile.save(&path).is_err());
        assert!(!path.exists());
    }

    #[test]
    fn test_missing_profile_is_not_found() {
        let temp_dir = tempfile::tempdir().unwrap();
        let result = Profile::load(&temp_dir.path().join("missing.json"));
        assert!(matches!(result, Err(Error::NotFound(_))));
    }

    #[test]
    fn test_missing_goal_defaults_on_load() {
        let temp_dir = tempfile::tempdir().unwrap();
        let path = temp_dir.path().join("profile.json");
        std::fs::write(
            &path,
            r#"{"weight_kg": 80.0, "height_cm": 180.0, "workout_duration": 45}"#,
        )
        .unwrap();

        let profile = Profile::load(&path).unwrap();
        assert_eq!(profile.fitness_goal, FitnessGoal::GeneralFitness);
        assert_eq!(profile.activity_level, Difficulty::Beginner);
    }
}
