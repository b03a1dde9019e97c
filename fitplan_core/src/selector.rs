//! Exercise selection for a single plan day.
//!
//! Selection filters the pool by muscle group and difficulty, relaxes the
//! difficulty match when the pool is sparse, shuffles with a caller-supplied
//! random source, and threads an explicit exclusion set so one generation
//! run never repeats an exercise across days.

use crate::types::{Difficulty, Exercise, MuscleGroup};
use rand::seq::SliceRandom;
use rand::Rng;
use std::collections::HashSet;

/// Select up to `count` exercises for one day.
///
/// Primary candidates match both muscle group and difficulty tier exactly.
/// If fewer than `count` remain, the pool is extended with same-group
/// exercises of any tier, primary members first. Candidates are shuffled
/// with `rng` before truncation; chosen ids are added to the returned
/// exclusion set.
///
/// Days can come back under-filled when even the extended pool is too
/// small; that is accepted, not an error.
pub fn select_exercises<R: Rng>(
    pool: &[Exercise],
    muscle_groups: &[MuscleGroup],
    difficulty: Difficulty,
    count: usize,
    mut excluded: HashSet<String>,
    rng: &mut R,
) -> (Vec<Exercise>, HashSet<String>) {
    let in_groups =
        |e: &Exercise| muscle_groups.contains(&e.muscle_group) && !excluded.contains(&e.id);

    let mut candidates: Vec<&Exercise> = pool
        .iter()
        .filter(|e| in_groups(e) && e.difficulty == difficulty)
        .collect();

    if candidates.len() < count {
        let primary_ids: HashSet<&str> = candidates.iter().map(|e| e.id.as_str()).collect();
        let fallback = pool
            .iter()
            .filter(|e| in_groups(e) && !primary_ids.contains(e.id.as_str()));
        candidates.extend(fallback);

        tracing::debug!(
            "Sparse pool for {:?} at {}: extended to {} candidates",
            muscle_groups,
            difficulty,
            candidates.len()
        );
    }

    // Sort before shuffling so a seeded RNG yields the same permutation
    // regardless of pool iteration order
    candidates.sort_by(|a, b| a.id.cmp(&b.id));
    candidates.shuffle(rng);
    candidates.truncate(count);

    let chosen: Vec<Exercise> = candidates.into_iter().cloned().collect();
    for exercise in &chosen {
        excluded.insert(exercise.id.clone());
    }

    (chosen, excluded)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::build_default_catalog;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    fn pool() -> Vec<Exercise> {
        build_default_catalog().pool()
    }

    #[test]
    fn test_exact_difficulty_preferred() {
        let pool = pool();
        let mut rng = StdRng::seed_from_u64(7);

        let (chosen, _) = select_exercises(
            &pool,
            &[MuscleGroup::Legs, MuscleGroup::Glutes],
            Difficulty::Beginner,
            3,
            HashSet::new(),
            &mut rng,
        );

        assert_eq!(chosen.len(), 3);
        // Beginner leg/glute coverage is exactly 3 wide, so no fallback fires
        assert!(chosen.iter().all(|e| e.difficulty == Difficulty::Beginner));
    }

    #[test]
    fn test_fallback_relaxes_difficulty() {
        let pool = pool();
        let mut rng = StdRng::seed_from_u64(7);

        // Only one advanced chest exercise exists, so a 4-count request
        // must pull in every other tier
        let (chosen, _) = select_exercises(
            &pool,
            &[MuscleGroup::Chest],
            Difficulty::Advanced,
            4,
            HashSet::new(),
            &mut rng,
        );

        assert_eq!(chosen.len(), 4);
        assert!(chosen.iter().any(|e| e.difficulty == Difficulty::Advanced));
        assert!(chosen.iter().any(|e| e.difficulty != Difficulty::Advanced));
    }

    #[test]
    fn test_excluded_ids_are_never_chosen() {
        let pool = pool();
        let mut rng = StdRng::seed_from_u64(7);

        let mut excluded = HashSet::new();
        excluded.insert("pushup".to_string());
        excluded.insert("incline_pushup".to_string());

        let (chosen, _) = select_exercises(
            &pool,
            &[MuscleGroup::Chest],
            Difficulty::Beginner,
            4,
            excluded,
            &mut rng,
        );

        assert!(chosen.iter().all(|e| e.id != "pushup" && e.id != "incline_pushup"));
    }

    #[test]
    fn test_chosen_ids_accumulate_into_exclusions() {
        let pool = pool();
        let mut rng = StdRng::seed_from_u64(7);

        let (first, excluded) = select_exercises(
            &pool,
            &[MuscleGroup::Core],
            Difficulty::Beginner,
            2,
            HashSet::new(),
            &mut rng,
        );
        let (second, excluded) = select_exercises(
            &pool,
            &[MuscleGroup::Core],
            Difficulty::Beginner,
            2,
            excluded,
            &mut rng,
        );

        for e in &first {
            assert!(excluded.contains(&e.id));
            assert!(second.iter().all(|s| s.id != e.id));
        }
    }

    #[test]
    fn test_underfilled_day_is_not_an_error() {
        let pool = pool();
        let mut rng = StdRng::seed_from_u64(7);

        let (chosen, _) = select_exercises(
            &pool,
            &[MuscleGroup::Cardio],
            Difficulty::Beginner,
            50,
            HashSet::new(),
            &mut rng,
        );

        assert!(chosen.len() < 50);
        assert!(!chosen.is_empty());
    }

    #[test]
    fn test_seeded_selection_is_reproducible() {
        let pool = pool();

        let mut rng_a = StdRng::seed_from_u64(42);
        let mut rng_b = StdRng::seed_from_u64(42);

        let (a, _) = select_exercises(
            &pool,
            &[MuscleGroup::Legs, MuscleGroup::Glutes],
            Difficulty::Intermediate,
            4,
            HashSet::new(),
            &mut rng_a,
        );
        let (b, _) = select_exercises(
            &pool,
            &[MuscleGroup::Legs, MuscleGroup::Glutes],
            Difficulty::Intermediate,
            4,
            HashSet::new(),
            &mut rng_b,
        );

        let ids_a: Vec<_> = a.iter().map(|e| &e.id).collect();
        let ids_b: Vec<_> = b.iter().map(|e| &e.id).collect();
        assert_eq!(ids_a, ids_b);
    }
}
