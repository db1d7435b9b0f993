//! User preferences store
//!
//! Field-level updates each produce a new immutable snapshot; a snapshot
//! handed out earlier never changes underneath its reader. The raw
//! target-exercise text is kept alongside the derived list so in-progress
//! typing is preserved.

use synergyfit_shared::models::{Goal, Sex, UserPreferences};
use synergyfit_shared::validation::parse_target_exercises;

/// Holds the current analysis parameters
#[derive(Debug, Clone, Default)]
pub struct PreferencesStore {
    current: UserPreferences,
    target_exercises_text: String,
}

impl PreferencesStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// The current snapshot
    pub fn current(&self) -> &UserPreferences {
        &self.current
    }

    /// Owned copy of the current snapshot, for submission
    pub fn snapshot(&self) -> UserPreferences {
        self.current.clone()
    }

    /// Raw comma-separated exercise text as the user typed it
    pub fn target_exercises_text(&self) -> &str {
        &self.target_exercises_text
    }

    pub fn set_goal(&mut self, goal: Goal) {
        self.replace(|prefs| prefs.goal = goal);
    }

    pub fn set_sex(&mut self, sex: Sex) {
        self.replace(|prefs| prefs.sex = sex);
    }

    /// Height in centimeters; `NaN` from invalid text input is stored as-is
    pub fn set_height(&mut self, height: f64) {
        self.replace(|prefs| prefs.height = height);
    }

    pub fn set_age(&mut self, age: f64) {
        self.replace(|prefs| prefs.age = age);
    }

    pub fn set_activity_multiplier(&mut self, multiplier: f64) {
        self.replace(|prefs| prefs.activity_multiplier = multiplier);
    }

    /// Update the raw exercise text and re-derive the submitted list
    pub fn set_target_exercises_text(&mut self, text: impl Into<String>) {
        let text = text.into();
        let derived = parse_target_exercises(&text);
        self.target_exercises_text = text;
        self.replace(|prefs| prefs.target_exercises = derived);
    }

    // Builds the next snapshot from a clone so existing snapshots stay intact.
    fn replace(&mut self, update: impl FnOnce(&mut UserPreferences)) {
        let mut next = self.current.clone();
        update(&mut next);
        self.current = next;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_store_holds_defaults() {
        let store = PreferencesStore::new();
        assert_eq!(store.current(), &UserPreferences::default());
        assert_eq!(store.target_exercises_text(), "");
    }

    #[test]
    fn test_field_update_does_not_mutate_earlier_snapshot() {
        let mut store = PreferencesStore::new();
        let before = store.snapshot();

        store.set_height(182.0);
        store.set_goal(Goal::FatLoss);

        assert_eq!(before.height, 175.0);
        assert_eq!(before.goal, Goal::MuscleGain);
        assert_eq!(store.current().height, 182.0);
        assert_eq!(store.current().goal, Goal::FatLoss);
    }

    #[test]
    fn test_exercise_text_kept_raw_and_derived() {
        let mut store = PreferencesStore::new();
        store.set_target_exercises_text("Bench Press,  Squat ,,Deadlift");

        assert_eq!(store.target_exercises_text(), "Bench Press,  Squat ,,Deadlift");
        assert_eq!(
            store.current().target_exercises,
            vec!["Bench Press", "Squat", "Deadlift"]
        );
    }

    #[test]
    fn test_nan_from_coercion_is_stored_as_is() {
        let mut store = PreferencesStore::new();
        store.set_age(synergyfit_shared::validation::parse_number("not a number"));
        assert!(store.current().age.is_nan());
    }
}
