//! Staged input files for submission
//!
//! Three named slots, one per required source export. No content or size
//! validation happens here; the analysis service rejects unparseable files.

use std::fmt;

/// The three required input categories
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FileSlot {
    /// Strong app workout export
    Workout,
    /// MyFitnessPal nutrition export
    Nutrition,
    /// MyFitnessPal weight export
    Weight,
}

impl FileSlot {
    /// All slots, in the fixed reporting order
    pub const ALL: [FileSlot; 3] = [FileSlot::Workout, FileSlot::Nutrition, FileSlot::Weight];

    /// Multipart field name expected by the analysis service
    pub fn field_name(self) -> &'static str {
        match self {
            FileSlot::Workout => "strong_file",
            FileSlot::Nutrition => "nutrition_file",
            FileSlot::Weight => "weight_file",
        }
    }

    /// Human-readable label for missing-input messages
    pub fn label(self) -> &'static str {
        match self {
            FileSlot::Workout => "workout log",
            FileSlot::Nutrition => "nutrition log",
            FileSlot::Weight => "weight log",
        }
    }
}

impl fmt::Display for FileSlot {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// One uploaded file: its original name and raw bytes
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StagedFile {
    pub name: String,
    pub content: Vec<u8>,
}

impl StagedFile {
    pub fn new(name: impl Into<String>, content: Vec<u8>) -> Self {
        Self {
            name: name.into(),
            content,
        }
    }
}

/// Current fill state of the three input slots
#[derive(Debug, Clone, Default)]
pub struct FileSelection {
    workout: Option<StagedFile>,
    nutrition: Option<StagedFile>,
    weight: Option<StagedFile>,
}

impl FileSelection {
    pub fn new() -> Self {
        Self::default()
    }

    /// Replace the file in one slot; last write wins
    pub fn stage(&mut self, slot: FileSlot, file: StagedFile) {
        *self.slot_mut(slot) = Some(file);
    }

    /// Empty one slot
    pub fn clear(&mut self, slot: FileSlot) {
        *self.slot_mut(slot) = None;
    }

    pub fn get(&self, slot: FileSlot) -> Option<&StagedFile> {
        match slot {
            FileSlot::Workout => self.workout.as_ref(),
            FileSlot::Nutrition => self.nutrition.as_ref(),
            FileSlot::Weight => self.weight.as_ref(),
        }
    }

    /// Slots still awaiting a file, in `FileSlot::ALL` order
    pub fn missing_slots(&self) -> Vec<FileSlot> {
        FileSlot::ALL
            .into_iter()
            .filter(|slot| self.get(*slot).is_none())
            .collect()
    }

    /// True when all three slots hold a file
    pub fn is_complete(&self) -> bool {
        self.missing_slots().is_empty()
    }

    fn slot_mut(&mut self, slot: FileSlot) -> &mut Option<StagedFile> {
        match slot {
            FileSlot::Workout => &mut self.workout,
            FileSlot::Nutrition => &mut self.nutrition,
            FileSlot::Weight => &mut self.weight,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_selection_reports_all_slots_missing() {
        let selection = FileSelection::new();
        assert!(!selection.is_complete());
        assert_eq!(selection.missing_slots(), FileSlot::ALL.to_vec());
    }

    #[test]
    fn test_staging_fills_one_slot_only() {
        let mut selection = FileSelection::new();
        selection.stage(FileSlot::Nutrition, StagedFile::new("mfp.csv", vec![1, 2]));

        assert!(selection.get(FileSlot::Nutrition).is_some());
        assert_eq!(
            selection.missing_slots(),
            vec![FileSlot::Workout, FileSlot::Weight]
        );
    }

    #[test]
    fn test_staging_is_last_write_wins() {
        let mut selection = FileSelection::new();
        selection.stage(FileSlot::Workout, StagedFile::new("first.csv", vec![1]));
        selection.stage(FileSlot::Workout, StagedFile::new("second.csv", vec![2]));

        let staged = selection.get(FileSlot::Workout).unwrap();
        assert_eq!(staged.name, "second.csv");
        assert_eq!(staged.content, vec![2]);
    }

    #[test]
    fn test_clearing_a_slot_makes_selection_incomplete() {
        let mut selection = FileSelection::new();
        for slot in FileSlot::ALL {
            selection.stage(slot, StagedFile::new("f.csv", vec![0]));
        }
        assert!(selection.is_complete());

        selection.clear(FileSlot::Weight);
        assert_eq!(selection.missing_slots(), vec![FileSlot::Weight]);
    }

    #[test]
    fn test_field_names_match_service_contract() {
        assert_eq!(FileSlot::Workout.field_name(), "strong_file");
        assert_eq!(FileSlot::Nutrition.field_name(), "nutrition_file");
        assert_eq!(FileSlot::Weight.field_name(), "weight_file");
    }
}
