//! User-facing data models for the SynergyFit Insights client

use serde::{Deserialize, Serialize};

/// Training goal driving the calorie-target adjustment
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum Goal {
    MuscleGain,
    FatLoss,
    Maintenance,
}

impl Default for Goal {
    fn default() -> Self {
        Goal::MuscleGain
    }
}

/// Biological sex as expected by the analysis service's BMR formulas
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
pub enum Sex {
    M,
    F,
}

impl Default for Sex {
    fn default() -> Self {
        Sex::M
    }
}

/// Analysis parameters, immutable per submission
///
/// Serialized camelCase to match the service contract. All fields hold a
/// value at submission time; numeric fields coerced from invalid text carry
/// `NaN` and are surfaced as-is (range rejection is the service's job).
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct UserPreferences {
    pub goal: Goal,
    /// Exercises to analyze in depth; empty means "analyze all"
    pub target_exercises: Vec<String>,
    /// Height in centimeters, expected range [100, 250]
    pub height: f64,
    /// Age in years, expected range [16, 100]
    pub age: f64,
    pub sex: Sex,
    /// TDEE activity multiplier, expected range [1.2, 1.9]
    pub activity_multiplier: f64,
}

impl Default for UserPreferences {
    fn default() -> Self {
        Self {
            goal: Goal::default(),
            target_exercises: Vec::new(),
            height: 175.0,
            age: 30.0,
            sex: Sex::default(),
            activity_multiplier: 1.55,
        }
    }
}
