//! SynergyFit Insights Shared Library
//!
//! This crate contains the wire-format data models exchanged with the
//! analysis service, plus the pure input-coercion helpers shared by the
//! client pipeline and its tests.

pub mod models;
pub mod types;
pub mod validation;

// Re-export commonly used items
pub use models::{Goal, Sex, UserPreferences};
pub use types::{
    AnalysisResult, AnalysisSummary, ChartDataPoint, ErrorBody, LastPerformance, MacroBreakdown,
    MacroNutrient, NutritionWeightTrends, WorkoutProgression,
};
pub use validation::{parse_number, parse_target_exercises};
