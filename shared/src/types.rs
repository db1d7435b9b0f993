//! Analysis service response types
//!
//! These mirror the JSON payload returned by `POST /analyze`. The client
//! treats the payload as data; none of the figures are recomputed locally.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// A single dated point in a trend series
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ChartDataPoint {
    pub date: NaiveDate,
    pub value: f64,
}

/// Headline metabolic estimates and the key recommendation
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct AnalysisSummary {
    #[serde(rename = "estimatedTDEE")]
    pub estimated_tdee: f64,
    #[serde(rename = "currentBMR")]
    pub current_bmr: f64,
    pub suggested_calorie_target: f64,
    pub key_recommendation: String,
}

/// Most recent logged performance for an exercise
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct LastPerformance {
    pub date: NaiveDate,
    /// Heaviest weight of the session, kg
    pub weight: f64,
    pub reps: u32,
    pub estimated_one_rep_max: f64,
}

/// Strength trend data for one exercise
///
/// The commentary fields are `null` on the wire when the service detected
/// no stagnation; an absent key decodes the same way.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct WorkoutProgression {
    pub exercise_name: String,
    pub e1rm_trend_data: Vec<ChartDataPoint>,
    pub volume_trend_data: Vec<ChartDataPoint>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub stagnation_info: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub progression_suggestion: Option<String>,
    pub last_performance: LastPerformance,
}

/// Grams and share of total calories for one macronutrient
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct MacroNutrient {
    pub grams: f64,
    pub percentage: f64,
}

/// Macro split; percentages are expected to sum to ≈100 but the client
/// does not enforce that
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct MacroBreakdown {
    pub protein: MacroNutrient,
    pub carbs: MacroNutrient,
    pub fat: MacroNutrient,
}

/// Weight trajectory and nutrition figures
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct NutritionWeightTrends {
    pub weight_trend_data: Vec<ChartDataPoint>,
    /// Latest logged weight, kg
    pub current_weight: f64,
    /// Change over the whole log, kg
    pub total_weight_change: f64,
    /// Change over the last 4 weeks, kg
    pub recent_weight_change: f64,
    pub avg_daily_calories: f64,
    pub macro_breakdown: MacroBreakdown,
    pub suggested_calories: f64,
}

/// Full `POST /analyze` success payload
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct AnalysisResult {
    pub summary: AnalysisSummary,
    pub workout_progression: Vec<WorkoutProgression>,
    pub nutrition_weight_trends: NutritionWeightTrends,
    pub general_recommendations: Vec<String>,
}

/// Structured failure payload; either field may carry the surfaced text
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct ErrorBody {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
}

impl ErrorBody {
    /// Text to surface to the user, falling back to a generic message
    pub fn surfaced_message(&self) -> &str {
        self.error
            .as_deref()
            .or(self.message.as_deref())
            .unwrap_or("Unknown server error")
    }
}
