//! Result view model
//!
//! Projects a decoded [`AnalysisResult`] into four independently renderable
//! sections. Pure field projection: trend series are flattened into the
//! labels-plus-values shape the chart widgets consume, nothing is dropped
//! or reordered, and no figure is recomputed.

use synergyfit_shared::types::{
    AnalysisResult, ChartDataPoint, MacroBreakdown, WorkoutProgression,
};

/// Labels and values for a line or bar chart, order preserved
#[derive(Debug, Clone, PartialEq, Default)]
pub struct ChartSeries {
    pub labels: Vec<String>,
    pub values: Vec<f64>,
}

impl ChartSeries {
    fn from_points(points: &[ChartDataPoint]) -> Self {
        Self {
            labels: points.iter().map(|p| p.date.to_string()).collect(),
            values: points.iter().map(|p| p.value).collect(),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }
}

/// Headline summary card
#[derive(Debug, Clone, PartialEq)]
pub struct SummaryView {
    pub estimated_tdee: f64,
    pub current_bmr: f64,
    pub suggested_calorie_target: f64,
    pub key_recommendation: String,
}

/// Last logged performance for an exercise
#[derive(Debug, Clone, PartialEq)]
pub struct LastPerformanceView {
    pub date: String,
    pub weight: f64,
    pub reps: u32,
    pub estimated_one_rep_max: f64,
}

/// One exercise's progression card
#[derive(Debug, Clone, PartialEq)]
pub struct ExerciseProgressionView {
    pub exercise_name: String,
    pub e1rm_series: ChartSeries,
    pub volume_series: ChartSeries,
    pub last_performance: LastPerformanceView,
    pub stagnation_info: Option<String>,
    pub progression_suggestion: Option<String>,
}

/// One row of the macro table
#[derive(Debug, Clone, PartialEq)]
pub struct MacroRow {
    pub name: &'static str,
    pub grams: f64,
    pub percentage: f64,
}

/// Nutrition and weight trends card
#[derive(Debug, Clone, PartialEq)]
pub struct NutritionTrendsView {
    pub weight_series: ChartSeries,
    pub current_weight: f64,
    pub total_weight_change: f64,
    pub recent_weight_change: f64,
    pub avg_daily_calories: f64,
    pub suggested_calories: f64,
    /// Protein, carbs, fat — fixed order
    pub macros: Vec<MacroRow>,
}

/// The four sections of a succeeded analysis, ready for presentation
#[derive(Debug, Clone, PartialEq)]
pub struct ResultViewModel {
    pub summary: SummaryView,
    pub progression: Vec<ExerciseProgressionView>,
    pub trends: NutritionTrendsView,
    pub recommendations: Vec<String>,
}

impl ResultViewModel {
    /// Derive the view model from a result; recomputed only when the
    /// underlying result changes, never cached beyond its lifetime
    pub fn project(result: &AnalysisResult) -> Self {
        Self {
            summary: SummaryView {
                estimated_tdee: result.summary.estimated_tdee,
                current_bmr: result.summary.current_bmr,
                suggested_calorie_target: result.summary.suggested_calorie_target,
                key_recommendation: result.summary.key_recommendation.clone(),
            },
            progression: result
                .workout_progression
                .iter()
                .map(Self::project_exercise)
                .collect(),
            trends: Self::project_trends(result),
            recommendations: result.general_recommendations.clone(),
        }
    }

    fn project_exercise(exercise: &WorkoutProgression) -> ExerciseProgressionView {
        ExerciseProgressionView {
            exercise_name: exercise.exercise_name.clone(),
            e1rm_series: ChartSeries::from_points(&exercise.e1rm_trend_data),
            volume_series: ChartSeries::from_points(&exercise.volume_trend_data),
            last_performance: LastPerformanceView {
                date: exercise.last_performance.date.to_string(),
                weight: exercise.last_performance.weight,
                reps: exercise.last_performance.reps,
                estimated_one_rep_max: exercise.last_performance.estimated_one_rep_max,
            },
            stagnation_info: exercise.stagnation_info.clone(),
            progression_suggestion: exercise.progression_suggestion.clone(),
        }
    }

    fn project_trends(result: &AnalysisResult) -> NutritionTrendsView {
        let trends = &result.nutrition_weight_trends;
        NutritionTrendsView {
            weight_series: ChartSeries::from_points(&trends.weight_trend_data),
            current_weight: trends.current_weight,
            total_weight_change: trends.total_weight_change,
            recent_weight_change: trends.recent_weight_change,
            avg_daily_calories: trends.avg_daily_calories,
            suggested_calories: trends.suggested_calories,
            macros: Self::macro_rows(&trends.macro_breakdown),
        }
    }

    fn macro_rows(macros: &MacroBreakdown) -> Vec<MacroRow> {
        vec![
            MacroRow {
                name: "protein",
                grams: macros.protein.grams,
                percentage: macros.protein.percentage,
            },
            MacroRow {
                name: "carbs",
                grams: macros.carbs.grams,
                percentage: macros.carbs.percentage,
            },
            MacroRow {
                name: "fat",
                grams: macros.fat.grams,
                percentage: macros.fat.percentage,
            },
        ]
    }
}
