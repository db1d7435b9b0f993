//! Common test fixtures for integration tests

use chrono::NaiveDate;
use synergyfit_client::stores::{FileSelection, FileSlot, StagedFile};
use synergyfit_shared::types::{
    AnalysisResult, AnalysisSummary, ChartDataPoint, LastPerformance, MacroBreakdown,
    MacroNutrient, NutritionWeightTrends, WorkoutProgression,
};

fn date(s: &str) -> NaiveDate {
    s.parse().unwrap()
}

/// A selection with all three slots staged with small CSV bodies
pub fn complete_selection() -> FileSelection {
    let mut selection = FileSelection::new();
    selection.stage(
        FileSlot::Workout,
        StagedFile::new("strong.csv", b"Date,Exercise,Weight,Reps\n".to_vec()),
    );
    selection.stage(
        FileSlot::Nutrition,
        StagedFile::new("nutrition.csv", b"Date,Calories,Protein\n".to_vec()),
    );
    selection.stage(
        FileSlot::Weight,
        StagedFile::new("weight.csv", b"Date,Weight\n".to_vec()),
    );
    selection
}

/// A representative service response with `estimatedTDEE == 2800`
pub fn sample_result() -> AnalysisResult {
    AnalysisResult {
        summary: AnalysisSummary {
            estimated_tdee: 2800.0,
            current_bmr: 1750.0,
            suggested_calorie_target: 3100.0,
            key_recommendation: "Eat in a small surplus.".to_string(),
        },
        workout_progression: vec![WorkoutProgression {
            exercise_name: "Bench Press".to_string(),
            e1rm_trend_data: vec![ChartDataPoint {
                date: date("2024-01-05"),
                value: 92.5,
            }],
            volume_trend_data: vec![ChartDataPoint {
                date: date("2024-01-05"),
                value: 3200.0,
            }],
            stagnation_info: None,
            progression_suggestion: None,
            last_performance: LastPerformance {
                date: date("2024-01-05"),
                weight: 85.0,
                reps: 5,
                estimated_one_rep_max: 92.5,
            },
        }],
        nutrition_weight_trends: NutritionWeightTrends {
            weight_trend_data: vec![ChartDataPoint {
                date: date("2024-01-01"),
                value: 78.2,
            }],
            current_weight: 78.2,
            total_weight_change: -1.3,
            recent_weight_change: -0.4,
            avg_daily_calories: 2650.0,
            macro_breakdown: MacroBreakdown {
                protein: MacroNutrient { grams: 160.0, percentage: 25.0 },
                carbs: MacroNutrient { grams: 320.0, percentage: 50.0 },
                fat: MacroNutrient { grams: 70.0, percentage: 25.0 },
            },
            suggested_calories: 3100.0,
        },
        general_recommendations: vec![],
    }
}
