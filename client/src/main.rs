//! SynergyFit Insights CLI
//!
//! Drives the full submission pipeline from the command line: stages the
//! three export files, applies preference flags, submits them to the
//! analysis service, and renders the returned insights as text.

use anyhow::{bail, Context, Result};
use clap::{Parser, ValueEnum};
use tracing::info;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use synergyfit_client::config::ClientConfig;
use synergyfit_client::controller::{AnalysisController, RequestState, TriggerOutcome};
use synergyfit_client::gateway::AnalysisGateway;
use synergyfit_client::stores::{FileSelection, FileSlot, PreferencesStore, StagedFile};
use synergyfit_client::view_model::{ChartSeries, ResultViewModel};
use synergyfit_shared::models::{Goal, Sex};

#[derive(Debug, Clone, Copy, ValueEnum)]
enum GoalArg {
    MuscleGain,
    FatLoss,
    Maintenance,
}

impl From<GoalArg> for Goal {
    fn from(arg: GoalArg) -> Self {
        match arg {
            GoalArg::MuscleGain => Goal::MuscleGain,
            GoalArg::FatLoss => Goal::FatLoss,
            GoalArg::Maintenance => Goal::Maintenance,
        }
    }
}

#[derive(Debug, Clone, Copy, ValueEnum)]
enum SexArg {
    M,
    F,
}

impl From<SexArg> for Sex {
    fn from(arg: SexArg) -> Self {
        match arg {
            SexArg::M => Sex::M,
            SexArg::F => Sex::F,
        }
    }
}

/// Upload fitness exports and view the analysis service's insights
#[derive(Debug, Parser)]
#[command(name = "synergyfit-insights", version)]
struct Cli {
    /// Strong app workout export (CSV)
    workout_file: std::path::PathBuf,
    /// MyFitnessPal nutrition export (CSV)
    nutrition_file: std::path::PathBuf,
    /// MyFitnessPal weight export (CSV)
    weight_file: std::path::PathBuf,

    /// Training goal
    #[arg(long, value_enum)]
    goal: Option<GoalArg>,
    /// Comma-separated exercise names to analyze in depth
    #[arg(long)]
    exercises: Option<String>,
    /// Height in centimeters
    #[arg(long)]
    height: Option<f64>,
    /// Age in years
    #[arg(long)]
    age: Option<f64>,
    /// Biological sex
    #[arg(long, value_enum)]
    sex: Option<SexArg>,
    /// TDEE activity multiplier (1.2 sedentary .. 1.9 very active)
    #[arg(long)]
    activity: Option<f64>,
}

#[tokio::main]
async fn main() -> Result<()> {
    // Load environment variables from .env file
    dotenvy::dotenv().ok();

    init_tracing();

    let cli = Cli::parse();
    let config = ClientConfig::load()?;

    info!(
        version = env!("CARGO_PKG_VERSION"),
        base_url = %config.api.base_url,
        "Starting SynergyFit Insights client"
    );

    let files = stage_files(&cli)?;
    let prefs = build_preferences(&cli);

    let controller = AnalysisController::new(AnalysisGateway::new(&config.api));

    match controller.trigger(&files, prefs.current()).await {
        TriggerOutcome::MissingInput(slots) => {
            let labels: Vec<&str> = slots.iter().map(|slot| slot.label()).collect();
            bail!("Please upload all required data files (missing: {})", labels.join(", "));
        }
        TriggerOutcome::AlreadyInFlight => {
            // Single-shot CLI; cannot happen with one trigger call.
            bail!("A submission is already in flight");
        }
        TriggerOutcome::Submitted => {}
    }

    match controller.state() {
        RequestState::Succeeded(_) => {
            let view = controller
                .view_model()
                .context("succeeded state must yield a view model")?;
            render(&view);
            Ok(())
        }
        RequestState::Failed(message) => bail!("Analysis failed: {message}"),
        RequestState::Idle | RequestState::Loading => {
            bail!("Submission ended in a non-terminal state")
        }
    }
}

fn init_tracing() {
    let env_filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| "synergyfit_client=info".into());

    tracing_subscriber::registry()
        .with(env_filter)
        .with(tracing_subscriber::fmt::layer())
        .init();
}

fn stage_files(cli: &Cli) -> Result<FileSelection> {
    let mut files = FileSelection::new();
    for (slot, path) in [
        (FileSlot::Workout, &cli.workout_file),
        (FileSlot::Nutrition, &cli.nutrition_file),
        (FileSlot::Weight, &cli.weight_file),
    ] {
        let content = std::fs::read(path)
            .with_context(|| format!("reading {} {}", slot.label(), path.display()))?;
        let name = path
            .file_name()
            .map(|n| n.to_string_lossy().into_owned())
            .unwrap_or_else(|| slot.field_name().to_string());
        files.stage(slot, StagedFile::new(name, content));
    }
    Ok(files)
}

fn build_preferences(cli: &Cli) -> PreferencesStore {
    let mut prefs = PreferencesStore::new();
    if let Some(goal) = cli.goal {
        prefs.set_goal(goal.into());
    }
    if let Some(text) = &cli.exercises {
        prefs.set_target_exercises_text(text.clone());
    }
    if let Some(height) = cli.height {
        prefs.set_height(height);
    }
    if let Some(age) = cli.age {
        prefs.set_age(age);
    }
    if let Some(sex) = cli.sex {
        prefs.set_sex(sex.into());
    }
    if let Some(activity) = cli.activity {
        prefs.set_activity_multiplier(activity);
    }
    prefs
}

fn render(view: &ResultViewModel) {
    println!("=== Summary ===");
    println!("Estimated TDEE:      {:.0} kcal", view.summary.estimated_tdee);
    println!("Current BMR:         {:.0} kcal", view.summary.current_bmr);
    println!(
        "Suggested calories:  {:.0} kcal",
        view.summary.suggested_calorie_target
    );
    println!("Key recommendation:  {}", view.summary.key_recommendation);

    for exercise in &view.progression {
        println!();
        println!("=== {} ===", exercise.exercise_name);
        let last = &exercise.last_performance;
        println!(
            "Last performance: {} — {} kg x {} reps (e1RM {:.1} kg)",
            last.date, last.weight, last.reps, last.estimated_one_rep_max
        );
        render_series("e1RM trend", &exercise.e1rm_series);
        render_series("Volume trend", &exercise.volume_series);
        if let Some(info) = &exercise.stagnation_info {
            println!("Stagnation: {info}");
        }
        if let Some(suggestion) = &exercise.progression_suggestion {
            println!("Suggestion: {suggestion}");
        }
    }

    println!();
    println!("=== Nutrition & Weight ===");
    let trends = &view.trends;
    println!("Current weight:      {:.1} kg", trends.current_weight);
    println!("Total change:        {:+.1} kg", trends.total_weight_change);
    println!("Last 4 weeks:        {:+.1} kg", trends.recent_weight_change);
    println!("Avg daily calories:  {:.0} kcal", trends.avg_daily_calories);
    println!("Suggested calories:  {:.0} kcal", trends.suggested_calories);
    render_series("Weight trend", &trends.weight_series);
    for row in &trends.macros {
        println!("  {:<8} {:>5.0} g  ({:.0}%)", row.name, row.grams, row.percentage);
    }

    if !view.recommendations.is_empty() {
        println!();
        println!("=== Recommendations ===");
        for (i, recommendation) in view.recommendations.iter().enumerate() {
            println!("{}. {recommendation}", i + 1);
        }
    }
}

fn render_series(title: &str, series: &ChartSeries) {
    if series.is_empty() {
        return;
    }
    let first = series.values.first().copied().unwrap_or_default();
    let last = series.values.last().copied().unwrap_or_default();
    println!(
        "{title}: {} points, {:.1} -> {:.1} ({} .. {})",
        series.values.len(),
        first,
        last,
        series.labels.first().map(String::as_str).unwrap_or("-"),
        series.labels.last().map(String::as_str).unwrap_or("-"),
    );
}
