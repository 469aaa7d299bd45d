use chrono::{Local, NaiveDate, NaiveTime, Utc};
use clap::{Parser, Subcommand, ValueEnum};
use nutri_core::units::{format_height, format_weight, format_weight_change};
use nutri_core::*;
use serde::Serialize;
use std::path::{Path, PathBuf};

#[derive(Parser)]
#[command(name = "nutri")]
#[command(about = "Health metrics and nutrition planning", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,

    /// Override data directory
    #[arg(long, global = true)]
    data_dir: Option<PathBuf>,

    /// Read this snapshot file instead of <data-dir>/snapshot.json
    #[arg(long, global = true)]
    snapshot: Option<PathBuf>,

    /// Display units (defaults to the profile, then the config file)
    #[arg(long, global = true, value_enum)]
    units: Option<UnitsArg>,

    /// Print JSON instead of text
    #[arg(long, global = true)]
    json: bool,

    /// Increase log verbosity (-v info, -vv debug)
    #[arg(short, long, global = true, action = clap::ArgAction::Count)]
    verbose: u8,
}

#[derive(Subcommand)]
enum Commands {
    /// Show derived metrics for the profile and current weight (default)
    Report,

    /// Summarize one day of the food log
    Day {
        /// Day to summarize (defaults to the latest logged day)
        #[arg(long)]
        date: Option<NaiveDate>,
    },

    /// Show net weight change over a window
    Trend {
        /// Window length in days ending now
        #[arg(long, conflicts_with = "since", value_parser = clap::value_parser!(i64).range(0..))]
        days: Option<i64>,

        /// Start of the window (YYYY-MM-DD)
        #[arg(long)]
        since: Option<NaiveDate>,
    },

    /// List profile fields still needed for complete metrics
    Missing,
}

#[derive(Clone, Copy, ValueEnum)]
enum UnitsArg {
    Metric,
    Imperial,
}

impl From<UnitsArg> for UnitPreference {
    fn from(arg: UnitsArg) -> Self {
        match arg {
            UnitsArg::Metric => UnitPreference::Metric,
            UnitsArg::Imperial => UnitPreference::Imperial,
        }
    }
}

const DEFAULT_TREND_DAYS: i64 = 30;

fn main() -> Result<()> {
    let cli = Cli::parse();

    nutri_core::logging::init_with_level(nutri_core::logging::level_for_verbosity(cli.verbose));

    let config = Config::load()?;
    let mut data = config.data.clone();
    if let Some(dir) = cli.data_dir {
        data.data_dir = dir;
    }

    let snapshot = load_snapshot(cli.snapshot.as_deref(), &data)?;
    let units = cli
        .units
        .map(UnitPreference::from)
        .or(snapshot.profile.unit_preference)
        .unwrap_or(config.display.units);

    match cli.command.unwrap_or(Commands::Report) {
        Commands::Report => cmd_report(&snapshot, units, cli.json),
        Commands::Day { date } => cmd_day(&snapshot, date, cli.json),
        Commands::Trend { days, since } => cmd_trend(&snapshot, days, since, units, cli.json),
        Commands::Missing => cmd_missing(&snapshot, cli.json),
    }
}

fn load_snapshot(explicit: Option<&Path>, data: &config::DataConfig) -> Result<Snapshot> {
    let mut snapshot = match explicit {
        Some(path) if !path.exists() => {
            return Err(Error::Snapshot(format!(
                "Snapshot file not found: {}",
                path.display()
            )));
        }
        Some(path) => Snapshot::load(path)?,
        None => Snapshot::load(&data.snapshot_path())?,
    };

    let extra = load_weights_csv(&data.weights_csv_path())?;
    if !extra.is_empty() {
        tracing::info!("Merging {} weights from CSV", extra.len());
        snapshot.merge_weights(extra);
    }

    Ok(snapshot)
}

fn print_json<T: Serialize>(value: &T) -> Result<()> {
    println!("{}", serde_json::to_string_pretty(value)?);
    Ok(())
}

fn or_na(value: Option<String>) -> String {
    value.unwrap_or_else(|| "n/a".into())
}

fn cmd_report(snapshot: &Snapshot, units: UnitPreference, json: bool) -> Result<()> {
    let weight = snapshot.current_weight();
    let metrics = derive_metrics(&snapshot.profile, weight);

    if json {
        return print_json(&metrics);
    }

    println!("Profile");
    println!(
        "  Height:    {}",
        or_na(snapshot.profile.height_cm.map(|h| format_height(h, units)))
    );
    println!("  Weight:    {}", or_na(weight.map(|w| format_weight(w, units))));
    println!();

    println!("Body composition");
    println!(
        "  BMI:       {}",
        or_na(metrics.bmi.zip(metrics.bmi_category).map(|(b, c)| format!("{:.1} ({})", b, c)))
    );
    println!(
        "  Body fat:  {}",
        or_na(
            metrics
                .body_fat_percent
                .zip(metrics.body_fat_category)
                .map(|(bf, c)| format!("{:.1}% ({})", bf, c))
        )
    );
    println!();

    println!("Energy");
    println!("  BMR:       {}", or_na(metrics.bmr.map(|b| format!("{:.0} kcal", b))));
    println!(
        "  TDEE:      {} [{}]",
        or_na(metrics.tdee.map(|t| format!("{:.0} kcal", t))),
        metrics.activity_level
    );
    println!();

    println!("Calories");
    let targets = metrics.calorie_targets;
    println!(
        "  Lose / Maintain / Gain: {} / {} / {} kcal",
        targets.lose, targets.maintain, targets.gain
    );
    if metrics.recommended_daily_calories > 0 {
        println!(
            "  Recommended: {} kcal/day {}",
            metrics.recommended_daily_calories, metrics.calorie_goal_description
        );
    } else {
        println!("  Recommended: n/a (set weight, height, age, activity and goal)");
    }
    println!();

    println!("Macros");
    let split = metrics.macro_split;
    let grams = metrics.macro_grams;
    println!(
        "  Protein {}% ({} g) | Carbs {}% ({} g) | Fat {}% ({} g)",
        split.protein_pct, grams.protein_g, split.carbs_pct, grams.carbs_g, split.fat_pct, grams.fat_g
    );
    if let (Some(per_kg), Some(protein_g)) = (split.protein_per_kg, split.recommended_protein_g) {
        println!("  Protein target: {} g ({:.1} g/kg)", protein_g, per_kg);
    }
    println!();

    println!("Exercise");
    let exercise = metrics.exercise;
    if exercise.recommendation == ExerciseRecommendation::Unavailable {
        println!("  n/a");
    } else {
        println!(
            "  Burn {} kcal/day ({} kcal/week)",
            exercise.daily_burn, exercise.weekly_burn
        );
        println!(
            "  Light {} min | Moderate {} min | Intense {} min",
            exercise.light_minutes, exercise.moderate_minutes, exercise.intense_minutes
        );
        if exercise.safety_adjusted {
            println!("  Intake raised to the safety floor; extra burn keeps the deficit");
        }
    }

    if !metrics.missing_fields.is_empty() {
        println!();
        println!("Missing: {}", join_fields(&metrics.missing_fields));
    }

    Ok(())
}

#[derive(Serialize)]
struct DayReport<'a> {
    date: NaiveDate,
    summary: &'a DaySummary,
    progress: DayProgress,
}

fn cmd_day(snapshot: &Snapshot, date: Option<NaiveDate>, json: bool) -> Result<()> {
    let date = date
        .or_else(|| snapshot.latest_logged_day())
        .unwrap_or_else(|| Local::now().date_naive());

    let summary = aggregate_day(snapshot.entries_for(date));
    let metrics = derive_metrics(&snapshot.profile, snapshot.current_weight());
    let progress = DayProgress::new(&summary, metrics.recommended_daily_calories);

    if json {
        return print_json(&DayReport {
            date,
            summary: &summary,
            progress,
        });
    }

    println!("Food log for {} ({} entries)", date, summary.entry_count);
    for (slot, meal) in &summary.per_meal {
        print_nutrition_line(&slot.to_string(), meal);
    }
    print_nutrition_line("Total", &summary.totals);
    println!(
        "  Macros: Protein {:.0}% | Carbs {:.0}% | Fat {:.0}%",
        summary.macro_pct.protein, summary.macro_pct.carbs, summary.macro_pct.fat
    );

    match (progress.target_calories, progress.remaining_calories) {
        (Some(target), Some(remaining)) if remaining >= 0 => {
            println!("  Target: {} kcal, {} kcal remaining", target, remaining)
        }
        (Some(target), Some(remaining)) => {
            println!("  Target: {} kcal, {} kcal over", target, -remaining)
        }
        _ => println!("  Target: n/a"),
    }

    Ok(())
}

fn print_nutrition_line(label: &str, n: &Nutrition) {
    println!(
        "  {:<10} {:>6.0} kcal  P {:.1} g  C {:.1} g  F {:.1} g",
        label, n.calories, n.protein_g, n.carbs_g, n.fat_g
    );
}

fn cmd_trend(
    snapshot: &Snapshot,
    days: Option<i64>,
    since: Option<NaiveDate>,
    units: UnitPreference,
    json: bool,
) -> Result<()> {
    let (change, label) = match since {
        Some(date) => {
            let start = date.and_time(NaiveTime::MIN).and_utc();
            (weight_change_since(&snapshot.weights, start), format!("since {}", date))
        }
        None => {
            let days = days.unwrap_or(DEFAULT_TREND_DAYS);
            (
                weight_change_over_days(&snapshot.weights, Utc::now(), days),
                format!("over the last {} days", days),
            )
        }
    };

    if json {
        return print_json(&serde_json::json!({ "window": label, "change_kg": change }));
    }

    match change {
        Some(kg) => println!("Weight change {}: {}", label, format_weight_change(kg, units)),
        None => println!("Not enough weight history {}", label),
    }

    Ok(())
}

fn join_fields(fields: &[MissingField]) -> String {
    fields
        .iter()
        .map(ToString::to_string)
        .collect::<Vec<_>>()
        .join(", ")
}

fn cmd_missing(snapshot: &Snapshot, json: bool) -> Result<()> {
    let missing = missing_fields(&snapshot.profile, snapshot.current_weight());

    if json {
        return print_json(&missing);
    }

    if missing.is_empty() {
        println!("Profile complete");
    } else {
        println!("Missing: {}", join_fields(&missing));
    }

    Ok(())
}
