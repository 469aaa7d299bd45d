#![forbid(unsafe_code)]

//! Core calculation engine for the nutri health and nutrition planner.
//!
//! This crate provides:
//! - Domain types (profile, weight observations, food entries, derived metrics)
//! - Body composition, energy expenditure and goal resolution formulas
//! - Daily food log aggregation and weight trends
//! - Snapshot loading, configuration and display unit formatting
//!
//! Every calculation is a pure function of its inputs. Missing inputs
//! degrade to `None`, zeroed records or the base macro split.

pub mod types;
pub mod error;
pub mod config;
pub mod logging;
pub mod body;
pub mod energy;
pub mod goals;
pub mod exercise;
pub mod daily;
pub mod trend;
pub mod units;
pub mod snapshot;
pub mod engine;

// Re-export commonly used types
pub use error::{Error, Result};
pub use types::*;
pub use config::Config;
pub use body::{classify_bmi, classify_body_fat, compute_bmi, compute_body_fat_percent};
pub use energy::{activity_level_label, compute_bmr, compute_tdee};
pub use goals::{
    calorie_goal_description, calorie_targets, macronutrient_split, recommended_daily_calories,
};
pub use exercise::recommended_exercise_burn;
pub use daily::{aggregate_day, summarize_days, DayProgress, DaySummary, MacroPercentages};
pub use trend::{latest_observation, weight_change_over_days, weight_change_since};
pub use snapshot::{load_weights_csv, Snapshot};
pub use engine::{derive_metrics, missing_fields};
