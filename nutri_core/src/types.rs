//! Core domain types for the nutrition planning engine.
//!
//! This module defines the value records the engine reads and produces:
//! - Profile inputs (height, age, sex, activity, weight goal)
//! - Weight observations and food log entries
//! - Derived output records (metrics, targets, splits, plans)
//!
//! All weights are kilograms and all heights centimeters.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;

// ============================================================================
// Profile Types
// ============================================================================

/// Biological sex category used by the sex-specific formulas
#[derive(Clone, Copy, Debug, Serialize, Deserialize, PartialEq, Eq, Default)]
#[serde(rename_all = "snake_case")]
pub enum Sex {
    Male,
    Female,
    #[default]
    Unspecified,
}

/// Preferred units for display formatting
#[derive(Clone, Copy, Debug, Serialize, Deserialize, PartialEq, Eq, Default)]
#[serde(rename_all = "snake_case")]
pub enum UnitPreference {
    #[default]
    Metric,
    Imperial,
}

/// User biometric profile. Every field may be absent.
#[derive(Clone, Debug, Serialize, Deserialize, Default, PartialEq)]
pub struct Profile {
    #[serde(default)]
    pub height_cm: Option<f64>,
    #[serde(default)]
    pub age_years: Option<u32>,
    #[serde(default)]
    pub sex: Sex,
    /// Self-reported activity multiplier, typically 1.2 to 1.9
    #[serde(default)]
    pub activity_multiplier: Option<f64>,
    /// Signed kg/month: negative is loss, positive is gain
    #[serde(default)]
    pub monthly_weight_goal_kg: Option<f64>,
    #[serde(default)]
    pub unit_preference: Option<UnitPreference>,
}

// ============================================================================
// Observation and Log Types
// ============================================================================

/// A single body-weight measurement
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq)]
pub struct WeightObservation {
    pub weight_kg: f64,
    pub timestamp: DateTime<Utc>,
    #[serde(default)]
    pub note: Option<String>,
}

/// Meal slot a food entry was logged under
#[derive(Clone, Copy, Debug, Serialize, Deserialize, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[serde(rename_all = "snake_case")]
pub enum MealSlot {
    Breakfast,
    Lunch,
    Dinner,
    Snack,
}

impl fmt::Display for MealSlot {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            MealSlot::Breakfast => "Breakfast",
            MealSlot::Lunch => "Lunch",
            MealSlot::Dinner => "Dinner",
            MealSlot::Snack => "Snack",
        };
        f.write_str(label)
    }
}

fn default_serving_multiplier() -> f64 {
    1.0
}

/// A logged food item with per-serving nutrition
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq)]
pub struct FoodEntry {
    #[serde(default)]
    pub name: Option<String>,
    pub calories_per_serving: f64,
    #[serde(default)]
    pub protein_g_per_serving: f64,
    #[serde(default)]
    pub carbs_g_per_serving: f64,
    #[serde(default)]
    pub fat_g_per_serving: f64,
    #[serde(default = "default_serving_multiplier")]
    pub serving_multiplier: f64,
    pub meal_slot: MealSlot,
}

impl FoodEntry {
    /// Nutrition actually consumed (per-serving values times the multiplier)
    pub fn effective(&self) -> Nutrition {
        let m = self.serving_multiplier;
        Nutrition {
            calories: self.calories_per_serving * m,
            protein_g: self.protein_g_per_serving * m,
            carbs_g: self.carbs_g_per_serving * m,
            fat_g: self.fat_g_per_serving * m,
        }
    }
}

/// Calorie and macro gram totals
#[derive(Clone, Copy, Debug, Serialize, Deserialize, PartialEq, Default)]
pub struct Nutrition {
    pub calories: f64,
    pub protein_g: f64,
    pub carbs_g: f64,
    pub fat_g: f64,
}

impl std::ops::AddAssign for Nutrition {
    fn add_assign(&mut self, rhs: Self) {
        self.calories += rhs.calories;
        self.protein_g += rhs.protein_g;
        self.carbs_g += rhs.carbs_g;
        self.fat_g += rhs.fat_g;
    }
}

// ============================================================================
// Classification Types
// ============================================================================

/// BMI band
#[derive(Clone, Copy, Debug, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum BmiCategory {
    Underweight,
    Normal,
    Overweight,
    Obese,
}

impl fmt::Display for BmiCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            BmiCategory::Underweight => "Underweight",
            BmiCategory::Normal => "Normal",
            BmiCategory::Overweight => "Overweight",
            BmiCategory::Obese => "Obese",
        };
        f.write_str(label)
    }
}

/// Six-tier body fat scale
#[derive(Clone, Copy, Debug, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum BodyFatCategory {
    Essential,
    Athletic,
    Fitness,
    Average,
    AboveAverage,
    Obese,
}

impl fmt::Display for BodyFatCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            BodyFatCategory::Essential => "Essential",
            BodyFatCategory::Athletic => "Athletic",
            BodyFatCategory::Fitness => "Fitness",
            BodyFatCategory::Average => "Average",
            BodyFatCategory::AboveAverage => "Above Avg",
            BodyFatCategory::Obese => "Obese",
        };
        f.write_str(label)
    }
}

/// Direction of the monthly weight goal after the ±0.1 kg dead-zone
#[derive(Clone, Copy, Debug, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum GoalDirection {
    Lose,
    Maintain,
    Gain,
}

/// Profile fields the engine needs for a complete set of metrics
#[derive(Clone, Copy, Debug, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum MissingField {
    Weight,
    Height,
    Age,
    Gender,
    ActivityLevel,
}

impl fmt::Display for MissingField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            MissingField::Weight => "Weight",
            MissingField::Height => "Height",
            MissingField::Age => "Age",
            MissingField::Gender => "Gender",
            MissingField::ActivityLevel => "Activity Level",
        };
        f.write_str(label)
    }
}

// ============================================================================
// Derived Output Types
// ============================================================================

/// Coarse goal-agnostic calorie bands
#[derive(Clone, Copy, Debug, Serialize, Deserialize, PartialEq, Eq, Default)]
pub struct CalorieTargets {
    pub lose: i64,
    pub maintain: i64,
    pub gain: i64,
}

/// Macro gram equivalents of a calorie target
#[derive(Clone, Copy, Debug, Serialize, Deserialize, PartialEq, Eq, Default)]
pub struct MacroGrams {
    pub protein_g: i64,
    pub carbs_g: i64,
    pub fat_g: i64,
}

/// Macronutrient percentage split with optional protein guidance
#[derive(Clone, Copy, Debug, Serialize, Deserialize, PartialEq)]
pub struct MacroSplit {
    pub protein_pct: i32,
    pub carbs_pct: i32,
    pub fat_pct: i32,
    pub protein_per_kg: Option<f64>,
    pub recommended_protein_g: Option<i64>,
}

/// Kind of supplementary exercise recommendation
#[derive(Clone, Copy, Debug, Serialize, Deserialize, PartialEq, Eq, Default)]
#[serde(rename_all = "snake_case")]
pub enum ExerciseRecommendation {
    /// Inputs were missing, nothing to recommend
    #[default]
    Unavailable,
    Lose,
    Maintain,
    Gain,
}

/// Recommended exercise-calorie budget with minute equivalents
#[derive(Clone, Copy, Debug, Serialize, Deserialize, PartialEq, Eq, Default)]
pub struct ExercisePlan {
    pub daily_burn: i64,
    pub weekly_burn: i64,
    pub light_minutes: i64,
    pub moderate_minutes: i64,
    pub intense_minutes: i64,
    pub recommendation: ExerciseRecommendation,
    /// Set when intake was raised to the safety floor and the deficit moved to exercise
    pub safety_adjusted: bool,
}

/// Everything the engine derives from a profile and the current weight
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq)]
pub struct DerivedMetrics {
    pub bmi: Option<f64>,
    pub bmi_category: Option<BmiCategory>,
    pub body_fat_percent: Option<f64>,
    pub body_fat_category: Option<BodyFatCategory>,
    pub bmr: Option<f64>,
    pub tdee: Option<f64>,
    pub activity_level: String,
    pub calorie_targets: CalorieTargets,
    pub recommended_daily_calories: i64,
    pub calorie_goal_description: String,
    pub macro_split: MacroSplit,
    pub macro_grams: MacroGrams,
    pub exercise: ExercisePlan,
    pub missing_fields: Vec<MissingField>,
}
