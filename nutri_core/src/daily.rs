//! Daily food log aggregation.
//!
//! Sums effective nutrition (per-serving values times the serving multiplier)
//! into day totals and per-meal subtotals, and derives each macro's share of
//! the calories coming from tracked macros.

use crate::{FoodEntry, MealSlot, Nutrition};
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Energy density of each macro in kcal per gram
pub const KCAL_PER_G_PROTEIN: f64 = 4.0;
pub const KCAL_PER_G_CARBS: f64 = 4.0;
pub const KCAL_PER_G_FAT: f64 = 9.0;

/// Share of macro calories per macro, 0-100
#[derive(Clone, Copy, Debug, Serialize, Deserialize, PartialEq, Default)]
pub struct MacroPercentages {
    pub protein: f64,
    pub carbs: f64,
    pub fat: f64,
}

impl MacroPercentages {
    /// Percentages relative to the calories contributed by the three macros
    ///
    /// Total calories are not the denominator since they may include
    /// untracked sources such as alcohol.
    pub fn from_grams(totals: &Nutrition) -> Self {
        let protein = totals.protein_g * KCAL_PER_G_PROTEIN;
        let carbs = totals.carbs_g * KCAL_PER_G_CARBS;
        let fat = totals.fat_g * KCAL_PER_G_FAT;
        let macro_calories = protein + carbs + fat;

        if macro_calories <= 0.0 {
            return Self::default();
        }

        Self {
            protein: protein / macro_calories * 100.0,
            carbs: carbs / macro_calories * 100.0,
            fat: fat / macro_calories * 100.0,
        }
    }
}

/// Aggregated nutrition for one day
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq, Default)]
pub struct DaySummary {
    pub totals: Nutrition,
    pub macro_pct: MacroPercentages,
    pub per_meal: BTreeMap<MealSlot, Nutrition>,
    pub entry_count: usize,
}

impl DaySummary {
    pub fn total_calories(&self) -> f64 {
        self.totals.calories
    }

    /// Subtotal for a meal slot (zero if nothing was logged there)
    pub fn meal(&self, slot: MealSlot) -> Nutrition {
        self.per_meal.get(&slot).copied().unwrap_or_default()
    }
}

/// Summarize a day's food entries
pub fn aggregate_day(entries: &[FoodEntry]) -> DaySummary {
    let mut totals = Nutrition::default();
    let mut per_meal: BTreeMap<MealSlot, Nutrition> = BTreeMap::new();

    for entry in entries {
        let effective = entry.effective();
        totals += effective;
        *per_meal.entry(entry.meal_slot).or_default() += effective;
    }

    DaySummary {
        macro_pct: MacroPercentages::from_grams(&totals),
        totals,
        per_meal,
        entry_count: entries.len(),
    }
}

/// Summarize several days; each day is aggregated independently
pub fn summarize_days(
    food_log: &BTreeMap<NaiveDate, Vec<FoodEntry>>,
) -> BTreeMap<NaiveDate, DaySummary> {
    food_log
        .iter()
        .map(|(date, entries)| (*date, aggregate_day(entries)))
        .collect()
}

/// Consumption compared against the recommended calorie target
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq)]
pub struct DayProgress {
    pub consumed_calories: i64,
    /// None when no recommendation could be made
    pub target_calories: Option<i64>,
    /// Negative once the target is exceeded
    pub remaining_calories: Option<i64>,
}

impl DayProgress {
    pub fn new(summary: &DaySummary, target_calories: i64) -> Self {
        let consumed = summary.total_calories().round() as i64;
        let target = (target_calories > 0).then_some(target_calories);

        Self {
            consumed_calories: consumed,
            target_calories: target,
            remaining_calories: target.map(|t| t - consumed),
        }
    }
}
