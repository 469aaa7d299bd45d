//! Goal resolution: calorie targets and macronutrient split.
//!
//! Turns TDEE and a signed monthly weight goal into:
//! - Coarse lose/maintain/gain calorie bands
//! - A goal-specific daily calorie target with a hard safety floor
//! - A protein/carbs/fat split that always sums to 100

use crate::daily::{KCAL_PER_G_CARBS, KCAL_PER_G_FAT, KCAL_PER_G_PROTEIN};
use crate::{CalorieTargets, GoalDirection, MacroGrams, MacroSplit, Sex};

/// Approximate energy content of one kg of body fat
pub const KCAL_PER_KG: f64 = 7700.0;

/// Days per month used to spread the monthly goal
pub const DAYS_PER_MONTH: f64 = 30.0;

/// Intake is never recommended below this fraction of BMR
pub const SAFETY_FLOOR_RATIO: f64 = 0.9;

/// Goals within ±0.1 kg/month count as maintenance
const GOAL_DEAD_ZONE_KG: f64 = 0.1;

/// Starting point for every macro split
pub const BASE_MACRO_SPLIT: MacroSplit = MacroSplit {
    protein_pct: 30,
    carbs_pct: 45,
    fat_pct: 25,
    protein_per_kg: None,
    recommended_protein_g: None,
};

/// Classify a monthly goal, treating ±0.1 kg as noise
pub fn goal_direction(monthly_weight_goal_kg: Option<f64>) -> GoalDirection {
    match monthly_weight_goal_kg {
        Some(goal) if goal < -GOAL_DEAD_ZONE_KG => GoalDirection::Lose,
        Some(goal) if goal > GOAL_DEAD_ZONE_KG => GoalDirection::Gain,
        _ => GoalDirection::Maintain,
    }
}

/// Daily kcal change implied by a monthly goal (negative for loss)
pub fn daily_calorie_change(monthly_weight_goal_kg: f64) -> f64 {
    monthly_weight_goal_kg * KCAL_PER_KG / DAYS_PER_MONTH
}

/// Lose/maintain/gain bands around TDEE (-20% / +15%)
pub fn calorie_targets(tdee: Option<f64>) -> CalorieTargets {
    let Some(tdee) = tdee else {
        return CalorieTargets::default();
    };

    let maintain = tdee.round();
    CalorieTargets {
        lose: (maintain * 0.8).round() as i64,
        maintain: maintain as i64,
        gain: (maintain * 1.15).round() as i64,
    }
}

/// Unclamped target and safety floor for a goal
#[derive(Clone, Copy, Debug, PartialEq)]
pub(crate) struct SafetyCheck {
    pub theoretical_target: i64,
    pub floor: i64,
}

impl SafetyCheck {
    pub(crate) fn new(bmr: f64, activity_multiplier: f64, monthly_weight_goal_kg: f64) -> Self {
        let maintenance = bmr * activity_multiplier;
        let target = maintenance + daily_calorie_change(monthly_weight_goal_kg);
        Self {
            theoretical_target: target.round() as i64,
            floor: (bmr * SAFETY_FLOOR_RATIO).round() as i64,
        }
    }

    /// Whether a loss goal would push intake below the floor
    pub(crate) fn triggers(&self, monthly_weight_goal_kg: f64) -> bool {
        monthly_weight_goal_kg < 0.0 && self.theoretical_target < self.floor
    }
}

/// Daily calorie intake for the monthly goal
///
/// Returns 0 if any input is missing. For loss goals the result is never
/// below 90% of BMR, however aggressive the goal.
pub fn recommended_daily_calories(
    bmr: Option<f64>,
    activity_multiplier: Option<f64>,
    monthly_weight_goal_kg: Option<f64>,
) -> i64 {
    let (Some(bmr), Some(activity), Some(goal)) = (bmr, activity_multiplier, monthly_weight_goal_kg)
    else {
        return 0;
    };

    let check = SafetyCheck::new(bmr, activity, goal);
    if check.triggers(goal) {
        tracing::debug!(
            "Target {} kcal below safety floor, clamping to {} kcal",
            check.theoretical_target,
            check.floor
        );
        return check.floor;
    }

    check.theoretical_target
}

/// Short phrase describing what the calorie target is for
pub fn calorie_goal_description(monthly_weight_goal_kg: Option<f64>) -> &'static str {
    match goal_direction(monthly_weight_goal_kg) {
        GoalDirection::Lose => "to lose weight",
        GoalDirection::Gain => "to gain weight",
        GoalDirection::Maintain => "to maintain weight",
    }
}

/// Macronutrient split adjusted for goal, activity and age
///
/// Returns the 30/45/25 base split when goal, activity, age or current
/// weight is missing. Sex does not move the split.
pub fn macronutrient_split(
    monthly_weight_goal_kg: Option<f64>,
    activity_multiplier: Option<f64>,
    _sex: Sex,
    age_years: Option<u32>,
    current_weight_kg: Option<f64>,
) -> MacroSplit {
    let (Some(goal), Some(activity), Some(age), Some(weight)) = (
        monthly_weight_goal_kg,
        activity_multiplier,
        age_years,
        current_weight_kg,
    ) else {
        tracing::debug!("Macro split inputs incomplete, using base split");
        return BASE_MACRO_SPLIT;
    };

    let mut protein = BASE_MACRO_SPLIT.protein_pct;
    let mut carbs = BASE_MACRO_SPLIT.carbs_pct;
    let mut fat = BASE_MACRO_SPLIT.fat_pct;

    let direction = goal_direction(Some(goal));
    match direction {
        GoalDirection::Lose => {
            protein += 5;
            carbs -= 5;
        }
        GoalDirection::Gain => {
            carbs += 5;
            fat -= 5;
        }
        GoalDirection::Maintain => {}
    }

    if activity < 1.4 {
        carbs -= 5;
        fat += 5;
    } else if activity > 1.7 {
        carbs += 5;
        fat -= 5;
    }

    if age > 50 {
        protein += 5;
        carbs -= 5;
    }

    // Residual always lands on carbs
    let residual = 100 - (protein + carbs + fat);
    if residual != 0 {
        tracing::debug!("Macro split off by {}, correcting carbs", residual);
        carbs += residual;
    }

    let mut protein_per_kg = match direction {
        GoalDirection::Lose => 2.0,
        GoalDirection::Gain => 1.6,
        GoalDirection::Maintain => 1.8,
    };
    if activity > 1.7 {
        protein_per_kg += 0.2;
    }

    MacroSplit {
        protein_pct: protein,
        carbs_pct: carbs,
        fat_pct: fat,
        protein_per_kg: Some(protein_per_kg),
        recommended_protein_g: Some((weight * protein_per_kg).round() as i64),
    }
}

impl MacroSplit {
    /// Gram equivalents of a calorie target at 4/4/9 kcal per gram
    pub fn grams_for(&self, calories: i64) -> MacroGrams {
        let calories = calories.max(0) as f64;
        let grams = |pct: i32, kcal_per_g: f64| {
            (calories * f64::from(pct) / 100.0 / kcal_per_g).round() as i64
        };

        MacroGrams {
            protein_g: grams(self.protein_pct, KCAL_PER_G_PROTEIN),
            carbs_g: grams(self.carbs_pct, KCAL_PER_G_CARBS),
            fat_g: grams(self.fat_pct, KCAL_PER_G_FAT),
        }
    }

    pub fn total_pct(&self) -> i32 {
        self.protein_pct + self.carbs_pct + self.fat_pct
    }
}
