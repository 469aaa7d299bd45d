//! Supplementary exercise budget for a weight goal.
//!
//! A quarter of a loss goal's daily deficit is assigned to exercise. When
//! the safety floor raised intake, the shortfall (times 1.2) moves here too,
//! so the overall deficit survives the clamp.

use crate::goals::{daily_calorie_change, goal_direction, SafetyCheck};
use crate::{ExercisePlan, ExerciseRecommendation, GoalDirection, Sex};

/// Share of a loss deficit covered by exercise
const LOSS_BURN_SHARE: f64 = 0.25;

/// Multiplier applied to the kcal the safety floor added back to intake
const SAFETY_COMPENSATION: f64 = 1.2;

const GAIN_DAILY_BURN: i64 = 200;
const MAINTAIN_DAILY_BURN: i64 = 300;

/// Reference body weight for the per-minute burn baseline
const REFERENCE_WEIGHT_KG: f64 = 70.0;

/// kcal/min at moderate intensity for the reference weight
const REFERENCE_KCAL_PER_MIN: f64 = 10.0;

fn age_factor(age_years: u32) -> f64 {
    if age_years > 50 {
        0.85
    } else if age_years < 25 {
        1.15
    } else {
        1.0
    }
}

fn sex_factor(sex: Sex) -> f64 {
    match sex {
        Sex::Male => 1.1,
        Sex::Female => 0.9,
        Sex::Unspecified => 1.0,
    }
}

/// Per-minute burn rates at light, moderate and intense effort
fn burn_rates(current_weight_kg: f64, age_years: u32, sex: Sex) -> [f64; 3] {
    let base = current_weight_kg / REFERENCE_WEIGHT_KG * REFERENCE_KCAL_PER_MIN;
    let adjust = age_factor(age_years) * sex_factor(sex);
    [0.5 * base * adjust, base * adjust, 1.5 * base * adjust]
}

/// Recommend a daily exercise-calorie budget and its minute equivalents
///
/// Returns `ExercisePlan::default()` when goal, BMR, activity, age or a
/// positive current weight is missing.
pub fn recommended_exercise_burn(
    monthly_weight_goal_kg: Option<f64>,
    bmr: Option<f64>,
    activity_multiplier: Option<f64>,
    age_years: Option<u32>,
    sex: Sex,
    current_weight_kg: Option<f64>,
) -> ExercisePlan {
    let (Some(goal), Some(bmr), Some(activity), Some(age), Some(weight)) = (
        monthly_weight_goal_kg,
        bmr,
        activity_multiplier,
        age_years,
        current_weight_kg.filter(|w| *w > 0.0),
    ) else {
        tracing::debug!("Exercise inputs incomplete, no recommendation");
        return ExercisePlan::default();
    };

    let mut safety_adjusted = false;
    let (daily_burn, recommendation) = match goal_direction(Some(goal)) {
        GoalDirection::Lose => {
            let mut burn = (LOSS_BURN_SHARE * daily_calorie_change(goal).abs()).round() as i64;

            let check = SafetyCheck::new(bmr, activity, goal);
            if check.triggers(goal) {
                let shortfall = (check.floor - check.theoretical_target) as f64;
                let extra = (SAFETY_COMPENSATION * shortfall).round() as i64;
                tracing::debug!("Safety floor active, adding {} kcal of exercise", extra);
                burn += extra;
                safety_adjusted = true;
            }

            (burn, ExerciseRecommendation::Lose)
        }
        GoalDirection::Gain => (GAIN_DAILY_BURN, ExerciseRecommendation::Gain),
        GoalDirection::Maintain => (MAINTAIN_DAILY_BURN, ExerciseRecommendation::Maintain),
    };

    let [light, moderate, intense] = burn_rates(weight, age, sex);
    let minutes = |rate: f64| (daily_burn as f64 / rate).round() as i64;

    ExercisePlan {
        daily_burn,
        weekly_burn: daily_burn * 7,
        light_minutes: minutes(light),
        moderate_minutes: minutes(moderate),
        intense_minutes: minutes(intense),
        recommendation,
        safety_adjusted,
    }
}
