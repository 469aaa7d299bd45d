//! Metrics engine: composes every calculation layer for one profile.
//!
//! Layer order:
//! 1. Body composition (BMI, body fat) from height/weight/age/sex
//! 2. Energy expenditure (BMR, TDEE)
//! 3. Goal resolution (calorie targets, macro split, exercise budget)
//!
//! Missing inputs never fail; each layer degrades to its own sentinel.

use crate::body::{classify_bmi, classify_body_fat, compute_bmi, compute_body_fat_percent};
use crate::energy::{activity_level_label, compute_bmr, compute_tdee};
use crate::exercise::recommended_exercise_burn;
use crate::goals::{
    calorie_goal_description, calorie_targets, macronutrient_split, recommended_daily_calories,
};
use crate::{DerivedMetrics, MissingField, Profile, Sex};

/// List the profile fields still needed for a complete set of metrics
///
/// Order: Weight, Height, Age, Gender, Activity Level.
pub fn missing_fields(profile: &Profile, current_weight_kg: Option<f64>) -> Vec<MissingField> {
    let mut missing = Vec::new();

    if current_weight_kg.is_none() {
        missing.push(MissingField::Weight);
    }
    if profile.height_cm.is_none() {
        missing.push(MissingField::Height);
    }
    if profile.age_years.is_none() {
        missing.push(MissingField::Age);
    }
    if profile.sex == Sex::Unspecified {
        missing.push(MissingField::Gender);
    }
    if profile.activity_multiplier.is_none() {
        missing.push(MissingField::ActivityLevel);
    }

    missing
}

/// Derive all metrics for a profile and current weight
pub fn derive_metrics(profile: &Profile, current_weight_kg: Option<f64>) -> DerivedMetrics {
    let sex = profile.sex;
    let goal = profile.monthly_weight_goal_kg;
    let activity = profile.activity_multiplier;

    let bmi = compute_bmi(profile.height_cm, current_weight_kg);
    let body_fat = compute_body_fat_percent(bmi, profile.age_years, sex);

    let bmr = compute_bmr(current_weight_kg, profile.height_cm, profile.age_years, sex);
    let tdee = compute_tdee(bmr, activity);

    let recommended = recommended_daily_calories(bmr, activity, goal);
    let macro_split =
        macronutrient_split(goal, activity, sex, profile.age_years, current_weight_kg);
    let exercise =
        recommended_exercise_burn(goal, bmr, activity, profile.age_years, sex, current_weight_kg);

    let missing = missing_fields(profile, current_weight_kg);
    if !missing.is_empty() {
        tracing::debug!("Deriving metrics with missing fields: {:?}", missing);
    }

    DerivedMetrics {
        bmi,
        bmi_category: bmi.map(classify_bmi),
        body_fat_percent: body_fat,
        body_fat_category: body_fat.map(|bf| classify_body_fat(bf, sex)),
        bmr,
        tdee,
        activity_level: activity_level_label(activity).to_string(),
        calorie_targets: calorie_targets(tdee),
        recommended_daily_calories: recommended,
        calorie_goal_description: calorie_goal_description(goal).to_string(),
        macro_grams: macro_split.grams_for(recommended),
        macro_split,
        exercise,
        missing_fields: missing,
    }
}
