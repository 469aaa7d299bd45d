//! Body composition: BMI and the Deurenberg body fat estimate.

use crate::{BmiCategory, BodyFatCategory, Sex};

/// Age assumed by the body fat estimate when the profile has none
const DEFAULT_AGE_YEARS: f64 = 30.0;

/// Plausible physiological range for the body fat estimate
const BODY_FAT_MIN: f64 = 3.0;
const BODY_FAT_MAX: f64 = 60.0;

/// Compute BMI as weight(kg) / height(m)^2
///
/// Returns None unless both inputs are present and strictly positive.
pub fn compute_bmi(height_cm: Option<f64>, weight_kg: Option<f64>) -> Option<f64> {
    let height_cm = height_cm.filter(|h| *h > 0.0)?;
    let weight_kg = weight_kg.filter(|w| *w > 0.0)?;

    let height_m = height_cm / 100.0;
    Some(weight_kg / (height_m * height_m))
}

/// Classify a BMI value. Each band includes its lower bound.
pub fn classify_bmi(bmi: f64) -> BmiCategory {
    if bmi < 18.5 {
        BmiCategory::Underweight
    } else if bmi < 25.0 {
        BmiCategory::Normal
    } else if bmi < 30.0 {
        BmiCategory::Overweight
    } else {
        BmiCategory::Obese
    }
}

/// Estimate body fat percentage from BMI (Deurenberg)
///
/// `1.2 * bmi + 0.23 * age - 10.8 * sex_factor - 5.4`
///
/// Missing age falls back to 30 and an unspecified sex uses a factor of 0.5,
/// so partial profiles still get a population-average estimate. The result
/// is clamped to [3, 60].
pub fn compute_body_fat_percent(bmi: Option<f64>, age_years: Option<u32>, sex: Sex) -> Option<f64> {
    let bmi = bmi?;
    let age = age_years.map(f64::from).unwrap_or(DEFAULT_AGE_YEARS);

    let sex_factor = match sex {
        Sex::Male => 1.0,
        Sex::Female => 0.0,
        Sex::Unspecified => 0.5,
    };

    let estimate = 1.2 * bmi + 0.23 * age - 10.8 * sex_factor - 5.4;
    Some(estimate.clamp(BODY_FAT_MIN, BODY_FAT_MAX))
}

/// Cut points between the six body fat tiers, per sex
fn body_fat_thresholds(sex: Sex) -> [f64; 5] {
    match sex {
        Sex::Male => [6.0, 14.0, 18.0, 25.0, 30.0],
        Sex::Female => [14.0, 21.0, 25.0, 32.0, 38.0],
        Sex::Unspecified => [10.0, 18.0, 22.0, 28.0, 35.0],
    }
}

/// Classify a body fat percentage on the sex-specific six-tier scale
pub fn classify_body_fat(percent: f64, sex: Sex) -> BodyFatCategory {
    let [essential, athletic, fitness, average, above_average] = body_fat_thresholds(sex);

    if percent < essential {
        BodyFatCategory::Essential
    } else if percent < athletic {
        BodyFatCategory::Athletic
    } else if percent < fitness {
        BodyFatCategory::Fitness
    } else if percent < average {
        BodyFatCategory::Average
    } else if percent < above_average {
        BodyFatCategory::AboveAverage
    } else {
        BodyFatCategory::Obese
    }
}
