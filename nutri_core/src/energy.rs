//! Energy expenditure: BMR (Mifflin-St Jeor), TDEE and activity labels.

use crate::Sex;

fn mifflin_st_jeor_male(weight_kg: f64, height_cm: f64, age: f64) -> f64 {
    10.0 * weight_kg + 6.25 * height_cm - 5.0 * age + 5.0
}

fn mifflin_st_jeor_female(weight_kg: f64, height_cm: f64, age: f64) -> f64 {
    10.0 * weight_kg + 6.25 * height_cm - 5.0 * age - 161.0
}

/// Compute basal metabolic rate in kcal/day
///
/// Returns None if weight, height or age is missing. An unspecified sex
/// yields the mean of the male and female equations.
pub fn compute_bmr(
    weight_kg: Option<f64>,
    height_cm: Option<f64>,
    age_years: Option<u32>,
    sex: Sex,
) -> Option<f64> {
    let weight_kg = weight_kg?;
    let height_cm = height_cm?;
    let age = f64::from(age_years?);

    let bmr = match sex {
        Sex::Male => mifflin_st_jeor_male(weight_kg, height_cm, age),
        Sex::Female => mifflin_st_jeor_female(weight_kg, height_cm, age),
        Sex::Unspecified => {
            let male = mifflin_st_jeor_male(weight_kg, height_cm, age);
            let female = mifflin_st_jeor_female(weight_kg, height_cm, age);
            (male + female) / 2.0
        }
    };

    Some(bmr)
}

/// Total daily energy expenditure: BMR scaled by the activity multiplier
pub fn compute_tdee(bmr: Option<f64>, activity_multiplier: Option<f64>) -> Option<f64> {
    Some(bmr? * activity_multiplier?)
}

/// Human-readable band for an activity multiplier
pub fn activity_level_label(multiplier: Option<f64>) -> &'static str {
    let Some(m) = multiplier else {
        return "Not set";
    };

    if m < 1.3 {
        "Sedentary"
    } else if m < 1.45 {
        "Light Activity"
    } else if m < 1.65 {
        "Moderate Activity"
    } else if m < 1.8 {
        "Active"
    } else {
        "Very Active"
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_bmr_male_reference() {
        // 700 + 1093.75 - 150 + 5
        let bmr = compute_bmr(Some(70.0), Some(175.0), Some(30), Sex::Male).unwrap();
        assert_eq!(bmr, 1648.75);
    }

    #[test]
    fn test_bmr_female() {
        let bmr = compute_bmr(Some(70.0), Some(175.0), Some(30), Sex::Female).unwrap();
        assert_eq!(bmr, 1482.75);
    }

    #[test]
    fn test_bmr_unspecified_is_mean_of_both() {
        let male = compute_bmr(Some(62.5), Some(163.0), Some(44), Sex::Male).unwrap();
        let female = compute_bmr(Some(62.5), Some(163.0), Some(44), Sex::Female).unwrap();
        let neutral = compute_bmr(Some(62.5), Some(163.0), Some(44), Sex::Unspecified).unwrap();

        assert!((neutral - (male + female) / 2.0).abs() < 1e-9);
    }

    #[test]
    fn test_bmr_missing_inputs() {
        assert_eq!(compute_bmr(None, Some(175.0), Some(30), Sex::Male), None);
        assert_eq!(compute_bmr(Some(70.0), None, Some(30), Sex::Male), None);
        assert_eq!(compute_bmr(Some(70.0), Some(175.0), None, Sex::Male), None);
    }

    #[test]
    fn test_tdee() {
        assert_eq!(compute_tdee(Some(1500.0), Some(1.5)), Some(2250.0));
        assert_eq!(compute_tdee(None, Some(1.5)), None);
        assert_eq!(compute_tdee(Some(1500.0), None), None);
    }

    #[test]
    fn test_activity_labels() {
        assert_eq!(activity_level_label(None), "Not set");
        assert_eq!(activity_level_label(Some(1.2)), "Sedentary");
        assert_eq!(activity_level_label(Some(1.3)), "Light Activity");
        assert_eq!(activity_level_label(Some(1.55)), "Moderate Activity");
        assert_eq!(activity_level_label(Some(1.725)), "Active");
        assert_eq!(activity_level_label(Some(1.8)), "Very Active");
        assert_eq!(activity_level_label(Some(1.9)), "Very Active");
    }
}
