//! Display unit conversion.
//!
//! The engine works in kilograms and centimeters. These helpers only format
//! values for display and never change the stored numbers.

use crate::UnitPreference;

// ============================================================================
// Conversion Constants
// ============================================================================

/// Pounds per kilogram
pub const KG_TO_LB: f64 = 2.20462;
/// Centimeters per inch
pub const CM_PER_INCH: f64 = 2.54;
/// Inches per foot
pub const INCHES_PER_FOOT: u32 = 12;

pub fn kg_to_lb(kg: f64) -> f64 {
    kg * KG_TO_LB
}

/// Split a height into whole feet and rounded inches
pub fn cm_to_feet_inches(cm: f64) -> (u32, u32) {
    let total_inches = (cm / CM_PER_INCH).max(0.0);
    let mut feet = (total_inches / f64::from(INCHES_PER_FOOT)).floor() as u32;
    let mut inches = (total_inches - f64::from(feet * INCHES_PER_FOOT)).round() as u32;

    if inches == INCHES_PER_FOOT {
        feet += 1;
        inches = 0;
    }

    (feet, inches)
}

/// Format a weight, e.g. "70.0 kg" or "154.3 lb"
pub fn format_weight(kg: f64, units: UnitPreference) -> String {
    match units {
        UnitPreference::Metric => format!("{:.1} kg", kg),
        UnitPreference::Imperial => format!("{:.1} lb", kg_to_lb(kg)),
    }
}

/// Format a signed weight change, e.g. "-2.0 kg"
pub fn format_weight_change(kg: f64, units: UnitPreference) -> String {
    match units {
        UnitPreference::Metric => format!("{:+.1} kg", kg),
        UnitPreference::Imperial => format!("{:+.1} lb", kg_to_lb(kg)),
    }
}

/// Format a height, e.g. "175 cm" or "5'9\""
pub fn format_height(cm: f64, units: UnitPreference) -> String {
    match units {
        UnitPreference::Metric => format!("{:.0} cm", cm),
        UnitPreference::Imperial => {
            let (feet, inches) = cm_to_feet_inches(cm);
            format!("{}'{}\"", feet, inches)
        }
    }
}
