//! # Target Weight and Target BMR
//!
//! Derives the healthy reference weight for a given height (the weight at
//! BMI 21.5) and the basal metabolic rate a person would have at that
//! weight.
//!
//! ## Example
//!
//! ```rust
//! use metrics_core::calculations::target::calculate_target_weight;
//! use metrics_core::units::UnitSystem;
//!
//! let target_kg = calculate_target_weight(170.0, UnitSystem::Metric);
//! assert!((target_kg - 62.135).abs() < 0.01);
//! ```

use crate::calculations::bmr::{calculate_bmr, Gender};
use crate::units::{height_to_meters, kg_to_lbs, UnitSystem};

/// Reference BMI used to derive the healthy target weight
pub const TARGET_BMI: f64 = 21.5;

/// Calculate the target weight for a height, in the caller's units.
///
/// Target weight in kilograms is `TARGET_BMI * height_m^2`; imperial callers
/// get the result converted to pounds.
///
/// # Arguments
///
/// * `height` - Height in cm (metric) or inches (imperial)
/// * `units` - Measurement system of `height` and of the returned weight
pub fn calculate_target_weight(height: f64, units: UnitSystem) -> f64 {
    let height_m = height_to_meters(height, units);
    let target_kg = TARGET_BMI * (height_m * height_m);

    match units {
        UnitSystem::Metric => target_kg,
        UnitSystem::Imperial => kg_to_lbs(target_kg),
    }
}

/// Calculate the BMR a person would have at the target weight.
///
/// The target weight comes back in the caller's unit system, which is
/// exactly what [`calculate_bmr`] expects for its weight argument.
///
/// # Arguments
///
/// * `height` - Height in cm (metric) or inches (imperial)
/// * `age` - Age in years
/// * `gender` - Male or Female
/// * `units` - Measurement system of `height`
pub fn calculate_target_bmr(height: f64, age: f64, gender: Gender, units: UnitSystem) -> f64 {
    let target_weight = calculate_target_weight(height, units);
    calculate_bmr(target_weight, height, age, gender, units)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_target_weight_metric() {
        // 21.5 * 1.7^2 = 62.135
        let target = calculate_target_weight(170.0, UnitSystem::Metric);
        assert!((target - 62.135).abs() < 0.01);
    }

    #[test]
    fn test_target_weight_imperial() {
        // 170 cm = 66.9291 in; 62.135 kg = 136.984 lb
        let target = calculate_target_weight(66.9291, UnitSystem::Imperial);
        assert!((target - 136.984).abs() < 0.05);
    }

    #[test]
    fn test_target_bmr_matches_bmr_at_target_weight() {
        let target_weight = calculate_target_weight(170.0, UnitSystem::Metric);
        let expected = calculate_bmr(
            target_weight,
            170.0,
            30.0,
            Gender::Female,
            UnitSystem::Metric,
        );
        let target_bmr = calculate_target_bmr(170.0, 30.0, Gender::Female, UnitSystem::Metric);
        assert!((target_bmr - expected).abs() < 1e-9);
    }

    #[test]
    fn test_target_bmr_value() {
        // 10*62.135 + 6.25*170 - 5*30 - 161 = 1372.85
        let target_bmr = calculate_target_bmr(170.0, 30.0, Gender::Female, UnitSystem::Metric);
        assert!((target_bmr - 1372.85).abs() < 0.01);
    }
}
