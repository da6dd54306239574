//! # Macronutrient Split
//!
//! Derives daily protein, fat and carbohydrate gram targets from a target
//! BMR and target weight: protein at 2.2 g per kg of target weight, fat at
//! 20% of target calories, carbohydrates from whatever calories remain.
//!
//! ## Example
//!
//! ```rust
//! use metrics_core::calculations::macros::calculate_macros;
//! use metrics_core::units::UnitSystem;
//!
//! let split = calculate_macros(1648.75, 62.135, UnitSystem::Metric);
//! assert_eq!(split.protein_g, 137);
//! assert_eq!(split.fat_g, 37);
//! assert_eq!(split.carbs_g, 193);
//! ```

use serde::{Deserialize, Serialize};

use crate::units::{weight_to_kg, UnitSystem};

/// Protein target in grams per kilogram of target body weight
pub const PROTEIN_G_PER_KG: f64 = 2.2;

/// Fraction of target calories allotted to fat
pub const FAT_CALORIE_FRACTION: f64 = 0.20;

/// Calories per gram of protein
pub const KCAL_PER_G_PROTEIN: f64 = 4.0;

/// Calories per gram of fat
pub const KCAL_PER_G_FAT: f64 = 9.0;

/// Calories per gram of carbohydrate
pub const KCAL_PER_G_CARB: f64 = 4.0;

/// Daily macronutrient gram targets.
///
/// Each field is rounded to the nearest whole gram independently, so the
/// caloric sum only approximates the target BMR. `carbs_g` goes negative
/// when protein and fat calories already exceed the target; it is not
/// clamped.
///
/// ## JSON Example
///
/// ```json
/// { "protein_g": 137, "fat_g": 37, "carbs_g": 193 }
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct MacroSplit {
    /// Protein (grams)
    pub protein_g: i32,

    /// Fat (grams)
    pub fat_g: i32,

    /// Carbohydrates (grams); negative when protein and fat overshoot the target
    pub carbs_g: i32,
}

/// Calculate the macronutrient split for a target BMR and target weight.
///
/// Carbohydrate calories are taken from the unrounded protein and fat
/// intermediates; only the three final gram values are rounded.
///
/// # Arguments
///
/// * `target_bmr` - Target daily calories (kcal/day)
/// * `target_weight` - Target weight in kg (metric) or lb (imperial)
/// * `units` - Measurement system of `target_weight`
pub fn calculate_macros(target_bmr: f64, target_weight: f64, units: UnitSystem) -> MacroSplit {
    let target_weight_kg = weight_to_kg(target_weight, units);

    let protein_g = target_weight_kg * PROTEIN_G_PER_KG;
    let protein_kcal = protein_g * KCAL_PER_G_PROTEIN;

    let fat_kcal = target_bmr * FAT_CALORIE_FRACTION;
    let fat_g = fat_kcal / KCAL_PER_G_FAT;

    let carb_kcal = target_bmr - protein_kcal - fat_kcal;
    let carb_g = carb_kcal / KCAL_PER_G_CARB;

    MacroSplit {
        protein_g: protein_g.round() as i32,
        fat_g: fat_g.round() as i32,
        carbs_g: carb_g.round() as i32,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_macros_metric() {
        // protein = round(62.135 * 2.2) = 137
        // fat = round(1648.75 * 0.20 / 9) = round(36.639) = 37
        // carbs = round((1648.75 - 546.788 - 329.75) / 4) = round(193.053) = 193
        let split = calculate_macros(1648.75, 62.135, UnitSystem::Metric);
        assert_eq!(split.protein_g, 137);
        assert_eq!(split.fat_g, 37);
        assert_eq!(split.carbs_g, 193);
    }

    #[test]
    fn test_macros_imperial_matches_metric() {
        // 62.135 kg = 136.9841 lb
        let metric = calculate_macros(1648.75, 62.135, UnitSystem::Metric);
        let imperial = calculate_macros(1648.75, 136.9841, UnitSystem::Imperial);
        assert_eq!(metric, imperial);
    }

    #[test]
    fn test_negative_carbs_not_clamped() {
        // protein = 220 g = 880 kcal, fat = 100 kcal; both exceed the
        // 500 kcal target, leaving carbs at round(-480 / 4) = -120
        let split = calculate_macros(500.0, 100.0, UnitSystem::Metric);
        assert_eq!(split.protein_g, 220);
        assert_eq!(split.fat_g, 11);
        assert_eq!(split.carbs_g, -120);
    }

    #[test]
    fn test_serialization() {
        let split = calculate_macros(1648.75, 62.135, UnitSystem::Metric);
        let json = serde_json::to_string(&split).unwrap();
        let roundtrip: MacroSplit = serde_json::from_str(&json).unwrap();
        assert_eq!(split, roundtrip);
    }
}
