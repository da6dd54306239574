//! # Basal Metabolic Rate
//!
//! Estimates resting daily energy expenditure with the Mifflin-St Jeor
//! equation (1990): `10 * weight_kg + 6.25 * height_cm - 5 * age`, plus 5
//! for men or minus 161 for women.
//!
//! ## Assumptions
//!
//! - Weight and height are in the units implied by the `UnitSystem` argument
//! - Age is in whole years; any positive numeric is accepted
//! - No input validation: the function is total and returns a number even
//!   for nonsensical inputs (callers validate, see [`crate::calculations::report`])
//!
//! ## Example
//!
//! ```rust
//! use metrics_core::calculations::bmr::{calculate_bmr, Gender};
//! use metrics_core::units::UnitSystem;
//!
//! let bmr = calculate_bmr(70.0, 175.0, 30.0, Gender::Male, UnitSystem::Metric);
//! assert!((bmr - 1648.75).abs() < 1e-9);
//! ```

use serde::{Deserialize, Serialize};

use crate::errors::{CalcError, CalcResult};
use crate::units::{height_to_cm, weight_to_kg, UnitSystem};

/// Gender for the additive BMR constant
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Gender {
    /// Male (+5 offset)
    Male,
    /// Female (-161 offset)
    Female,
}

impl Gender {
    /// All gender variants for UI selection
    pub const ALL: [Gender; 2] = [Gender::Male, Gender::Female];

    /// Get the serialized tag for this gender (e.g., "male")
    pub fn code(&self) -> &'static str {
        match self {
            Gender::Male => "male",
            Gender::Female => "female",
        }
    }

    /// Parse from common string representations
    pub fn from_str_flexible(s: &str) -> CalcResult<Self> {
        match s.trim().to_lowercase().as_str() {
            "male" | "m" => Ok(Gender::Male),
            "female" | "f" => Ok(Gender::Female),
            _ => Err(CalcError::unknown_tag("gender", s)),
        }
    }

    /// Get display name
    pub fn display_name(&self) -> &'static str {
        match self {
            Gender::Male => "Male",
            Gender::Female => "Female",
        }
    }
}

impl std::fmt::Display for Gender {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.display_name())
    }
}

/// Mifflin-St Jeor weight coefficient (kcal per kg)
const MSJ_WEIGHT_COEF: f64 = 10.0;

/// Mifflin-St Jeor height coefficient (kcal per cm)
const MSJ_HEIGHT_COEF: f64 = 6.25;

/// Mifflin-St Jeor age coefficient (kcal per year)
const MSJ_AGE_COEF: f64 = 5.0;

/// Additive constant for men (kcal)
const MSJ_MALE_OFFSET: f64 = 5.0;

/// Subtractive constant for women (kcal)
const MSJ_FEMALE_OFFSET: f64 = 161.0;

/// Calculate basal metabolic rate in kcal/day.
///
/// Imperial inputs are normalized to kilograms and centimeters before the
/// equation is applied. The result may be negative or meaningless for
/// invalid or extreme inputs; nothing is clamped here.
///
/// # Arguments
///
/// * `weight` - Body weight in kg (metric) or lb (imperial)
/// * `height` - Height in cm (metric) or inches (imperial)
/// * `age` - Age in years
/// * `gender` - Male or Female
/// * `units` - Measurement system of `weight` and `height`
pub fn calculate_bmr(weight: f64, height: f64, age: f64, gender: Gender, units: UnitSystem) -> f64 {
    let weight_kg = weight_to_kg(weight, units);
    let height_cm = height_to_cm(height, units);

    let bmr = MSJ_WEIGHT_COEF * weight_kg + MSJ_HEIGHT_COEF * height_cm - MSJ_AGE_COEF * age;

    match gender {
        Gender::Male => bmr + MSJ_MALE_OFFSET,
        Gender::Female => bmr - MSJ_FEMALE_OFFSET,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_bmr_male_metric() {
        // 10*70 + 6.25*175 - 5*30 + 5 = 1648.75
        let bmr = calculate_bmr(70.0, 175.0, 30.0, Gender::Male, UnitSystem::Metric);
        assert!((bmr - 1648.75).abs() < 1e-9);
    }

    #[test]
    fn test_bmr_female_metric() {
        // Same inputs, female offset: 1643.75 - 161 = 1482.75
        let bmr = calculate_bmr(70.0, 175.0, 30.0, Gender::Female, UnitSystem::Metric);
        assert!((bmr - 1482.75).abs() < 1e-9);
    }

    #[test]
    fn test_bmr_imperial_matches_metric() {
        // 70 kg = 154.3234 lb, 175 cm = 68.8976 in
        let metric = calculate_bmr(70.0, 175.0, 30.0, Gender::Male, UnitSystem::Metric);
        let imperial = calculate_bmr(154.3234, 68.8976, 30.0, Gender::Male, UnitSystem::Imperial);
        assert!((metric - imperial).abs() < 0.01);
    }

    #[test]
    fn test_gender_tags() {
        assert_eq!(serde_json::to_string(&Gender::Male).unwrap(), "\"male\"");
        assert_eq!(
            serde_json::to_string(&Gender::Female).unwrap(),
            "\"female\""
        );
        assert_eq!(Gender::from_str_flexible("F").unwrap(), Gender::Female);
        assert!(Gender::from_str_flexible("other").is_err());
    }
}
