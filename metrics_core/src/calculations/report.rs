//! # Full Metrics Report
//!
//! The aggregate entry point: one call validates the subject's measurements
//! and computes everything the engine derives from them - BMR, BMI and its
//! category, target weight, target BMR, time-to-target and the macro split.
//!
//! This is the only path that returns a [`CalcResult`]; the scalar formula
//! functions stay total so their reference arithmetic is untouched.
//!
//! ## Example
//!
//! ```rust
//! use metrics_core::calculations::report::{calculate, MetricsInput};
//! use metrics_core::calculations::bmr::Gender;
//! use metrics_core::units::UnitSystem;
//!
//! let input = MetricsInput {
//!     weight: 80.0,
//!     height: 170.0,
//!     age: 30.0,
//!     gender: Gender::Female,
//!     units: UnitSystem::Metric,
//! };
//!
//! let report = calculate(&input).unwrap();
//! assert_eq!(report.days_to_target, 276);
//! ```

use serde::{Deserialize, Serialize};

use crate::calculations::bmi::{calculate_bmi, is_obese, BmiCategory};
use crate::calculations::bmr::{calculate_bmr, Gender};
use crate::calculations::macros::{calculate_macros, MacroSplit};
use crate::calculations::projection::calculate_days_to_target_weight;
use crate::calculations::target::{calculate_target_bmr, calculate_target_weight};
use crate::errors::{CalcError, CalcResult};
use crate::units::UnitSystem;

/// Weight difference (caller units) inside which the goal is plain maintenance
const MAINTENANCE_BAND: f64 = 0.1;

/// Input parameters for a full metrics report.
///
/// ## JSON Example
///
/// ```json
/// {
///   "weight": 80.0,
///   "height": 170.0,
///   "age": 30.0,
///   "gender": "female",
///   "units": "metric"
/// }
/// ```
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct MetricsInput {
    /// Body weight in kg (metric) or lb (imperial)
    pub weight: f64,

    /// Height in cm (metric) or inches (imperial)
    pub height: f64,

    /// Age in whole years
    pub age: f64,

    /// Gender for the BMR offset
    pub gender: Gender,

    /// Measurement system of `weight` and `height`
    pub units: UnitSystem,
}

impl MetricsInput {
    /// Validate input parameters.
    pub fn validate(&self) -> CalcResult<()> {
        if !self.weight.is_finite() || self.weight <= 0.0 {
            return Err(CalcError::invalid_measurement(
                "weight",
                self.weight.to_string(),
                "Weight must be a finite positive number",
            ));
        }
        if !self.height.is_finite() || self.height <= 0.0 {
            return Err(CalcError::invalid_measurement(
                "height",
                self.height.to_string(),
                "Height must be a finite positive number",
            ));
        }
        if !self.age.is_finite() || self.age <= 0.0 {
            return Err(CalcError::invalid_measurement(
                "age",
                self.age.to_string(),
                "Age must be a finite positive number",
            ));
        }
        Ok(())
    }
}

/// Direction of the weight change needed to reach the target
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum WeightGoal {
    /// Current weight is above the target band
    Lose,
    /// Current weight is below the target band
    Gain,
    /// Current weight is within the target band; no projection worth showing
    Maintain,
}

impl WeightGoal {
    /// Get display name
    pub fn display_name(&self) -> &'static str {
        match self {
            WeightGoal::Lose => "Lose weight",
            WeightGoal::Gain => "Gain weight",
            WeightGoal::Maintain => "Maintain weight",
        }
    }
}

impl std::fmt::Display for WeightGoal {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.display_name())
    }
}

/// Results of a full metrics calculation.
///
/// Weights are in the caller's unit system; calorie values are kcal/day.
///
/// ## JSON Example
///
/// ```json
/// {
///   "bmr": 1551.5,
///   "bmi": 27.68,
///   "bmi_category": "overweight",
///   "obese": false,
///   "target_weight": 62.135,
///   "target_bmr": 1372.85,
///   "days_to_target": 276,
///   "macros": { "protein_g": 137, "fat_g": 31, "carbs_g": 138 },
///   "goal": "lose"
/// }
/// ```
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MetricsReport {
    /// Basal metabolic rate at the current weight (kcal/day)
    pub bmr: f64,

    /// Body mass index (kg/m²)
    pub bmi: f64,

    /// Classification bucket for `bmi`
    pub bmi_category: BmiCategory,

    /// True when `bmi` falls in any obese class
    pub obese: bool,

    /// Healthy target weight in the caller's units
    pub target_weight: f64,

    /// BMR at the target weight (kcal/day)
    pub target_bmr: f64,

    /// Estimated days to reach the target; -1 when past the two-year horizon
    pub days_to_target: i64,

    /// Gram targets sized to the target BMR
    pub macros: MacroSplit,

    /// Direction of the weight change needed to reach the target
    pub goal: WeightGoal,
}

impl MetricsReport {
    /// Days to target as an option, folding the sentinel away
    pub fn estimated_days(&self) -> Option<i64> {
        if self.days_to_target >= 0 {
            Some(self.days_to_target)
        } else {
            None
        }
    }
}

/// Calculate a full metrics report.
///
/// # Arguments
///
/// * `input` - Subject measurements and unit system
///
/// # Returns
///
/// * `Ok(MetricsReport)` - All derived metrics
/// * `Err(CalcError)` - If a measurement is non-finite or non-positive
pub fn calculate(input: &MetricsInput) -> CalcResult<MetricsReport> {
    input.validate()?;

    let bmr = calculate_bmr(input.weight, input.height, input.age, input.gender, input.units);
    let bmi = calculate_bmi(input.weight, input.height, input.units);
    let target_weight = calculate_target_weight(input.height, input.units);
    let target_bmr = calculate_target_bmr(input.height, input.age, input.gender, input.units);
    let days_to_target = calculate_days_to_target_weight(
        input.weight,
        target_weight,
        input.height,
        input.age,
        input.gender,
        input.units,
    );
    let macros = calculate_macros(target_bmr, target_weight, input.units);

    let goal = if (input.weight - target_weight).abs() <= MAINTENANCE_BAND {
        WeightGoal::Maintain
    } else if input.weight < target_weight {
        WeightGoal::Gain
    } else {
        WeightGoal::Lose
    };

    Ok(MetricsReport {
        bmr,
        bmi,
        bmi_category: BmiCategory::from_bmi(bmi),
        obese: is_obese(bmi),
        target_weight,
        target_bmr,
        days_to_target,
        macros,
        goal,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::calculations::projection::DAYS_NOT_ESTIMABLE;

    fn test_input() -> MetricsInput {
        MetricsInput {
            weight: 80.0,
            height: 170.0,
            age: 30.0,
            gender: Gender::Female,
            units: UnitSystem::Metric,
        }
    }

    #[test]
    fn test_report_values() {
        let report = calculate(&test_input()).unwrap();

        // 10*80 + 6.25*170 - 5*30 - 161 = 1551.5
        assert!((report.bmr - 1551.5).abs() < 1e-9);
        // 80 / 1.7^2 = 27.68
        assert!((report.bmi - 27.68).abs() < 0.01);
        assert_eq!(report.bmi_category, BmiCategory::Overweight);
        assert!(!report.obese);
        assert!((report.target_weight - 62.135).abs() < 0.01);
        // 10*62.135 + 6.25*170 - 150 - 161 = 1372.85
        assert!((report.target_bmr - 1372.85).abs() < 0.01);
        assert_eq!(report.days_to_target, 276);
        assert_eq!(report.goal, WeightGoal::Lose);
    }

    #[test]
    fn test_report_matches_scalar_functions() {
        let input = test_input();
        let report = calculate(&input).unwrap();

        assert_eq!(
            report.bmr,
            calculate_bmr(input.weight, input.height, input.age, input.gender, input.units)
        );
        assert_eq!(
            report.bmi,
            calculate_bmi(input.weight, input.height, input.units)
        );
        assert_eq!(
            report.target_weight,
            calculate_target_weight(input.height, input.units)
        );
        assert_eq!(
            report.macros,
            calculate_macros(report.target_bmr, report.target_weight, input.units)
        );
    }

    #[test]
    fn test_goal_directions() {
        let mut input = test_input();

        input.weight = 50.0;
        assert_eq!(calculate(&input).unwrap().goal, WeightGoal::Gain);

        input.weight = 90.0;
        assert_eq!(calculate(&input).unwrap().goal, WeightGoal::Lose);

        // Within 0.1 of the 62.135 kg target
        input.weight = 62.1;
        assert_eq!(calculate(&input).unwrap().goal, WeightGoal::Maintain);
    }

    #[test]
    fn test_sentinel_passthrough() {
        let mut input = test_input();
        input.weight = 250.0;

        let report = calculate(&input).unwrap();
        assert_eq!(report.days_to_target, DAYS_NOT_ESTIMABLE);
        assert_eq!(report.estimated_days(), None);
        assert_eq!(report.goal, WeightGoal::Lose);
    }

    #[test]
    fn test_validation_rejects_bad_measurements() {
        let mut input = test_input();
        input.weight = 0.0;
        assert!(calculate(&input).is_err());

        let mut input = test_input();
        input.height = f64::NAN;
        assert!(calculate(&input).is_err());

        let mut input = test_input();
        input.age = -1.0;
        let err = calculate(&input).unwrap_err();
        assert_eq!(err.error_code(), "INVALID_MEASUREMENT");
    }

    #[test]
    fn test_serialization() {
        let report = calculate(&test_input()).unwrap();
        let json = serde_json::to_string_pretty(&report).unwrap();
        let roundtrip: MetricsReport = serde_json::from_str(&json).unwrap();
        assert_eq!(report.bmi_category, roundtrip.bmi_category);
        assert_eq!(report.macros, roundtrip.macros);
        assert_eq!(report.days_to_target, roundtrip.days_to_target);
    }
}
