//! # Body Mass Index
//!
//! BMI value (`weight_kg / height_m^2`) and its WHO classification bucket.
//!
//! ## Example
//!
//! ```rust
//! use metrics_core::calculations::bmi::{calculate_bmi, BmiCategory};
//! use metrics_core::units::UnitSystem;
//!
//! let bmi = calculate_bmi(80.0, 170.0, UnitSystem::Metric);
//! assert_eq!(BmiCategory::from_bmi(bmi), BmiCategory::Overweight);
//! ```

use serde::{Deserialize, Serialize};

use crate::units::{height_to_meters, weight_to_kg, UnitSystem};

/// Calculate body mass index in kg/m².
///
/// Total function: non-positive or non-finite inputs flow through and yield
/// NaN, infinity, or a physically meaningless value.
///
/// # Arguments
///
/// * `weight` - Body weight in kg (metric) or lb (imperial)
/// * `height` - Height in cm (metric) or inches (imperial)
/// * `units` - Measurement system of `weight` and `height`
pub fn calculate_bmi(weight: f64, height: f64, units: UnitSystem) -> f64 {
    let weight_kg = weight_to_kg(weight, units);
    let height_m = height_to_meters(height, units);

    weight_kg / (height_m * height_m)
}

/// WHO classification bucket for a BMI value.
///
/// Boundaries are strict `<` thresholds evaluated in ascending order:
///
/// | BMI          | Category         |
/// |--------------|------------------|
/// | < 16         | SevereThinness   |
/// | < 17         | ModerateThinness |
/// | < 18.5       | MildThinness     |
/// | < 25         | Normal           |
/// | < 30         | Overweight       |
/// | < 35         | ObeseClassI      |
/// | < 40         | ObeseClassII     |
/// | otherwise    | ObeseClassIII    |
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum BmiCategory {
    /// BMI below 16
    SevereThinness,
    /// BMI 16 to 17
    ModerateThinness,
    /// BMI 17 to 18.5
    MildThinness,
    /// BMI 18.5 to 25
    Normal,
    /// BMI 25 to 30
    Overweight,
    /// BMI 30 to 35
    ObeseClassI,
    /// BMI 35 to 40
    ObeseClassII,
    /// BMI 40 and above
    ObeseClassIII,
}

impl BmiCategory {
    /// All category variants, in ascending BMI order
    pub const ALL: [BmiCategory; 8] = [
        BmiCategory::SevereThinness,
        BmiCategory::ModerateThinness,
        BmiCategory::MildThinness,
        BmiCategory::Normal,
        BmiCategory::Overweight,
        BmiCategory::ObeseClassI,
        BmiCategory::ObeseClassII,
        BmiCategory::ObeseClassIII,
    ];

    /// Classify a BMI value. First matching threshold wins.
    pub fn from_bmi(bmi: f64) -> Self {
        if bmi < 16.0 {
            BmiCategory::SevereThinness
        } else if bmi < 17.0 {
            BmiCategory::ModerateThinness
        } else if bmi < 18.5 {
            BmiCategory::MildThinness
        } else if bmi < 25.0 {
            BmiCategory::Normal
        } else if bmi < 30.0 {
            BmiCategory::Overweight
        } else if bmi < 35.0 {
            BmiCategory::ObeseClassI
        } else if bmi < 40.0 {
            BmiCategory::ObeseClassII
        } else {
            BmiCategory::ObeseClassIII
        }
    }

    /// Get the serialized tag for this category (e.g., "obeseClassI").
    ///
    /// Tags are stable identifiers for callers that map categories to
    /// localized display strings.
    pub fn code(&self) -> &'static str {
        match self {
            BmiCategory::SevereThinness => "severeThinness",
            BmiCategory::ModerateThinness => "moderateThinness",
            BmiCategory::MildThinness => "mildThinness",
            BmiCategory::Normal => "normal",
            BmiCategory::Overweight => "overweight",
            BmiCategory::ObeseClassI => "obeseClassI",
            BmiCategory::ObeseClassII => "obeseClassII",
            BmiCategory::ObeseClassIII => "obeseClassIII",
        }
    }

    /// Get display name
    pub fn display_name(&self) -> &'static str {
        match self {
            BmiCategory::SevereThinness => "Severe Thinness",
            BmiCategory::ModerateThinness => "Moderate Thinness",
            BmiCategory::MildThinness => "Mild Thinness",
            BmiCategory::Normal => "Normal",
            BmiCategory::Overweight => "Overweight",
            BmiCategory::ObeseClassI => "Obese Class I",
            BmiCategory::ObeseClassII => "Obese Class II",
            BmiCategory::ObeseClassIII => "Obese Class III",
        }
    }
}

impl std::fmt::Display for BmiCategory {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.display_name())
    }
}

/// BMI at or above which a person is classified obese (ObeseClassI boundary)
pub const OBESITY_THRESHOLD: f64 = 30.0;

/// True when the BMI falls in any obese class
pub fn is_obese(bmi: f64) -> bool {
    bmi >= OBESITY_THRESHOLD
}
