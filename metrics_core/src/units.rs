//! # Unit Systems and Conversions
//!
//! Measurement-unit handling for the metrics engine. Callers supply weight
//! and height in either metric (kilograms, centimeters) or imperial (pounds,
//! inches); every formula evaluates internally in metric and only weights
//! are converted back to the caller's system.
//!
//! ## Design Philosophy
//!
//! We use plain `f64` scalars with explicit conversion functions rather than
//! a full units library because:
//! - The engine handles exactly two measurement systems
//! - We want JSON serialization to be clean (just numbers)
//! - Minimal runtime overhead
//!
//! All conversion factors live in the constant table below so no literal is
//! repeated at a call site.
//!
//! ## Example
//!
//! ```rust
//! use metrics_core::units::{kg_to_lbs, lbs_to_kg, UnitSystem};
//!
//! let lbs = kg_to_lbs(70.0);
//! assert!((lbs_to_kg(lbs) - 70.0).abs() < 1e-9);
//!
//! let units = UnitSystem::from_str_flexible("imperial").unwrap();
//! assert_eq!(units, UnitSystem::Imperial);
//! ```

use serde::{Deserialize, Serialize};

use crate::errors::{CalcError, CalcResult};

// ============================================================================
// Conversion Constants
// ============================================================================

/// Pounds per kilogram
pub const LBS_PER_KG: f64 = 2.20462;

/// Kilograms per pound
///
/// Not derived from `LBS_PER_KG`: the weight-to-kilograms paths multiply by
/// this exact literal, and `0.453592` is not the bit-for-bit reciprocal of
/// `2.20462`.
pub const KG_PER_LB: f64 = 0.453592;

/// Centimeters per inch
pub const CM_PER_INCH: f64 = 2.54;

/// Meters per inch
pub const METERS_PER_INCH: f64 = 0.0254;

/// Centimeters per meter
pub const CM_PER_METER: f64 = 100.0;

// ============================================================================
// Unit System
// ============================================================================

/// Measurement system for caller-supplied weight and height
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum UnitSystem {
    /// Kilograms and centimeters
    Metric,
    /// Pounds and inches
    Imperial,
}

impl UnitSystem {
    /// All unit system variants for UI selection
    pub const ALL: [UnitSystem; 2] = [UnitSystem::Metric, UnitSystem::Imperial];

    /// Get the serialized tag for this system (e.g., "metric")
    pub fn code(&self) -> &'static str {
        match self {
            UnitSystem::Metric => "metric",
            UnitSystem::Imperial => "imperial",
        }
    }

    /// Parse from common string representations
    pub fn from_str_flexible(s: &str) -> CalcResult<Self> {
        match s.trim().to_lowercase().as_str() {
            "metric" | "m" | "si" => Ok(UnitSystem::Metric),
            "imperial" | "i" | "us" => Ok(UnitSystem::Imperial),
            _ => Err(CalcError::unknown_tag("units", s)),
        }
    }

    /// Get display name
    pub fn display_name(&self) -> &'static str {
        match self {
            UnitSystem::Metric => "Metric (kg, cm)",
            UnitSystem::Imperial => "Imperial (lb, in)",
        }
    }

    /// Unit label for weights in this system
    pub fn weight_unit(&self) -> &'static str {
        match self {
            UnitSystem::Metric => "kg",
            UnitSystem::Imperial => "lb",
        }
    }

    /// Unit label for heights in this system
    pub fn height_unit(&self) -> &'static str {
        match self {
            UnitSystem::Metric => "cm",
            UnitSystem::Imperial => "in",
        }
    }
}

impl std::fmt::Display for UnitSystem {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.display_name())
    }
}

// ============================================================================
// Scalar Conversions
// ============================================================================

/// Convert kilograms to pounds
pub fn kg_to_lbs(kg: f64) -> f64 {
    kg * LBS_PER_KG
}

/// Convert pounds to kilograms
pub fn lbs_to_kg(lbs: f64) -> f64 {
    lbs / LBS_PER_KG
}

/// Convert centimeters to inches
pub fn cm_to_inches(cm: f64) -> f64 {
    cm / CM_PER_INCH
}

/// Convert inches to centimeters
pub fn inches_to_cm(inches: f64) -> f64 {
    inches * CM_PER_INCH
}

// ============================================================================
// Input Normalization
// ============================================================================

/// Caller-supplied weight to kilograms.
///
/// Imperial weights multiply by [`KG_PER_LB`] directly; this is not the same
/// arithmetic as [`lbs_to_kg`] and the two must not be swapped.
pub fn weight_to_kg(weight: f64, units: UnitSystem) -> f64 {
    match units {
        UnitSystem::Metric => weight,
        UnitSystem::Imperial => weight * KG_PER_LB,
    }
}

/// Caller-supplied height to centimeters
pub fn height_to_cm(height: f64, units: UnitSystem) -> f64 {
    match units {
        UnitSystem::Metric => height,
        UnitSystem::Imperial => height * CM_PER_INCH,
    }
}

/// Caller-supplied height to meters
pub fn height_to_meters(height: f64, units: UnitSystem) -> f64 {
    match units {
        UnitSystem::Metric => height / CM_PER_METER,
        UnitSystem::Imperial => height * METERS_PER_INCH,
    }
}
