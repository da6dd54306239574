//! # Error Types
//!
//! Structured error types for metrics_core. These errors are designed to be
//! informative for both humans and LLMs, providing enough context to
//! understand and fix issues programmatically.
//!
//! The scalar formula functions in [`crate::calculations`] are total and
//! never return errors; these types surface only on the aggregate report
//! path and when parsing string tags.
//!
//! ## Example
//!
//! ```rust
//! use metrics_core::errors::{CalcError, CalcResult};
//!
//! fn validate_weight(weight: f64) -> CalcResult<()> {
//!     if weight <= 0.0 {
//!         return Err(CalcError::invalid_measurement(
//!             "weight",
//!             weight.to_string(),
//!             "Weight must be positive",
//!         ));
//!     }
//!     Ok(())
//! }
//! ```

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Result type alias for metrics_core operations
pub type CalcResult<T> = Result<T, CalcError>;

/// Structured error type for calculation operations.
///
/// Each variant provides specific context about what went wrong,
/// enabling programmatic error handling by LLMs and other consumers.
#[derive(Error, Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(tag = "type", content = "details")]
pub enum CalcError {
    /// A measurement is non-finite or outside its physically valid range
    #[error("Invalid measurement for '{field}': {value} - {reason}")]
    InvalidMeasurement {
        field: String,
        value: String,
        reason: String,
    },

    /// A string tag does not name a known enumeration variant
    #[error("Unknown tag for '{field}': '{value}'")]
    UnknownTag { field: String, value: String },
}

impl CalcError {
    /// Create an InvalidMeasurement error
    pub fn invalid_measurement(
        field: impl Into<String>,
        value: impl Into<String>,
        reason: impl Into<String>,
    ) -> Self {
        CalcError::InvalidMeasurement {
            field: field.into(),
            value: value.into(),
            reason: reason.into(),
        }
    }

    /// Create an UnknownTag error
    pub fn unknown_tag(field: impl Into<String>, value: impl Into<String>) -> Self {
        CalcError::UnknownTag {
            field: field.into(),
            value: value.into(),
        }
    }

    /// Get a short error code for programmatic handling
    pub fn error_code(&self) -> &'static str {
        match self {
            CalcError::InvalidMeasurement { .. } => "INVALID_MEASUREMENT",
            CalcError::UnknownTag { .. } => "UNKNOWN_TAG",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_serialization() {
        let error = CalcError::invalid_measurement("weight", "-5.0", "Weight must be positive");
        let json = serde_json::to_string(&error).unwrap();
        let roundtrip: CalcError = serde_json::from_str(&json).unwrap();
        assert_eq!(error, roundtrip);
    }

    #[test]
    fn test_error_codes() {
        assert_eq!(
            CalcError::invalid_measurement("height", "0", "Height must be positive").error_code(),
            "INVALID_MEASUREMENT"
        );
        assert_eq!(
            CalcError::unknown_tag("units", "stone").error_code(),
            "UNKNOWN_TAG"
        );
    }

    #[test]
    fn test_error_display() {
        let error = CalcError::invalid_measurement("age", "NaN", "Age must be finite");
        assert_eq!(
            error.to_string(),
            "Invalid measurement for 'age': NaN - Age must be finite"
        );
    }
}
