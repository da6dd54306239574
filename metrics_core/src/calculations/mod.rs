//! # Metric Calculations
//!
//! This module contains all metabolic calculations. The scalar operations
//! are total pure functions over `f64` inputs; the aggregate report follows
//! the pattern:
//!
//! - `MetricsInput` - Input parameters (JSON-serializable)
//! - `MetricsReport` - Calculation results (JSON-serializable)
//! - `calculate(input) -> Result<MetricsReport, CalcError>` - Pure calculation function
//!
//! ## LLM Integration
//!
//! All types are designed for LLM consumption:
//! - Comprehensive rustdoc with examples
//! - Clean JSON serialization
//! - Structured error responses
//!
//! ## Available Calculations
//!
//! - [`bmr`] - Basal metabolic rate (Mifflin-St Jeor)
//! - [`bmi`] - Body mass index and classification
//! - [`target`] - Healthy target weight and BMR at that weight
//! - [`projection`] - Days to reach the target weight
//! - [`macros`] - Protein/fat/carbohydrate gram targets
//! - [`report`] - Everything above in a single call

pub mod bmi;
pub mod bmr;
pub mod macros;
pub mod projection;
pub mod report;
pub mod target;

// Re-export commonly used types
pub use bmi::{calculate_bmi, is_obese, BmiCategory};
pub use bmr::{calculate_bmr, Gender};
pub use macros::{calculate_macros, MacroSplit};
pub use projection::{calculate_days_to_target_weight, DAYS_NOT_ESTIMABLE};
pub use report::{calculate, MetricsInput, MetricsReport, WeightGoal};
pub use target::{calculate_target_bmr, calculate_target_weight, TARGET_BMI};
