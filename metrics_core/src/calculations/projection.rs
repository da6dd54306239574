//! # Time-to-Target Projection
//!
//! Estimates the days required to reach the target weight under a fixed
//! daily caloric deficit-or-surplus model: 500 kcal/day against roughly
//! 7700 kcal per kilogram of body mass.
//!
//! Projections beyond a two-year horizon are reported with the
//! [`DAYS_NOT_ESTIMABLE`] sentinel rather than a day count.
//!
//! ## Example
//!
//! ```rust
//! use metrics_core::calculations::projection::calculate_days_to_target_weight;
//! use metrics_core::calculations::bmr::Gender;
//! use metrics_core::units::UnitSystem;
//!
//! let days = calculate_days_to_target_weight(
//!     80.0, 62.135, 170.0, 30.0, Gender::Female, UnitSystem::Metric,
//! );
//! assert_eq!(days, 276);
//! ```

use crate::calculations::bmr::Gender;
use crate::units::{lbs_to_kg, UnitSystem};

/// Assumed daily caloric deficit or surplus (kcal/day)
pub const DAILY_CALORIE_DELTA: f64 = 500.0;

/// Approximate energy content of one kilogram of body mass (kcal)
pub const CALORIES_PER_KG: f64 = 7700.0;

/// Longest projection reported as a day count (about two years)
pub const MAX_PROJECTION_DAYS: i64 = 730;

/// Sentinel returned when the projection exceeds [`MAX_PROJECTION_DAYS`].
///
/// Callers must treat this as a distinguished non-numeric outcome, never as
/// a literal day count.
pub const DAYS_NOT_ESTIMABLE: i64 = -1;

/// Estimate days to reach the target weight.
///
/// `days = ceil(|current_kg - target_kg| * 7700 / 500)`, or
/// [`DAYS_NOT_ESTIMABLE`] when that exceeds [`MAX_PROJECTION_DAYS`].
///
/// Imperial weights are converted through the shared [`lbs_to_kg`] function.
///
/// `_height`, `_age` and `_gender` are unused by the current model; they
/// stay in the signature so the contract holds if the model later accounts
/// for them.
///
/// # Arguments
///
/// * `current_weight` - Current weight in kg (metric) or lb (imperial)
/// * `target_weight` - Target weight in the same system
/// * `units` - Measurement system of both weights
pub fn calculate_days_to_target_weight(
    current_weight: f64,
    target_weight: f64,
    _height: f64,
    _age: f64,
    _gender: Gender,
    units: UnitSystem,
) -> i64 {
    let (current_kg, target_kg) = match units {
        UnitSystem::Metric => (current_weight, target_weight),
        UnitSystem::Imperial => (lbs_to_kg(current_weight), lbs_to_kg(target_weight)),
    };

    let weight_diff_kg = (current_kg - target_kg).abs();
    let days = (weight_diff_kg * CALORIES_PER_KG / DAILY_CALORIE_DELTA).ceil() as i64;

    if days > MAX_PROJECTION_DAYS {
        DAYS_NOT_ESTIMABLE
    } else {
        days
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_days_metric() {
        // diff = 17.865 kg; ceil(17.865 * 7700 / 500) = ceil(275.121) = 276
        let days = calculate_days_to_target_weight(
            80.0,
            62.135,
            170.0,
            30.0,
            Gender::Female,
            UnitSystem::Metric,
        );
        assert_eq!(days, 276);
    }

    #[test]
    fn test_days_direction_symmetric() {
        // Surplus and deficit projections use the absolute difference
        let losing = calculate_days_to_target_weight(
            80.0,
            62.135,
            170.0,
            30.0,
            Gender::Male,
            UnitSystem::Metric,
        );
        let gaining = calculate_days_to_target_weight(
            62.135,
            80.0,
            170.0,
            30.0,
            Gender::Male,
            UnitSystem::Metric,
        );
        assert_eq!(losing, gaining);
    }

    #[test]
    fn test_days_imperial_matches_metric() {
        // 80 kg = 176.3696 lb, 62.135 kg = 136.9841 lb
        let days = calculate_days_to_target_weight(
            176.3696,
            136.9841,
            66.9291,
            30.0,
            Gender::Female,
            UnitSystem::Imperial,
        );
        assert_eq!(days, 276);
    }

    #[test]
    fn test_horizon_boundary() {
        // 47.4 kg diff: ceil(47.4 * 15.4) = 730, still reported
        let days = calculate_days_to_target_weight(
            109.535,
            62.135,
            170.0,
            30.0,
            Gender::Male,
            UnitSystem::Metric,
        );
        assert_eq!(days, 730);
    }

    #[test]
    fn test_sentinel_beyond_horizon() {
        // 137.865 kg diff projects past two years
        let days = calculate_days_to_target_weight(
            200.0,
            62.135,
            170.0,
            30.0,
            Gender::Male,
            UnitSystem::Metric,
        );
        assert_eq!(days, DAYS_NOT_ESTIMABLE);
    }
}
