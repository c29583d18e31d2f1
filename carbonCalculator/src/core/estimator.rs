//! Emissions estimator
//!
//! Pure functions from an [`EstimatorInput`] to a footprint in kg CO2, a
//! projected temperature change and its severity. Nothing here holds state;
//! callers own the input and recompute on every change.

use serde::{Deserialize, Serialize};
use std::fmt;
use super::error::EstimatorError;
use crate::config::constants::*;
use crate::models::consumption::{ConsumptionInput, EstimatorInput};
use crate::utils::logging::{self, OperationCategory};

/// Severity band of a projected temperature change.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Severity {
    Moderate,
    Severe,
}

impl Severity {
    pub fn indicator(&self) -> &'static str {
        match self {
            Severity::Moderate => "favourable",
            Severity::Severe => "warning",
        }
    }
}

impl fmt::Display for Severity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Severity::Moderate => write!(f, "Moderate"),
            Severity::Severe => write!(f, "Severe"),
        }
    }
}

/// Result of one recomputation.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Estimate {
    pub footprint_kg_co2: f64,
    pub temperature_change_c: f64,
    pub severity: Severity,
}

/// Sum of every source's consumption times its emission factor, with no
/// efficiency adjustment.
pub fn raw_emissions(consumption: &ConsumptionInput) -> f64 {
    consumption
        .iter()
        .map(|(source, kwh)| kwh * source.emission_factor())
        .sum()
}

/// Total kg CO2 for `consumption` at `efficiency_percent` in (0, 100].
///
/// The raw emissions are divided by the efficiency fraction, so lower
/// efficiency yields a larger footprint. No rounding is applied.
pub fn compute_footprint(
    consumption: &ConsumptionInput,
    efficiency_percent: f64,
) -> Result<f64, EstimatorError> {
    if !(efficiency_percent > 0.0 && efficiency_percent <= PERCENT_DIVISOR) {
        return Err(EstimatorError::InvalidEfficiency(efficiency_percent));
    }
    if let Some((energy_source, value)) = consumption
        .iter()
        .find(|(_, kwh)| !kwh.is_finite() || *kwh < 0.0)
    {
        return Err(EstimatorError::InvalidConsumption { energy_source, value });
    }

    let efficiency_factor = efficiency_percent / PERCENT_DIVISOR;
    Ok(raw_emissions(consumption) / efficiency_factor)
}

/// Linear projection of a footprint onto degC, rounded to two decimals
/// (half away from zero).
pub fn compute_temperature_change(footprint_kg_co2: f64) -> f64 {
    let temperature_change = (footprint_kg_co2 / MAX_FOOTPRINT) * TEMPERATURE_SCALE + TEMPERATURE_BASE;
    round_to(temperature_change, TEMPERATURE_DECIMALS)
}

/// Above the threshold is severe; the threshold itself is still moderate.
pub fn classify_temperature(temperature_change_c: f64) -> Severity {
    classify_with_threshold(temperature_change_c, SEVERE_TEMPERATURE_THRESHOLD)
}

pub fn classify_with_threshold(temperature_change_c: f64, severe_threshold_c: f64) -> Severity {
    if temperature_change_c > severe_threshold_c {
        Severity::Severe
    } else {
        Severity::Moderate
    }
}

pub fn estimate(input: &EstimatorInput) -> Result<Estimate, EstimatorError> {
    estimate_with_threshold(input, SEVERE_TEMPERATURE_THRESHOLD)
}

pub fn estimate_with_threshold(
    input: &EstimatorInput,
    severe_threshold_c: f64,
) -> Result<Estimate, EstimatorError> {
    let _timing = logging::start_timing("estimate", OperationCategory::Estimation);
    let footprint_kg_co2 = compute_footprint(&input.consumption, input.efficiency_percent)?;
    let temperature_change_c = compute_temperature_change(footprint_kg_co2);
    Ok(Estimate {
        footprint_kg_co2,
        temperature_change_c,
        severity: classify_with_threshold(temperature_change_c, severe_threshold_c),
    })
}

fn round_to(value: f64, decimals: i32) -> f64 {
    let scale = 10f64.powi(decimals);
    (value * scale).round() / scale
}
