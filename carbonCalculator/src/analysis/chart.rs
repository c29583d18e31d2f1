use serde::{Deserialize, Serialize};
use crate::config::constants::{GAUGE_VALUE_MIN, PERCENT_DIVISOR};
use crate::core::error::EstimatorError;
use crate::core::estimator::{classify_with_threshold, compute_footprint, Severity};
use crate::models::consumption::ConsumptionInput;

/// One point of the before/after line chart.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct ChartPoint {
    pub name: String,
    pub natural_gas: f64,
    pub electricity: f64,
    pub heating_oil: f64,
    pub propane: f64,
    pub coal: f64,
    pub biomass: f64,
    pub carbon_footprint: f64,
}

impl ChartPoint {
    pub fn new(name: &str, consumption: &ConsumptionInput, carbon_footprint: f64) -> Self {
        Self {
            name: name.to_string(),
            natural_gas: consumption.natural_gas,
            electricity: consumption.electricity,
            heating_oil: consumption.heating_oil,
            propane: consumption.propane,
            coal: consumption.coal,
            biomass: consumption.biomass,
            carbon_footprint,
        }
    }

    /// Reference point; its footprint is taken at full efficiency.
    pub fn before(baseline: &ConsumptionInput) -> Result<Self, EstimatorError> {
        let footprint = compute_footprint(baseline, PERCENT_DIVISOR)?;
        Ok(Self::new("Before", baseline, footprint))
    }

    pub fn after(consumption: &ConsumptionInput, carbon_footprint: f64) -> Self {
        Self::new("After", consumption, carbon_footprint)
    }
}

/// Gauge state for a temperature change.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct GaugeReading {
    pub value: f64,
    pub display_value: f64,  // Clamped to the gauge's range
    pub value_max: f64,
    pub severity: Severity,
}

impl GaugeReading {
    /// A maximum at or below the gauge minimum collapses the range to a point.
    pub fn new(temperature_change_c: f64, value_max: f64, severe_threshold_c: f64) -> Self {
        let value_max = value_max.max(GAUGE_VALUE_MIN);
        Self {
            value: temperature_change_c,
            display_value: temperature_change_c.max(GAUGE_VALUE_MIN).min(value_max),
            value_max,
            severity: classify_with_threshold(temperature_change_c, severe_threshold_c),
        }
    }

    /// Share of the arc that is filled, in [0, 1].
    pub fn fill_fraction(&self) -> f64 {
        let range = self.value_max - GAUGE_VALUE_MIN;
        if range > 0.0 {
            (self.display_value - GAUGE_VALUE_MIN) / range
        } else {
            0.0
        }
    }
}
