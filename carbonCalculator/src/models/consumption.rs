use serde::{Deserialize, Serialize};
use crate::config::constants::*;
use crate::config::energy_source::EnergySource;

/// Energy consumed per source over the reporting period, in kWh.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ConsumptionInput {
    pub natural_gas: f64,
    pub electricity: f64,
    pub heating_oil: f64,
    pub propane: f64,
    pub coal: f64,
    pub biomass: f64,
}

impl ConsumptionInput {
    pub fn new(
        natural_gas: f64,
        electricity: f64,
        heating_oil: f64,
        propane: f64,
        coal: f64,
        biomass: f64,
    ) -> Self {
        Self {
            natural_gas,
            electricity,
            heating_oil,
            propane,
            coal,
            biomass,
        }
    }

    /// Every source set to the same quantity.
    pub fn uniform(kwh: f64) -> Self {
        Self::new(kwh, kwh, kwh, kwh, kwh, kwh)
    }

    pub fn zero() -> Self {
        Self::uniform(0.0)
    }

    /// The chart's fixed "Before" vector.
    pub fn baseline() -> Self {
        Self::uniform(BASELINE_CONSUMPTION_KWH)
    }

    pub fn get(&self, source: EnergySource) -> f64 {
        match source {
            EnergySource::NaturalGas => self.natural_gas,
            EnergySource::Electricity => self.electricity,
            EnergySource::HeatingOil => self.heating_oil,
            EnergySource::Propane => self.propane,
            EnergySource::Coal => self.coal,
            EnergySource::Biomass => self.biomass,
        }
    }

    pub fn set(&mut self, source: EnergySource, kwh: f64) {
        let slot = match source {
            EnergySource::NaturalGas => &mut self.natural_gas,
            EnergySource::Electricity => &mut self.electricity,
            EnergySource::HeatingOil => &mut self.heating_oil,
            EnergySource::Propane => &mut self.propane,
            EnergySource::Coal => &mut self.coal,
            EnergySource::Biomass => &mut self.biomass,
        };
        *slot = kwh;
    }

    /// Copy with one source replaced.
    pub fn with(mut self, source: EnergySource, kwh: f64) -> Self {
        self.set(source, kwh);
        self
    }

    pub fn iter(&self) -> impl Iterator<Item = (EnergySource, f64)> + '_ {
        EnergySource::ALL.iter().map(move |source| (*source, self.get(*source)))
    }

    pub fn total_kwh(&self) -> f64 {
        self.iter().map(|(_, kwh)| kwh).sum()
    }
}

impl Default for ConsumptionInput {
    fn default() -> Self {
        Self::new(
            DEFAULT_NATURAL_GAS_KWH,
            DEFAULT_ELECTRICITY_KWH,
            DEFAULT_HEATING_OIL_KWH,
            DEFAULT_PROPANE_KWH,
            DEFAULT_COAL_KWH,
            DEFAULT_BIOMASS_KWH,
        )
    }
}

/// The seven values the estimator is recomputed from.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct EstimatorInput {
    pub consumption: ConsumptionInput,
    pub efficiency_percent: f64,
}

impl EstimatorInput {
    pub fn new(consumption: ConsumptionInput, efficiency_percent: f64) -> Self {
        Self {
            consumption,
            efficiency_percent,
        }
    }
}

impl Default for EstimatorInput {
    fn default() -> Self {
        Self::new(ConsumptionInput::default(), DEFAULT_EFFICIENCY_PERCENT)
    }
}

/// Bounds and step of an input control.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct SliderRange {
    pub min: f64,
    pub max: f64,
    pub step: f64,
}

impl SliderRange {
    pub const CONSUMPTION: SliderRange = SliderRange {
        min: CONSUMPTION_MIN_KWH,
        max: CONSUMPTION_MAX_KWH,
        step: CONSUMPTION_STEP_KWH,
    };

    pub const EFFICIENCY: SliderRange = SliderRange {
        min: EFFICIENCY_MIN_PERCENT,
        max: EFFICIENCY_MAX_PERCENT,
        step: EFFICIENCY_STEP_PERCENT,
    };

    /// NaN falls back to the lower bound.
    pub fn clamp(&self, value: f64) -> f64 {
        if value.is_nan() {
            return self.min;
        }
        value.clamp(self.min, self.max)
    }

    pub fn contains(&self, value: f64) -> bool {
        value >= self.min && value <= self.max
    }
}
