use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use crate::config::constants::*;

/// The six energy sources tracked by the calculator.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "snake_case")]
pub enum EnergySource {
    NaturalGas,
    Electricity,
    HeatingOil,
    Propane,
    Coal,
    Biomass,
}

impl EnergySource {
    /// Every source in display order.
    pub const ALL: [EnergySource; 6] = [
        EnergySource::NaturalGas,
        EnergySource::Electricity,
        EnergySource::HeatingOil,
        EnergySource::Propane,
        EnergySource::Coal,
        EnergySource::Biomass,
    ];

    /// kg CO2 emitted per kWh.
    pub fn emission_factor(&self) -> f64 {
        match self {
            EnergySource::NaturalGas => NATURAL_GAS_EMISSION_FACTOR,
            EnergySource::Electricity => ELECTRICITY_EMISSION_FACTOR,
            EnergySource::HeatingOil => HEATING_OIL_EMISSION_FACTOR,
            EnergySource::Propane => PROPANE_EMISSION_FACTOR,
            EnergySource::Coal => COAL_EMISSION_FACTOR,
            EnergySource::Biomass => BIOMASS_EMISSION_FACTOR,
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            EnergySource::NaturalGas => "Natural Gas Consumption (kWh)",
            EnergySource::Electricity => "Electricity Consumption (kWh)",
            EnergySource::HeatingOil => "Heating Oil Consumption (kWh)",
            EnergySource::Propane => "Propane Consumption (kWh)",
            EnergySource::Coal => "Coal Consumption (kWh)",
            EnergySource::Biomass => "Biomass Consumption (kWh)",
        }
    }

    /// Series name used in chart data.
    pub fn series_name(&self) -> &'static str {
        match self {
            EnergySource::NaturalGas => "NaturalGas",
            EnergySource::Electricity => "Electricity",
            EnergySource::HeatingOil => "HeatingOil",
            EnergySource::Propane => "Propane",
            EnergySource::Coal => "Coal",
            EnergySource::Biomass => "Biomass",
        }
    }

    pub fn description(&self) -> String {
        let usage = match self {
            EnergySource::NaturalGas => "Natural gas is a fossil fuel used for heating, cooking, and electricity generation.",
            EnergySource::Electricity => "Electricity consumption includes all electrical appliances and lighting.",
            EnergySource::HeatingOil => "Heating oil is used in boilers and furnaces for heating buildings.",
            EnergySource::Propane => "Propane is a gas used for heating, cooking, and as fuel for engines.",
            EnergySource::Coal => "Coal is a fossil fuel used primarily for electricity generation.",
            EnergySource::Biomass => "Biomass includes organic materials used for energy production.",
        };
        format!("{} Emission: {} kg CO2 per kWh", usage, self.emission_factor())
    }

    /// Hex colour of the source's input slider.
    pub fn slider_color(&self) -> &'static str {
        match self {
            EnergySource::NaturalGas => "#8884d8",
            EnergySource::Electricity => "#82ca9d",
            EnergySource::HeatingOil => "#ffc658",
            EnergySource::Propane => "#d0ed57",
            EnergySource::Coal => "#a4de6c",
            EnergySource::Biomass => "#ffcc00",
        }
    }

    /// Hex colour of the source's series in the before/after line chart.
    pub fn line_color(&self) -> &'static str {
        match self {
            EnergySource::NaturalGas => "#1f77b4",
            EnergySource::Electricity => "#ff7f0e",
            EnergySource::HeatingOil => "#2ca02c",
            EnergySource::Propane => "#d62728",
            EnergySource::Coal => "#9467bd",
            EnergySource::Biomass => "#ffcc00",
        }
    }
}

/// Line colour of the CarbonFootprint series.
pub const FOOTPRINT_LINE_COLOR: &str = "#ffffff";

pub const EFFICIENCY_DESCRIPTION: &str =
    "Efficiency of the energy usage. Higher efficiency means less carbon footprint.";

impl FromStr for EnergySource {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let normalized: String = s
            .chars()
            .filter(|c| *c != '_' && *c != '-' && !c.is_whitespace())
            .collect::<String>()
            .to_lowercase();
        match normalized.as_str() {
            "naturalgas" | "gas" => Ok(EnergySource::NaturalGas),
            "electricity" => Ok(EnergySource::Electricity),
            "heatingoil" | "oil" => Ok(EnergySource::HeatingOil),
            "propane" => Ok(EnergySource::Propane),
            "coal" => Ok(EnergySource::Coal),
            "biomass" => Ok(EnergySource::Biomass),
            _ => Err(format!("Unknown energy source: {}", s)),
        }
    }
}

impl fmt::Display for EnergySource {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            EnergySource::NaturalGas => write!(f, "natural_gas"),
            EnergySource::Electricity => write!(f, "electricity"),
            EnergySource::HeatingOil => write!(f, "heating_oil"),
            EnergySource::Propane => write!(f, "propane"),
            EnergySource::Coal => write!(f, "coal"),
            EnergySource::Biomass => write!(f, "biomass"),
        }
    }
}
