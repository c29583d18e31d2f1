use thiserror::Error;
use crate::config::energy_source::EnergySource;

#[derive(Debug, Error, Clone, PartialEq)]
pub enum EstimatorError {
    #[error("Invalid efficiency: {0}%. Efficiency must be greater than 0 and at most 100")]
    InvalidEfficiency(f64),
    #[error("Invalid consumption for {energy_source}: {value} kWh. Consumption must be a finite, non-negative number")]
    InvalidConsumption { energy_source: EnergySource, value: f64 },
}

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
    #[error("Invalid configuration: {0}")]
    Invalid(String),
}

#[derive(Debug, Error)]
pub enum SessionError {
    #[error(transparent)]
    Config(#[from] ConfigError),
    #[error(transparent)]
    Estimator(#[from] EstimatorError),
}
