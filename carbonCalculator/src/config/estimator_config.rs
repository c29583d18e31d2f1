use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;
use std::time::Duration;
use tracing::info;
use crate::config::constants::*;
use crate::core::error::ConfigError;
use crate::models::consumption::{ConsumptionInput, EstimatorInput, SliderRange};
use crate::utils::logging::{self, OperationCategory};

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct EstimatorConfig {
    pub reset_defaults: EstimatorInput,     // Vector restored by reset, also the starting state
    pub baseline: ConsumptionInput,         // Chart "Before" point, no efficiency adjustment
    pub animation_delay_ms: u64,
    pub gauge_value_max: f64,
    pub severity_threshold: f64,            // degC strictly above which the outlook is severe
}

impl Default for EstimatorConfig {
    fn default() -> Self {
        Self {
            reset_defaults: EstimatorInput::default(),
            baseline: ConsumptionInput::baseline(),
            animation_delay_ms: ANIMATION_DELAY_MS,
            gauge_value_max: GAUGE_VALUE_MAX,
            severity_threshold: SEVERE_TEMPERATURE_THRESHOLD,
        }
    }
}

impl EstimatorConfig {
    pub fn animation_delay(&self) -> Duration {
        Duration::from_millis(self.animation_delay_ms)
    }

    /// Reset defaults must sit inside the input ranges, the gauge needs a
    /// positive maximum and the severity threshold must be finite.
    pub fn validate(&self) -> Result<(), ConfigError> {
        for (source, kwh) in self.reset_defaults.consumption.iter() {
            if !SliderRange::CONSUMPTION.contains(kwh) {
                return Err(ConfigError::Invalid(format!(
                    "reset default for {} is {} kWh, outside {}..={}",
                    source, kwh, CONSUMPTION_MIN_KWH, CONSUMPTION_MAX_KWH
                )));
            }
        }
        let efficiency = self.reset_defaults.efficiency_percent;
        if !SliderRange::EFFICIENCY.contains(efficiency) {
            return Err(ConfigError::Invalid(format!(
                "reset efficiency is {}%, outside {}..={}",
                efficiency, EFFICIENCY_MIN_PERCENT, EFFICIENCY_MAX_PERCENT
            )));
        }
        if let Some((source, kwh)) = self.baseline.iter().find(|(_, kwh)| !kwh.is_finite() || *kwh < 0.0) {
            return Err(ConfigError::Invalid(format!(
                "baseline for {} is {} kWh, must be non-negative",
                source, kwh
            )));
        }
        if !(self.gauge_value_max.is_finite() && self.gauge_value_max > 0.0) {
            return Err(ConfigError::Invalid(format!(
                "gauge maximum must be positive, got {}",
                self.gauge_value_max
            )));
        }
        if !self.severity_threshold.is_finite() {
            return Err(ConfigError::Invalid(format!(
                "severity threshold must be finite, got {}",
                self.severity_threshold
            )));
        }
        Ok(())
    }

    pub fn from_json_str(json: &str) -> Result<Self, ConfigError> {
        let config: EstimatorConfig = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }

    pub fn load_from_file<P: AsRef<Path>>(path: P) -> Result<Self, ConfigError> {
        let _timing = logging::start_timing("load_config", OperationCategory::Config);
        let path = path.as_ref();
        let contents = fs::read_to_string(path)?;
        let config = Self::from_json_str(&contents)?;
        info!(path = %path.display(), "Loaded estimator configuration");
        Ok(config)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_is_valid() {
        assert!(EstimatorConfig::default().validate().is_ok());
    }

    #[test]
    fn test_partial_json_keeps_defaults() {
        let config = EstimatorConfig::from_json_str(r#"{ "animation_delay_ms": 500 }"#).unwrap();
        assert_eq!(config.animation_delay(), Duration::from_millis(500));
        assert_eq!(config.reset_defaults, EstimatorInput::default());
        assert_eq!(config.gauge_value_max, 5.1);
        assert_eq!(config.severity_threshold, 3.3);
    }

    #[test]
    fn test_out_of_range_fields_rejected() {
        let low_efficiency = EstimatorConfig {
            reset_defaults: EstimatorInput::new(ConsumptionInput::default(), 40.0),
            ..EstimatorConfig::default()
        };
        assert!(matches!(low_efficiency.validate(), Err(ConfigError::Invalid(_))));

        let negative_gauge = EstimatorConfig {
            gauge_value_max: -1.0,
            ..EstimatorConfig::default()
        };
        assert!(matches!(negative_gauge.validate(), Err(ConfigError::Invalid(_))));

        let nan_threshold = EstimatorConfig {
            severity_threshold: f64::NAN,
            ..EstimatorConfig::default()
        };
        assert!(matches!(nan_threshold.validate(), Err(ConfigError::Invalid(_))));
    }

    #[test]
    fn test_zero_efficiency_rejected() {
        let json = r#"{
            "reset_defaults": {
                "consumption": {
                    "natural_gas": 0, "electricity": 0, "heating_oil": 0,
                    "propane": 0, "coal": 0, "biomass": 0
                },
                "efficiency_percent": 0
            }
        }"#;
        assert!(matches!(
            EstimatorConfig::from_json_str(json),
            Err(ConfigError::Invalid(_))
        ));
    }

    #[test]
    fn test_malformed_json_is_json_error() {
        assert!(matches!(
            EstimatorConfig::from_json_str("{ not json"),
            Err(ConfigError::Json(_))
        ));
    }
}
