use tracing::{debug, info, warn};
use super::animation::AnimationTimer;
use super::error::{EstimatorError, SessionError};
use super::estimator::{self, Estimate};
use crate::analysis::chart::{ChartPoint, GaugeReading};
use crate::config::energy_source::EnergySource;
use crate::config::estimator_config::EstimatorConfig;
use crate::models::consumption::{EstimatorInput, SliderRange};
use crate::utils::logging::{self, OperationCategory};

/// Mutable input state on the presentation side of the estimator.
///
/// Every setter clamps to the control's range and recomputes synchronously,
/// so `estimate()` always reflects the current input.
#[derive(Debug)]
pub struct CalculatorSession {
    config: EstimatorConfig,
    input: EstimatorInput,
    estimate: Estimate,
    animation: AnimationTimer,
}

impl CalculatorSession {
    /// Starts from the configured reset defaults with a computed estimate.
    ///
    /// The config is validated first, so `reset` can only ever restore an
    /// in-range vector.
    pub fn new(config: EstimatorConfig) -> Result<Self, SessionError> {
        config.validate()?;
        let input = config.reset_defaults;
        let estimate = estimator::estimate_with_threshold(&input, config.severity_threshold)?;
        let animation = AnimationTimer::new(config.animation_delay());
        Ok(Self {
            config,
            input,
            estimate,
            animation,
        })
    }

    pub fn with_defaults() -> Result<Self, SessionError> {
        Self::new(EstimatorConfig::default())
    }

    pub fn input(&self) -> &EstimatorInput {
        &self.input
    }

    pub fn estimate(&self) -> &Estimate {
        &self.estimate
    }

    pub fn config(&self) -> &EstimatorConfig {
        &self.config
    }

    pub fn is_animating(&self) -> bool {
        self.animation.is_animating()
    }

    pub fn set_consumption(&mut self, source: EnergySource, kwh: f64) -> Result<&Estimate, EstimatorError> {
        let clamped = SliderRange::CONSUMPTION.clamp(kwh);
        if clamped != kwh {
            warn!(%source, requested = kwh, applied = clamped, "Consumption clamped to slider range");
        }
        self.input.consumption.set(source, clamped);
        self.recompute()
    }

    pub fn set_efficiency(&mut self, percent: f64) -> Result<&Estimate, EstimatorError> {
        let clamped = SliderRange::EFFICIENCY.clamp(percent);
        if clamped != percent {
            warn!(requested = percent, applied = clamped, "Efficiency clamped to slider range");
        }
        self.input.efficiency_percent = clamped;
        self.recompute()
    }

    /// Restore the configured default vector.
    pub fn reset(&mut self) -> Result<&Estimate, EstimatorError> {
        info!("Resetting inputs to defaults");
        self.input = self.config.reset_defaults;
        self.recompute()
    }

    pub fn recompute(&mut self) -> Result<&Estimate, EstimatorError> {
        let _timing = logging::start_timing("recompute", OperationCategory::Session);
        self.estimate = estimator::estimate_with_threshold(&self.input, self.config.severity_threshold)?;
        debug!(
            footprint = self.estimate.footprint_kg_co2,
            temperature = self.estimate.temperature_change_c,
            severity = %self.estimate.severity,
            "Recomputed estimate"
        );
        self.animation.trigger();
        Ok(&self.estimate)
    }

    /// "Before" and "After" points of the line chart.
    pub fn chart_points(&self) -> Result<Vec<ChartPoint>, EstimatorError> {
        Ok(vec![
            ChartPoint::before(&self.config.baseline)?,
            ChartPoint::after(&self.input.consumption, self.estimate.footprint_kg_co2),
        ])
    }

    pub fn gauge(&self) -> GaugeReading {
        GaugeReading::new(
            self.estimate.temperature_change_c,
            self.config.gauge_value_max,
            self.config.severity_threshold,
        )
    }
}
