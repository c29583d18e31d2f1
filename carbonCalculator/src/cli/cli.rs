use clap::{Parser, ValueEnum};
use std::path::{Path, PathBuf};
use crate::config::energy_source::EnergySource;
use crate::core::error::EstimatorError;
use crate::core::session::CalculatorSession;

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    Text,
    Json,
    Csv,
}

#[derive(Parser, Debug)]
#[command(author, version, about = "Carbon footprint and temperature change estimator", long_about = None)]
pub struct Args {
    #[arg(long, help = "Natural gas consumption (kWh, 0-500)")]
    natural_gas: Option<f64>,

    #[arg(long, help = "Electricity consumption (kWh, 0-500)")]
    electricity: Option<f64>,

    #[arg(long, help = "Heating oil consumption (kWh, 0-500)")]
    heating_oil: Option<f64>,

    #[arg(long, help = "Propane consumption (kWh, 0-500)")]
    propane: Option<f64>,

    #[arg(long, help = "Coal consumption (kWh, 0-500)")]
    coal: Option<f64>,

    #[arg(long, help = "Biomass consumption (kWh, 0-500)")]
    biomass: Option<f64>,

    #[arg(short, long, help = "Energy usage efficiency (percent, 80-100)")]
    efficiency: Option<f64>,

    #[arg(short, long, help = "JSON configuration file")]
    config: Option<PathBuf>,

    #[arg(short, long, value_enum, default_value_t = OutputFormat::Text)]
    format: OutputFormat,

    #[arg(short, long, help = "Read commands from stdin", default_value_t = false)]
    interactive: bool,

    #[arg(long, help = "List energy sources with their emission factors", default_value_t = false)]
    list_sources: bool,

    #[arg(long, default_value_t = false)]
    debug_logging: bool,

    #[arg(long, default_value_t = false)]
    enable_timing: bool,
}

impl Args {
    /// Consumption overrides given on the command line.
    pub fn consumption_overrides(&self) -> Vec<(EnergySource, f64)> {
        [
            (EnergySource::NaturalGas, self.natural_gas),
            (EnergySource::Electricity, self.electricity),
            (EnergySource::HeatingOil, self.heating_oil),
            (EnergySource::Propane, self.propane),
            (EnergySource::Coal, self.coal),
            (EnergySource::Biomass, self.biomass),
        ]
        .into_iter()
        .filter_map(|(source, value)| value.map(|kwh| (source, kwh)))
        .collect()
    }

    /// Push command-line overrides through the session's clamped setters.
    pub fn apply_to(&self, session: &mut CalculatorSession) -> Result<(), EstimatorError> {
        for (source, kwh) in self.consumption_overrides() {
            session.set_consumption(source, kwh)?;
        }
        if let Some(percent) = self.efficiency {
            session.set_efficiency(percent)?;
        }
        Ok(())
    }

    pub fn efficiency(&self) -> Option<f64> {
        self.efficiency
    }

    pub fn config(&self) -> Option<&Path> {
        self.config.as_deref()
    }

    pub fn format(&self) -> OutputFormat {
        self.format
    }

    pub fn interactive(&self) -> bool {
        self.interactive
    }

    pub fn list_sources(&self) -> bool {
        self.list_sources
    }

    pub fn debug_logging(&self) -> bool {
        self.debug_logging
    }

    pub fn enable_timing(&self) -> bool {
        self.enable_timing
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_overrides_only_include_given_flags() {
        let args = Args::parse_from(["carbon-calculator", "--coal", "320", "--efficiency", "90"]);
        assert_eq!(args.consumption_overrides(), vec![(EnergySource::Coal, 320.0)]);
        assert_eq!(args.efficiency(), Some(90.0));
        assert_eq!(args.format(), OutputFormat::Text);
        assert!(!args.interactive());
    }

    #[test]
    fn test_overrides_outside_slider_range_are_clamped() {
        let args = Args::parse_from([
            "carbon-calculator",
            "--coal",
            "9000",
            "--biomass=-20",
            "--efficiency",
            "10",
        ]);
        let mut session = CalculatorSession::with_defaults().unwrap();
        args.apply_to(&mut session).unwrap();

        let input = session.input();
        assert_eq!(input.consumption.coal, 500.0);
        assert_eq!(input.consumption.biomass, 0.0);
        assert_eq!(input.efficiency_percent, 80.0);
        assert_eq!(input.consumption.propane, 200.0);
    }

    #[test]
    fn test_format_flag() {
        let args = Args::parse_from(["carbon-calculator", "--format", "csv"]);
        assert_eq!(args.format(), OutputFormat::Csv);
    }
}
