use anyhow::{Context, Result};
use chrono::Local;
use serde::Serialize;
use std::fmt;
use std::io;
use crate::analysis::chart::{ChartPoint, GaugeReading};
use crate::cli::cli::OutputFormat;
use crate::config::energy_source::{EnergySource, EFFICIENCY_DESCRIPTION, FOOTPRINT_LINE_COLOR};
use crate::core::error::EstimatorError;
use crate::core::estimator::Estimate;
use crate::core::session::CalculatorSession;
use crate::models::consumption::EstimatorInput;
use crate::utils::csv_export;
use crate::utils::logging::{self, OperationCategory};

const GAUGE_BAR_WIDTH: usize = 30;

/// Everything the presentation layer shows for one state.
#[derive(Debug, Clone, Serialize)]
pub struct EstimateReport {
    pub input: EstimatorInput,
    pub estimate: Estimate,
    pub gauge: GaugeReading,
    pub chart: Vec<ChartPoint>,
}

impl EstimateReport {
    pub fn from_session(session: &CalculatorSession) -> Result<Self, EstimatorError> {
        Ok(Self {
            input: *session.input(),
            estimate: *session.estimate(),
            gauge: session.gauge(),
            chart: session.chart_points()?,
        })
    }
}

impl fmt::Display for EstimateReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "\nCarbon Footprint Summary ({})", Local::now().format("%Y-%m-%d %H:%M:%S"))?;
        writeln!(f, "----------------------------------------")?;
        writeln!(f, "Consumption:")?;
        for (source, kwh) in self.input.consumption.iter() {
            writeln!(
                f,
                "  {:<32} {:>7.1}  (x {} kg CO2/kWh)",
                source.label(),
                kwh,
                source.emission_factor()
            )?;
        }
        writeln!(f, "  {:<32} {:>7.1}", "Total (kWh)", self.input.consumption.total_kwh())?;
        writeln!(f, "  {:<32} {:>7.1}%", "Efficiency", self.input.efficiency_percent)?;
        writeln!(f, "Results:")?;
        writeln!(f, "  Carbon Footprint: {:.2} kg CO2", self.estimate.footprint_kg_co2)?;
        writeln!(f, "  Temperature Change: {:.2} °C", self.estimate.temperature_change_c)?;
        writeln!(
            f,
            "  Outlook: {} ({})",
            self.estimate.severity,
            self.estimate.severity.indicator()
        )?;
        writeln!(f, "----------------------------------------")
    }
}

impl fmt::Display for GaugeReading {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let filled = ((self.fill_fraction() * GAUGE_BAR_WIDTH as f64).round() as usize).min(GAUGE_BAR_WIDTH);
        write!(
            f,
            "[{}{}] {:.2} / {:.1} °C ({})",
            "#".repeat(filled),
            " ".repeat(GAUGE_BAR_WIDTH - filled),
            self.display_value,
            self.value_max,
            self.severity.indicator()
        )
    }
}

/// Fixed-width table of chart points.
pub struct ChartTable<'a>(pub &'a [ChartPoint]);

impl fmt::Display for ChartTable<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:<8}", "")?;
        for source in EnergySource::ALL {
            write!(f, "{:>12}", source.series_name())?;
        }
        writeln!(f, "{:>17}", "CarbonFootprint")?;
        for point in self.0 {
            write!(f, "{:<8}", point.name)?;
            for value in [
                point.natural_gas,
                point.electricity,
                point.heating_oil,
                point.propane,
                point.coal,
                point.biomass,
            ] {
                write!(f, "{:>12.1}", value)?;
            }
            writeln!(f, "{:>17.2}", point.carbon_footprint)?;
        }
        Ok(())
    }
}

/// Source descriptions with slider and chart line colours.
pub struct SourceList;

impl fmt::Display for SourceList {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for source in EnergySource::ALL {
            writeln!(
                f,
                "{} (slider {}, line {}): {}",
                source,
                source.slider_color(),
                source.line_color(),
                source.description()
            )?;
        }
        writeln!(f, "carbon_footprint (line {})", FOOTPRINT_LINE_COLOR)?;
        writeln!(f, "efficiency: {}", EFFICIENCY_DESCRIPTION)
    }
}

/// One-shot report of the session's current state.
pub fn write_report<W: io::Write>(session: &CalculatorSession, format: OutputFormat, mut out: W) -> Result<()> {
    let _timing = logging::start_timing("write_report", OperationCategory::Report);
    let report = EstimateReport::from_session(session)?;

    match format {
        OutputFormat::Text => {
            write!(out, "{}", report)?;
            writeln!(out, "{}", report.gauge)?;
            write!(out, "{}", ChartTable(&report.chart))?;
        }
        OutputFormat::Json => {
            serde_json::to_writer_pretty(&mut out, &report).context("failed to write JSON report")?;
            writeln!(out)?;
        }
        OutputFormat::Csv => {
            csv_export::write_chart_csv(&mut out, &report.chart).context("failed to write CSV report")?;
        }
    }
    out.flush()?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn default_report() -> EstimateReport {
        let session = CalculatorSession::with_defaults().unwrap();
        EstimateReport::from_session(&session).unwrap()
    }

    fn render(format: OutputFormat) -> String {
        let session = CalculatorSession::with_defaults().unwrap();
        let mut buffer = Vec::new();
        write_report(&session, format, &mut buffer).unwrap();
        String::from_utf8(buffer).unwrap()
    }

    #[test]
    fn test_summary_uses_two_decimals() {
        let summary = default_report().to_string();
        assert!(summary.contains("Carbon Footprint: 274.35 kg CO2"));
        assert!(summary.contains("Temperature Change: 3.30 °C"));
        assert!(summary.contains("Outlook: Moderate (favourable)"));
        assert!(summary.contains("1050.0"));
    }

    #[test]
    fn test_gauge_bar_width() {
        let line = GaugeReading::new(5.1, 5.1, 3.3).to_string();
        assert!(line.starts_with(&format!("[{}]", "#".repeat(GAUGE_BAR_WIDTH))));
    }

    #[test]
    fn test_chart_table_rows() {
        let table = ChartTable(&default_report().chart).to_string();
        let lines: Vec<&str> = table.lines().collect();
        assert_eq!(lines.len(), 3);
        assert!(lines[1].starts_with("Before"));
        assert!(lines[1].trim_end().ends_with("136.50"));
    }

    #[test]
    fn test_source_list_has_line_colours() {
        let list = SourceList.to_string();
        assert!(list.contains("natural_gas (slider #8884d8, line #1f77b4)"));
        assert!(list.contains("carbon_footprint (line #ffffff)"));
    }

    #[test]
    fn test_json_report() {
        let json: serde_json::Value = serde_json::from_str(&render(OutputFormat::Json)).unwrap();
        assert_eq!(json["input"]["efficiency_percent"], 85.0);
        assert_eq!(json["estimate"]["temperature_change_c"], 3.3);
        assert_eq!(json["estimate"]["severity"], "moderate");
        assert_eq!(json["gauge"]["value_max"], 5.1);
        assert_eq!(json["chart"][0]["Name"], "Before");
        assert_eq!(json["chart"][1]["Coal"], 250.0);
    }

    #[test]
    fn test_csv_report() {
        let text = render(OutputFormat::Csv);
        let lines: Vec<&str> = text.lines().collect();
        assert_eq!(lines.len(), 3);
        assert!(lines[0].starts_with("Name,NaturalGas"));
        assert!(lines[2].starts_with("After,50.0,100.0,150.0,200.0,250.0,300.0,"));
    }

    #[test]
    fn test_text_report_has_all_sections() {
        let text = render(OutputFormat::Text);
        assert!(text.contains("Carbon Footprint Summary"));
        assert!(text.contains("/ 5.1 °C (favourable)"));
        assert!(text.contains("CarbonFootprint"));
    }
}
