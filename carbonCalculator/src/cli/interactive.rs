use std::io::{BufRead, Write};
use anyhow::{bail, Context, Result};
use tracing::{debug, warn};
use crate::analysis::reporting::{ChartTable, SourceList};
use crate::config::energy_source::EnergySource;
use crate::core::session::CalculatorSession;

/// A parsed line of interactive input.
#[derive(Debug, Clone, PartialEq)]
pub enum Command {
    Set(EnergySource, f64),
    Efficiency(f64),
    Reset,
    Show,
    Chart,
    Gauge,
    Sources,
    Help,
    Quit,
}

pub const HELP_TEXT: &str = "\
Commands:
  set <source> <kWh>   set one source (natural_gas, electricity, heating_oil, propane, coal, biomass)
  efficiency <pct>     set efficiency (80-100)
  reset                restore default values
  show                 print footprint and temperature change
  chart                print before/after chart data
  gauge                print temperature gauge
  sources              list sources and emission factors
  help                 show this text
  quit                 exit";

fn parse_number(token: Option<&str>, what: &str) -> Result<f64> {
    let token = token.with_context(|| format!("missing {}", what))?;
    token
        .parse::<f64>()
        .with_context(|| format!("invalid {}: {}", what, token))
}

pub fn parse_command(line: &str) -> Result<Option<Command>> {
    let mut tokens = line.split_whitespace();
    let Some(keyword) = tokens.next() else {
        return Ok(None);
    };

    let command = match keyword.to_lowercase().as_str() {
        "set" => {
            let source_token = tokens.next().context("missing energy source")?;
            let source = source_token
                .parse::<EnergySource>()
                .map_err(anyhow::Error::msg)?;
            Command::Set(source, parse_number(tokens.next(), "kWh value")?)
        }
        "efficiency" | "eff" => Command::Efficiency(parse_number(tokens.next(), "efficiency")?),
        "reset" => Command::Reset,
        "show" => Command::Show,
        "chart" => Command::Chart,
        "gauge" => Command::Gauge,
        "sources" => Command::Sources,
        "help" | "?" => Command::Help,
        "quit" | "exit" => Command::Quit,
        other => bail!("unknown command: {}", other),
    };

    if let Some(extra) = tokens.next() {
        bail!("unexpected argument: {}", extra);
    }
    Ok(Some(command))
}

fn write_estimate<W: Write>(session: &CalculatorSession, out: &mut W) -> Result<()> {
    let estimate = session.estimate();
    writeln!(
        out,
        "Carbon Footprint: {:.2} kg CO2 | Temperature Change: {:.2} °C | {}{}",
        estimate.footprint_kg_co2,
        estimate.temperature_change_c,
        estimate.severity,
        if session.is_animating() { " *" } else { "" }
    )?;
    Ok(())
}

/// Apply one command; returns false when the loop should stop.
pub fn apply_command<W: Write>(session: &mut CalculatorSession, command: Command, out: &mut W) -> Result<bool> {
    debug!(?command, "Applying command");
    match command {
        Command::Set(source, kwh) => {
            session.set_consumption(source, kwh)?;
            write_estimate(session, out)?;
        }
        Command::Efficiency(percent) => {
            session.set_efficiency(percent)?;
            write_estimate(session, out)?;
        }
        Command::Reset => {
            session.reset()?;
            write_estimate(session, out)?;
        }
        Command::Show => write_estimate(session, out)?,
        Command::Chart => write!(out, "{}", ChartTable(&session.chart_points()?))?,
        Command::Gauge => writeln!(out, "{}", session.gauge())?,
        Command::Sources => write!(out, "{}", SourceList)?,
        Command::Help => writeln!(out, "{}", HELP_TEXT)?,
        Command::Quit => return Ok(false),
    }
    Ok(true)
}

/// Read commands until `quit` or end of input. Bad lines are reported and skipped.
pub fn run<R: BufRead, W: Write>(session: &mut CalculatorSession, input: R, out: &mut W) -> Result<()> {
    write_estimate(session, out)?;
    for line in input.lines() {
        let line = line.context("failed to read command")?;
        match parse_command(&line) {
            Ok(Some(command)) => {
                if !apply_command(session, command, out)? {
                    break;
                }
            }
            Ok(None) => {}
            Err(e) => {
                warn!(line = %line.trim(), "Rejected command");
                writeln!(out, "error: {:#}", e)?;
            }
        }
        out.flush()?;
    }
    Ok(())
}
