use std::io;

use anyhow::{Context, Result};
use clap::Parser;
use tracing::info;

use carbon_calculator::analysis::reporting::{self, SourceList};
use carbon_calculator::cli::cli::Args;
use carbon_calculator::cli::interactive;
use carbon_calculator::config::estimator_config::EstimatorConfig;
use carbon_calculator::core::session::CalculatorSession;
use carbon_calculator::utils::logging;

fn main() -> Result<()> {
    let args = Args::parse();

    logging::init_logging(args.enable_timing(), args.debug_logging());

    if args.list_sources() {
        print!("{}", SourceList);
        return Ok(());
    }

    let config = match args.config() {
        Some(path) => EstimatorConfig::load_from_file(path)
            .with_context(|| format!("failed to load configuration from {}", path.display()))?,
        None => EstimatorConfig::default(),
    };

    let mut session = CalculatorSession::new(config).context("invalid estimator configuration")?;
    args.apply_to(&mut session)?;
    info!(
        footprint = session.estimate().footprint_kg_co2,
        temperature = session.estimate().temperature_change_c,
        "Initial estimate ready"
    );

    if args.interactive() {
        let stdin = io::stdin();
        let mut stdout = io::stdout();
        interactive::run(&mut session, stdin.lock(), &mut stdout)?;
    } else {
        reporting::write_report(&session, args.format(), io::stdout().lock())?;
    }

    logging::print_timing_report();
    Ok(())
}
