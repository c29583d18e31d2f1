// Main module declarations for the carbon footprint calculator

// Core estimation and session state
pub mod core {
    pub mod error;
    pub mod estimator;
    pub mod session;
    pub mod animation;
}

// Configuration modules
pub mod config {
    pub mod constants;
    pub mod energy_source;
    pub mod estimator_config;
}

// Model definitions
pub mod models {
    pub mod consumption;
}

// Chart data and reporting
pub mod analysis {
    pub mod chart;
    pub mod reporting;
}

// Utility functions
pub mod utils {
    pub mod logging;
    pub mod csv_export;
}

// CLI interface
pub mod cli {
    pub mod cli;
    pub mod interactive;
}

// Re-export commonly used items
pub use crate::config::energy_source::EnergySource;
pub use crate::core::error::{ConfigError, EstimatorError, SessionError};
pub use crate::core::estimator::{
    classify_temperature, compute_footprint, compute_temperature_change, estimate, Estimate,
    Severity,
};
pub use crate::core::session::CalculatorSession;
pub use crate::models::consumption::{ConsumptionInput, EstimatorInput};
