// Emission Factors (kg CO2 per kWh)
pub const NATURAL_GAS_EMISSION_FACTOR: f64 = 0.202;
pub const ELECTRICITY_EMISSION_FACTOR: f64 = 0.233;
pub const HEATING_OIL_EMISSION_FACTOR: f64 = 0.265;
pub const PROPANE_EMISSION_FACTOR: f64 = 0.224;
pub const COAL_EMISSION_FACTOR: f64 = 0.341;
pub const BIOMASS_EMISSION_FACTOR: f64 = 0.1;

// Temperature Projection
pub const MAX_FOOTPRINT: f64 = 853.13;               // Reference footprint mapped to the top of the range
pub const TEMPERATURE_BASE: f64 = 2.5;               // degC at zero footprint
pub const TEMPERATURE_SCALE: f64 = 2.5;              // degC added at MAX_FOOTPRINT
pub const TEMPERATURE_DECIMALS: i32 = 2;

// Severity and Gauge
pub const SEVERE_TEMPERATURE_THRESHOLD: f64 = 3.3;   // Strictly above is severe
pub const GAUGE_VALUE_MAX: f64 = 5.1;
pub const GAUGE_VALUE_MIN: f64 = 0.0;

// Slider Ranges
pub const CONSUMPTION_MIN_KWH: f64 = 0.0;
pub const CONSUMPTION_MAX_KWH: f64 = 500.0;
pub const CONSUMPTION_STEP_KWH: f64 = 10.0;
pub const EFFICIENCY_MIN_PERCENT: f64 = 80.0;
pub const EFFICIENCY_MAX_PERCENT: f64 = 100.0;
pub const EFFICIENCY_STEP_PERCENT: f64 = 1.0;

// Reset Defaults
pub const DEFAULT_NATURAL_GAS_KWH: f64 = 50.0;
pub const DEFAULT_ELECTRICITY_KWH: f64 = 100.0;
pub const DEFAULT_HEATING_OIL_KWH: f64 = 150.0;
pub const DEFAULT_PROPANE_KWH: f64 = 200.0;
pub const DEFAULT_COAL_KWH: f64 = 250.0;
pub const DEFAULT_BIOMASS_KWH: f64 = 300.0;
pub const DEFAULT_EFFICIENCY_PERCENT: f64 = 85.0;

// Chart Baseline ("Before" point, every source at this value)
pub const BASELINE_CONSUMPTION_KWH: f64 = 100.0;

// Presentation
pub const ANIMATION_DELAY_MS: u64 = 2000;
pub const PERCENT_DIVISOR: f64 = 100.0;
