use lazy_static::lazy_static;
use std::sync::atomic::{AtomicBool, Ordering};
use tracing::Level;
use tracing_subscriber::{EnvFilter, prelude::*};
use tracing_timing::{Builder, Histogram};
use std::collections::HashMap;
use std::sync::Arc;
use parking_lot::RwLock;
use std::time::{Duration, Instant};

// Histogram bounds: 1ns to 60s, 3 significant figures
const HISTOGRAM_MAX_NS: u64 = 60_000_000_000;
const HISTOGRAM_SIGFIG: u8 = 3;

// Categories for timed operations
#[derive(Hash, Eq, PartialEq, Clone, Copy, Debug)]
pub enum OperationCategory {
    Estimation,
    Session,
    Report,
    Config,
}

impl OperationCategory {
    pub fn as_str(&self) -> &'static str {
        match self {
            OperationCategory::Estimation => "Estimation",
            OperationCategory::Session => "Session",
            OperationCategory::Report => "Report",
            OperationCategory::Config => "Config",
        }
    }
}

lazy_static! {
    static ref TIMING_ENABLED: AtomicBool = AtomicBool::new(false);
    static ref FUNCTION_TIMINGS: Arc<RwLock<HashMap<String, Histogram<u64>>>> = Arc::new(RwLock::new(HashMap::new()));
    static ref CATEGORY_TIMINGS: Arc<RwLock<HashMap<OperationCategory, Histogram<u64>>>> = Arc::new(RwLock::new(HashMap::new()));
}

pub struct TimingGuard {
    function_name: &'static str,
    category: OperationCategory,
    start: Instant,
}

impl Drop for TimingGuard {
    fn drop(&mut self) {
        record_timing(self.function_name, self.start.elapsed(), self.category);
    }
}

/// Times the enclosing scope; the sample is recorded when the guard drops.
pub fn start_timing(function_name: &'static str, category: OperationCategory) -> TimingGuard {
    TimingGuard {
        function_name,
        category,
        start: Instant::now(),
    }
}

fn new_histogram() -> Option<Histogram<u64>> {
    Histogram::<u64>::new_with_bounds(1, HISTOGRAM_MAX_NS, HISTOGRAM_SIGFIG).ok()
}

fn record_timing(function_name: &str, duration: Duration, category: OperationCategory) {
    if !is_timing_enabled() {
        return;
    }

    let duration_ns = (duration.as_nanos() as u64).clamp(1, HISTOGRAM_MAX_NS);

    {
        let mut timings = FUNCTION_TIMINGS.write();
        if !timings.contains_key(function_name) {
            if let Some(histogram) = new_histogram() {
                timings.insert(function_name.to_string(), histogram);
            }
        }
        if let Some(histogram) = timings.get_mut(function_name) {
            let _ = histogram.record(duration_ns);
        }
    }

    {
        let mut category_timings = CATEGORY_TIMINGS.write();
        if !category_timings.contains_key(&category) {
            if let Some(histogram) = new_histogram() {
                category_timings.insert(category, histogram);
            }
        }
        if let Some(histogram) = category_timings.get_mut(&category) {
            let _ = histogram.record(duration_ns);
        }
    }
}

/// INFO everywhere, DEBUG for this crate when requested.
fn with_default_directives(env_filter: EnvFilter, debug_logging: bool) -> EnvFilter {
    let crate_level = if debug_logging { "carbon_calculator=debug" } else { "carbon_calculator=info" };
    let env_filter = env_filter.add_directive(Level::INFO.into());
    match crate_level.parse() {
        Ok(directive) => env_filter.add_directive(directive),
        Err(_) => env_filter,
    }
}

pub fn init_logging(enable_timing: bool, debug_logging: bool) {
    TIMING_ENABLED.store(enable_timing, Ordering::SeqCst);

    let env_filter = with_default_directives(EnvFilter::from_default_env(), debug_logging);

    let fmt_layer = tracing_subscriber::fmt::layer()
        .with_target(false)
        .with_writer(std::io::stderr);

    if enable_timing {
        let timing_layer = Builder::default().layer(|| {
            Histogram::<u64>::new_with_bounds(1, HISTOGRAM_MAX_NS, HISTOGRAM_SIGFIG)
                .expect("valid histogram bounds")
        });

        let subscriber = tracing_subscriber::registry()
            .with(env_filter)
            .with(fmt_layer)
            .with(timing_layer.boxed());

        tracing::subscriber::set_global_default(subscriber)
            .expect("Failed to set up tracing subscriber");
    } else {
        let subscriber = tracing_subscriber::registry()
            .with(env_filter)
            .with(fmt_layer);

        tracing::subscriber::set_global_default(subscriber)
            .expect("Failed to set up tracing subscriber");
    }
}

#[cfg(test)]
pub(crate) fn set_timing_enabled(enabled: bool) {
    TIMING_ENABLED.store(enabled, Ordering::SeqCst);
}

pub fn is_timing_enabled() -> bool {
    TIMING_ENABLED.load(Ordering::SeqCst)
}

/// Number of samples recorded for `function_name`.
#[cfg(test)]
pub(crate) fn timing_sample_count(function_name: &str) -> u64 {
    FUNCTION_TIMINGS
        .read()
        .get(function_name)
        .map(|histogram| histogram.len())
        .unwrap_or(0)
}

pub fn print_timing_report() {
    if !is_timing_enabled() {
        return;
    }

    println!("\nPerformance Report");
    println!("==========================");

    println!("\nBy Function:");
    println!("------------");
    let timings = FUNCTION_TIMINGS.read();
    let mut entries: Vec<_> = timings.iter().collect();
    entries.sort_by(|a, b| b.1.mean().partial_cmp(&a.1.mean()).unwrap_or(std::cmp::Ordering::Equal));
    for (function_name, histogram) in entries {
        println!(
            "{}: mean={:.3}us, p95={:.3}us, count={}",
            function_name,
            histogram.mean() / 1_000.0,
            histogram.value_at_quantile(0.95) as f64 / 1_000.0,
            histogram.len(),
        );
    }

    println!("\nBy Category:");
    println!("------------");
    let category_timings = CATEGORY_TIMINGS.read();
    let total_time: f64 = category_timings
        .values()
        .map(|hist| hist.mean() * (hist.len() as f64))
        .sum();
    let mut categories: Vec<_> = category_timings.iter().collect();
    categories.sort_by_key(|(category, _)| category.as_str());
    for (category, histogram) in categories {
        let category_total = histogram.mean() * (histogram.len() as f64);
        let percentage = if total_time > 0.0 { category_total / total_time * 100.0 } else { 0.0 };
        println!(
            "{}: {:.1}% of total time, mean={:.3}us, count={}",
            category.as_str(),
            percentage,
            histogram.mean() / 1_000.0,
            histogram.len(),
        );
    }

    println!("==========================\n");
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_guard_records_when_enabled() {
        set_timing_enabled(true);
        {
            let _timing = start_timing("logging_test_scope", OperationCategory::Report);
        }
        assert_eq!(timing_sample_count("logging_test_scope"), 1);
    }

    #[test]
    fn test_default_filter_levels() {
        use tracing_subscriber::filter::LevelFilter;

        let quiet = with_default_directives(EnvFilter::default(), false);
        assert_eq!(quiet.max_level_hint(), Some(LevelFilter::INFO));

        let verbose = with_default_directives(EnvFilter::default(), true);
        assert_eq!(verbose.max_level_hint(), Some(LevelFilter::DEBUG));
    }
}
