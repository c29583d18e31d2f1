//! Behavioural properties of the emissions estimator and session.

use approx::assert_relative_eq;
use carbon_calculator::config::constants::MAX_FOOTPRINT;
use carbon_calculator::{
    compute_footprint, compute_temperature_change, estimate, CalculatorSession, ConsumptionInput,
    EnergySource, EstimatorError, EstimatorInput, Severity,
};

mod footprint {
    use super::*;

    #[test]
    fn test_all_zero_at_full_efficiency() {
        assert_eq!(compute_footprint(&ConsumptionInput::zero(), 100.0), Ok(0.0));
    }

    #[test]
    fn test_natural_gas_only() {
        let input = ConsumptionInput::zero().with(EnergySource::NaturalGas, 100.0);
        assert_relative_eq!(compute_footprint(&input, 100.0).unwrap(), 20.2, epsilon = 1e-9);
    }

    #[test]
    fn test_before_baseline() {
        let footprint = compute_footprint(&ConsumptionInput::baseline(), 100.0).unwrap();
        assert_relative_eq!(footprint, 136.5, epsilon = 1e-9);
    }

    #[test]
    fn test_non_decreasing_in_each_source() {
        let base = ConsumptionInput::default();
        for source in EnergySource::ALL {
            let mut previous = f64::NEG_INFINITY;
            for step in 0..=50 {
                let input = base.with(source, step as f64 * 10.0);
                let footprint = compute_footprint(&input, 90.0).unwrap();
                assert!(footprint >= previous, "{} not monotone at step {}", source, step);
                previous = footprint;
            }
        }
    }

    #[test]
    fn test_non_increasing_in_efficiency() {
        let input = ConsumptionInput::default();
        let mut previous = f64::INFINITY;
        for percent in 1..=100 {
            let footprint = compute_footprint(&input, percent as f64).unwrap();
            assert!(footprint <= previous, "not monotone at {}%", percent);
            previous = footprint;
        }
    }

    #[test]
    fn test_zero_efficiency_is_an_error_not_infinity() {
        assert_eq!(
            compute_footprint(&ConsumptionInput::default(), 0.0),
            Err(EstimatorError::InvalidEfficiency(0.0))
        );
    }
}

mod temperature {
    use super::*;

    #[test]
    fn test_endpoints() {
        assert_eq!(compute_temperature_change(0.0), 2.5);
        assert_eq!(compute_temperature_change(MAX_FOOTPRINT), 5.0);
    }

    #[test]
    fn test_monotone_in_footprint() {
        let mut previous = compute_temperature_change(0.0);
        for step in 1..=900 {
            let current = compute_temperature_change(step as f64);
            assert!(current >= previous);
            previous = current;
        }
        // Strictly increasing once the change exceeds a rounding step
        assert!(compute_temperature_change(100.0) < compute_temperature_change(110.0));
    }

    #[test]
    fn test_two_decimal_output() {
        for step in 0..=100 {
            let value = compute_temperature_change(step as f64 * 8.5);
            assert_relative_eq!(value * 100.0, (value * 100.0).round(), epsilon = 1e-6);
        }
    }
}

mod determinism {
    use super::*;

    #[test]
    fn test_repeated_estimates_are_identical() {
        let input = EstimatorInput::new(ConsumptionInput::new(10.0, 20.0, 30.0, 40.0, 50.0, 60.0), 93.0);
        let first = estimate(&input).unwrap();
        let second = estimate(&input).unwrap();
        assert_eq!(first, second);

        let footprint = compute_footprint(&input.consumption, input.efficiency_percent).unwrap();
        assert_eq!(compute_temperature_change(footprint), first.temperature_change_c);
    }
}

mod session {
    use super::*;

    #[test]
    fn test_reset_restores_exact_defaults() {
        let mut session = CalculatorSession::with_defaults().unwrap();
        session.set_consumption(EnergySource::NaturalGas, 0.0).unwrap();
        session.set_consumption(EnergySource::Biomass, 10.0).unwrap();
        session.set_efficiency(99.0).unwrap();
        session.reset().unwrap();

        let input = session.input();
        assert_eq!(input.consumption, ConsumptionInput::new(50.0, 100.0, 150.0, 200.0, 250.0, 300.0));
        assert_eq!(input.efficiency_percent, 85.0);
    }

    #[test]
    fn test_maximum_input_is_severe_and_gauge_in_range() {
        let mut session = CalculatorSession::with_defaults().unwrap();
        for source in EnergySource::ALL {
            session.set_consumption(source, 500.0).unwrap();
        }
        session.set_efficiency(80.0).unwrap();

        assert_eq!(session.estimate().temperature_change_c, 5.0);
        assert_eq!(session.estimate().severity, Severity::Severe);
        let gauge = session.gauge();
        assert!(gauge.display_value <= gauge.value_max);
    }

    #[test]
    fn test_last_write_wins() {
        let mut session = CalculatorSession::with_defaults().unwrap();
        session.set_consumption(EnergySource::Coal, 400.0).unwrap();
        session.set_consumption(EnergySource::Coal, 120.0).unwrap();
        let expected = estimate(session.input()).unwrap();
        assert_eq!(session.input().consumption.coal, 120.0);
        assert_eq!(*session.estimate(), expected);
    }
}
