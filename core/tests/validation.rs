//! Parameter validation: range bounds, first-failure ordering, and the
//! exact console wording of each rejection.

use sir_core::{
    error::{SimError, SimResult, ValidationError},
    params::{self, SimParameters},
};

// ── Helpers ──────────────────────────────────────────────────────────────────

fn rejected_as(result: SimResult<SimParameters>) -> ValidationError {
    match result.expect_err("parameters should have been rejected") {
        SimError::Validation(field) => field,
    }
}

// ── Tests ────────────────────────────────────────────────────────────────────

/// Cycles outside 1..=100 are rejected; both bounds are accepted.
#[test]
fn cycle_limit_bounds() {
    assert_eq!(
        rejected_as(SimParameters::new(0, 100, 1, 0, 0.5, 0.5)),
        ValidationError::CycleLimit
    );
    assert_eq!(
        rejected_as(SimParameters::new(101, 100, 1, 0, 0.5, 0.5)),
        ValidationError::CycleLimit
    );
    assert_eq!(
        rejected_as(SimParameters::new(-3, 100, 1, 0, 0.5, 0.5)),
        ValidationError::CycleLimit
    );
    assert!(SimParameters::new(1, 100, 1, 0, 0.5, 0.5).is_ok());
    assert!(SimParameters::new(100, 100, 1, 0, 0.5, 0.5).is_ok());
}

/// Population outside 10..=1000000 is rejected; both bounds are
/// accepted.
#[test]
fn population_bounds() {
    assert_eq!(
        rejected_as(SimParameters::new(10, 9, 1, 0, 0.5, 0.5)),
        ValidationError::PopulationSize
    );
    assert_eq!(
        rejected_as(SimParameters::new(10, 1_000_001, 1, 0, 0.5, 0.5)),
        ValidationError::PopulationSize
    );
    assert!(SimParameters::new(10, 10, 1, 0, 0.5, 0.5).is_ok());
    assert!(SimParameters::new(10, 1_000_000, 1, 0, 0.5, 0.5).is_ok());
}

/// Initial infected must lie in 0..=population; the whole-population
/// case is legal.
#[test]
fn initial_infected_cannot_exceed_population() {
    assert_eq!(
        rejected_as(SimParameters::new(10, 100, 101, 0, 0.5, 0.5)),
        ValidationError::InitialInfected
    );
    assert_eq!(
        rejected_as(SimParameters::new(10, 100, -1, 0, 0.5, 0.5)),
        ValidationError::InitialInfected
    );
    assert!(SimParameters::new(10, 100, 100, 0, 0.5, 0.5).is_ok());
    assert!(SimParameters::new(10, 100, 0, 0, 0.5, 0.5).is_ok());
}

/// Initial recovered is bounded by what infected left behind.
#[test]
fn initial_recovered_is_bounded_by_the_remainder() {
    assert_eq!(
        rejected_as(SimParameters::new(10, 100, 40, 61, 0.5, 0.5)),
        ValidationError::InitialRecovered
    );
    assert_eq!(
        rejected_as(SimParameters::new(10, 100, 40, -1, 0.5, 0.5)),
        ValidationError::InitialRecovered
    );
    assert!(SimParameters::new(10, 100, 40, 60, 0.5, 0.5).is_ok());
}

/// Rates must lie in the closed unit interval.
#[test]
fn rates_must_lie_in_the_unit_interval() {
    assert_eq!(
        rejected_as(SimParameters::new(10, 100, 1, 0, -0.01, 0.5)),
        ValidationError::InfectionRate
    );
    assert_eq!(
        rejected_as(SimParameters::new(10, 100, 1, 0, 1.01, 0.5)),
        ValidationError::InfectionRate
    );
    assert_eq!(
        rejected_as(SimParameters::new(10, 100, 1, 0, 0.5, -0.01)),
        ValidationError::RecoveryRate
    );
    assert_eq!(
        rejected_as(SimParameters::new(10, 100, 1, 0, 0.5, 1.01)),
        ValidationError::RecoveryRate
    );
    assert!(SimParameters::new(10, 100, 1, 0, 0.0, 1.0).is_ok());
}

/// NaN is not a rate.
#[test]
fn nan_rates_are_rejected() {
    assert_eq!(
        rejected_as(SimParameters::new(10, 100, 1, 0, f64::NAN, 0.5)),
        ValidationError::InfectionRate
    );
    assert_eq!(
        rejected_as(SimParameters::new(10, 100, 1, 0, 0.5, f64::NAN)),
        ValidationError::RecoveryRate
    );
}

/// Validation runs in prompt order and stops at the first failure.
#[test]
fn first_invalid_field_wins() {
    // Everything is bad; cycles is reported first.
    assert_eq!(
        rejected_as(SimParameters::new(0, 5, -1, -1, 9.0, 9.0)),
        ValidationError::CycleLimit
    );
    // Fix cycles; population is next.
    assert_eq!(
        rejected_as(SimParameters::new(10, 5, -1, -1, 9.0, 9.0)),
        ValidationError::PopulationSize
    );
    // And so on down the prompt order.
    assert_eq!(
        rejected_as(SimParameters::new(10, 100, -1, -1, 9.0, 9.0)),
        ValidationError::InitialInfected
    );
    assert_eq!(
        rejected_as(SimParameters::new(10, 100, 1, -1, 9.0, 9.0)),
        ValidationError::InitialRecovered
    );
    assert_eq!(
        rejected_as(SimParameters::new(10, 100, 1, 0, 9.0, 9.0)),
        ValidationError::InfectionRate
    );
    assert_eq!(
        rejected_as(SimParameters::new(10, 100, 1, 0, 0.5, 9.0)),
        ValidationError::RecoveryRate
    );
}

/// The per-field validators back the interactive session's fail-fast
/// checks and agree with the constructor.
#[test]
fn per_field_validators_match_the_constructor() {
    assert!(params::validate_cycle_limit(50).is_ok());
    assert!(params::validate_cycle_limit(0).is_err());
    assert!(params::validate_initial_infected(5, 100).is_ok());
    assert!(params::validate_initial_infected(101, 100).is_err());
    assert!(params::validate_initial_recovered(60, 100, 40).is_ok());
    assert!(params::validate_initial_recovered(61, 100, 40).is_err());
}

/// An infected count larger than the population leaves no room for
/// recovered; the saturated bound rejects instead of underflowing.
#[test]
fn oversized_infected_leaves_no_room_for_recovered() {
    assert!(params::validate_initial_recovered(0, 10, 20).is_ok());
    assert!(params::validate_initial_recovered(1, 10, 20).is_err());
}

/// Rejection messages match the console wording exactly.
#[test]
fn messages_match_the_console_report() {
    assert_eq!(
        ValidationError::CycleLimit.to_string(),
        "Number of cycles must be between 1 and 100."
    );
    assert_eq!(
        ValidationError::PopulationSize.to_string(),
        "Population size must be between 10 and 1000000."
    );
    assert_eq!(
        ValidationError::InitialInfected.to_string(),
        "Initial number of infected individuals is invalid."
    );
    assert_eq!(
        ValidationError::InitialRecovered.to_string(),
        "Initial number of recovered individuals is invalid."
    );
    assert_eq!(
        ValidationError::InfectionRate.to_string(),
        "Infection rate must be between 0.00 and 1.00."
    );
    assert_eq!(
        ValidationError::RecoveryRate.to_string(),
        "Recovery rate must be between 0.00 and 1.00."
    );
}
