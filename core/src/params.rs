//! Run parameters, validated once and immutable for the whole run.
//!
//! A `SimParameters` value is constructed from validated input and
//! handed to the engine whole. A constructed value is proof of
//! validity: nothing downstream re-checks a range.
//!
//! Validation is sequential in prompt order and stops at the first
//! failure. The per-field `validate_*` functions exist so the
//! interactive session can reject a field before prompting for the
//! next one; `SimParameters::new` chains them for the one-shot callers.

use crate::{
    error::{SimResult, ValidationError},
    state::CompartmentState,
    types::{Cycle, PersonCount},
};
use serde::{Deserialize, Serialize};

/// Smallest population the simulation accepts.
pub const MIN_POPULATION: PersonCount = 10;
/// Largest population the simulation accepts.
pub const MAX_POPULATION: PersonCount = 1_000_000;
/// Hard ceiling on the number of cycles in a run.
pub const MAX_CYCLES: Cycle = 100;

/// Everything a run needs, fixed at construction.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SimParameters {
    pub population_size:   PersonCount,
    pub initial_infected:  PersonCount,
    pub initial_recovered: PersonCount,
    pub infection_rate:    f64,
    pub recovery_rate:     f64,
    pub cycle_limit:       Cycle,
}

impl SimParameters {
    /// Validate raw inputs in prompt order; the first failure wins.
    pub fn new(
        cycle_limit: i64,
        population_size: i64,
        initial_infected: i64,
        initial_recovered: i64,
        infection_rate: f64,
        recovery_rate: f64,
    ) -> SimResult<Self> {
        let cycle_limit = validate_cycle_limit(cycle_limit)?;
        let population_size = validate_population_size(population_size)?;
        let initial_infected = validate_initial_infected(initial_infected, population_size)?;
        let initial_recovered =
            validate_initial_recovered(initial_recovered, population_size, initial_infected)?;
        let infection_rate = validate_infection_rate(infection_rate)?;
        let recovery_rate = validate_recovery_rate(recovery_rate)?;

        Ok(Self {
            population_size,
            initial_infected,
            initial_recovered,
            infection_rate,
            recovery_rate,
            cycle_limit,
        })
    }

    /// Starting compartment split for cycle 0.
    ///
    /// Susceptible absorbs the remainder, so the three counts sum to
    /// `population_size` from the first boundary on.
    pub fn initial_state(&self) -> CompartmentState {
        CompartmentState {
            susceptible: self.population_size - self.initial_infected - self.initial_recovered,
            infected:    self.initial_infected,
            recovered:   self.initial_recovered,
        }
    }
}

pub fn validate_cycle_limit(got: i64) -> SimResult<Cycle> {
    if got < 1 || got > MAX_CYCLES as i64 {
        return Err(ValidationError::CycleLimit.into());
    }
    Ok(got as Cycle)
}

pub fn validate_population_size(got: i64) -> SimResult<PersonCount> {
    if got < MIN_POPULATION as i64 || got > MAX_POPULATION as i64 {
        return Err(ValidationError::PopulationSize.into());
    }
    Ok(got as PersonCount)
}

pub fn validate_initial_infected(
    got: i64,
    population_size: PersonCount,
) -> SimResult<PersonCount> {
    if got < 0 || got as u64 > population_size {
        return Err(ValidationError::InitialInfected.into());
    }
    Ok(got as PersonCount)
}

/// Bounded by the room `initial_infected` leaves in the population.
/// The bound saturates at zero, so an `initial_infected` that was never
/// range-checked cannot underflow it.
pub fn validate_initial_recovered(
    got: i64,
    population_size: PersonCount,
    initial_infected: PersonCount,
) -> SimResult<PersonCount> {
    let remainder = population_size.saturating_sub(initial_infected);
    if got < 0 || got as u64 > remainder {
        return Err(ValidationError::InitialRecovered.into());
    }
    Ok(got as PersonCount)
}

pub fn validate_infection_rate(got: f64) -> SimResult<f64> {
    // contains() is false for NaN, so NaN never passes as a rate.
    if !(0.0..=1.0).contains(&got) {
        return Err(ValidationError::InfectionRate.into());
    }
    Ok(got)
}

pub fn validate_recovery_rate(got: f64) -> SimResult<f64> {
    if !(0.0..=1.0).contains(&got) {
        return Err(ValidationError::RecoveryRate.into());
    }
    Ok(got)
}
