//! Error taxonomy — every failure in this crate is an input validation
//! failure.
//!
//! RULE: the engine itself is infallible. Parameters reach it only
//! through `SimParameters`, whose constructor enforces every range, and
//! the clamped recurrence cannot drive a count out of the population.

use crate::params::{MAX_CYCLES, MAX_POPULATION, MIN_POPULATION};
use thiserror::Error;

/// A rejected input field.
///
/// One variant per prompt, in prompt order. The `Display` text is the
/// console report line; the runner prefixes `ERROR: ` and exits 1.
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum ValidationError {
    #[error("Number of cycles must be between 1 and {}.", MAX_CYCLES)]
    CycleLimit,

    #[error("Population size must be between {} and {}.", MIN_POPULATION, MAX_POPULATION)]
    PopulationSize,

    #[error("Initial number of infected individuals is invalid.")]
    InitialInfected,

    #[error("Initial number of recovered individuals is invalid.")]
    InitialRecovered,

    #[error("Infection rate must be between 0.00 and 1.00.")]
    InfectionRate,

    #[error("Recovery rate must be between 0.00 and 1.00.")]
    RecoveryRate,
}

#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum SimError {
    #[error(transparent)]
    Validation(#[from] ValidationError),
}

pub type SimResult<T> = Result<T, SimError>;
