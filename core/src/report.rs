//! Cycle observations and the line-oriented report text.
//!
//! The console output is the product here, so the exact wording, tab
//! layout, and 2-decimal percentages live in the library where tests
//! can pin them. Percentages are derived for display only — the
//! underlying counts stay exact integers.

use crate::{
    engine::RunOutcome,
    params::SimParameters,
    state::CompartmentState,
    types::{Cycle, PersonCount},
};
use serde::Serialize;

/// Snapshot of the compartment counts at one cycle boundary, emitted by
/// the engine for reporting and then discarded.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct CycleObservation {
    pub cycle:           Cycle,
    pub susceptible:     PersonCount,
    pub infected:        PersonCount,
    pub recovered:       PersonCount,
    pub population_size: PersonCount,
}

impl CycleObservation {
    pub fn of(state: &CompartmentState, cycle: Cycle, population_size: PersonCount) -> Self {
        Self {
            cycle,
            susceptible: state.susceptible,
            infected: state.infected,
            recovered: state.recovered,
            population_size,
        }
    }

    pub fn percent_susceptible(&self) -> f64 {
        self.susceptible as f64 * 100.0 / self.population_size as f64
    }

    pub fn percent_infected(&self) -> f64 {
        self.infected as f64 * 100.0 / self.population_size as f64
    }

    pub fn percent_recovered(&self) -> f64 {
        self.recovered as f64 * 100.0 / self.population_size as f64
    }
}

pub fn banner() -> String {
    "\nBASIC SIR MODEL EPIDEMIC SIMULATOR\n\n".to_string()
}

/// The cycle-0 echo: run parameters, then the three compartment lines.
pub fn starting_conditions(params: &SimParameters, observation: &CycleObservation) -> String {
    let mut block = String::from("\nStarting Conditions:\n");
    block.push_str(&format!("Population Size:\t{}\n", params.population_size));
    block.push_str(&format!("Infection Rate:\t\t{:.2}\n", params.infection_rate));
    block.push_str(&format!("Recovery Rate:\t\t{:.2}\n\n", params.recovery_rate));
    block.push_str(&compartment_lines(observation));
    block
}

/// One per-cycle block for cycles 1 and up.
pub fn cycle_block(observation: &CycleObservation) -> String {
    format!(
        "\nCycle {}:\n{}",
        observation.cycle,
        compartment_lines(observation)
    )
}

fn compartment_lines(observation: &CycleObservation) -> String {
    format!(
        "Susceptible:\t\t{}\t\t({:.2}%)\nInfected:\t\t{}\t\t({:.2}%)\nRecovered:\t\t{}\t\t({:.2}%)\n",
        observation.susceptible,
        observation.percent_susceptible(),
        observation.infected,
        observation.percent_infected(),
        observation.recovered,
        observation.percent_recovered(),
    )
}

pub fn completion(outcome: &RunOutcome) -> String {
    match outcome {
        RunOutcome::CycleLimitReached { cycles } => {
            format!("\nAfter {cycles} cycles, the simulation is complete.\n")
        }
        RunOutcome::InfectionEnded { cycles } => {
            format!("\nAfter {cycles} cycles, the infection has completely ended.\n")
        }
    }
}
