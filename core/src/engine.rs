//! The simulation engine — termination policy and the per-cycle update
//! recurrence.
//!
//! RULES:
//!   - The termination check runs BEFORE any update is computed.
//!   - An observation is emitted for a cycle only when the run continues.
//!   - Flows are truncated toward zero, never rounded. Fractional
//!     epidemic progress is discarded each cycle.
//!   - Cycle 0 is the starting conditions, not an update step.

use crate::{
    params::SimParameters,
    report::CycleObservation,
    state::{CompartmentState, CycleDelta},
    types::{Cycle, PersonCount},
};
use serde::Serialize;

/// Why a run stopped, carrying the completed-cycle count the completion
/// report uses: the configured limit when the limit was crossed, the
/// current cycle index when the infection drained.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum RunOutcome {
    CycleLimitReached { cycles: Cycle },
    InfectionEnded { cycles: Cycle },
}

impl RunOutcome {
    pub fn cycles(&self) -> Cycle {
        match self {
            Self::CycleLimitReached { cycles } | Self::InfectionEnded { cycles } => *cycles,
        }
    }
}

/// Result of one evaluation of the step contract.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Advance {
    /// The run continues. `observation` describes the state AT `cycle`;
    /// `state` is the post-recurrence split for `cycle + 1`.
    Next {
        state: CompartmentState,
        observation: CycleObservation,
    },
    /// A termination condition fired; no update was computed.
    Halted(RunOutcome),
}

/// Evaluate one cycle: termination check first, then the recurrence.
///
/// Pure — identical `(state, cycle, params)` inputs always produce
/// identical results, so a run can be replayed from any boundary.
pub fn advance(state: &CompartmentState, cycle: Cycle, params: &SimParameters) -> Advance {
    if cycle > params.cycle_limit {
        return Advance::Halted(RunOutcome::CycleLimitReached {
            cycles: params.cycle_limit,
        });
    }
    if state.infected == 0 {
        return Advance::Halted(RunOutcome::InfectionEnded { cycles: cycle });
    }

    let observation = CycleObservation::of(state, cycle, params.population_size);
    let next = state.apply(cycle_delta(state, params));
    Advance::Next {
        state: next,
        observation,
    }
}

/// The SIR flows for one cycle.
///
/// The infection term is computed entirely in f64 before truncation:
/// with the population capped at 1,000,000 the product stays far below
/// 2^53, so the intermediate is exact. The clamps keep both flows
/// within the pools they drain even for degenerate inputs.
pub fn cycle_delta(state: &CompartmentState, params: &SimParameters) -> CycleDelta {
    let contact = params.infection_rate * state.infected as f64 * state.susceptible as f64
        / params.population_size as f64;
    let new_infections = (contact as PersonCount).min(state.susceptible);
    let new_recoveries =
        ((params.recovery_rate * state.infected as f64) as PersonCount).min(state.infected);
    CycleDelta {
        new_infections,
        new_recoveries,
    }
}

/// One engine step, as seen by a driver loop.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CycleStep {
    Advanced(CycleObservation),
    Halted(RunOutcome),
}

/// Stateful driver around the pure [`advance`] step.
///
/// Owns the current split and cycle counter; retains nothing else — each
/// observation is handed out once and discarded.
pub struct SimEngine {
    params: SimParameters,
    state:  CompartmentState,
    cycle:  Cycle,
    halted: Option<RunOutcome>,
}

impl SimEngine {
    pub fn new(params: SimParameters) -> Self {
        let state = params.initial_state();
        Self {
            params,
            state,
            cycle: 0,
            halted: None,
        }
    }

    pub fn params(&self) -> &SimParameters {
        &self.params
    }

    /// Current split. After a halt this can be one update ahead of the
    /// last observation: the recurrence for a cycle runs before the
    /// limit check that stops the next one.
    pub fn state(&self) -> &CompartmentState {
        &self.state
    }

    /// Cycles advanced so far; also the number of observations emitted.
    pub fn cycle(&self) -> Cycle {
        self.cycle
    }

    /// Evaluate the next cycle. Once halted, the engine stays halted
    /// and keeps returning the same outcome.
    pub fn step(&mut self) -> CycleStep {
        if let Some(outcome) = self.halted {
            return CycleStep::Halted(outcome);
        }
        match advance(&self.state, self.cycle, &self.params) {
            Advance::Next { state, observation } => {
                log::debug!(
                    "cycle={} susceptible={} infected={} recovered={}",
                    observation.cycle,
                    observation.susceptible,
                    observation.infected,
                    observation.recovered
                );
                self.state = state;
                self.cycle += 1;
                CycleStep::Advanced(observation)
            }
            Advance::Halted(outcome) => {
                log::info!("halted after {} observed cycles: {outcome:?}", self.cycle);
                self.halted = Some(outcome);
                CycleStep::Halted(outcome)
            }
        }
    }

    /// Drive the run to completion, handing each observation to
    /// `observer` as it is produced.
    ///
    /// The loop is bounded: at most `cycle_limit + 1` advancing steps
    /// before a halt.
    pub fn run_with(&mut self, mut observer: impl FnMut(&CycleObservation)) -> RunSummary {
        loop {
            match self.step() {
                CycleStep::Advanced(observation) => observer(&observation),
                CycleStep::Halted(outcome) => {
                    return RunSummary {
                        outcome,
                        final_state:     self.state,
                        cycles_reported: self.cycle,
                    };
                }
            }
        }
    }

    /// Run to completion, discarding observations.
    pub fn run(&mut self) -> RunSummary {
        self.run_with(|_| {})
    }
}

/// End-of-run record.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct RunSummary {
    pub outcome:         RunOutcome,
    /// Final split, which may be one update past the last observation.
    pub final_state:     CompartmentState,
    /// Observations emitted, cycle 0 included.
    pub cycles_reported: Cycle,
}
