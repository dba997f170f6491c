//! Compartment state — the three population counts the engine evolves.
//!
//! RULE: every individual is in exactly one compartment. `apply` moves
//! each unit out of one compartment and into one other, and the initial
//! split is built the same way, so the counts sum to the population
//! size at every cycle boundary without any runtime check.

use crate::types::PersonCount;
use serde::{Deserialize, Serialize};

/// Population split at one cycle boundary.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct CompartmentState {
    pub susceptible: PersonCount,
    pub infected:    PersonCount,
    pub recovered:   PersonCount,
}

/// Flow produced by one application of the update recurrence.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CycleDelta {
    pub new_infections: PersonCount,
    pub new_recoveries: PersonCount,
}

impl CompartmentState {
    pub fn total(&self) -> PersonCount {
        self.susceptible + self.infected + self.recovered
    }

    /// Move individuals S → I and I → R according to the delta.
    ///
    /// Callers must uphold `new_infections <= susceptible` and
    /// `new_recoveries <= infected` (the recurrence's clamps do).
    pub fn apply(&self, delta: CycleDelta) -> CompartmentState {
        CompartmentState {
            susceptible: self.susceptible - delta.new_infections,
            infected:    self.infected + delta.new_infections - delta.new_recoveries,
            recovered:   self.recovered + delta.new_recoveries,
        }
    }
}
