//! sir-core — discrete-time SIR epidemic simulation engine.
//!
//! The library owns the whole model: validated run parameters, the
//! compartment state, the per-cycle update recurrence with its
//! termination policy, and the report text the console runner prints.
//!
//! # Invariants
//!
//! 1. Compartment counts always sum to the population size.
//! 2. The engine is deterministic and infallible — every failure is an
//!    input validation failure, caught before an engine exists.
//! 3. Flows are truncated toward zero, never rounded.

pub mod engine;
pub mod error;
pub mod params;
pub mod report;
pub mod state;
pub mod types;

pub use engine::{advance, Advance, CycleStep, RunOutcome, RunSummary, SimEngine};
pub use error::{SimError, SimResult, ValidationError};
pub use params::{SimParameters, MAX_CYCLES, MAX_POPULATION, MIN_POPULATION};
pub use report::CycleObservation;
pub use state::{CompartmentState, CycleDelta};
