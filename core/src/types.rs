//! Shared primitive types used across the entire simulation.

/// A simulation cycle. One cycle = one discrete time step.
pub type Cycle = u64;

/// A count of individuals in a compartment.
pub type PersonCount = u64;
