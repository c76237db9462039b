// src/genres/mod.rs

// Orchestrations that compose systems into a full balancing run.

pub mod sdk;
pub use sdk::*;

pub mod multi_start;
pub use multi_start::*;
