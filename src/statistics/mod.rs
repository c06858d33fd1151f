//! Per-kernel counters collected while benchmarking.
//!
//! This module tracks how many dot products each kernel computed, over how many elements,
//! how many results fell outside the tolerance, and how long it all took.

mod stats;
pub use stats::*;
