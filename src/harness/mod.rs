//! Benchmark and correctness driver around the dot product kernels.
//!
//! For each input size the driver builds a sequence, then runs every compiled kernel on
//! the sequence against itself shifted by one element, for every prefix length in the upper
//! half of the sequence. Each kernel is timed and each result checked, either against a
//! closed form (alternating data) or against the scalar reference.

mod check;
mod data;
mod sweep;
mod timer;

pub use check::{Expectation, Mismatch, check_f32, check_half, check_shifted};
pub use data::{Pattern, alternating, gaussian};
pub use sweep::{DataSource, Inputs, Kernel, Report, SizeResult, SweepConfig, run_size};
pub use timer::ScopedTimer;
