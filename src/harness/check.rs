use serde::Serialize;

use crate::{
    numerics::{Half, dot_product_naive, half_to_f32, halves_to_f32s},
    statistics::Stats,
};

/// What a shifted dot product is compared against.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum Expectation {
    /// Closed form for [`crate::harness::Pattern::Alternating`] data: the dot product of
    /// `data[1..i]` with `data[..i - 1]` is 1 when `data[i] * data[i - 1] == -1`, else 0.
    /// Compared with an absolute tolerance.
    Alternating,
    /// The scalar reference over the same (widened) values, with a tolerance relative to
    /// the magnitude of the reference result.
    Reference,
}

/// The first shifted dot product that fell outside the tolerance.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Mismatch {
    pub index: usize,
    pub expected: f32,
    pub got: f32,
}

/// Runs `kernel` on `data[1..i]` against `data[..i - 1]` for every `i` in the upper half of
/// `data`, stopping at the first result outside the tolerance.
///
/// Every call is recorded in `stats`; a failure also bumps the mismatch counter.
pub fn check_shifted<T: Copy>(
    kernel: impl Fn(&[T], &[T]) -> f32,
    data: &[T],
    expected_at: impl Fn(usize) -> f32,
    tolerance: impl Fn(f32) -> f32,
    stats: &mut Stats,
) -> Option<Mismatch> {
    let start = (data.len() / 2).max(1);
    for i in start..data.len().saturating_sub(1) {
        let got = kernel(&data[1..i], &data[..i - 1]);
        stats.bump_dot_calls(i - 1);

        let expected = expected_at(i);
        if (got - expected).abs() > tolerance(expected) {
            stats.bump_mismatches();
            tracing::warn!(index = i, expected, got, "dot product outside tolerance");
            return Some(Mismatch {
                index: i,
                expected,
                got,
            });
        }
    }
    None
}

pub fn check_f32(
    kernel: fn(&[f32], &[f32]) -> f32,
    data: &[f32],
    expectation: Expectation,
    tolerance: f32,
    stats: &mut Stats,
) -> Option<Mismatch> {
    match expectation {
        Expectation::Alternating => check_shifted(
            kernel,
            data,
            |i| alternating_expectation(data[i] * data[i - 1]),
            |_| tolerance,
            stats,
        ),
        Expectation::Reference => check_shifted(
            kernel,
            data,
            |i| dot_product_naive(&data[1..i], &data[..i - 1]),
            |expected| tolerance * expected.abs().max(1.0),
            stats,
        ),
    }
}

pub fn check_half(
    kernel: fn(&[Half], &[Half]) -> f32,
    data: &[Half],
    expectation: Expectation,
    tolerance: f32,
    stats: &mut Stats,
) -> Option<Mismatch> {
    match expectation {
        Expectation::Alternating => check_shifted(
            kernel,
            data,
            |i| alternating_expectation(half_to_f32(data[i]) * half_to_f32(data[i - 1])),
            |_| tolerance,
            stats,
        ),
        Expectation::Reference => {
            let widened = halves_to_f32s(data);
            check_shifted(
                kernel,
                data,
                |i| dot_product_naive(&widened[1..i], &widened[..i - 1]),
                |expected| tolerance * expected.abs().max(1.0),
                stats,
            )
        }
    }
}

fn alternating_expectation(product: f32) -> f32 {
    if product == -1.0 { 1.0 } else { 0.0 }
}
