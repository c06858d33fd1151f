use rand::{Rng, SeedableRng, rngs::StdRng};
use rand_distr::StandardNormal;
use serde::Serialize;

/// Synthetic input shapes for the benchmark.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum Pattern {
    /// `+1, +1, -1, -1, +1, +1, ...`; the shifted dot products have a closed form.
    Alternating,
    /// Independent standard normal samples from a seeded generator.
    Gaussian,
}

impl Pattern {
    pub fn generate(self, size: usize, seed: u64) -> Vec<f32> {
        match self {
            Pattern::Alternating => alternating(size),
            Pattern::Gaussian => gaussian(size, seed),
        }
    }
}

/// Pairs of equal unit values with alternating sign. An odd `size` leaves the last
/// element at zero.
pub fn alternating(size: usize) -> Vec<f32> {
    let mut v = vec![0.0; size];
    let mut sign = 1.0;
    for pair in v.chunks_exact_mut(2) {
        pair[0] = sign;
        pair[1] = sign;
        sign = -sign;
    }
    v
}

pub fn gaussian(size: usize, seed: u64) -> Vec<f32> {
    let mut rng = StdRng::seed_from_u64(seed);
    (0..size).map(|_| rng.sample(StandardNormal)).collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn alternating_pairs() {
        assert_eq!(alternating(8), vec![1.0, 1.0, -1.0, -1.0, 1.0, 1.0, -1.0, -1.0]);
    }

    #[test]
    fn alternating_odd_size_ends_with_zero() {
        assert_eq!(alternating(5), vec![1.0, 1.0, -1.0, -1.0, 0.0]);
        assert!(alternating(0).is_empty());
    }

    #[test]
    fn gaussian_is_seeded() {
        let a = gaussian(64, 42);
        assert_eq!(a, gaussian(64, 42));
        assert_ne!(a, gaussian(64, 43));
        assert!(a.iter().all(|x| x.is_finite()));
    }

    #[test]
    fn pattern_dispatch() {
        assert_eq!(Pattern::Alternating.generate(4, 0), alternating(4));
        assert_eq!(Pattern::Gaussian.generate(16, 3), gaussian(16, 3));
    }
}
