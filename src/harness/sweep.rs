use std::collections::BTreeMap;

use serde::Serialize;

#[cfg(feature = "half8")]
use crate::{harness::check::check_half, numerics::Half};
use crate::{
    harness::{
        check::{Expectation, Mismatch, check_f32},
        data::Pattern,
        timer::ScopedTimer,
    },
    numerics::{Capabilities, dot_product_naive},
    statistics::Stats,
};

/// One dot product kernel the harness can exercise.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize)]
pub enum Kernel {
    Naive,
    #[cfg(feature = "lanes4")]
    W4,
    #[cfg(feature = "lanes8")]
    W8,
    #[cfg(feature = "half8")]
    HalfW8,
}

impl Kernel {
    const AVAILABLE: &'static [Kernel] = &[
        Kernel::Naive,
        #[cfg(feature = "lanes4")]
        Kernel::W4,
        #[cfg(feature = "lanes8")]
        Kernel::W8,
        #[cfg(feature = "half8")]
        Kernel::HalfW8,
    ];

    /// Every kernel compiled into this build, scalar reference first.
    pub fn available() -> &'static [Kernel] {
        Self::AVAILABLE
    }

    pub fn name(self) -> &'static str {
        match self {
            Kernel::Naive => "naive",
            #[cfg(feature = "lanes4")]
            Kernel::W4 => "w4",
            #[cfg(feature = "lanes8")]
            Kernel::W8 => "w8",
            #[cfg(feature = "half8")]
            Kernel::HalfW8 => "half_w8",
        }
    }

    /// Runs the shifted-window check of this kernel over `inputs`.
    pub fn check(
        self,
        inputs: &Inputs,
        expectation: Expectation,
        tolerance: f32,
        stats: &mut Stats,
    ) -> Option<Mismatch> {
        let values = &inputs.values;
        match self {
            Kernel::Naive => check_f32(dot_product_naive, values, expectation, tolerance, stats),
            #[cfg(feature = "lanes4")]
            Kernel::W4 => check_f32(
                crate::numerics::dot_product_w4,
                values,
                expectation,
                tolerance,
                stats,
            ),
            #[cfg(feature = "lanes8")]
            Kernel::W8 => check_f32(
                crate::numerics::dot_product_w8,
                values,
                expectation,
                tolerance,
                stats,
            ),
            #[cfg(feature = "half8")]
            Kernel::HalfW8 => check_half(
                crate::numerics::dot_product_half_w8,
                &inputs.halves,
                expectation,
                tolerance,
                stats,
            ),
        }
    }
}

/// The input of one size, in every element format a compiled kernel reads.
#[derive(Debug, Clone)]
pub struct Inputs {
    pub values: Vec<f32>,
    #[cfg(feature = "half8")]
    pub halves: Vec<Half>,
}

impl Inputs {
    pub fn new(values: Vec<f32>) -> Self {
        Inputs {
            #[cfg(feature = "half8")]
            halves: crate::numerics::f32s_to_halves(&values),
            values,
        }
    }
}

/// Where each size's input sequence comes from.
#[derive(Debug, Clone)]
pub enum DataSource {
    Synthetic { pattern: Pattern, seed: u64 },
    /// A fixed sequence (e.g. loaded from disk); each size uses its prefix.
    Loaded(Vec<f32>),
}

impl DataSource {
    /// The input for one size, or `None` if a loaded sequence is too short.
    pub fn sequence(&self, size: usize) -> Option<Vec<f32>> {
        match self {
            DataSource::Synthetic { pattern, seed } => Some(pattern.generate(size, *seed)),
            DataSource::Loaded(values) => values.get(..size).map(<[f32]>::to_vec),
        }
    }

    /// Only alternating data has a closed form; everything else is checked against the
    /// scalar reference.
    pub fn expectation(&self) -> Expectation {
        match self {
            DataSource::Synthetic {
                pattern: Pattern::Alternating,
                ..
            } => Expectation::Alternating,
            _ => Expectation::Reference,
        }
    }
}

#[derive(Debug, Clone)]
pub struct SweepConfig {
    pub sizes: Vec<usize>,
    pub tolerance: f32,
    pub source: DataSource,
}

impl SweepConfig {
    /// Sizes from `min` (inclusive) to `max` (exclusive) in steps of `step`.
    ///
    /// # Panics
    ///
    /// Panics if `step` is zero.
    pub fn size_range(min: usize, max: usize, step: usize) -> Vec<usize> {
        assert!(step > 0, "size step must be positive");
        (min..max).step_by(step).collect()
    }
}

/// Outcome of one kernel at one size.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct SizeResult {
    pub size: usize,
    pub kernel: Kernel,
    pub elapsed_ms: f64,
    /// Elements multiplied per second
    pub throughput: f64,
    pub mismatch: Option<Mismatch>,
}

/// Everything a sweep measured, ready to be written out as JSON.
#[derive(Debug, Clone, Serialize)]
pub struct Report {
    pub capabilities: Capabilities,
    pub tolerance: f32,
    pub expectation: Expectation,
    pub skipped_sizes: Vec<usize>,
    pub results: Vec<SizeResult>,
    pub kernels: BTreeMap<&'static str, Stats>,
}

impl Report {
    pub fn new(config: &SweepConfig) -> Self {
        Report {
            capabilities: Capabilities::of_build(),
            tolerance: config.tolerance,
            expectation: config.source.expectation(),
            skipped_sizes: Vec::new(),
            results: Vec::new(),
            kernels: BTreeMap::new(),
        }
    }

    /// True when at least one size was checked and no kernel left the tolerance.
    pub fn passed(&self) -> bool {
        !self.results.is_empty() && self.kernels.values().all(Stats::passed)
    }

    fn record(&mut self, size: usize, kernel: Kernel, stats: Stats, mismatch: Option<Mismatch>) {
        let entry = self.kernels.entry(kernel.name()).or_default();
        *entry = entry.merge(&stats);
        self.results.push(SizeResult {
            size,
            kernel,
            elapsed_ms: stats.get_elapsed().as_secs_f64() * 1000.0,
            throughput: stats.throughput(),
            mismatch,
        });
    }
}

/// Checks and times every available kernel on the input for one size.
pub fn run_size(size: usize, config: &SweepConfig, report: &mut Report) {
    let Some(data) = config.source.sequence(size) else {
        tracing::warn!(size, "input sequence too short, skipping size");
        report.skipped_sizes.push(size);
        return;
    };
    tracing::info!("- Testing vector with maximum size of {size}");

    let expectation = config.source.expectation();
    let inputs = Inputs::new(data);

    for &kernel in Kernel::available() {
        let mut stats = Stats::new();
        let timer = ScopedTimer::new(format!("  - TestDotProd {:<8}", kernel.name()));
        let mismatch = kernel.check(&inputs, expectation, config.tolerance, &mut stats);
        stats.add_elapsed(timer.finish());
        report.record(size, kernel, stats, mismatch);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn config(sizes: Vec<usize>, source: DataSource) -> SweepConfig {
        SweepConfig {
            sizes,
            tolerance: 1e-3,
            source,
        }
    }

    #[test]
    fn size_range_excludes_max() {
        assert_eq!(
            SweepConfig::size_range(25_000, 100_000, 25_000),
            vec![25_000, 50_000, 75_000]
        );
        assert!(SweepConfig::size_range(10, 10, 1).is_empty());
    }

    #[test]
    #[should_panic]
    fn size_range_rejects_zero_step() {
        let _ = SweepConfig::size_range(0, 10, 0);
    }

    #[test]
    fn naive_comes_first() {
        assert_eq!(Kernel::available()[0], Kernel::Naive);
        assert_eq!(Kernel::Naive.name(), "naive");
    }

    #[test]
    fn alternating_sweep_passes_for_every_kernel() {
        let cfg = config(
            vec![64, 101, 250],
            DataSource::Synthetic {
                pattern: Pattern::Alternating,
                seed: 0,
            },
        );
        let mut report = Report::new(&cfg);
        for &size in &cfg.sizes {
            run_size(size, &cfg, &mut report);
        }

        assert!(report.passed());
        assert_eq!(report.expectation, Expectation::Alternating);
        assert_eq!(report.results.len(), 3 * Kernel::available().len());
        assert_eq!(report.kernels.len(), Kernel::available().len());
        // sizes 64, 101 and 250 run 31, 50 and 124 shifted products
        for stats in report.kernels.values() {
            assert_eq!(stats.get_dot_calls(), 31 + 50 + 124);
        }
    }

    #[test]
    fn gaussian_sweep_checks_against_reference() {
        let cfg = config(
            vec![200],
            DataSource::Synthetic {
                pattern: Pattern::Gaussian,
                seed: 42,
            },
        );
        let mut report = Report::new(&cfg);
        run_size(200, &cfg, &mut report);
        assert_eq!(report.expectation, Expectation::Reference);
        assert!(report.passed(), "{:?}", report.results);
    }

    #[test]
    fn loaded_source_skips_sizes_it_cannot_fill() {
        let cfg = config(vec![16, 64], DataSource::Loaded(vec![0.5; 32]));
        let mut report = Report::new(&cfg);
        for &size in &cfg.sizes {
            run_size(size, &cfg, &mut report);
        }
        assert_eq!(report.skipped_sizes, vec![64]);
        assert!(report.results.iter().all(|r| r.size == 16));
        assert!(report.passed());
    }

    #[test]
    fn sweep_with_every_size_skipped_does_not_pass() {
        let cfg = config(vec![25_000, 50_000], DataSource::Loaded(vec![1.0; 10]));
        let mut report = Report::new(&cfg);
        for &size in &cfg.sizes {
            run_size(size, &cfg, &mut report);
        }
        assert_eq!(report.skipped_sizes, vec![25_000, 50_000]);
        assert!(report.results.is_empty());
        assert!(!report.passed());
    }

    #[test]
    fn empty_report_does_not_pass() {
        let cfg = config(vec![], DataSource::Loaded(vec![1.0; 10]));
        assert!(!Report::new(&cfg).passed());
    }

    #[test]
    fn each_kernel_checks_its_own_format() {
        let inputs = Inputs::new(crate::harness::data::alternating(40));
        for &kernel in Kernel::available() {
            let mut stats = Stats::new();
            let mismatch = kernel.check(&inputs, Expectation::Alternating, 1e-3, &mut stats);
            assert_eq!(mismatch, None, "{}", kernel.name());
            assert_eq!(stats.get_dot_calls(), 19, "{}", kernel.name());
        }
    }

    #[test]
    fn report_serializes() {
        let cfg = config(vec![32], DataSource::Loaded(vec![1.0; 32]));
        let mut report = Report::new(&cfg);
        run_size(32, &cfg, &mut report);
        let json = serde_json::to_value(&report).unwrap();
        assert_eq!(json["expectation"], "Reference");
        assert_eq!(json["kernels"]["naive"]["mismatches"], 0);
        assert!(json["capabilities"]["lanes8"].is_boolean());
        assert!(json["results"][0]["throughput"].as_f64().unwrap() >= 0.0);
    }
}
