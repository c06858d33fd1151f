use std::time::Duration;

use serde::Serialize;

/// Counters for one kernel across a benchmark run.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Stats {
    dot_calls: usize,
    elements: usize,
    mismatches: usize,
    elapsed_ns: u64,
}

impl Stats {
    pub fn new() -> Self {
        Stats {
            dot_calls: 0,
            elements: 0,
            mismatches: 0,
            elapsed_ns: 0,
        }
    }

    /// Record that one dot product over `len` elements has been checked
    pub fn bump_dot_calls(&mut self, len: usize) {
        self.dot_calls += 1;
        self.elements += len;
    }

    /// Record a result that fell outside the tolerance
    pub fn bump_mismatches(&mut self) {
        self.mismatches += 1
    }

    pub fn add_elapsed(&mut self, elapsed: Duration) {
        self.elapsed_ns = self
            .elapsed_ns
            .saturating_add(elapsed.as_nanos().min(u64::MAX as u128) as u64);
    }

    pub fn get_dot_calls(&self) -> usize {
        self.dot_calls
    }

    pub fn get_elements(&self) -> usize {
        self.elements
    }

    pub fn get_mismatches(&self) -> usize {
        self.mismatches
    }

    pub fn get_elapsed(&self) -> Duration {
        Duration::from_nanos(self.elapsed_ns)
    }

    pub fn passed(&self) -> bool {
        self.mismatches == 0
    }

    /// Elements multiplied per second, or zero if no time was recorded
    pub fn throughput(&self) -> f64 {
        if self.elapsed_ns == 0 {
            return 0.0;
        }
        self.elements as f64 / (self.elapsed_ns as f64 / 1e9)
    }

    pub fn merge(&self, other: &Stats) -> Stats {
        Stats {
            dot_calls: self.dot_calls + other.dot_calls,
            elements: self.elements + other.elements,
            mismatches: self.mismatches + other.mismatches,
            elapsed_ns: self.elapsed_ns.saturating_add(other.elapsed_ns),
        }
    }

    /// Write a one line summary of the counters to the log
    pub fn dump(&self, kernel: &str) {
        tracing::info!(
            kernel,
            dot_calls = self.dot_calls,
            elements = self.elements,
            mismatches = self.mismatches,
            elapsed_ms = self.get_elapsed().as_secs_f64() * 1000.0,
            elements_per_sec = self.throughput(),
            "kernel summary"
        );
    }
}

impl Default for Stats {
    fn default() -> Self {
        Stats::new()
    }
}
