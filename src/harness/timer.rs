use std::time::{Duration, Instant};

/// Measures the wall time from construction to [`ScopedTimer::finish`].
pub struct ScopedTimer {
    name: String,
    start: Instant,
}

impl ScopedTimer {
    pub fn new(name: impl Into<String>) -> Self {
        ScopedTimer {
            name: name.into(),
            start: Instant::now(),
        }
    }

    pub fn elapsed(&self) -> Duration {
        self.start.elapsed()
    }

    /// Logs the elapsed time in milliseconds and returns it.
    pub fn finish(self) -> Duration {
        let elapsed = self.elapsed();
        tracing::info!(
            "{}: {:.3}ms",
            self.name,
            elapsed.as_secs_f64() * 1000.0
        );
        elapsed
    }
}
