//! Simulated execution latency.
//!
//! The submitter delegates its delay to a [`LatencyModel`] so tests and
//! benchmarks can run without real wall-clock sleeps.

use std::thread;
use std::time::Duration;

/// Default simulated latency per order: 50 microseconds
pub const DEFAULT_LATENCY: Duration = Duration::from_micros(50);

/// Strategy producing the simulated delay of an order submission.
///
/// Implementations block the calling thread only. They must not touch
/// shared mutable state, since concurrent submissions call them in
/// parallel.
pub trait LatencyModel: Send + Sync {
    /// Block the calling thread for the simulated latency
    fn wait(&self);

    /// Lower bound on the time `wait` blocks
    fn floor(&self) -> Duration;
}

/// Blocking sleep of a fixed duration.
///
/// `std::thread::sleep` guarantees at least the requested duration; the
/// scheduler may add jitter on top. Not cancellable.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FixedLatency {
    delay: Duration,
}

impl FixedLatency {
    pub fn new(delay: Duration) -> Self {
        Self { delay }
    }

    pub fn from_micros(micros: u64) -> Self {
        Self::new(Duration::from_micros(micros))
    }
}

impl Default for FixedLatency {
    fn default() -> Self {
        Self::new(DEFAULT_LATENCY)
    }
}

impl LatencyModel for FixedLatency {
    fn wait(&self) {
        if !self.delay.is_zero() {
            thread::sleep(self.delay);
        }
    }

    fn floor(&self) -> Duration {
        self.delay
    }
}

/// Zero-cost latency model for tests and benchmarks.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct NoLatency;

impl LatencyModel for NoLatency {
    #[inline]
    fn wait(&self) {}

    fn floor(&self) -> Duration {
        Duration::ZERO
    }
}

impl<L: LatencyModel + ?Sized> LatencyModel for Box<L> {
    fn wait(&self) {
        (**self).wait()
    }

    fn floor(&self) -> Duration {
        (**self).floor()
    }
}
