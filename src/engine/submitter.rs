//! Engine initializer and order submitter.
//!
//! ## Submission Flow
//!
//! 1. Start the clock
//! 2. Block for the latency model's delay
//! 3. Build the acknowledgement with the measured elapsed time
//! 4. Emit an `info` event carrying the inputs verbatim
//!
//! Each submission is a single step with one entry and one exit. The engine
//! keeps no state between calls, so identical submissions produce
//! independent acknowledgements and concurrent submissions never contend.

use std::time::Instant;

use tracing::{debug, info};

use crate::config::EngineConfig;
use crate::engine::{FixedLatency, LatencyModel};
use crate::types::{Acknowledgement, EngineStatus, OrderRequest};

/// Simulated execution engine.
///
/// Generic over the latency model; defaults to the fixed 50us sleep.
/// The engine is `Send + Sync` and all methods take `&self`, so one
/// instance can be shared across threads by reference.
#[derive(Debug, Clone)]
pub struct Engine<L = FixedLatency> {
    latency: L,
    log_acknowledgements: bool,
}

impl<L: LatencyModel + Default> Default for Engine<L> {
    fn default() -> Self {
        Self::with_latency(L::default())
    }
}

impl Engine<FixedLatency> {
    /// Engine with a blocking sleep configured from `config`
    pub fn from_config(config: &EngineConfig) -> Self {
        Self {
            latency: FixedLatency::new(config.latency),
            log_acknowledgements: config.log_acknowledgements,
        }
    }
}

impl<L: LatencyModel> Engine<L> {
    /// Engine with a custom latency model
    pub fn with_latency(latency: L) -> Self {
        Self {
            latency,
            log_acknowledgements: true,
        }
    }

    /// Enable or disable per-order acknowledgement events
    pub fn log_acknowledgements(mut self, enabled: bool) -> Self {
        self.log_acknowledgements = enabled;
        self
    }

    pub fn latency_model(&self) -> &L {
        &self.latency
    }

    /// Signal readiness
    ///
    /// Cannot fail and allocates nothing. Calling it repeatedly has the same
    /// effect every time.
    pub fn init(&self) -> EngineStatus {
        info!(latency_floor = ?self.latency.floor(), "[HFT Engine] Initialized successfully.");
        EngineStatus::Ready
    }

    /// Submit an order and return its acknowledgement
    ///
    /// Blocks the calling thread for the latency model's delay. Performs no
    /// validation and no duplicate detection.
    ///
    /// # Example
    ///
    /// ```
    /// use hft_engine::engine::{Engine, NoLatency};
    /// use hft_engine::types::OrderRequest;
    ///
    /// let engine = Engine::with_latency(NoLatency);
    /// let ack = engine.send_order(&OrderRequest::new("AAPL", 172.35, 100));
    /// assert_eq!(ack.symbol(), "AAPL");
    /// ```
    pub fn send_order(&self, order: &OrderRequest) -> Acknowledgement {
        let start = Instant::now();
        self.latency.wait();
        let elapsed = start.elapsed();

        debug!(?elapsed, floor = ?self.latency.floor(), "simulated latency elapsed");

        let ack = Acknowledgement::new(order.clone(), elapsed);
        if self.log_acknowledgements {
            info!(
                symbol = %ack.symbol(),
                price = ack.price(),
                quantity = ack.quantity(),
                "[HFT Engine] {}",
                ack
            );
        }
        ack
    }

    /// Submit an order from its raw parameters
    ///
    /// Always returns [`EngineStatus::Executed`]; the status does not
    /// reflect acceptance by any external venue.
    pub fn submit(&self, symbol: &str, price: f64, quantity: i32) -> EngineStatus {
        self.send_order(&OrderRequest::new(symbol, price, quantity));
        EngineStatus::Executed
    }
}

// ============================================================================
// Unit Tests
// ============================================================================
