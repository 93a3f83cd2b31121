//! Execution engine module.
//!
//! ## Design Principles
//!
//! The engine is designed for:
//!
//! 1. **Statelessness**: No state survives a call
//! 2. **No Validation**: Every input combination is acknowledged
//! 3. **Blocking Execution**: The delay blocks the calling thread only
//! 4. **Injectable Latency**: The delay comes from a [`LatencyModel`]
//!
//! ## Concurrency
//!
//! Submissions from separate threads each block for their own delay. There
//! is no ordering between them, no mutual exclusion and no contention.
//!
//! ## Example
//!
//! ```
//! use hft_engine::engine::{Engine, NoLatency};
//! use hft_engine::types::EngineStatus;
//!
//! let engine = Engine::with_latency(NoLatency);
//!
//! assert_eq!(engine.init(), EngineStatus::Ready);
//! assert_eq!(engine.submit("AAPL", 172.35, 100), EngineStatus::Executed);
//! ```

pub mod latency;
pub mod submitter;

pub use latency::{FixedLatency, LatencyModel, NoLatency, DEFAULT_LATENCY};
pub use submitter::Engine;
