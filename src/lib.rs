//! # HFT Engine
//!
//! Simulated low-latency order execution engine with a C ABI.
//!
//! ## Architecture
//!
//! The engine consists of:
//! - **Types**: Call parameters and results (OrderRequest, Acknowledgement, EngineStatus)
//! - **Engine**: Initializer and order submitter over an injectable latency model
//! - **FFI**: Unmangled `init_engine` / `send_order` for foreign hosts
//!
//! ## Design Principles
//!
//! 1. **Stateless**: Every call is independent; nothing is stored
//! 2. **Total**: No input is rejected and no call fails
//! 3. **Blocking Delay**: Submissions sleep the calling thread (50us by default)
//! 4. **Events, not prints**: Diagnostics go through `tracing`
//!
//! ## Example
//!
//! ```
//! use hft_engine::{Engine, EngineStatus, NoLatency, OrderRequest};
//!
//! let engine = Engine::with_latency(NoLatency);
//! assert_eq!(engine.init(), EngineStatus::Ready);
//!
//! let ack = engine.send_order(&OrderRequest::new("AAPL", 172.35, 100));
//! assert_eq!(ack.quantity(), 100);
//! ```

// ============================================================================
// Module declarations
// ============================================================================

/// Core data types: OrderRequest, Acknowledgement, EngineStatus
pub mod types;

/// Engine: initializer, submitter and latency models
pub mod engine;

/// C ABI entry points
pub mod ffi;

pub mod config;
pub mod error;
pub mod telemetry;

// ============================================================================
// Re-exports for convenience
// ============================================================================

pub use config::EngineConfig;
pub use engine::{Engine, FixedLatency, LatencyModel, NoLatency};
pub use error::{EngineError, Result};
pub use types::{Acknowledgement, EngineStatus, OrderRequest};
