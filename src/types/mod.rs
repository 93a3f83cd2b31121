//! Core data types for the HFT engine
//!
//! Every value here lives for a single call. Nothing is registered,
//! deduplicated or stored.
//!
//! ## Types
//!
//! - [`OrderRequest`]: symbol, price and quantity of a submission
//! - [`Acknowledgement`]: echo of a submitted order plus its latency
//! - [`EngineStatus`]: success codes exposed through the C ABI
//!
//! ## Prices
//!
//! Prices stay `f64` end to end. The [`price`] module converts them to
//! `rust_decimal::Decimal` only for reporting notionals.

mod ack;
mod order;
mod status;
pub mod price;

// Re-export all types at module level
pub use ack::Acknowledgement;
pub use order::OrderRequest;
pub use status::{EngineStatus, INIT_OK, ORDER_OK};
