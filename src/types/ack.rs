//! Acknowledgement emitted for every submitted order.
//!
//! The acknowledgement echoes the order parameters verbatim together with
//! the wall-clock time the submission took. It does not claim that any
//! venue accepted the order: there is no venue.

use std::fmt;
use std::time::Duration;

use rust_decimal::Decimal;

use crate::types::price;
use crate::types::OrderRequest;

/// Acknowledgement of a single order submission.
///
/// ## Example
///
/// ```
/// use std::time::Duration;
/// use hft_engine::types::{Acknowledgement, OrderRequest};
///
/// let ack = Acknowledgement::new(
///     OrderRequest::new("AAPL", 172.35, 100),
///     Duration::from_micros(50),
/// );
/// assert_eq!(ack.symbol(), "AAPL");
/// assert!(ack.latency() >= Duration::from_micros(50));
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct Acknowledgement {
    /// The order exactly as submitted
    order: OrderRequest,

    /// Elapsed time of the submission, simulated delay included
    latency: Duration,
}

impl Acknowledgement {
    /// Create a new acknowledgement
    ///
    /// # Arguments
    ///
    /// * `order` - The order as submitted
    /// * `latency` - Measured elapsed time of the submission
    pub fn new(order: OrderRequest, latency: Duration) -> Self {
        Self { order, latency }
    }

    /// The acknowledged order
    pub fn order(&self) -> &OrderRequest {
        &self.order
    }

    pub fn symbol(&self) -> &str {
        &self.order.symbol
    }

    pub fn price(&self) -> f64 {
        self.order.price
    }

    pub fn quantity(&self) -> i32 {
        self.order.quantity
    }

    /// Measured elapsed time of the submission
    pub fn latency(&self) -> Duration {
        self.latency
    }

    /// Price x quantity as a Decimal
    ///
    /// Returns None if the price is not finite or the product overflows.
    pub fn notional(&self) -> Option<Decimal> {
        price::notional(self.order.price, self.order.quantity)
    }
}

impl fmt::Display for Acknowledgement {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Order Executed -> {}", self.order)
    }
}

// ============================================================================
// Unit Tests
// ============================================================================
