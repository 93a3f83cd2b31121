//! Order request passed to the submitter.
//!
//! ## No Validation
//!
//! The engine accepts every combination of inputs. Negative, zero, NaN and
//! infinite prices are carried through unchanged, as are negative and zero
//! quantities. Nothing about an order outlives the call that submits it.

use std::fmt;

// ============================================================================
// OrderRequest struct
// ============================================================================

/// Parameters of a single order submission.
///
/// ## Fields
///
/// Types mirror the C ABI: `price` is a C `double`, `quantity` a C `int`.
///
/// ## Example
///
/// ```
/// use hft_engine::types::OrderRequest;
///
/// let order = OrderRequest::new("AAPL", 172.35, 100);
/// assert_eq!(order.symbol, "AAPL");
/// assert_eq!(order.quantity, 100);
/// ```
#[derive(Debug, Clone, PartialEq, Default)]
pub struct OrderRequest {
    /// Instrument identifier, free text
    pub symbol: String,

    /// Limit price
    pub price: f64,

    /// Order size in units
    pub quantity: i32,
}

impl OrderRequest {
    /// Create a new order request
    ///
    /// # Arguments
    ///
    /// * `symbol` - Instrument identifier
    /// * `price` - Price, any value
    /// * `quantity` - Quantity, any value
    pub fn new(symbol: impl Into<String>, price: f64, quantity: i32) -> Self {
        Self {
            symbol: symbol.into(),
            price,
            quantity,
        }
    }
}

impl fmt::Display for OrderRequest {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Symbol: {}, Price: {}, Quantity: {}",
            self.symbol, self.price, self.quantity
        )
    }
}

// ============================================================================
// Unit Tests
// ============================================================================
