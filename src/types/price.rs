//! Decimal conversions for prices and notionals.
//!
//! ## Overview
//!
//! Prices arrive as `f64` from the C ABI. For reporting, the engine converts
//! them to [`Decimal`] so notionals (price x quantity) print without binary
//! floating-point noise.
//!
//! ## Non-finite Values
//!
//! NaN and infinite prices are accepted by the engine but have no decimal
//! representation. Every conversion here returns `None` for them instead of
//! failing.
//!
//! ## Examples
//!
//! ```
//! use hft_engine::types::price::{to_decimal, notional};
//! use rust_decimal::Decimal;
//!
//! assert_eq!(to_decimal(172.35), Some(Decimal::new(17235, 2)));
//! assert_eq!(notional(172.35, 100), Some(Decimal::new(17235, 0)));
//! assert_eq!(notional(f64::NAN, 100), None);
//! ```

use rust_decimal::prelude::*;
use rust_decimal::Decimal;

/// Decimal places kept when reporting a notional
pub const NOTIONAL_DP: u32 = 8;

// ============================================================================
// Conversion Functions
// ============================================================================

/// Convert an `f64` price to a Decimal
///
/// Uses the shortest decimal representation that round-trips to the same
/// `f64`, so `172.35` becomes exactly `172.35`.
///
/// # Returns
///
/// * `Some(Decimal)` - The decimal representation
/// * `None` - If the value is NaN, infinite or out of Decimal range
pub fn to_decimal(price: f64) -> Option<Decimal> {
    if !price.is_finite() {
        return None;
    }
    Decimal::from_f64(price).map(|d| d.normalize())
}

/// Compute price x quantity as a Decimal
///
/// # Returns
///
/// * `Some(Decimal)` - Notional rounded to [`NOTIONAL_DP`] places
/// * `None` - If the price has no decimal form or the product overflows
///
/// # Example
///
/// ```
/// use hft_engine::types::price::notional;
/// use rust_decimal::Decimal;
///
/// assert_eq!(notional(-2.5, 4), Some(Decimal::new(-10, 0)));
/// assert_eq!(notional(1e300, 1), None);
/// ```
pub fn notional(price: f64, quantity: i32) -> Option<Decimal> {
    let price = to_decimal(price)?;
    let product = price.checked_mul(Decimal::from(quantity))?;
    Some(product.round_dp(NOTIONAL_DP).normalize())
}

/// Format a notional for display, `"n/a"` when it does not exist
pub fn format_notional(price: f64, quantity: i32) -> String {
    match notional(price, quantity) {
        Some(value) => value.to_string(),
        None => "n/a".to_string(),
    }
}

// ============================================================================
// Unit Tests
// ============================================================================
