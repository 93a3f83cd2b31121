//! C ABI entry points.
//!
//! Exported unmangled from the `cdylib` so foreign hosts can load the
//! shared object and call:
//!
//! ```c
//! int init_engine(void);
//! int send_order(const char *symbol, double price, int quantity);
//! ```
//!
//! Both functions are total and independent of each other: either may be
//! called first, or alone. `init_engine` always returns 0 and
//! `send_order` always returns 1, whatever the arguments. The C ABI
//! ignores environment configuration and always simulates 50us.

use std::borrow::Cow;
use std::ffi::CStr;
use std::os::raw::{c_char, c_double, c_int};

use tracing::warn;

use crate::engine::{Engine, FixedLatency};
use crate::error::{EngineError, Result};
use crate::telemetry;

fn engine() -> Engine<FixedLatency> {
    Engine::default()
}

/// Decode a NUL-terminated symbol.
///
/// Invalid UTF-8 is replaced lossily, never rejected.
///
/// # Safety
///
/// `ptr` must be null or point to a NUL-terminated string that stays valid
/// for `'a`.
pub unsafe fn symbol_from_ptr<'a>(ptr: *const c_char) -> Result<Cow<'a, str>> {
    if ptr.is_null() {
        return Err(EngineError::NullSymbol);
    }
    Ok(CStr::from_ptr(ptr).to_string_lossy())
}

/// Signal engine readiness. Always returns 0.
///
/// Installs the stdout tracing subscriber on first use so the readiness
/// line reaches the host's standard output.
#[no_mangle]
pub extern "C" fn init_engine() -> c_int {
    telemetry::init();
    engine().init().code()
}

/// Submit an order after a blocking 50us delay. Always returns 1.
///
/// Installs the stdout tracing subscriber like [`init_engine`], so the
/// acknowledgement is printed even if the host never initialized.
/// A null `symbol` is acknowledged as an empty symbol.
///
/// # Safety
///
/// `symbol` must be null or point to a NUL-terminated string valid for the
/// duration of the call.
#[no_mangle]
pub unsafe extern "C" fn send_order(
    symbol: *const c_char,
    price: c_double,
    quantity: c_int,
) -> c_int {
    telemetry::init();
    let symbol = symbol_from_ptr(symbol).unwrap_or_else(|e| {
        warn!(error = %e, "acknowledging order with empty symbol");
        Cow::Borrowed("")
    });
    engine().submit(&symbol, price, quantity).code()
}
