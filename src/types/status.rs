//! Status codes returned across the engine boundary.

/// Code returned by the initializer.
pub const INIT_OK: i32 = 0;

/// Code returned by the order submitter.
pub const ORDER_OK: i32 = 1;

/// Outcome of an engine call.
///
/// Both variants are success outcomes: neither entry point has a failure
/// path, so there is nothing else to report.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum EngineStatus {
    /// Engine signalled readiness
    Ready,
    /// Order was acknowledged after the simulated latency
    Executed,
}

impl EngineStatus {
    /// Numeric code exposed through the C ABI
    pub fn code(self) -> i32 {
        match self {
            EngineStatus::Ready => INIT_OK,
            EngineStatus::Executed => ORDER_OK,
        }
    }

    /// Convert from a numeric code
    pub fn from_code(code: i32) -> Option<Self> {
        match code {
            INIT_OK => Some(EngineStatus::Ready),
            ORDER_OK => Some(EngineStatus::Executed),
            _ => None,
        }
    }
}
