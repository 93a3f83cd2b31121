//! Engine configuration.
//!
//! Only the standalone binary reads configuration from the environment,
//! after loading a `.env` file if one exists. Variables already set in the
//! process take precedence over the file.
//! The C ABI always runs with [`EngineConfig::default`], so a host loading
//! the shared library gets the fixed 50us delay no matter what is set.
//!
//! | Variable                | Meaning                         | Default |
//! |-------------------------|---------------------------------|---------|
//! | `HFT_ENGINE_LATENCY_US` | Simulated delay in microseconds | `50`    |
//! | `HFT_ENGINE_LOG_ACKS`   | Emit an event per acknowledgement | `true` |

use std::collections::HashMap;
use std::env;
use std::path::Path;
use std::time::Duration;

use crate::engine::DEFAULT_LATENCY;
use crate::error::{EngineError, Result};

pub const LATENCY_ENV: &str = "HFT_ENGINE_LATENCY_US";
pub const LOG_ACKS_ENV: &str = "HFT_ENGINE_LOG_ACKS";

/// Engine settings
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct EngineConfig {
    /// Simulated delay per order
    pub latency: Duration,

    /// Emit an info event for every acknowledgement
    pub log_acknowledgements: bool,
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self {
            latency: DEFAULT_LATENCY,
            log_acknowledgements: true,
        }
    }
}

impl EngineConfig {
    pub fn with_latency(mut self, latency: Duration) -> Self {
        self.latency = latency;
        self
    }

    pub fn with_logging(mut self, enabled: bool) -> Self {
        self.log_acknowledgements = enabled;
        self
    }

    /// Load from process environment variables
    pub fn from_env() -> Result<Self> {
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Load `.env` (searched from the working directory upwards) into the
    /// process environment, then read it. A missing `.env` is not an error.
    pub fn load() -> Result<Self> {
        match dotenvy::dotenv() {
            Ok(_) => Self::from_env(),
            Err(e) if e.not_found() => Self::from_env(),
            Err(e) => Err(EngineError::EnvFile {
                path: ".env".to_string(),
                reason: e.to_string(),
            }),
        }
    }

    /// Read an explicit env file without touching the process environment
    ///
    /// Process variables still win over values from the file.
    pub fn from_env_file(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let env_file_error = |e: dotenvy::Error| EngineError::EnvFile {
            path: path.display().to_string(),
            reason: e.to_string(),
        };

        let file: HashMap<String, String> = dotenvy::from_path_iter(path)
            .map_err(env_file_error)?
            .collect::<std::result::Result<_, _>>()
            .map_err(env_file_error)?;

        Self::from_lookup(|key| env::var(key).ok().or_else(|| file.get(key).cloned()))
    }

    /// Load using an arbitrary key lookup
    ///
    /// Missing keys keep their default. Present but unparsable values are
    /// rejected with [`EngineError::InvalidConfig`].
    pub fn from_lookup<F>(lookup: F) -> Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let mut config = Self::default();

        if let Some(raw) = lookup(LATENCY_ENV) {
            let micros = raw
                .trim()
                .parse::<u64>()
                .map_err(|e| EngineError::InvalidConfig {
                    key: LATENCY_ENV,
                    value: raw.clone(),
                    reason: e.to_string(),
                })?;
            config.latency = Duration::from_micros(micros);
        }

        if let Some(raw) = lookup(LOG_ACKS_ENV) {
            config.log_acknowledgements = parse_flag(&raw).ok_or_else(|| {
                EngineError::InvalidConfig {
                    key: LOG_ACKS_ENV,
                    value: raw.clone(),
                    reason: "expected true, false, 1 or 0".to_string(),
                }
            })?;
        }

        Ok(config)
    }
}

fn parse_flag(raw: &str) -> Option<bool> {
    match raw.trim().to_ascii_lowercase().as_str() {
        "true" | "1" => Some(true),
        "false" | "0" => Some(false),
        _ => None,
    }
}
