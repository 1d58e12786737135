//! Configuration for transactions

use serde::{Deserialize, Serialize};
use std::path::Path;
use std::time::Duration;

/// Default deadline for each network phase, in milliseconds.
pub const DEFAULT_PHASE_TIMEOUT_MS: u64 = 10_000;

/// Default receive buffer capacity, in bytes.
pub const DEFAULT_RECEIVE_CAPACITY: usize = 1024;

/// Per-client configuration.
///
/// Every field has a serde default, so a partial TOML file (or an empty
/// one) deserializes into the documented defaults.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TransactionConfig {
    /// Deadline for the connect phase, in milliseconds
    #[serde(default = "default_phase_timeout_ms")]
    pub connect_timeout_ms: u64,

    /// Deadline for the send phase, in milliseconds
    #[serde(default = "default_phase_timeout_ms")]
    pub send_timeout_ms: u64,

    /// Deadline for the receive phase, in milliseconds
    #[serde(default = "default_phase_timeout_ms")]
    pub receive_timeout_ms: u64,

    /// Receive buffer capacity used by `exchange`
    #[serde(default = "default_receive_capacity")]
    pub receive_capacity: usize,

    /// Also surface failure diagnostics synchronously on stderr
    #[serde(default)]
    pub alert_on_failure: bool,
}

fn default_phase_timeout_ms() -> u64 {
    DEFAULT_PHASE_TIMEOUT_MS
}

fn default_receive_capacity() -> usize {
    DEFAULT_RECEIVE_CAPACITY
}

impl Default for TransactionConfig {
    fn default() -> Self {
        Self {
            connect_timeout_ms: DEFAULT_PHASE_TIMEOUT_MS,
            send_timeout_ms: DEFAULT_PHASE_TIMEOUT_MS,
            receive_timeout_ms: DEFAULT_PHASE_TIMEOUT_MS,
            receive_capacity: DEFAULT_RECEIVE_CAPACITY,
            alert_on_failure: false,
        }
    }
}

impl TransactionConfig {
    /// Load config from file
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self, std::io::Error> {
        let content = std::fs::read_to_string(path)?;
        toml::from_str(&content)
            .map_err(|e| std::io::Error::new(std::io::ErrorKind::InvalidData, e))
    }

    /// Save config to file
    pub fn save<P: AsRef<Path>>(&self, path: P) -> Result<(), std::io::Error> {
        let content = toml::to_string_pretty(self)
            .map_err(|e| std::io::Error::new(std::io::ErrorKind::InvalidData, e))?;
        std::fs::write(path, content)
    }

    /// Connect phase deadline
    pub fn connect_timeout(&self) -> Duration {
        Duration::from_millis(self.connect_timeout_ms)
    }

    /// Send phase deadline
    pub fn send_timeout(&self) -> Duration {
        Duration::from_millis(self.send_timeout_ms)
    }

    /// Receive phase deadline
    pub fn receive_timeout(&self) -> Duration {
        Duration::from_millis(self.receive_timeout_ms)
    }
}
