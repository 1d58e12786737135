//! Failure reporting side channel
//!
//! The transaction core never decides how failures are shown. It emits one
//! diagnostic per failed call through an injected [`Reporter`]; the two
//! implementations here cover the observed configurations. Reporting is a
//! notification side effect only and never changes the returned result.

use std::io::Write;
use std::sync::Arc;

use tracing::error;

use crate::config::TransactionConfig;

/// Receives one human-readable diagnostic per failed transaction.
pub trait Reporter: Send + Sync {
    /// Called exactly once per failure with a category-prefixed message.
    fn failure(&self, message: &str);
}

/// Emits a structured log event and nothing else.
#[derive(Debug, Default)]
pub struct LogReporter;

impl Reporter for LogReporter {
    fn failure(&self, message: &str) {
        error!(diagnostic = %message, "transaction failed");
    }
}

/// Logs like [`LogReporter`], then writes the diagnostic synchronously to
/// stderr. Stands in for the blocking user alert of interactive shells.
#[derive(Debug, Default)]
pub struct AlertReporter;

impl Reporter for AlertReporter {
    fn failure(&self, message: &str) {
        error!(diagnostic = %message, "transaction failed");

        let mut stderr = std::io::stderr().lock();
        let _ = writeln!(stderr, "courier: {message}");
        let _ = stderr.flush();
    }
}

/// Select the reporter implementation for a configuration.
pub fn from_config(config: &TransactionConfig) -> Arc<dyn Reporter> {
    if config.alert_on_failure {
        Arc::new(AlertReporter)
    } else {
        Arc::new(LogReporter)
    }
}
