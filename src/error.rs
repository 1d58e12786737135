//! Error types for courier

use std::time::Duration;
use thiserror::Error;

/// Everything that can go wrong with one transaction.
///
/// Every variant is terminal for that transaction only: the caller decides
/// whether to retry. `Display` carries the category prefix used in
/// reporter diagnostics.
#[derive(Error, Debug)]
pub enum TransactError {
    #[error("Invalid input: {0}")]
    InvalidInput(String),

    #[error("Connect timed out after {0:?}")]
    ConnectTimeout(Duration),

    #[error("Send timed out after {0:?}")]
    SendTimeout(Duration),

    #[error("Receive timed out after {0:?}")]
    ReceiveTimeout(Duration),

    #[error("Transport error: {0}")]
    Transport(String),
}

impl TransactError {
    /// True for failures raised before any socket was opened.
    pub fn is_input_error(&self) -> bool {
        matches!(self, TransactError::InvalidInput(_))
    }

    /// True when a phase deadline elapsed.
    pub fn is_timeout(&self) -> bool {
        matches!(
            self,
            TransactError::ConnectTimeout(_)
                | TransactError::SendTimeout(_)
                | TransactError::ReceiveTimeout(_)
        )
    }
}
