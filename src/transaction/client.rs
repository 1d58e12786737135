//! Transaction Client
//!
//! Single responsibility: run one validated connect→send→receive cycle on a
//! worker task and surface the outcome.
//!
//! # Architecture
//!
//! ```text
//! ┌────────────────────────────────────────────────────────┐
//! │                  TransactionClient                      │
//! │  - Validates address / port / payload                   │
//! │  - Spawns one worker task per transaction               │
//! │  - Reports failures through the injected Reporter       │
//! └────────────────────────────────────────────────────────┘
//!                            │
//!                            ▼
//! ┌────────────────────────────────────────────────────────┐
//! │                     Transaction                         │
//! │  - Ephemeral: one payload, one buffer, one socket       │
//! │  - Phases strictly sequential, each under a deadline    │
//! │  - Stream dropped on every exit path                    │
//! └────────────────────────────────────────────────────────┘
//!                            │
//!                            ▼
//!                        Transport
//! ```
//!
//! # Failure policy
//!
//! Nothing here panics or propagates an unwound fault. `execute` converts
//! every failure into one reporter diagnostic plus `false`; `try_execute`
//! and `exchange` propagate the typed error and report nothing.

use std::sync::Arc;

use tracing::debug;

use super::transport::Transport;
use crate::config::TransactionConfig;
use crate::endpoint::Endpoint;
use crate::error::TransactError;
use crate::report::{self, Reporter};

/// Performs bounded TCP request/response transactions.
///
/// # Guarantees
///
/// - Each call opens a fresh connection and closes it before returning.
/// - Every network phase runs under its own configured deadline; no
///   unbounded waits exist.
/// - Concurrent calls are fully isolated: independent sockets, buffers, and
///   phase futures. The client is cheap to share behind an `Arc`.
pub struct TransactionClient {
    config: TransactionConfig,
    reporter: Arc<dyn Reporter>,
}

impl TransactionClient {
    /// Create a client; the reporter implementation follows
    /// `config.alert_on_failure`.
    pub fn new(config: TransactionConfig) -> Self {
        let reporter = report::from_config(&config);
        Self { config, reporter }
    }

    /// Create a client with an injected reporter.
    pub fn with_reporter(config: TransactionConfig, reporter: Arc<dyn Reporter>) -> Self {
        Self { config, reporter }
    }

    /// The active configuration.
    pub fn config(&self) -> &TransactionConfig {
        &self.config
    }

    /// Perform one transaction.
    ///
    /// On success the caller's buffer holds the reply padded with trailing
    /// zero bytes up to capacity (the caller trims) and the call returns
    /// `true`. On failure exactly one diagnostic goes to the reporter, the
    /// call returns `false`, and the buffer contents must not be
    /// interpreted.
    pub async fn execute(
        &self,
        address: &str,
        port: u16,
        send_payload: &[u8],
        receive_buffer: &mut [u8],
    ) -> bool {
        match self
            .try_execute(address, port, send_payload, receive_buffer)
            .await
        {
            Ok(received) => {
                debug!(addr = %address, port = port, bytes = received, "transaction complete");
                true
            }
            Err(err) => {
                self.reporter.failure(&err.to_string());
                false
            }
        }
    }

    /// The `Result` surface of [`execute`](Self::execute): same transaction,
    /// typed outcome carrying the number of bytes received, nothing
    /// reported.
    ///
    /// # Errors
    /// - `InvalidInput` for a malformed address, port 0, or empty payload
    ///   (raised before any socket is opened).
    /// - `ConnectTimeout` / `SendTimeout` / `ReceiveTimeout` when a phase
    ///   deadline elapses.
    /// - `Transport` for any other socket-level failure.
    pub async fn try_execute(
        &self,
        address: &str,
        port: u16,
        send_payload: &[u8],
        receive_buffer: &mut [u8],
    ) -> Result<usize, TransactError> {
        let endpoint = Endpoint::parse(address, port)?;

        if send_payload.is_empty() {
            return Err(TransactError::InvalidInput(
                "payload must not be empty".to_string(),
            ));
        }

        let transaction = Transaction {
            config: self.config.clone(),
            endpoint,
            payload: send_payload.to_vec(),
            buffer: vec![0u8; receive_buffer.len()],
        };

        // Worker task: the caller's context never blocks on the phases.
        let (buffer, received) = tokio::spawn(transaction.run())
            .await
            .map_err(|e| TransactError::Transport(format!("transaction task failed: {}", e)))??;

        receive_buffer.copy_from_slice(&buffer);
        Ok(received)
    }

    /// Perform one transaction against an internally allocated buffer of the
    /// configured receive capacity, returning exactly the received bytes
    /// (no zero padding to trim).
    ///
    /// # Errors
    /// Same taxonomy as [`try_execute`](Self::try_execute).
    pub async fn exchange(
        &self,
        address: &str,
        port: u16,
        send_payload: &[u8],
    ) -> Result<Vec<u8>, TransactError> {
        let mut buffer = vec![0u8; self.config.receive_capacity];
        let received = self
            .try_execute(address, port, send_payload, &mut buffer)
            .await?;
        buffer.truncate(received);
        Ok(buffer)
    }
}

/// One transaction's state, moved onto the worker task.
///
/// Owns everything it touches (payload copy, receive buffer, and once
/// connected the socket), so nothing is shared across calls and release
/// happens exactly once when the task scope ends.
struct Transaction {
    config: TransactionConfig,
    endpoint: Endpoint,
    payload: Vec<u8>,
    buffer: Vec<u8>,
}

impl Transaction {
    /// Run the strictly sequential phases.
    ///
    /// The receive phase is never initiated before connect and send
    /// completed. The graceful close runs unconditionally once a connection
    /// exists, success or failure.
    async fn run(self) -> Result<(Vec<u8>, usize), TransactError> {
        let Transaction {
            config,
            endpoint,
            payload,
            mut buffer,
        } = self;

        let mut transport =
            Transport::connect(endpoint.socket_addr(), config.connect_timeout()).await?;

        let outcome = async {
            transport.send(&payload, config.send_timeout()).await?;
            transport.recv(&mut buffer, config.receive_timeout()).await
        }
        .await;

        transport.close().await;

        let received = outcome?;
        Ok((buffer, received))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_client_uses_configured_defaults() {
        let client = TransactionClient::new(TransactionConfig::default());
        assert_eq!(client.config().connect_timeout_ms, 10_000);
        assert_eq!(client.config().send_timeout_ms, 10_000);
        assert_eq!(client.config().receive_timeout_ms, 10_000);
        assert_eq!(client.config().receive_capacity, 1024);
    }

    #[tokio::test]
    async fn test_empty_payload_rejected_before_any_socket() {
        let client = TransactionClient::new(TransactionConfig::default());
        let mut buf = [0u8; 16];

        // Port 9 (discard) is never contacted: validation short-circuits.
        let err = client
            .try_execute("127.0.0.1", 9, b"", &mut buf)
            .await
            .unwrap_err();
        assert!(err.is_input_error());
    }

    #[tokio::test]
    async fn test_malformed_address_rejected_before_any_socket() {
        let client = TransactionClient::new(TransactionConfig::default());
        let mut buf = [0u8; 16];

        let err = client
            .try_execute("definitely-not-an-ip", 7000, b"PING", &mut buf)
            .await
            .unwrap_err();
        assert!(err.is_input_error());
    }
}
