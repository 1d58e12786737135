//! Courier - bounded TCP request/response transactions
//!
//! One call performs one transaction: open a fresh TCP connection, write a
//! payload, read a single bounded reply, close. Each network phase
//! (connect, send, receive) runs under its own deadline, and every failure
//! is converted into one diagnostic on an injected reporter plus a `false`
//! return: nothing panics, nothing waits forever.
//!
//! ## Architecture
//!
//! | Module        | Responsibility                                       |
//! |---------------|------------------------------------------------------|
//! | `error`       | Failure taxonomy                                     |
//! | `config`      | Phase deadlines, buffer capacity, alert flag         |
//! | `endpoint`    | Address/port validation                              |
//! | `report`      | Injected failure side channel                        |
//! | `transaction` | The client and its raw TCP transport                 |
//!
//! ## Usage
//!
//! ```ignore
//! use courier::{TransactionClient, TransactionConfig};
//!
//! let client = TransactionClient::new(TransactionConfig::default());
//!
//! // Boolean contract: reply lands in the caller's buffer, zero-padded.
//! let mut reply = [0u8; 1024];
//! if client.execute("127.0.0.1", 7000, b"PING", &mut reply).await {
//!     // trim trailing zeros and use the reply
//! }
//!
//! // Result contract: trimmed reply or a typed error.
//! let reply = client.exchange("127.0.0.1", 7000, b"PING").await?;
//! ```
//!
//! Out of scope: connection pooling, framing, pipelining, and long-lived
//! connections. Each call is exactly one connect→send→receive cycle.

pub mod config;
pub mod endpoint;
pub mod error;
pub mod report;
pub mod transaction;

// Re-exports
pub use config::TransactionConfig;
pub use endpoint::Endpoint;
pub use error::TransactError;
pub use report::{AlertReporter, LogReporter, Reporter};
pub use transaction::TransactionClient;
