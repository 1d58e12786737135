//! One bounded TCP transaction: connect, send, receive, close.
//!
//! # Architecture
//!
//! | Module      | Responsibility                                   |
//! |-------------|--------------------------------------------------|
//! | `transport` | Raw TCP connect/send/receive under deadlines     |
//! | `client`    | Validation, worker task, reporting, public API   |
//!
//! # Design rules
//!
//! ## 1. A phase is a deadline-bounded future
//!
//! There is no completion callback setting shared flags. Each network phase
//! (connect, send, receive) is one awaited future under `tokio::time::timeout`;
//! at most one phase is awaited at any instant, in connect→send→receive order.
//!
//! ## 2. Cleanup is ownership, not a finalizer
//!
//! The stream lives in the transaction scope and drops on every exit path,
//! after a best-effort graceful shutdown whenever the connect phase completed.
//!
//! ## 3. Nothing is shared between transactions
//!
//! Each call gets its own socket, phase futures, and receive buffer, so
//! concurrent callers need no locking and sequential callers inherit no state.

// Internal module - not exposed publicly
mod transport;

// Public module
mod client;

// Re-export the public API
pub use client::TransactionClient;
