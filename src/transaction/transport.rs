//! Raw TCP Transport
//!
//! Single responsibility: connect to a peer and move bytes, with every
//! network phase bounded by its own deadline. No framing and no protocol
//! knowledge.

use std::net::SocketAddr;
use std::time::Duration;

use tokio::io::{AsyncReadExt, AsyncWriteExt};
use tokio::net::TcpStream;
use tokio::time::timeout;
use tracing::debug;

use crate::error::TransactError;

/// A connected TCP transport owned by exactly one transaction.
///
/// Can only be constructed via [`Transport::connect`]; holding one means the
/// connect phase already completed. Dropping it releases the socket on every
/// exit path; [`Transport::close`] additionally performs the graceful
/// shutdown first.
pub(crate) struct Transport {
    stream: TcpStream,
    peer: SocketAddr,
}

impl Transport {
    /// Connect phase.
    ///
    /// # Errors
    /// `ConnectTimeout` when the deadline elapses, `Transport` for any other
    /// socket-level failure (refusal, unreachable network).
    pub(crate) async fn connect(
        peer: SocketAddr,
        deadline: Duration,
    ) -> Result<Self, TransactError> {
        debug!(addr = %peer, "connecting");

        let stream = timeout(deadline, TcpStream::connect(peer))
            .await
            .map_err(|_| TransactError::ConnectTimeout(deadline))?
            .map_err(|e| TransactError::Transport(format!("connect to {} failed: {}", peer, e)))?;

        debug!(addr = %peer, "connected");
        Ok(Self { stream, peer })
    }

    /// Send phase: write the whole payload.
    ///
    /// # Errors
    /// `SendTimeout` when the deadline elapses, `Transport` otherwise.
    pub(crate) async fn send(
        &mut self,
        payload: &[u8],
        deadline: Duration,
    ) -> Result<(), TransactError> {
        timeout(deadline, self.stream.write_all(payload))
            .await
            .map_err(|_| TransactError::SendTimeout(deadline))?
            .map_err(|e| {
                TransactError::Transport(format!("send to {} failed: {}", self.peer, e))
            })?;

        debug!(addr = %self.peer, bytes = payload.len(), "payload sent");
        Ok(())
    }

    /// Receive phase: a single read into `buf`.
    ///
    /// Reply bytes beyond the buffer capacity are left on the wire and
    /// discarded with the connection; that is truncation, not an error.
    ///
    /// # Errors
    /// `ReceiveTimeout` when the deadline elapses, `Transport` otherwise.
    pub(crate) async fn recv(
        &mut self,
        buf: &mut [u8],
        deadline: Duration,
    ) -> Result<usize, TransactError> {
        let received = timeout(deadline, self.stream.read(buf))
            .await
            .map_err(|_| TransactError::ReceiveTimeout(deadline))?
            .map_err(|e| {
                TransactError::Transport(format!("receive from {} failed: {}", self.peer, e))
            })?;

        debug!(addr = %self.peer, bytes = received, "reply received");
        Ok(received)
    }

    /// Graceful shutdown of the transfer directions.
    ///
    /// Best-effort: the socket is released when the transport drops
    /// regardless of the outcome here, so a peer that already reset the
    /// connection only produces a debug line.
    pub(crate) async fn close(mut self) {
        if let Err(e) = self.stream.shutdown().await {
            debug!(addr = %self.peer, error = %e, "shutdown after transaction returned error");
        }
        debug!(addr = %self.peer, "connection closed");
    }
}
