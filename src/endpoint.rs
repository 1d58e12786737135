//! Destination endpoint validation
//!
//! An [`Endpoint`] can only be built via [`Endpoint::parse`], so holding one
//! means the address literal and port were already checked. A malformed
//! address is a terminal input error, never a network failure.

use std::fmt;
use std::net::{IpAddr, SocketAddr};

use crate::error::TransactError;

/// A validated transaction destination.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Endpoint {
    address: IpAddr,
    port: u16,
}

impl Endpoint {
    /// Parse an IPv4/IPv6 literal and a port into an endpoint.
    ///
    /// Hostnames are rejected: resolution belongs to the caller, not to the
    /// transaction.
    ///
    /// # Errors
    /// `InvalidInput` when the address is not an IP literal or the port is 0.
    pub fn parse(address: &str, port: u16) -> Result<Self, TransactError> {
        let address: IpAddr = address.parse().map_err(|_| {
            TransactError::InvalidInput(format!(
                "'{}' is not an IPv4/IPv6 address literal",
                address
            ))
        })?;

        if port == 0 {
            return Err(TransactError::InvalidInput(
                "port must be non-zero".to_string(),
            ));
        }

        Ok(Self { address, port })
    }

    /// The destination address.
    pub fn address(&self) -> IpAddr {
        self.address
    }

    /// The destination port.
    pub fn port(&self) -> u16 {
        self.port
    }

    /// The socket address handed to the connect phase.
    pub fn socket_addr(&self) -> SocketAddr {
        SocketAddr::new(self.address, self.port)
    }
}

impl fmt::Display for Endpoint {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.socket_addr())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_ipv4_literal() {
        let endpoint = Endpoint::parse("127.0.0.1", 7000).unwrap();
        assert_eq!(endpoint.address(), IpAddr::from([127, 0, 0, 1]));
        assert_eq!(endpoint.port(), 7000);
        assert_eq!(endpoint.to_string(), "127.0.0.1:7000");
    }

    #[test]
    fn parses_ipv6_literal() {
        let endpoint = Endpoint::parse("::1", 7000).unwrap();
        assert!(endpoint.address().is_loopback());
        assert_eq!(endpoint.to_string(), "[::1]:7000");
    }

    #[test]
    fn rejects_hostname() {
        let err = Endpoint::parse("localhost", 7000).unwrap_err();
        assert!(err.is_input_error());
    }

    #[test]
    fn rejects_garbage() {
        assert!(Endpoint::parse("", 7000).is_err());
        assert!(Endpoint::parse("256.0.0.1", 7000).is_err());
        assert!(Endpoint::parse("1.2.3", 7000).is_err());
        assert!(Endpoint::parse("127.0.0.1:80", 7000).is_err());
    }

    #[test]
    fn rejects_port_zero() {
        let err = Endpoint::parse("127.0.0.1", 0).unwrap_err();
        assert!(err.is_input_error());
    }
}
