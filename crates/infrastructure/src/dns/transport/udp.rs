//! UDP Transport for DNS queries (RFC 1035 §4.2.1)
//!
//! Messages are sent as-is (no framing). One datagram is read back; anything
//! beyond the read buffer capacity is dropped by the socket.

use super::DnsTransport;
use async_trait::async_trait;
use std::io;
use std::net::{Ipv4Addr, Ipv6Addr, SocketAddr};
use std::time::Duration;
use tokio::net::UdpSocket;
use tracing::{debug, warn};
use wirelookup_domain::{DomainError, ResolverConfig};

const DEFAULT_READ_BUFFER_SIZE: usize = 1024;
const DEFAULT_TIMEOUT: Duration = Duration::from_secs(5);

/// DNS over UDP transport
pub struct UdpTransport {
    server_addr: SocketAddr,
    read_buffer_size: usize,
    timeout: Duration,
}

impl UdpTransport {
    pub fn new(server_addr: SocketAddr) -> Self {
        Self {
            server_addr,
            read_buffer_size: DEFAULT_READ_BUFFER_SIZE,
            timeout: DEFAULT_TIMEOUT,
        }
    }

    pub fn from_config(config: &ResolverConfig) -> Self {
        Self::new(config.socket_addr())
            .with_read_buffer_size(config.read_buffer_size)
            .with_timeout(Duration::from_secs(config.query_timeout))
    }

    pub fn with_read_buffer_size(mut self, read_buffer_size: usize) -> Self {
        self.read_buffer_size = read_buffer_size;
        self
    }

    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    fn bind_addr(&self) -> SocketAddr {
        if self.server_addr.is_ipv4() {
            SocketAddr::from((Ipv4Addr::UNSPECIFIED, 0))
        } else {
            SocketAddr::from((Ipv6Addr::UNSPECIFIED, 0))
        }
    }

    fn map_io_error(&self, action: &str, e: io::Error) -> DomainError {
        match e.kind() {
            io::ErrorKind::ConnectionRefused => DomainError::TransportConnectionRefused {
                server: self.server_addr.to_string(),
            },
            _ => DomainError::IoError(format!("{} {}: {}", action, self.server_addr, e)),
        }
    }

    fn timeout_error(&self) -> DomainError {
        DomainError::TransportTimeout {
            server: self.server_addr.to_string(),
        }
    }
}

#[async_trait]
impl DnsTransport for UdpTransport {
    async fn exchange(&self, message_bytes: &[u8]) -> Result<Vec<u8>, DomainError> {
        let socket = UdpSocket::bind(self.bind_addr())
            .await
            .map_err(|e| DomainError::IoError(format!("Failed to bind UDP socket: {}", e)))?;

        let bytes_sent =
            tokio::time::timeout(self.timeout, socket.send_to(message_bytes, self.server_addr))
                .await
                .map_err(|_| self.timeout_error())?
                .map_err(|e| self.map_io_error("Failed to send UDP query to", e))?;

        debug!(
            server = %self.server_addr,
            bytes_sent = bytes_sent,
            "UDP query sent"
        );

        let mut recv_buf = vec![0u8; self.read_buffer_size];

        let (bytes_received, from_addr) =
            tokio::time::timeout(self.timeout, socket.recv_from(&mut recv_buf))
                .await
                .map_err(|_| self.timeout_error())?
                .map_err(|e| self.map_io_error("Failed to receive UDP response from", e))?;

        if from_addr != self.server_addr {
            warn!(
                expected = %self.server_addr,
                received_from = %from_addr,
                "UDP response from unexpected source"
            );
        }

        recv_buf.truncate(bytes_received);

        debug!(
            server = %self.server_addr,
            bytes_received = bytes_received,
            "UDP response received"
        );

        Ok(recv_buf)
    }

    fn server_addr(&self) -> SocketAddr {
        self.server_addr
    }

    fn protocol_name(&self) -> &'static str {
        "UDP"
    }
}
