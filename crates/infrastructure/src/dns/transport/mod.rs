pub mod udp;

use async_trait::async_trait;
use std::net::SocketAddr;
use wirelookup_domain::DomainError;

pub use udp::UdpTransport;

/// One request datagram out, one reply datagram back.
#[async_trait]
pub trait DnsTransport: Send + Sync {
    async fn exchange(&self, message_bytes: &[u8]) -> Result<Vec<u8>, DomainError>;

    fn server_addr(&self) -> SocketAddr;

    fn protocol_name(&self) -> &'static str;
}
