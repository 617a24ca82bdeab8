use serde::{Deserialize, Serialize};
use std::net::{Ipv4Addr, SocketAddr, SocketAddrV4};

/// Where and how queries are sent.
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct ResolverConfig {
    /// IPv4 address of the recursive DNS server.
    #[serde(default = "default_server_address")]
    pub server_address: Ipv4Addr,

    #[serde(default = "default_port")]
    pub port: u16,

    /// Receive buffer capacity in bytes. Replies longer than this are cut.
    #[serde(default = "default_read_buffer_size")]
    pub read_buffer_size: usize,

    /// Seconds to wait for the reply datagram.
    #[serde(default = "default_query_timeout")]
    pub query_timeout: u64,

    #[serde(default = "default_transaction_id")]
    pub transaction_id: u16,

    /// Draw a fresh transaction id per query instead of `transaction_id`.
    #[serde(default)]
    pub random_transaction_id: bool,
}

impl ResolverConfig {
    pub fn socket_addr(&self) -> SocketAddr {
        SocketAddr::V4(SocketAddrV4::new(self.server_address, self.port))
    }
}

impl Default for ResolverConfig {
    fn default() -> Self {
        Self {
            server_address: default_server_address(),
            port: default_port(),
            read_buffer_size: default_read_buffer_size(),
            query_timeout: default_query_timeout(),
            transaction_id: default_transaction_id(),
            random_transaction_id: false,
        }
    }
}

fn default_server_address() -> Ipv4Addr {
    Ipv4Addr::new(8, 8, 8, 8)
}

fn default_port() -> u16 {
    53
}

fn default_read_buffer_size() -> usize {
    1024
}

fn default_query_timeout() -> u64 {
    5
}

fn default_transaction_id() -> u16 {
    0x1a2b
}
