pub mod codec;
pub mod resolver;
pub mod transport;

pub use codec::{QueryEncoder, ResponseDecoder, WireCursor};
pub use resolver::{TransactionId, WireResolver};
pub use transport::{DnsTransport, UdpTransport};
