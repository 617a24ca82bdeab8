use crate::dns::codec::{QueryEncoder, ResponseDecoder};
use crate::dns::transport::DnsTransport;
use async_trait::async_trait;
use std::sync::Arc;
use tracing::debug;
use wirelookup_application::ports::DnsResolver;
use wirelookup_domain::{DomainError, DomainName, ResolutionResult, ResolverConfig};

/// How each outgoing query picks its 16-bit transaction id.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TransactionId {
    Fixed(u16),
    Random,
}

impl TransactionId {
    pub fn from_config(config: &ResolverConfig) -> Self {
        if config.random_transaction_id {
            TransactionId::Random
        } else {
            TransactionId::Fixed(config.transaction_id)
        }
    }

    pub fn next(&self) -> u16 {
        match self {
            TransactionId::Fixed(id) => *id,
            TransactionId::Random => fastrand::u16(..),
        }
    }
}

/// Resolver that speaks the DNS wire protocol itself: encode, one
/// transport round trip, decode. Holds no per-lookup state.
pub struct WireResolver {
    transport: Arc<dyn DnsTransport>,
    transaction_id: TransactionId,
}

impl WireResolver {
    pub fn new(transport: Arc<dyn DnsTransport>, transaction_id: TransactionId) -> Self {
        Self {
            transport,
            transaction_id,
        }
    }
}

#[async_trait]
impl DnsResolver for WireResolver {
    async fn resolve(&self, host_name: &str) -> Result<ResolutionResult, DomainError> {
        let name = DomainName::from_host_name(host_name);
        let id = self.transaction_id.next();
        let query = QueryEncoder::encode_name(&name, id);

        debug!(
            domain = %name,
            labels = name.label_count(),
            id = id,
            bytes = query.len(),
            server = %self.transport.server_addr(),
            protocol = self.transport.protocol_name(),
            "Sending A query"
        );

        let reply = self.transport.exchange(&query).await?;

        Ok(ResponseDecoder::decode_response(&reply, name.label_count()))
    }
}
