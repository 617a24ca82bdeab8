use async_trait::async_trait;
use wirelookup_domain::{DomainError, ResolutionResult};

/// Resolves one host name to its A record.
///
/// `Err` carries transport failures only; anything the server or the reply
/// itself reports comes back as `ResolutionResult::Failed`.
#[async_trait]
pub trait DnsResolver: Send + Sync {
    async fn resolve(&self, host_name: &str) -> Result<ResolutionResult, DomainError>;
}
