use crate::ports::DnsResolver;
use std::sync::Arc;
use std::time::Instant;
use tracing::{info, warn};
use wirelookup_domain::{DomainError, DomainName, ResolutionResult};

pub struct LookupHostUseCase {
    resolver: Arc<dyn DnsResolver>,
}

impl LookupHostUseCase {
    pub fn new(resolver: Arc<dyn DnsResolver>) -> Self {
        Self { resolver }
    }

    pub async fn execute(&self, host_name: &str) -> Result<ResolutionResult, DomainError> {
        let name = DomainName::from_host_name(host_name);
        if !name.has_content() {
            return Err(DomainError::InvalidDomainName(format!(
                "'{}' has no labels",
                host_name
            )));
        }

        let start = Instant::now();
        let result = self.resolver.resolve(host_name).await;
        let response_time_ms = start.elapsed().as_millis() as u64;

        match &result {
            Ok(ResolutionResult::Resolved { name, address }) => {
                info!(
                    domain = %name,
                    address = %address,
                    response_time_ms = response_time_ms,
                    "Lookup resolved"
                );
            }
            Ok(ResolutionResult::Failed { reason }) => {
                warn!(
                    domain = %host_name,
                    status = reason.status(),
                    response_time_ms = response_time_ms,
                    "Lookup failed"
                );
            }
            Err(e) => {
                warn!(
                    error = %e,
                    domain = %host_name,
                    response_time_ms = response_time_ms,
                    "Lookup transport error"
                );
            }
        }

        result
    }
}
