use std::sync::Arc;
use tracing::info;
use wirelookup_application::use_cases::LookupHostUseCase;
use wirelookup_domain::Config;
use wirelookup_infrastructure::dns::{TransactionId, UdpTransport, WireResolver};

pub struct LookupServices {
    pub lookup_host: Arc<LookupHostUseCase>,
}

impl LookupServices {
    pub fn new(config: &Config) -> Self {
        let resolver_config = &config.resolver;

        info!(
            server = %resolver_config.socket_addr(),
            read_buffer_size = resolver_config.read_buffer_size,
            timeout_secs = resolver_config.query_timeout,
            "Initializing UDP lookup services"
        );

        let transport = Arc::new(UdpTransport::from_config(resolver_config));
        let resolver = Arc::new(WireResolver::new(
            transport,
            TransactionId::from_config(resolver_config),
        ));

        Self {
            lookup_host: Arc::new(LookupHostUseCase::new(resolver)),
        }
    }
}
