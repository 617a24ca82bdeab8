#![allow(dead_code)]

use async_trait::async_trait;
use std::collections::HashMap;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;
use tokio::sync::RwLock;
use wirelookup_application::ports::DnsResolver;
use wirelookup_domain::{DomainError, ErrorKind, ResolutionResult};

#[derive(Clone, Default)]
pub struct MockDnsResolver {
    responses: Arc<RwLock<HashMap<String, ResolutionResult>>>,
    errors: Arc<RwLock<HashMap<String, DomainError>>>,
    calls: Arc<AtomicUsize>,
}

impl MockDnsResolver {
    pub fn new() -> Self {
        Self::default()
    }

    pub async fn set_response(&self, host_name: &str, result: ResolutionResult) {
        self.responses
            .write()
            .await
            .insert(host_name.to_string(), result);
    }

    pub async fn set_error(&self, host_name: &str, error: DomainError) {
        self.errors
            .write()
            .await
            .insert(host_name.to_string(), error);
    }

    pub fn call_count(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }
}

#[async_trait]
impl DnsResolver for MockDnsResolver {
    async fn resolve(&self, host_name: &str) -> Result<ResolutionResult, DomainError> {
        self.calls.fetch_add(1, Ordering::SeqCst);

        if let Some(error) = self.errors.read().await.get(host_name) {
            return Err(error.clone());
        }

        Ok(self
            .responses
            .read()
            .await
            .get(host_name)
            .cloned()
            .unwrap_or(ResolutionResult::Failed {
                reason: ErrorKind::NameError,
            }))
    }
}
