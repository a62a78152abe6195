//! In-memory backend
//!
//! Keeps the three server-side fields in process memory. Used for the console's
//! offline mode and as a stand-in backend in tests.

use async_trait::async_trait;
use tokio::sync::RwLock;

use crate::error::Result;
use crate::traits::ProvisioningBackend;
use crate::types::MemorySeed;

/// Provisioning backend that never leaves the process.
#[derive(Debug, Default)]
pub struct InMemoryBackend {
    state: RwLock<MemorySeed>,
}

impl InMemoryBackend {
    /// Create an empty backend (unpublished, nothing configured).
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a backend pre-populated with the given state.
    #[must_use]
    pub fn with_seed(seed: MemorySeed) -> Self {
        Self {
            state: RwLock::new(seed),
        }
    }

    /// Current server-side state, for inspection.
    pub async fn snapshot(&self) -> MemorySeed {
        self.state.read().await.clone()
    }
}

#[async_trait]
impl ProvisioningBackend for InMemoryBackend {
    fn id(&self) -> &'static str {
        "memory"
    }

    async fn configure_domain(&self, domain: &str) -> Result<()> {
        log::debug!("[memory] configure_domain {domain}");
        self.state.write().await.domain = Some(domain.to_string());
        Ok(())
    }

    async fn get_domain(&self) -> Result<Option<String>> {
        Ok(self.state.read().await.domain.clone())
    }

    async fn get_subdomain(&self) -> Result<Option<String>> {
        Ok(self.state.read().await.subdomain.clone())
    }

    async fn is_published(&self) -> Result<bool> {
        Ok(self.state.read().await.published)
    }

    async fn publish(&self, subdomain: &str) -> Result<()> {
        log::debug!("[memory] publish {subdomain}");
        let mut state = self.state.write().await;
        state.published = true;
        state.subdomain = Some(subdomain.to_string());
        Ok(())
    }

    async fn reset_site_storage(&self) -> Result<()> {
        log::debug!("[memory] reset_site_storage");
        *self.state.write().await = MemorySeed::default();
        Ok(())
    }

    async fn unpublish(&self) -> Result<()> {
        log::debug!("[memory] unpublish");
        self.state.write().await.published = false;
        Ok(())
    }
}
