//! Backend factory.

use std::sync::Arc;

use crate::backends::{HttpGateway, InMemoryBackend};
use crate::error::Result;
use crate::traits::ProvisioningBackend;
use crate::types::BackendConfig;

/// Creates a [`ProvisioningBackend`] from its configuration.
///
/// The returned backend is wrapped in `Arc<dyn ProvisioningBackend>` so it can be
/// captured by the futures the query cache shares between readers.
///
/// # Examples
///
/// ```rust,no_run
/// use site_console_provider::{create_backend, BackendConfig, HttpGatewayConfig};
///
/// let backend = create_backend(&BackendConfig::Http(HttpGatewayConfig::new(
///     "https://provisioning.example.net/api/",
/// )))
/// .unwrap();
/// ```
pub fn create_backend(config: &BackendConfig) -> Result<Arc<dyn ProvisioningBackend>> {
    match config {
        BackendConfig::Http(http) => {
            log::info!("Using HTTP provisioning gateway at {}", http.base_url);
            Ok(Arc::new(HttpGateway::new(http)?))
        }
        BackendConfig::Memory(seed) => {
            log::info!("Using in-memory provisioning backend");
            Ok(Arc::new(InMemoryBackend::with_seed(seed.clone())))
        }
    }
}
