//! # site-console-provider
//!
//! Client-side abstraction over the remote site provisioning backend.
//!
//! The backend owns every piece of durable state (published flag, subdomain, custom
//! domain). This crate exposes it as the [`ProvisioningBackend`] trait with two
//! implementations:
//!
//! | Backend | Config | Notes |
//! |---------|--------|-------|
//! | [`HttpGateway`] | `{"kind": "http", "base_url": ...}` | `reqwest`, retries idempotent reads |
//! | [`InMemoryBackend`] | `{"kind": "memory"}` | offline mode and tests |
//!
//! ## Feature Flags
//!
//! - **`native-tls`** *(default)*: Use the platform's native TLS implementation.
//! - **`rustls`**: Use rustls.
//!
//! ## Usage
//!
//! ```rust,no_run
//! use site_console_provider::{create_backend, BackendConfig, MemorySeed};
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let backend = create_backend(&BackendConfig::Memory(MemorySeed::default()))?;
//!
//!     backend.publish("my-shop").await?;
//!     assert!(backend.is_published().await?);
//!     assert_eq!(backend.get_subdomain().await?.as_deref(), Some("my-shop"));
//!
//!     Ok(())
//! }
//! ```
//!
//! ## Error Handling
//!
//! All operations return [`Result<T, ProvisioningError>`](ProvisioningError). The
//! backend contract has no error taxonomy; the variants describe *how* a call failed
//! (network, timeout, refusal, unparseable response) for logging, and
//! [`ProvisioningError::is_retryable`] tells transient failures apart.

mod backends;
mod error;
mod factory;
mod http_client;
mod traits;
mod types;

pub use backends::{HttpGateway, InMemoryBackend};
pub use error::{ProvisioningError, Result};
pub use factory::create_backend;
pub use traits::ProvisioningBackend;
pub use types::{
    BackendConfig, DEFAULT_MAX_RETRIES, DEFAULT_TIMEOUT_SECS, HttpGatewayConfig, MemorySeed,
};
