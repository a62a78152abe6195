//! Site Console Core Library
//!
//! Provides the provisioning logic behind the console, including:
//! - Subdomain validation rules
//! - A query cache over the remote provisioning backend (de-duplication, 5 minute freshness,
//!   invalidation on writes)
//! - The view-state controller that owns the draft form and reconciles it with the server
//!
//! The library does not render anything; the presentation layer drives
//! [`ProvisioningController`] and shows its derived state.

pub mod cache;
pub mod controller;
pub mod error;
pub mod services;
pub mod types;
pub mod validation;

#[cfg(test)]
mod test_utils;

// Re-export common types
pub use cache::{QueryClient, QueryKey, DEFAULT_STALE_TIME};
pub use controller::{ProvisioningController, ProvisioningDraft};
pub use error::{CoreError, CoreResult, PreconditionFailure};
pub use services::ProvisioningService;
pub use types::{
    ConsoleSettings, Notice, NoticeLevel, Operation, PublicationState, ServerState,
    DEFAULT_CUSTOM_DOMAIN, DEFAULT_PLATFORM_DOMAIN,
};
pub use validation::{normalize, validate, SubdomainRejection, ValidationOutcome};
