//! Unified error type definition

use serde::Serialize;
use thiserror::Error;

use crate::validation::SubdomainRejection;

// Re-export library error type
pub use site_console_provider::ProvisioningError;

/// A local guard that stopped an operation before it reached the backend.
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum PreconditionFailure {
    #[error("No subdomain confirmed for publication.")]
    NoConfirmedSubdomain,

    #[error("Validate the subdomain before publishing.")]
    NotValidated,

    #[error("The site is already published.")]
    AlreadyPublished,

    #[error("The site is not published.")]
    NotPublished,

    #[error("Please enter a valid custom domain.")]
    EmptyDomain,

    #[error("Choose a different name before editing the confirmed subdomain.")]
    SubdomainLocked,
}

/// Core layer error type
#[derive(Error, Debug, Clone, Serialize)]
#[serde(tag = "code", content = "details")]
pub enum CoreError {
    /// The candidate subdomain broke a naming rule
    #[error("{0}")]
    Validation(SubdomainRejection),

    /// The operation's local precondition does not hold
    #[error("{0}")]
    Precondition(PreconditionFailure),

    /// The remote backend call failed
    #[error("{0}")]
    Provisioning(#[from] ProvisioningError),
}

impl CoreError {
    /// Whether this is expected behaviour (user input, guarded action), used for log levels.
    ///
    /// `true` should be logged at `warn`, `false` at `error`.
    #[must_use]
    pub fn is_expected(&self) -> bool {
        match self {
            Self::Validation(_) | Self::Precondition(_) => true,
            Self::Provisioning(_) => false,
        }
    }

    /// Whether the failure came from the remote backend.
    #[must_use]
    pub fn is_remote(&self) -> bool {
        matches!(self, Self::Provisioning(_))
    }
}

impl From<PreconditionFailure> for CoreError {
    fn from(failure: PreconditionFailure) -> Self {
        Self::Precondition(failure)
    }
}

impl From<SubdomainRejection> for CoreError {
    fn from(reason: SubdomainRejection) -> Self {
        Self::Validation(reason)
    }
}

/// Core layer Result type alias
pub type CoreResult<T> = std::result::Result<T, CoreError>;
