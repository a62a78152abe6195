//! Subdomain naming rules
//!
//! A candidate is normalized (trimmed, lowercased) and then checked in a fixed order;
//! the first failing rule decides the rejection. Nothing here touches the backend.

use serde::Serialize;
use thiserror::Error;

/// The one subdomain that can never be claimed.
pub const RESERVED_SUBDOMAIN: &str = "jpdigitalmarketingropar";

/// Minimum subdomain length, in characters.
pub const MIN_SUBDOMAIN_LEN: usize = 3;

/// Maximum subdomain length, in characters (a single DNS label).
pub const MAX_SUBDOMAIN_LEN: usize = 63;

/// Why a candidate subdomain was rejected.
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum SubdomainRejection {
    #[error("Subdomain cannot be empty.")]
    Empty,

    #[error("Subdomain must be at least 3 characters long.")]
    TooShort,

    #[error("Subdomain cannot exceed 63 characters.")]
    TooLong,

    #[error("Subdomain can only contain lowercase letters, numbers, and hyphens.")]
    InvalidCharacters,

    #[error("Subdomain cannot start or end with a hyphen.")]
    EdgeHyphen,

    #[error("Subdomain cannot contain consecutive hyphens.")]
    ConsecutiveHyphens,

    #[error("The subdomain \"jpdigitalmarketingropar\" is already in use. Please choose a different name.")]
    Reserved,
}

/// Result of running the naming rules over a candidate.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(tag = "status", content = "reason", rename_all = "snake_case")]
pub enum ValidationOutcome {
    Valid,
    Invalid(SubdomainRejection),
}

impl ValidationOutcome {
    pub fn is_valid(self) -> bool {
        matches!(self, Self::Valid)
    }

    pub fn rejection(self) -> Option<SubdomainRejection> {
        match self {
            Self::Valid => None,
            Self::Invalid(reason) => Some(reason),
        }
    }
}

impl From<Result<(), SubdomainRejection>> for ValidationOutcome {
    fn from(result: Result<(), SubdomainRejection>) -> Self {
        match result {
            Ok(()) => Self::Valid,
            Err(reason) => Self::Invalid(reason),
        }
    }
}

/// Canonical form of a subdomain: trimmed and lowercased.
pub fn normalize(candidate: &str) -> String {
    candidate.trim().to_lowercase()
}

/// Run the naming rules over `candidate`.
pub fn validate(candidate: &str) -> ValidationOutcome {
    check(&normalize(candidate)).into()
}

fn check(name: &str) -> Result<(), SubdomainRejection> {
    if name.is_empty() {
        return Err(SubdomainRejection::Empty);
    }

    let len = name.chars().count();
    if len < MIN_SUBDOMAIN_LEN {
        return Err(SubdomainRejection::TooShort);
    }
    if len > MAX_SUBDOMAIN_LEN {
        return Err(SubdomainRejection::TooLong);
    }

    if !name
        .chars()
        .all(|c| c.is_ascii_lowercase() || c.is_ascii_digit() || c == '-')
    {
        return Err(SubdomainRejection::InvalidCharacters);
    }

    if name.starts_with('-') || name.ends_with('-') {
        return Err(SubdomainRejection::EdgeHyphen);
    }

    if name.contains("--") {
        return Err(SubdomainRejection::ConsecutiveHyphens);
    }

    if name == RESERVED_SUBDOMAIN {
        return Err(SubdomainRejection::Reserved);
    }

    Ok(())
}
