use std::fmt;

use serde::Serialize;

/// Where the site stands in the validate → publish flow.
///
/// Always derived from the draft and the server flag, never stored.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "camelCase")]
pub enum PublicationState {
    NotStarted,
    AwaitingValidation,
    Validated,
    Published,
    Invalid,
}

impl PublicationState {
    pub fn label(self) -> &'static str {
        match self {
            Self::NotStarted => "Not Started",
            Self::AwaitingValidation => "Awaiting Validation",
            Self::Validated => "Ready to Deploy",
            Self::Published => "Published Live",
            Self::Invalid => "Invalid",
        }
    }

    pub fn description(self) -> &'static str {
        match self {
            Self::NotStarted => "Enter a subdomain to begin",
            Self::AwaitingValidation => "Validate the subdomain to check it",
            Self::Validated => "Subdomain validated successfully",
            Self::Published => "Your site is live in production",
            Self::Invalid => "Please correct the errors above",
        }
    }

    pub fn is_published(self) -> bool {
        matches!(self, Self::Published)
    }
}

impl fmt::Display for PublicationState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}
