//! 本地草稿状态
//!
//! 用户正在编辑、尚未被服务端确认的表单字段。

use serde::Serialize;

use crate::types::PublicationState;
use crate::validation::{self, ValidationOutcome};

/// In-memory draft of the provisioning form.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ProvisioningDraft {
    candidate: String,
    outcome: Option<ValidationOutcome>,
    confirmed: Option<String>,
    submitted: bool,
    custom_domain: String,
    domain_touched: bool,
}

impl ProvisioningDraft {
    /// 初始草稿，自定义域名预填为 `default_domain`
    pub fn with_default_domain(default_domain: &str) -> Self {
        Self {
            custom_domain: default_domain.to_string(),
            ..Self::default()
        }
    }

    /// The text currently in the subdomain field.
    pub fn candidate(&self) -> &str {
        &self.candidate
    }

    /// Outcome of the last validation of the current candidate, if any.
    pub fn outcome(&self) -> Option<ValidationOutcome> {
        self.outcome
    }

    /// The subdomain the user validated (or the server published).
    pub fn confirmed(&self) -> Option<&str> {
        self.confirmed.as_deref()
    }

    pub fn custom_domain(&self) -> &str {
        &self.custom_domain
    }

    pub fn is_domain_touched(&self) -> bool {
        self.domain_touched
    }

    /// Validated, confirmed and not invalidated since.
    pub fn is_ready(&self) -> bool {
        self.submitted
            && self.confirmed.is_some()
            && self.outcome.is_some_and(ValidationOutcome::is_valid)
    }

    pub(crate) fn has_candidate(&self) -> bool {
        !self.candidate.trim().is_empty()
    }

    pub(crate) fn set_candidate(&mut self, text: &str) {
        self.candidate = text.to_string();
        self.outcome = None;
        self.confirmed = None;
        self.submitted = false;
    }

    pub(crate) fn validate(&mut self) -> ValidationOutcome {
        let outcome = validation::validate(&self.candidate);
        self.outcome = Some(outcome);
        if outcome.is_valid() {
            self.confirmed = Some(validation::normalize(&self.candidate));
            self.submitted = true;
        } else {
            self.confirmed = None;
            self.submitted = false;
        }
        outcome
    }

    pub(crate) fn clear_subdomain(&mut self) {
        self.set_candidate("");
    }

    /// 服务端已发布的子域名覆盖本地草稿
    pub(crate) fn adopt_published(&mut self, subdomain: &str) {
        self.candidate = subdomain.to_string();
        self.confirmed = Some(subdomain.to_string());
        self.outcome = Some(ValidationOutcome::Valid);
        self.submitted = true;
    }

    pub(crate) fn set_custom_domain(&mut self, text: &str, touched: bool) {
        self.custom_domain = text.to_string();
        self.domain_touched = touched;
    }

    /// `published` is the server flag.
    pub fn publication_state(&self, published: bool) -> PublicationState {
        if published {
            PublicationState::Published
        } else if matches!(self.outcome, Some(ValidationOutcome::Invalid(_))) {
            PublicationState::Invalid
        } else if self.is_ready() {
            PublicationState::Validated
        } else if self.has_candidate() {
            PublicationState::AwaitingValidation
        } else {
            PublicationState::NotStarted
        }
    }
}
