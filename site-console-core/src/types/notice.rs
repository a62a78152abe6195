//! 一次性通知
//!
//! 每个操作的成功与失败都映射为一条带标题的通知，由展示层负责显示。

use chrono::{DateTime, Local};
use serde::Serialize;

use crate::error::{CoreError, PreconditionFailure};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum NoticeLevel {
    Success,
    Warning,
    Error,
}

/// User-facing operations that can produce a notice.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "camelCase")]
pub enum Operation {
    EditSubdomain,
    Validate,
    Publish,
    Unpublish,
    ConfigureDomain,
    ResetAll,
    Refresh,
}

impl Operation {
    pub fn failure_title(self) -> &'static str {
        match self {
            Self::EditSubdomain => "Subdomain Locked",
            Self::Validate => "Invalid Subdomain",
            Self::Publish => "Publication Failed",
            Self::Unpublish => "Unpublish Failed",
            Self::ConfigureDomain => "Configuration Failed",
            Self::ResetAll => "Reset Failed",
            Self::Refresh => "Refresh Failed",
        }
    }

    /// 远程调用失败时的统一描述（后端错误细节只进日志）
    fn remote_failure(self) -> &'static str {
        match self {
            Self::Publish => "An error occurred while publishing your site. Please try again.",
            Self::Unpublish => "An error occurred while unpublishing your site. Please try again.",
            Self::ConfigureDomain => {
                "An error occurred while configuring your custom domain. Please try again."
            }
            Self::ResetAll => {
                "An error occurred while resetting your site configuration. Please try again."
            }
            Self::Refresh | Self::EditSubdomain | Self::Validate => {
                "Could not load the site status. Please try again."
            }
        }
    }
}

/// A one-shot notification.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Notice {
    pub level: NoticeLevel,
    pub title: String,
    pub description: String,
    pub at: DateTime<Local>,
}

impl Notice {
    fn new(level: NoticeLevel, title: &str, description: impl Into<String>) -> Self {
        Self {
            level,
            title: title.to_string(),
            description: description.into(),
            at: Local::now(),
        }
    }

    /// 由失败的操作构造通知
    pub fn failure(op: Operation, err: &CoreError) -> Self {
        match err {
            CoreError::Precondition(PreconditionFailure::EmptyDomain) => {
                Self::new(NoticeLevel::Warning, "Invalid Domain", err.to_string())
            }
            CoreError::Validation(_) | CoreError::Precondition(_) => {
                Self::new(NoticeLevel::Warning, op.failure_title(), err.to_string())
            }
            CoreError::Provisioning(_) => {
                Self::new(NoticeLevel::Error, op.failure_title(), op.remote_failure())
            }
        }
    }

    pub fn validated(url: &str) -> Self {
        Self::new(
            NoticeLevel::Success,
            "Subdomain Validated",
            format!("{url} is ready to deploy."),
        )
    }

    pub fn published(url: &str) -> Self {
        Self::new(
            NoticeLevel::Success,
            "Site Published Successfully",
            format!("Your site is now live at {url}"),
        )
    }

    pub fn unpublished() -> Self {
        Self::new(
            NoticeLevel::Success,
            "Site Unpublished",
            "Your site has been taken offline successfully.",
        )
    }

    pub fn domain_configured(domain: &str) -> Self {
        Self::new(
            NoticeLevel::Success,
            "Custom Domain Configured",
            format!("Your custom domain {domain} has been set as the primary URL."),
        )
    }

    pub fn reset_done() -> Self {
        Self::new(
            NoticeLevel::Success,
            "Site Configuration Reset",
            "All site configuration has been deleted successfully.",
        )
    }

    pub fn refreshed() -> Self {
        Self::new(
            NoticeLevel::Success,
            "Status Refreshed",
            "Site status reloaded from the server.",
        )
    }

    pub fn is_error(&self) -> bool {
        self.level == NoticeLevel::Error
    }
}

#[cfg(test)]
mod tests {
    use std::collections::HashSet;

    use site_console_provider::ProvisioningError;

    use super::*;
    use crate::validation::SubdomainRejection;

    fn remote() -> CoreError {
        CoreError::from(ProvisioningError::Unknown {
            backend: "mock".into(),
            raw_message: "boom".into(),
        })
    }

    #[test]
    fn remote_failures_hide_backend_detail() {
        let notice = Notice::failure(Operation::Publish, &remote());
        assert_eq!(notice.title, "Publication Failed");
        assert!(!notice.description.contains("boom"));
        assert!(notice.is_error());
    }

    #[test]
    fn empty_domain_has_its_own_title() {
        let err = CoreError::from(PreconditionFailure::EmptyDomain);
        let notice = Notice::failure(Operation::ConfigureDomain, &err);
        assert_eq!(notice.title, "Invalid Domain");
        assert_eq!(notice.description, "Please enter a valid custom domain.");
        assert_eq!(notice.level, NoticeLevel::Warning);
    }

    #[test]
    fn every_failure_is_distinct() {
        let cases = [
            Notice::failure(Operation::Publish, &remote()),
            Notice::failure(Operation::Unpublish, &remote()),
            Notice::failure(Operation::ConfigureDomain, &remote()),
            Notice::failure(Operation::ResetAll, &remote()),
            Notice::failure(Operation::Refresh, &remote()),
            Notice::failure(
                Operation::Publish,
                &PreconditionFailure::NoConfirmedSubdomain.into(),
            ),
            Notice::failure(
                Operation::ConfigureDomain,
                &PreconditionFailure::EmptyDomain.into(),
            ),
            Notice::failure(Operation::Validate, &SubdomainRejection::TooShort.into()),
            Notice::failure(Operation::Validate, &SubdomainRejection::Reserved.into()),
        ];

        let distinct: HashSet<(String, String)> = cases
            .iter()
            .map(|n| (n.title.clone(), n.description.clone()))
            .collect();
        assert_eq!(distinct.len(), cases.len());
    }

    #[test]
    fn published_mentions_url() {
        let notice = Notice::published("my-shop.caffeine.xyz");
        assert_eq!(notice.level, NoticeLevel::Success);
        assert!(notice.description.ends_with("my-shop.caffeine.xyz"));
    }
}
