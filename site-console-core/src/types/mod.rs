//! 类型定义模块

mod notice;
mod publication;

pub use notice::{Notice, NoticeLevel, Operation};
pub use publication::PublicationState;

use serde::{Deserialize, Serialize};

/// Base domain every subdomain hangs off.
pub const DEFAULT_PLATFORM_DOMAIN: &str = "caffeine.xyz";

/// Custom domain suggested while the server has none configured.
pub const DEFAULT_CUSTOM_DOMAIN: &str = "jpdigitalmarketing.in";

/// Server-confirmed site state, as last fetched from the backend.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ServerState {
    pub published: bool,
    pub subdomain: Option<String>,
    pub domain: Option<String>,
}

impl ServerState {
    /// 服务端确认的已发布子域名（仅在已发布时有意义）
    pub fn published_subdomain(&self) -> Option<&str> {
        if self.published {
            self.subdomain.as_deref().filter(|s| !s.is_empty())
        } else {
            None
        }
    }

    /// 已配置且非空的自定义域名
    pub fn configured_domain(&self) -> Option<&str> {
        self.domain.as_deref().filter(|d| !d.trim().is_empty())
    }
}

/// 控制台设置
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct ConsoleSettings {
    pub platform_domain: String,
    pub default_custom_domain: String,
}

impl Default for ConsoleSettings {
    fn default() -> Self {
        Self {
            platform_domain: DEFAULT_PLATFORM_DOMAIN.to_string(),
            default_custom_domain: DEFAULT_CUSTOM_DOMAIN.to_string(),
        }
    }
}

impl ConsoleSettings {
    /// `{subdomain}.{platform_domain}`
    pub fn platform_url(&self, subdomain: &str) -> String {
        format!("{subdomain}.{}", self.platform_domain)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn published_subdomain_requires_flag() {
        let state = ServerState {
            published: false,
            subdomain: Some("my-shop".into()),
            domain: None,
        };
        assert_eq!(state.published_subdomain(), None);

        let state = ServerState {
            published: true,
            ..state
        };
        assert_eq!(state.published_subdomain(), Some("my-shop"));
    }

    #[test]
    fn blank_domain_is_not_configured() {
        let state = ServerState {
            domain: Some("  ".into()),
            ..ServerState::default()
        };
        assert_eq!(state.configured_domain(), None);
    }

    #[test]
    fn settings_default_and_partial_json() {
        let settings: ConsoleSettings =
            serde_json::from_str(r#"{"platformDomain":"sites.test"}"#).unwrap();
        assert_eq!(settings.platform_domain, "sites.test");
        assert_eq!(settings.default_custom_domain, DEFAULT_CUSTOM_DOMAIN);
        assert_eq!(settings.platform_url("abc"), "abc.sites.test");
    }
}
