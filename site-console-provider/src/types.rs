use serde::{Deserialize, Serialize};

/// Default request timeout for the HTTP gateway, in seconds.
pub const DEFAULT_TIMEOUT_SECS: u64 = 15;

/// Default retry budget for idempotent reads.
pub const DEFAULT_MAX_RETRIES: u32 = 2;

/// Backend selection, as written in the console configuration file.
///
/// ```json
/// { "kind": "http", "base_url": "https://provisioning.example.net/api/", "max_retries": 3 }
/// { "kind": "memory" }
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "lowercase")]
pub enum BackendConfig {
    /// Talk to the provisioning gateway over HTTP.
    Http(HttpGatewayConfig),
    /// Keep all state in process memory (offline mode).
    Memory(MemorySeed),
}

impl Default for BackendConfig {
    fn default() -> Self {
        Self::Memory(MemorySeed::default())
    }
}

/// HTTP gateway connection settings.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct HttpGatewayConfig {
    /// Base URL every operation path is joined onto.
    pub base_url: String,
    /// Per-request timeout in seconds.
    #[serde(default = "default_timeout_secs")]
    pub timeout_secs: u64,
    /// Maximum retries for read operations (0 disables retrying).
    #[serde(default = "default_max_retries")]
    pub max_retries: u32,
}

impl HttpGatewayConfig {
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            base_url: base_url.into(),
            timeout_secs: DEFAULT_TIMEOUT_SECS,
            max_retries: DEFAULT_MAX_RETRIES,
        }
    }
}

/// Initial server state for the in-memory backend.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct MemorySeed {
    pub published: bool,
    pub subdomain: Option<String>,
    pub domain: Option<String>,
}

fn default_timeout_secs() -> u64 {
    DEFAULT_TIMEOUT_SECS
}

fn default_max_retries() -> u32 {
    DEFAULT_MAX_RETRIES
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn http_config_defaults_fill_missing_fields() {
        let cfg: BackendConfig =
            serde_json::from_str(r#"{"kind":"http","base_url":"http://localhost:8080/"}"#)
                .unwrap();
        assert_eq!(
            cfg,
            BackendConfig::Http(HttpGatewayConfig {
                base_url: "http://localhost:8080/".to_string(),
                timeout_secs: DEFAULT_TIMEOUT_SECS,
                max_retries: DEFAULT_MAX_RETRIES,
            })
        );
    }

    #[test]
    fn memory_config_accepts_seed() {
        let cfg: BackendConfig =
            serde_json::from_str(r#"{"kind":"memory","published":true,"subdomain":"shop"}"#)
                .unwrap();
        let BackendConfig::Memory(seed) = cfg else {
            panic!("expected memory backend");
        };
        assert!(seed.published);
        assert_eq!(seed.subdomain.as_deref(), Some("shop"));
        assert_eq!(seed.domain, None);
    }

    #[test]
    fn default_backend_is_memory() {
        assert_eq!(
            BackendConfig::default(),
            BackendConfig::Memory(MemorySeed::default())
        );
    }
}
