//! 配置服务
//!
//! 配置文件为 JSON，默认位于 `<config dir>/site-console/config.json`；文件不存在时使用默认值。

use std::fs;
use std::path::{Path, PathBuf};
use std::time::Duration;

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use site_console_core::{ConsoleSettings, DEFAULT_CUSTOM_DOMAIN, DEFAULT_PLATFORM_DOMAIN};
use site_console_provider::{BackendConfig, HttpGatewayConfig, MemorySeed};

use crate::view::theme::Theme;

const CONFIG_DIR_NAME: &str = "site-console";
const CONFIG_FILE_NAME: &str = "config.json";

/// 应用配置
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct ConsoleConfig {
    pub backend: BackendConfig,
    pub platform_domain: String,
    pub default_custom_domain: String,
    pub stale_time_secs: u64,
    pub theme: Theme,
}

impl Default for ConsoleConfig {
    fn default() -> Self {
        Self {
            backend: BackendConfig::default(),
            platform_domain: DEFAULT_PLATFORM_DOMAIN.to_string(),
            default_custom_domain: DEFAULT_CUSTOM_DOMAIN.to_string(),
            stale_time_secs: 300,
            theme: Theme::default(),
        }
    }
}

impl ConsoleConfig {
    pub fn settings(&self) -> ConsoleSettings {
        ConsoleSettings {
            platform_domain: self.platform_domain.clone(),
            default_custom_domain: self.default_custom_domain.clone(),
        }
    }

    pub fn stale_time(&self) -> Duration {
        Duration::from_secs(self.stale_time_secs)
    }

    /// 命令行参数覆盖配置文件
    pub fn apply_overrides(&mut self, backend_url: Option<&str>, offline: bool) {
        if offline {
            self.backend = BackendConfig::Memory(MemorySeed::default());
        } else if let Some(url) = backend_url {
            self.backend = match &self.backend {
                BackendConfig::Http(existing) => BackendConfig::Http(HttpGatewayConfig {
                    base_url: url.to_string(),
                    ..existing.clone()
                }),
                BackendConfig::Memory(_) => BackendConfig::Http(HttpGatewayConfig::new(url)),
            };
        }
    }

    /// 状态栏上显示的后端描述
    pub fn backend_label(&self) -> String {
        match &self.backend {
            BackendConfig::Http(http) => http.base_url.clone(),
            BackendConfig::Memory(_) => "offline (in-memory)".to_string(),
        }
    }
}

/// 配置服务 trait
pub trait ConfigService: Send + Sync {
    /// 加载配置
    fn load(&self) -> Result<ConsoleConfig>;

    /// 保存配置
    fn save(&self, config: &ConsoleConfig) -> Result<()>;
}

/// 本地配置服务
pub struct LocalConfigService {
    path: PathBuf,
}

impl LocalConfigService {
    pub fn new(path: PathBuf) -> Self {
        Self { path }
    }

    /// 使用平台默认配置目录
    pub fn from_default_location() -> Result<Self> {
        let dir = dirs::config_dir().context("Could not determine the user config directory")?;
        Ok(Self::new(dir.join(CONFIG_DIR_NAME).join(CONFIG_FILE_NAME)))
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl ConfigService for LocalConfigService {
    fn load(&self) -> Result<ConsoleConfig> {
        if !self.path.exists() {
            log::info!(
                "No config file at {}, using defaults",
                self.path.display()
            );
            return Ok(ConsoleConfig::default());
        }

        let raw = fs::read_to_string(&self.path)
            .with_context(|| format!("Failed to read {}", self.path.display()))?;
        let config = serde_json::from_str(&raw)
            .with_context(|| format!("Invalid config file {}", self.path.display()))?;
        log::info!("Loaded config from {}", self.path.display());
        Ok(config)
    }

    fn save(&self, config: &ConsoleConfig) -> Result<()> {
        if let Some(parent) = self.path.parent() {
            fs::create_dir_all(parent)
                .with_context(|| format!("Failed to create {}", parent.display()))?;
        }
        let json = serde_json::to_string_pretty(config)?;
        fs::write(&self.path, json)
            .with_context(|| format!("Failed to write {}", self.path.display()))?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn missing_file_yields_defaults() {
        let dir = tempfile::tempdir().unwrap();
        let service = LocalConfigService::new(dir.path().join("absent.json"));

        let config = service.load().unwrap();
        assert_eq!(config, ConsoleConfig::default());
        assert_eq!(config.stale_time(), Duration::from_secs(300));
        assert_eq!(config.settings(), ConsoleSettings::default());
    }

    #[test]
    fn save_then_load() {
        let dir = tempfile::tempdir().unwrap();
        let service = LocalConfigService::new(dir.path().join("nested").join(CONFIG_FILE_NAME));
        let config = ConsoleConfig {
            backend: BackendConfig::Http(HttpGatewayConfig::new("https://api.example.test/")),
            theme: Theme::Light,
            ..ConsoleConfig::default()
        };

        service.save(&config).unwrap();
        assert_eq!(service.load().unwrap(), config);
    }

    #[test]
    fn partial_file_keeps_other_defaults() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join(CONFIG_FILE_NAME);
        fs::write(
            &path,
            r#"{ "platformDomain": "sites.test", "backend": { "kind": "http", "base_url": "http://localhost:8080" } }"#,
        )
        .unwrap();

        let config = LocalConfigService::new(path).load().unwrap();
        assert_eq!(config.platform_domain, "sites.test");
        assert_eq!(config.default_custom_domain, DEFAULT_CUSTOM_DOMAIN);
        assert!(matches!(config.backend, BackendConfig::Http(_)));
    }

    #[test]
    fn invalid_file_is_an_error() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join(CONFIG_FILE_NAME);
        fs::write(&path, "{ not json").unwrap();

        assert!(LocalConfigService::new(path).load().is_err());
    }

    #[test]
    fn offline_overrides_backend_url() {
        let mut config = ConsoleConfig::default();
        config.apply_overrides(Some("http://localhost:8080"), true);
        assert!(matches!(config.backend, BackendConfig::Memory(_)));
    }

    #[test]
    fn backend_url_keeps_http_tuning() {
        let mut config = ConsoleConfig {
            backend: BackendConfig::Http(HttpGatewayConfig {
                base_url: "http://old".into(),
                timeout_secs: 3,
                max_retries: 5,
            }),
            ..ConsoleConfig::default()
        };
        config.apply_overrides(Some("http://new"), false);

        let BackendConfig::Http(http) = &config.backend else {
            panic!("expected http backend");
        };
        assert_eq!(http.base_url, "http://new");
        assert_eq!(http.timeout_secs, 3);
        assert_eq!(http.max_retries, 5);
        assert_eq!(config.backend_label(), "http://new");
    }
}
