//! HTTP 网关后端
//!
//! Maps each backend operation onto one request against the gateway's base URL:
//!
//! | Operation | Request |
//! |---|---|
//! | `is_published` | `GET published` → `{"published": bool}` |
//! | `get_subdomain` | `GET subdomain` → `{"subdomain": string \| null}` |
//! | `get_domain` | `GET domain` → `{"domain": string \| null}` |
//! | `publish` | `POST publish` with `{"subdomain": ...}` |
//! | `unpublish` | `POST unpublish` |
//! | `configure_domain` | `PUT domain` with `{"domain": ...}` |
//! | `reset_site_storage` | `POST reset` |

use std::time::Duration;

use async_trait::async_trait;
use reqwest::{Client, Method, RequestBuilder};
use serde::{Deserialize, Serialize};
use url::Url;

use crate::error::{ProvisioningError, Result};
use crate::http_client::HttpUtils;
use crate::traits::ProvisioningBackend;
use crate::types::HttpGatewayConfig;

const BACKEND_ID: &str = "http";

#[derive(Debug, Deserialize)]
struct PublishedResponse {
    published: bool,
}

#[derive(Debug, Deserialize)]
struct SubdomainResponse {
    subdomain: Option<String>,
}

#[derive(Debug, Deserialize)]
struct DomainResponse {
    domain: Option<String>,
}

#[derive(Debug, Serialize)]
struct PublishRequest<'a> {
    subdomain: &'a str,
}

#[derive(Debug, Serialize)]
struct ConfigureDomainRequest<'a> {
    domain: &'a str,
}

/// Provisioning backend reached over HTTP.
pub struct HttpGateway {
    client: Client,
    base_url: Url,
    max_retries: u32,
}

impl HttpGateway {
    /// 创建 HTTP 网关后端
    pub fn new(config: &HttpGatewayConfig) -> Result<Self> {
        let base_url = parse_base_url(&config.base_url)?;
        let client = Client::builder()
            .timeout(Duration::from_secs(config.timeout_secs))
            .build()
            .map_err(|e| ProvisioningError::InvalidConfig {
                backend: BACKEND_ID.to_string(),
                detail: format!("failed to build HTTP client: {e}"),
            })?;

        Ok(Self {
            client,
            base_url,
            max_retries: config.max_retries,
        })
    }

    fn request(&self, method: Method, path: &str) -> Result<RequestBuilder> {
        let url = self
            .base_url
            .join(path)
            .map_err(|e| ProvisioningError::InvalidConfig {
                backend: BACKEND_ID.to_string(),
                detail: format!("cannot join '{path}' onto base URL: {e}"),
            })?;
        Ok(self.client.request(method, url))
    }

    /// Reads are idempotent and go through the retry loop.
    async fn read<T: for<'de> Deserialize<'de>>(&self, path: &str) -> Result<T> {
        let req = self.request(Method::GET, path)?;
        let (_, text) = HttpUtils::execute_request_with_retry(
            req,
            BACKEND_ID,
            &format!("GET {path}"),
            self.max_retries,
        )
        .await?;
        HttpUtils::parse_json(&text, BACKEND_ID)
    }

    /// Writes are sent exactly once.
    async fn write<B: Serialize + Sync>(
        &self,
        method: Method,
        path: &str,
        body: Option<&B>,
    ) -> Result<()> {
        let operation = format!("{method} {path}");
        let mut req = self.request(method, path)?;
        if let Some(body) = body {
            req = req.json(body);
        }
        HttpUtils::execute_request(req, BACKEND_ID, &operation).await?;
        Ok(())
    }
}

#[async_trait]
impl ProvisioningBackend for HttpGateway {
    fn id(&self) -> &'static str {
        BACKEND_ID
    }

    async fn configure_domain(&self, domain: &str) -> Result<()> {
        self.write(Method::PUT, "domain", Some(&ConfigureDomainRequest { domain }))
            .await
    }

    async fn get_domain(&self) -> Result<Option<String>> {
        let resp: DomainResponse = self.read("domain").await?;
        Ok(resp.domain)
    }

    async fn get_subdomain(&self) -> Result<Option<String>> {
        let resp: SubdomainResponse = self.read("subdomain").await?;
        Ok(resp.subdomain)
    }

    async fn is_published(&self) -> Result<bool> {
        let resp: PublishedResponse = self.read("published").await?;
        Ok(resp.published)
    }

    async fn publish(&self, subdomain: &str) -> Result<()> {
        self.write(Method::POST, "publish", Some(&PublishRequest { subdomain }))
            .await
    }

    async fn reset_site_storage(&self) -> Result<()> {
        self.write::<()>(Method::POST, "reset", None).await
    }

    async fn unpublish(&self) -> Result<()> {
        self.write::<()>(Method::POST, "unpublish", None).await
    }
}

/// Parse the base URL and make sure relative joins append instead of replacing the
/// last path segment.
fn parse_base_url(raw: &str) -> Result<Url> {
    let trimmed = raw.trim();
    let with_slash = if trimmed.ends_with('/') {
        trimmed.to_string()
    } else {
        format!("{trimmed}/")
    };

    let url = Url::parse(&with_slash).map_err(|e| ProvisioningError::InvalidConfig {
        backend: BACKEND_ID.to_string(),
        detail: format!("invalid base URL '{trimmed}': {e}"),
    })?;

    if !matches!(url.scheme(), "http" | "https") {
        return Err(ProvisioningError::InvalidConfig {
            backend: BACKEND_ID.to_string(),
            detail: format!("unsupported URL scheme '{}'", url.scheme()),
        });
    }

    Ok(url)
}
