use async_trait::async_trait;

use crate::error::Result;

/// 远程站点配置后端 Trait
///
/// All durable provisioning state (published flag, subdomain, custom domain) lives
/// behind this interface. Implementations own transport and persistence; callers only
/// see these seven operations plus an identifier for logging.
#[async_trait]
pub trait ProvisioningBackend: Send + Sync {
    /// 后端标识符（用于日志）
    fn id(&self) -> &'static str;

    /// 设置自定义域名
    async fn configure_domain(&self, domain: &str) -> Result<()>;

    /// 获取当前配置的自定义域名
    async fn get_domain(&self) -> Result<Option<String>>;

    /// 获取当前发布的子域名
    async fn get_subdomain(&self) -> Result<Option<String>>;

    /// 站点是否已发布
    async fn is_published(&self) -> Result<bool>;

    /// 以指定子域名永久发布站点
    async fn publish(&self, subdomain: &str) -> Result<()>;

    /// 清除所有服务端配置
    async fn reset_site_storage(&self) -> Result<()>;

    /// 下线站点（保留域名配置）
    async fn unpublish(&self) -> Result<()>;
}
