//! 站点发布服务
//!
//! 在远程后端之上加一层查询缓存：读操作走 [`QueryClient`]，写操作成功后失效对应的缓存键。

use std::sync::Arc;
use std::time::Duration;

use futures::FutureExt;
use site_console_provider::{ProvisioningBackend, ProvisioningError};

use crate::cache::{QueryClient, QueryKey};
use crate::error::CoreResult;
use crate::types::ServerState;

/// 发布服务
pub struct ProvisioningService {
    backend: Arc<dyn ProvisioningBackend>,
    queries: QueryClient,
}

impl ProvisioningService {
    #[must_use]
    pub fn new(backend: Arc<dyn ProvisioningBackend>, stale_time: Duration) -> Self {
        Self {
            backend,
            queries: QueryClient::new(stale_time),
        }
    }

    pub fn backend_id(&self) -> &'static str {
        self.backend.id()
    }

    pub fn queries(&self) -> &QueryClient {
        &self.queries
    }

    // ===== 查询 =====

    pub async fn is_published(&self) -> CoreResult<bool> {
        let backend = Arc::clone(&self.backend);
        let result = self
            .queries
            .is_published
            .fetch(move || async move { backend.is_published().await }.boxed())
            .await;
        self.read_result(QueryKey::IsPublished, result)
    }

    pub async fn subdomain(&self) -> CoreResult<Option<String>> {
        let backend = Arc::clone(&self.backend);
        let result = self
            .queries
            .subdomain
            .fetch(move || async move { backend.get_subdomain().await }.boxed())
            .await;
        self.read_result(QueryKey::Subdomain, result)
    }

    pub async fn domain(&self) -> CoreResult<Option<String>> {
        let backend = Arc::clone(&self.backend);
        let result = self
            .queries
            .domain
            .fetch(move || async move { backend.get_domain().await }.boxed())
            .await;
        self.read_result(QueryKey::Domain, result)
    }

    /// 同时读取三个查询
    pub async fn server_state(&self) -> CoreResult<ServerState> {
        let (published, subdomain, domain) =
            futures::try_join!(self.is_published(), self.subdomain(), self.domain())?;
        Ok(ServerState {
            published,
            subdomain,
            domain,
        })
    }

    // ===== 变更 =====

    pub async fn publish(&self, subdomain: &str) -> CoreResult<()> {
        log::info!("[{}] Publishing subdomain '{subdomain}'", self.backend_id());
        self.write_result("publish", self.backend.publish(subdomain).await)?;
        self.queries
            .invalidate(&[QueryKey::IsPublished, QueryKey::Subdomain])
            .await;
        Ok(())
    }

    /// 下线站点；域名配置保留在后端，但三个查询都会失效
    pub async fn unpublish(&self) -> CoreResult<()> {
        log::info!("[{}] Unpublishing site", self.backend_id());
        self.write_result("unpublish", self.backend.unpublish().await)?;
        self.queries.invalidate_all().await;
        Ok(())
    }

    pub async fn configure_domain(&self, domain: &str) -> CoreResult<()> {
        log::info!("[{}] Configuring custom domain '{domain}'", self.backend_id());
        self.write_result(
            "configure_domain",
            self.backend.configure_domain(domain).await,
        )?;
        self.queries.invalidate(&[QueryKey::Domain]).await;
        Ok(())
    }

    pub async fn reset_site_storage(&self) -> CoreResult<()> {
        log::warn!("[{}] Resetting all site storage", self.backend_id());
        self.write_result("reset_site_storage", self.backend.reset_site_storage().await)?;
        self.queries.invalidate_all().await;
        Ok(())
    }

    fn read_result<T>(&self, key: QueryKey, result: Result<T, ProvisioningError>) -> CoreResult<T> {
        result.map_err(|e| {
            log_failure(&format!("Query {key}"), &e);
            e.into()
        })
    }

    fn write_result(
        &self,
        operation: &str,
        result: Result<(), ProvisioningError>,
    ) -> CoreResult<()> {
        result.map_err(|e| {
            log_failure(operation, &e);
            e.into()
        })
    }
}

/// 暂时性错误记为 warn，其余记为 error；日志前缀取自产生错误的后端
fn log_failure(what: &str, e: &ProvisioningError) {
    if e.is_retryable() {
        log::warn!("[{}] {what} failed (transient): {e}", e.backend());
    } else {
        log::error!("[{}] {what} failed: {e}", e.backend());
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cache::DEFAULT_STALE_TIME;
    use crate::test_utils::{MockBackend, MockCall};

    fn service(mock: &Arc<MockBackend>) -> ProvisioningService {
        ProvisioningService::new(mock.clone(), DEFAULT_STALE_TIME)
    }

    #[tokio::test]
    async fn server_state_reads_each_query_once() {
        let mock = Arc::new(MockBackend::published("my-shop", Some("shop.example.in")));
        let svc = service(&mock);

        let state = svc.server_state().await.unwrap();
        let again = svc.server_state().await.unwrap();

        assert_eq!(state, again);
        assert!(state.published);
        assert_eq!(state.subdomain.as_deref(), Some("my-shop"));
        assert_eq!(mock.calls(MockCall::IsPublished).await, 1);
        assert_eq!(mock.calls(MockCall::GetSubdomain).await, 1);
        assert_eq!(mock.calls(MockCall::GetDomain).await, 1);
    }

    #[tokio::test]
    async fn concurrent_reads_are_deduplicated() {
        let mock = Arc::new(MockBackend::new());
        let svc = service(&mock);

        let (a, b) = futures::join!(svc.is_published(), svc.is_published());
        assert!(!a.unwrap() && !b.unwrap());
        assert_eq!(mock.calls(MockCall::IsPublished).await, 1);
    }

    #[tokio::test]
    async fn publish_invalidates_flag_and_subdomain_only() {
        let mock = Arc::new(MockBackend::new());
        let svc = service(&mock);
        svc.server_state().await.unwrap();

        svc.publish("my-shop").await.unwrap();

        let queries = svc.queries();
        assert!(!queries.is_fresh(QueryKey::IsPublished).await);
        assert!(!queries.is_fresh(QueryKey::Subdomain).await);
        assert!(queries.is_fresh(QueryKey::Domain).await);
    }

    #[tokio::test]
    async fn configure_domain_invalidates_domain_only() {
        let mock = Arc::new(MockBackend::new());
        let svc = service(&mock);
        svc.server_state().await.unwrap();

        svc.configure_domain("shop.example.in").await.unwrap();

        let queries = svc.queries();
        assert!(queries.is_fresh(QueryKey::IsPublished).await);
        assert!(queries.is_fresh(QueryKey::Subdomain).await);
        assert!(!queries.is_fresh(QueryKey::Domain).await);
        assert_eq!(
            svc.domain().await.unwrap().as_deref(),
            Some("shop.example.in")
        );
    }

    #[tokio::test]
    async fn unpublish_and_reset_invalidate_everything() {
        let mock = Arc::new(MockBackend::published("my-shop", None));
        let svc = service(&mock);

        svc.server_state().await.unwrap();
        svc.unpublish().await.unwrap();
        for key in QueryKey::ALL {
            assert!(!svc.queries().is_fresh(key).await, "{key}");
        }

        svc.server_state().await.unwrap();
        svc.reset_site_storage().await.unwrap();
        for key in QueryKey::ALL {
            assert!(!svc.queries().is_fresh(key).await, "{key}");
        }
    }

    #[tokio::test]
    async fn failed_query_names_backend_and_is_not_cached() {
        let mock = Arc::new(MockBackend::new());
        let svc = service(&mock);

        mock.fail(MockCall::GetDomain).await;
        let err = svc.domain().await.unwrap_err();
        let crate::error::CoreError::Provisioning(remote) = &err else {
            panic!("expected a remote failure, got {err:?}");
        };
        assert_eq!(remote.backend(), svc.backend_id());

        mock.recover(MockCall::GetDomain).await;
        assert_eq!(svc.domain().await.unwrap(), None);
        assert_eq!(mock.calls(MockCall::GetDomain).await, 2);
    }

    #[tokio::test]
    async fn failed_write_keeps_cache() {
        let mock = Arc::new(MockBackend::new());
        let svc = service(&mock);
        svc.server_state().await.unwrap();

        mock.fail(MockCall::Publish).await;
        assert!(svc.publish("my-shop").await.unwrap_err().is_remote());
        assert!(svc.queries().is_fresh(QueryKey::IsPublished).await);
    }
}
