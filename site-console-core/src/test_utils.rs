//! 测试辅助模块
//!
//! 提供 mock 后端和便捷的测试工厂方法。

use std::collections::{HashMap, HashSet};
use std::sync::Arc;

use async_trait::async_trait;
use site_console_provider::{ProvisioningBackend, ProvisioningError, Result};
use tokio::sync::{Notify, RwLock};

use crate::cache::DEFAULT_STALE_TIME;
use crate::controller::ProvisioningController;
use crate::services::ProvisioningService;
use crate::types::{ConsoleSettings, ServerState};

/// 后端调用种类
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum MockCall {
    ConfigureDomain,
    GetDomain,
    GetSubdomain,
    IsPublished,
    Publish,
    ResetSiteStorage,
    Unpublish,
}

// ===== MockBackend =====

pub struct MockBackend {
    state: RwLock<ServerState>,
    calls: RwLock<HashMap<MockCall, usize>>,
    /// 这些调用返回错误（不改变状态）
    failing: RwLock<HashSet<MockCall>>,
    /// 如果 Some，读操作会等待 notify 之后再返回
    read_gate: RwLock<Option<Arc<Notify>>>,
}

impl MockBackend {
    pub fn new() -> Self {
        Self::with_state(ServerState::default())
    }

    pub fn with_state(state: ServerState) -> Self {
        Self {
            state: RwLock::new(state),
            calls: RwLock::new(HashMap::new()),
            failing: RwLock::new(HashSet::new()),
            read_gate: RwLock::new(None),
        }
    }

    pub fn published(subdomain: &str, domain: Option<&str>) -> Self {
        Self::with_state(ServerState {
            published: true,
            subdomain: Some(subdomain.to_string()),
            domain: domain.map(str::to_string),
        })
    }

    pub async fn calls(&self, call: MockCall) -> usize {
        self.calls.read().await.get(&call).copied().unwrap_or(0)
    }

    pub async fn total_calls(&self) -> usize {
        self.calls.read().await.values().sum()
    }

    pub async fn fail(&self, call: MockCall) {
        self.failing.write().await.insert(call);
    }

    pub async fn recover(&self, call: MockCall) {
        self.failing.write().await.remove(&call);
    }

    pub async fn set_read_gate(&self, gate: Option<Arc<Notify>>) {
        *self.read_gate.write().await = gate;
    }

    pub async fn state(&self) -> ServerState {
        self.state.read().await.clone()
    }

    /// 模拟其他会话直接修改服务端状态
    pub async fn set_state(&self, state: ServerState) {
        *self.state.write().await = state;
    }

    async fn enter(&self, call: MockCall) -> Result<()> {
        *self.calls.write().await.entry(call).or_insert(0) += 1;

        let gate = self.read_gate.read().await.clone();
        if let Some(gate) = gate {
            gate.notified().await;
        } else {
            tokio::task::yield_now().await;
        }

        if self.failing.read().await.contains(&call) {
            return Err(ProvisioningError::NetworkError {
                backend: "mock".to_string(),
                detail: format!("{call:?} failed"),
            });
        }
        Ok(())
    }
}

#[async_trait]
impl ProvisioningBackend for MockBackend {
    fn id(&self) -> &'static str {
        "mock"
    }

    async fn configure_domain(&self, domain: &str) -> Result<()> {
        self.enter(MockCall::ConfigureDomain).await?;
        self.state.write().await.domain = Some(domain.to_string());
        Ok(())
    }

    async fn get_domain(&self) -> Result<Option<String>> {
        self.enter(MockCall::GetDomain).await?;
        Ok(self.state.read().await.domain.clone())
    }

    async fn get_subdomain(&self) -> Result<Option<String>> {
        self.enter(MockCall::GetSubdomain).await?;
        Ok(self.state.read().await.subdomain.clone())
    }

    async fn is_published(&self) -> Result<bool> {
        self.enter(MockCall::IsPublished).await?;
        Ok(self.state.read().await.published)
    }

    async fn publish(&self, subdomain: &str) -> Result<()> {
        self.enter(MockCall::Publish).await?;
        let mut state = self.state.write().await;
        state.published = true;
        state.subdomain = Some(subdomain.to_string());
        Ok(())
    }

    async fn reset_site_storage(&self) -> Result<()> {
        self.enter(MockCall::ResetSiteStorage).await?;
        *self.state.write().await = ServerState::default();
        Ok(())
    }

    async fn unpublish(&self) -> Result<()> {
        self.enter(MockCall::Unpublish).await?;
        self.state.write().await.published = false;
        Ok(())
    }
}

// ===== 工厂方法 =====

/// 创建测试用 `ProvisioningController`
pub fn create_test_controller(
    backend: MockBackend,
) -> (ProvisioningController, Arc<MockBackend>) {
    let backend = Arc::new(backend);
    let service = Arc::new(ProvisioningService::new(
        backend.clone(),
        DEFAULT_STALE_TIME,
    ));
    let controller = ProvisioningController::new(service, ConsoleSettings::default());
    (controller, backend)
}
