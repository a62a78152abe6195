//! 测试辅助模块

use std::sync::Arc;

use site_console_core::{
    ConsoleSettings, ProvisioningController, ProvisioningService, DEFAULT_STALE_TIME,
};
use site_console_provider::{InMemoryBackend, MemorySeed};

use crate::model::App;
use crate::update;

/// 使用内存后端创建 App（未加载服务端状态）
pub fn offline_app_with(seed: MemorySeed) -> App {
    let backend = Arc::new(InMemoryBackend::with_seed(seed));
    let service = Arc::new(ProvisioningService::new(backend, DEFAULT_STALE_TIME));
    let controller = ProvisioningController::new(service, ConsoleSettings::default());
    App::new(controller, "offline (in-memory)")
}

pub fn offline_app() -> App {
    offline_app_with(MemorySeed::default())
}

/// 创建 App 并完成首次加载
pub async fn loaded_app_with(seed: MemorySeed) -> App {
    let mut app = offline_app_with(seed);
    update::initial_load(&mut app).await;
    app
}

pub async fn loaded_app() -> App {
    loaded_app_with(MemorySeed::default()).await
}
