//! Site Console TUI
//!
//! ## 架构
//!
//! 采用 Elm Architecture (TEA) 模式：
//! - **Model**: 应用状态 (`model/`)
//! - **Message**: 事件消息 (`message/`)
//! - **Update**: 状态更新 (`update/`)
//! - **View**: UI 渲染 (`view/`)
//! - **Event**: 输入处理 (`event/`)
//!
//! 业务逻辑（校验、缓存、草稿与服务端状态的协调）全部在 `site_console_core` 中，
//! 远程调用由 `site_console_provider` 的后端完成。
//!
//!
//! main.rs
//! 程序入口
//!
//! 其执行：
//! fn `main()` {
//!
//!     Cli::parse()            // 解析命令行
//!     init_logging()          // 日志写入文件
//!     load config             // 读取配置文件并应用命令行覆盖
//!     create_backend()        // HTTP 网关或内存后端
//!     init_terminal()         // 原始模式 + 备用屏幕
//!     app::run()              // 运行 app.rs 主循环
//!     restore_terminal()      // 无论成功与否，都恢复终端
//!
//! }

mod app;
mod cli;
mod config;
mod event;
mod logging;
mod message;
mod model;
mod update;
mod util;
mod view;

#[cfg(test)]
mod test_utils;

use std::sync::Arc;

use anyhow::{Context, Result};
use clap::Parser;
use site_console_core::{ProvisioningController, ProvisioningService};
use site_console_provider::create_backend;

use cli::Cli;
use config::{ConfigService, LocalConfigService};
use util::{init_terminal, restore_terminal};

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    // 1. 初始化日志（先于读取配置，配置加载过程也要记录）
    let log_path = logging::resolve_log_path(cli.log_file.as_deref())
        .context("Could not determine a log file location, pass --log-file")?;
    logging::init_logging(&log_path)?;

    // 2. 读取配置
    let config_service = match &cli.config {
        Some(path) => LocalConfigService::new(path.clone()),
        None => LocalConfigService::from_default_location()?,
    };
    let mut config = config_service.load()?;
    config.apply_overrides(cli.backend_url.as_deref(), cli.offline);

    if cli.write_config {
        config_service.save(&config)?;
        tracing::info!("Configuration written to {}", config_service.path().display());
        println!("Configuration written to {}", config_service.path().display());
        return Ok(());
    }

    tracing::info!(
        "Starting Site Console (backend: {}, config: {})",
        config.backend_label(),
        config_service.path().display()
    );

    view::theme::set_theme(config.theme);

    // 3. 组装服务
    let backend = create_backend(&config.backend)?;
    let service = Arc::new(ProvisioningService::new(backend, config.stale_time()));
    let controller = ProvisioningController::new(service, config.settings());
    let mut app = model::App::new(controller, config.backend_label());

    // 4. 初始化终端并运行
    let mut terminal = init_terminal()?;
    let result = app::run(&mut terminal, &mut app).await;

    // 5. 恢复终端（无论成功失败都执行）
    restore_terminal(&mut terminal)?;

    if let Err(e) = &result {
        tracing::error!("Site Console exited with error: {e:#}");
    } else {
        tracing::info!("Site Console exited");
    }
    result
}
