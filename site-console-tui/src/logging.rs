//! 日志初始化
//!
//! TUI 占用终端，日志只能写入文件。核心库使用 `log` 门面，
//! `tracing-subscriber` 初始化时会一并接管 `log` 记录。

use std::fs::{self, OpenOptions};
use std::path::{Path, PathBuf};
use std::sync::Mutex;

use anyhow::{Context, Result};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

const LOG_FILE_NAME: &str = "site-console.log";

/// 默认日志路径：`<data dir>/site-console/site-console.log`
pub fn default_log_path() -> Option<PathBuf> {
    dirs::data_local_dir()
        .or_else(dirs::config_dir)
        .map(|dir| dir.join("site-console").join(LOG_FILE_NAME))
}

/// 命令行指定的路径优先，否则使用默认路径
pub fn resolve_log_path(cli_path: Option<&Path>) -> Option<PathBuf> {
    cli_path.map(Path::to_path_buf).or_else(default_log_path)
}

/// 初始化文件日志，`RUST_LOG` 未设置时默认 info
pub fn init_logging(path: &Path) -> Result<()> {
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent)
            .with_context(|| format!("Failed to create {}", parent.display()))?;
    }
    let file = OpenOptions::new()
        .create(true)
        .append(true)
        .open(path)
        .with_context(|| format!("Failed to open log file {}", path.display()))?;

    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));

    tracing_subscriber::registry()
        .with(
            tracing_subscriber::fmt::layer()
                .with_writer(Mutex::new(file))
                .with_ansi(false)
                .with_target(true),
        )
        .with(filter)
        .try_init()
        .context("Failed to install the log subscriber")?;

    Ok(())
}
