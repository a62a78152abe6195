//!
//! src/util/mod.rs
//! Util 层：基础设施
//!
//! 有模块结构：
//!     src/util/mod.rs
//!         mod terminal;       // 终端初始化和恢复
//!
//! 日志写入文件而不是终端，避免破坏备用屏幕上的 UI（见 `crate::logging`）。

mod terminal;

pub use terminal::{init_terminal, restore_terminal, Term};
