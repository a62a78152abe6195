//!
//! src/model/mod.rs
//! Model 层：应用状态
//!
//! 有模块结构：
//!     src/model/mod.rs
//!         mod app;        // App 主状态
//!         mod focus;      // 焦点（子域名 / 自定义域名 / 危险操作区）
//!         mod modal;      // 确认弹窗与帮助弹窗
//!
//! 表单草稿本身不在这里：它由 `site_console_core::ProvisioningController` 持有，
//! Model 层只保存与界面相关的状态（焦点、弹窗、通知）。

mod app;
mod focus;
mod modal;

pub use app::App;
pub use focus::FocusField;
pub use modal::{ConfirmAction, Modal, ModalState};
