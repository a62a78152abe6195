//!
//! src/message/mod.rs
//! Message 层：事件消息定义
//!
//! Event 层把按键翻译成 Message，Update 层消费 Message 修改 Model。
//!
//! 有模块结构：
//!     src/message/mod.rs
//!         mod app;        // AppMessage 顶层消息
//!         mod form;       // 输入框编辑
//!         mod action;     // 校验 / 发布 / 下线 / 配置域名 / 重置
//!         mod modal;      // 确认弹窗

mod action;
mod app;
mod form;
mod modal;

pub use action::ActionMessage;
pub use app::AppMessage;
pub use form::FormMessage;
pub use modal::ModalMessage;
