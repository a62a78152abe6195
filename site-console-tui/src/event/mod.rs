//!
//! src/event/mod.rs
//! Event 层：输入处理
//!
//! 轮询 crossterm 事件，并根据当前 Model（弹窗、焦点）把按键翻译为 Message。
//!
//! 有模块结构：
//!     src/event/mod.rs
//!         mod handler;    // poll_event / handle_event
//!         mod keymap;     // 快捷键定义

mod handler;
mod keymap;

pub use handler::{handle_event, poll_event};
pub use keymap::{DefaultKeymap, KeyBinding};
