//!
//! src/view/mod.rs
//! View 层：UI 渲染
//!
//! View 层只读取 Model 状态，不做任何修改。
//!
//! 有模块结构：
//!     src/view/mod.rs
//!         mod layout;         // 主布局（标题栏 + 左右分栏 + 状态栏）
//!         mod panels;         // 子域名 / 自定义域名 / 危险操作区 / 发布状态
//!         mod components;     // 输入框、状态栏、弹窗
//!         pub mod theme;      // 颜色主题

mod components;
mod layout;
mod panels;
pub mod theme;

pub use layout::render;
