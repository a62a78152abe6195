//! 通用组件

pub mod input;
pub mod modal;
pub mod statusbar;
