//! 主界面各面板

pub mod danger;
pub mod domain;
pub mod status;
pub mod subdomain;

use ratatui::{
    style::Modifier,
    widgets::{Block, Borders},
};

use crate::view::theme::Styles;

/// 带标题的面板边框，焦点面板高亮
fn panel_block(title: &str, focused: bool) -> Block<'_> {
    Block::default()
        .title(format!(" {title} "))
        .title_style(Styles::title().add_modifier(if focused {
            Modifier::BOLD
        } else {
            Modifier::empty()
        }))
        .borders(Borders::ALL)
        .border_style(Styles::border(focused))
}
