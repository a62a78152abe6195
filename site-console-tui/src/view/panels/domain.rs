//! 自定义域名面板

use ratatui::{
    layout::Rect,
    text::{Line, Span},
    widgets::{Paragraph, Wrap},
    Frame,
};

use super::panel_block;
use crate::model::{App, FocusField};
use crate::view::components::input::input_line;
use crate::view::theme::Styles;

pub fn render(app: &App, frame: &mut Frame, area: Rect) {
    let controller = &app.controller;
    let focused = app.focus == FocusField::CustomDomain;

    let block = panel_block("Custom Domain", focused);
    let inner = block.inner(area);
    frame.render_widget(block, area);

    let configured = controller
        .server()
        .and_then(|s| s.configured_domain())
        .unwrap_or("none");

    let lines = vec![
        Line::styled("Primary domain", Styles::label()),
        input_line(
            controller.draft().custom_domain(),
            "",
            "example.com",
            focused,
            true,
            usize::from(inner.width),
        ),
        Line::from(""),
        Line::from(vec![
            Span::styled("  Configured: ", Styles::label()),
            Span::raw(configured),
        ]),
        Line::styled(
            "  Point your domain's DNS at the platform before setting it here.",
            Styles::label(),
        ),
    ];

    frame.render_widget(Paragraph::new(lines).wrap(Wrap { trim: false }), inner);
}
