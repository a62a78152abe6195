//! 危险操作区

use ratatui::{
    layout::Rect,
    style::Style,
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph, Wrap},
    Frame,
};

use crate::event::DefaultKeymap;
use crate::model::{App, FocusField};
use crate::view::theme::{colors, Styles};

pub fn render(app: &App, frame: &mut Frame, area: Rect) {
    let c = colors();
    let focused = app.focus == FocusField::DangerZone;

    let block = Block::default()
        .title(" Danger Zone ")
        .title_style(Style::default().fg(c.error))
        .borders(Borders::ALL)
        .border_style(if focused {
            Style::default().fg(c.error)
        } else {
            Styles::border(false)
        });
    let inner = block.inner(area);
    frame.render_widget(block, area);

    let lines = vec![
        Line::styled(
            "Delete the subdomain, custom domain and publication state.",
            Styles::label(),
        ),
        Line::from(vec![
            Span::styled(
                format!("  {} ", DefaultKeymap::RESET.label()),
                Styles::hint_key(),
            ),
            Span::styled("Delete & Reset", Style::default().fg(c.error)),
        ]),
    ];

    frame.render_widget(Paragraph::new(lines).wrap(Wrap { trim: false }), inner);
}
