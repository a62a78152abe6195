//! 子域名配置面板

use ratatui::{
    layout::Rect,
    style::Style,
    text::{Line, Span},
    widgets::{Paragraph, Wrap},
    Frame,
};
use site_console_core::validation::{MAX_SUBDOMAIN_LEN, MIN_SUBDOMAIN_LEN};
use site_console_core::ValidationOutcome;

use super::panel_block;
use crate::model::{App, FocusField};
use crate::view::components::input::input_line;
use crate::view::theme::{colors, Styles};

pub fn render(app: &App, frame: &mut Frame, area: Rect) {
    let c = colors();
    let controller = &app.controller;
    let draft = controller.draft();
    let focused = app.focus == FocusField::Subdomain;

    let block = panel_block("Subdomain Configuration", focused);
    let inner = block.inner(area);
    frame.render_widget(block, area);

    let suffix = format!(".{}", controller.settings().platform_domain);
    let mut lines = vec![
        Line::styled("Subdomain", Styles::label()),
        input_line(
            draft.candidate(),
            &suffix,
            "your-site",
            focused,
            controller.can_edit_subdomain(),
            usize::from(inner.width),
        ),
        Line::from(""),
    ];

    match draft.outcome() {
        Some(ValidationOutcome::Invalid(reason)) => {
            lines.push(Line::styled(
                format!("  ✗ {reason}"),
                Style::default().fg(c.error),
            ));
        }
        Some(ValidationOutcome::Valid) if controller.is_published() => {
            lines.push(Line::styled(
                "  ✓ Your site is published on this subdomain",
                Style::default().fg(c.success),
            ));
        }
        Some(ValidationOutcome::Valid) => {
            if let Some(confirmed) = draft.confirmed() {
                lines.push(Line::styled(
                    format!(
                        "  ✓ {} is ready to deploy",
                        controller.settings().platform_url(confirmed)
                    ),
                    Style::default().fg(c.success),
                ));
            }
        }
        None => {
            if let Some(preview) = controller.preview_url() {
                lines.push(Line::from(vec![
                    Span::styled("  Preview: ", Styles::label()),
                    Span::raw(preview),
                ]));
            }
        }
    }

    lines.push(Line::from(""));
    lines.push(Line::styled("Naming guidelines", Styles::label()));
    for rule in [
        format!("  • {MIN_SUBDOMAIN_LEN}-{MAX_SUBDOMAIN_LEN} characters"),
        "  • Lowercase letters, numbers and hyphens only".to_string(),
        "  • No leading, trailing or consecutive hyphens".to_string(),
    ] {
        lines.push(Line::styled(rule, Styles::label()));
    }

    frame.render_widget(Paragraph::new(lines).wrap(Wrap { trim: false }), inner);
}
