//! 发布状态面板

use ratatui::{
    layout::Rect,
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Paragraph, Wrap},
    Frame,
};
use site_console_core::{ProvisioningController, PublicationState};

use super::panel_block;
use crate::event::DefaultKeymap;
use crate::model::App;
use crate::view::theme::{colors, Styles};

pub fn render(app: &App, frame: &mut Frame, area: Rect) {
    let block = panel_block("Provisioning Status", false);
    let inner = block.inner(area);
    frame.render_widget(block, area);

    let mut lines = status_lines(&app.controller);
    lines.push(Line::from(""));
    lines.push(Line::from(vec![
        Span::styled("Backend: ", Styles::label()),
        Span::styled(app.backend_label.clone(), Styles::label()),
    ]));

    frame.render_widget(Paragraph::new(lines).wrap(Wrap { trim: false }), inner);
}

fn status_lines(controller: &ProvisioningController) -> Vec<Line<'static>> {
    let c = colors();
    let state = controller.publication_state();
    let published = state.is_published();

    let mut lines = vec![
        Line::from(Span::styled(
            format!(" {} ", state.label()),
            Style::default()
                .fg(c.publication(state))
                .add_modifier(Modifier::BOLD | Modifier::REVERSED),
        )),
        Line::styled(state.description().to_string(), Styles::label()),
    ];

    if controller.needs_refresh() {
        lines.push(Line::styled(
            format!(
                "Status may be out of date ({} to reload)",
                DefaultKeymap::REFRESH.label()
            ),
            Style::default().fg(c.warning),
        ));
    }

    lines.push(Line::from(""));
    if published {
        if let Some(url) = controller.primary_url() {
            lines.push(Line::styled("Primary URL".to_string(), Styles::title()));
            lines.push(Line::raw(format!("  {url}")));
        }
        if let (Some(_), Some(subdomain)) = (
            controller.server().and_then(|s| s.configured_domain()),
            controller.display_subdomain(),
        ) {
            lines.push(Line::styled(
                "Preview/Draft URL".to_string(),
                Styles::label(),
            ));
            lines.push(Line::styled(
                format!("  {}", controller.settings().platform_url(subdomain)),
                Styles::label(),
            ));
        }
    } else if let Some(subdomain) = controller.display_subdomain() {
        lines.push(Line::styled("Requested Subdomain".to_string(), Styles::title()));
        lines.push(Line::raw(format!(
            "  {}",
            controller.settings().platform_url(subdomain)
        )));
    } else if let Some(preview) = controller.preview_url() {
        lines.push(Line::styled("Requested Subdomain".to_string(), Styles::title()));
        lines.push(Line::raw(format!("  {preview}")));
    }

    lines.push(Line::from(""));
    lines.push(Line::styled("Next Steps".to_string(), Styles::title()));
    let validated = matches!(state, PublicationState::Validated | PublicationState::Published);
    for (done, step) in [
        (controller.draft().confirmed().is_some() || published, "Enter subdomain name"),
        (validated, "Validate availability"),
        (published, "Publish to production"),
    ] {
        let (mark, style) = if done {
            ("✓", Style::default().fg(c.success))
        } else {
            ("·", Styles::label())
        };
        lines.push(Line::styled(format!("  {mark} {step}"), style));
    }

    lines
}
