//! 弹窗组件

use ratatui::{
    layout::{Alignment, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Clear, Paragraph, Wrap},
    Frame,
};

use crate::event::{DefaultKeymap, KeyBinding};
use crate::model::{App, ConfirmAction, Modal};

/// 渲染弹窗（如果有活动弹窗）
pub fn render(app: &App, frame: &mut Frame) {
    let Some(ref modal) = app.modal.active else {
        return;
    };

    match modal {
        Modal::Confirm {
            action,
            detail,
            focus,
        } => render_confirm(frame, *action, detail.as_deref(), *focus),
        Modal::Help => render_help(frame),
    }
}

/// 计算居中弹窗区域
fn centered_rect(width: u16, height: u16, area: Rect) -> Rect {
    let x = area.x + (area.width.saturating_sub(width)) / 2;
    let y = area.y + (area.height.saturating_sub(height)) / 2;
    Rect::new(x, y, width.min(area.width), height.min(area.height))
}

fn inner_rect(area: Rect) -> Rect {
    Rect::new(
        area.x + 2,
        area.y + 1,
        area.width.saturating_sub(4),
        area.height.saturating_sub(2),
    )
}

/// 渲染确认弹窗
fn render_confirm(frame: &mut Frame, action: ConfirmAction, detail: Option<&str>, focus: usize) {
    let area = centered_rect(56, 10, frame.area());
    frame.render_widget(Clear, area);

    let accent = if action.is_destructive() {
        Color::Red
    } else {
        Color::Cyan
    };

    let block = Block::default()
        .title(format!(" {} ", action.title()))
        .title_alignment(Alignment::Center)
        .borders(Borders::ALL)
        .border_style(Style::default().fg(accent))
        .style(Style::default().bg(Color::Black));
    frame.render_widget(block, area);

    let cancel_style = if focus == 0 {
        Style::default().fg(Color::Black).bg(Color::White)
    } else {
        Style::default().fg(Color::White)
    };
    let confirm_style = if focus == 1 {
        Style::default().fg(Color::Black).bg(accent)
    } else {
        Style::default().fg(accent)
    };

    let mut lines = vec![
        Line::from(""),
        Line::styled(action.prompt(), Style::default().fg(Color::White)),
    ];
    if let Some(detail) = detail {
        lines.push(Line::styled(
            format!("\"{detail}\""),
            Style::default().fg(Color::Yellow),
        ));
    }
    lines.push(Line::from(""));
    lines.push(Line::from(vec![
        Span::raw("    "),
        Span::styled(" Cancel ", cancel_style),
        Span::raw("    "),
        Span::styled(format!(" {} ", action.confirm_label()), confirm_style),
    ]));

    let paragraph = Paragraph::new(lines).wrap(Wrap { trim: false });
    frame.render_widget(paragraph, inner_rect(area));
}

/// 渲染帮助弹窗
fn render_help(frame: &mut Frame) {
    let area = centered_rect(56, 20, frame.area());
    frame.render_widget(Clear, area);

    let block = Block::default()
        .title(" Help ")
        .title_alignment(Alignment::Center)
        .borders(Borders::ALL)
        .border_style(Style::default().fg(Color::Cyan))
        .style(Style::default().bg(Color::Black));
    frame.render_widget(block, area);

    let heading = Style::default()
        .fg(Color::Cyan)
        .add_modifier(Modifier::BOLD);

    let mut lines = vec![Line::styled("Form", heading), Line::from("")];
    lines.push(help_line("Tab/↑↓", "Move between fields"));
    lines.push(help_line(&DefaultKeymap::SUBMIT.label(), "Validate / set domain / reset"));
    lines.push(help_line(&DefaultKeymap::CLEAR_FIELD.label(), "Clear field"));
    lines.push(Line::from(""));
    lines.push(Line::styled("Site", heading));
    lines.push(Line::from(""));
    for (binding, desc) in [
        (&DefaultKeymap::VALIDATE, "Validate subdomain"),
        (&DefaultKeymap::CHOOSE_DIFFERENT, "Choose a different name"),
        (&DefaultKeymap::PUBLISH, "Publish"),
        (&DefaultKeymap::UNPUBLISH, "Unpublish"),
        (&DefaultKeymap::RESET, "Delete & reset configuration"),
        (&DefaultKeymap::REFRESH, "Reload status from server"),
        (&DefaultKeymap::QUIT, "Quit"),
    ] {
        lines.push(binding_line(binding, desc));
    }
    lines.push(Line::from(""));
    lines.push(Line::styled(
        "Press Esc to close the help",
        Style::default().fg(Color::DarkGray),
    ));

    frame.render_widget(Paragraph::new(lines), inner_rect(area));
}

fn binding_line(binding: &KeyBinding, desc: &'static str) -> Line<'static> {
    help_line(&binding.label(), desc)
}

fn help_line(key: &str, desc: &'static str) -> Line<'static> {
    Line::from(vec![
        Span::styled(format!("  {key:<9}"), Style::default().fg(Color::Yellow)),
        Span::styled(desc, Style::default().fg(Color::White)),
    ])
}
