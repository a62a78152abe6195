//! 底部状态栏组件

use ratatui::{
    layout::Rect,
    style::{Color, Style},
    text::{Line, Span},
    widgets::Paragraph,
    Frame,
};

use crate::event::DefaultKeymap;
use crate::model::{App, FocusField};
use crate::view::theme::{colors, Styles};

/// 渲染状态栏
pub fn render(app: &App, frame: &mut Frame, area: Rect) {
    let mut spans = Vec::new();

    for (i, (key, desc)) in get_hints(app).iter().enumerate() {
        if i > 0 {
            spans.push(Span::styled(" │ ", Style::default().fg(Color::DarkGray)));
        }
        spans.push(Span::styled(key.clone(), Styles::hint_key()));
        spans.push(Span::raw(" "));
        spans.push(Span::styled(*desc, Styles::hint_desc()));
    }

    // 进行中的远程操作优先于通知显示
    if let Some(label) = app.busy {
        spans.push(Span::styled(" │ ", Style::default().fg(Color::DarkGray)));
        spans.push(Span::styled(label, Style::default().fg(Color::Yellow)));
    } else if let Some(notice) = &app.notice {
        spans.push(Span::styled(" │ ", Style::default().fg(Color::DarkGray)));
        spans.push(Span::styled(
            format!(
                "[{}] {}: {}",
                notice.at.format("%H:%M:%S"),
                notice.title,
                notice.description
            ),
            Style::default().fg(colors().notice(notice.level)),
        ));
    }

    let paragraph = Paragraph::new(Line::from(spans)).style(Styles::statusbar());
    frame.render_widget(paragraph, area);
}

/// 根据当前焦点生成快捷键提示
fn get_hints(app: &App) -> Vec<(String, &'static str)> {
    let mut hints = vec![(DefaultKeymap::FOCUS_NEXT.label(), "Next")];

    match app.focus {
        FocusField::Subdomain => {
            if app.controller.can_validate() {
                hints.push((DefaultKeymap::SUBMIT.label(), "Validate"));
            }
            if app.controller.can_publish() {
                hints.push((DefaultKeymap::PUBLISH.label(), "Publish"));
            }
            if app.controller.draft().confirmed().is_some() && !app.controller.is_published() {
                hints.push((DefaultKeymap::CHOOSE_DIFFERENT.label(), "Different Name"));
            }
        }
        FocusField::CustomDomain => {
            if app.controller.can_configure_domain() {
                hints.push((DefaultKeymap::SUBMIT.label(), "Set Domain"));
            }
        }
        FocusField::DangerZone => {
            hints.push((DefaultKeymap::SUBMIT.label(), "Delete & Reset"));
        }
    }

    if app.controller.can_unpublish() {
        hints.push((DefaultKeymap::UNPUBLISH.label(), "Unpublish"));
    }
    hints.push((DefaultKeymap::HELP.label(), "Help"));
    hints.push((DefaultKeymap::QUIT.label(), "Quit"));

    hints
}
