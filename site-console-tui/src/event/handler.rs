//! 事件处理器

use std::time::Duration;

use anyhow::Result;
use crossterm::event::{self, Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers};

use crate::event::keymap::DefaultKeymap;
use crate::message::{ActionMessage, AppMessage, FormMessage, ModalMessage};
use crate::model::{App, Modal};

/// 轮询事件
pub fn poll_event(timeout: Duration) -> Result<Option<Event>> {
    if event::poll(timeout)? {
        Ok(Some(event::read()?))
    } else {
        Ok(None)
    }
}

/// 处理事件，返回对应的消息
pub fn handle_event(event: Event, app: &App) -> AppMessage {
    match event {
        Event::Key(key_event) => handle_key_event(key_event, app),
        // 终端窗口大小改变，下一轮自动重绘
        _ => AppMessage::Noop,
    }
}

/// 处理键盘事件
fn handle_key_event(key: KeyEvent, app: &App) -> AppMessage {
    // 只处理 Press 事件，忽略 Release 和 Repeat
    // 避免 Windows 终端上按键重复问题的发生
    if key.kind != KeyEventKind::Press {
        return AppMessage::Noop;
    }

    if DefaultKeymap::FORCE_QUIT.matches(&key) {
        return AppMessage::Quit;
    }

    // 如果有弹窗打开，优先处理弹窗输入
    if let Some(modal) = &app.modal.active {
        return handle_modal_keys(key, modal);
    }

    if let Some(msg) = handle_global_keys(&key) {
        return msg;
    }

    handle_form_keys(key, app)
}

fn handle_global_keys(key: &KeyEvent) -> Option<AppMessage> {
    let msg = if DefaultKeymap::QUIT.matches(key) {
        AppMessage::Quit
    } else if DefaultKeymap::HELP.matches(key) {
        AppMessage::ShowHelp
    } else if DefaultKeymap::REFRESH.matches(key) {
        AppMessage::Refresh
    } else if DefaultKeymap::BACK.matches(key) {
        AppMessage::ClearNotice
    } else if DefaultKeymap::FOCUS_NEXT.matches(key) {
        AppMessage::NextFocus
    } else if key.code == KeyCode::BackTab {
        AppMessage::PrevFocus
    } else if DefaultKeymap::VALIDATE.matches(key) {
        AppMessage::Action(ActionMessage::Validate)
    } else if DefaultKeymap::CHOOSE_DIFFERENT.matches(key) {
        AppMessage::Action(ActionMessage::ChooseDifferentName)
    } else if DefaultKeymap::PUBLISH.matches(key) {
        AppMessage::Action(ActionMessage::RequestPublish)
    } else if DefaultKeymap::UNPUBLISH.matches(key) {
        AppMessage::Action(ActionMessage::RequestUnpublish)
    } else if DefaultKeymap::RESET.matches(key) {
        AppMessage::Action(ActionMessage::RequestReset)
    } else {
        return None;
    };
    Some(msg)
}

/// 处理表单区域的按键
fn handle_form_keys(key: KeyEvent, app: &App) -> AppMessage {
    match key.code {
        KeyCode::Up => return AppMessage::PrevFocus,
        KeyCode::Down => return AppMessage::NextFocus,
        KeyCode::Enter => return AppMessage::Action(ActionMessage::Submit),
        _ => {}
    }

    if !app.focus.is_input() {
        return AppMessage::Noop;
    }

    if DefaultKeymap::CLEAR_FIELD.matches(&key) {
        return AppMessage::Form(FormMessage::Clear);
    }

    match key.code {
        KeyCode::Backspace => AppMessage::Form(FormMessage::Backspace),
        KeyCode::Char(c)
            if key.modifiers.is_empty() || key.modifiers == KeyModifiers::SHIFT =>
        {
            AppMessage::Form(FormMessage::Input(c))
        }
        _ => AppMessage::Noop,
    }
}

/// 处理弹窗中的按键
fn handle_modal_keys(key: KeyEvent, modal: &Modal) -> AppMessage {
    match modal {
        Modal::Help => match key.code {
            KeyCode::Esc | KeyCode::Enter => AppMessage::Modal(ModalMessage::Close),
            _ => AppMessage::Noop,
        },
        Modal::Confirm { .. } => match key.code {
            KeyCode::Esc => AppMessage::Modal(ModalMessage::Close),
            KeyCode::Left | KeyCode::Right | KeyCode::Tab | KeyCode::BackTab => {
                AppMessage::Modal(ModalMessage::ToggleFocus)
            }
            KeyCode::Enter => AppMessage::Modal(ModalMessage::Confirm),
            _ => AppMessage::Noop,
        },
    }
}

#[cfg(test)]
mod tests {
    use crossterm::event::{KeyEventState, KeyModifiers};

    use super::*;
    use crate::model::{ConfirmAction, FocusField};
    use crate::test_utils::offline_app;

    fn press(code: KeyCode, modifiers: KeyModifiers) -> Event {
        Event::Key(KeyEvent {
            code,
            modifiers,
            kind: KeyEventKind::Press,
            state: KeyEventState::NONE,
        })
    }

    fn key(code: KeyCode) -> Event {
        press(code, KeyModifiers::NONE)
    }

    #[test]
    fn typing_goes_to_focused_input() {
        let app = offline_app();
        assert_eq!(
            handle_event(key(KeyCode::Char('a')), &app),
            AppMessage::Form(FormMessage::Input('a'))
        );
        assert_eq!(
            handle_event(press(KeyCode::Char('A'), KeyModifiers::SHIFT), &app),
            AppMessage::Form(FormMessage::Input('A'))
        );
        assert_eq!(
            handle_event(key(KeyCode::Backspace), &app),
            AppMessage::Form(FormMessage::Backspace)
        );
    }

    #[test]
    fn danger_zone_ignores_typing() {
        let mut app = offline_app();
        app.focus = FocusField::DangerZone;
        assert_eq!(handle_event(key(KeyCode::Char('a')), &app), AppMessage::Noop);
        assert_eq!(
            handle_event(key(KeyCode::Enter), &app),
            AppMessage::Action(ActionMessage::Submit)
        );
    }

    #[test]
    fn alt_shortcuts_map_to_actions() {
        let app = offline_app();
        assert_eq!(
            handle_event(press(KeyCode::Char('p'), KeyModifiers::ALT), &app),
            AppMessage::Action(ActionMessage::RequestPublish)
        );
        assert_eq!(
            handle_event(press(KeyCode::Char('d'), KeyModifiers::ALT), &app),
            AppMessage::Action(ActionMessage::RequestReset)
        );
        assert_eq!(
            handle_event(press(KeyCode::Char('q'), KeyModifiers::ALT), &app),
            AppMessage::Quit
        );
    }

    #[test]
    fn modal_captures_keys() {
        let mut app = offline_app();
        app.modal.confirm(ConfirmAction::Publish, None);

        assert_eq!(handle_event(key(KeyCode::Char('a')), &app), AppMessage::Noop);
        assert_eq!(
            handle_event(key(KeyCode::Right), &app),
            AppMessage::Modal(ModalMessage::ToggleFocus)
        );
        assert_eq!(
            handle_event(key(KeyCode::Enter), &app),
            AppMessage::Modal(ModalMessage::Confirm)
        );
        assert_eq!(
            handle_event(press(KeyCode::Char('c'), KeyModifiers::CONTROL), &app),
            AppMessage::Quit
        );
    }

    #[test]
    fn release_events_are_ignored() {
        let app = offline_app();
        let event = Event::Key(KeyEvent {
            code: KeyCode::Char('a'),
            modifiers: KeyModifiers::NONE,
            kind: KeyEventKind::Release,
            state: KeyEventState::NONE,
        });
        assert_eq!(handle_event(event, &app), AppMessage::Noop);
    }
}
