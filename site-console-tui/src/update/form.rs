//! 输入框编辑

use site_console_core::{Notice, Operation};

use crate::message::FormMessage;
use crate::model::{App, FocusField};

pub fn update(app: &mut App, msg: FormMessage) {
    match app.focus {
        FocusField::Subdomain => {
            let text = edited(app.controller.draft().candidate(), &msg);
            if let Err(e) = app.controller.edit_subdomain(&text) {
                app.notify(Notice::failure(Operation::EditSubdomain, &e));
            }
        }
        FocusField::CustomDomain => {
            let text = edited(app.controller.draft().custom_domain(), &msg);
            app.controller.edit_custom_domain(&text);
        }
        FocusField::DangerZone => {}
    }
}

/// 对当前文本应用一次编辑
fn edited(current: &str, msg: &FormMessage) -> String {
    let mut text = current.to_string();
    match msg {
        FormMessage::Input(c) => text.push(*c),
        FormMessage::Backspace => {
            text.pop();
        }
        FormMessage::Clear => text.clear(),
    }
    text
}
