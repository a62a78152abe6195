//! 弹窗消息处理

use site_console_core::{Notice, Operation};

use crate::message::ModalMessage;
use crate::model::{App, ConfirmAction, FocusField};

pub async fn update(app: &mut App, msg: ModalMessage) {
    match msg {
        ModalMessage::Close => app.modal.close(),
        ModalMessage::ToggleFocus => app.modal.toggle_focus(),
        ModalMessage::Confirm => {
            let action = app.modal.confirmed_action();
            app.modal.close();
            if let Some(action) = action {
                run_confirmed(app, action).await;
            }
        }
    }
}

/// 执行已确认的远程操作
async fn run_confirmed(app: &mut App, action: ConfirmAction) {
    match action {
        ConfirmAction::Publish => match app.controller.publish().await {
            Ok(url) => app.notify(Notice::published(&url)),
            Err(e) => app.notify(Notice::failure(Operation::Publish, &e)),
        },
        ConfirmAction::Unpublish => match app.controller.unpublish().await {
            Ok(()) => app.notify(Notice::unpublished()),
            Err(e) => app.notify(Notice::failure(Operation::Unpublish, &e)),
        },
        ConfirmAction::ResetAll => match app.controller.reset_all().await {
            Ok(()) => {
                app.focus = FocusField::Subdomain;
                app.notify(Notice::reset_done());
            }
            Err(e) => app.notify(Notice::failure(Operation::ResetAll, &e)),
        },
    }
}
