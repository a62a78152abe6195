//! 表单操作
//!
//! 发布、下线与重置需要先弹出确认；前置条件不满足时直接调用控制器，
//! 由它返回对应的前置条件错误并生成通知（不会产生远程调用）。

use site_console_core::{Notice, Operation};

use crate::message::ActionMessage;
use crate::model::{App, ConfirmAction, FocusField};

pub async fn update(app: &mut App, msg: ActionMessage) {
    match msg {
        ActionMessage::Submit => match app.focus {
            FocusField::Subdomain => validate(app),
            FocusField::CustomDomain => configure_domain(app).await,
            FocusField::DangerZone => request_reset(app),
        },
        ActionMessage::Validate => validate(app),
        ActionMessage::ChooseDifferentName => choose_different_name(app),
        ActionMessage::RequestPublish => request_publish(app).await,
        ActionMessage::RequestUnpublish => request_unpublish(app).await,
        ActionMessage::RequestReset => request_reset(app),
    }
}

fn validate(app: &mut App) {
    match app.controller.validate_candidate() {
        Ok(name) => {
            let url = app.controller.settings().platform_url(&name);
            app.notify(Notice::validated(&url));
        }
        Err(e) => app.notify(Notice::failure(Operation::Validate, &e)),
    }
}

fn choose_different_name(app: &mut App) {
    match app.controller.reset_draft() {
        Ok(()) => {
            app.focus = FocusField::Subdomain;
            app.clear_notice();
        }
        Err(e) => app.notify(Notice::failure(Operation::EditSubdomain, &e)),
    }
}

async fn configure_domain(app: &mut App) {
    match app.controller.configure_draft_domain().await {
        Ok(domain) => app.notify(Notice::domain_configured(&domain)),
        Err(e) => app.notify(Notice::failure(Operation::ConfigureDomain, &e)),
    }
}

async fn request_publish(app: &mut App) {
    if app.controller.can_publish() {
        let detail = app
            .controller
            .draft()
            .confirmed()
            .map(|name| app.controller.settings().platform_url(name));
        app.modal.confirm(ConfirmAction::Publish, detail);
        return;
    }
    if let Err(e) = app.controller.publish().await {
        app.notify(Notice::failure(Operation::Publish, &e));
    }
}

async fn request_unpublish(app: &mut App) {
    if app.controller.can_unpublish() {
        let detail = app.controller.primary_url();
        app.modal.confirm(ConfirmAction::Unpublish, detail);
        return;
    }
    if let Err(e) = app.controller.unpublish().await {
        app.notify(Notice::failure(Operation::Unpublish, &e));
    }
}

fn request_reset(app: &mut App) {
    let detail = app.controller.primary_url();
    app.modal.confirm(ConfirmAction::ResetAll, detail);
}
