//!
//! src/update/mod.rs
//! Update 层：状态更新逻辑
//!
//! Update 层负责处理 Message，更新 Model 状态，是唯一可以修改 Model 的地方。
//!
//! 有模块结构：
//!     src/update/mod.rs
//!         mod form;       // 输入框编辑（同步）
//!         mod action;     // 校验、配置域名、打开确认弹窗
//!         mod modal;      // 弹窗确认后执行远程操作
//!
//! 远程操作通过 `ProvisioningController` 完成，`update` 会等待它们结束后才返回，
//! 主循环因此不会在一次变更未完成时处理下一个按键。

mod action;
mod form;
mod modal;

use site_console_core::{Notice, Operation};

use crate::message::{ActionMessage, AppMessage, ModalMessage};
use crate::model::{App, ConfirmAction, FocusField};

/// 处理应用消息，更新状态
pub async fn update(app: &mut App, msg: AppMessage) {
    match msg {
        AppMessage::Quit => {
            app.should_quit = true;
        }

        AppMessage::NextFocus => {
            app.focus = app.focus.next();
        }

        AppMessage::PrevFocus => {
            app.focus = app.focus.prev();
        }

        AppMessage::Form(form_msg) => {
            form::update(app, form_msg);
        }

        AppMessage::Action(action_msg) => {
            action::update(app, action_msg).await;
        }

        AppMessage::Modal(modal_msg) => {
            modal::update(app, modal_msg).await;
        }

        AppMessage::Refresh => refresh(app).await,

        AppMessage::ShowHelp => {
            app.modal.show_help();
        }

        AppMessage::ClearNotice => {
            app.clear_notice();
        }

        AppMessage::Noop => {}
    }
}

/// 启动时加载服务端状态
pub async fn initial_load(app: &mut App) {
    if let Err(e) = app.controller.load().await {
        app.notify(Notice::failure(Operation::Refresh, &e));
    }
}

async fn refresh(app: &mut App) {
    match app.controller.refresh().await {
        Ok(()) => app.notify(Notice::refreshed()),
        Err(e) => app.notify(Notice::failure(Operation::Refresh, &e)),
    }
}

/// 需要等待远程调用的消息，返回状态栏提示
pub fn busy_label(app: &App, msg: &AppMessage) -> Option<&'static str> {
    match msg {
        AppMessage::Refresh => Some("Refreshing..."),
        AppMessage::Action(ActionMessage::Submit) if app.focus == FocusField::CustomDomain => {
            Some("Configuring domain...")
        }
        AppMessage::Modal(ModalMessage::Confirm) => {
            app.modal.confirmed_action().map(|action| match action {
                ConfirmAction::Publish => "Publishing...",
                ConfirmAction::Unpublish => "Unpublishing...",
                ConfirmAction::ResetAll => "Resetting...",
            })
        }
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use site_console_core::{NoticeLevel, PublicationState, DEFAULT_CUSTOM_DOMAIN};
    use site_console_provider::MemorySeed;

    use super::*;
    use crate::message::FormMessage;
    use crate::test_utils::{loaded_app, loaded_app_with};

    async fn type_text(app: &mut App, text: &str) {
        for c in text.chars() {
            update(app, AppMessage::Form(FormMessage::Input(c))).await;
        }
    }

    async fn confirm_modal(app: &mut App) {
        update(app, AppMessage::Modal(ModalMessage::ToggleFocus)).await;
        update(app, AppMessage::Modal(ModalMessage::Confirm)).await;
    }

    fn notice_title(app: &App) -> &str {
        app.notice.as_ref().map_or("", |n| n.title.as_str())
    }

    #[tokio::test]
    async fn validate_publish_flow() {
        let mut app = loaded_app().await;

        type_text(&mut app, "My-Site").await;
        update(&mut app, AppMessage::Action(ActionMessage::Submit)).await;
        assert_eq!(notice_title(&app), "Subdomain Validated");
        assert_eq!(app.controller.draft().confirmed(), Some("my-site"));

        update(&mut app, AppMessage::Action(ActionMessage::RequestPublish)).await;
        assert!(app.modal.is_open());
        assert_eq!(busy_label(&app, &AppMessage::Modal(ModalMessage::Confirm)), None);

        confirm_modal(&mut app).await;
        assert!(!app.modal.is_open());
        assert_eq!(notice_title(&app), "Site Published Successfully");
        assert_eq!(
            app.controller.publication_state(),
            PublicationState::Published
        );
    }

    #[tokio::test]
    async fn cancelling_publish_does_nothing() {
        let mut app = loaded_app().await;
        type_text(&mut app, "my-shop").await;
        update(&mut app, AppMessage::Action(ActionMessage::Validate)).await;
        update(&mut app, AppMessage::Action(ActionMessage::RequestPublish)).await;

        update(&mut app, AppMessage::Modal(ModalMessage::Confirm)).await;

        assert!(!app.modal.is_open());
        assert_eq!(
            app.controller.publication_state(),
            PublicationState::Validated
        );
    }

    #[tokio::test]
    async fn publish_without_validation_is_reported() {
        let mut app = loaded_app().await;
        type_text(&mut app, "my-shop").await;

        update(&mut app, AppMessage::Action(ActionMessage::RequestPublish)).await;

        assert!(!app.modal.is_open());
        let notice = app.notice.as_ref().unwrap();
        assert_eq!(notice.title, "Publication Failed");
        assert_eq!(notice.description, "No subdomain confirmed for publication.");
    }

    #[tokio::test]
    async fn invalid_subdomain_is_reported() {
        let mut app = loaded_app().await;
        type_text(&mut app, "ab").await;

        update(&mut app, AppMessage::Action(ActionMessage::Submit)).await;

        let notice = app.notice.as_ref().unwrap();
        assert_eq!(notice.title, "Invalid Subdomain");
        assert_eq!(notice.level, NoticeLevel::Warning);
        assert_eq!(
            app.controller.publication_state(),
            PublicationState::Invalid
        );
    }

    #[tokio::test]
    async fn typing_into_confirmed_subdomain_is_refused() {
        let mut app = loaded_app().await;
        type_text(&mut app, "my-shop").await;
        update(&mut app, AppMessage::Action(ActionMessage::Validate)).await;

        type_text(&mut app, "x").await;
        assert_eq!(notice_title(&app), "Subdomain Locked");
        assert_eq!(app.controller.draft().candidate(), "my-shop");

        update(
            &mut app,
            AppMessage::Action(ActionMessage::ChooseDifferentName),
        )
        .await;
        type_text(&mut app, "x").await;
        assert_eq!(app.controller.draft().candidate(), "x");
    }

    #[tokio::test]
    async fn choosing_different_name_while_published_is_refused() {
        let mut app = loaded_app_with(MemorySeed {
            published: true,
            subdomain: Some("live-site".into()),
            domain: None,
        })
        .await;

        update(
            &mut app,
            AppMessage::Action(ActionMessage::ChooseDifferentName),
        )
        .await;

        assert_eq!(notice_title(&app), "Subdomain Locked");
        assert_eq!(app.controller.draft().candidate(), "live-site");
    }

    #[tokio::test]
    async fn blank_custom_domain_is_reported() {
        let mut app = loaded_app().await;
        update(&mut app, AppMessage::NextFocus).await;
        assert_eq!(app.focus, FocusField::CustomDomain);
        assert_eq!(
            busy_label(&app, &AppMessage::Action(ActionMessage::Submit)),
            Some("Configuring domain...")
        );

        update(&mut app, AppMessage::Form(FormMessage::Clear)).await;
        update(&mut app, AppMessage::Action(ActionMessage::Submit)).await;

        assert_eq!(notice_title(&app), "Invalid Domain");
    }

    #[tokio::test]
    async fn custom_domain_is_configured() {
        let mut app = loaded_app().await;
        app.focus = FocusField::CustomDomain;
        update(&mut app, AppMessage::Form(FormMessage::Clear)).await;
        type_text(&mut app, "shop.example.in").await;

        update(&mut app, AppMessage::Action(ActionMessage::Submit)).await;

        assert_eq!(notice_title(&app), "Custom Domain Configured");
        assert_eq!(
            app.controller.server().and_then(|s| s.domain.as_deref()),
            Some("shop.example.in")
        );
    }

    #[tokio::test]
    async fn unpublish_requires_confirmation() {
        let mut app = loaded_app_with(MemorySeed {
            published: true,
            subdomain: Some("live-site".into()),
            domain: Some("shop.example.in".into()),
        })
        .await;

        update(&mut app, AppMessage::Action(ActionMessage::RequestUnpublish)).await;
        assert!(app.modal.is_open());
        confirm_modal(&mut app).await;

        assert_eq!(notice_title(&app), "Site Unpublished");
        assert!(!app.controller.is_published());
        assert_eq!(app.controller.draft().custom_domain(), "shop.example.in");
    }

    #[tokio::test]
    async fn unpublish_when_not_published_is_reported() {
        let mut app = loaded_app().await;

        update(&mut app, AppMessage::Action(ActionMessage::RequestUnpublish)).await;

        assert!(!app.modal.is_open());
        assert_eq!(notice_title(&app), "Unpublish Failed");
    }

    #[tokio::test]
    async fn reset_clears_everything() {
        let mut app = loaded_app_with(MemorySeed {
            published: true,
            subdomain: Some("live-site".into()),
            domain: Some("shop.example.in".into()),
        })
        .await;
        app.focus = FocusField::DangerZone;

        update(&mut app, AppMessage::Action(ActionMessage::Submit)).await;
        assert!(app.modal.is_open());
        confirm_modal(&mut app).await;

        assert_eq!(notice_title(&app), "Site Configuration Reset");
        assert_eq!(app.focus, FocusField::Subdomain);
        assert_eq!(
            app.controller.publication_state(),
            PublicationState::NotStarted
        );
        assert_eq!(app.controller.draft().custom_domain(), DEFAULT_CUSTOM_DOMAIN);
        assert_eq!(app.controller.primary_url(), None);
    }

    #[tokio::test]
    async fn refresh_and_quit() {
        let mut app = loaded_app().await;

        update(&mut app, AppMessage::Refresh).await;
        assert_eq!(notice_title(&app), "Status Refreshed");

        update(&mut app, AppMessage::ClearNotice).await;
        assert!(app.notice.is_none());

        update(&mut app, AppMessage::Quit).await;
        assert!(app.should_quit);
    }
}
