//! 弹窗/对话框状态

/// 需要确认的远程操作
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ConfirmAction {
    Publish,
    Unpublish,
    ResetAll,
}

impl ConfirmAction {
    pub fn title(self) -> &'static str {
        match self {
            Self::Publish => "Publish Site",
            Self::Unpublish => "Unpublish Site",
            Self::ResetAll => "Delete Site Configuration",
        }
    }

    pub fn prompt(self) -> &'static str {
        match self {
            Self::Publish => "Publish this subdomain to production?",
            Self::Unpublish => "Take the site offline? The custom domain is kept.",
            Self::ResetAll => {
                "Permanently delete the subdomain, custom domain and publication state?"
            }
        }
    }

    pub fn confirm_label(self) -> &'static str {
        match self {
            Self::Publish => "Publish",
            Self::Unpublish => "Unpublish",
            Self::ResetAll => "Delete",
        }
    }

    /// 是否为破坏性操作（红色按钮）
    pub fn is_destructive(self) -> bool {
        !matches!(self, Self::Publish)
    }
}

/// 弹窗类型
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Modal {
    /// 确认弹窗
    Confirm {
        action: ConfirmAction,
        /// 详情行（子域名、URL 等）
        detail: Option<String>,
        /// 焦点按钮：0 = 取消, 1 = 确认
        focus: usize,
    },
    /// 帮助弹窗
    Help,
}

/// 弹窗状态
#[derive(Debug, Default)]
pub struct ModalState {
    pub active: Option<Modal>,
}

impl ModalState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn is_open(&self) -> bool {
        self.active.is_some()
    }

    pub fn close(&mut self) {
        self.active = None;
    }

    /// 打开确认弹窗，默认焦点在“取消”
    pub fn confirm(&mut self, action: ConfirmAction, detail: Option<String>) {
        self.active = Some(Modal::Confirm {
            action,
            detail,
            focus: 0,
        });
    }

    pub fn show_help(&mut self) {
        self.active = Some(Modal::Help);
    }

    /// 在取消/确认按钮间切换
    pub fn toggle_focus(&mut self) {
        if let Some(Modal::Confirm { focus, .. }) = &mut self.active {
            *focus = 1 - *focus;
        }
    }

    /// 当前确认弹窗中选中“确认”时返回对应操作
    pub fn confirmed_action(&self) -> Option<ConfirmAction> {
        match &self.active {
            Some(Modal::Confirm {
                action, focus: 1, ..
            }) => Some(*action),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn confirm_defaults_to_cancel() {
        let mut modal = ModalState::new();
        modal.confirm(ConfirmAction::ResetAll, None);

        assert!(modal.is_open());
        assert_eq!(modal.confirmed_action(), None);

        modal.toggle_focus();
        assert_eq!(modal.confirmed_action(), Some(ConfirmAction::ResetAll));

        modal.toggle_focus();
        assert_eq!(modal.confirmed_action(), None);
    }

    #[test]
    fn help_has_no_action() {
        let mut modal = ModalState::new();
        modal.show_help();
        modal.toggle_focus();
        assert_eq!(modal.confirmed_action(), None);
        modal.close();
        assert!(!modal.is_open());
    }
}
