//! 应用主状态结构

use site_console_core::{Notice, NoticeLevel, ProvisioningController};

use super::{FocusField, ModalState};

/// 应用主状态
pub struct App {
    /// 是否应该退出
    pub should_quit: bool,

    /// 当前焦点
    pub focus: FocusField,

    /// 发布流程控制器（持有草稿与服务端快照）
    pub controller: ProvisioningController,

    /// 弹窗状态
    pub modal: ModalState,

    /// 最近一条通知
    pub notice: Option<Notice>,

    /// 正在进行的远程操作（用于状态栏提示）
    pub busy: Option<&'static str>,

    /// 后端描述
    pub backend_label: String,
}

impl App {
    /// 创建新的应用实例
    pub fn new(controller: ProvisioningController, backend_label: impl Into<String>) -> Self {
        Self {
            should_quit: false,
            focus: FocusField::default(),
            controller,
            modal: ModalState::new(),
            notice: None,
            busy: None,
            backend_label: backend_label.into(),
        }
    }

    pub fn notify(&mut self, notice: Notice) {
        match notice.level {
            NoticeLevel::Error => {
                log::error!("{}: {}", notice.title, notice.description);
            }
            NoticeLevel::Warning => {
                log::warn!("{}: {}", notice.title, notice.description);
            }
            NoticeLevel::Success => {
                log::info!("{}: {}", notice.title, notice.description);
            }
        }
        self.notice = Some(notice);
    }

    /// 清除通知
    pub fn clear_notice(&mut self) {
        self.notice = None;
    }
}
