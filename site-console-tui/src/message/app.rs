use super::{ActionMessage, FormMessage, ModalMessage};

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AppMessage {
    /// 退出应用
    Quit,

    /// 焦点移到下一个面板
    NextFocus,

    /// 焦点移到上一个面板
    PrevFocus,

    /// 输入框编辑
    Form(FormMessage),

    /// 表单操作
    Action(ActionMessage),

    /// 弹窗相关消息
    Modal(ModalMessage),

    /// 失效缓存并重新读取服务端状态
    Refresh,

    /// 显示帮助
    ShowHelp,

    /// 清除通知
    ClearNotice,

    /// 无操作（用于忽略未处理的事件）
    Noop,
}
