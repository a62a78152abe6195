#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ModalMessage {
    /// 关闭弹窗
    Close,

    /// 在取消/确认按钮间切换
    ToggleFocus,

    /// 确认/提交
    Confirm,
}
