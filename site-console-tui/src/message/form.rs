#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FormMessage {
    /// 输入字符
    Input(char),

    /// 删除字符（Backspace）
    Backspace,

    /// 清空当前输入框
    Clear,
}
