#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ActionMessage {
    /// Enter：当前焦点的默认操作
    Submit,

    /// 校验子域名
    Validate,

    /// 选择其他名称（清空子域名草稿）
    ChooseDifferentName,

    /// 请求发布（弹出确认）
    RequestPublish,

    /// 请求下线（弹出确认）
    RequestUnpublish,

    /// 请求重置全部配置（弹出确认）
    RequestReset,
}
