//! 焦点状态定义

/// 当前获得焦点的面板
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum FocusField {
    /// 子域名输入框
    #[default]
    Subdomain,
    /// 自定义域名输入框
    CustomDomain,
    /// 危险操作区（重置）
    DangerZone,
}

impl FocusField {
    /// 切换到下一个面板
    pub fn next(self) -> Self {
        match self {
            Self::Subdomain => Self::CustomDomain,
            Self::CustomDomain => Self::DangerZone,
            Self::DangerZone => Self::Subdomain,
        }
    }

    /// 切换到上一个面板
    pub fn prev(self) -> Self {
        match self {
            Self::Subdomain => Self::DangerZone,
            Self::CustomDomain => Self::Subdomain,
            Self::DangerZone => Self::CustomDomain,
        }
    }

    /// 是否是文本输入框
    pub fn is_input(self) -> bool {
        !matches!(self, Self::DangerZone)
    }
}
