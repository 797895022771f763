//! 焦点状态定义

/// 焦点面板枚举
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum FocusPanel {
    /// 左侧建筑列表
    #[default]
    Buildings,
    /// 建筑面板（Navigator 会话进行中）
    Panel,
}

impl FocusPanel {
    /// 是否是建筑列表
    pub fn is_buildings(self) -> bool {
        matches!(self, FocusPanel::Buildings)
    }

    /// 是否是建筑面板
    pub fn is_panel(self) -> bool {
        matches!(self, FocusPanel::Panel)
    }
}
