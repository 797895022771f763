//! 应用主消息枚举

use panel_reader_core::types::NavCommand;

use super::{ModalMessage, NavigationMessage};

/// 应用主消息
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AppMessage {
    /// 退出应用
    Quit,

    /// 建筑列表相关消息
    Navigation(NavigationMessage),

    /// 发给已聚焦面板的导航命令
    Panel(NavCommand),

    /// 弹窗相关消息
    Modal(ModalMessage),

    /// 模拟推进一刻
    Tick,

    /// 显示帮助
    ShowHelp,

    /// 切换界面语言
    CycleLanguage,

    /// 无操作（用于忽略未处理的事件）
    Noop,
}
