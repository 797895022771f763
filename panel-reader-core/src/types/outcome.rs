//! 动作结果、音效与按键命令

use serde::{Deserialize, Serialize};

use super::Level;

/// 语义音效
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum AudioCue {
    /// 操作成功
    Confirm,
    /// 操作被拒绝
    Fail,
    /// 开关打开
    ToggleOn,
    /// 开关关闭
    ToggleOff,
    /// 面板打开
    PanelOpen,
    /// 面板关闭
    PanelClose,
}

/// 动作 / 数值调整的结果
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ActionOutcome {
    /// 该地址没有可执行的动作
    Unhandled,
    /// 成功
    Success {
        /// 要朗读的消息；为 None 时朗读动作完成后所在的地址
        message: Option<String>,
        /// 要播放的音效
        cue: AudioCue,
        /// 成功后把光标收起到的层级（显式的按动作标记）
        collapse_to: Option<Level>,
    },
    /// 被拒绝（资源不足、没有空闲工人等）
    Failure {
        /// 要朗读的失败原因
        message: String,
    },
}

impl ActionOutcome {
    /// 成功，播放确认音效，不收起
    pub fn success(message: impl Into<String>) -> Self {
        Self::Success {
            message: Some(message.into()),
            cue: AudioCue::Confirm,
            collapse_to: None,
        }
    }

    /// 成功，无消息（引擎会朗读当前地址）
    #[must_use]
    pub fn silent_success() -> Self {
        Self::Success {
            message: None,
            cue: AudioCue::Confirm,
            collapse_to: None,
        }
    }

    /// 失败
    pub fn failure(message: impl Into<String>) -> Self {
        Self::Failure {
            message: message.into(),
        }
    }

    /// 开关类动作：根据新状态选择音效
    pub fn toggled(enabled: bool, message: impl Into<String>) -> Self {
        Self::Success {
            message: Some(message.into()),
            cue: if enabled {
                AudioCue::ToggleOn
            } else {
                AudioCue::ToggleOff
            },
            collapse_to: None,
        }
    }

    /// 成功时收起到指定层级
    #[must_use]
    pub fn collapsing_to(self, level: Level) -> Self {
        match self {
            Self::Success { message, cue, .. } => Self::Success {
                message,
                cue,
                collapse_to: Some(level),
            },
            other => other,
        }
    }

    /// 从访问器返回的布尔值构造结果
    pub fn from_bool(ok: bool, on_success: impl Into<String>, on_failure: impl Into<String>) -> Self {
        if ok {
            Self::success(on_success)
        } else {
            Self::failure(on_failure)
        }
    }

    /// 是否成功
    #[must_use]
    pub const fn is_success(&self) -> bool {
        matches!(self, Self::Success { .. })
    }

    /// 是否失败
    #[must_use]
    pub const fn is_failure(&self) -> bool {
        matches!(self, Self::Failure { .. })
    }
}

/// +/- 调整时按下的修饰键
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct Modifiers {
    /// Shift
    pub shift: bool,
    /// Ctrl
    pub ctrl: bool,
}

impl Modifiers {
    /// 无修饰键
    pub const NONE: Self = Self {
        shift: false,
        ctrl: false,
    };

    /// 仅 Shift
    pub const SHIFT: Self = Self {
        shift: true,
        ctrl: false,
    };

    /// 常用步长：Ctrl = 100，Shift = 10，否则 1
    #[must_use]
    pub const fn step(&self) -> i32 {
        if self.ctrl {
            100
        } else if self.shift {
            10
        } else {
            1
        }
    }
}

/// 宿主发给引擎的导航命令
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum NavCommand {
    /// 上一项
    Up,
    /// 下一项
    Down,
    /// 当前层第一项
    First,
    /// 当前层最后一项
    Last,
    /// 进入 / 执行
    Enter,
    /// 返回上一层
    Escape,
    /// 数值加
    Increment(Modifiers),
    /// 数值减
    Decrement(Modifiers),
    /// 重读当前项
    Repeat,
    /// 按名称搜索
    Search(String),
    /// 跳到下一个搜索结果
    SearchNext,
    /// 跳到上一个搜索结果
    SearchPrevious,
    /// 重新读取适配器数据
    Refresh,
}

/// 引擎处理按键后给宿主的回应
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum KeyResponse {
    /// 继续由引擎处理后续按键
    Continue,
    /// 在分区层按了返回，宿主应关闭面板
    ClosePanel,
}
