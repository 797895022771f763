//! 升级 / 特权相关类型

use serde::{Deserialize, Serialize};

/// 升级阶段的状态
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum TierState {
    /// 已达成（终态，无后续动作）
    Achieved,
    /// 可以解锁
    Available,
    /// 尚未满足前置条件
    Locked,
}

/// 进度分数（例如 "3 of 5"）
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct Progress {
    /// 当前值
    pub current: u32,
    /// 目标值
    pub required: u32,
}

impl Progress {
    /// 创建
    #[must_use]
    pub const fn new(current: u32, required: u32) -> Self {
        Self { current, required }
    }

    /// 是否已满
    #[must_use]
    pub const fn is_complete(&self) -> bool {
        self.current >= self.required
    }
}

/// 解锁某个阶段的一种方式
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UnlockOption {
    /// 选项名
    pub label: String,
    /// 费用描述（例如 "20 Planks, 5 Bricks"）
    pub cost: String,
    /// 快照时刻是否负担得起（仅用于朗读，执行时会重新检查）
    pub affordable: bool,
}

/// 一个升级阶段
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UpgradeTier {
    /// 阶段名
    pub name: String,
    /// 效果描述
    pub description: String,
    /// 状态
    pub state: TierState,
    /// 前置条件进度
    pub progress: Progress,
    /// 解锁选项（仅 Available 时可执行）
    pub options: Vec<UnlockOption>,
}
