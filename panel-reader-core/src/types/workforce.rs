//! 工人分配相关类型

use std::fmt;

use serde::{Deserialize, Serialize};

/// 建筑 ID
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct BuildingId(pub u32);

impl fmt::Display for BuildingId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{}", self.0)
    }
}

/// 占据某个工位的工人
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct WorkerInfo {
    /// 工人 ID
    pub id: u32,
    /// 工人名字
    pub name: String,
    /// 种族名
    pub race: String,
}

/// 一个可分配的种族及其空闲人数
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RaceAvailability {
    /// 种族 ID（传回访问器用）
    pub race: String,
    /// 朗读用的种族名
    pub display_name: String,
    /// 当前空闲人数
    pub free_count: u32,
}

impl RaceAvailability {
    /// 创建
    pub fn new(race: impl Into<String>, display_name: impl Into<String>, free_count: u32) -> Self {
        Self {
            race: race.into(),
            display_name: display_name.into(),
            free_count,
        }
    }
}
