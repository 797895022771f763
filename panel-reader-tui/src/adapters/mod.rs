//! 建筑适配器
//!
//! 每种建筑一个 [`BuildingAdapter`] 实现，它们是导航引擎的客户端：
//! 从模拟聚落读取快照、生成朗读文本、把动作写回聚落。
//!
//! 有模块结构：
//!     src/adapters/mod.rs
//!         mod production;     // 工坊：状态 / 配方 / 工人 / 升级
//!         mod hearth;         // 火炉：热度 / 燃料 / 守火人
//!         mod warehouse;      // 仓库：分类 → 货物 → 操作（四层）

mod hearth;
mod production;
mod warehouse;

use std::sync::Arc;

use panel_reader_core::error::{NavError, NavResult};
use panel_reader_core::types::{ActionOutcome, Level};
use panel_reader_core::BuildingAdapter;

use crate::backend::{BuildingKind, BuildingSummary, Settlement};
use crate::i18n::{fill, t};

pub use hearth::HearthAdapter;
pub use production::ProductionAdapter;
pub use warehouse::WarehouseAdapter;

/// 按建筑类型创建适配器
pub fn adapter_for(settlement: &Arc<Settlement>, building: &BuildingSummary) -> Box<dyn BuildingAdapter> {
    match building.kind {
        BuildingKind::Workshop => Box::new(ProductionAdapter::new(
            building,
            settlement.clone(),
            settlement.clone(),
            settlement.clone(),
        )),
        BuildingKind::Hearth => Box::new(HearthAdapter::new(
            building,
            settlement.clone(),
            settlement.clone(),
        )),
        BuildingKind::Warehouse => Box::new(WarehouseAdapter::new(building, settlement.clone())),
    }
}

/// 从快照中取第 `index` 项，越界时报告当前数量
fn snapshot<T>(items: &[T], level: Level, index: usize) -> NavResult<&T> {
    NavError::check_range(level, index, items.len())?;
    Ok(&items[index])
}

/// 游戏拒绝了写操作
fn rejected(name: &str) -> ActionOutcome {
    ActionOutcome::failure(fill(t().panel.rejected, &[("name", &name)]))
}

/// 把调整量应用到一个有界数值上，结果不变时返回 `None`
fn adjusted(current: u32, delta: i32, step: i32, max: u32) -> Option<u32> {
    let next = (i64::from(current) + i64::from(delta) * i64::from(step)).clamp(0, i64::from(max));
    let next = u32::try_from(next).ok()?;
    (next != current).then_some(next)
}
