//! 升级 / 特权子导航器
//!
//! 条目 = 升级阶段；可解锁的阶段把解锁方式作为子项列出。
//! 解锁前总是通过访问器重新检查是否负担得起，不依赖快照。

use std::sync::Arc;

use crate::error::{NavError, NavResult};
use crate::traits::UpgradeAccessor;
use crate::types::{ActionOutcome, BuildingId, Level, TierState, UnlockOption, UpgradeTier};

/// 升级子导航器
pub struct UpgradeTiers {
    accessor: Arc<dyn UpgradeAccessor>,
    building: BuildingId,
    tiers: Vec<UpgradeTier>,
}

impl UpgradeTiers {
    /// 创建子导航器
    #[must_use]
    pub fn new(accessor: Arc<dyn UpgradeAccessor>, building: BuildingId) -> Self {
        Self {
            accessor,
            building,
            tiers: Vec::new(),
        }
    }

    /// 重新读取阶段快照
    pub fn refresh(&mut self) {
        self.tiers = self.accessor.upgrade_tiers(self.building);
    }

    /// 清空快照
    pub fn clear(&mut self) {
        self.tiers.clear();
    }

    /// 是否有任何阶段（Upgrades 分区的可见条件）
    #[must_use]
    pub fn has_tiers(&self) -> bool {
        !self.tiers.is_empty()
    }

    /// 已达成阶段数
    #[must_use]
    pub fn achieved_count(&self) -> usize {
        self.tiers
            .iter()
            .filter(|t| t.state == TierState::Achieved)
            .count()
    }

    /// 条目数 = 阶段数
    #[must_use]
    pub fn item_count(&self) -> usize {
        self.tiers.len()
    }

    /// 子项数：只有可解锁的阶段才有
    #[must_use]
    pub fn sub_item_count(&self, tier: usize) -> usize {
        match self.tiers.get(tier) {
            Some(t) if t.state == TierState::Available => t.options.len(),
            _ => 0,
        }
    }

    /// 朗读阶段，包含进度分数
    pub fn announce_item(&self, tier: usize) -> NavResult<String> {
        let t = self.tier(tier)?;
        let state = match t.state {
            TierState::Achieved => "achieved",
            TierState::Available => "available",
            TierState::Locked => "locked",
        };
        let mut text = format!(
            "{}, {state}, {} of {}",
            t.name, t.progress.current, t.progress.required
        );
        if !t.description.is_empty() {
            text.push_str(", ");
            text.push_str(&t.description);
        }
        Ok(text)
    }

    /// 朗读解锁方式
    pub fn announce_sub_item(&self, tier: usize, option: usize) -> NavResult<String> {
        let o = self.option(tier, option)?;
        let mut text = format!("{}, costs {}", o.label, o.cost);
        if !o.affordable {
            text.push_str(", cannot afford");
        }
        Ok(text)
    }

    /// 在没有子项的阶段上按 Enter：说明为什么不能操作
    pub fn perform_item_action(&self, tier: usize) -> ActionOutcome {
        match self.tier(tier) {
            Ok(t) => match t.state {
                TierState::Achieved => ActionOutcome::failure(format!("{} already achieved", t.name)),
                TierState::Locked => ActionOutcome::failure(format!(
                    "{} is locked, {} of {}",
                    t.name, t.progress.current, t.progress.required
                )),
                TierState::Available => ActionOutcome::Unhandled,
            },
            Err(e) => ActionOutcome::failure(e.to_string()),
        }
    }

    /// 解锁：执行时重新检查负担能力
    pub fn perform_sub_item_action(&mut self, tier: usize, option: usize) -> ActionOutcome {
        let (tier_name, label) = match self.option(tier, option) {
            Ok(o) => (self.tiers[tier].name.clone(), o.label.clone()),
            Err(e) => return ActionOutcome::failure(e.to_string()),
        };

        if !self.accessor.can_unlock(self.building, tier, option) {
            return ActionOutcome::failure(format!("Cannot afford {label}"));
        }
        if !self.accessor.unlock(self.building, tier, option) {
            return ActionOutcome::failure(format!("Could not unlock {tier_name}"));
        }

        self.refresh();
        log::info!("Unlocked {tier_name} on building {}", self.building);
        ActionOutcome::success(format!("{tier_name} unlocked")).collapsing_to(Level::Item)
    }

    /// 阶段的搜索名
    #[must_use]
    pub fn name_of_item(&self, tier: usize) -> Option<String> {
        self.tiers.get(tier).map(|t| t.name.clone())
    }

    /// 解锁方式的搜索名
    #[must_use]
    pub fn name_of_sub_item(&self, tier: usize, option: usize) -> Option<String> {
        self.option(tier, option).ok().map(|o| o.label.clone())
    }

    fn tier(&self, tier: usize) -> NavResult<&UpgradeTier> {
        self.tiers.get(tier).ok_or(NavError::AddressOutOfRange {
            level: Level::Item,
            index: tier,
            count: self.tiers.len(),
        })
    }

    fn option(&self, tier: usize, option: usize) -> NavResult<&UnlockOption> {
        let t = self.tier(tier)?;
        NavError::check_range(Level::SubItem, option, self.sub_item_count(tier))?;
        Ok(&t.options[option])
    }
}
