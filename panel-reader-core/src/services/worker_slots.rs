//! 工人分配子导航器
//!
//! 条目 = 建筑的工位；子项 = "解雇当前工人"（仅工位有人时）+ 每个可分配种族。
//! 可分配种族列表每个面板会话只查询一次，分配变化后显式失效。

use std::sync::Arc;

use crate::error::{NavError, NavResult};
use crate::traits::WorkforceAccessor;
use crate::types::{ActionOutcome, BuildingId, Level, RaceAvailability, WorkerInfo};
use crate::utils::Memo;

/// 某个子项对应的选择
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum SlotChoice {
    Unassign,
    Race(usize),
}

/// 工人分配子导航器
pub struct WorkerSlots {
    accessor: Arc<dyn WorkforceAccessor>,
    building: BuildingId,
    /// 工位快照
    slots: Vec<Option<WorkerInfo>>,
    /// 可分配种族（会话级缓存）
    races: Memo<Vec<RaceAvailability>>,
}

impl WorkerSlots {
    /// 创建子导航器
    #[must_use]
    pub fn new(accessor: Arc<dyn WorkforceAccessor>, building: BuildingId) -> Self {
        Self {
            accessor,
            building,
            slots: Vec::new(),
            races: Memo::new(),
        }
    }

    /// 重新读取工位快照
    pub fn refresh(&mut self) {
        let max = self.accessor.max_workers(self.building);
        self.slots = (0..max)
            .map(|slot| self.accessor.worker_in_slot(self.building, slot))
            .collect();
    }

    /// 种族缓存：`force = true` 时下次读取重新查询
    pub fn refresh_races(&mut self, force: bool) {
        if force {
            self.races.invalidate();
        }
    }

    /// 清空所有快照
    pub fn clear(&mut self) {
        self.slots.clear();
        self.races.invalidate();
    }

    /// 建筑当前是否有工位（Workers 分区的可见条件）
    #[must_use]
    pub fn has_slots(&self) -> bool {
        !self.slots.is_empty()
    }

    /// 已占用工位数
    #[must_use]
    pub fn occupied_count(&self) -> usize {
        self.slots.iter().filter(|s| s.is_some()).count()
    }

    /// 条目数 = 最大工人数
    #[must_use]
    pub fn item_count(&self) -> usize {
        self.slots.len()
    }

    /// 子项数 = (有人 ? 1 : 0) + 可分配种族数
    #[must_use]
    pub fn sub_item_count(&self, slot: usize) -> usize {
        match self.slots.get(slot) {
            Some(occupant) => usize::from(occupant.is_some()) + self.races().len(),
            None => 0,
        }
    }

    /// 朗读工位
    pub fn announce_item(&self, slot: usize) -> NavResult<String> {
        let occupant = self.slot(slot)?;
        Ok(match occupant {
            Some(worker) => format!("Slot {}, {}, {}", slot + 1, worker.name, worker.race),
            None => format!("Slot {}, empty", slot + 1),
        })
    }

    /// 朗读工位下的子项
    pub fn announce_sub_item(&self, slot: usize, sub_item: usize) -> NavResult<String> {
        match self.choice(slot, sub_item)? {
            SlotChoice::Unassign => {
                let name = self
                    .slot(slot)?
                    .as_ref()
                    .map_or("worker", |w| w.name.as_str());
                Ok(format!("Unassign {name}"))
            }
            SlotChoice::Race(index) => {
                let race = &self.races()[index];
                Ok(format!("{}, {} free", race.display_name, race.free_count))
            }
        }
    }

    /// 执行子项：解雇，或（先解雇再）分配所选种族
    ///
    /// 成功后收起到条目层，并刷新工位快照与种族缓存。
    pub fn perform_sub_item_action(&mut self, slot: usize, sub_item: usize) -> ActionOutcome {
        let choice = match self.choice(slot, sub_item) {
            Ok(choice) => choice,
            Err(e) => return ActionOutcome::failure(e.to_string()),
        };
        let occupant = self.slots.get(slot).cloned().flatten();

        let outcome = match choice {
            SlotChoice::Unassign => {
                let name = occupant.map_or_else(|| "worker".to_string(), |w| w.name);
                if self.accessor.unassign_worker(self.building, slot) {
                    ActionOutcome::success(format!("Unassigned {name}"))
                } else {
                    ActionOutcome::failure(format!("Could not unassign {name}"))
                }
            }
            SlotChoice::Race(index) => {
                let race = self.races()[index].clone();
                if race.free_count == 0 {
                    return ActionOutcome::failure(format!(
                        "No free {} workers",
                        race.display_name
                    ));
                }
                if occupant.is_some() && !self.accessor.unassign_worker(self.building, slot) {
                    return ActionOutcome::failure(format!(
                        "Could not free slot {}",
                        slot + 1
                    ));
                }
                if self.accessor.assign_worker(self.building, slot, &race.race) {
                    ActionOutcome::silent_success()
                } else if let Some(previous) = occupant {
                    // 原工人已经离开工位，失败信息要说明这一点
                    log::warn!(
                        "Slot {slot} of building {} lost {} and could not take {}",
                        self.building,
                        previous.name,
                        race.race
                    );
                    ActionOutcome::failure(format!(
                        "Unassigned {}, could not assign {}",
                        previous.name, race.display_name
                    ))
                } else {
                    ActionOutcome::failure(format!("Could not assign {}", race.display_name))
                }
            }
        };

        // 走到这里的路径都调用过访问器
        self.refresh();
        self.refresh_races(true);

        match outcome {
            ActionOutcome::Success { message: None, .. } => {
                let assigned = self
                    .slots
                    .get(slot)
                    .cloned()
                    .flatten()
                    .map_or_else(|| "worker".to_string(), |w| format!("{}, {}", w.name, w.race));
                log::info!("Assigned {assigned} to slot {slot} of building {}", self.building);
                ActionOutcome::success(format!("Assigned {assigned}")).collapsing_to(Level::Item)
            }
            ActionOutcome::Success { .. } => outcome.collapsing_to(Level::Item),
            other => other,
        }
    }

    /// 工位的搜索名（只有占用的工位有稳定名字）
    #[must_use]
    pub fn name_of_item(&self, slot: usize) -> Option<String> {
        self.slots.get(slot)?.as_ref().map(|w| w.name.clone())
    }

    /// 子项的搜索名
    #[must_use]
    pub fn name_of_sub_item(&self, slot: usize, sub_item: usize) -> Option<String> {
        match self.choice(slot, sub_item).ok()? {
            SlotChoice::Unassign => None,
            SlotChoice::Race(index) => Some(self.races()[index].display_name.clone()),
        }
    }

    fn races(&self) -> &[RaceAvailability] {
        self.races
            .get_or_compute(|| self.accessor.eligible_races(self.building))
    }

    fn slot(&self, slot: usize) -> NavResult<&Option<WorkerInfo>> {
        self.slots.get(slot).ok_or(NavError::AddressOutOfRange {
            level: Level::Item,
            index: slot,
            count: self.slots.len(),
        })
    }

    fn choice(&self, slot: usize, sub_item: usize) -> NavResult<SlotChoice> {
        let occupied = self.slot(slot)?.is_some();
        NavError::check_range(Level::SubItem, sub_item, self.sub_item_count(slot))?;
        Ok(match (occupied, sub_item) {
            (true, 0) => SlotChoice::Unassign,
            (true, n) => SlotChoice::Race(n - 1),
            (false, n) => SlotChoice::Race(n),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_utils::MockWorkforce;

    const BUILDING: BuildingId = BuildingId(1);

    /// 2 个工位：0 号有人，1 号空；1 个种族，空闲 3 人
    fn scenario() -> (WorkerSlots, Arc<MockWorkforce>) {
        let mock = Arc::new(
            MockWorkforce::new(2)
                .with_worker(0, "Ada", "Beaver")
                .with_race("Beaver", 3),
        );
        let mut slots = WorkerSlots::new(mock.clone(), BUILDING);
        slots.refresh();
        (slots, mock)
    }

    #[test]
    fn sub_item_counts_follow_occupancy() {
        let (slots, _) = scenario();
        assert_eq!(slots.item_count(), 2);
        assert_eq!(slots.sub_item_count(0), 2);
        assert_eq!(slots.sub_item_count(1), 1);
        assert_eq!(slots.sub_item_count(2), 0);
    }

    #[test]
    fn announces_slots_and_choices() {
        let (slots, _) = scenario();
        assert_eq!(slots.announce_item(0).unwrap(), "Slot 1, Ada, Beaver");
        assert_eq!(slots.announce_item(1).unwrap(), "Slot 2, empty");
        assert_eq!(slots.announce_sub_item(0, 0).unwrap(), "Unassign Ada");
        assert_eq!(slots.announce_sub_item(0, 1).unwrap(), "Beaver, 3 free");
        assert_eq!(slots.announce_sub_item(1, 0).unwrap(), "Beaver, 3 free");
        assert!(slots.announce_sub_item(1, 1).is_err());
        assert!(slots.announce_item(5).is_err());
    }

    #[test]
    fn assigning_refetches_free_count() {
        let (mut slots, mock) = scenario();

        let outcome = slots.perform_sub_item_action(1, 0);
        assert!(outcome.is_success());
        assert!(matches!(
            outcome,
            ActionOutcome::Success {
                collapse_to: Some(Level::Item),
                ..
            }
        ));
        assert_eq!(mock.assign_calls(), 1);

        // 工位 1 现在有人：解雇 + 1 个种族
        assert_eq!(slots.sub_item_count(1), 2);
        assert_eq!(slots.announce_sub_item(1, 1).unwrap(), "Beaver, 2 free");
    }

    #[test]
    fn zero_free_count_never_reaches_accessor() {
        let mock = Arc::new(MockWorkforce::new(1).with_race("Fox", 0));
        let mut slots = WorkerSlots::new(mock.clone(), BUILDING);
        slots.refresh();

        let outcome = slots.perform_sub_item_action(0, 0);
        assert_eq!(outcome, ActionOutcome::failure("No free Fox workers"));
        assert_eq!(mock.assign_calls(), 0);
        assert_eq!(mock.unassign_calls(), 0);
    }

    #[test]
    fn replacing_worker_unassigns_first() {
        let mock = Arc::new(
            MockWorkforce::new(1)
                .with_worker(0, "Ada", "Beaver")
                .with_race("Beaver", 1)
                .with_race("Human", 2),
        );
        let mut slots = WorkerSlots::new(mock.clone(), BUILDING);
        slots.refresh();

        let outcome = slots.perform_sub_item_action(0, 2);
        assert!(outcome.is_success());
        assert_eq!(mock.unassign_calls(), 1);
        assert_eq!(mock.assign_calls(), 1);
        assert!(slots.announce_item(0).unwrap().ends_with("Human"));
    }

    #[test]
    fn unassign_collapses_and_frees_worker() {
        let (mut slots, mock) = scenario();
        let outcome = slots.perform_sub_item_action(0, 0);
        assert_eq!(
            outcome,
            ActionOutcome::success("Unassigned Ada").collapsing_to(Level::Item)
        );
        assert_eq!(mock.unassign_calls(), 1);
        assert_eq!(slots.announce_item(0).unwrap(), "Slot 1, empty");
        assert_eq!(slots.announce_sub_item(0, 0).unwrap(), "Beaver, 4 free");
    }

    #[test]
    fn rejected_assignment_is_a_failure() {
        let (mut slots, mock) = scenario();
        mock.reject_assignments(true);
        let outcome = slots.perform_sub_item_action(1, 0);
        assert_eq!(outcome, ActionOutcome::failure("Could not assign Beaver"));
    }

    #[test]
    fn failed_replacement_reports_the_lost_worker() {
        let mock = Arc::new(
            MockWorkforce::new(1)
                .with_worker(0, "Ada", "Beaver")
                .with_race("Beaver", 1)
                .with_race("Human", 2),
        );
        let mut slots = WorkerSlots::new(mock.clone(), BUILDING);
        slots.refresh();
        mock.reject_assignments(true);

        let outcome = slots.perform_sub_item_action(0, 2);
        assert_eq!(
            outcome,
            ActionOutcome::failure("Unassigned Ada, could not assign Human")
        );
        assert_eq!(mock.unassign_calls(), 1);
        // 工位空了：只剩两个种族
        assert_eq!(slots.announce_item(0).unwrap(), "Slot 1, empty");
        assert_eq!(slots.sub_item_count(0), 2);
    }

    #[test]
    fn races_are_fetched_once_per_session() {
        let (slots, mock) = scenario();
        slots.sub_item_count(0);
        slots.sub_item_count(1);
        slots.announce_sub_item(0, 1).unwrap();
        assert_eq!(mock.race_queries(), 1);
    }

    #[test]
    fn clear_drops_snapshot() {
        let (mut slots, _) = scenario();
        slots.clear();
        assert!(!slots.has_slots());
        assert_eq!(slots.item_count(), 0);
    }

    #[test]
    fn search_names() {
        let (slots, _) = scenario();
        assert_eq!(slots.name_of_item(0).as_deref(), Some("Ada"));
        assert_eq!(slots.name_of_item(1), None);
        assert_eq!(slots.name_of_sub_item(0, 0), None);
        assert_eq!(slots.name_of_sub_item(0, 1).as_deref(), Some("Beaver"));
    }
}
