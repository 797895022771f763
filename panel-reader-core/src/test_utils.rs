//! 测试辅助模块
//!
//! 提供 mock 实现和便捷的测试工厂方法。
#![allow(clippy::unwrap_used)]

use std::collections::{HashMap, HashSet};
use std::sync::atomic::{AtomicBool, AtomicUsize, Ordering};
use std::sync::{Arc, Mutex, MutexGuard};

use crate::error::{NavError, NavResult};
use crate::traits::{AudioCueSink, BuildingAdapter, SpeechSink, UpgradeAccessor, WorkforceAccessor};
use crate::types::{
    ActionOutcome, Address, AudioCue, BuildingId, Level, Modifiers, RaceAvailability, TierState,
    UpgradeTier, WorkerInfo,
};

// ===== RecordingSpeech / RecordingCues =====

#[derive(Default)]
pub struct RecordingSpeech {
    utterances: Mutex<Vec<String>>,
}

impl RecordingSpeech {
    pub fn utterances(&self) -> Vec<String> {
        self.utterances.lock().unwrap().clone()
    }

    pub fn count(&self) -> usize {
        self.utterances.lock().unwrap().len()
    }
}

impl SpeechSink for RecordingSpeech {
    fn say(&self, text: &str) {
        self.utterances.lock().unwrap().push(text.to_string());
    }
}

#[derive(Default)]
pub struct RecordingCues {
    cues: Mutex<Vec<AudioCue>>,
}

impl RecordingCues {
    pub fn played(&self) -> Vec<AudioCue> {
        self.cues.lock().unwrap().clone()
    }

    pub fn last(&self) -> Option<AudioCue> {
        self.cues.lock().unwrap().last().copied()
    }
}

impl AudioCueSink for RecordingCues {
    fn play(&self, cue: AudioCue) {
        self.cues.lock().unwrap().push(cue);
    }
}

// ===== MockWorkforce =====

/// 单个建筑的工人 mock；种族 ID 同时用作显示名
pub struct MockWorkforce {
    slots: Mutex<Vec<Option<WorkerInfo>>>,
    races: Mutex<Vec<RaceAvailability>>,
    next_id: AtomicUsize,
    reject: AtomicBool,
    assign_calls: AtomicUsize,
    unassign_calls: AtomicUsize,
    race_queries: AtomicUsize,
}

impl MockWorkforce {
    pub fn new(max_slots: usize) -> Self {
        Self {
            slots: Mutex::new(vec![None; max_slots]),
            races: Mutex::new(Vec::new()),
            next_id: AtomicUsize::new(100),
            reject: AtomicBool::new(false),
            assign_calls: AtomicUsize::new(0),
            unassign_calls: AtomicUsize::new(0),
            race_queries: AtomicUsize::new(0),
        }
    }

    pub fn with_worker(self, slot: usize, name: &str, race: &str) -> Self {
        let id = self.next_id();
        self.slots.lock().unwrap()[slot] = Some(WorkerInfo {
            id,
            name: name.to_string(),
            race: race.to_string(),
        });
        self
    }

    pub fn with_race(self, race: &str, free: u32) -> Self {
        self.races
            .lock()
            .unwrap()
            .push(RaceAvailability::new(race, race, free));
        self
    }

    pub fn reject_assignments(&self, reject: bool) {
        self.reject.store(reject, Ordering::SeqCst);
    }

    pub fn assign_calls(&self) -> usize {
        self.assign_calls.load(Ordering::SeqCst)
    }

    pub fn unassign_calls(&self) -> usize {
        self.unassign_calls.load(Ordering::SeqCst)
    }

    pub fn race_queries(&self) -> usize {
        self.race_queries.load(Ordering::SeqCst)
    }

    fn next_id(&self) -> u32 {
        u32::try_from(self.next_id.fetch_add(1, Ordering::SeqCst)).unwrap()
    }
}

impl WorkforceAccessor for MockWorkforce {
    fn max_workers(&self, _building: BuildingId) -> usize {
        self.slots.lock().unwrap().len()
    }

    fn worker_in_slot(&self, _building: BuildingId, slot: usize) -> Option<WorkerInfo> {
        self.slots.lock().unwrap().get(slot).cloned().flatten()
    }

    fn eligible_races(&self, _building: BuildingId) -> Vec<RaceAvailability> {
        self.race_queries.fetch_add(1, Ordering::SeqCst);
        self.races.lock().unwrap().clone()
    }

    fn assign_worker(&self, _building: BuildingId, slot: usize, race: &str) -> bool {
        self.assign_calls.fetch_add(1, Ordering::SeqCst);
        if self.reject.load(Ordering::SeqCst) {
            return false;
        }
        let mut races = self.races.lock().unwrap();
        let Some(entry) = races.iter_mut().find(|r| r.race == race && r.free_count > 0) else {
            return false;
        };
        let mut slots = self.slots.lock().unwrap();
        if slots.get(slot).map_or(true, Option::is_some) {
            return false;
        }
        entry.free_count -= 1;
        let id = self.next_id();
        slots[slot] = Some(WorkerInfo {
            id,
            name: format!("Worker {id}"),
            race: entry.display_name.clone(),
        });
        true
    }

    fn unassign_worker(&self, _building: BuildingId, slot: usize) -> bool {
        self.unassign_calls.fetch_add(1, Ordering::SeqCst);
        let mut slots = self.slots.lock().unwrap();
        let Some(worker) = slots.get_mut(slot).and_then(Option::take) else {
            return false;
        };
        if let Some(entry) = self
            .races
            .lock()
            .unwrap()
            .iter_mut()
            .find(|r| r.display_name == worker.race)
        {
            entry.free_count += 1;
        }
        true
    }
}

// ===== MockUpgrades =====

pub struct MockUpgrades {
    tiers: Mutex<Vec<UpgradeTier>>,
    affordable: AtomicBool,
    unlock_calls: AtomicUsize,
}

impl MockUpgrades {
    pub fn new(tiers: Vec<UpgradeTier>) -> Self {
        Self {
            tiers: Mutex::new(tiers),
            affordable: AtomicBool::new(true),
            unlock_calls: AtomicUsize::new(0),
        }
    }

    /// 覆盖 `can_unlock` 的返回值（模拟资源在快照之后被花掉）
    pub fn set_affordable(&self, affordable: bool) {
        self.affordable.store(affordable, Ordering::SeqCst);
    }

    pub fn unlock_calls(&self) -> usize {
        self.unlock_calls.load(Ordering::SeqCst)
    }
}

impl UpgradeAccessor for MockUpgrades {
    fn upgrade_tiers(&self, _building: BuildingId) -> Vec<UpgradeTier> {
        self.tiers.lock().unwrap().clone()
    }

    fn can_unlock(&self, _building: BuildingId, _tier: usize, _option: usize) -> bool {
        self.affordable.load(Ordering::SeqCst)
    }

    fn unlock(&self, _building: BuildingId, tier: usize, _option: usize) -> bool {
        self.unlock_calls.fetch_add(1, Ordering::SeqCst);
        let mut tiers = self.tiers.lock().unwrap();
        match tiers.get_mut(tier) {
            Some(t) if t.state == TierState::Available => {
                t.state = TierState::Achieved;
                true
            }
            _ => false,
        }
    }
}

// ===== TreeAdapter =====

#[derive(Debug, Clone, Default)]
struct Node {
    name: Option<String>,
    children: Vec<Node>,
}

impl Node {
    fn named(name: &str) -> Self {
        Self {
            name: Some(name.to_string()),
            children: Vec::new(),
        }
    }
}

#[derive(Default)]
struct TreeState {
    sections: Vec<Node>,
    actions: HashMap<Address, ActionOutcome>,
    adjust_outcomes: HashMap<Address, ActionOutcome>,
    failing: HashSet<Address>,
    performed: Vec<Address>,
    adjustments: Vec<(Address, i32, Modifiers)>,
    refreshes: usize,
    clears: usize,
}

/// 由静态树驱动的适配器
///
/// 克隆出来的句柄共享同一棵树，测试可以在适配器交给引擎之后
/// 继续修改树（模拟两次按键之间的游戏状态变化）并检查调用记录。
#[derive(Clone, Default)]
pub struct TreeAdapter {
    state: Arc<Mutex<TreeState>>,
}

impl TreeAdapter {
    pub fn new() -> Self {
        Self::default()
    }

    /// 追加一个分区
    pub fn section(self, name: &str) -> Self {
        self.lock().sections.push(Node::named(name));
        self
    }

    /// 在最后一个分区下追加条目及其子项
    pub fn item(self, name: &str, sub_items: &[&str]) -> Self {
        {
            let mut state = self.lock();
            let section = state.sections.last_mut().unwrap();
            let mut node = Node::named(name);
            node.children = sub_items.iter().map(|s| Node::named(s)).collect();
            section.children.push(node);
        }
        self
    }

    /// 让某个条目在搜索中没有名字
    pub fn unnamed_item(self, section: usize, item: usize) -> Self {
        self.lock().sections[section].children[item].name = None;
        self
    }

    /// 给子项添加 `count` 个子子项，名字为 "Flour detail N"
    pub fn sub_sub_items(self, section: usize, item: usize, sub_item: usize, count: usize) -> Self {
        {
            let mut state = self.lock();
            let sub = &mut state.sections[section].children[item].children[sub_item];
            let base = sub.name.clone().unwrap_or_default();
            sub.children = (1..=count)
                .map(|n| Node::named(&format!("{base} detail {n}")))
                .collect();
        }
        self
    }

    /// 在某个地址上按 Enter 时返回的结果
    pub fn on_action(self, address: Address, outcome: ActionOutcome) -> Self {
        self.lock().actions.insert(address, outcome);
        self
    }

    /// 在某个地址上 +/- 时返回的结果
    pub fn on_adjust(self, address: Address, outcome: ActionOutcome) -> Self {
        self.lock().adjust_outcomes.insert(address, outcome);
        self
    }

    /// 让某个地址的朗读返回适配器错误
    pub fn failing_at(self, address: Address) -> Self {
        self.lock().failing.insert(address);
        self
    }

    /// 共享同一棵树的句柄
    pub fn handle(&self) -> Self {
        self.clone()
    }

    /// 当前树的只读视图
    pub fn snapshot(&self) -> Self {
        self.clone()
    }

    pub fn remove_item(&self, section: usize, item: usize) {
        self.lock().sections[section].children.remove(item);
    }

    pub fn set_sub_items(&self, section: usize, item: usize, names: &[&str]) {
        self.lock().sections[section].children[item].children =
            names.iter().map(|s| Node::named(s)).collect();
    }

    pub fn refresh_count(&self) -> usize {
        self.lock().refreshes
    }

    pub fn clear_count(&self) -> usize {
        self.lock().clears
    }

    pub fn performed(&self) -> Vec<Address> {
        self.lock().performed.clone()
    }

    pub fn adjustments(&self) -> Vec<(Address, i32, Modifiers)> {
        self.lock().adjustments.clone()
    }

    fn lock(&self) -> MutexGuard<'_, TreeState> {
        self.state.lock().unwrap()
    }

    fn with_node<R>(&self, address: &Address, f: impl FnOnce(&Node) -> R) -> Option<R> {
        let state = self.lock();
        let mut node = state.sections.get(address.section)?;
        for level in [Level::Item, Level::SubItem, Level::SubSubItem] {
            if address.level >= level {
                node = node.children.get(address.index_at(level))?;
            }
        }
        Some(f(node))
    }

    fn children(&self, address: &Address) -> usize {
        self.with_node(address, |n| n.children.len()).unwrap_or(0)
    }

    fn describe(&self, address: &Address) -> NavResult<String> {
        if self.lock().failing.contains(address) {
            return Err(NavError::Adapter(format!("broken node at {address}")));
        }
        self.with_node(address, |n| {
            n.name.clone().unwrap_or_else(|| "Unnamed".to_string())
        })
        .ok_or_else(|| NavError::StaleSnapshot(address.to_string()))
    }

    fn perform(&self, address: Address) -> ActionOutcome {
        let mut state = self.lock();
        state.performed.push(address);
        state
            .actions
            .get(&address)
            .cloned()
            .unwrap_or(ActionOutcome::Unhandled)
    }

    fn adjust(&self, address: Address, delta: i32, modifiers: Modifiers) -> ActionOutcome {
        let mut state = self.lock();
        state.adjustments.push((address, delta, modifiers));
        state
            .adjust_outcomes
            .get(&address)
            .cloned()
            .unwrap_or(ActionOutcome::Unhandled)
    }
}

impl BuildingAdapter for TreeAdapter {
    fn title(&self) -> String {
        "Test building".to_string()
    }

    fn refresh_data(&mut self) {
        self.lock().refreshes += 1;
    }

    fn clear_data(&mut self) {
        self.lock().clears += 1;
    }

    fn section_count(&self) -> usize {
        self.lock().sections.len()
    }

    fn section_name(&self, section: usize) -> Option<String> {
        self.with_node(&Address::section(section), |n| n.name.clone())
            .flatten()
    }

    fn item_count(&self, section: usize) -> usize {
        self.children(&Address::section(section))
    }

    fn sub_item_count(&self, section: usize, item: usize) -> usize {
        self.children(&Address::item(section, item))
    }

    fn sub_sub_item_count(&self, section: usize, item: usize, sub_item: usize) -> usize {
        self.children(&Address::sub_item(section, item, sub_item))
    }

    fn announce_section(&mut self, section: usize) -> NavResult<String> {
        self.describe(&Address::section(section))
    }

    fn announce_item(&mut self, section: usize, item: usize) -> NavResult<String> {
        self.describe(&Address::item(section, item))
    }

    fn announce_sub_item(&mut self, section: usize, item: usize, sub_item: usize) -> NavResult<String> {
        self.describe(&Address::sub_item(section, item, sub_item))
    }

    fn announce_sub_sub_item(
        &mut self,
        section: usize,
        item: usize,
        sub_item: usize,
        sub_sub_item: usize,
    ) -> NavResult<String> {
        self.describe(&Address::sub_sub_item(section, item, sub_item, sub_sub_item))
    }

    fn perform_section_action(&mut self, section: usize) -> ActionOutcome {
        self.perform(Address::section(section))
    }

    fn perform_item_action(&mut self, section: usize, item: usize) -> ActionOutcome {
        self.perform(Address::item(section, item))
    }

    fn perform_sub_item_action(&mut self, section: usize, item: usize, sub_item: usize) -> ActionOutcome {
        self.perform(Address::sub_item(section, item, sub_item))
    }

    fn perform_sub_sub_item_action(
        &mut self,
        section: usize,
        item: usize,
        sub_item: usize,
        sub_sub_item: usize,
    ) -> ActionOutcome {
        self.perform(Address::sub_sub_item(section, item, sub_item, sub_sub_item))
    }

    fn adjust_section_value(&mut self, section: usize, delta: i32, modifiers: Modifiers) -> ActionOutcome {
        self.adjust(Address::section(section), delta, modifiers)
    }

    fn adjust_item_value(
        &mut self,
        section: usize,
        item: usize,
        delta: i32,
        modifiers: Modifiers,
    ) -> ActionOutcome {
        self.adjust(Address::item(section, item), delta, modifiers)
    }

    fn name_of(&self, address: &Address) -> Option<String> {
        self.with_node(address, |n| n.name.clone()).flatten()
    }
}
