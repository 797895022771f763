//! 火炉适配器
//!
//! 分区：热度（当前值、目标值，+/- 调整目标）、燃料（Enter 允许/禁止）、守火人。

use std::sync::Arc;

use panel_reader_core::error::{NavError, NavResult};
use panel_reader_core::services::WorkerSlots;
use panel_reader_core::types::{
    ActionOutcome, Address, BuildingId, Level, Modifiers, SectionList,
};
use panel_reader_core::{BuildingAdapter, WorkforceAccessor};

use super::{adjusted, rejected, snapshot};
use crate::backend::{BuildingSummary, FuelInfo, HearthAccessor};
use crate::i18n::{fill, t};

/// 热度分区的条目
const HEAT_CURRENT: usize = 0;
const HEAT_TARGET: usize = 1;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum HearthSection {
    Heat,
    Fuel,
    Workers,
}

/// 火炉适配器
pub struct HearthAdapter {
    title: String,
    building: BuildingId,
    hearth: Arc<dyn HearthAccessor>,
    sections: SectionList<HearthSection>,
    heat: u32,
    target: u32,
    fuels: Vec<FuelInfo>,
    workers: WorkerSlots,
}

impl HearthAdapter {
    pub fn new(
        building: &BuildingSummary,
        hearth: Arc<dyn HearthAccessor>,
        workforce: Arc<dyn WorkforceAccessor>,
    ) -> Self {
        Self {
            title: building.name.clone(),
            building: building.id,
            hearth,
            sections: SectionList::new(),
            heat: 0,
            target: 0,
            fuels: Vec::new(),
            workers: WorkerSlots::new(workforce, building.id),
        }
    }

    fn adjust_target(&self, delta: i32, modifiers: Modifiers) -> ActionOutcome {
        let texts = &t().panel.hearth;
        let Some(target) = adjusted(self.target, delta, modifiers.step(), 100) else {
            return ActionOutcome::Unhandled;
        };
        if !self.hearth.set_target_heat(self.building, target) {
            return rejected(texts.section_heat);
        }
        ActionOutcome::success(fill(texts.target, &[("target", &target)]))
    }

    fn toggle_fuel(&self, index: usize) -> ActionOutcome {
        let Some(fuel) = self.fuels.get(index) else {
            return ActionOutcome::Unhandled;
        };
        let allowed = !fuel.allowed;
        if !self.hearth.set_fuel_allowed(self.building, index, allowed) {
            return rejected(&fuel.good);
        }
        let texts = &t().panel.hearth;
        let template = if allowed {
            texts.fuel_allowed
        } else {
            texts.fuel_forbidden
        };
        ActionOutcome::toggled(allowed, fill(template, &[("good", &fuel.good)]))
    }
}

impl BuildingAdapter for HearthAdapter {
    fn title(&self) -> String {
        self.title.clone()
    }

    fn refresh_data(&mut self) {
        self.heat = self.hearth.heat(self.building);
        self.target = self.hearth.target_heat(self.building);
        self.fuels = self.hearth.fuels(self.building);
        self.workers.refresh();

        let texts = &t().panel.hearth;
        self.sections.clear();
        self.sections.push(texts.section_heat, HearthSection::Heat);
        self.sections
            .push_if(!self.fuels.is_empty(), texts.section_fuel, HearthSection::Fuel);
        self.sections.push_if(
            self.workers.has_slots(),
            texts.section_workers,
            HearthSection::Workers,
        );
    }

    fn clear_data(&mut self) {
        self.sections.clear();
        self.fuels.clear();
        self.workers.clear();
    }

    fn section_count(&self) -> usize {
        self.sections.len()
    }

    fn section_name(&self, section: usize) -> Option<String> {
        self.sections.name(section).map(ToString::to_string)
    }

    fn item_count(&self, section: usize) -> usize {
        match self.sections.kind(section) {
            Some(HearthSection::Heat) => 2,
            Some(HearthSection::Fuel) => self.fuels.len(),
            Some(HearthSection::Workers) => self.workers.item_count(),
            None => 0,
        }
    }

    fn sub_item_count(&self, section: usize, item: usize) -> usize {
        match self.sections.kind(section) {
            Some(HearthSection::Workers) => self.workers.sub_item_count(item),
            _ => 0,
        }
    }

    fn announce_item(&mut self, section: usize, item: usize) -> NavResult<String> {
        let texts = &t().panel.hearth;
        match self.sections.kind(section) {
            Some(HearthSection::Heat) => match item {
                HEAT_CURRENT => Ok(fill(texts.heat, &[("heat", &self.heat)])),
                HEAT_TARGET => Ok(fill(texts.target, &[("target", &self.target)])),
                _ => Err(NavError::AddressOutOfRange {
                    level: Level::Item,
                    index: item,
                    count: 2,
                }),
            },
            Some(HearthSection::Fuel) => {
                let fuel = snapshot(&self.fuels, Level::Item, item)?;
                let state = if fuel.allowed {
                    texts.allowed
                } else {
                    texts.forbidden
                };
                Ok(fill(
                    texts.fuel,
                    &[("good", &fuel.good), ("state", &state), ("stock", &fuel.stock)],
                ))
            }
            Some(HearthSection::Workers) => self.workers.announce_item(item),
            None => Err(NavError::SectionNotFound(section)),
        }
    }

    fn announce_sub_item(&mut self, section: usize, item: usize, sub_item: usize) -> NavResult<String> {
        match self.sections.kind(section) {
            Some(HearthSection::Workers) => self.workers.announce_sub_item(item, sub_item),
            Some(_) => Err(NavError::Unsupported(Level::SubItem)),
            None => Err(NavError::SectionNotFound(section)),
        }
    }

    fn perform_item_action(&mut self, section: usize, item: usize) -> ActionOutcome {
        match self.sections.kind(section) {
            Some(HearthSection::Fuel) => self.toggle_fuel(item),
            _ => ActionOutcome::Unhandled,
        }
    }

    fn perform_sub_item_action(&mut self, section: usize, item: usize, sub_item: usize) -> ActionOutcome {
        match self.sections.kind(section) {
            Some(HearthSection::Workers) => self.workers.perform_sub_item_action(item, sub_item),
            _ => ActionOutcome::Unhandled,
        }
    }

    fn adjust_section_value(&mut self, section: usize, delta: i32, modifiers: Modifiers) -> ActionOutcome {
        match self.sections.kind(section) {
            Some(HearthSection::Heat) => self.adjust_target(delta, modifiers),
            _ => ActionOutcome::Unhandled,
        }
    }

    fn adjust_item_value(
        &mut self,
        section: usize,
        item: usize,
        delta: i32,
        modifiers: Modifiers,
    ) -> ActionOutcome {
        match self.sections.kind(section) {
            Some(HearthSection::Heat) if item == HEAT_TARGET => self.adjust_target(delta, modifiers),
            _ => ActionOutcome::Unhandled,
        }
    }

    fn name_of(&self, address: &Address) -> Option<String> {
        let kind = self.sections.kind(address.section)?;
        match (address.level, kind) {
            (Level::Section, _) => self.section_name(address.section),
            (Level::Item, HearthSection::Fuel) => {
                self.fuels.get(address.item).map(|f| f.good.clone())
            }
            (Level::Item, HearthSection::Workers) => self.workers.name_of_item(address.item),
            (Level::SubItem, HearthSection::Workers) => {
                self.workers.name_of_sub_item(address.item, address.sub_item)
            }
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    #![allow(clippy::unwrap_used)]

    use panel_reader_core::types::{AudioCue, NavCommand};
    use panel_reader_core::{Navigator, PanelContext};

    use super::*;
    use crate::backend::{Settlement, SettlementDirectory, SpeechEvent, SpeechLog};

    const HEARTH: BuildingId = BuildingId(3);

    fn focused(settlement: &Arc<Settlement>) -> (Navigator, Arc<SpeechLog>) {
        let summary = settlement.building(HEARTH).unwrap();
        let log = Arc::new(SpeechLog::new());
        let mut nav = Navigator::new(PanelContext::new(log.clone(), log.clone()));
        nav.on_focus(Box::new(HearthAdapter::new(
            &summary,
            settlement.clone(),
            settlement.clone(),
        )));
        (nav, log)
    }

    #[test]
    fn opens_on_heat() {
        let settlement = Arc::new(Settlement::demo());
        let (_nav, log) = focused(&settlement);
        assert_eq!(log.last_utterance().unwrap(), "Ancient Hearth, Heat");
    }

    #[test]
    fn plus_on_the_heat_section_raises_the_target() {
        let settlement = Arc::new(Settlement::demo());
        let (mut nav, log) = focused(&settlement);
        nav.on_key(NavCommand::Increment(Modifiers::SHIFT));
        assert_eq!(log.last_utterance().unwrap(), "Target heat 80 percent");
        assert_eq!(settlement.target_heat(HEARTH), 80);

        nav.on_key(NavCommand::Enter);
        nav.on_key(NavCommand::Down);
        assert_eq!(log.last_utterance().unwrap(), "Target heat 80 percent");
        nav.on_key(NavCommand::Increment(Modifiers {
            shift: false,
            ctrl: true,
        }));
        assert_eq!(settlement.target_heat(HEARTH), 100);

        // 当前热度条目不可调整
        nav.on_key(NavCommand::Up);
        let count = log.len();
        nav.on_key(NavCommand::Decrement(Modifiers::NONE));
        assert_eq!(log.len(), count);
    }

    #[test]
    fn enter_toggles_fuel_with_matching_cue() {
        let settlement = Arc::new(Settlement::demo());
        let (mut nav, log) = focused(&settlement);
        nav.on_key(NavCommand::Down);
        nav.on_key(NavCommand::Enter);
        assert_eq!(log.last_utterance().unwrap(), "Coal, allowed, 3 in stock");

        nav.on_key(NavCommand::Enter);
        assert_eq!(log.last_utterance().unwrap(), "Coal forbidden");
        let cues: Vec<_> = log
            .recent(5)
            .into_iter()
            .filter_map(|e| match e.event {
                SpeechEvent::Cue(cue) => Some(cue),
                SpeechEvent::Utterance(_) => None,
            })
            .collect();
        assert_eq!(cues.last(), Some(&AudioCue::ToggleOff));
        assert!(!settlement.fuels(HEARTH)[0].allowed);
    }

    #[test]
    fn firekeeper_slot_uses_the_worker_navigator() {
        let settlement = Arc::new(Settlement::demo());
        let (mut nav, log) = focused(&settlement);
        nav.on_key(NavCommand::Last);
        assert_eq!(log.last_utterance().unwrap(), "Firekeepers");
        nav.on_key(NavCommand::Enter);
        assert_eq!(log.last_utterance().unwrap(), "Slot 1, Fa, Lizard");
        nav.on_key(NavCommand::Enter);
        nav.on_key(NavCommand::Enter);
        assert_eq!(log.last_utterance().unwrap(), "Unassigned Fa");
        assert!(settlement.worker_in_slot(HEARTH, 0).is_none());
    }
}
