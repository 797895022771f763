//! 仓库适配器
//!
//! 唯一用满四层的面板：存储 → 分类 → 货物 → 操作（接收/拒收、丢弃）。
//! 丢弃成功后光标收回到货物层。

use std::sync::Arc;

use panel_reader_core::error::{NavError, NavResult};
use panel_reader_core::types::{ActionOutcome, Address, BuildingId, Level, SectionList};
use panel_reader_core::BuildingAdapter;

use super::{rejected, snapshot};
use crate::backend::{BuildingSummary, GoodCategory, StorageAccessor, StoredGood};
use crate::i18n::{fill, t};

/// 一次丢弃的数量
const DISCARD_AMOUNT: u32 = 10;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum WarehouseSection {
    Storage,
    Summary,
}

/// 货物下的操作
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum GoodAction {
    ToggleAccepting,
    Discard,
}

const GOOD_ACTIONS: [GoodAction; 2] = [GoodAction::ToggleAccepting, GoodAction::Discard];

/// 仓库适配器
pub struct WarehouseAdapter {
    title: String,
    building: BuildingId,
    storage: Arc<dyn StorageAccessor>,
    sections: SectionList<WarehouseSection>,
    categories: Vec<GoodCategory>,
    summary: Vec<String>,
}

impl WarehouseAdapter {
    pub fn new(building: &BuildingSummary, storage: Arc<dyn StorageAccessor>) -> Self {
        Self {
            title: building.name.clone(),
            building: building.id,
            storage,
            sections: SectionList::new(),
            categories: Vec::new(),
            summary: Vec::new(),
        }
    }

    fn is_storage(&self, section: usize) -> bool {
        self.sections.kind(section) == Some(WarehouseSection::Storage)
    }

    fn good(&self, category: usize, good: usize) -> NavResult<&StoredGood> {
        let category = snapshot(&self.categories, Level::Item, category)?;
        snapshot(&category.goods, Level::SubItem, good)
    }

    fn build_summary(&self) -> Vec<String> {
        let texts = &t().panel.warehouse;
        let goods = || self.categories.iter().flat_map(|c| &c.goods);
        let total: u32 = goods().map(|g| g.amount).sum();
        let refused = goods().filter(|g| !g.accepting).count();
        vec![
            fill(texts.total_stored, &[("total", &total)]),
            fill(texts.refused_count, &[("count", &refused)]),
        ]
    }

    fn describe_action(good: &StoredGood, action: GoodAction) -> String {
        let texts = &t().panel.warehouse;
        match action {
            GoodAction::ToggleAccepting if good.accepting => texts.action_refuse.to_string(),
            GoodAction::ToggleAccepting => texts.action_accept.to_string(),
            GoodAction::Discard => fill(
                texts.action_discard,
                &[("amount", &DISCARD_AMOUNT.min(good.amount))],
            ),
        }
    }

    fn perform(&self, good: &StoredGood, action: GoodAction) -> ActionOutcome {
        let texts = &t().panel.warehouse;
        match action {
            GoodAction::ToggleAccepting => {
                let accepting = !good.accepting;
                if !self.storage.set_accepting(self.building, &good.good, accepting) {
                    return rejected(&good.good);
                }
                let template = if accepting {
                    texts.accepted
                } else {
                    texts.refused
                };
                ActionOutcome::toggled(accepting, fill(template, &[("good", &good.good)]))
            }
            GoodAction::Discard => {
                let amount = DISCARD_AMOUNT.min(good.amount);
                if amount == 0 || !self.storage.discard(self.building, &good.good, amount) {
                    return ActionOutcome::failure(fill(
                        texts.nothing_to_discard,
                        &[("good", &good.good)],
                    ));
                }
                tracing::info!("Discarded {amount} {} from {}", good.good, self.building);
                ActionOutcome::success(fill(
                    texts.discarded,
                    &[("amount", &amount), ("good", &good.good)],
                ))
                .collapsing_to(Level::SubItem)
            }
        }
    }
}

impl BuildingAdapter for WarehouseAdapter {
    fn title(&self) -> String {
        self.title.clone()
    }

    fn refresh_data(&mut self) {
        self.categories = self.storage.storage(self.building);
        self.summary = self.build_summary();

        let texts = &t().panel.warehouse;
        self.sections.clear();
        self.sections.push_if(
            !self.categories.is_empty(),
            texts.section_storage,
            WarehouseSection::Storage,
        );
        self.sections
            .push(texts.section_summary, WarehouseSection::Summary);
    }

    fn clear_data(&mut self) {
        self.sections.clear();
        self.categories.clear();
        self.summary.clear();
    }

    fn section_count(&self) -> usize {
        self.sections.len()
    }

    fn section_name(&self, section: usize) -> Option<String> {
        self.sections.name(section).map(ToString::to_string)
    }

    fn item_count(&self, section: usize) -> usize {
        match self.sections.kind(section) {
            Some(WarehouseSection::Storage) => self.categories.len(),
            Some(WarehouseSection::Summary) => self.summary.len(),
            None => 0,
        }
    }

    fn sub_item_count(&self, section: usize, item: usize) -> usize {
        if !self.is_storage(section) {
            return 0;
        }
        self.categories.get(item).map_or(0, |c| c.goods.len())
    }

    fn sub_sub_item_count(&self, section: usize, item: usize, sub_item: usize) -> usize {
        if self.is_storage(section) && self.good(item, sub_item).is_ok() {
            GOOD_ACTIONS.len()
        } else {
            0
        }
    }

    fn announce_item(&mut self, section: usize, item: usize) -> NavResult<String> {
        match self.sections.kind(section) {
            Some(WarehouseSection::Storage) => {
                let category = snapshot(&self.categories, Level::Item, item)?;
                Ok(fill(
                    t().panel.warehouse.category,
                    &[("name", &category.name), ("count", &category.goods.len())],
                ))
            }
            Some(WarehouseSection::Summary) => snapshot(&self.summary, Level::Item, item).cloned(),
            None => Err(NavError::SectionNotFound(section)),
        }
    }

    fn announce_sub_item(&mut self, section: usize, item: usize, sub_item: usize) -> NavResult<String> {
        if !self.is_storage(section) {
            return Err(NavError::Unsupported(Level::SubItem));
        }
        let texts = &t().panel.warehouse;
        let good = self.good(item, sub_item)?;
        let state = if good.accepting {
            texts.accepting
        } else {
            texts.refusing
        };
        Ok(fill(
            texts.good,
            &[("good", &good.good), ("amount", &good.amount), ("state", &state)],
        ))
    }

    fn announce_sub_sub_item(
        &mut self,
        section: usize,
        item: usize,
        sub_item: usize,
        sub_sub_item: usize,
    ) -> NavResult<String> {
        if !self.is_storage(section) {
            return Err(NavError::Unsupported(Level::SubSubItem));
        }
        let good = self.good(item, sub_item)?;
        let action = snapshot(&GOOD_ACTIONS, Level::SubSubItem, sub_sub_item)?;
        Ok(Self::describe_action(good, *action))
    }

    fn perform_sub_sub_item_action(
        &mut self,
        section: usize,
        item: usize,
        sub_item: usize,
        sub_sub_item: usize,
    ) -> ActionOutcome {
        if !self.is_storage(section) {
            return ActionOutcome::Unhandled;
        }
        match (self.good(item, sub_item), GOOD_ACTIONS.get(sub_sub_item)) {
            (Ok(good), Some(action)) => self.perform(good, *action),
            _ => ActionOutcome::Unhandled,
        }
    }

    fn name_of(&self, address: &Address) -> Option<String> {
        match address.level {
            Level::Section => self.section_name(address.section),
            Level::Item if self.is_storage(address.section) => {
                self.categories.get(address.item).map(|c| c.name.clone())
            }
            Level::SubItem if self.is_storage(address.section) => self
                .good(address.item, address.sub_item)
                .ok()
                .map(|g| g.good.clone()),
            _ => None,
        }
    }
}
