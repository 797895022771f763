//! 工坊适配器
//!
//! 分区：状态、配方、工人、升级。配方上按 Enter 启用/停用，
//! 按 +/- 调整生产上限；工人和升级交给核心库的子导航器。

use std::sync::Arc;

use panel_reader_core::error::{NavError, NavResult};
use panel_reader_core::services::{UpgradeTiers, WorkerSlots};
use panel_reader_core::types::{
    ActionOutcome, Address, BuildingId, Level, Modifiers, SectionList,
};
use panel_reader_core::{BuildingAdapter, UpgradeAccessor, WorkforceAccessor};

use super::{adjusted, rejected, snapshot};
use crate::backend::{BuildingSummary, ProductionAccessor, RecipeInfo};
use crate::i18n::{fill, t};

/// 生产上限的最大值
const MAX_LIMIT: u32 = 999;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum ProductionSection {
    Status,
    Recipes,
    Workers,
    Upgrades,
}

/// 工坊适配器
pub struct ProductionAdapter {
    title: String,
    building: BuildingId,
    production: Arc<dyn ProductionAccessor>,
    sections: SectionList<ProductionSection>,
    status: Vec<String>,
    recipes: Vec<RecipeInfo>,
    /// 与 `recipes` 一一对应的产品库存
    stock: Vec<u32>,
    workers: WorkerSlots,
    upgrades: UpgradeTiers,
}

impl ProductionAdapter {
    pub fn new(
        building: &BuildingSummary,
        production: Arc<dyn ProductionAccessor>,
        workforce: Arc<dyn WorkforceAccessor>,
        upgrades: Arc<dyn UpgradeAccessor>,
    ) -> Self {
        Self {
            title: building.name.clone(),
            building: building.id,
            production,
            sections: SectionList::new(),
            status: Vec::new(),
            recipes: Vec::new(),
            stock: Vec::new(),
            workers: WorkerSlots::new(workforce, building.id),
            upgrades: UpgradeTiers::new(upgrades, building.id),
        }
    }

    /// 当前正在生产的配方：第一个启用且未达到上限的
    fn active_recipe(&self) -> Option<&RecipeInfo> {
        self.recipes
            .iter()
            .zip(&self.stock)
            .find(|(r, stock)| r.enabled && (r.limit == 0 || **stock < r.limit))
            .map(|(r, _)| r)
    }

    fn build_status(&self) -> Vec<String> {
        let texts = &t().panel.production;
        let mut lines = Vec::new();
        if self.workers.has_slots() {
            lines.push(fill(
                texts.status_workers,
                &[
                    ("count", &self.workers.occupied_count()),
                    ("max", &self.workers.item_count()),
                ],
            ));
        }
        match self.active_recipe() {
            Some(recipe) if self.workers.occupied_count() > 0 => lines.push(fill(
                texts.status_producing,
                &[("product", &recipe.product), ("progress", &recipe.progress)],
            )),
            _ => lines.push(texts.status_idle.to_string()),
        }
        if self.upgrades.has_tiers() {
            lines.push(fill(
                texts.status_upgrades,
                &[
                    ("achieved", &self.upgrades.achieved_count()),
                    ("total", &self.upgrades.item_count()),
                ],
            ));
        }
        lines
    }

    fn describe_recipe(&self, index: usize) -> NavResult<String> {
        let texts = &t().panel.production;
        let recipe = snapshot(&self.recipes, Level::Item, index)?;
        let ingredients = if recipe.ingredients.is_empty() {
            texts.no_ingredients.to_string()
        } else {
            recipe
                .ingredients
                .iter()
                .map(|(good, amount)| format!("{amount} {good}"))
                .collect::<Vec<_>>()
                .join(", ")
        };
        let limit = if recipe.limit == 0 {
            texts.no_limit.to_string()
        } else {
            fill(texts.limit, &[("limit", &recipe.limit)])
        };
        let state = if recipe.enabled {
            texts.enabled
        } else {
            texts.disabled
        };
        Ok(fill(
            texts.recipe,
            &[
                ("product", &recipe.product),
                ("state", &state),
                ("ingredients", &ingredients),
                ("limit", &limit),
                ("stock", &self.stock.get(index).copied().unwrap_or(0)),
            ],
        ))
    }

    fn toggle_recipe(&self, index: usize) -> ActionOutcome {
        let Some(recipe) = self.recipes.get(index) else {
            return ActionOutcome::Unhandled;
        };
        let enabled = !recipe.enabled;
        if !self.production.set_recipe_enabled(self.building, index, enabled) {
            return rejected(&recipe.product);
        }
        let texts = &t().panel.production;
        let template = if enabled {
            texts.recipe_enabled
        } else {
            texts.recipe_disabled
        };
        ActionOutcome::toggled(enabled, fill(template, &[("product", &recipe.product)]))
    }

    fn adjust_limit(&self, index: usize, delta: i32, modifiers: Modifiers) -> ActionOutcome {
        let Some(recipe) = self.recipes.get(index) else {
            return ActionOutcome::Unhandled;
        };
        let Some(limit) = adjusted(recipe.limit, delta, modifiers.step(), MAX_LIMIT) else {
            return ActionOutcome::Unhandled;
        };
        if !self.production.set_recipe_limit(self.building, index, limit) {
            return rejected(&recipe.product);
        }
        let texts = &t().panel.production;
        let message = if limit == 0 {
            fill(texts.limit_removed, &[("product", &recipe.product)])
        } else {
            fill(
                texts.limit_set,
                &[("product", &recipe.product), ("limit", &limit)],
            )
        };
        ActionOutcome::success(message)
    }
}

impl BuildingAdapter for ProductionAdapter {
    fn title(&self) -> String {
        self.title.clone()
    }

    fn refresh_data(&mut self) {
        self.recipes = self.production.recipes(self.building);
        self.stock = self
            .recipes
            .iter()
            .map(|r| self.production.stock(&r.product))
            .collect();
        self.workers.refresh();
        self.upgrades.refresh();
        self.status = self.build_status();

        let texts = &t().panel.production;
        self.sections.clear();
        self.sections
            .push(texts.section_status, ProductionSection::Status);
        self.sections.push_if(
            !self.recipes.is_empty(),
            texts.section_recipes,
            ProductionSection::Recipes,
        );
        self.sections.push_if(
            self.workers.has_slots(),
            texts.section_workers,
            ProductionSection::Workers,
        );
        self.sections.push_if(
            self.upgrades.has_tiers(),
            texts.section_upgrades,
            ProductionSection::Upgrades,
        );
    }

    fn clear_data(&mut self) {
        self.sections.clear();
        self.status.clear();
        self.recipes.clear();
        self.stock.clear();
        self.workers.clear();
        self.upgrades.clear();
    }

    fn section_count(&self) -> usize {
        self.sections.len()
    }

    fn section_name(&self, section: usize) -> Option<String> {
        self.sections.name(section).map(ToString::to_string)
    }

    fn item_count(&self, section: usize) -> usize {
        match self.sections.kind(section) {
            Some(ProductionSection::Status) => self.status.len(),
            Some(ProductionSection::Recipes) => self.recipes.len(),
            Some(ProductionSection::Workers) => self.workers.item_count(),
            Some(ProductionSection::Upgrades) => self.upgrades.item_count(),
            None => 0,
        }
    }

    fn sub_item_count(&self, section: usize, item: usize) -> usize {
        match self.sections.kind(section) {
            Some(ProductionSection::Workers) => self.workers.sub_item_count(item),
            Some(ProductionSection::Upgrades) => self.upgrades.sub_item_count(item),
            _ => 0,
        }
    }

    fn announce_item(&mut self, section: usize, item: usize) -> NavResult<String> {
        match self.sections.kind(section) {
            Some(ProductionSection::Status) => {
                snapshot(&self.status, Level::Item, item).cloned()
            }
            Some(ProductionSection::Recipes) => self.describe_recipe(item),
            Some(ProductionSection::Workers) => self.workers.announce_item(item),
            Some(ProductionSection::Upgrades) => self.upgrades.announce_item(item),
            None => Err(NavError::SectionNotFound(section)),
        }
    }

    fn announce_sub_item(&mut self, section: usize, item: usize, sub_item: usize) -> NavResult<String> {
        match self.sections.kind(section) {
            Some(ProductionSection::Workers) => self.workers.announce_sub_item(item, sub_item),
            Some(ProductionSection::Upgrades) => self.upgrades.announce_sub_item(item, sub_item),
            Some(_) => Err(NavError::Unsupported(Level::SubItem)),
            None => Err(NavError::SectionNotFound(section)),
        }
    }

    fn perform_item_action(&mut self, section: usize, item: usize) -> ActionOutcome {
        match self.sections.kind(section) {
            Some(ProductionSection::Recipes) => self.toggle_recipe(item),
            Some(ProductionSection::Upgrades) => self.upgrades.perform_item_action(item),
            _ => ActionOutcome::Unhandled,
        }
    }

    fn perform_sub_item_action(&mut self, section: usize, item: usize, sub_item: usize) -> ActionOutcome {
        match self.sections.kind(section) {
            Some(ProductionSection::Workers) => self.workers.perform_sub_item_action(item, sub_item),
            Some(ProductionSection::Upgrades) => {
                self.upgrades.perform_sub_item_action(item, sub_item)
            }
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
            Some(ProductionSection::Recipes) => self.adjust_limit(item, delta, modifiers),
            _ => ActionOutcome::Unhandled,
        }
    }

    fn name_of(&self, address: &Address) -> Option<String> {
        let kind = self.sections.kind(address.section)?;
        match (address.level, kind) {
            (Level::Section, _) => self.section_name(address.section),
            (Level::Item, ProductionSection::Recipes) => {
                self.recipes.get(address.item).map(|r| r.product.clone())
            }
            (Level::Item, ProductionSection::Workers) => self.workers.name_of_item(address.item),
            (Level::Item, ProductionSection::Upgrades) => self.upgrades.name_of_item(address.item),
            (Level::SubItem, ProductionSection::Workers) => {
                self.workers.name_of_sub_item(address.item, address.sub_item)
            }
            (Level::SubItem, ProductionSection::Upgrades) => {
                self.upgrades.name_of_sub_item(address.item, address.sub_item)
            }
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    #![allow(clippy::unwrap_used)]

    use panel_reader_core::types::{Cursor, KeyResponse, NavCommand};
    use panel_reader_core::{Navigator, PanelContext};

    use super::*;
    use crate::backend::{Settlement, SettlementDirectory, SpeechLog};

    fn mill(settlement: &Arc<Settlement>) -> ProductionAdapter {
        let summary = settlement.building(BuildingId(1)).unwrap();
        let mut adapter = ProductionAdapter::new(
            &summary,
            settlement.clone(),
            settlement.clone(),
            settlement.clone(),
        );
        adapter.refresh_data();
        adapter
    }

    fn navigator(settlement: &Arc<Settlement>) -> (Navigator, Arc<SpeechLog>) {
        let log = Arc::new(SpeechLog::new());
        let mut nav = Navigator::new(PanelContext::new(log.clone(), log.clone()));
        nav.on_focus(Box::new(mill(settlement)));
        (nav, log)
    }

    fn spoken(log: &SpeechLog) -> String {
        log.last_utterance().unwrap()
    }

    #[test]
    fn sections_follow_the_building() {
        let settlement = Arc::new(Settlement::demo());
        let adapter = mill(&settlement);
        let names: Vec<_> = (0..adapter.section_count())
            .filter_map(|s| adapter.section_name(s))
            .collect();
        assert_eq!(names, ["Status", "Recipes", "Workers", "Upgrades"]);
    }

    #[test]
    fn status_reports_workers_and_production() {
        let settlement = Arc::new(Settlement::demo());
        settlement.tick();
        let mut adapter = mill(&settlement);
        assert_eq!(adapter.announce_item(0, 0).unwrap(), "1 of 2 workers");
        assert_eq!(
            adapter.announce_item(0, 1).unwrap(),
            "Producing Planks, 20 percent"
        );
        assert_eq!(adapter.announce_item(0, 2).unwrap(), "0 of 2 upgrades");
    }

    #[test]
    fn recipe_announcement_lists_inputs_and_limit() {
        let settlement = Arc::new(Settlement::demo());
        let mut adapter = mill(&settlement);
        assert_eq!(
            adapter.announce_item(1, 0).unwrap(),
            "Planks, enabled, needs 2 Wood, no limit, 12 in stock"
        );
        assert!(adapter.announce_item(1, 5).is_err());
    }

    #[test]
    fn enter_toggles_a_recipe() {
        let settlement = Arc::new(Settlement::demo());
        let (mut nav, log) = navigator(&settlement);
        nav.on_key(NavCommand::Down);
        nav.on_key(NavCommand::Enter);
        nav.on_key(NavCommand::Enter);
        assert_eq!(spoken(&log), "Planks disabled");
        assert!(!settlement.recipes(BuildingId(1))[0].enabled);

        nav.on_key(NavCommand::Enter);
        assert_eq!(spoken(&log), "Planks enabled");
    }

    #[test]
    fn plus_and_minus_change_the_limit() {
        let settlement = Arc::new(Settlement::demo());
        let (mut nav, log) = navigator(&settlement);
        nav.on_key(NavCommand::Down);
        nav.on_key(NavCommand::Enter);

        nav.on_key(NavCommand::Increment(Modifiers::SHIFT));
        assert_eq!(spoken(&log), "Planks limit 10");
        nav.on_key(NavCommand::Increment(Modifiers::NONE));
        assert_eq!(spoken(&log), "Planks limit 11");
        nav.on_key(NavCommand::Decrement(Modifiers {
            shift: false,
            ctrl: true,
        }));
        assert_eq!(spoken(&log), "Planks no limit");
        assert_eq!(settlement.recipes(BuildingId(1))[0].limit, 0);

        // 已经是 0，再减没有效果也不朗读
        let count = log.len();
        nav.on_key(NavCommand::Decrement(Modifiers::NONE));
        assert_eq!(log.len(), count);
    }

    #[test]
    fn assigning_a_worker_through_the_panel() {
        let settlement = Arc::new(Settlement::demo());
        let (mut nav, log) = navigator(&settlement);
        for command in [NavCommand::Down, NavCommand::Down, NavCommand::Enter] {
            nav.on_key(command);
        }
        assert_eq!(spoken(&log), "Slot 1, Ada, Beaver");
        nav.on_key(NavCommand::Down);
        nav.on_key(NavCommand::Enter);
        assert_eq!(spoken(&log), "Beaver, 2 free");
        nav.on_key(NavCommand::Enter);
        assert_eq!(spoken(&log), "Assigned Bo, Beaver");
        assert_eq!(nav.cursor().unwrap().address().level, Level::Item);

        nav.on_key(NavCommand::Enter);
        nav.on_key(NavCommand::Down);
        assert_eq!(spoken(&log), "Beaver, 1 free");
    }

    #[test]
    fn worker_leaving_between_keys_is_clamped() {
        let settlement = Arc::new(Settlement::demo());
        let (mut nav, log) = navigator(&settlement);
        for command in [
            NavCommand::Down,
            NavCommand::Down,
            NavCommand::Enter,
            NavCommand::Enter,
            NavCommand::Down,
            NavCommand::Down,
        ] {
            nav.on_key(command);
        }
        // Ada 的工位：Unassign Ada, Beaver, Human
        assert_eq!(spoken(&log), "Human, 2 free");
        assert!(settlement.unassign_worker(BuildingId(1), 0));

        // 工位空了，子项少了一个；这次按键只用来夹紧光标
        nav.sync();
        nav.on_key(NavCommand::Up);
        let cursor: Cursor = nav.cursor().unwrap();
        assert_eq!(cursor.address(), Address::sub_item(2, 0, 1));
        assert_eq!(spoken(&log), "Human, 2 free");
    }

    #[test]
    fn search_jumps_to_a_recipe() {
        let settlement = Arc::new(Settlement::demo());
        let (mut nav, log) = navigator(&settlement);
        nav.on_key(NavCommand::Search("crate".into()));
        assert!(spoken(&log).starts_with("Crates, enabled"));
        assert_eq!(nav.cursor().unwrap().address(), Address::item(1, 1));

        assert_eq!(nav.on_key(NavCommand::Escape), KeyResponse::Continue);
        assert_eq!(nav.on_key(NavCommand::Escape), KeyResponse::ClosePanel);
    }
}
