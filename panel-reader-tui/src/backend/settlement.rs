//! 模拟聚落
//!
//! 一个确定性的小型模拟，实现核心库的访问器 trait 以及本 crate 的
//! 建筑访问器。`tick()` 每秒推进一次：生产进度增加、火炉烧燃料、
//! 偶尔有工人离岗，这样面板在两次按键之间会真实地发生变化。

use std::collections::{BTreeMap, BTreeSet};
use std::sync::{Mutex, MutexGuard, PoisonError};

use panel_reader_core::traits::{UpgradeAccessor, WorkforceAccessor};
use panel_reader_core::types::{
    BuildingId, Progress, RaceAvailability, TierState, UnlockOption, UpgradeTier, WorkerInfo,
};

use super::accessors::{
    BuildingKind, BuildingSummary, FuelInfo, GoodCategory, HearthAccessor, ProductionAccessor,
    RecipeInfo, SettlementDirectory, StorageAccessor, StoredGood,
};

/// 每多少个 tick 有一名工人离岗
const LEAVE_INTERVAL: u64 = 30;
/// 每多少个 tick 火炉消耗一单位燃料
const BURN_INTERVAL: u64 = 5;
/// 每名工人每 tick 的生产进度（百分比）
const WORK_PER_WORKER: u32 = 20;

/// 种族表：(ID, 显示名)
const RACES: [(&str, &str); 3] = [("beaver", "Beaver"), ("human", "Human"), ("lizard", "Lizard")];

fn race_name(race: &str) -> &str {
    RACES
        .iter()
        .find(|(id, _)| *id == race)
        .map_or(race, |(_, name)| name)
}

#[derive(Debug, Clone)]
struct Villager {
    race: String,
    info: WorkerInfo,
}

#[derive(Debug, Clone)]
struct Recipe {
    product: String,
    ingredients: Vec<(String, u32)>,
    enabled: bool,
    limit: u32,
    progress: u32,
}

#[derive(Debug, Clone)]
struct Tier {
    name: String,
    description: String,
    required_output: u32,
    options: Vec<(String, Vec<(String, u32)>)>,
    speed_bonus: u32,
    unlocked: bool,
}

#[derive(Debug, Clone)]
struct Fuel {
    good: String,
    allowed: bool,
}

#[derive(Debug, Clone)]
struct Building {
    summary: BuildingSummary,
    slots: Vec<Option<Villager>>,
    races: Vec<String>,
    recipes: Vec<Recipe>,
    output: u32,
    tiers: Vec<Tier>,
    fuels: Vec<Fuel>,
    heat: u32,
    target_heat: u32,
    categories: Vec<(String, Vec<String>)>,
    refused: BTreeSet<String>,
}

impl Building {
    fn new(id: u32, name: &str, kind: BuildingKind) -> Self {
        Self {
            summary: BuildingSummary {
                id: BuildingId(id),
                name: name.to_string(),
                kind,
            },
            slots: Vec::new(),
            races: Vec::new(),
            recipes: Vec::new(),
            output: 0,
            tiers: Vec::new(),
            fuels: Vec::new(),
            heat: 0,
            target_heat: 0,
            categories: Vec::new(),
            refused: BTreeSet::new(),
        }
    }

    fn slots(mut self, count: usize, races: &[&str]) -> Self {
        self.slots = vec![None; count];
        self.races = races.iter().map(ToString::to_string).collect();
        self
    }

    fn recipe(mut self, product: &str, ingredients: &[(&str, u32)]) -> Self {
        self.recipes.push(Recipe {
            product: product.to_string(),
            ingredients: ingredients
                .iter()
                .map(|(good, amount)| ((*good).to_string(), *amount))
                .collect(),
            enabled: true,
            limit: 0,
            progress: 0,
        });
        self
    }

    fn tier(
        mut self,
        name: &str,
        description: &str,
        required_output: u32,
        options: &[(&str, &[(&str, u32)])],
    ) -> Self {
        self.tiers.push(Tier {
            name: name.to_string(),
            description: description.to_string(),
            required_output,
            options: options
                .iter()
                .map(|(label, costs)| {
                    (
                        (*label).to_string(),
                        costs
                            .iter()
                            .map(|(good, amount)| ((*good).to_string(), *amount))
                            .collect(),
                    )
                })
                .collect(),
            speed_bonus: 10,
            unlocked: false,
        });
        self
    }

    fn fuel(mut self, good: &str) -> Self {
        self.fuels.push(Fuel {
            good: good.to_string(),
            allowed: true,
        });
        self
    }

    fn category(mut self, name: &str, goods: &[&str]) -> Self {
        self.categories.push((
            name.to_string(),
            goods.iter().map(ToString::to_string).collect(),
        ));
        self
    }

    fn worker_count(&self) -> u32 {
        let count = self.slots.iter().filter(|s| s.is_some()).count();
        u32::try_from(count).unwrap_or(u32::MAX)
    }

    fn speed_bonus(&self) -> u32 {
        self.tiers
            .iter()
            .filter(|t| t.unlocked)
            .map(|t| t.speed_bonus)
            .sum()
    }

    fn tier_state(&self, index: usize) -> Option<TierState> {
        let tier = self.tiers.get(index)?;
        let previous_done = index == 0 || self.tiers[index - 1].unlocked;
        Some(if tier.unlocked {
            TierState::Achieved
        } else if previous_done && self.output >= tier.required_output {
            TierState::Available
        } else {
            TierState::Locked
        })
    }
}

/// 模拟世界状态
#[derive(Debug, Clone, Default)]
struct World {
    buildings: Vec<Building>,
    idle: Vec<Villager>,
    goods: BTreeMap<String, u32>,
    ticks: u64,
    next_worker_id: u32,
}

impl World {
    fn building(&self, id: BuildingId) -> Option<&Building> {
        self.buildings.iter().find(|b| b.summary.id == id)
    }

    fn building_mut(&mut self, id: BuildingId) -> Option<&mut Building> {
        self.buildings.iter_mut().find(|b| b.summary.id == id)
    }

    fn stock(&self, good: &str) -> u32 {
        self.goods.get(good).copied().unwrap_or(0)
    }

    fn can_pay(&self, costs: &[(String, u32)]) -> bool {
        costs.iter().all(|(good, amount)| self.stock(good) >= *amount)
    }

    fn pay(&mut self, costs: &[(String, u32)]) {
        for (good, amount) in costs {
            let stock = self.goods.entry(good.clone()).or_default();
            *stock = stock.saturating_sub(*amount);
        }
    }

    fn villager(&mut self, name: &str, race: &str) -> Villager {
        self.next_worker_id += 1;
        Villager {
            race: race.to_string(),
            info: WorkerInfo {
                id: self.next_worker_id,
                name: name.to_string(),
                race: race_name(race).to_string(),
            },
        }
    }

    fn free_count(&self, race: &str) -> u32 {
        let count = self.idle.iter().filter(|v| v.race == race).count();
        u32::try_from(count).unwrap_or(u32::MAX)
    }

    fn produce(&mut self) {
        let mut produced = Vec::new();
        for (index, building) in self.buildings.iter_mut().enumerate() {
            let workers = building.worker_count();
            if building.summary.kind != BuildingKind::Workshop || workers == 0 {
                continue;
            }
            let speed = WORK_PER_WORKER * workers + building.speed_bonus();
            let goods = &self.goods;
            let Some(recipe) = building.recipes.iter_mut().find(|r| {
                r.enabled && (r.limit == 0 || goods.get(&r.product).copied().unwrap_or(0) < r.limit)
            }) else {
                continue;
            };
            recipe.progress = (recipe.progress + speed).min(100);
            if recipe.progress == 100 {
                produced.push((index, recipe.product.clone(), recipe.ingredients.clone()));
            }
        }

        for (index, product, ingredients) in produced {
            if !self.can_pay(&ingredients) {
                continue;
            }
            self.pay(&ingredients);
            *self.goods.entry(product.clone()).or_default() += 1;
            let building = &mut self.buildings[index];
            building.output += 1;
            if let Some(recipe) = building.recipes.iter_mut().find(|r| r.product == product) {
                recipe.progress = 0;
            }
            log::debug!("{} produced 1 {product}", building.summary.name);
        }
    }

    fn burn(&mut self) {
        let burn_now = self.ticks % BURN_INTERVAL == 0;
        for index in 0..self.buildings.len() {
            if self.buildings[index].summary.kind != BuildingKind::Hearth {
                continue;
            }
            let fuel = self.buildings[index]
                .fuels
                .iter()
                .find(|f| f.allowed && self.stock(&f.good) > 0)
                .map(|f| f.good.clone());
            let building = &mut self.buildings[index];
            match fuel {
                Some(good) => {
                    if building.heat < building.target_heat {
                        building.heat = (building.heat + 5).min(building.target_heat);
                    } else {
                        building.heat = building.heat.saturating_sub(5).max(building.target_heat);
                    }
                    if burn_now {
                        if let Some(stock) = self.goods.get_mut(&good) {
                            *stock = stock.saturating_sub(1);
                        }
                    }
                }
                None => building.heat = building.heat.saturating_sub(5),
            }
        }
    }

    /// 从最后一个有人的工位起，让一名工人回到空闲状态
    fn worker_leaves(&mut self) {
        for building in self.buildings.iter_mut().rev() {
            if let Some(villager) = building.slots.iter_mut().rev().find_map(Option::take) {
                log::info!(
                    "{} left {}",
                    villager.info.name,
                    building.summary.name
                );
                self.idle.push(villager);
                return;
            }
        }
    }
}

/// 模拟聚落
///
/// 所有访问器方法都只锁一次内部状态，因此可以安全地在任意线程调用。
#[derive(Debug, Default)]
pub struct Settlement {
    world: Mutex<World>,
}

impl Settlement {
    /// 演示用的聚落：两个工坊、一个火炉、一个仓库
    pub fn demo() -> Self {
        let mut world = World::default();

        world.buildings = vec![
            Building::new(1, "Lumber Mill", BuildingKind::Workshop)
                .slots(2, &["beaver", "human"])
                .recipe("Planks", &[("Wood", 2)])
                .recipe("Crates", &[("Planks", 3)])
                .tier(
                    "Sharper Saws",
                    "Faster production",
                    3,
                    &[("Pay in planks", &[("Planks", 10)]), ("Pay in amber", &[("Amber", 2)])],
                )
                .tier("Second Shift", "Even faster production", 10, &[("Pay in planks", &[("Planks", 25)])]),
            Building::new(2, "Bakery", BuildingKind::Workshop)
                .slots(3, &["human", "lizard"])
                .recipe("Bread", &[("Flour", 2)])
                .recipe("Biscuits", &[("Flour", 1), ("Berries", 1)])
                .tier("Stone Ovens", "Faster baking", 2, &[("Pay in bricks", &[("Bricks", 8)])]),
            Building::new(3, "Ancient Hearth", BuildingKind::Hearth)
                .slots(1, &["lizard", "human"])
                .fuel("Coal")
                .fuel("Oil")
                .fuel("Wood"),
            Building::new(4, "Main Warehouse", BuildingKind::Warehouse)
                .category("Building materials", &["Wood", "Planks", "Bricks", "Crates"])
                .category("Food", &["Flour", "Berries", "Bread", "Biscuits"])
                .category("Fuel", &["Coal", "Oil"])
                .category("Valuables", &["Amber"]),
        ];
        if let Some(hearth) = world.building_mut(BuildingId(3)) {
            hearth.heat = 60;
            hearth.target_heat = 70;
        }

        let ada = world.villager("Ada", "beaver");
        let fa = world.villager("Fa", "lizard");
        if let Some(mill) = world.building_mut(BuildingId(1)) {
            mill.slots[0] = Some(ada);
        }
        if let Some(hearth) = world.building_mut(BuildingId(3)) {
            hearth.slots[0] = Some(fa);
        }
        for (name, race) in [
            ("Bo", "beaver"),
            ("Cy", "beaver"),
            ("Di", "human"),
            ("Ed", "human"),
            ("Gu", "lizard"),
        ] {
            let villager = world.villager(name, race);
            world.idle.push(villager);
        }

        for (good, amount) in [
            ("Wood", 40),
            ("Planks", 12),
            ("Bricks", 4),
            ("Flour", 10),
            ("Berries", 6),
            ("Coal", 3),
            ("Amber", 1),
        ] {
            world.goods.insert(good.to_string(), amount);
        }

        Self {
            world: Mutex::new(world),
        }
    }

    /// 推进一个 tick
    pub fn tick(&self) {
        let mut world = self.world();
        world.ticks += 1;
        world.produce();
        world.burn();
        if world.ticks % LEAVE_INTERVAL == 0 {
            world.worker_leaves();
        }
    }

    /// 已经推进的 tick 数
    pub fn ticks(&self) -> u64 {
        self.world().ticks
    }

    fn world(&self) -> MutexGuard<'_, World> {
        self.world.lock().unwrap_or_else(PoisonError::into_inner)
    }
}

impl SettlementDirectory for Settlement {
    fn buildings(&self) -> Vec<BuildingSummary> {
        self.world()
            .buildings
            .iter()
            .map(|b| b.summary.clone())
            .collect()
    }

    fn building(&self, building: BuildingId) -> Option<BuildingSummary> {
        self.world().building(building).map(|b| b.summary.clone())
    }
}

impl WorkforceAccessor for Settlement {
    fn max_workers(&self, building: BuildingId) -> usize {
        self.world().building(building).map_or(0, |b| b.slots.len())
    }

    fn worker_in_slot(&self, building: BuildingId, slot: usize) -> Option<WorkerInfo> {
        self.world()
            .building(building)?
            .slots
            .get(slot)?
            .as_ref()
            .map(|v| v.info.clone())
    }

    fn eligible_races(&self, building: BuildingId) -> Vec<RaceAvailability> {
        let world = self.world();
        let Some(b) = world.building(building) else {
            return Vec::new();
        };
        b.races
            .iter()
            .map(|race| RaceAvailability::new(race.as_str(), race_name(race), world.free_count(race)))
            .collect()
    }

    fn assign_worker(&self, building: BuildingId, slot: usize, race: &str) -> bool {
        let mut world = self.world();
        let Some(position) = world.idle.iter().position(|v| v.race == race) else {
            return false;
        };
        let free_slot = world
            .building(building)
            .is_some_and(|b| b.races.iter().any(|r| r == race) && matches!(b.slots.get(slot), Some(None)));
        if !free_slot {
            return false;
        }
        let villager = world.idle.remove(position);
        if let Some(b) = world.building_mut(building) {
            b.slots[slot] = Some(villager);
        }
        true
    }

    fn unassign_worker(&self, building: BuildingId, slot: usize) -> bool {
        let mut world = self.world();
        let Some(villager) = world
            .building_mut(building)
            .and_then(|b| b.slots.get_mut(slot))
            .and_then(Option::take)
        else {
            return false;
        };
        world.idle.push(villager);
        true
    }
}

impl UpgradeAccessor for Settlement {
    fn upgrade_tiers(&self, building: BuildingId) -> Vec<UpgradeTier> {
        let world = self.world();
        let Some(b) = world.building(building) else {
            return Vec::new();
        };
        b.tiers
            .iter()
            .enumerate()
            .map(|(index, tier)| UpgradeTier {
                name: tier.name.clone(),
                description: tier.description.clone(),
                state: b.tier_state(index).unwrap_or(TierState::Locked),
                progress: Progress::new(b.output.min(tier.required_output), tier.required_output),
                options: tier
                    .options
                    .iter()
                    .map(|(label, costs)| UnlockOption {
                        label: label.clone(),
                        cost: costs
                            .iter()
                            .map(|(good, amount)| format!("{amount} {good}"))
                            .collect::<Vec<_>>()
                            .join(", "),
                        affordable: world.can_pay(costs),
                    })
                    .collect(),
            })
            .collect()
    }

    fn can_unlock(&self, building: BuildingId, tier: usize, option: usize) -> bool {
        let world = self.world();
        let Some(b) = world.building(building) else {
            return false;
        };
        b.tier_state(tier) == Some(TierState::Available)
            && b.tiers[tier]
                .options
                .get(option)
                .is_some_and(|(_, costs)| world.can_pay(costs))
    }

    fn unlock(&self, building: BuildingId, tier: usize, option: usize) -> bool {
        if !self.can_unlock(building, tier, option) {
            return false;
        }
        let mut world = self.world();
        let Some(costs) = world
            .building(building)
            .and_then(|b| b.tiers.get(tier))
            .and_then(|t| t.options.get(option))
            .map(|(_, costs)| costs.clone())
        else {
            return false;
        };
        world.pay(&costs);
        if let Some(t) = world.building_mut(building).and_then(|b| b.tiers.get_mut(tier)) {
            t.unlocked = true;
            log::info!("Unlocked {} on {building}", t.name);
        }
        true
    }
}

impl ProductionAccessor for Settlement {
    fn recipes(&self, building: BuildingId) -> Vec<RecipeInfo> {
        self.world().building(building).map_or_else(Vec::new, |b| {
            b.recipes
                .iter()
                .map(|r| RecipeInfo {
                    product: r.product.clone(),
                    ingredients: r.ingredients.clone(),
                    enabled: r.enabled,
                    limit: r.limit,
                    progress: r.progress,
                })
                .collect()
        })
    }

    fn set_recipe_enabled(&self, building: BuildingId, recipe: usize, enabled: bool) -> bool {
        let mut world = self.world();
        match world
            .building_mut(building)
            .and_then(|b| b.recipes.get_mut(recipe))
        {
            Some(r) => {
                r.enabled = enabled;
                true
            }
            None => false,
        }
    }

    fn set_recipe_limit(&self, building: BuildingId, recipe: usize, limit: u32) -> bool {
        let mut world = self.world();
        match world
            .building_mut(building)
            .and_then(|b| b.recipes.get_mut(recipe))
        {
            Some(r) => {
                r.limit = limit;
                true
            }
            None => false,
        }
    }

    fn stock(&self, good: &str) -> u32 {
        self.world().stock(good)
    }
}

impl HearthAccessor for Settlement {
    fn fuels(&self, building: BuildingId) -> Vec<FuelInfo> {
        let world = self.world();
        world.building(building).map_or_else(Vec::new, |b| {
            b.fuels
                .iter()
                .map(|f| FuelInfo {
                    good: f.good.clone(),
                    allowed: f.allowed,
                    stock: world.stock(&f.good),
                })
                .collect()
        })
    }

    fn set_fuel_allowed(&self, building: BuildingId, fuel: usize, allowed: bool) -> bool {
        let mut world = self.world();
        match world.building_mut(building).and_then(|b| b.fuels.get_mut(fuel)) {
            Some(f) => {
                f.allowed = allowed;
                true
            }
            None => false,
        }
    }

    fn heat(&self, building: BuildingId) -> u32 {
        self.world().building(building).map_or(0, |b| b.heat)
    }

    fn target_heat(&self, building: BuildingId) -> u32 {
        self.world().building(building).map_or(0, |b| b.target_heat)
    }

    fn set_target_heat(&self, building: BuildingId, target: u32) -> bool {
        let mut world = self.world();
        match world.building_mut(building) {
            Some(b) if b.summary.kind == BuildingKind::Hearth => {
                b.target_heat = target.min(100);
                true
            }
            _ => false,
        }
    }
}

impl StorageAccessor for Settlement {
    fn storage(&self, building: BuildingId) -> Vec<GoodCategory> {
        let world = self.world();
        world.building(building).map_or_else(Vec::new, |b| {
            b.categories
                .iter()
                .map(|(name, goods)| GoodCategory {
                    name: name.clone(),
                    goods: goods
                        .iter()
                        .map(|good| StoredGood {
                            good: good.clone(),
                            amount: world.stock(good),
                            accepting: !b.refused.contains(good),
                        })
                        .collect(),
                })
                .collect()
        })
    }

    fn set_accepting(&self, building: BuildingId, good: &str, accepting: bool) -> bool {
        let mut world = self.world();
        let Some(b) = world.building_mut(building) else {
            return false;
        };
        if accepting {
            b.refused.remove(good);
        } else {
            b.refused.insert(good.to_string());
        }
        true
    }

    fn discard(&self, _building: BuildingId, good: &str, amount: u32) -> bool {
        let mut world = self.world();
        match world.goods.get_mut(good) {
            Some(stock) if *stock > 0 => {
                *stock = stock.saturating_sub(amount);
                true
            }
            _ => false,
        }
    }
}
