//! Building-specific accessor Traits
//!
//! The core only defines the workforce and upgrade accessors its
//! sub-navigators need. The adapters in this crate read the rest of the
//! settlement through these narrower traits.

use panel_reader_core::types::BuildingId;

/// Kind of building, decides which adapter is used for its panel
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BuildingKind {
    /// Turns input goods into products
    Workshop,
    /// Burns fuel to keep the settlement warm
    Hearth,
    /// Stores goods
    Warehouse,
}

/// Entry of the building list
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BuildingSummary {
    pub id: BuildingId,
    pub name: String,
    pub kind: BuildingKind,
}

/// Snapshot of one recipe
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RecipeInfo {
    /// Product good
    pub product: String,
    /// Input goods with amounts
    pub ingredients: Vec<(String, u32)>,
    pub enabled: bool,
    /// Stop producing above this stock; 0 means no limit
    pub limit: u32,
    /// Progress of the current unit in percent
    pub progress: u32,
}

/// Snapshot of one fuel option of a hearth
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FuelInfo {
    pub good: String,
    pub allowed: bool,
    pub stock: u32,
}

/// Snapshot of one stored good
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StoredGood {
    pub good: String,
    pub amount: u32,
    pub accepting: bool,
}

/// Goods grouped by category for the warehouse panel
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GoodCategory {
    pub name: String,
    pub goods: Vec<StoredGood>,
}

/// Settlement Directory Trait
pub trait SettlementDirectory: Send + Sync {
    /// Buildings in display order
    fn buildings(&self) -> Vec<BuildingSummary>;

    /// Look up one building
    ///
    /// # Arguments
    /// * `building` - Building ID
    fn building(&self, building: BuildingId) -> Option<BuildingSummary>;
}

/// Production Accessor Trait
pub trait ProductionAccessor: Send + Sync {
    /// Recipes of a workshop in display order
    ///
    /// # Arguments
    /// * `building` - Building ID
    fn recipes(&self, building: BuildingId) -> Vec<RecipeInfo>;

    /// Enable or disable a recipe
    ///
    /// # Arguments
    /// * `building` - Building ID
    /// * `recipe` - Recipe index
    /// * `enabled` - New state
    fn set_recipe_enabled(&self, building: BuildingId, recipe: usize, enabled: bool) -> bool;

    /// Set the production limit of a recipe (0 removes the limit)
    ///
    /// # Arguments
    /// * `building` - Building ID
    /// * `recipe` - Recipe index
    /// * `limit` - New limit
    fn set_recipe_limit(&self, building: BuildingId, recipe: usize, limit: u32) -> bool;

    /// Settlement-wide stock of a good
    fn stock(&self, good: &str) -> u32;
}

/// Hearth Accessor Trait
pub trait HearthAccessor: Send + Sync {
    /// Fuel options in display order
    ///
    /// # Arguments
    /// * `building` - Building ID
    fn fuels(&self, building: BuildingId) -> Vec<FuelInfo>;

    /// Allow or forbid burning a fuel
    ///
    /// # Arguments
    /// * `building` - Building ID
    /// * `fuel` - Fuel index
    /// * `allowed` - New state
    fn set_fuel_allowed(&self, building: BuildingId, fuel: usize, allowed: bool) -> bool;

    /// Current heat level in percent
    fn heat(&self, building: BuildingId) -> u32;

    /// Target heat level in percent
    fn target_heat(&self, building: BuildingId) -> u32;

    /// Change the target heat level
    ///
    /// # Arguments
    /// * `building` - Building ID
    /// * `target` - New target, clamped to 0..=100
    fn set_target_heat(&self, building: BuildingId, target: u32) -> bool;
}

/// Storage Accessor Trait
pub trait StorageAccessor: Send + Sync {
    /// Stored goods grouped by category
    ///
    /// # Arguments
    /// * `building` - Building ID
    fn storage(&self, building: BuildingId) -> Vec<GoodCategory>;

    /// Accept or refuse deliveries of a good
    ///
    /// # Arguments
    /// * `building` - Building ID
    /// * `good` - Good name
    /// * `accepting` - New state
    fn set_accepting(&self, building: BuildingId, good: &str, accepting: bool) -> bool;

    /// Throw away some of a good
    ///
    /// # Arguments
    /// * `building` - Building ID
    /// * `good` - Good name
    /// * `amount` - Amount to discard
    fn discard(&self, building: BuildingId, good: &str, amount: u32) -> bool;
}
