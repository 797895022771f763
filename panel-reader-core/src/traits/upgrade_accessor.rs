//! Upgrade / perk accessor Trait

use crate::types::{BuildingId, UpgradeTier};

/// Upgrade Accessor Trait
pub trait UpgradeAccessor: Send + Sync {
    /// Current tiers in display order
    ///
    /// # Arguments
    /// * `building` - Building ID
    fn upgrade_tiers(&self, building: BuildingId) -> Vec<UpgradeTier>;

    /// Live affordability check, evaluated at the moment of the action
    ///
    /// # Arguments
    /// * `building` - Building ID
    /// * `tier` - Tier index
    /// * `option` - Unlock option index
    fn can_unlock(&self, building: BuildingId, tier: usize, option: usize) -> bool;

    /// Pay for and unlock a tier
    ///
    /// # Arguments
    /// * `building` - Building ID
    /// * `tier` - Tier index
    /// * `option` - Unlock option index
    fn unlock(&self, building: BuildingId, tier: usize, option: usize) -> bool;
}
