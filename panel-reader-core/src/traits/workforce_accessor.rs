//! Worker assignment accessor Trait

use crate::types::{BuildingId, RaceAvailability, WorkerInfo};

/// Workforce Accessor Trait
///
/// Facade over the live simulation's worker data. Reads return snapshots;
/// writes return `false` for ordinary "not possible right now" conditions.
pub trait WorkforceAccessor: Send + Sync {
    /// Number of worker slots the building has (0 when it employs nobody)
    ///
    /// # Arguments
    /// * `building` - Building ID
    fn max_workers(&self, building: BuildingId) -> usize;

    /// Worker currently occupying a slot
    ///
    /// # Arguments
    /// * `building` - Building ID
    /// * `slot` - Slot index
    fn worker_in_slot(&self, building: BuildingId, slot: usize) -> Option<WorkerInfo>;

    /// Races eligible for this building, in display order
    ///
    /// # Arguments
    /// * `building` - Building ID
    fn eligible_races(&self, building: BuildingId) -> Vec<RaceAvailability>;

    /// Assign a free worker of `race` to an empty slot
    ///
    /// # Arguments
    /// * `building` - Building ID
    /// * `slot` - Slot index
    /// * `race` - Race ID from [`RaceAvailability::race`]
    fn assign_worker(&self, building: BuildingId, slot: usize, race: &str) -> bool;

    /// Release the worker in a slot
    ///
    /// # Arguments
    /// * `building` - Building ID
    /// * `slot` - Slot index
    fn unassign_worker(&self, building: BuildingId, slot: usize) -> bool;
}
