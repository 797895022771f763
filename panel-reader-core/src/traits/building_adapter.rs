//! Building adapter contract Trait

use crate::error::{NavError, NavResult};
use crate::types::{ActionOutcome, Address, Level, Modifiers};

/// Building Adapter Trait
///
/// One implementation per building family. The navigator asks the adapter
/// "how many entries exist here" and "announce/act on this address" on every
/// key event; it never caches counts across a call that may mutate the game.
///
/// Count methods must be pure functions of the adapter's current state and
/// return 0 to mean "this address has no deeper level". Announce methods
/// produce the utterance and must not mutate the game. Only the
/// `perform_*_action` and `adjust_*_value` methods may write to the game.
pub trait BuildingAdapter {
    /// Spoken panel title (usually the building's name)
    fn title(&self) -> String;

    /// Rebuild the cached snapshot from the game
    fn refresh_data(&mut self);

    /// Drop the cached snapshot (panel lost focus)
    fn clear_data(&mut self);

    /// Number of currently visible sections
    fn section_count(&self) -> usize;

    /// Display name of a visible section
    ///
    /// # Arguments
    /// * `section` - Section index
    fn section_name(&self, section: usize) -> Option<String>;

    /// Number of items in a section
    fn item_count(&self, section: usize) -> usize;

    /// Number of sub items under an item
    fn sub_item_count(&self, _section: usize, _item: usize) -> usize {
        0
    }

    /// Number of sub-sub items under a sub item
    fn sub_sub_item_count(&self, _section: usize, _item: usize, _sub_item: usize) -> usize {
        0
    }

    /// Utterance for a section
    fn announce_section(&mut self, section: usize) -> NavResult<String> {
        self.section_name(section)
            .ok_or(NavError::SectionNotFound(section))
    }

    /// Utterance for an item
    fn announce_item(&mut self, section: usize, item: usize) -> NavResult<String>;

    /// Utterance for a sub item
    fn announce_sub_item(&mut self, _section: usize, _item: usize, _sub_item: usize) -> NavResult<String> {
        Err(NavError::Unsupported(Level::SubItem))
    }

    /// Utterance for a sub-sub item
    fn announce_sub_sub_item(
        &mut self,
        _section: usize,
        _item: usize,
        _sub_item: usize,
        _sub_sub_item: usize,
    ) -> NavResult<String> {
        Err(NavError::Unsupported(Level::SubSubItem))
    }

    /// Enter on a section that has no items
    fn perform_section_action(&mut self, _section: usize) -> ActionOutcome {
        ActionOutcome::Unhandled
    }

    /// Enter on an item that has no sub items
    fn perform_item_action(&mut self, _section: usize, _item: usize) -> ActionOutcome {
        ActionOutcome::Unhandled
    }

    /// Enter on a sub item that has no sub-sub items
    fn perform_sub_item_action(
        &mut self,
        _section: usize,
        _item: usize,
        _sub_item: usize,
    ) -> ActionOutcome {
        ActionOutcome::Unhandled
    }

    /// Enter on a sub-sub item
    fn perform_sub_sub_item_action(
        &mut self,
        _section: usize,
        _item: usize,
        _sub_item: usize,
        _sub_sub_item: usize,
    ) -> ActionOutcome {
        ActionOutcome::Unhandled
    }

    /// +/- on a section
    fn adjust_section_value(
        &mut self,
        _section: usize,
        _delta: i32,
        _modifiers: Modifiers,
    ) -> ActionOutcome {
        ActionOutcome::Unhandled
    }

    /// +/- on an item (recipe limit, sacrifice level, ...)
    fn adjust_item_value(
        &mut self,
        _section: usize,
        _item: usize,
        _delta: i32,
        _modifiers: Modifiers,
    ) -> ActionOutcome {
        ActionOutcome::Unhandled
    }

    /// Stable display name for search
    ///
    /// Returning `None` hides the address from search but not from navigation.
    fn name_of(&self, address: &Address) -> Option<String> {
        match address.level {
            Level::Section => self.section_name(address.section),
            _ => None,
        }
    }
}
