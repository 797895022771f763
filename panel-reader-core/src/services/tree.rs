//! 地址分发：把一个地址按层级路由到适配器对应的方法
//!
//! 计数每次都从适配器重新读取，从不缓存。

use crate::error::NavResult;
use crate::traits::BuildingAdapter;
use crate::types::{ActionOutcome, Address, Cursor, Level, Modifiers};

/// 某地址在 `level` 层上的条目数量
pub fn count_at(adapter: &dyn BuildingAdapter, address: &Address, level: Level) -> usize {
    match level {
        Level::Section => adapter.section_count(),
        Level::Item => adapter.item_count(address.section),
        Level::SubItem => adapter.sub_item_count(address.section, address.item),
        Level::SubSubItem => {
            adapter.sub_sub_item_count(address.section, address.item, address.sub_item)
        }
    }
}

/// 当前地址下一层的条目数量（最深层恒为 0）
pub fn child_count(adapter: &dyn BuildingAdapter, address: &Address) -> usize {
    address
        .level
        .deeper()
        .map_or(0, |next| count_at(adapter, address, next))
}

/// 朗读某个地址
pub fn announce_at(adapter: &mut dyn BuildingAdapter, address: &Address) -> NavResult<String> {
    let a = address;
    match a.level {
        Level::Section => adapter.announce_section(a.section),
        Level::Item => adapter.announce_item(a.section, a.item),
        Level::SubItem => adapter.announce_sub_item(a.section, a.item, a.sub_item),
        Level::SubSubItem => {
            adapter.announce_sub_sub_item(a.section, a.item, a.sub_item, a.sub_sub_item)
        }
    }
}

/// 在某个地址上执行动作
pub fn perform_at(adapter: &mut dyn BuildingAdapter, address: &Address) -> ActionOutcome {
    let a = address;
    match a.level {
        Level::Section => adapter.perform_section_action(a.section),
        Level::Item => adapter.perform_item_action(a.section, a.item),
        Level::SubItem => adapter.perform_sub_item_action(a.section, a.item, a.sub_item),
        Level::SubSubItem => {
            adapter.perform_sub_sub_item_action(a.section, a.item, a.sub_item, a.sub_sub_item)
        }
    }
}

/// 在某个地址上调整数值（只有分区和条目两层支持）
pub fn adjust_at(
    adapter: &mut dyn BuildingAdapter,
    address: &Address,
    delta: i32,
    modifiers: Modifiers,
) -> ActionOutcome {
    match address.level {
        Level::Section => adapter.adjust_section_value(address.section, delta, modifiers),
        Level::Item => adapter.adjust_item_value(address.section, address.item, delta, modifiers),
        Level::SubItem | Level::SubSubItem => ActionOutcome::Unhandled,
    }
}

/// 把光标夹回当前树形的合法范围内
///
/// 仍然合法的索引保持不变；越界的索引夹到最后一项；
/// 某一层变空时，光标退到最深的非空层。返回光标是否被修改。
pub fn clamp(adapter: &dyn BuildingAdapter, cursor: &mut Cursor) -> bool {
    let before = cursor.address();
    let mut address = before;

    for level in Level::ALL {
        if level > before.level {
            break;
        }
        let count = count_at(adapter, &address, level);
        if count == 0 {
            address = match level.shallower() {
                Some(parent) => address.truncated(parent),
                None => Address::default(),
            };
            break;
        }
        if address.index_at(level) >= count {
            address.set_index(level, count - 1);
        }
    }

    if address == before {
        return false;
    }
    log::debug!("Cursor clamped from {before} to {address}");
    cursor.jump_to(address);
    true
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_utils::TreeAdapter;

    fn adapter() -> TreeAdapter {
        TreeAdapter::new()
            .section("Recipes")
            .item("Bread", &["Flour", "Water"])
            .item("Biscuits", &[])
            .section("Workers")
            .item("Slot 1", &[])
    }

    #[test]
    fn counts_follow_address() {
        let a = adapter();
        assert_eq!(count_at(&a, &Address::default(), Level::Section), 2);
        assert_eq!(count_at(&a, &Address::section(0), Level::Item), 2);
        assert_eq!(count_at(&a, &Address::item(0, 0), Level::SubItem), 2);
        assert_eq!(child_count(&a, &Address::item(0, 1)), 0);
        assert_eq!(child_count(&a, &Address::sub_sub_item(0, 0, 0, 0)), 0);
    }

    #[test]
    fn clamp_keeps_valid_positions() {
        let a = adapter();
        let mut cursor = Cursor::new();
        cursor.jump_to(Address::sub_item(0, 0, 1));
        assert!(!clamp(&a, &mut cursor));
        assert_eq!(cursor.address(), Address::sub_item(0, 0, 1));
    }

    #[test]
    fn clamp_pulls_index_back_into_range() {
        let a = adapter();
        let mut cursor = Cursor::new();
        cursor.jump_to(Address::item(0, 5));
        assert!(clamp(&a, &mut cursor));
        assert_eq!(cursor.address(), Address::item(0, 1));
    }

    #[test]
    fn clamp_leaves_empty_level() {
        let a = adapter();
        let mut cursor = Cursor::new();
        cursor.jump_to(Address::sub_item(0, 1, 0));
        assert!(clamp(&a, &mut cursor));
        assert_eq!(cursor.address(), Address::item(0, 1));
    }

    #[test]
    fn adjust_is_unhandled_below_items() {
        let mut a = adapter();
        let outcome = adjust_at(&mut a, &Address::sub_item(0, 0, 0), 1, Modifiers::NONE);
        assert_eq!(outcome, ActionOutcome::Unhandled);
    }
}
