//! 名称搜索
//!
//! 每次搜索都把当前可见的树（分区、条目、子项三层）重新展开，
//! 对每个地址重新调用 `name_of`，不保留任何持久索引。

use serde::Serialize;

use crate::traits::BuildingAdapter;
use crate::types::{Address, Level};

/// 一条搜索结果
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SearchHit {
    /// 分区索引
    pub section: usize,
    /// 条目索引（命中分区本身时为 None）
    pub item: Option<usize>,
    /// 子项索引（命中分区或条目时为 None）
    pub sub_item: Option<usize>,
    /// 命中的显示名
    pub display_name: String,
}

impl SearchHit {
    /// 转换为光标地址
    #[must_use]
    pub fn address(&self) -> Address {
        match (self.item, self.sub_item) {
            (Some(item), Some(sub_item)) => Address::sub_item(self.section, item, sub_item),
            (Some(item), None) => Address::item(self.section, item),
            _ => Address::section(self.section),
        }
    }
}

/// 在适配器当前的树中搜索
///
/// 大小写不敏感的子串匹配，结果按树序（先分区，再条目，再子项）排列。
/// 空查询没有结果。
pub fn search(adapter: &dyn BuildingAdapter, query: &str) -> Vec<SearchHit> {
    let needle = query.trim().to_lowercase();
    if needle.is_empty() {
        return Vec::new();
    }

    let matches = |address: &Address| {
        adapter
            .name_of(address)
            .filter(|name| name.to_lowercase().contains(&needle))
    };

    let mut hits = Vec::new();
    for section in 0..adapter.section_count() {
        if let Some(name) = matches(&Address::section(section)) {
            hits.push(SearchHit {
                section,
                item: None,
                sub_item: None,
                display_name: name,
            });
        }

        for item in 0..adapter.item_count(section) {
            if let Some(name) = matches(&Address::item(section, item)) {
                hits.push(SearchHit {
                    section,
                    item: Some(item),
                    sub_item: None,
                    display_name: name,
                });
            }

            for sub_item in 0..adapter.sub_item_count(section, item) {
                if let Some(name) = matches(&Address::sub_item(section, item, sub_item)) {
                    hits.push(SearchHit {
                        section,
                        item: Some(item),
                        sub_item: Some(sub_item),
                        display_name: name,
                    });
                }
            }
        }
    }

    log::debug!("Search {query:?}: {} hit(s)", hits.len());
    hits
}

/// 在结果中选出当前地址之后（或之前）的下一条，首尾循环
///
/// `hits` 必须是树序。
pub fn next_hit<'a>(hits: &'a [SearchHit], current: &Address, forward: bool) -> Option<&'a SearchHit> {
    // 子子项层不参与搜索，按其所在子项比较
    let current = if current.level == Level::SubSubItem {
        current.truncated(Level::SubItem)
    } else {
        *current
    };
    let key = current.tree_order_key();

    if forward {
        hits.iter()
            .find(|hit| hit.address().tree_order_key() > key)
            .or_else(|| hits.first())
    } else {
        hits.iter()
            .rev()
            .find(|hit| hit.address().tree_order_key() < key)
            .or_else(|| hits.last())
    }
}
