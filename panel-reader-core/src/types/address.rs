//! 地址与光标类型定义

use std::fmt;

use serde::{Deserialize, Serialize};

/// 导航层级
///
/// 0 = Section，1 = Item，2 = SubItem，3 = SubSubItem。
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum Level {
    /// 分区列表
    #[default]
    Section,
    /// 分区内条目
    Item,
    /// 条目的子项
    SubItem,
    /// 子项的子项
    SubSubItem,
}

impl Level {
    /// 所有层级，由浅到深
    pub const ALL: [Level; 4] = [
        Level::Section,
        Level::Item,
        Level::SubItem,
        Level::SubSubItem,
    ];

    /// 层级深度（0..=3）
    #[must_use]
    pub const fn depth(self) -> usize {
        match self {
            Self::Section => 0,
            Self::Item => 1,
            Self::SubItem => 2,
            Self::SubSubItem => 3,
        }
    }

    /// 从深度获取层级
    #[must_use]
    pub const fn from_depth(depth: usize) -> Option<Self> {
        match depth {
            0 => Some(Self::Section),
            1 => Some(Self::Item),
            2 => Some(Self::SubItem),
            3 => Some(Self::SubSubItem),
            _ => None,
        }
    }

    /// 下一层（已是最深层时返回 None）
    #[must_use]
    pub const fn deeper(self) -> Option<Self> {
        Self::from_depth(self.depth() + 1)
    }

    /// 上一层（已是最浅层时返回 None）
    #[must_use]
    pub const fn shallower(self) -> Option<Self> {
        match self {
            Self::Section => None,
            Self::Item => Some(Self::Section),
            Self::SubItem => Some(Self::Item),
            Self::SubSubItem => Some(Self::SubItem),
        }
    }
}

impl fmt::Display for Level {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::Section => "section",
            Self::Item => "item",
            Self::SubItem => "sub-item",
            Self::SubSubItem => "sub-sub-item",
        };
        f.write_str(name)
    }
}

/// 树中一个节点的地址
///
/// 只有 `level` 及更浅层级的索引有意义，更深层级的索引保持为 0。
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Address {
    /// 当前层级
    pub level: Level,
    /// 分区索引
    pub section: usize,
    /// 条目索引
    pub item: usize,
    /// 子项索引
    pub sub_item: usize,
    /// 子子项索引
    pub sub_sub_item: usize,
}

impl Address {
    /// 分区地址
    #[must_use]
    pub const fn section(section: usize) -> Self {
        Self {
            level: Level::Section,
            section,
            item: 0,
            sub_item: 0,
            sub_sub_item: 0,
        }
    }

    /// 条目地址
    #[must_use]
    pub const fn item(section: usize, item: usize) -> Self {
        Self {
            level: Level::Item,
            section,
            item,
            sub_item: 0,
            sub_sub_item: 0,
        }
    }

    /// 子项地址
    #[must_use]
    pub const fn sub_item(section: usize, item: usize, sub_item: usize) -> Self {
        Self {
            level: Level::SubItem,
            section,
            item,
            sub_item,
            sub_sub_item: 0,
        }
    }

    /// 子子项地址
    #[must_use]
    pub const fn sub_sub_item(
        section: usize,
        item: usize,
        sub_item: usize,
        sub_sub_item: usize,
    ) -> Self {
        Self {
            level: Level::SubSubItem,
            section,
            item,
            sub_item,
            sub_sub_item,
        }
    }

    /// 获取指定层级上的索引
    #[must_use]
    pub const fn index_at(&self, level: Level) -> usize {
        match level {
            Level::Section => self.section,
            Level::Item => self.item,
            Level::SubItem => self.sub_item,
            Level::SubSubItem => self.sub_sub_item,
        }
    }

    /// 设置指定层级上的索引，并把更深层级的索引归零
    pub fn set_index(&mut self, level: Level, index: usize) {
        match level {
            Level::Section => self.section = index,
            Level::Item => self.item = index,
            Level::SubItem => self.sub_item = index,
            Level::SubSubItem => self.sub_sub_item = index,
        }
        self.reset_below(level);
    }

    /// 把 `level` 以下的索引归零
    pub fn reset_below(&mut self, level: Level) {
        let mut next = level.deeper();
        while let Some(l) = next {
            match l {
                Level::Section => self.section = 0,
                Level::Item => self.item = 0,
                Level::SubItem => self.sub_item = 0,
                Level::SubSubItem => self.sub_sub_item = 0,
            }
            next = l.deeper();
        }
    }

    /// 截断到指定层级（更深的索引归零）
    #[must_use]
    pub fn truncated(mut self, level: Level) -> Self {
        self.level = level;
        self.reset_below(level);
        self
    }

    /// 在树序（section 优先，其次 item、sub item）中的排序键
    ///
    /// 浅层节点排在它的后代之前。
    #[must_use]
    pub fn tree_order_key(&self) -> (usize, Option<usize>, Option<usize>, Option<usize>) {
        let at = |level: Level| (self.level >= level).then(|| self.index_at(level));
        (
            self.section,
            at(Level::Item),
            at(Level::SubItem),
            at(Level::SubSubItem),
        )
    }
}

impl fmt::Display for Address {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.section)?;
        for level in [Level::Item, Level::SubItem, Level::SubSubItem] {
            if self.level >= level {
                write!(f, "/{}", self.index_at(level))?;
            }
        }
        Ok(())
    }
}

/// 导航光标
///
/// 光标总是从 `{level: Section, 0, 0, 0, 0}` 开始。
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Cursor {
    address: Address,
}

impl Cursor {
    /// 创建位于根部的光标
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// 当前地址
    #[must_use]
    pub const fn address(&self) -> Address {
        self.address
    }

    /// 当前层级
    #[must_use]
    pub const fn level(&self) -> Level {
        self.address.level
    }

    /// 当前层级上的索引
    #[must_use]
    pub const fn index(&self) -> usize {
        self.address.index_at(self.address.level)
    }

    /// 移动到当前层级的指定索引
    pub fn select(&mut self, index: usize) {
        let level = self.address.level;
        self.address.set_index(level, index);
    }

    /// 下降一层，新层级的索引从 0 开始
    ///
    /// 已处于最深层时返回 `false`。
    pub fn descend(&mut self) -> bool {
        match self.address.level.deeper() {
            Some(next) => {
                self.address.level = next;
                self.address.set_index(next, 0);
                true
            }
            None => false,
        }
    }

    /// 上升一层
    ///
    /// 已处于分区层时返回 `false`。
    pub fn ascend(&mut self) -> bool {
        match self.address.level.shallower() {
            Some(prev) => {
                self.address = self.address.truncated(prev);
                true
            }
            None => false,
        }
    }

    /// 收起到指定层级；只有比当前更浅时才生效
    pub fn collapse_to(&mut self, level: Level) -> bool {
        if level < self.address.level {
            self.address = self.address.truncated(level);
            true
        } else {
            false
        }
    }

    /// 直接跳转到某个地址
    pub fn jump_to(&mut self, address: Address) {
        self.address = address.truncated(address.level);
    }
}
