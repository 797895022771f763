//! 建筑列表状态

use crate::backend::BuildingSummary;

/// 建筑列表状态
pub struct BuildingListState {
    /// 建筑列表
    pub items: Vec<BuildingSummary>,
    /// 当前选中的索引
    pub selected: usize,
}

impl BuildingListState {
    pub fn new(items: Vec<BuildingSummary>) -> Self {
        Self { items, selected: 0 }
    }

    /// 选择上一项
    pub fn select_previous(&mut self) {
        if self.selected > 0 {
            self.selected -= 1;
        }
    }

    /// 选择下一项
    pub fn select_next(&mut self) {
        if self.selected < self.items.len().saturating_sub(1) {
            self.selected += 1;
        }
    }

    /// 跳到第一项
    pub fn select_first(&mut self) {
        self.selected = 0;
    }

    /// 跳到最后一项
    pub fn select_last(&mut self) {
        self.selected = self.items.len().saturating_sub(1);
    }

    /// 获取当前选中的建筑
    pub fn current(&self) -> Option<&BuildingSummary> {
        self.items.get(self.selected)
    }
}
