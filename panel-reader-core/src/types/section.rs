//! 分区描述

/// 一个分区：显示名 + 适配器自定义的种类
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Section<K> {
    /// 朗读用的显示名
    pub display_name: String,
    /// 适配器内部的分区种类
    pub kind: K,
}

/// 按条件过滤后的有序分区列表
///
/// 每次 `refresh_data()` 都应重新构建。分区身份只由位置决定，
/// 不要跨刷新保存原始索引。
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SectionList<K> {
    sections: Vec<Section<K>>,
}

impl<K> Default for SectionList<K> {
    fn default() -> Self {
        Self {
            sections: Vec::new(),
        }
    }
}

impl<K: Copy> SectionList<K> {
    /// 创建空列表
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// 无条件追加一个分区
    pub fn push(&mut self, display_name: impl Into<String>, kind: K) {
        self.sections.push(Section {
            display_name: display_name.into(),
            kind,
        });
    }

    /// 仅在条件成立时追加分区
    pub fn push_if(&mut self, condition: bool, display_name: impl Into<String>, kind: K) {
        if condition {
            self.push(display_name, kind);
        }
    }

    /// 清空
    pub fn clear(&mut self) {
        self.sections.clear();
    }

    /// 分区数量
    #[must_use]
    pub fn len(&self) -> usize {
        self.sections.len()
    }

    /// 是否为空
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.sections.is_empty()
    }

    /// 获取分区种类
    #[must_use]
    pub fn kind(&self, index: usize) -> Option<K> {
        self.sections.get(index).map(|s| s.kind)
    }

    /// 获取分区显示名
    #[must_use]
    pub fn name(&self, index: usize) -> Option<&str> {
        self.sections.get(index).map(|s| s.display_name.as_str())
    }
}
