//! 弹窗/对话框状态

/// 弹窗
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Modal {
    /// 帮助
    Help,
    /// 面板内搜索
    Search { query: String },
}

/// 弹窗状态容器
#[derive(Debug, Default)]
pub struct ModalState {
    /// None = 无弹窗
    pub active: Option<Modal>,
}

impl ModalState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn is_open(&self) -> bool {
        self.active.is_some()
    }

    pub fn show_help(&mut self) {
        self.active = Some(Modal::Help);
    }

    pub fn show_search(&mut self) {
        self.active = Some(Modal::Search {
            query: String::new(),
        });
    }

    pub fn close(&mut self) {
        self.active = None;
    }

    /// 搜索框中的文本（只有搜索框打开时）
    pub fn search_query_mut(&mut self) -> Option<&mut String> {
        match &mut self.active {
            Some(Modal::Search { query }) => Some(query),
            _ => None,
        }
    }
}
