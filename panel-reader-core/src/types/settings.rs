//! 导航引擎设置

use serde::{Deserialize, Serialize};

/// 导航引擎的可配置文本与行为
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct NavigatorSettings {
    /// 在没有下一层也没有动作的地址上按 Enter 时朗读
    pub empty_message: String,
    /// 适配器无法描述某个地址时朗读
    pub unknown_message: String,
    /// 面板没有任何分区时朗读
    pub empty_panel_message: String,
    /// 搜索无结果时朗读，`{query}` 会被替换为查询词
    pub no_matches_message: String,
    /// 横向移动时是否追加 "N of M"
    pub announce_position: bool,
}

impl Default for NavigatorSettings {
    fn default() -> Self {
        Self {
            empty_message: "Nothing here".to_string(),
            unknown_message: "Unknown item".to_string(),
            empty_panel_message: "Panel is empty".to_string(),
            no_matches_message: "No matches for {query}".to_string(),
            announce_position: false,
        }
    }
}

impl NavigatorSettings {
    /// 渲染搜索无结果的提示
    #[must_use]
    pub fn no_matches(&self, query: &str) -> String {
        self.no_matches_message.replace("{query}", query)
    }
}
