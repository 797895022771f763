//! 翻译键定义
//!
//! 定义所有翻译文本的结构体，提供编译期类型检查。
//!
//! ## 分类标准
//!
//! 1. **按 UI 组件位置分类**：文本归属于它出现的 UI 组件
//! 2. **朗读内容归 `panel.*` 与 `navigator.*`**：适配器和导航引擎说出的话
//! 3. **跨组件复用归 `common.*`**：多处使用的通用词汇
//! 4. **键盘提示归 `hints.*`**：按键名称和操作提示
//!
//! 带参数的文本使用 `{name}` 占位符，由 [`super::fill`] 替换。

/// 所有翻译文本的根结构
pub struct Translations {
    /// 通用文本（跨多处复用）
    pub common: CommonTexts,
    /// 键盘提示（按键名称 + 动作词）
    pub hints: HintTexts,
    /// 建筑列表文本
    pub buildings: BuildingListTexts,
    /// 朗读日志文本
    pub speech: SpeechLogTexts,
    /// 搜索输入框文本
    pub search: SearchTexts,
    /// 状态栏文本
    pub status_bar: StatusBarTexts,
    /// 帮助页面文本
    pub help: HelpTexts,
    /// 导航引擎的默认朗读文本
    pub navigator: NavigatorTexts,
    /// 建筑面板朗读文本
    pub panel: PanelTexts,
}

// ============================================================================
// 通用文本
// ============================================================================

/// 通用文本（跨多处复用的词汇）
pub struct CommonTexts {
    pub app_name: &'static str,
    pub quit: &'static str,
    pub language_changed: &'static str,
}

// ============================================================================
// 键盘提示
// ============================================================================

/// 键盘提示文本
pub struct HintTexts {
    /// 按键名称
    pub keys: KeyNames,
    /// 动作描述
    pub actions: ActionTexts,
}

/// 按键名称
pub struct KeyNames {
    pub enter: &'static str,
    pub esc: &'static str,
    pub arrows_ud: &'static str,
    pub plus_minus: &'static str,
    pub home_end: &'static str,
    pub slash: &'static str,
    pub next_prev: &'static str,
    pub repeat: &'static str,
    pub refresh: &'static str,
    pub language: &'static str,
    pub help: &'static str,
    pub quit: &'static str,
}

/// 动作描述
pub struct ActionTexts {
    pub move_up_down: &'static str,
    pub open_panel: &'static str,
    pub activate: &'static str,
    pub back: &'static str,
    pub adjust: &'static str,
    pub first_last: &'static str,
    pub search: &'static str,
    pub search_step: &'static str,
    pub repeat: &'static str,
    pub refresh: &'static str,
    pub language: &'static str,
    pub help: &'static str,
    pub quit: &'static str,
    pub submit: &'static str,
    pub cancel: &'static str,
}

// ============================================================================
// 界面区域
// ============================================================================

/// 建筑列表文本
pub struct BuildingListTexts {
    pub title: &'static str,
    pub workshop: &'static str,
    pub hearth: &'static str,
    pub warehouse: &'static str,
    pub empty: &'static str,
}

/// 朗读日志文本
pub struct SpeechLogTexts {
    pub title: &'static str,
    pub empty: &'static str,
    /// 音效条目前缀
    pub cue: &'static str,
    pub cue_confirm: &'static str,
    pub cue_fail: &'static str,
    pub cue_toggle_on: &'static str,
    pub cue_toggle_off: &'static str,
    pub cue_panel_open: &'static str,
    pub cue_panel_close: &'static str,
}

/// 搜索输入框文本
pub struct SearchTexts {
    pub title: &'static str,
    pub placeholder: &'static str,
}

/// 状态栏文本
pub struct StatusBarTexts {
    pub buildings: &'static str,
    pub panel: &'static str,
    /// 模拟时间，`{ticks}`
    pub tick: &'static str,
}

/// 帮助页面文本
pub struct HelpTexts {
    pub title: &'static str,
    pub list_section: &'static str,
    pub panel_section: &'static str,
    pub global_section: &'static str,
    pub close_hint: &'static str,
}

// ============================================================================
// 朗读文本
// ============================================================================

/// 导航引擎的默认朗读文本
pub struct NavigatorTexts {
    pub empty_message: &'static str,
    pub unknown_message: &'static str,
    pub empty_panel_message: &'static str,
    /// `{query}`
    pub no_matches_message: &'static str,
}

/// 建筑面板朗读文本
pub struct PanelTexts {
    pub production: ProductionTexts,
    pub hearth: HearthTexts,
    pub warehouse: WarehouseTexts,
    /// 动作被游戏拒绝，`{name}`
    pub rejected: &'static str,
}

/// 工坊面板
pub struct ProductionTexts {
    pub section_status: &'static str,
    pub section_recipes: &'static str,
    pub section_workers: &'static str,
    pub section_upgrades: &'static str,
    /// `{count}` `{max}`
    pub status_workers: &'static str,
    /// `{product}` `{progress}`
    pub status_producing: &'static str,
    pub status_idle: &'static str,
    /// `{achieved}` `{total}`
    pub status_upgrades: &'static str,
    /// `{product}` `{state}` `{ingredients}` `{limit}` `{stock}`
    pub recipe: &'static str,
    pub enabled: &'static str,
    pub disabled: &'static str,
    /// `{limit}`
    pub limit: &'static str,
    pub no_limit: &'static str,
    pub no_ingredients: &'static str,
    /// `{product}`
    pub recipe_enabled: &'static str,
    /// `{product}`
    pub recipe_disabled: &'static str,
    /// `{product}` `{limit}`
    pub limit_set: &'static str,
    /// `{product}`
    pub limit_removed: &'static str,
}

/// 火炉面板
pub struct HearthTexts {
    pub section_heat: &'static str,
    pub section_fuel: &'static str,
    pub section_workers: &'static str,
    /// `{heat}`
    pub heat: &'static str,
    /// `{target}`
    pub target: &'static str,
    /// `{good}` `{state}` `{stock}`
    pub fuel: &'static str,
    pub allowed: &'static str,
    pub forbidden: &'static str,
    /// `{good}`
    pub fuel_allowed: &'static str,
    /// `{good}`
    pub fuel_forbidden: &'static str,
}

/// 仓库面板
pub struct WarehouseTexts {
    pub section_storage: &'static str,
    pub section_summary: &'static str,
    /// `{name}` `{count}`
    pub category: &'static str,
    /// `{good}` `{amount}` `{state}`
    pub good: &'static str,
    pub accepting: &'static str,
    pub refusing: &'static str,
    pub action_accept: &'static str,
    pub action_refuse: &'static str,
    /// `{amount}`
    pub action_discard: &'static str,
    /// `{good}`
    pub accepted: &'static str,
    /// `{good}`
    pub refused: &'static str,
    /// `{amount}` `{good}`
    pub discarded: &'static str,
    /// `{good}`
    pub nothing_to_discard: &'static str,
    /// `{total}`
    pub total_stored: &'static str,
    /// `{count}`
    pub refused_count: &'static str,
}
