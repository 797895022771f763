//!
//! src/model/mod.rs
//! Model 层：应用状态定义
//!
//! Model 层是应用状态的 “唯一真相来源”。
//! 这一层只包含数据结构和简单的选择逻辑，所有状态变更都通过 Update 层来触发。
//! 面板内的光标不在这里：它属于核心库的 Navigator，Model 只持有 Navigator。
//!
//!
//! 有模块结构：
//!     src/model/mod.rs
//!         mod app;            // 主应用状态
//!         mod building_list;  // 左侧建筑列表
//!         mod focus;          // 焦点状态（Buildings / Panel）
//!         mod modal;          // 弹窗（帮助、搜索输入）
//!
//!
//! ═══════════════════════════════════════════════════════════════════════════
//! 一、主应用状态（App）
//! ═══════════════════════════════════════════════════════════════════════════
//!
//!     在 src/model/app.rs 中定义：
//!
//!         pub struct App {
//!             pub should_quit: bool,                  // 退出标志
//!             pub focus: FocusPanel,                  // 当前焦点
//!             pub buildings: BuildingListState,       // 建筑列表
//!             pub settlement: Arc<Settlement>,        // 模拟聚落
//!             pub speech: Arc<SpeechLog>,             // 朗读日志
//!             pub navigator: Navigator,               // 面板导航引擎
//!             pub modal: ModalState,                  // 弹窗状态
//!             pub status_message: Option<String>,     // 状态栏消息
//!             pub config: AppConfig,                  // 当前配置
//!             ...
//!         }
//!
//!
//! ═══════════════════════════════════════════════════════════════════════════
//! 二、焦点管理（FocusPanel）
//! ═══════════════════════════════════════════════════════════════════════════
//!
//!     - Buildings：左侧建筑列表，↑↓ 选择，Enter 打开面板
//!     - Panel：建筑面板已聚焦，按键翻译为 NavCommand 交给 Navigator
//!
//!     数据流：
//!         在建筑列表按 Enter
//!             ↓
//!         update/navigation.rs 调用 navigator.on_focus(adapter)
//!             ↓
//!         app.focus = FocusPanel::Panel
//!
//!         在面板分区层按 Esc
//!             ↓
//!         Navigator 返回 KeyResponse::ClosePanel
//!             ↓
//!         update/panel.rs 调用 navigator.on_blur()，焦点回到建筑列表
//!
//!
//! ═══════════════════════════════════════════════════════════════════════════
//! 三、弹窗状态（ModalState）
//! ═══════════════════════════════════════════════════════════════════════════
//!
//!     Modal 枚举：
//!         - Help                      帮助
//!         - Search { query }          搜索输入框
//!
//!     弹窗打开时所有按键都先交给弹窗处理。
//!

mod app;
mod building_list;
mod focus;
mod modal;

pub use app::App;
pub use building_list::BuildingListState;
pub use focus::FocusPanel;
pub use modal::{Modal, ModalState};
