//!
//! src/event/mod.rs
//! Event 层：事件处理
//!
//! 负责将键盘输入转换为 Message。
//!
//!
//! 有模块结构：
//!     src/event/mod.rs
//!         mod handler;        // 事件处理器
//!         mod keymap;         // 快捷键映射
//!
//!         pub use handler::{handle_event , poll_event};
//!
//!
//!     其中有：
//!         · poll_event      事件轮询，受 ~/app.rs 调用，最长阻塞 timeout
//!
//!         · handle_event    事件分发
//!
//!         接收以下 Event 类型：
//!             Event::Key(KeyEvent)                // 键盘事件，只处理 Press
//!             Event::Resize(width , height)       // 下一帧自动重绘
//!             其余事件                             // 忽略
//!
//!             当接收到键盘事件时，转入 handle_key_event()
//!             判断：
//!                 - Ctrl+c 永远退出
//!                 - 有弹窗打开时，调用 handle_modal_keys 处理
//!                 - 全局快捷键（Alt+q / ? / Alt+l），就地处理
//!                 - 焦点位于建筑列表，调用 handle_building_list_keys
//!                 - 焦点位于面板，调用 handle_panel_keys，翻译成 NavCommand
//!
//!
//! ═══════════════════════════════════════════════════════════════════════════
//! 面板键盘映射
//! ═══════════════════════════════════════════════════════════════════════════
//!
//!         ↑ / ↓               → NavCommand::Up / Down
//!         Home / End          → NavCommand::First / Last
//!         Enter / →           → NavCommand::Enter
//!         Esc / ← / Backspace → NavCommand::Escape
//!         + = / -             → NavCommand::Increment / Decrement
//!         _ / PageUp PageDown → 同上，Shift 步长
//!         Ctrl + 以上          → Ctrl 步长
//!         r                   → NavCommand::Repeat
//!         Alt+r               → NavCommand::Refresh
//!         /                   → 打开搜索框（提交时发出 NavCommand::Search）
//!         n / N               → NavCommand::SearchNext / SearchPrevious
//!

mod handler;
mod keymap;

pub use handler::{handle_event, poll_event};
