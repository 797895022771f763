//!
//! src/message/mod.rs
//! Message 层：事件消息定义
//!
//! 作为 Event —→ Update 之间的桥梁
//! 所有的用户操作和状态变更都通过 Message 来表达。
//! 相当于将形形色色的 Events 翻译成 Update 能够看懂的 Messages
//! Update 层根据 Message 来更新 Model。
//!
//!
//! 有模块结构：
//!     src/message/mod.rs
//!         mod app;            // AppMessage：顶层消息
//!         mod navigation;     // NavigationMessage：建筑列表
//!         mod modal;          // ModalMessage：帮助与搜索输入框
//!
//!     面板内的按键直接翻译成核心库的 NavCommand，
//!     通过 AppMessage::Panel 交给 Update 层。
//!

mod app;
mod modal;
mod navigation;

pub use app::AppMessage;
pub use modal::ModalMessage;
pub use navigation::NavigationMessage;
