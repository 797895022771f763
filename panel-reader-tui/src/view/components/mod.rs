//! UI 组件

pub mod building_list;
pub mod modal;
pub mod panel;
pub mod speech_log;
pub mod statusbar;
