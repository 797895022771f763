//!
//! src/update/mod.rs
//! Update 层：状态更新逻辑
//!
//! Update 层负责处理 Message，更新 Model 状态。
//! 是唯一可以修改 Model 的地方。
//!
//!
//! 有模块结构：
//!     src/update/mod.rs
//!         mod navigation;         // 建筑列表：选择、打开面板
//!         mod panel;              // 面板：把 NavCommand 交给 Navigator
//!         mod modal;              // 弹窗：帮助、搜索输入框
//!
//!         pub fn update(app: &mut App , msg: AppMessage) {...}
//!
//!     使用 match 进行穷举，每个 Message 变体都对应一个状态变更。
//!     复杂的子消息委托给子模块处理。
//!
//!     Tick 只推进模拟并标记面板快照过期，不朗读。下一次面板按键前
//!     先静默同步快照，导航引擎再按新的树形夹紧光标。
//!

mod modal;
mod navigation;
mod panel;

use crate::i18n::{self, t};
use crate::message::AppMessage;
use crate::model::App;

/// 处理应用消息，更新状态
pub fn update(app: &mut App, msg: AppMessage) {
    match msg {
        AppMessage::Quit => {
            if app.focus.is_panel() {
                panel::close(app);
            }
            app.should_quit = true;
        }

        AppMessage::Navigation(nav_msg) => {
            navigation::update(app, nav_msg);
        }

        AppMessage::Panel(command) => {
            panel::update(app, command);
        }

        AppMessage::Modal(modal_msg) => {
            modal::update(app, modal_msg);
        }

        AppMessage::Tick => {
            app.settlement.tick();
            app.panel_stale = true;
        }

        AppMessage::ShowHelp => {
            app.modal.show_help();
        }

        AppMessage::CycleLanguage => {
            cycle_language(app);
        }

        AppMessage::Noop => {}
    }
}

/// 切换语言：更新导航文本，重新打开当前面板，并保存配置
fn cycle_language(app: &mut App) {
    let language = i18n::current_language().next();
    i18n::set_language(language);
    app.config.language = language.code().to_string();
    app.navigator.set_settings(App::navigator_settings(&app.config));

    if app.focus.is_panel() {
        panel::open(app);
    }

    match app.config_service.save(&app.config) {
        Ok(()) => app.set_status(t().common.language_changed),
        Err(e) => {
            tracing::warn!("Failed to save config: {e:#}");
            app.set_status(format!("{e:#}"));
        }
    }
}
