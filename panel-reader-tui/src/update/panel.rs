//! 面板更新逻辑

use panel_reader_core::types::{KeyResponse, NavCommand};

use crate::adapters::adapter_for;
use crate::model::{App, FocusPanel};

/// 把导航命令交给 Navigator
pub fn update(app: &mut App, command: NavCommand) {
    if !app.focus.is_panel() {
        return;
    }
    if app.panel_stale {
        app.navigator.sync();
        app.panel_stale = false;
    }
    if app.navigator.on_key(command) == KeyResponse::ClosePanel {
        close(app);
    }
}

/// 打开（或重新打开）选中建筑的面板
pub fn open(app: &mut App) {
    let Some(building) = app.buildings.current().cloned() else {
        return;
    };
    tracing::info!("Opening panel for {} ({})", building.name, building.id);
    app.navigator.on_focus(adapter_for(&app.settlement, &building));
    app.panel_stale = false;
    app.focus = FocusPanel::Panel;
    app.clear_status();
}

/// 关闭面板，焦点回到建筑列表
pub fn close(app: &mut App) {
    app.navigator.on_blur();
    app.focus = FocusPanel::Buildings;
}
