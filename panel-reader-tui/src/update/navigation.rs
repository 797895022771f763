//! 建筑列表更新逻辑

use super::panel;
use crate::message::NavigationMessage;
use crate::model::App;

/// 处理建筑列表消息
pub fn update(app: &mut App, msg: NavigationMessage) {
    match msg {
        NavigationMessage::SelectPrevious => {
            app.buildings.select_previous();
        }

        NavigationMessage::SelectNext => {
            app.buildings.select_next();
        }

        NavigationMessage::SelectFirst => {
            app.buildings.select_first();
        }

        NavigationMessage::SelectLast => {
            app.buildings.select_last();
        }

        NavigationMessage::Confirm => {
            panel::open(app);
        }
    }
}
