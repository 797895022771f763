//! 弹窗更新逻辑

use panel_reader_core::types::NavCommand;

use super::panel;
use crate::message::ModalMessage;
use crate::model::{App, Modal};

pub fn update(app: &mut App, msg: ModalMessage) {
    if msg == ModalMessage::OpenSearch {
        if app.focus.is_panel() {
            app.modal.show_search();
        }
        return;
    }

    match app.modal.active {
        Some(Modal::Search { .. }) => handle_search(app, msg),
        Some(Modal::Help) => {
            if msg == ModalMessage::Close {
                app.modal.close();
            }
        }
        None => {}
    }
}

fn handle_search(app: &mut App, msg: ModalMessage) {
    match msg {
        ModalMessage::Input(c) => {
            if let Some(query) = app.modal.search_query_mut() {
                query.push(c);
            }
        }

        ModalMessage::Backspace => {
            if let Some(query) = app.modal.search_query_mut() {
                query.pop();
            }
        }

        ModalMessage::Submit => {
            let query = app
                .modal
                .search_query_mut()
                .map(std::mem::take)
                .unwrap_or_default();
            app.modal.close();
            if !query.trim().is_empty() {
                panel::update(app, NavCommand::Search(query));
            }
        }

        ModalMessage::Close => {
            app.modal.close();
        }

        ModalMessage::OpenSearch => {}
    }
}
