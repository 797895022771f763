//! 事件处理：把终端事件翻译成消息

use std::time::Duration;

use anyhow::Result;
use crossterm::event::{self, Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers};
use panel_reader_core::types::NavCommand;

use crate::event::keymap::{adjustment, DefaultKeymap};
use crate::message::{AppMessage, ModalMessage, NavigationMessage};
use crate::model::{App, Modal};

/// 轮询事件
pub fn poll_event(timeout: Duration) -> Result<Option<Event>> {
    if event::poll(timeout)? {
        Ok(Some(event::read()?))
    } else {
        Ok(None)
    }
}

/// 处理事件，返回对应的消息
pub fn handle_event(event: Event, app: &App) -> AppMessage {
    match event {
        Event::Key(key_event) => handle_key_event(key_event, app),
        // 终端窗口大小改变，下一帧自动重绘
        _ => AppMessage::Noop,
    }
}

/// 处理键盘事件
fn handle_key_event(key: KeyEvent, app: &App) -> AppMessage {
    // 只处理 Press 事件，忽略 Release 和 Repeat
    if key.kind != KeyEventKind::Press {
        return AppMessage::Noop;
    }

    if DefaultKeymap::FORCE_QUIT.matches(&key) {
        return AppMessage::Quit;
    }

    // 如果有弹窗打开，优先处理弹窗输入
    if let Some(modal) = &app.modal.active {
        return handle_modal_keys(key, modal);
    }

    // 全局快捷键（无论焦点在哪里）
    if DefaultKeymap::QUIT.matches(&key) {
        return AppMessage::Quit;
    }
    if DefaultKeymap::HELP.matches_char(&key) {
        return AppMessage::ShowHelp;
    }
    if DefaultKeymap::LANGUAGE.matches(&key) {
        return AppMessage::CycleLanguage;
    }

    if app.focus.is_panel() {
        handle_panel_keys(key)
    } else {
        handle_building_list_keys(key)
    }
}

/// 处理弹窗的按键
fn handle_modal_keys(key: KeyEvent, modal: &Modal) -> AppMessage {
    match modal {
        // 帮助：任意键关闭
        Modal::Help => AppMessage::Modal(ModalMessage::Close),

        Modal::Search { .. } => match key.code {
            KeyCode::Esc => AppMessage::Modal(ModalMessage::Close),
            KeyCode::Enter => AppMessage::Modal(ModalMessage::Submit),
            KeyCode::Backspace => AppMessage::Modal(ModalMessage::Backspace),
            KeyCode::Char(c)
                if !key
                    .modifiers
                    .intersects(KeyModifiers::CONTROL | KeyModifiers::ALT) =>
            {
                AppMessage::Modal(ModalMessage::Input(c))
            }
            _ => AppMessage::Noop,
        },
    }
}

/// 处理建筑列表的按键
fn handle_building_list_keys(key: KeyEvent) -> AppMessage {
    match key.code {
        KeyCode::Up | KeyCode::Char('k') => {
            AppMessage::Navigation(NavigationMessage::SelectPrevious)
        }
        KeyCode::Down | KeyCode::Char('j') => {
            AppMessage::Navigation(NavigationMessage::SelectNext)
        }
        KeyCode::Home => AppMessage::Navigation(NavigationMessage::SelectFirst),
        KeyCode::End => AppMessage::Navigation(NavigationMessage::SelectLast),
        KeyCode::Enter | KeyCode::Right => AppMessage::Navigation(NavigationMessage::Confirm),
        _ => AppMessage::Noop,
    }
}

/// 处理已聚焦面板的按键：翻译成 NavCommand
fn handle_panel_keys(key: KeyEvent) -> AppMessage {
    if DefaultKeymap::REFRESH.matches(&key) {
        return AppMessage::Panel(NavCommand::Refresh);
    }
    if DefaultKeymap::SEARCH.matches(&key) {
        return AppMessage::Modal(ModalMessage::OpenSearch);
    }
    if DefaultKeymap::REPEAT.matches(&key) {
        return AppMessage::Panel(NavCommand::Repeat);
    }
    if DefaultKeymap::SEARCH_NEXT.matches(&key) {
        return AppMessage::Panel(NavCommand::SearchNext);
    }
    if DefaultKeymap::SEARCH_PREVIOUS.matches_char(&key) {
        return AppMessage::Panel(NavCommand::SearchPrevious);
    }
    if let Some((delta, modifiers)) = adjustment(&key) {
        let command = if delta > 0 {
            NavCommand::Increment(modifiers)
        } else {
            NavCommand::Decrement(modifiers)
        };
        return AppMessage::Panel(command);
    }

    let command = match key.code {
        KeyCode::Up => NavCommand::Up,
        KeyCode::Down => NavCommand::Down,
        KeyCode::Home => NavCommand::First,
        KeyCode::End => NavCommand::Last,
        KeyCode::Enter | KeyCode::Right => NavCommand::Enter,
        KeyCode::Esc | KeyCode::Left | KeyCode::Backspace => NavCommand::Escape,
        _ => return AppMessage::Noop,
    };
    AppMessage::Panel(command)
}
