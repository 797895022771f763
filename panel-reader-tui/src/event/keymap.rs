//! 快捷键定义

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use panel_reader_core::types::Modifiers;

/// 快捷键绑定
#[derive(Debug, Clone)]
pub struct KeyBinding {
    pub modifiers: KeyModifiers,
    pub code: KeyCode,
}

impl KeyBinding {
    pub const fn new(modifiers: KeyModifiers, code: KeyCode) -> Self {
        Self { modifiers, code }
    }

    pub const fn key(code: KeyCode) -> Self {
        Self::new(KeyModifiers::NONE, code)
    }

    pub const fn alt(code: KeyCode) -> Self {
        Self::new(KeyModifiers::ALT, code)
    }

    pub const fn ctrl(code: KeyCode) -> Self {
        Self::new(KeyModifiers::CONTROL, code)
    }

    /// 检查按键事件是否匹配此快捷键绑定
    pub fn matches(&self, key: &KeyEvent) -> bool {
        key.modifiers == self.modifiers && key.code == self.code
    }

    /// 字符键匹配时忽略 Shift（`?`、`N` 这类字符本身就需要 Shift）
    pub fn matches_char(&self, key: &KeyEvent) -> bool {
        key.modifiers.difference(KeyModifiers::SHIFT) == self.modifiers && key.code == self.code
    }
}

/// 默认快捷键配置
pub struct DefaultKeymap;

impl DefaultKeymap {
    // 全局
    pub const QUIT: KeyBinding = KeyBinding::alt(KeyCode::Char('q'));
    pub const FORCE_QUIT: KeyBinding = KeyBinding::ctrl(KeyCode::Char('c'));
    pub const HELP: KeyBinding = KeyBinding::key(KeyCode::Char('?'));
    pub const LANGUAGE: KeyBinding = KeyBinding::alt(KeyCode::Char('l'));

    // 面板
    pub const REFRESH: KeyBinding = KeyBinding::alt(KeyCode::Char('r'));
    pub const REPEAT: KeyBinding = KeyBinding::key(KeyCode::Char('r'));
    pub const SEARCH: KeyBinding = KeyBinding::key(KeyCode::Char('/'));
    pub const SEARCH_NEXT: KeyBinding = KeyBinding::key(KeyCode::Char('n'));
    pub const SEARCH_PREVIOUS: KeyBinding = KeyBinding::key(KeyCode::Char('N'));
}

/// +/- 调整键：返回方向（+1 / -1）和修饰键
///
/// `+` `=` 加，`-` 减；`_`（Shift + `-`）和 PageUp/PageDown 是大步长。
/// `+` 本身需要 Shift，所以忽略它的 Shift 标志。
pub fn adjustment(key: &KeyEvent) -> Option<(i32, Modifiers)> {
    let ctrl = key.modifiers.contains(KeyModifiers::CONTROL);
    let shift = key.modifiers.contains(KeyModifiers::SHIFT);
    let (delta, shift) = match key.code {
        KeyCode::Char('+') => (1, false),
        KeyCode::Char('=') => (1, shift),
        KeyCode::Char('-') => (-1, shift),
        KeyCode::Char('_') => (-1, true),
        KeyCode::PageUp => (1, true),
        KeyCode::PageDown => (-1, true),
        _ => return None,
    };
    Some((delta, Modifiers { shift, ctrl }))
}
