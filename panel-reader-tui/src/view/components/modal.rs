//! 弹窗组件：帮助和搜索输入框

use ratatui::{
    layout::{Alignment, Rect},
    style::{Color, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Clear, Paragraph},
    Frame,
};
use unicode_width::UnicodeWidthStr;

use crate::i18n::t;
use crate::model::{App, Modal};
use crate::view::theme::{colors, Styles};

/// 帮助中按键列的宽度
const KEY_COLUMN: usize = 12;

/// 渲染弹窗（如果有活动弹窗）
pub fn render(app: &App, frame: &mut Frame) {
    let Some(ref modal) = app.modal.active else {
        return;
    };

    match modal {
        Modal::Help => render_help(frame),
        Modal::Search { query } => render_search(frame, query),
    }
}

/// 计算居中弹窗区域
fn centered_rect(width: u16, height: u16, area: Rect) -> Rect {
    let x = area.x + (area.width.saturating_sub(width)) / 2;
    let y = area.y + (area.height.saturating_sub(height)) / 2;
    Rect::new(x, y, width.min(area.width), height.min(area.height))
}

fn popup_block(title: &str) -> Block<'_> {
    Block::default()
        .title(format!(" {title} "))
        .title_alignment(Alignment::Center)
        .borders(Borders::ALL)
        .border_style(Style::default().fg(Color::Cyan))
        .style(Style::default().bg(Color::Black))
}

/// 一行快捷键说明，按键列按显示宽度对齐
fn hint_line(key: &'static str, desc: &'static str) -> Line<'static> {
    let padding = KEY_COLUMN.saturating_sub(key.width());
    Line::from(vec![
        Span::styled(format!("  {key}{:padding$}", ""), Styles::hint_key()),
        Span::styled(desc, Style::default().fg(Color::White)),
    ])
}

/// 渲染帮助弹窗
fn render_help(frame: &mut Frame) {
    let texts = t();
    let keys = &texts.hints.keys;
    let actions = &texts.hints.actions;

    let lines = vec![
        Line::styled(texts.help.list_section, Styles::section()),
        hint_line(keys.arrows_ud, actions.move_up_down),
        hint_line(keys.enter, actions.open_panel),
        Line::from(""),
        Line::styled(texts.help.panel_section, Styles::section()),
        hint_line(keys.arrows_ud, actions.move_up_down),
        hint_line(keys.home_end, actions.first_last),
        hint_line(keys.enter, actions.activate),
        hint_line(keys.esc, actions.back),
        hint_line(keys.plus_minus, actions.adjust),
        hint_line(keys.slash, actions.search),
        hint_line(keys.next_prev, actions.search_step),
        hint_line(keys.repeat, actions.repeat),
        hint_line(keys.refresh, actions.refresh),
        Line::from(""),
        Line::styled(texts.help.global_section, Styles::section()),
        hint_line(keys.help, actions.help),
        hint_line(keys.language, actions.language),
        hint_line(keys.quit, actions.quit),
        Line::from(""),
        Line::styled(texts.help.close_hint, Style::default().fg(Color::DarkGray)),
    ];

    let height = u16::try_from(lines.len()).unwrap_or(u16::MAX).saturating_add(2);
    let area = centered_rect(56, height, frame.area());
    frame.render_widget(Clear, area);

    let paragraph = Paragraph::new(lines).block(popup_block(texts.help.title));
    frame.render_widget(paragraph, area);
}

/// 渲染搜索输入框
fn render_search(frame: &mut Frame, query: &str) {
    let texts = t();
    let c = colors();

    let area = centered_rect(50, 5, frame.area());
    frame.render_widget(Clear, area);

    let input = if query.is_empty() {
        Line::styled(texts.search.placeholder, Style::default().fg(c.muted))
    } else {
        Line::styled(format!("{query}▎"), Style::default().fg(Color::Cyan))
    };
    let hints = Line::from(vec![
        Span::styled(texts.hints.keys.enter, Styles::hint_key()),
        Span::raw(" "),
        Span::styled(texts.hints.actions.submit, Styles::hint_desc()),
        Span::raw("  "),
        Span::styled(texts.hints.keys.esc, Styles::hint_key()),
        Span::raw(" "),
        Span::styled(texts.hints.actions.cancel, Styles::hint_desc()),
    ]);

    let paragraph = Paragraph::new(vec![input, Line::from(""), hints])
        .block(popup_block(texts.search.title));
    frame.render_widget(paragraph, area);
}
