//! 当前面板：标题和最后一句朗读

use ratatui::{
    layout::Rect,
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph, Wrap},
    Frame,
};

use crate::i18n::t;
use crate::model::App;
use crate::view::theme::{colors, Styles};

/// 渲染面板区域
pub fn render(app: &App, frame: &mut Frame, area: Rect) {
    let texts = t();
    let c = colors();

    let title = app
        .navigator
        .title()
        .unwrap_or_else(|| texts.status_bar.panel.to_string());

    let block = Block::default()
        .title(format!(" {title} "))
        .title_style(Styles::title())
        .borders(Borders::ALL)
        .border_style(Styles::border(app.focus.is_panel()));

    let mut lines = Vec::new();
    if app.navigator.is_active() {
        if let Some(spoken) = app.navigator.last_spoken() {
            lines.push(Line::from(Span::styled(
                spoken.to_string(),
                Style::default().fg(c.success).add_modifier(Modifier::BOLD),
            )));
        }
    } else {
        lines.push(Line::from(vec![
            Span::styled(texts.hints.keys.enter, Styles::hint_key()),
            Span::raw(" "),
            Span::styled(texts.hints.actions.open_panel, Styles::hint_desc()),
        ]));
    }

    let paragraph = Paragraph::new(lines)
        .block(block)
        .wrap(Wrap { trim: true });
    frame.render_widget(paragraph, area);
}
