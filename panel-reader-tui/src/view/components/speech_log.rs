//! 朗读日志组件

use panel_reader_core::types::AudioCue;
use ratatui::{
    layout::Rect,
    style::Style,
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
    Frame,
};

use crate::backend::{SpeechEntry, SpeechEvent};
use crate::i18n::t;
use crate::model::App;
use crate::util::truncate_to_width;
use crate::view::theme::{colors, Styles};

/// 时间戳列宽（`HH:MM:SS` 加两个空格）
const TIME_WIDTH: usize = 10;

/// 渲染朗读日志，最新的在最下面
pub fn render(app: &App, frame: &mut Frame, area: Rect) {
    let texts = t();
    let c = colors();

    let block = Block::default()
        .title(format!(" {} ({}) ", texts.speech.title, app.speech.len()))
        .title_style(Styles::title())
        .borders(Borders::ALL)
        .border_style(Styles::border(false));

    let inner = block.inner(area);
    frame.render_widget(block, area);

    let entries = app.speech.recent(usize::from(inner.height));
    if entries.is_empty() {
        let empty = Paragraph::new(texts.speech.empty).style(Style::default().fg(c.muted));
        frame.render_widget(empty, inner);
        return;
    }

    let text_width = usize::from(inner.width).saturating_sub(TIME_WIDTH);
    let lines: Vec<Line> = entries
        .iter()
        .map(|entry| render_entry(entry, text_width))
        .collect();

    frame.render_widget(Paragraph::new(lines), inner);
}

fn render_entry(entry: &SpeechEntry, width: usize) -> Line<'static> {
    let c = colors();
    let time = Span::styled(
        format!("{}  ", entry.at.format("%H:%M:%S")),
        Style::default().fg(c.muted),
    );
    let body = match &entry.event {
        SpeechEvent::Utterance(text) => {
            Span::styled(truncate_to_width(text, width), Style::default().fg(c.fg))
        }
        SpeechEvent::Cue(cue) => Span::styled(
            truncate_to_width(&format!("[{}] {}", t().speech.cue, cue_name(*cue)), width),
            Style::default().fg(c.warning),
        ),
    };
    Line::from(vec![time, body])
}

fn cue_name(cue: AudioCue) -> &'static str {
    let texts = &t().speech;
    match cue {
        AudioCue::Confirm => texts.cue_confirm,
        AudioCue::Fail => texts.cue_fail,
        AudioCue::ToggleOn => texts.cue_toggle_on,
        AudioCue::ToggleOff => texts.cue_toggle_off,
        AudioCue::PanelOpen => texts.cue_panel_open,
        AudioCue::PanelClose => texts.cue_panel_close,
    }
}
