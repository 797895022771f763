//! 底部状态栏组件

use ratatui::{
    layout::Rect,
    style::{Color, Style},
    text::{Line, Span},
    widgets::Paragraph,
    Frame,
};

use crate::i18n::{fill, t};
use crate::model::{App, FocusPanel};
use crate::view::theme::Styles;

/// 渲染状态栏
pub fn render(app: &App, frame: &mut Frame, area: Rect) {
    let texts = t();
    let hints = get_hints(app);

    let mut spans = Vec::new();

    // 面板聚焦时显示光标路径
    let location = match app.focus {
        FocusPanel::Panel if app.navigator.is_active() => app.navigator.breadcrumb().join(" › "),
        FocusPanel::Panel => texts.status_bar.panel.to_string(),
        FocusPanel::Buildings => texts.status_bar.buildings.to_string(),
    };
    spans.push(Span::styled(format!(" {location} "), Styles::hint_key()));

    for (key, desc) in hints {
        spans.push(Span::styled(" │ ", Style::default().fg(Color::DarkGray)));
        spans.push(Span::styled(key, Styles::hint_key()));
        spans.push(Span::raw(" "));
        spans.push(Span::styled(desc, Styles::hint_desc()));
    }

    spans.push(Span::styled(" │ ", Style::default().fg(Color::DarkGray)));
    spans.push(Span::raw(fill(
        texts.status_bar.tick,
        &[("ticks", &app.settlement.ticks())],
    )));

    // 如果有状态消息，显示在最后
    if let Some(ref msg) = app.status_message {
        spans.push(Span::styled(" │ ", Style::default().fg(Color::DarkGray)));
        spans.push(Span::styled(msg.clone(), Style::default().fg(Color::Yellow)));
    }

    let paragraph = Paragraph::new(Line::from(spans)).style(Styles::statusbar());
    frame.render_widget(paragraph, area);
}

/// 根据当前焦点生成快捷键提示
fn get_hints(app: &App) -> Vec<(&'static str, &'static str)> {
    let keys = &t().hints.keys;
    let actions = &t().hints.actions;

    let mut hints = vec![(keys.arrows_ud, actions.move_up_down)];
    match app.focus {
        FocusPanel::Buildings => {
            hints.push((keys.enter, actions.open_panel));
        }
        FocusPanel::Panel => {
            hints.push((keys.enter, actions.activate));
            hints.push((keys.esc, actions.back));
            hints.push((keys.plus_minus, actions.adjust));
            hints.push((keys.slash, actions.search));
        }
    }
    hints.push((keys.help, actions.help));
    hints.push((keys.quit, actions.quit));
    hints
}
