//! 左侧建筑列表组件

use ratatui::{
    layout::Rect,
    style::Style,
    text::{Line, Span},
    widgets::{Block, Borders, List, ListItem, ListState, Paragraph},
    Frame,
};

use crate::backend::BuildingKind;
use crate::i18n::t;
use crate::model::App;
use crate::view::theme::{colors, Styles};

/// 渲染建筑列表
pub fn render(app: &App, frame: &mut Frame, area: Rect) {
    let texts = t();
    let c = colors();

    let block = Block::default()
        .title(format!(" {} ", texts.buildings.title))
        .title_style(Styles::title())
        .borders(Borders::ALL)
        .border_style(Styles::border(app.focus.is_buildings()));

    if app.buildings.items.is_empty() {
        let empty = Paragraph::new(texts.buildings.empty)
            .style(Style::default().fg(c.muted))
            .block(block);
        frame.render_widget(empty, area);
        return;
    }

    let items: Vec<ListItem> = app
        .buildings
        .items
        .iter()
        .enumerate()
        .map(|(i, building)| {
            let is_selected = i == app.buildings.selected;
            let prefix = if is_selected { "▶ " } else { "  " };
            let kind = match building.kind {
                BuildingKind::Workshop => texts.buildings.workshop,
                BuildingKind::Hearth => texts.buildings.hearth,
                BuildingKind::Warehouse => texts.buildings.warehouse,
            };

            let style = if is_selected {
                Styles::selected()
            } else {
                Style::default().fg(c.fg)
            };

            ListItem::new(Line::from(vec![
                Span::styled(format!("{prefix}{}", building.name), style),
                Span::styled(format!("  {kind}"), Style::default().fg(c.muted)),
            ]))
        })
        .collect();

    let list = List::new(items).block(block);

    // 使用 ListState 来跟踪选中状态
    let mut state = ListState::default();
    state.select(Some(app.buildings.selected));

    frame.render_stateful_widget(list, area, &mut state);
}
