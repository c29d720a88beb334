use ratatui::layout::Rect;
use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Paragraph, Wrap};
use ratatui::Frame;

use crate::model::{Item, ItemId};
use crate::store::ItemState;
use crate::ui::theme::{ACCENT, GLOBAL_BORDER, HEADER_TEXT, MUTED_TEXT};

use super::{detail_status, error_line, format_timestamp, loading_line, muted_line, ViewStatus};

pub fn render_detail(frame: &mut Frame<'_>, area: Rect, state: &ItemState, id: ItemId, tick: u64) {
    match detail_status(state, id) {
        ViewStatus::Loading => frame.render_widget(loading_line(tick, "Loading item..."), area),
        ViewStatus::Error(error) => frame.render_widget(error_line(error), area),
        ViewStatus::Empty => frame.render_widget(muted_line("Item not found"), area),
        ViewStatus::Populated(item) => render_card(frame, area, item),
    }
}

fn render_card(frame: &mut Frame<'_>, area: Rect, item: &Item) {
    let mut lines = vec![
        field("ID", item.id.to_string()),
        field("Name", item.name.clone()),
        field("Description", item.description.clone().unwrap_or_default()),
        field("Created By", item.created_by.clone()),
        field("Created At", format_timestamp(&item.created_at)),
    ];
    if let Some(updated_at) = &item.updated_at {
        lines.push(field("Updated At", format_timestamp(updated_at)));
    }

    let card = Paragraph::new(lines).wrap(Wrap { trim: false }).block(
        Block::default()
            .title(Span::styled(" Item Details ", Style::default().fg(ACCENT)))
            .borders(Borders::ALL)
            .border_style(Style::default().fg(GLOBAL_BORDER)),
    );
    frame.render_widget(card, area);
}

fn field(label: &'static str, value: String) -> Line<'static> {
    Line::from(vec![
        Span::styled(
            format!(" {:<12} ", format!("{}:", label)),
            Style::default().fg(MUTED_TEXT).add_modifier(Modifier::BOLD),
        ),
        Span::styled(value, Style::default().fg(HEADER_TEXT)),
    ])
}
