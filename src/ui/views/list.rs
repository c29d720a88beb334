use ratatui::layout::{Constraint, Rect};
use ratatui::style::{Modifier, Style};
use ratatui::text::Span;
use ratatui::widgets::{Block, Borders, Cell, Row, Table, TableState};
use ratatui::Frame;

use crate::model::Item;
use crate::store::{ActionKind, ItemState};
use crate::ui::layout::status_and_content;
use crate::ui::theme::{ACCENT, ACTIVE_HIGHLIGHT, GLOBAL_BORDER, HEADER_TEXT, MUTED_TEXT};

use super::{
    error_line, format_timestamp, list_status, loading_line, muted_line, success_line,
    ViewStatus,
};

/// Render the item table.
///
/// The status row shows, in order of preference: the message carried in
/// from the previous screen, then the outcome of a delete started here.
pub fn render_list(
    frame: &mut Frame<'_>,
    area: Rect,
    state: &ItemState,
    selected: usize,
    flash: Option<&str>,
    tick: u64,
) {
    let (status_area, content) = status_and_content(area);

    if let Some(message) = flash {
        frame.render_widget(success_line(message), status_area);
    } else if state.is_loading(ActionKind::Delete) {
        frame.render_widget(loading_line(tick, "Deleting..."), status_area);
    } else if let Some(error) = state.error_for(ActionKind::Delete) {
        frame.render_widget(error_line(error), status_area);
    } else if let Some(message) = state.success_for(ActionKind::Delete) {
        frame.render_widget(success_line(message), status_area);
    }

    match list_status(state) {
        ViewStatus::Loading => frame.render_widget(loading_line(tick, "Loading items..."), content),
        ViewStatus::Error(error) => frame.render_widget(error_line(error), content),
        ViewStatus::Empty => frame.render_widget(muted_line("No items available."), content),
        ViewStatus::Populated(items) => render_table(frame, content, items, selected),
    }
}

fn render_table(frame: &mut Frame<'_>, area: Rect, items: &[Item], selected: usize) {
    let header = Row::new(["Name", "Description", "Created At", "Updated At"]).style(
        Style::default()
            .fg(HEADER_TEXT)
            .add_modifier(Modifier::BOLD),
    );

    let rows = items.iter().map(|item| {
        Row::new(vec![
            Cell::from(item.name.clone()),
            Cell::from(item.description.clone().unwrap_or_default()),
            Cell::from(format_timestamp(&item.created_at)),
            Cell::from(
                item.updated_at
                    .as_deref()
                    .map(format_timestamp)
                    .unwrap_or_default(),
            ),
        ])
        .style(Style::default().fg(HEADER_TEXT))
    });

    let widths = [
        Constraint::Percentage(25),
        Constraint::Percentage(35),
        Constraint::Length(20),
        Constraint::Length(20),
    ];

    let table = Table::new(rows, widths)
        .header(header)
        .block(
            Block::default()
                .title(Span::styled(
                    format!(" Items ({}) ", items.len()),
                    Style::default().fg(ACCENT),
                ))
                .borders(Borders::ALL)
                .border_style(Style::default().fg(GLOBAL_BORDER)),
        )
        .row_highlight_style(
            Style::default()
                .bg(ACTIVE_HIGHLIGHT)
                .add_modifier(Modifier::BOLD),
        )
        .highlight_symbol("> ")
        .style(Style::default().fg(MUTED_TEXT));

    let mut table_state = TableState::default().with_selected(Some(selected.min(items.len() - 1)));
    frame.render_stateful_widget(table, area, &mut table_state);
}
