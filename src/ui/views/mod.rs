//! Screen renderers.
//!
//! Every screen picks one of four shapes from the store: loading, error,
//! empty or populated.

mod confirm;
mod detail;
mod form;
mod list;

pub use confirm::render_confirm_delete;
pub use detail::render_detail;
pub use form::render_form;
pub use list::render_list;

use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::Paragraph;

use crate::model::{Item, ItemId};
use crate::store::{ActionKind, ItemState};
use crate::ui::theme::{MUTED_TEXT, STATUS_ERROR, STATUS_OK};

/// Spinner animation frames.
pub(crate) const SPINNER_FRAMES: &[&str] = &["⠋", "⠙", "⠹", "⠸", "⠼", "⠴", "⠦", "⠧", "⠇", "⠏"];

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ViewStatus<'a, T> {
    Loading,
    Error(&'a str),
    Empty,
    Populated(T),
}

pub fn list_status(state: &ItemState) -> ViewStatus<'_, &[Item]> {
    if state.is_loading(ActionKind::List) {
        ViewStatus::Loading
    } else if let Some(error) = state.error_for(ActionKind::List) {
        ViewStatus::Error(error)
    } else if state.items.is_empty() {
        ViewStatus::Empty
    } else {
        ViewStatus::Populated(&state.items)
    }
}

/// Status of the item `id` as loaded by a get-one.
pub fn detail_status(state: &ItemState, id: ItemId) -> ViewStatus<'_, &Item> {
    if state.is_loading(ActionKind::GetOne) {
        return ViewStatus::Loading;
    }
    if let Some(error) = state.error_for(ActionKind::GetOne) {
        return ViewStatus::Error(error);
    }
    match &state.selected_item {
        Some(item) if item.id == id => ViewStatus::Populated(item),
        _ => ViewStatus::Empty,
    }
}

/// Render an ISO-8601 timestamp in local time, or the raw text if it does
/// not parse.
pub fn format_timestamp(raw: &str) -> String {
    chrono::DateTime::parse_from_rfc3339(raw)
        .map(|at| {
            at.with_timezone(&chrono::Local)
                .format("%Y-%m-%d %H:%M:%S")
                .to_string()
        })
        .unwrap_or_else(|_| raw.to_string())
}

pub(crate) fn spinner(tick: u64) -> &'static str {
    SPINNER_FRAMES[(tick as usize) % SPINNER_FRAMES.len()]
}

pub(crate) fn loading_line(tick: u64, label: &str) -> Paragraph<'static> {
    Paragraph::new(Line::from(vec![
        Span::styled(format!("  {} ", spinner(tick)), Style::default().fg(STATUS_OK)),
        Span::styled(label.to_string(), Style::default().fg(MUTED_TEXT)),
    ]))
}

pub(crate) fn error_line(message: &str) -> Paragraph<'static> {
    Paragraph::new(Line::from(vec![
        Span::styled(
            "  Error: ",
            Style::default().fg(STATUS_ERROR).add_modifier(Modifier::BOLD),
        ),
        Span::styled(message.to_string(), Style::default().fg(STATUS_ERROR)),
    ]))
}

pub(crate) fn success_line(message: &str) -> Paragraph<'static> {
    Paragraph::new(Line::from(vec![
        Span::styled("  ✓ ", Style::default().fg(STATUS_OK)),
        Span::styled(message.to_string(), Style::default().fg(STATUS_OK)),
    ]))
}

pub(crate) fn muted_line(message: &str) -> Paragraph<'static> {
    Paragraph::new(Line::from(Span::styled(
        format!("  {}", message),
        Style::default().fg(MUTED_TEXT),
    )))
}
