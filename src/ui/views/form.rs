use ratatui::layout::{Constraint, Direction, Layout, Rect};
use ratatui::style::Style;
use ratatui::text::Span;
use ratatui::widgets::{Block, Borders, Paragraph, Wrap};
use ratatui::Frame;

use crate::store::{ActionKind, ItemState};
use crate::ui::form::{FormField, FormMode, FormState};
use crate::ui::layout::status_and_content;
use crate::ui::theme::{ACCENT, GLOBAL_BORDER, HEADER_TEXT};

use super::{detail_status, error_line, loading_line, muted_line, ViewStatus};

/// Render the create or edit form.
///
/// An edit form shows the get-one status until the item arrives.
pub fn render_form(frame: &mut Frame<'_>, area: Rect, form: &FormState, state: &ItemState, tick: u64) {
    if let FormMode::Edit(id) = form.mode {
        if !form.is_loaded() {
            match detail_status(state, id) {
                ViewStatus::Loading | ViewStatus::Populated(_) => {
                    frame.render_widget(loading_line(tick, "Loading item..."), area)
                }
                ViewStatus::Error(error) => frame.render_widget(error_line(error), area),
                ViewStatus::Empty => frame.render_widget(error_line("Item not found"), area),
            }
            return;
        }
    }

    let submit_kind = match form.mode {
        FormMode::Create => ActionKind::Create,
        FormMode::Edit(_) => ActionKind::Update,
    };

    let (status_area, content) = status_and_content(area);
    if state.is_loading(submit_kind) {
        frame.render_widget(loading_line(tick, "Saving..."), status_area);
    } else if let Some(error) = form.error.as_deref().or(state.error_for(submit_kind)) {
        frame.render_widget(error_line(error), status_area);
    } else {
        frame.render_widget(
            muted_line("Enter: Submit   Tab: Next field   Esc: Cancel"),
            status_area,
        );
    }

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Length(3), Constraint::Min(3)])
        .split(content);

    let name = input_box("Name *", &form.name, form.focus == FormField::Name);
    frame.render_widget(name, chunks[0]);
    let description = input_box(
        "Description",
        &form.description,
        form.focus == FormField::Description,
    )
    .wrap(Wrap { trim: false });
    frame.render_widget(description, chunks[1]);

    let target = match form.focus {
        FormField::Name => chunks[0],
        FormField::Description => chunks[1],
    };
    let column = form.focused_value().chars().count() as u16;
    let inner_width = target.width.saturating_sub(2).max(1);
    let (row, column) = match form.focus {
        FormField::Name => (0, column.min(inner_width - 1)),
        FormField::Description => (column / inner_width, column % inner_width),
    };
    if row < target.height.saturating_sub(2) {
        frame.set_cursor_position((target.x + 1 + column, target.y + 1 + row));
    }
}

fn input_box<'a>(label: &'a str, value: &'a str, focused: bool) -> Paragraph<'a> {
    let border = if focused { ACCENT } else { GLOBAL_BORDER };
    Paragraph::new(value)
        .style(Style::default().fg(HEADER_TEXT))
        .block(
            Block::default()
                .title(Span::styled(format!(" {} ", label), Style::default().fg(border)))
                .borders(Borders::ALL)
                .border_style(Style::default().fg(border)),
        )
}
