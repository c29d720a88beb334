use ratatui::layout::{Alignment, Rect};
use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Clear, Paragraph};
use ratatui::Frame;

use crate::ui::layout::centered_rect_by_size;
use crate::ui::theme::{ACTIVE_HIGHLIGHT, HEADER_TEXT, POPUP_BORDER, STATUS_ERROR};

const DIALOG_WIDTH: u16 = 48;
const DIALOG_HEIGHT: u16 = 7;

/// Overlay asking to confirm the deletion of `name`.
pub fn render_confirm_delete(frame: &mut Frame<'_>, area: Rect, name: &str) {
    let area = centered_rect_by_size(area, DIALOG_WIDTH, DIALOG_HEIGHT);
    frame.render_widget(Clear, area);

    let block = Block::default()
        .title(" Confirm Delete ")
        .title_alignment(Alignment::Center)
        .borders(Borders::ALL)
        .border_style(Style::default().fg(POPUP_BORDER));

    let button = Style::default()
        .fg(HEADER_TEXT)
        .bg(ACTIVE_HIGHLIGHT)
        .add_modifier(Modifier::BOLD);

    let lines = vec![
        Line::from(""),
        Line::from(Span::styled(
            "Are you sure you want to delete this item?",
            Style::default().fg(HEADER_TEXT),
        )),
        Line::from(Span::styled(name.to_string(), Style::default().fg(STATUS_ERROR))),
        Line::from(""),
        Line::from(vec![
            Span::styled(" y: Delete ", button),
            Span::raw("    "),
            Span::styled(" n: Cancel ", button),
        ]),
    ];

    let dialog = Paragraph::new(lines)
        .alignment(Alignment::Center)
        .block(block);
    frame.render_widget(dialog, area);
}
