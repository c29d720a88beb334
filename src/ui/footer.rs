use crate::router::Route;
use crate::ui::theme::{GLOBAL_BORDER, HEADER_TEXT};
use ratatui::layout::{Alignment, Rect};
use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Paragraph};

const VERSION: &str = env!("CARGO_PKG_VERSION");

pub struct Footer {
    route: Route,
    confirming: bool,
}

impl Footer {
    pub fn new(route: Route, confirming: bool) -> Self {
        Self { route, confirming }
    }

    pub fn hints(&self) -> &'static str {
        if self.confirming {
            return " y/Enter: Delete │ n/Esc: Cancel";
        }
        match self.route {
            Route::List => {
                " ↑↓: Move │ Enter: Show │ e: Edit │ d: Delete │ c: Create │ r: Refresh │ q: Quit"
            }
            Route::Show(_) => " e: Edit │ r: Reload │ Esc: Back │ q: Quit",
            Route::Create | Route::Edit(_) => " Enter: Submit │ Tab: Next field │ Esc: Cancel",
        }
    }

    pub fn widget(&self, area: Rect) -> Paragraph<'static> {
        let hints = self.hints();
        let version = format!("v{} ", VERSION);

        // Char count, not bytes: the hints contain box-drawing characters.
        let hints_width = hints.chars().count();
        let version_width = version.chars().count();
        let content_width = area.width.saturating_sub(2) as usize;
        let padding = content_width
            .saturating_sub(hints_width)
            .saturating_sub(version_width);

        let text_style = Style::default().fg(HEADER_TEXT).add_modifier(Modifier::DIM);

        let line = Line::from(vec![
            Span::styled(hints, text_style),
            Span::styled(" ".repeat(padding), text_style),
            Span::styled(version, text_style),
        ]);

        Paragraph::new(line)
            .style(text_style)
            .alignment(Alignment::Left)
            .block(
                Block::default()
                    .borders(Borders::ALL)
                    .border_style(Style::default().fg(GLOBAL_BORDER)),
            )
    }
}
