use crate::router::Route;
use crate::ui::theme::{ACCENT, GLOBAL_BORDER, HEADER_SEPARATOR, HEADER_TEXT, STATUS_OK};
use crate::ui::views::spinner;
use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Paragraph};

/// Top bar: screen title, path, backend and request activity.
pub struct Header<'a> {
    route: Route,
    base_url: &'a str,
    loading: bool,
    tick: u64,
}

impl<'a> Header<'a> {
    pub fn new(route: Route, base_url: &'a str) -> Self {
        Self {
            route,
            base_url,
            loading: false,
            tick: 0,
        }
    }

    pub fn loading(mut self, loading: bool, tick: u64) -> Self {
        self.loading = loading;
        self.tick = tick;
        self
    }

    pub fn widget(&self) -> Paragraph<'static> {
        let text_style = Style::default().fg(HEADER_TEXT);
        let separator_style = Style::default().fg(HEADER_SEPARATOR);
        let activity = if self.loading {
            Span::styled(spinner(self.tick), Style::default().fg(STATUS_OK))
        } else {
            Span::styled("●", Style::default().fg(STATUS_OK))
        };

        let line = Line::from(vec![
            Span::styled("  ", text_style),
            activity,
            Span::styled("  ", text_style),
            Span::styled(
                self.route.title(),
                Style::default().fg(ACCENT).add_modifier(Modifier::BOLD),
            ),
            Span::styled("  │  ", separator_style),
            Span::styled(self.route.path(), text_style),
            Span::styled("  │  ", separator_style),
            Span::styled(self.base_url.to_string(), text_style),
        ]);

        Paragraph::new(line).block(
            Block::default()
                .borders(Borders::TOP | Borders::BOTTOM)
                .border_style(Style::default().fg(GLOBAL_BORDER)),
        )
    }
}
