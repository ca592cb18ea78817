use crate::ui::theme::{ACCENT, GLOBAL_BORDER, HEADER_TEXT, MUTED_TEXT};
use ratatui::style::Style;
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Paragraph};

const PLACEHOLDER: &str = "Search movies";
const SEARCH_ICON: &str = " 🔍 ";

/// The search field.
pub struct Header<'a> {
    query: &'a str,
}

impl<'a> Header<'a> {
    pub fn new(query: &'a str) -> Self {
        Self { query }
    }

    pub fn widget(&self) -> Paragraph<'static> {
        let text = if self.query.is_empty() {
            Span::styled(PLACEHOLDER, Style::default().fg(MUTED_TEXT))
        } else {
            Span::styled(self.query.to_string(), Style::default().fg(HEADER_TEXT))
        };
        let line = Line::from(vec![
            Span::styled(SEARCH_ICON, Style::default().fg(ACCENT)),
            text,
        ]);

        Paragraph::new(line).block(
            Block::default()
                .borders(Borders::ALL)
                .border_style(Style::default().fg(GLOBAL_BORDER)),
        )
    }

    /// Column of the text cursor relative to the header's left edge.
    pub fn cursor_offset(&self) -> u16 {
        let prefix = 1 + Span::raw(SEARCH_ICON).width() as u16;
        let typed = Span::raw(self.query).width() as u16;
        prefix.saturating_add(typed)
    }
}
