//! Search Bar View Component

use ratatui::{
    buffer::Buffer,
    layout::Rect,
    style::{Color, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph, Widget},
};

pub struct SearchBarView<'a> {
    query: &'a str,
    pending: bool,
}

impl<'a> SearchBarView<'a> {
    pub fn new(query: &'a str, pending: bool) -> Self {
        Self { query, pending }
    }
}

impl<'a> Widget for SearchBarView<'a> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let title = if self.pending { "Search …" } else { "Search" };
        let block = Block::default()
            .title(title)
            .borders(Borders::ALL)
            .border_style(Style::default().fg(Color::Cyan));

        let line = Line::from(vec![
            Span::raw("🔍 "),
            Span::raw(self.query),
            Span::styled("█", Style::default().fg(Color::Cyan)),
        ]);

        Paragraph::new(line).block(block).render(area, buf);
    }
}
