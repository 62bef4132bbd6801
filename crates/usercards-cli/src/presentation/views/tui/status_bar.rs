//! Status Bar View Component
//!
//! Renders the bottom bar with the match count and key hints.

use ratatui::{
    buffer::Buffer,
    layout::{Constraint, Layout, Rect},
    style::{Color, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph, Widget},
};

pub struct StatusBarView {
    shown: usize,
    total: usize,
}

impl StatusBarView {
    pub fn new(shown: usize, total: usize) -> Self {
        Self { shown, total }
    }
}

impl Widget for StatusBarView {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let block = Block::default().borders(Borders::ALL);
        let inner = block.inner(area);
        block.render(area, buf);

        let chunks = Layout::horizontal([Constraint::Percentage(40), Constraint::Percentage(60)])
            .split(inner);

        let status = Line::from(format!("Showing {} of {}", self.shown, self.total));
        Paragraph::new(status).render(chunks[0], buf);

        let key = Style::default().fg(Color::Yellow);
        let help = Line::from(vec![
            Span::styled("[Tab/↓]", key),
            Span::raw("next "),
            Span::styled("[Shift-Tab/↑]", key),
            Span::raw("prev "),
            Span::styled("[Enter]", key),
            Span::raw("open "),
            Span::styled("[Esc]", key),
            Span::raw("quit"),
        ]);
        Paragraph::new(help).render(chunks[1], buf);
    }
}
