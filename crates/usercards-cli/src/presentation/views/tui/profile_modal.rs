//! Profile Modal View Component
//!
//! Presents an activated card on top of the list; the list underneath is
//! left untouched.

use ratatui::{
    buffer::Buffer,
    layout::{Constraint, Flex, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Clear, Paragraph, Widget, Wrap},
};
use usercards_engine::Presentation;

pub struct ProfileModalView<'a> {
    presentation: &'a Presentation,
}

impl<'a> ProfileModalView<'a> {
    pub fn new(presentation: &'a Presentation) -> Self {
        Self { presentation }
    }
}

impl<'a> Widget for ProfileModalView<'a> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let area = centered(area, 60, 40);
        Clear.render(area, buf);

        let block = Block::default()
            .title(Span::styled(
                self.presentation.title.as_str(),
                Style::default().add_modifier(Modifier::BOLD),
            ))
            .borders(Borders::ALL)
            .border_style(Style::default().fg(Color::Magenta));

        let lines = vec![
            Line::from(self.presentation.title.as_str()),
            Line::from(""),
            Line::from(self.presentation.body.as_str()),
            Line::from(""),
            Line::from(Span::styled(
                "[Enter/Esc] close",
                Style::default().fg(Color::DarkGray),
            )),
        ];

        Paragraph::new(lines)
            .block(block)
            .wrap(Wrap { trim: false })
            .render(area, buf);
    }
}

fn centered(area: Rect, percent_x: u16, percent_y: u16) -> Rect {
    let [area] = Layout::vertical([Constraint::Percentage(percent_y)])
        .flex(Flex::Center)
        .areas(area);
    let [area] = Layout::horizontal([Constraint::Percentage(percent_x)])
        .flex(Flex::Center)
        .areas(area);
    area
}
