//! Card List View Component
//!
//! Materializes the container's view tree: each focusable list item becomes a
//! bordered card, anything else (the empty-state message) is drawn as text.

use ratatui::{
    buffer::Buffer,
    layout::Rect,
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph, Widget, Wrap},
};
use usercards_engine::{Element, Node, Tag};

/// Rows taken by one card: borders plus bio and picture lines
pub const CARD_HEIGHT: u16 = 4;

pub struct CardListView<'a> {
    root: &'a Node,
    focused: Option<usize>,
}

impl<'a> CardListView<'a> {
    pub fn new(root: &'a Node, focused: Option<usize>) -> Self {
        Self { root, focused }
    }
}

impl<'a> Widget for CardListView<'a> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let block = Block::default().title("Profiles").borders(Borders::ALL);
        let inner = block.inner(area);
        block.render(area, buf);

        let cards = self.root.focusable();
        if cards.is_empty() {
            let message = self.root.text_content();
            Paragraph::new(Span::styled(
                message,
                Style::default().fg(Color::Gray),
            ))
            .wrap(Wrap { trim: true })
            .render(inner, buf);
            return;
        }

        let visible = usize::from((inner.height / CARD_HEIGHT).max(1));
        let focused = self.focused.map(|index| index.min(cards.len() - 1));
        let offset = first_visible(focused.unwrap_or(0), visible);

        for (slot, (index, card)) in cards.iter().enumerate().skip(offset).take(visible).enumerate() {
            let y = inner.y + (slot as u16) * CARD_HEIGHT;
            let height = CARD_HEIGHT.min(inner.bottom().saturating_sub(y));
            if height == 0 {
                break;
            }
            let card_area = Rect::new(inner.x, y, inner.width, height);
            CardView::new(card, focused == Some(index)).render(card_area, buf);
        }
    }
}

/// First card index to draw so that `focused` stays on screen
fn first_visible(focused: usize, visible: usize) -> usize {
    (focused + 1).saturating_sub(visible)
}

struct CardView<'a> {
    card: &'a Element,
    focused: bool,
}

impl<'a> CardView<'a> {
    fn new(card: &'a Element, focused: bool) -> Self {
        Self { card, focused }
    }
}

impl<'a> Widget for CardView<'a> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let name = self
            .card
            .find_tag(Tag::H3)
            .map(Element::text_content)
            .unwrap_or_default();
        let bio = self
            .card
            .find_tag(Tag::P)
            .map(Element::text_content)
            .unwrap_or_default();
        let picture = self
            .card
            .find_tag(Tag::Img)
            .and_then(|img| img.get_attr("src"))
            .unwrap_or_default();

        let border = if self.focused {
            Style::default().fg(Color::Yellow)
        } else {
            Style::default().fg(Color::DarkGray)
        };
        let block = Block::default()
            .title(Span::styled(name, Style::default().add_modifier(Modifier::BOLD)))
            .borders(Borders::ALL)
            .border_style(border);

        let lines = vec![
            Line::from(bio),
            Line::from(Span::styled(
                format!("🖼  {}", picture),
                Style::default().fg(Color::DarkGray),
            )),
        ];

        Paragraph::new(lines).block(block).render(area, buf);
    }
}
