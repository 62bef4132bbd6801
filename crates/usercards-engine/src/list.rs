use usercards_types::UserRecord;

use crate::card::render_card;
use crate::view::{Element, Node, Tag};

/// Text shown in place of cards when nothing matched
pub const EMPTY_MESSAGE: &str = "No results found.";

/// A region whose whole content is replaced on every render.
pub trait Surface {
    fn replace(&mut self, content: Node);
}

/// Build the full content for `records`: one card per record, or the
/// empty-state message when there are none.
pub fn build_list(records: &[UserRecord]) -> Node {
    let root = Element::new(Tag::Div).class("cards").attr("role", "list");

    if records.is_empty() {
        let message = Element::new(Tag::P)
            .class("empty")
            .attr("style", "color: rgba(255,255,255,0.8)")
            .text(EMPTY_MESSAGE);
        return root.child(message).into();
    }

    root.children(records.iter().map(render_card)).into()
}

/// Render `records` into `surface`, replacing whatever it showed before.
///
/// The tree is completed before the surface sees it, so a render is a
/// single swap.
pub fn render_list<S: Surface + ?Sized>(surface: &mut S, records: &[UserRecord]) {
    let content = build_list(records);
    surface.replace(content);
}

/// In-memory surface holding the current tree.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Container {
    content: Node,
    renders: usize,
}

impl Container {
    pub fn new() -> Self {
        Self {
            content: Element::new(Tag::Div)
                .class("cards")
                .attr("role", "list")
                .into(),
            renders: 0,
        }
    }

    pub fn content(&self) -> &Node {
        &self.content
    }

    /// Number of renders applied so far
    pub fn render_count(&self) -> usize {
        self.renders
    }

    /// Cards currently displayed
    pub fn cards(&self) -> Vec<&Element> {
        self.content
            .as_element()
            .map(|root| root.element_children().filter(|c| c.has_class("card")).collect())
            .unwrap_or_default()
    }
}

impl Default for Container {
    fn default() -> Self {
        Self::new()
    }
}

impl Surface for Container {
    fn replace(&mut self, content: Node) {
        // Dropping the previous tree drops its handlers with it.
        self.content = content;
        self.renders += 1;
    }
}
