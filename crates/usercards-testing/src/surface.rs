use usercards_engine::{Element, Node, Surface, Tag};

/// Surface that keeps every tree it was given, oldest first.
#[derive(Debug, Default)]
pub struct RecordingSurface {
    renders: Vec<Node>,
}

impl RecordingSurface {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn render_count(&self) -> usize {
        self.renders.len()
    }

    pub fn renders(&self) -> &[Node] {
        &self.renders
    }

    pub fn last(&self) -> Option<&Node> {
        self.renders.last()
    }

    /// Card headings of the most recent render
    pub fn last_names(&self) -> Vec<String> {
        self.last()
            .and_then(Node::as_element)
            .map(|root| {
                root.element_children()
                    .filter(|child| child.has_class("card"))
                    .filter_map(|card| card.find_tag(Tag::H3))
                    .map(Element::text_content)
                    .collect()
            })
            .unwrap_or_default()
    }
}

impl Surface for RecordingSurface {
    fn replace(&mut self, content: Node) {
        self.renders.push(content);
    }
}
