//! Plain-text backends for the view tree.

use std::fmt;
use usercards_engine::{Element, EventKind, Key, Node, Tag};

// --------------------------------------------------------
// Card List View
// --------------------------------------------------------

/// Prints a rendered card list: one block per card, other content verbatim.
pub struct CardListTextView<'a> {
    root: &'a Node,
}

impl<'a> CardListTextView<'a> {
    pub fn new(root: &'a Node) -> Self {
        Self { root }
    }
}

impl<'a> fmt::Display for CardListTextView<'a> {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        let Some(root) = self.root.as_element() else {
            return writeln!(f, "{}", self.root.text_content());
        };

        let mut first_card = true;
        for child in root.element_children() {
            if !child.has_class("card") {
                writeln!(f, "{}", child.text_content())?;
                continue;
            }

            if !first_card {
                writeln!(f)?;
            }
            first_card = false;
            write_card(f, child)?;
        }

        Ok(())
    }
}

fn write_card(f: &mut fmt::Formatter, card: &Element) -> fmt::Result {
    let name = card
        .find_tag(Tag::H3)
        .map(Element::text_content)
        .unwrap_or_default();
    writeln!(f, "{}", name)?;

    if let Some(bio) = card.find_tag(Tag::P).map(Element::text_content)
        && !bio.is_empty()
    {
        writeln!(f, "  {}", bio)?;
    }

    if let Some(src) = card.find_tag(Tag::Img).and_then(|img| img.get_attr("src")) {
        writeln!(f, "  {}", src)?;
    }

    Ok(())
}

// --------------------------------------------------------
// Tree Outline View
// --------------------------------------------------------

/// Indented outline of a view tree, one node per line.
pub struct TreeOutlineView<'a> {
    root: &'a Node,
}

impl<'a> TreeOutlineView<'a> {
    pub fn new(root: &'a Node) -> Self {
        Self { root }
    }
}

impl<'a> fmt::Display for TreeOutlineView<'a> {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write_node(f, self.root, 0)
    }
}

fn write_node(f: &mut fmt::Formatter, node: &Node, depth: usize) -> fmt::Result {
    let indent = "  ".repeat(depth);
    let element = match node {
        Node::Text { text } => return writeln!(f, "{}{:?}", indent, text),
        Node::Element(element) => element,
    };

    write!(f, "{}{}", indent, element.tag.as_str())?;
    if let Some(class) = element.get_attr("class") {
        for token in class.split_whitespace() {
            write!(f, ".{}", token)?;
        }
    }

    let attrs: Vec<String> = element
        .attrs
        .iter()
        .filter(|(name, _)| name.as_str() != "class")
        .map(|(name, value)| format!("{}={:?}", name, value))
        .collect();
    if !attrs.is_empty() {
        write!(f, " [{}]", attrs.join(" "))?;
    }

    if !element.handlers.is_empty() {
        let events: Vec<String> = element
            .handlers
            .iter()
            .map(|handler| event_label(&handler.event))
            .collect();
        write!(f, " on({})", events.join(", "))?;
    }

    // A lone text child stays on the element's line.
    if let [Node::Text { text }] = element.children.as_slice() {
        return writeln!(f, " {:?}", text);
    }

    writeln!(f)?;
    for child in &element.children {
        write_node(f, child, depth + 1)?;
    }
    Ok(())
}

fn event_label(event: &EventKind) -> String {
    match event {
        EventKind::Click => "click".to_string(),
        EventKind::KeyDown { key } => match key {
            Key::Enter => "keydown:enter".to_string(),
            Key::Escape => "keydown:escape".to_string(),
            Key::Tab => "keydown:tab".to_string(),
            Key::Char(c) => format!("keydown:{}", c),
        },
    }
}
