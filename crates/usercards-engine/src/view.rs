//! Declarative view tree.
//!
//! Renderers describe what to show as a tree of [`Node`]s; backends decide how
//! to materialize it. Event handlers are data too: a handler names the event
//! it reacts to and the [`Action`] it triggers, so a backend only has to
//! forward input through [`Element::dispatch`].

use std::collections::BTreeMap;

use serde::Serialize;
use usercards_types::UserRecord;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Tag {
    Div,
    Img,
    H3,
    P,
}

impl Tag {
    pub fn as_str(&self) -> &'static str {
        match self {
            Tag::Div => "div",
            Tag::Img => "img",
            Tag::H3 => "h3",
            Tag::P => "p",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Key {
    Enter,
    Escape,
    Tab,
    Char(char),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum EventKind {
    Click,
    KeyDown { key: Key },
}

/// What the operator is shown when a card is activated.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Presentation {
    pub title: String,
    pub body: String,
}

impl Presentation {
    pub fn of(user: &UserRecord) -> Self {
        Self {
            title: user.name.clone(),
            body: user.bio_text().to_string(),
        }
    }

    /// Title and body separated by a blank line
    pub fn message(&self) -> String {
        format!("{}\n\n{}", self.title, self.body)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum Action {
    /// Behave as if the element had been clicked
    Activate,
    Present(Presentation),
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Handler {
    pub event: EventKind,
    pub action: Action,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Element {
    pub tag: Tag,
    #[serde(skip_serializing_if = "BTreeMap::is_empty")]
    pub attrs: BTreeMap<String, String>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub children: Vec<Node>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub handlers: Vec<Handler>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum Node {
    Element(Element),
    Text { text: String },
}

impl Element {
    pub fn new(tag: Tag) -> Self {
        Self {
            tag,
            attrs: BTreeMap::new(),
            children: Vec::new(),
            handlers: Vec::new(),
        }
    }

    pub fn attr(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.attrs.insert(name.into(), value.into());
        self
    }

    pub fn class(self, class: impl Into<String>) -> Self {
        self.attr("class", class)
    }

    pub fn child(mut self, child: impl Into<Node>) -> Self {
        self.children.push(child.into());
        self
    }

    pub fn children(mut self, children: impl IntoIterator<Item = Node>) -> Self {
        self.children.extend(children);
        self
    }

    /// Append a text node; empty text still produces a node
    pub fn text(self, text: impl Into<String>) -> Self {
        self.child(Node::Text { text: text.into() })
    }

    pub fn on(mut self, event: EventKind, action: Action) -> Self {
        self.handlers.push(Handler { event, action });
        self
    }

    pub fn get_attr(&self, name: &str) -> Option<&str> {
        self.attrs.get(name).map(String::as_str)
    }

    pub fn has_class(&self, class: &str) -> bool {
        self.get_attr("class")
            .is_some_and(|classes| classes.split_whitespace().any(|c| c == class))
    }

    pub fn role(&self) -> Option<&str> {
        self.get_attr("role")
    }

    /// Focusable in normal tab order (tabindex 0 or greater)
    pub fn is_focusable(&self) -> bool {
        self.get_attr("tabindex")
            .and_then(|v| v.parse::<i32>().ok())
            .is_some_and(|index| index >= 0)
    }

    /// Resolve an input event against this element's handlers.
    ///
    /// `Activate` is resolved through the element's click handler, so a
    /// keyboard activation and a pointer activation present the same thing.
    pub fn dispatch(&self, event: &EventKind) -> Option<Presentation> {
        match &self.handler_for(event)?.action {
            Action::Present(presentation) => Some(presentation.clone()),
            Action::Activate => match &self.handler_for(&EventKind::Click)?.action {
                Action::Present(presentation) => Some(presentation.clone()),
                Action::Activate => None,
            },
        }
    }

    fn handler_for(&self, event: &EventKind) -> Option<&Handler> {
        self.handlers.iter().find(|handler| &handler.event == event)
    }

    pub fn element_children(&self) -> impl Iterator<Item = &Element> {
        self.children.iter().filter_map(Node::as_element)
    }

    /// First descendant element (depth-first) with the given tag
    pub fn find_tag(&self, tag: Tag) -> Option<&Element> {
        for child in self.element_children() {
            if child.tag == tag {
                return Some(child);
            }
            if let Some(found) = child.find_tag(tag) {
                return Some(found);
            }
        }
        None
    }

    pub fn text_content(&self) -> String {
        let mut out = String::new();
        for child in &self.children {
            child.collect_text(&mut out);
        }
        out
    }
}

impl Node {
    pub fn as_element(&self) -> Option<&Element> {
        match self {
            Node::Element(element) => Some(element),
            Node::Text { .. } => None,
        }
    }

    pub fn text_content(&self) -> String {
        let mut out = String::new();
        self.collect_text(&mut out);
        out
    }

    fn collect_text(&self, out: &mut String) {
        match self {
            Node::Text { text } => out.push_str(text),
            Node::Element(element) => {
                for child in &element.children {
                    child.collect_text(out);
                }
            }
        }
    }

    /// Focusable elements in document order
    pub fn focusable(&self) -> Vec<&Element> {
        let mut out = Vec::new();
        self.collect_focusable(&mut out);
        out
    }

    fn collect_focusable<'a>(&'a self, out: &mut Vec<&'a Element>) {
        if let Node::Element(element) = self {
            if element.is_focusable() {
                out.push(element);
            }
            for child in &element.children {
                child.collect_focusable(out);
            }
        }
    }

    /// Count of elements in the subtree carrying `class`
    pub fn count_class(&self, class: &str) -> usize {
        match self {
            Node::Text { .. } => 0,
            Node::Element(element) => {
                let own = usize::from(element.has_class(class));
                own + element
                    .children
                    .iter()
                    .map(|child| child.count_class(class))
                    .sum::<usize>()
            }
        }
    }
}

impl From<Element> for Node {
    fn from(element: Element) -> Self {
        Node::Element(element)
    }
}
