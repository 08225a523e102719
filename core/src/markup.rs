//! A small markup tree that render functions return instead of touching a
//! live document.
//!
//! # Design
//! Views are pure functions from data to `Node`. Click handlers cannot live
//! in plain data, so buttons carry an `Action` encoded in `data-action` /
//! `data-id` attributes; the app decodes it back with
//! `Action::from_element` when a button is pressed.
//!
//! Serialization is a `Display` impl; text and attribute values go through
//! `html_escaper::HtmlEscaper`.

use std::fmt;
use std::fmt::Write as _;

use html_escaper::HtmlEscaper;

/// Tags serialized without a closing tag.
const VOID_TAGS: &[&str] = &["img", "input", "br", "hr", "meta", "link"];

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Node {
    Element(Element),
    Text(String),
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Element {
    pub tag: String,
    pub attrs: Vec<(String, String)>,
    pub children: Vec<Node>,
}

/// What a button does when pressed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Action {
    ShowDetails(i64),
    Delete(i64),
    Back,
}

impl Action {
    fn name(&self) -> &'static str {
        match self {
            Action::ShowDetails(_) => "details",
            Action::Delete(_) => "delete",
            Action::Back => "back",
        }
    }

    fn id(&self) -> Option<i64> {
        match self {
            Action::ShowDetails(id) | Action::Delete(id) => Some(*id),
            Action::Back => None,
        }
    }

    /// Decode the action attached to a button, if any.
    pub fn from_element(el: &Element) -> Option<Action> {
        let id = || el.get_attr("data-id")?.parse::<i64>().ok();
        match el.get_attr("data-action")? {
            "details" => id().map(Action::ShowDetails),
            "delete" => id().map(Action::Delete),
            "back" => Some(Action::Back),
            _ => None,
        }
    }
}

impl Element {
    pub fn new(tag: &str) -> Self {
        Self {
            tag: tag.to_string(),
            attrs: Vec::new(),
            children: Vec::new(),
        }
    }

    /// A `<button>` carrying `action`.
    pub fn button(label: &str, action: Action) -> Self {
        let mut el = Element::new("button")
            .attr("type", "button")
            .attr("data-action", action.name());
        if let Some(id) = action.id() {
            el = el.attr("data-id", &id.to_string());
        }
        el.text(label)
    }

    pub fn attr(mut self, name: &str, value: &str) -> Self {
        self.attrs.push((name.to_string(), value.to_string()));
        self
    }

    pub fn class(self, class: &str) -> Self {
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

    pub fn text(self, text: &str) -> Self {
        self.child(Node::Text(text.to_string()))
    }

    pub fn get_attr(&self, name: &str) -> Option<&str> {
        self.attrs
            .iter()
            .find(|(k, _)| k == name)
            .map(|(_, v)| v.as_str())
    }

    fn has_class(&self, class: &str) -> bool {
        self.get_attr("class")
            .is_some_and(|c| c.split_whitespace().any(|c| c == class))
    }
}

impl fmt::Display for Element {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "<{}", self.tag)?;
        for (name, value) in &self.attrs {
            write!(f, " {}=\"", name)?;
            write!(HtmlEscaper(f), "{}", value)?;
            f.write_str("\"")?;
        }
        f.write_str(">")?;
        if VOID_TAGS.contains(&self.tag.as_str()) {
            return Ok(());
        }
        for child in &self.children {
            write!(f, "{child}")?;
        }
        write!(f, "</{}>", self.tag)
    }
}

impl From<Element> for Node {
    fn from(el: Element) -> Self {
        Node::Element(el)
    }
}

impl fmt::Display for Node {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Node::Element(el) => fmt::Display::fmt(el, f),
            Node::Text(text) => write!(HtmlEscaper(f), "{}", text),
        }
    }
}

impl Node {
    pub fn text(text: &str) -> Self {
        Node::Text(text.to_string())
    }

    pub fn to_html(&self) -> String {
        self.to_string()
    }

    /// Concatenated text of this node and all descendants.
    pub fn text_content(&self) -> String {
        match self {
            Node::Text(text) => text.clone(),
            Node::Element(el) => el.children.iter().map(Node::text_content).collect(),
        }
    }

    /// Every element in the subtree (including this one) matching `pred`,
    /// in document order.
    pub fn find_all(&self, pred: &dyn Fn(&Element) -> bool) -> Vec<&Element> {
        let mut found = Vec::new();
        self.collect(pred, &mut found);
        found
    }

    fn collect<'a>(&'a self, pred: &dyn Fn(&Element) -> bool, found: &mut Vec<&'a Element>) {
        if let Node::Element(el) = self {
            if pred(el) {
                found.push(el);
            }
            for child in &el.children {
                child.collect(pred, found);
            }
        }
    }

    pub fn find_by_class(&self, class: &str) -> Vec<&Element> {
        self.find_all(&|el| el.has_class(class))
    }

    pub fn find_by_tag(&self, tag: &str) -> Vec<&Element> {
        self.find_all(&|el| el.tag == tag)
    }

    /// Actions of every button in the subtree, in document order.
    pub fn actions(&self) -> Vec<Action> {
        self.find_by_tag("button")
            .into_iter()
            .filter_map(Action::from_element)
            .collect()
    }
}
