//! Retained element tree
//!
//! Components build [`Node`] trees made of [`Element`]s and text. An element
//! carries a tag, attributes, classes, inline [`Style`] declarations, children
//! and event handlers. Trees can be serialized to HTML, searched, and driven
//! by dispatching synthetic [`Event`]s to individual elements.
//!
//! ```rust
//! use lumen_core::{div, Event};
//! use std::sync::atomic::{AtomicUsize, Ordering};
//! use std::sync::Arc;
//!
//! let clicks = Arc::new(AtomicUsize::new(0));
//! let counter = clicks.clone();
//! let button = div()
//!     .attr("role", "button")
//!     .on_click(move |_| {
//!         counter.fetch_add(1, Ordering::SeqCst);
//!     });
//!
//! button.dispatch(&Event::click());
//! assert_eq!(clicks.load(Ordering::SeqCst), 1);
//! ```

use std::fmt;
use std::sync::Arc;

use indexmap::IndexMap;
use rustc_hash::FxHashMap;
use smallvec::SmallVec;

use crate::color::Color;
use crate::events::{event_types, Event, EventType};
use crate::html;
use crate::style::Style;

/// Event handler function type
pub type EventHandler = Arc<dyn Fn(&Event) + Send + Sync>;

/// A node in an element tree
#[derive(Clone, Debug)]
pub enum Node {
    Element(Element),
    Text(String),
}

impl Node {
    pub fn as_element(&self) -> Option<&Element> {
        match self {
            Node::Element(element) => Some(element),
            Node::Text(_) => None,
        }
    }

    /// Concatenated text of this node and all descendants
    pub fn text_content(&self) -> String {
        match self {
            Node::Element(element) => element.text_content(),
            Node::Text(text) => text.clone(),
        }
    }

    pub fn to_html(&self) -> String {
        let mut out = String::new();
        html::write_node(&mut out, self);
        out
    }
}

impl From<Element> for Node {
    fn from(element: Element) -> Self {
        Node::Element(element)
    }
}

impl From<&str> for Node {
    fn from(text: &str) -> Self {
        Node::Text(text.to_string())
    }
}

impl From<String> for Node {
    fn from(text: String) -> Self {
        Node::Text(text)
    }
}

/// An element with attributes, inline style, children and handlers
#[derive(Clone, Default)]
pub struct Element {
    tag: String,
    classes: SmallVec<[String; 4]>,
    attrs: IndexMap<String, String>,
    style: Style,
    children: Vec<Node>,
    handlers: FxHashMap<EventType, SmallVec<[EventHandler; 1]>>,
}

/// Create an element with an arbitrary tag
pub fn el(tag: impl Into<String>) -> Element {
    Element {
        tag: tag.into(),
        ..Default::default()
    }
}

/// Create a `div` element
pub fn div() -> Element {
    el("div")
}

/// Create a `span` element
pub fn span() -> Element {
    el("span")
}

/// Create a text node
pub fn text(content: impl Into<String>) -> Node {
    Node::Text(content.into())
}

impl Element {
    // ========== Builders ==========

    pub fn id(self, id: impl Into<String>) -> Self {
        self.attr("id", id)
    }

    /// Set an attribute, replacing any previous value
    pub fn attr(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.attrs.insert(name.into(), value.into());
        self
    }

    /// Set an attribute only when a value is present
    pub fn attr_opt(self, name: impl Into<String>, value: Option<impl Into<String>>) -> Self {
        match value {
            Some(value) => self.attr(name, value),
            None => self,
        }
    }

    /// Set a boolean attribute (present with an empty value when `on`)
    pub fn flag(self, name: impl Into<String>, on: bool) -> Self {
        if on {
            self.attr(name, "")
        } else {
            self
        }
    }

    /// Add a class (empty names and duplicates are ignored)
    pub fn class(mut self, class: impl Into<String>) -> Self {
        let class = class.into();
        if !class.is_empty() && !self.classes.iter().any(|c| *c == class) {
            self.classes.push(class);
        }
        self
    }

    pub fn class_if(self, class: impl Into<String>, condition: bool) -> Self {
        if condition {
            self.class(class)
        } else {
            self
        }
    }

    /// Set one inline style declaration
    pub fn style(mut self, property: impl Into<String>, value: impl Into<String>) -> Self {
        self.style.insert(property, value);
        self
    }

    /// Apply a set of declarations on top of the current inline style
    pub fn styles(mut self, style: &Style) -> Self {
        self.style.merge(style);
        self
    }

    pub fn bg(self, color: Color) -> Self {
        self.style("background-color", color.to_css())
    }

    pub fn color(self, color: Color) -> Self {
        self.style("color", color.to_css())
    }

    pub fn child(mut self, child: impl Into<Node>) -> Self {
        self.children.push(child.into());
        self
    }

    pub fn child_opt(self, child: Option<impl Into<Node>>) -> Self {
        match child {
            Some(child) => self.child(child),
            None => self,
        }
    }

    pub fn children<I, N>(mut self, children: I) -> Self
    where
        I: IntoIterator<Item = N>,
        N: Into<Node>,
    {
        self.children.extend(children.into_iter().map(Into::into));
        self
    }

    /// Register a handler for an event type
    pub fn on<F>(mut self, event_type: EventType, handler: F) -> Self
    where
        F: Fn(&Event) + Send + Sync + 'static,
    {
        self.handlers
            .entry(event_type)
            .or_default()
            .push(Arc::new(handler));
        self
    }

    pub fn on_click<F>(self, handler: F) -> Self
    where
        F: Fn(&Event) + Send + Sync + 'static,
    {
        self.on(event_types::CLICK, handler)
    }

    /// Apply `f` only when `condition` holds
    pub fn when(self, condition: bool, f: impl FnOnce(Self) -> Self) -> Self {
        if condition {
            f(self)
        } else {
            self
        }
    }

    /// Apply `f` with the value when there is one
    pub fn when_some<T>(self, value: Option<T>, f: impl FnOnce(Self, T) -> Self) -> Self {
        match value {
            Some(value) => f(self, value),
            None => self,
        }
    }

    pub fn map(self, f: impl FnOnce(Self) -> Self) -> Self {
        f(self)
    }

    // ========== Accessors ==========

    pub fn tag(&self) -> &str {
        &self.tag
    }

    pub fn get_attr(&self, name: &str) -> Option<&str> {
        self.attrs.get(name).map(String::as_str)
    }

    pub fn attrs(&self) -> impl Iterator<Item = (&str, &str)> {
        self.attrs.iter().map(|(k, v)| (k.as_str(), v.as_str()))
    }

    pub fn classes(&self) -> &[String] {
        &self.classes
    }

    pub fn has_class(&self, class: &str) -> bool {
        self.classes.iter().any(|c| c == class)
    }

    pub fn inline_style(&self) -> &Style {
        &self.style
    }

    pub fn style_value(&self, property: &str) -> Option<&str> {
        self.style.get(property)
    }

    pub fn child_nodes(&self) -> &[Node] {
        &self.children
    }

    /// Child elements, skipping text nodes
    pub fn child_elements(&self) -> impl Iterator<Item = &Element> {
        self.children.iter().filter_map(Node::as_element)
    }

    pub fn handles(&self, event_type: EventType) -> bool {
        self.handlers
            .get(&event_type)
            .is_some_and(|handlers| !handlers.is_empty())
    }

    pub fn text_content(&self) -> String {
        let mut out = String::new();
        for child in &self.children {
            match child {
                Node::Element(element) => out.push_str(&element.text_content()),
                Node::Text(text) => out.push_str(text),
            }
        }
        out
    }

    // ========== Queries ==========

    /// Depth-first search including this element
    pub fn find(&self, predicate: impl Fn(&Element) -> bool + Copy) -> Option<&Element> {
        if predicate(self) {
            return Some(self);
        }
        self.child_elements()
            .find_map(|child| child.find(predicate))
    }

    /// All matching elements in document order, including this element
    pub fn find_all(&self, predicate: impl Fn(&Element) -> bool + Copy) -> Vec<&Element> {
        let mut found = Vec::new();
        self.collect_matching(predicate, &mut found);
        found
    }

    fn collect_matching<'a>(&'a self, predicate: impl Fn(&Element) -> bool + Copy, out: &mut Vec<&'a Element>) {
        if predicate(self) {
            out.push(self);
        }
        for child in self.child_elements() {
            child.collect_matching(predicate, out);
        }
    }

    pub fn find_by_attr(&self, name: &str, value: &str) -> Option<&Element> {
        self.find(|e| e.get_attr(name) == Some(value))
    }

    pub fn find_by_test_id(&self, id: &str) -> Option<&Element> {
        self.find_by_attr("data-testid", id)
    }

    pub fn find_by_class(&self, class: &str) -> Option<&Element> {
        self.find(|e| e.has_class(class))
    }

    // ========== Events ==========

    /// Invoke this element's handlers for the event.
    ///
    /// Returns `true` when at least one handler ran.
    pub fn dispatch(&self, event: &Event) -> bool {
        match self.handlers.get(&event.event_type) {
            Some(handlers) if !handlers.is_empty() => {
                for handler in handlers {
                    handler(event);
                }
                true
            }
            _ => false,
        }
    }

    pub fn to_html(&self) -> String {
        let mut out = String::new();
        html::write_element(&mut out, self);
        out
    }
}

impl fmt::Debug for Element {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Element")
            .field("tag", &self.tag)
            .field("classes", &self.classes)
            .field("attrs", &self.attrs)
            .field("style", &self.style.to_css())
            .field("children", &self.children)
            .field("handlers", &self.handlers.keys().collect::<Vec<_>>())
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::atomic::{AtomicBool, Ordering};

    #[test]
    fn test_duplicate_classes_ignored() {
        let e = div().class("a").class("a").class("").class("b");
        assert_eq!(e.classes(), &["a".to_string(), "b".to_string()]);
    }

    #[test]
    fn test_find_nested() {
        let tree = div().child(span().child(div().attr("data-testid", "leaf").child("x")));
        let leaf = tree.find_by_test_id("leaf").unwrap();
        assert_eq!(leaf.text_content(), "x");
        assert!(tree.find_by_test_id("missing").is_none());
    }

    #[test]
    fn test_find_all_in_order() {
        let tree = div()
            .child(span().class("item").child("1"))
            .child(div().child(span().class("item").child("2")));
        let texts: Vec<String> = tree
            .find_all(|e| e.has_class("item"))
            .iter()
            .map(|e| e.text_content())
            .collect();
        assert_eq!(texts, vec!["1", "2"]);
    }

    #[test]
    fn test_dispatch_without_handler() {
        assert!(!div().dispatch(&Event::click()));
    }

    #[test]
    fn test_dispatch_runs_handler() {
        let hit = Arc::new(AtomicBool::new(false));
        let flag = hit.clone();
        let e = div().on_click(move |_| flag.store(true, Ordering::SeqCst));
        assert!(e.handles(event_types::CLICK));
        assert!(e.dispatch(&Event::click()));
        assert!(hit.load(Ordering::SeqCst));
    }

    #[test]
    fn test_when() {
        let e = div().when(true, |e| e.class("on")).when(false, |e| e.class("off"));
        assert!(e.has_class("on"));
        assert!(!e.has_class("off"));
    }
}
