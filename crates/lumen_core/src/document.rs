//! Document root attributes
//!
//! Non-component CSS consumers key off attributes on the root document element
//! (`<html data-theme="dark">`). The theme state writes those through an
//! [`AttributeSink`]; [`Document`] is the in-process implementation that also
//! renders complete HTML pages around a component tree.

use std::fmt;
use std::sync::{PoisonError, RwLock};

use indexmap::IndexMap;

use crate::element::Node;
use crate::html::{escape_attr, escape_text, write_node};

/// Receiver for root element attribute writes
pub trait AttributeSink: Send + Sync {
    fn set_attribute(&self, name: &str, value: &str);

    fn attribute(&self, name: &str) -> Option<String>;
}

/// Root document with mutable `<html>` attributes
#[derive(Default)]
pub struct Document {
    title: String,
    attributes: RwLock<IndexMap<String, String>>,
}

impl Document {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_title(title: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            ..Default::default()
        }
    }

    pub fn title(&self) -> &str {
        &self.title
    }

    /// Snapshot of the root attributes in insertion order
    pub fn attributes(&self) -> Vec<(String, String)> {
        self.attributes
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .iter()
            .map(|(k, v)| (k.clone(), v.clone()))
            .collect()
    }

    /// Render a full HTML page with `body` as the only child of `<body>`.
    ///
    /// `stylesheet`, when non-empty, is emitted in a `<style>` block in the head.
    pub fn render(&self, body: &Node, stylesheet: &str) -> String {
        let mut out = String::from("<!DOCTYPE html>\n<html");
        for (name, value) in self.attributes() {
            out.push(' ');
            out.push_str(&name);
            out.push_str("=\"");
            out.push_str(&escape_attr(&value));
            out.push('"');
        }
        out.push_str(">\n<head>\n<meta charset=\"utf-8\">\n");
        if !self.title.is_empty() {
            out.push_str("<title>");
            out.push_str(&escape_text(&self.title));
            out.push_str("</title>\n");
        }
        if !stylesheet.is_empty() {
            out.push_str("<style>\n");
            out.push_str(stylesheet);
            if !stylesheet.ends_with('\n') {
                out.push('\n');
            }
            out.push_str("</style>\n");
        }
        out.push_str("</head>\n<body>\n");
        write_node(&mut out, body);
        out.push_str("\n</body>\n</html>\n");
        out
    }
}

impl AttributeSink for Document {
    fn set_attribute(&self, name: &str, value: &str) {
        tracing::trace!("document root attribute {name}={value:?}");
        self.attributes
            .write()
            .unwrap_or_else(PoisonError::into_inner)
            .insert(name.to_string(), value.to_string());
    }

    fn attribute(&self, name: &str) -> Option<String> {
        self.attributes
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .get(name)
            .cloned()
    }
}

impl fmt::Debug for Document {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Document")
            .field("title", &self.title)
            .field("attributes", &self.attributes())
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{div, text};

    #[test]
    fn test_attribute_overwrite() {
        let doc = Document::new();
        doc.set_attribute("data-theme", "light");
        doc.set_attribute("data-theme", "dark");
        assert_eq!(doc.attribute("data-theme").as_deref(), Some("dark"));
        assert_eq!(doc.attributes().len(), 1);
    }

    #[test]
    fn test_render_page() {
        let doc = Document::with_title("Gallery");
        doc.set_attribute("data-theme", "dark");
        let page = doc.render(&div().child(text("hi")).into(), ":root { color: red; }");
        assert!(page.starts_with("<!DOCTYPE html>\n<html data-theme=\"dark\">"));
        assert!(page.contains("<title>Gallery</title>"));
        assert!(page.contains("<style>\n:root { color: red; }\n</style>"));
        assert!(page.contains("<body>\n<div>hi</div>\n</body>"));
    }
}
