//! HTML serialization for element trees

use crate::element::{Element, Node};

/// Elements serialized without a closing tag
const VOID_ELEMENTS: &[&str] = &["area", "br", "hr", "img", "input", "link", "meta"];

pub fn escape_text(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    for c in text.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            _ => out.push(c),
        }
    }
    out
}

pub fn escape_attr(value: &str) -> String {
    let mut out = String::with_capacity(value.len());
    for c in value.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '"' => out.push_str("&quot;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            _ => out.push(c),
        }
    }
    out
}

pub(crate) fn write_node(out: &mut String, node: &Node) {
    match node {
        Node::Element(element) => write_element(out, element),
        Node::Text(text) => out.push_str(&escape_text(text)),
    }
}

/// Attribute order: `class`, then attributes in insertion order, then `style`.
pub(crate) fn write_element(out: &mut String, element: &Element) {
    out.push('<');
    out.push_str(element.tag());

    if !element.classes().is_empty() {
        out.push_str(" class=\"");
        out.push_str(&escape_attr(&element.classes().join(" ")));
        out.push('"');
    }

    for (name, value) in element.attrs() {
        out.push(' ');
        out.push_str(name);
        if !value.is_empty() {
            out.push_str("=\"");
            out.push_str(&escape_attr(value));
            out.push('"');
        }
    }

    if !element.inline_style().is_empty() {
        out.push_str(" style=\"");
        out.push_str(&escape_attr(&element.inline_style().to_css()));
        out.push('"');
    }

    out.push('>');

    if VOID_ELEMENTS.contains(&element.tag()) {
        return;
    }

    for child in element.child_nodes() {
        write_node(out, child);
    }

    out.push_str("</");
    out.push_str(element.tag());
    out.push('>');
}

#[cfg(test)]
mod tests {
    use crate::{div, el, text};
    use pretty_assertions::assert_eq;

    #[test]
    fn test_escaping() {
        let e = div().attr("title", "a \"b\" & c").child(text("<script>"));
        assert_eq!(
            e.to_html(),
            r#"<div title="a &quot;b&quot; &amp; c">&lt;script&gt;</div>"#
        );
    }

    #[test]
    fn test_void_and_flag_attributes() {
        let e = el("input").attr("type", "checkbox").flag("disabled", true);
        assert_eq!(e.to_html(), r#"<input type="checkbox" disabled>"#);
    }

    #[test]
    fn test_attribute_order() {
        let e = div()
            .style("color", "red")
            .attr("id", "x")
            .class("box")
            .child("hi");
        assert_eq!(
            e.to_html(),
            r#"<div class="box" id="x" style="color: red">hi</div>"#
        );
    }
}
