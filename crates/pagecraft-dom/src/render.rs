// File: src/render.rs
// Purpose: Serialize a node tree to a compact HTML string

use crate::node::{Element, Node};

/// Render a node tree to an HTML string.
///
/// Serialization rules match the renderer the layout fixtures were
/// recorded against:
/// - every element gets an explicit closing tag, void elements included
///   (`<meta ...></meta>`, `<img ...></img>`);
/// - attributes are written in insertion order, always as double-quoted
///   strings;
/// - no whitespace is inserted between nodes;
/// - `Text` is escaped, `Raw` is emitted byte-for-byte.
pub fn render_string(node: &Node) -> String {
    let mut out = String::new();
    write_node(node, &mut out);
    tracing::trace!(len = out.len(), "rendered node tree");
    out
}

fn write_node(node: &Node, out: &mut String) {
    match node {
        Node::Element(el) => write_element(el, out),
        Node::Text(text) => out.push_str(&html_escape::encode_text(text)),
        Node::Raw(markup) => out.push_str(markup),
    }
}

fn write_element(el: &Element, out: &mut String) {
    out.push('<');
    out.push_str(&el.tag);
    for (name, value) in &el.attrs {
        out.push(' ');
        out.push_str(name);
        out.push_str("=\"");
        out.push_str(&html_escape::encode_double_quoted_attribute(value));
        out.push('"');
    }
    out.push('>');
    for child in &el.children {
        write_node(child, out);
    }
    out.push_str("</");
    out.push_str(&el.tag);
    out.push('>');
}

impl std::fmt::Display for Node {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", render_string(self))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_render_empty_element() {
        let node = Node::from(Element::new("div").attr("id", "body"));
        assert_eq!(render_string(&node), r#"<div id="body"></div>"#);
    }

    #[test]
    fn test_void_elements_get_closing_tags() {
        let node = Node::from(Element::new("meta").attr("charset", "utf-8"));
        assert_eq!(render_string(&node), r#"<meta charset="utf-8"></meta>"#);
    }

    #[test]
    fn test_attr_insertion_order_preserved() {
        let node = Node::from(
            Element::new("script")
                .attr("defer", "true")
                .attr("src", "/common.js"),
        );
        assert_eq!(
            render_string(&node),
            r#"<script defer="true" src="/common.js"></script>"#
        );
    }

    #[test]
    fn test_text_is_escaped() {
        let node = Node::from(Element::new("title").text("a < b & c"));
        assert_eq!(render_string(&node), "<title>a &lt; b &amp; c</title>");
    }

    #[test]
    fn test_attribute_values_are_escaped() {
        let node = Node::from(Element::new("meta").attr("content", r#"say "hi""#));
        assert_eq!(
            render_string(&node),
            r#"<meta content="say &quot;hi&quot;"></meta>"#
        );
    }

    #[test]
    fn test_raw_markup_is_not_escaped() {
        let node = Node::from(Element::new("div").raw("<span>ok</span>"));
        assert_eq!(render_string(&node), "<div><span>ok</span></div>");
    }

    #[test]
    fn test_nested_children_in_order() {
        let node = Node::from(
            Element::new("noscript")
                .child(Element::new("img").attr("src", "/tag1"))
                .child(Element::new("img").attr("src", "/tag2")),
        );
        assert_eq!(
            render_string(&node),
            r#"<noscript><img src="/tag1"></img><img src="/tag2"></img></noscript>"#
        );
    }
}
