// File: src/node.rs
// Purpose: Typed element tree consumed by the string renderer

/// A node in the document tree
///
/// `Text` is escaped when rendered; `Raw` is trusted markup emitted
/// verbatim. Callers that hold pre-rendered HTML must wrap it in `Raw`
/// explicitly, so escaping mistakes fail loudly in review rather than
/// silently in output.
#[derive(Debug, Clone, PartialEq)]
pub enum Node {
    Element(Element),
    Text(String),
    Raw(String),
}

impl Node {
    /// Create an escaped text node
    pub fn text(value: impl Into<String>) -> Self {
        Node::Text(value.into())
    }

    /// Create a trusted-markup node, emitted without escaping
    pub fn raw(value: impl Into<String>) -> Self {
        Node::Raw(value.into())
    }
}

impl From<Element> for Node {
    fn from(el: Element) -> Self {
        Node::Element(el)
    }
}

/// An element with insertion-ordered attributes and children
///
/// Attribute order is significant: the renderer writes attributes in the
/// order they were added, and downstream consumers compare output
/// byte-for-byte.
#[derive(Debug, Clone, PartialEq)]
pub struct Element {
    pub tag: String,
    pub attrs: Vec<(String, String)>,
    pub children: Vec<Node>,
}

impl Element {
    /// Create an empty element with the given tag name
    pub fn new(tag: impl Into<String>) -> Self {
        Self {
            tag: tag.into(),
            attrs: Vec::new(),
            children: Vec::new(),
        }
    }

    /// Builder method to append an attribute
    pub fn attr(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.attrs.push((name.into(), value.into()));
        self
    }

    /// Builder method to append a child node
    pub fn child(mut self, node: impl Into<Node>) -> Self {
        self.children.push(node.into());
        self
    }

    /// Builder method to append a sequence of children
    pub fn children(mut self, nodes: impl IntoIterator<Item = Node>) -> Self {
        self.children.extend(nodes);
        self
    }

    /// Builder method to append an escaped text child
    pub fn text(self, value: impl Into<String>) -> Self {
        self.child(Node::text(value))
    }

    /// Builder method to append a trusted-markup child
    pub fn raw(self, value: impl Into<String>) -> Self {
        self.child(Node::raw(value))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_builder_preserves_attr_order() {
        let el = Element::new("meta")
            .attr("content", "en")
            .attr("name", "language");

        assert_eq!(
            el.attrs,
            vec![
                ("content".to_string(), "en".to_string()),
                ("name".to_string(), "language".to_string()),
            ]
        );
    }

    #[test]
    fn test_children_appended_in_order() {
        let el = Element::new("noscript")
            .child(Element::new("img").attr("src", "/a"))
            .child(Element::new("img").attr("src", "/b"));

        assert_eq!(el.children.len(), 2);
        match &el.children[0] {
            Node::Element(img) => assert_eq!(img.attrs[0].1, "/a"),
            other => panic!("expected element, got {other:?}"),
        }
    }
}
