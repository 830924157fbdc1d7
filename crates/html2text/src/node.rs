//! DOM-style node tree consumed by the renderer.
//!
//! Any HTML parser can convert its output to this structure; the renderer
//! only reads it. With the `html` feature, [`crate::parse_html`] builds it
//! from a markup string.

/// Node types matching DOM nodeType values
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NodeType {
    /// Element node (nodeType = 1)
    Element = 1,
    /// Text node (nodeType = 3)
    Text = 3,
    /// Comment node (nodeType = 8)
    Comment = 8,
    /// Document node (nodeType = 9)
    Document = 9,
    /// Document fragment node (nodeType = 11)
    DocumentFragment = 11,
}

/// A node of the markup tree.
#[derive(Debug, Clone)]
pub struct Node {
    pub node_type: NodeType,

    /// Uppercase tag name for elements, `#text`, `#comment`, `#document`
    /// otherwise
    pub node_name: String,

    /// Payload of text and comment nodes
    pub node_value: Option<String>,

    /// Attributes in source order. Keys are not guaranteed to be unique.
    pub attributes: Vec<(String, String)>,

    pub children: Vec<Node>,
}

impl Node {
    fn new(node_type: NodeType, node_name: &str) -> Self {
        Self {
            node_type,
            node_name: node_name.to_string(),
            node_value: None,
            attributes: Vec::new(),
            children: Vec::new(),
        }
    }

    /// Create a new element node
    pub fn element(tag_name: &str) -> Self {
        Self::new(NodeType::Element, &tag_name.to_uppercase())
    }

    /// Create a new element node with attributes
    pub fn element_with_attrs(tag_name: &str, attrs: Vec<(&str, &str)>) -> Self {
        let mut node = Self::element(tag_name);
        node.attributes = attrs
            .into_iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        node
    }

    /// Create a new text node
    pub fn text(content: &str) -> Self {
        let mut node = Self::new(NodeType::Text, "#text");
        node.node_value = Some(content.to_string());
        node
    }

    /// Create a new comment node
    pub fn comment(content: &str) -> Self {
        let mut node = Self::new(NodeType::Comment, "#comment");
        node.node_value = Some(content.to_string());
        node
    }

    /// Create a document root node
    pub fn document() -> Self {
        Self::new(NodeType::Document, "#document")
    }

    /// Create a document fragment node
    pub fn document_fragment() -> Self {
        Self::new(NodeType::DocumentFragment, "#document-fragment")
    }

    pub fn is_element(&self) -> bool {
        self.node_type == NodeType::Element
    }

    pub fn is_text(&self) -> bool {
        self.node_type == NodeType::Text
    }

    /// Get the tag name (lowercase)
    pub fn tag_name(&self) -> String {
        self.node_name.to_lowercase()
    }

    /// Text payload, empty for non-text nodes
    pub fn value(&self) -> &str {
        self.node_value.as_deref().unwrap_or("")
    }

    /// Get the first attribute value with the given name (case-insensitive)
    pub fn attr(&self, name: &str) -> Option<&str> {
        self.attributes
            .iter()
            .find(|(key, _)| key.eq_ignore_ascii_case(name))
            .map(|(_, value)| value.as_str())
    }

    pub fn children(&self) -> impl Iterator<Item = &Node> {
        self.children.iter()
    }

    /// The single child of this node, if it has exactly one
    pub fn only_child(&self) -> Option<&Node> {
        match self.children.as_slice() {
            [child] => Some(child),
            _ => None,
        }
    }

    /// Add a child node
    pub fn add_child(&mut self, child: Node) {
        self.children.push(child);
    }

    /// Builder form of [`Node::add_child`]
    pub fn with_child(mut self, child: Node) -> Self {
        self.add_child(child);
        self
    }

    /// Get all text content from this node and descendants
    pub fn text_content(&self) -> String {
        match self.node_type {
            NodeType::Text => self.value().to_string(),
            NodeType::Comment => String::new(),
            _ => self.children().map(Node::text_content).collect(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_create_element() {
        let node = Node::element("div");
        assert!(node.is_element());
        assert_eq!(node.tag_name(), "div");
        assert_eq!(node.node_name, "DIV");
    }

    #[test]
    fn test_create_text() {
        let node = Node::text("Hello World");
        assert!(node.is_text());
        assert_eq!(node.value(), "Hello World");
        assert_eq!(node.text_content(), "Hello World");
    }

    #[test]
    fn test_attributes_first_match_wins() {
        let node = Node::element_with_attrs(
            "a",
            vec![("href", "https://example.com"), ("HREF", "ignored"), ("title", "Example")],
        );
        assert_eq!(node.attr("href"), Some("https://example.com"));
        assert_eq!(node.attr("Title"), Some("Example"));
        assert_eq!(node.attr("class"), None);
    }

    #[test]
    fn test_only_child() {
        let single = Node::element("a").with_child(Node::text("x"));
        assert!(single.only_child().is_some_and(Node::is_text));

        let double = Node::element("a")
            .with_child(Node::text("x"))
            .with_child(Node::text("y"));
        assert!(double.only_child().is_none());
        assert!(Node::element("a").only_child().is_none());
    }

    #[test]
    fn test_text_content_skips_comments() {
        let div = Node::element("div")
            .with_child(Node::text("Hello "))
            .with_child(Node::comment("hidden"))
            .with_child(Node::element("span").with_child(Node::text("World")));

        assert_eq!(div.text_content(), "Hello World");
    }
}
