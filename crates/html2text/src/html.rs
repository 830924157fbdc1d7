//! HTML parsing support.
//!
//! Parses markup with scraper/html5ever and converts the result to the
//! [`Node`] tree the renderer walks. Malformed markup is repaired by the
//! parser's own error recovery, so parsing never fails.

use scraper::{ElementRef, Html, Node as ScraperNode};

use crate::node::Node;

/// UTF-8 byte-order mark
const UTF8_BOM: &[u8] = &[0xEF, 0xBB, 0xBF];

/// Parse an HTML document into a Node tree rooted at a `Document` node.
///
/// # Example
///
/// ```rust
/// use html2text::{parse_html, Html2Text};
///
/// let node = parse_html("<h1>Hello <b>World</b></h1>");
///
/// let text = Html2Text::new().render_node(&node).unwrap();
/// assert!(text.contains("Hello *World*"));
/// ```
pub fn parse_html(html: &str) -> Node {
    let document = Html::parse_document(html);
    let mut root = Node::document();
    root.add_child(scraper_to_node(document.root_element()));
    root
}

/// Drop a leading UTF-8 byte-order mark, if any.
pub fn strip_bom(bytes: &[u8]) -> &[u8] {
    bytes.strip_prefix(UTF8_BOM).unwrap_or(bytes)
}

/// Convert a scraper ElementRef to our Node structure
fn scraper_to_node(element: ElementRef) -> Node {
    let tag = element.value().name();
    let attrs: Vec<(&str, &str)> = element.value().attrs().collect();

    let mut node = if attrs.is_empty() {
        Node::element(tag)
    } else {
        Node::element_with_attrs(tag, attrs)
    };

    for child in element.children() {
        match child.value() {
            ScraperNode::Text(text) => {
                node.add_child(Node::text(&text.text));
            }
            ScraperNode::Comment(comment) => {
                node.add_child(Node::comment(&comment.comment));
            }
            ScraperNode::Element(_) => {
                if let Some(child_element) = ElementRef::wrap(child) {
                    node.add_child(scraper_to_node(child_element));
                }
            }
            _ => {}
        }
    }

    node
}
