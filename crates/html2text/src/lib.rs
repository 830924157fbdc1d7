//! # html2text
//!
//! Convert HTML documents to readable plain text or lightweight Markdown.
//!
//! Headings get divider lines, links keep their targets next to the link
//! text, block quotes are prefixed with `>` and wrapped, lists become `*`
//! bullets and tables are either flowed inline or drawn as ASCII grids.
//!
//! ## Design
//!
//! Rendering works on a small owned [`Node`] tree. With the default `html`
//! feature the tree is built by scraper/html5ever, but callers that already
//! hold a DOM can build the tree themselves and skip parsing entirely.
//!
//! ## Example (HTML string)
//!
//! ```rust
//! let text = html2text::from_string(
//!     r#"<h1>Hello</h1><p>Visit <a href="https://example.com/">us</a></p>"#,
//!     &html2text::Options::default(),
//! )
//! .unwrap();
//!
//! assert_eq!(text, "*****\nHello\n*****\n\nVisit us ( https://example.com/ )");
//! ```
//!
//! ## Example (Node-based)
//!
//! ```rust
//! use html2text::{Html2Text, Node, Options};
//!
//! let mut b = Node::element("b");
//! b.add_child(Node::text("Important"));
//!
//! let service = Html2Text::with_options(Options {
//!     markdown: true,
//!     ..Default::default()
//! });
//! assert_eq!(service.render_node(&b).unwrap(), "**Important**");
//! ```

#[cfg(feature = "html")]
pub mod html;
pub mod node;
pub mod options;
mod render;
mod service;
pub mod tag;
mod utilities;

#[cfg(feature = "html")]
use std::io::Read;

#[cfg(feature = "html")]
pub use html::{parse_html, strip_bom};
pub use node::{Node, NodeType};
pub use options::{Options, TableOptions};
pub use service::Html2Text;
pub use tag::Tag;
pub use utilities::{collapse_whitespace, normalize_href};

/// Error type for html2text operations
#[derive(Debug, thiserror::Error)]
pub enum Html2TextError {
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Write error: {0}")]
    Write(#[from] std::fmt::Error),
}

pub type Result<T> = std::result::Result<T, Html2TextError>;

/// Render a node tree with the given options.
pub fn from_node(node: &Node, options: &Options) -> Result<String> {
    render::render(node, options)
}

/// Parse and render an HTML string.
#[cfg(feature = "html")]
pub fn from_string(html: &str, options: &Options) -> Result<String> {
    Html2Text::with_options(options.clone()).render_str(html)
}

/// Read, parse and render an HTML document.
#[cfg(feature = "html")]
pub fn from_reader<R: Read>(reader: R, options: &Options) -> Result<String> {
    Html2Text::with_options(options.clone()).render_reader(reader)
}
