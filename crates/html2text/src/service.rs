//! Html2Text - the main entry point for HTML to text conversion.

#[cfg(feature = "html")]
use std::io::Read;

use crate::node::Node;
use crate::options::Options;
use crate::render;
use crate::Result;
#[cfg(feature = "html")]
use crate::html;

/// Converts HTML documents or node trees to plain text or Markdown.
///
/// The service holds no state besides its [`Options`]; one instance can be
/// shared across threads and reused for any number of documents.
#[derive(Debug, Clone, Default)]
pub struct Html2Text {
    options: Options,
}

impl Html2Text {
    /// Create a service with default options: plain text, links shown,
    /// tables flowed inline.
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_options(options: Options) -> Self {
        Self { options }
    }

    pub fn options(&self) -> &Options {
        &self.options
    }

    pub fn options_mut(&mut self) -> &mut Options {
        &mut self.options
    }

    /// Render an already built node tree.
    pub fn render_node(&self, node: &Node) -> Result<String> {
        render::render(node, &self.options)
    }

    /// Parse and render an HTML string.
    #[cfg(feature = "html")]
    pub fn render_str(&self, html: &str) -> Result<String> {
        let document = html::parse_html(html);
        self.render_node(&document)
    }

    /// Read an HTML document from `reader` and render it.
    ///
    /// A leading UTF-8 byte-order mark is dropped. Byte sequences that are
    /// not valid UTF-8 become U+FFFD replacement characters.
    #[cfg(feature = "html")]
    pub fn render_reader<R: Read>(&self, mut reader: R) -> Result<String> {
        let mut bytes = Vec::new();
        reader.read_to_end(&mut bytes)?;

        let source = String::from_utf8_lossy(html::strip_bom(&bytes));
        self.render_str(&source)
    }
}
