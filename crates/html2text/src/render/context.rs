//! Mutable state threaded through one traversal, and the emit buffer.

use std::fmt::Write;

use super::dispatch;
use super::strategy::RenderStrategy;
use super::table::TableContext;
use super::wrap::break_long_lines;
use crate::node::{Node, NodeType};
use crate::options::Options;
use crate::utilities::collapse_whitespace;
use crate::Result;

pub(super) struct TraversalContext<'a, S: RenderStrategy> {
    buf: String,
    pub(super) strategy: &'a S,
    pub(super) options: &'a Options,
    pub(super) blockquote_level: usize,
    prefix: String,
    pub(super) ends_with_space: bool,
    pub(super) line_length: usize,
    pub(super) just_closed_div: bool,
    pub(super) is_pre: bool,
    pub(super) table: Option<TableContext>,
}

impl<'a, S: RenderStrategy> TraversalContext<'a, S> {
    pub(super) fn new(strategy: &'a S, options: &'a Options) -> Self {
        Self {
            buf: String::new(),
            strategy,
            options,
            blockquote_level: 0,
            prefix: String::new(),
            ends_with_space: false,
            line_length: 0,
            just_closed_div: false,
            is_pre: false,
            table: None,
        }
    }

    /// Fresh context for rendering a subtree in isolation. Only the strategy
    /// and options are shared with `self`.
    pub(super) fn sub_context(&self) -> Self {
        Self::new(self.strategy, self.options)
    }

    pub(super) fn into_buffer(self) -> String {
        self.buf
    }

    pub(super) fn traverse(&mut self, node: &Node) -> Result<()> {
        match node.node_type {
            NodeType::Text if self.is_pre => self.emit(node.value()),
            NodeType::Text => {
                let data = collapse_whitespace(node.value());
                self.emit(data.trim())
            }
            NodeType::Element => dispatch::handle_element(self, node),
            NodeType::Comment | NodeType::Document | NodeType::DocumentFragment => {
                self.traverse_children(node)
            }
        }
    }

    pub(super) fn traverse_children(&mut self, node: &Node) -> Result<()> {
        for child in node.children() {
            self.traverse(child)?;
        }
        Ok(())
    }

    /// Append `data` to the buffer.
    ///
    /// A space separates it from the previous token unless either side
    /// already has whitespace there or `data` starts with a period. Inside
    /// quotes the text is wrapped first and every new line gets the quote
    /// prefix.
    pub(super) fn emit(&mut self, data: &str) -> Result<()> {
        if data.is_empty() {
            return Ok(());
        }

        let lines = if self.blockquote_level == 0 {
            vec![data.to_string()]
        } else {
            break_long_lines(data, self.line_length)
        };
        let leading_period = data.starts_with('.');

        for line in &lines {
            let (Some(first), Some(last)) = (line.chars().next(), line.chars().last()) else {
                continue;
            };

            if !first.is_whitespace() && !self.ends_with_space && !leading_period {
                self.buf.write_char(' ')?;
                self.line_length += 1;
            }
            self.ends_with_space = last.is_whitespace();

            for c in line.chars() {
                self.buf.write_char(c)?;
                self.line_length += 1;
                if c == '\n' {
                    self.line_length = 0;
                    if !self.prefix.is_empty() {
                        self.buf.write_str(&self.prefix)?;
                    }
                }
            }
        }

        Ok(())
    }

    /// Change the quote depth; the line prefix follows it.
    pub(super) fn set_blockquote_level(&mut self, level: usize) {
        self.blockquote_level = level;
        self.prefix = if level == 0 {
            String::new()
        } else {
            format!("{} ", ">".repeat(level))
        };
    }

    /// Children framed by blank lines
    pub(super) fn paragraph(&mut self, node: &Node) -> Result<()> {
        self.emit("\n\n")?;
        self.traverse_children(node)?;
        self.emit("\n\n")
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::render::strategy::PlainText;

    fn context<'a>(options: &'a Options) -> TraversalContext<'a, PlainText> {
        TraversalContext::new(&PlainText, options)
    }

    #[test]
    fn test_emit_inserts_separating_space() {
        let options = Options::default();
        let mut ctx = context(&options);
        ctx.emit("one").unwrap();
        ctx.emit("two").unwrap();
        ctx.emit(" three").unwrap();
        assert_eq!(ctx.into_buffer(), " one two three");
    }

    #[test]
    fn test_emit_no_space_before_period() {
        let options = Options::default();
        let mut ctx = context(&options);
        ctx.ends_with_space = true;
        ctx.emit("Test").unwrap();
        ctx.emit(".").unwrap();
        assert_eq!(ctx.into_buffer(), "Test.");
    }

    #[test]
    fn test_emit_empty_is_noop() {
        let options = Options::default();
        let mut ctx = context(&options);
        ctx.emit("").unwrap();
        assert!(!ctx.ends_with_space);
        assert_eq!(ctx.line_length, 0);
        assert_eq!(ctx.into_buffer(), "");
    }

    #[test]
    fn test_emit_tracks_line_length() {
        let options = Options::default();
        let mut ctx = context(&options);
        ctx.ends_with_space = true;
        ctx.emit("abc").unwrap();
        assert_eq!(ctx.line_length, 3);
        ctx.emit("\nde").unwrap();
        assert_eq!(ctx.line_length, 2);
    }

    #[test]
    fn test_prefix_follows_level() {
        let options = Options::default();
        let mut ctx = context(&options);
        ctx.set_blockquote_level(2);
        assert_eq!(ctx.prefix, ">> ");
        ctx.set_blockquote_level(1);
        assert_eq!(ctx.prefix, "> ");
        ctx.set_blockquote_level(0);
        assert_eq!(ctx.prefix, "");
    }

    #[test]
    fn test_prefix_written_after_newline() {
        let options = Options::default();
        let mut ctx = context(&options);
        ctx.set_blockquote_level(1);
        ctx.emit("\n").unwrap();
        ctx.emit("quoted").unwrap();
        assert_eq!(ctx.line_length, 6);
        assert_eq!(ctx.into_buffer(), "\n> quoted");
    }

    #[test]
    fn test_sub_context_is_isolated() {
        let options = Options::default();
        let mut ctx = context(&options);
        ctx.set_blockquote_level(1);
        ctx.emit("parent").unwrap();

        let sub = ctx.sub_context();
        assert_eq!(sub.blockquote_level, 0);
        assert_eq!(sub.line_length, 0);
        assert!(!sub.ends_with_space);
        assert_eq!(sub.into_buffer(), "");
    }
}
