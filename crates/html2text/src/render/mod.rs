//! The traversal engine.
//!
//! One [`TraversalContext`] is threaded through a depth-first walk of the
//! node tree. Element handling is shared between the render modes; the
//! active [`RenderStrategy`] only decides how headings, strong emphasis and
//! links are spelled.

mod context;
mod dispatch;
mod strategy;
mod table;
mod wrap;

use log::debug;

use self::context::TraversalContext;
use self::strategy::{Markdown, PlainText, RenderStrategy};
use crate::node::Node;
use crate::options::Options;
use crate::utilities::assemble;
use crate::Result;

/// Render a node tree with the strategy selected by `options`.
pub(crate) fn render(node: &Node, options: &Options) -> Result<String> {
    if options.markdown {
        render_entry(node, &Markdown, options)
    } else {
        render_entry(node, &PlainText, options)
    }
}

fn render_entry<S: RenderStrategy>(node: &Node, strategy: &S, options: &Options) -> Result<String> {
    debug!(
        "Rendering {} with {} strategy (omit_links={}, pretty_tables={})",
        node.node_name,
        strategy.name(),
        options.omit_links,
        options.pretty_tables
    );
    render_with(node, strategy, options)
}

/// Walk `node` in a fresh context and return the assembled text.
fn render_with<S: RenderStrategy>(node: &Node, strategy: &S, options: &Options) -> Result<String> {
    let mut ctx = TraversalContext::new(strategy, options);
    ctx.traverse(node)?;
    Ok(assemble(&ctx.into_buffer()))
}
