//! Per-element rendering shared by both strategies.

use log::trace;

use super::context::TraversalContext;
use super::strategy::RenderStrategy;
use super::table;
use crate::node::{Node, NodeType};
use crate::tag::Tag;
use crate::utilities::{collapse_whitespace, normalize_href};
use crate::Result;

pub(super) fn handle_element<S: RenderStrategy>(
    ctx: &mut TraversalContext<'_, S>,
    node: &Node,
) -> Result<()> {
    ctx.just_closed_div = false;

    let tag = Tag::from_name(&node.node_name);
    match tag {
        Tag::LineBreak => ctx.emit("\n"),
        Tag::Heading(level) => heading(ctx, node, level),
        Tag::Blockquote => blockquote(ctx, node),
        Tag::Division => division(ctx, node),
        Tag::ListItem => {
            ctx.emit("* ")?;
            ctx.traverse_children(node)?;
            ctx.emit("\n")
        }
        Tag::Strong => strong(ctx, node),
        Tag::Anchor => anchor(ctx, node),
        Tag::Paragraph | Tag::UnorderedList => ctx.paragraph(node),
        Tag::Table if ctx.options.pretty_tables => table::table(ctx, node),
        Tag::Table => ctx.paragraph(node),
        Tag::TableFooter | Tag::TableRow | Tag::TableHeaderCell | Tag::TableDataCell => {
            if ctx.options.pretty_tables {
                table::table_part(ctx, node, tag)
            } else {
                ctx.traverse_children(node)
            }
        }
        Tag::Preformatted => {
            let was_pre = std::mem::replace(&mut ctx.is_pre, true);
            let result = ctx.traverse_children(node);
            ctx.is_pre = was_pre;
            result
        }
        Tag::Hidden => {
            trace!("Skipping <{}> subtree", node.tag_name());
            Ok(())
        }
        Tag::Image | Tag::Unknown => ctx.traverse_children(node),
    }
}

fn heading<S: RenderStrategy>(
    ctx: &mut TraversalContext<'_, S>,
    node: &Node,
    level: u8,
) -> Result<()> {
    if level > ctx.strategy.max_heading_level() {
        return ctx.traverse_children(node);
    }

    let mut sub = ctx.sub_context();
    sub.traverse_children(node)?;
    let content = sub.into_buffer();

    let block = ctx.strategy.heading(level, &content);
    ctx.emit(&block)
}

fn blockquote<S: RenderStrategy>(ctx: &mut TraversalContext<'_, S>, node: &Node) -> Result<()> {
    ctx.set_blockquote_level(ctx.blockquote_level + 1);
    ctx.emit("\n")?;
    if ctx.blockquote_level == 1 {
        ctx.emit("\n")?;
    }

    ctx.traverse_children(node)?;

    ctx.set_blockquote_level(ctx.blockquote_level.saturating_sub(1));
    ctx.emit("\n\n")
}

fn division<S: RenderStrategy>(ctx: &mut TraversalContext<'_, S>, node: &Node) -> Result<()> {
    if ctx.line_length > 0 {
        ctx.emit("\n")?;
    }
    ctx.traverse_children(node)?;

    let result = if ctx.just_closed_div { Ok(()) } else { ctx.emit("\n") };
    ctx.just_closed_div = true;
    result
}

fn strong<S: RenderStrategy>(ctx: &mut TraversalContext<'_, S>, node: &Node) -> Result<()> {
    let mut sub = ctx.sub_context();
    sub.ends_with_space = true;
    sub.traverse_children(node)?;
    let content = sub.into_buffer();

    let formatted = ctx.strategy.strong(&content);
    ctx.emit(&formatted)
}

fn anchor<S: RenderStrategy>(ctx: &mut TraversalContext<'_, S>, node: &Node) -> Result<()> {
    let link_text = node
        .only_child()
        .filter(|child| child.node_type == NodeType::Text)
        .map(|child| collapse_whitespace(child.value()).trim().to_string())
        .unwrap_or_default();

    let target = normalize_href(node.attr("href").unwrap_or(""));
    let annotate = !ctx.options.omit_links && !target.is_empty() && target != link_text;

    if ctx.strategy.wraps_link_text() {
        let mut sub = ctx.sub_context();
        sub.ends_with_space = true;
        link_content(&mut sub, node)?;
        let content = sub.into_buffer();
        let text = content.trim();

        if annotate {
            let link = ctx.strategy.link(text, target);
            ctx.emit(&link)
        } else {
            ctx.emit(text)
        }
    } else {
        link_content(ctx, node)?;

        if annotate {
            let link = ctx.strategy.link(&link_text, target);
            ctx.emit(&link)
        } else {
            Ok(())
        }
    }
}

/// Visible part of a link: the alt text of a lone image, otherwise the
/// rendered children.
fn link_content<S: RenderStrategy>(
    ctx: &mut TraversalContext<'_, S>,
    node: &Node,
) -> Result<()> {
    let image_alt = node
        .only_child()
        .filter(|child| child.is_element() && Tag::from_name(&child.node_name) == Tag::Image)
        .map(|image| image.attr("alt").unwrap_or(""));

    match image_alt {
        Some(alt) => ctx.emit(alt),
        None => ctx.traverse_children(node),
    }
}
