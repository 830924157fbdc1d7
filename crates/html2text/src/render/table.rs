//! Table collection for pretty-table rendering.
//!
//! Cells are buffered while the table subtree is walked, then the whole grid
//! is drawn by `html2text_table` when the table closes.

use html2text_table::{render_table, Table};
use log::debug;

use super::context::TraversalContext;
use super::strategy::RenderStrategy;
use crate::node::Node;
use crate::tag::Tag;
use crate::Result;

/// Cells of the table currently being walked
#[derive(Debug, Default)]
pub(super) struct TableContext {
    header: Vec<String>,
    body: Vec<Vec<String>>,
    footer: Vec<String>,
    row: usize,
    in_footer: bool,
}

impl TableContext {
    fn start_row(&mut self) {
        self.body.push(Vec::new());
    }

    fn end_row(&mut self) {
        self.row += 1;
    }

    fn push_header(&mut self, cell: String) {
        self.header.push(cell);
    }

    fn push_data(&mut self, cell: String) {
        if self.in_footer {
            self.footer.push(cell);
            return;
        }
        while self.body.len() <= self.row {
            self.body.push(Vec::new());
        }
        self.body[self.row].push(cell);
    }

    fn into_table(self) -> Table {
        Table {
            header: self.header,
            rows: self.body,
            footer: self.footer,
        }
    }
}

/// `table` element: collect the subtree, then emit the drawn grid.
///
/// Collection always starts from an empty context. An enclosing table's
/// context is set aside for the duration and put back afterwards.
pub(super) fn table<S: RenderStrategy>(
    ctx: &mut TraversalContext<'_, S>,
    node: &Node,
) -> Result<()> {
    ctx.emit("\n\n")?;

    let outer = ctx.table.replace(TableContext::default());
    ctx.traverse_children(node)?;
    let collected = std::mem::replace(&mut ctx.table, outer).unwrap_or_default();

    let table = collected.into_table();
    debug!(
        "Flushing table: {} header cells, {} rows, {} footer cells, {} columns",
        table.header.len(),
        table.rows.iter().filter(|row| !row.is_empty()).count(),
        table.footer.len(),
        table.column_count()
    );

    let rendered = render_table(&table, &ctx.options.table);
    ctx.emit(&rendered)?;
    ctx.emit("\n\n")
}

/// Footer groups, rows and cells. Outside of a collected table they are
/// transparent.
pub(super) fn table_part<S: RenderStrategy>(
    ctx: &mut TraversalContext<'_, S>,
    node: &Node,
    tag: Tag,
) -> Result<()> {
    if ctx.table.is_none() {
        return ctx.traverse_children(node);
    }

    match tag {
        Tag::TableFooter => {
            let was_in_footer = set_in_footer(ctx, true);
            ctx.traverse_children(node)?;
            set_in_footer(ctx, was_in_footer);
            Ok(())
        }
        Tag::TableRow => {
            if let Some(table) = ctx.table.as_mut() {
                table.start_row();
            }
            ctx.traverse_children(node)?;
            if let Some(table) = ctx.table.as_mut() {
                table.end_row();
            }
            Ok(())
        }
        Tag::TableHeaderCell => {
            let cell = render_cell(ctx, node)?;
            if let Some(table) = ctx.table.as_mut() {
                table.push_header(cell);
            }
            Ok(())
        }
        Tag::TableDataCell => {
            let cell = render_cell(ctx, node)?;
            if let Some(table) = ctx.table.as_mut() {
                table.push_data(cell);
            }
            Ok(())
        }
        _ => ctx.traverse_children(node),
    }
}

fn set_in_footer<S: RenderStrategy>(ctx: &mut TraversalContext<'_, S>, in_footer: bool) -> bool {
    ctx.table
        .as_mut()
        .map(|table| std::mem::replace(&mut table.in_footer, in_footer))
        .unwrap_or(false)
}

/// Render each child of a cell as a standalone document; non-empty results
/// become the cell's lines.
fn render_cell<S: RenderStrategy>(ctx: &TraversalContext<'_, S>, node: &Node) -> Result<String> {
    let mut lines = Vec::new();
    for child in node.children() {
        let text = super::render_with(child, ctx.strategy, ctx.options)?;
        if !text.is_empty() {
            lines.push(text);
        }
    }
    Ok(lines.join("\n"))
}
