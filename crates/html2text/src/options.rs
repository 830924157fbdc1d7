//! Per-call rendering configuration

pub use html2text_table::TableOptions;

/// Options for a single render call. All flags default to `false`:
/// plain text, links shown, tables flowed inline.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Options {
    /// Suppress the target annotation after link text
    pub omit_links: bool,

    /// Render tables as bordered ASCII grids instead of flowed text
    pub pretty_tables: bool,

    /// Use the Markdown render strategy instead of plain text
    pub markdown: bool,

    /// Grid settings used when `pretty_tables` is on
    pub table: TableOptions,
}
