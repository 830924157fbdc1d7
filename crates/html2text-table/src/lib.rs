//! html2text-table - ASCII grid rendering for tabular text
//!
//! This crate turns a buffered header/body/footer cell grid into a bordered
//! plain-text table. It is used by `html2text` when pretty tables are enabled,
//! but has no knowledge of HTML and can be used on its own.
//!
//! # Layout
//!
//! ```text
//! +-------------+-------------+
//! |  HEADER 1   |  HEADER 2   |
//! +-------------+-------------+
//! | Row 1 Col 1 | Row 1 Col 2 |
//! +-------------+-------------+
//! |  FOOTER 1   |  FOOTER 2   |
//! +-------------+-------------+
//! ```
//!
//! # Example
//!
//! ```rust
//! use html2text_table::{render_table, Table, TableOptions};
//!
//! let table = Table {
//!     header: vec!["Name".to_string()],
//!     rows: vec![vec!["Ferris".to_string()]],
//!     footer: Vec::new(),
//! };
//!
//! let text = render_table(&table, &TableOptions::default());
//! assert!(text.contains("| Ferris |"));
//! ```

mod options;
mod render;
mod wrap;

pub use options::TableOptions;
pub use render::render_table;
pub use wrap::{wrap_string, wrap_words};

/// A buffered table grid: one optional header line, body rows and one
/// optional footer line, each cell holding already-rendered text.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Table {
    pub header: Vec<String>,
    pub rows: Vec<Vec<String>>,
    pub footer: Vec<String>,
}

impl Table {
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of columns: the widest of header, footer and any body row.
    pub fn column_count(&self) -> usize {
        self.rows
            .iter()
            .map(Vec::len)
            .chain([self.header.len(), self.footer.len()])
            .max()
            .unwrap_or(0)
    }

    /// True when there is no cell anywhere in the grid
    pub fn is_empty(&self) -> bool {
        self.column_count() == 0
    }
}
