//! Configuration options for ASCII table rendering

/// Options for ASCII table rendering
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TableOptions {
    /// Upper-case and center header and footer cells
    pub auto_format_header: bool,

    /// Wrap cell text that is wider than `col_width`
    pub auto_wrap_text: bool,

    /// Join all lines of a cell into one paragraph before wrapping
    pub reflow_during_auto_wrap: bool,

    /// Maximum cell width used when wrapping
    pub col_width: usize,

    /// Vertical separator between cells
    pub column_separator: char,

    /// Horizontal fill of border lines
    pub row_separator: char,

    /// Junction where border lines meet column separators
    pub center_separator: char,

    /// Draw a border line below the header
    pub header_line: bool,

    /// Draw a border line after every body row
    pub row_line: bool,
}

impl Default for TableOptions {
    fn default() -> Self {
        Self {
            auto_format_header: true,
            auto_wrap_text: true,
            reflow_during_auto_wrap: true,
            col_width: 30,
            column_separator: '|',
            row_separator: '-',
            center_separator: '+',
            header_line: true,
            row_line: false,
        }
    }
}
