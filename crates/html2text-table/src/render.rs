//! ASCII table rendering
//!
//! Converts a buffered [`Table`] into a bordered text grid.

use once_cell::sync::Lazy;
use regex::Regex;
use unicode_width::UnicodeWidthStr;

use crate::options::TableOptions;
use crate::wrap::wrap_string;
use crate::Table;

static DECIMAL_RE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^-?(?:\d{1,3}(?:,\d{3})*|\d+)(?:\.\d+)?$").expect("decimal pattern is valid")
});
static PERCENT_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^-?\d+\.?\d*%$").expect("percent pattern is valid"));

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Align {
    Left,
    Right,
    Center,
}

/// A row after wrapping: one list of lines per column
type PreparedRow = Vec<Vec<String>>;

/// Render a table as a bordered ASCII grid.
///
/// Every line of the result, including the last, ends with `\n`. A table
/// without any cell renders as an empty string.
pub fn render_table(table: &Table, options: &TableOptions) -> String {
    let columns = table.column_count();
    if columns == 0 {
        return String::new();
    }

    let mut widths = vec![0usize; columns];

    let header = prepare_row(&table.header, columns, true, options, &mut widths);
    let rows: Vec<PreparedRow> = table
        .rows
        .iter()
        .filter(|row| !row.is_empty())
        .map(|row| prepare_row(row, columns, false, options, &mut widths))
        .collect();
    let footer = prepare_row(&table.footer, columns, true, options, &mut widths);

    let mut out = String::with_capacity(256);

    push_border(&widths, options, &mut out);

    if !table.header.is_empty() {
        push_row(&header, &widths, |_| Align::Center, options, &mut out);
        if options.header_line {
            push_border(&widths, options, &mut out);
        }
    }

    for row in &rows {
        push_row(row, &widths, body_align, options, &mut out);
        if options.row_line {
            push_border(&widths, options, &mut out);
        }
    }

    if !options.row_line {
        push_border(&widths, options, &mut out);
    }

    if !table.footer.is_empty() {
        push_row(&footer, &widths, |_| Align::Center, options, &mut out);
        push_border(&widths, options, &mut out);
    }

    out
}

fn prepare_row(
    cells: &[String],
    columns: usize,
    heading: bool,
    options: &TableOptions,
    widths: &mut [usize],
) -> PreparedRow {
    (0..columns)
        .map(|col| {
            let text = cells.get(col).map(String::as_str).unwrap_or("");
            let (lines, width) = prepare_cell(text, heading, options);
            widths[col] = widths[col].max(width);
            lines
        })
        .collect()
}

/// Split a cell into display lines, wrapping when enabled.
///
/// Returns the lines and the widest of them.
fn prepare_cell(text: &str, heading: bool, options: &TableOptions) -> (Vec<String>, usize) {
    let text = if heading && options.auto_format_header {
        title_case(text)
    } else {
        text.to_string()
    };

    let mut lines: Vec<String> = text.split('\n').map(str::to_string).collect();
    let widest = lines.iter().map(|l| display_width(l)).max().unwrap_or(0);

    if !options.auto_wrap_text {
        return (lines, widest);
    }

    let limit = widest.min(options.col_width);
    let mut new_widest = limit;

    if options.reflow_during_auto_wrap {
        lines = vec![lines.join(" ")];
    }

    let mut wrapped = Vec::with_capacity(lines.len());
    for (i, paragraph) in lines.iter().enumerate() {
        let (paragraph_lines, _) = wrap_string(paragraph, limit);
        for line in &paragraph_lines {
            new_widest = new_widest.max(display_width(line));
        }
        if i > 0 {
            wrapped.push(" ".to_string());
        }
        wrapped.extend(paragraph_lines);
    }

    (wrapped, new_widest)
}

/// Header and footer formatting: `_` and word-separating `.` become spaces,
/// the result is trimmed and upper-cased.
fn title_case(name: &str) -> String {
    let chars: Vec<char> = name.chars().collect();
    let num_or_space = |c: char| c.is_ascii_digit() || c == ' ';

    let mapped: String = chars
        .iter()
        .enumerate()
        .map(|(i, &c)| match c {
            '_' => ' ',
            '.' if (i > 0 && !num_or_space(chars[i - 1]))
                || (i + 1 < chars.len() && !num_or_space(chars[i + 1])) =>
            {
                ' '
            }
            _ => c,
        })
        .collect();

    let trimmed = mapped.trim();
    if trimmed.is_empty() && !name.is_empty() {
        return " ".to_string();
    }
    trimmed.to_uppercase()
}

fn body_align(line: &str) -> Align {
    let line = line.trim();
    if DECIMAL_RE.is_match(line) || PERCENT_RE.is_match(line) {
        Align::Right
    } else {
        Align::Left
    }
}

fn push_border(widths: &[usize], options: &TableOptions, out: &mut String) {
    out.push(options.center_separator);
    for &width in widths {
        for _ in 0..width + 2 {
            out.push(options.row_separator);
        }
        out.push(options.center_separator);
    }
    out.push('\n');
}

fn push_row<F>(
    row: &PreparedRow,
    widths: &[usize],
    align: F,
    options: &TableOptions,
    out: &mut String,
)
where
    F: Fn(&str) -> Align,
{
    let height = row.iter().map(Vec::len).max().unwrap_or(0);

    for line_idx in 0..height {
        for (col, lines) in row.iter().enumerate() {
            let text = lines.get(line_idx).map(String::as_str).unwrap_or("");
            out.push(options.column_separator);
            out.push(' ');
            out.push_str(&pad(text, widths[col], align(text)));
            out.push(' ');
        }
        out.push(options.column_separator);
        out.push('\n');
    }
}

fn pad(text: &str, width: usize, align: Align) -> String {
    let gap = width.saturating_sub(display_width(text));
    let (left, right) = match align {
        Align::Left => (0, gap),
        Align::Right => (gap, 0),
        Align::Center => (gap / 2, gap - gap / 2),
    };
    format!("{}{}{}", " ".repeat(left), text, " ".repeat(right))
}

fn display_width(s: &str) -> usize {
    UnicodeWidthStr::width(s)
}
