//! Minimum-raggedness word wrapping for table cells.

use textwrap::core::Fragment;
use textwrap::wrap_algorithms::{wrap_first_fit, wrap_optimal_fit, Penalties};
use unicode_width::UnicodeWidthStr;

/// Wrap a paragraph to `limit` display columns.
///
/// Words are split on single spaces (newlines count as spaces). A word wider
/// than `limit` raises the limit to its own width; the effective limit is
/// returned along with the lines.
pub fn wrap_string(s: &str, limit: usize) -> (Vec<String>, usize) {
    let flattened = s.replace('\n', " ");
    let words: Vec<&str> = flattened.split(' ').collect();

    let limit = words
        .iter()
        .map(|w| UnicodeWidthStr::width(*w))
        .fold(limit, usize::max);

    let lines = wrap_words(&words, 1, limit)
        .into_iter()
        .map(|line| line.join(" "))
        .collect();

    (lines, limit)
}

/// A word plus the gap that follows it.
#[derive(Debug)]
struct CellWord<'a> {
    text: &'a str,
    width: f64,
    spacing: f64,
}

impl Fragment for CellWord<'_> {
    fn width(&self) -> f64 {
        self.width
    }

    fn whitespace_width(&self) -> f64 {
        self.spacing
    }

    fn penalty_width(&self) -> f64 {
        0.0
    }
}

/// Split `words` into lines minimizing the sum of squared trailing slack.
///
/// The last line is free. Overlong lines cost 100 000 per extra column.
/// `spacing` is the width of the gap between two words. Among layouts of
/// equal cost the one that breaks earlier wins.
pub fn wrap_words<'a>(words: &[&'a str], spacing: usize, limit: usize) -> Vec<Vec<&'a str>> {
    if words.is_empty() {
        return Vec::new();
    }

    let fragments: Vec<CellWord<'a>> = words
        .iter()
        .map(|&word| CellWord {
            text: word,
            width: UnicodeWidthStr::width(word) as f64,
            spacing: spacing as f64,
        })
        .collect();

    let penalties = Penalties {
        nline_penalty: 0,
        overflow_penalty: 100_000,
        short_last_line_penalty: 0,
        hyphen_penalty: 0,
        ..Penalties::new()
    };
    let line_widths = line_targets(fragments.len(), limit);

    let lines = wrap_optimal_fit(&fragments, &line_widths, &penalties)
        .unwrap_or_else(|_| wrap_first_fit(&fragments, &line_widths));

    lines
        .into_iter()
        .map(|line| line.iter().map(|word| word.text).collect())
        .collect()
}

/// Per-line targets that creep above `limit` by a fraction of a column per
/// line. Ties then favour slack on earlier lines, and the total drift stays
/// under half a unit of cost so no integer cost difference flips.
fn line_targets(lines: usize, limit: usize) -> Vec<f64> {
    let n = (lines + 1) as f64;
    let step = 1.0 / (4.0 * n * n * (limit + 1) as f64);
    (0..=lines)
        .map(|k| limit as f64 + k as f64 * step)
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_short_text_is_one_line() {
        let (lines, limit) = wrap_string("Row 1 Col 1", 30);
        assert_eq!(lines, vec!["Row 1 Col 1"]);
        assert_eq!(limit, 30);
    }

    #[test]
    fn test_balanced_wrapping() {
        let (lines, _) = wrap_string(
            "Open source programming language that makes it easy to build simple, reliable, and efficient software",
            30,
        );
        assert_eq!(
            lines,
            vec![
                "Open source programming",
                "language that makes it easy",
                "to build simple, reliable, and",
                "efficient software",
            ]
        );
    }

    #[test]
    fn test_long_word_raises_limit() {
        let (lines, limit) = wrap_string("tiny Row-1-Col-1-Msg123456789012345", 10);
        assert_eq!(limit, 30);
        assert_eq!(lines, vec!["tiny", "Row-1-Col-1-Msg123456789012345"]);
    }

    #[test]
    fn test_empty_input() {
        let (lines, _) = wrap_string("", 30);
        assert_eq!(lines, vec![""]);
        assert!(wrap_words(&[], 1, 10).is_empty());
    }

    #[test]
    fn test_wrap_words_prefers_even_lines() {
        // First fit would give "aaa bb" / "cc" / "ddddd"
        let lines = wrap_words(&["aaa", "bb", "cc", "ddddd"], 1, 7);
        assert_eq!(lines, vec![vec!["aaa"], vec!["bb", "cc"], vec!["ddddd"]]);
    }

    #[test]
    fn test_equal_cost_layouts_break_early() {
        // "easy | to" and "easy to |" both cost 9
        let (lines, _) = wrap_string(
            "language that makes it easy to build simple, reliable, and efficient software",
            30,
        );
        assert_eq!(
            lines,
            vec![
                "language that makes it easy",
                "to build simple, reliable, and",
                "efficient software",
            ]
        );
    }
}
