//! Output conventions for the two render modes.
//!
//! The traversal is shared; a strategy only decides how headings, strong
//! emphasis and link annotations are spelled.

pub trait RenderStrategy {
    fn name(&self) -> &'static str;

    /// Deepest heading level rendered as a heading. Deeper levels pass
    /// their content through unformatted.
    fn max_heading_level(&self) -> u8;

    /// Format heading content rendered in isolation
    fn heading(&self, level: u8, content: &str) -> String;

    fn strong(&self, content: &str) -> String;

    /// True when the link annotation wraps the link text, false when it is
    /// appended after text that was already emitted.
    fn wraps_link_text(&self) -> bool;

    fn link(&self, text: &str, target: &str) -> String;
}

/// Plain text: divider-framed headings, `*strong*`, `text ( target )`.
#[derive(Debug, Clone, Copy, Default)]
pub struct PlainText;

impl RenderStrategy for PlainText {
    fn name(&self) -> &'static str {
        "plain"
    }

    fn max_heading_level(&self) -> u8 {
        3
    }

    fn heading(&self, level: u8, content: &str) -> String {
        // Content carries the leading space inserted by its own emit buffer,
        // so one column is dropped from the measured width.
        let divider_len = content
            .split('\n')
            .map(|line| line.chars().count().saturating_sub(1))
            .max()
            .unwrap_or(0);
        let divider = if level == 1 { "*" } else { "-" }.repeat(divider_len);

        if level >= 3 {
            format!("\n\n{content}\n{divider}\n\n")
        } else {
            format!("\n\n{divider}\n{content}\n{divider}\n\n")
        }
    }

    fn strong(&self, content: &str) -> String {
        format!("*{content}*")
    }

    fn wraps_link_text(&self) -> bool {
        false
    }

    fn link(&self, _text: &str, target: &str) -> String {
        format!("( {target} )")
    }
}

/// Markdown: ATX headings, `**strong**`, `[text](target)`.
#[derive(Debug, Clone, Copy, Default)]
pub struct Markdown;

impl RenderStrategy for Markdown {
    fn name(&self) -> &'static str {
        "markdown"
    }

    fn max_heading_level(&self) -> u8 {
        6
    }

    fn heading(&self, level: u8, content: &str) -> String {
        let text = content
            .split('\n')
            .map(str::trim)
            .filter(|line| !line.is_empty())
            .collect::<Vec<_>>()
            .join(" ");
        format!("\n\n{} {}\n\n", "#".repeat(level as usize), text)
    }

    fn strong(&self, content: &str) -> String {
        format!("**{content}**")
    }

    fn wraps_link_text(&self) -> bool {
        true
    }

    fn link(&self, text: &str, target: &str) -> String {
        if text.is_empty() {
            format!("<{target}>")
        } else {
            format!("[{text}]({target})")
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_plain_heading_dividers() {
        assert_eq!(PlainText.heading(1, " Test"), "\n\n****\n Test\n****\n\n");
        assert_eq!(PlainText.heading(2, " Test"), "\n\n----\n Test\n----\n\n");
        assert_eq!(PlainText.heading(3, " Test"), "\n\n Test\n----\n\n");
    }

    #[test]
    fn test_plain_divider_uses_longest_line() {
        let block = PlainText.heading(1, " Test line 1\nTest 2");
        assert!(block.starts_with("\n\n***********\n"));
    }

    #[test]
    fn test_markdown_heading() {
        assert_eq!(Markdown.heading(2, " Title"), "\n\n## Title\n\n");
        assert_eq!(Markdown.heading(1, " Line 1\nLine 2"), "\n\n# Line 1 Line 2\n\n");
        assert_eq!(Markdown.heading(3, "  "), "\n\n### \n\n");
    }

    #[test]
    fn test_links() {
        assert_eq!(PlainText.link("Link", "http://example.com/"), "( http://example.com/ )");
        assert_eq!(Markdown.link("Link", "http://example.com/"), "[Link](http://example.com/)");
        assert_eq!(Markdown.link("", "http://example.com/"), "<http://example.com/>");
    }

    #[test]
    fn test_strong() {
        assert_eq!(PlainText.strong("bold"), "*bold*");
        assert_eq!(Markdown.strong("bold"), "**bold**");
        assert_eq!(PlainText.strong(""), "**");
    }
}
