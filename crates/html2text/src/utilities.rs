//! Text normalization helpers shared by the renderer.

use once_cell::sync::Lazy;
use regex::Regex;

static SPACING_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"[ \r\n\t]+").expect("spacing pattern is valid"));
static NEWLINES_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"\n\n+").expect("newline pattern is valid"));

/// Collapse runs of space, tab, CR and LF into a single space.
///
/// Other whitespace (such as non-breaking spaces) is left alone.
pub fn collapse_whitespace(text: &str) -> String {
    SPACING_RE.replace_all(text, " ").into_owned()
}

/// Canonicalize a link target: trim it and drop a `mailto:` scheme.
///
/// No URL validation happens; placeholders and relative paths pass through.
pub fn normalize_href(href: &str) -> &str {
    let href = href.trim();
    href.strip_prefix("mailto:").unwrap_or(href)
}

/// Final cleanup of a rendered buffer.
///
/// Removes spaces right after line breaks, collapses runs of blank lines to
/// one and trims the whole result.
pub fn assemble(output: &str) -> String {
    let output = output.replace("\n ", "\n");
    NEWLINES_RE.replace_all(&output, "\n\n").trim().to_string()
}
