//! Line wrapping for quoted regions.

/// Visible width that quoted text is wrapped to, not counting the `> ` prefix
pub const MAX_LINE_LEN: usize = 74;

/// Break `data` into lines that fit [`MAX_LINE_LEN`], given that `existing`
/// characters are already on the current line.
///
/// Every line except the last ends with `\n`. Breaks happen at the last
/// whitespace before the limit, or at the first one after it when a word is
/// too long; the whitespace at a break is consumed.
pub fn break_long_lines(data: &str, existing: usize) -> Vec<String> {
    let chars: Vec<char> = data.chars().collect();
    let mut rest: &[char] = &chars;
    let mut existing = existing;
    let mut lines = Vec::new();

    if existing >= MAX_LINE_LEN {
        lines.push("\n".to_string());
        existing = 0;
    }

    while rest.len() + existing > MAX_LINE_LEN {
        let boundary = MAX_LINE_LEN - existing;
        let split = match rest[..=boundary].iter().rposition(|c| c.is_whitespace()) {
            Some(i) => i,
            None => rest[boundary..]
                .iter()
                .position(|c| c.is_whitespace())
                .map_or(rest.len(), |i| boundary + i),
        };

        let mut line: String = rest[..split].iter().collect();
        line.push('\n');
        lines.push(line);

        let skipped = rest[split..].iter().take_while(|c| c.is_whitespace()).count();
        rest = &rest[split + skipped..];
        existing = 0;
    }

    if !rest.is_empty() {
        lines.push(rest.iter().collect());
    }

    lines
}
