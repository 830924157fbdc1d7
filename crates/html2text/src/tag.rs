//! Classification of element tags into the kinds the renderer handles.

/// Tag kinds with dedicated rendering. Everything else is [`Tag::Unknown`]
/// and rendered as a transparent passthrough.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Tag {
    LineBreak,
    /// `h1`..`h6`
    Heading(u8),
    Blockquote,
    Division,
    ListItem,
    /// `b` and `strong`
    Strong,
    Anchor,
    Image,
    Paragraph,
    UnorderedList,
    Table,
    TableFooter,
    TableHeaderCell,
    TableRow,
    TableDataCell,
    Preformatted,
    /// `style`, `script` and `head`: never rendered
    Hidden,
    Unknown,
}

impl Tag {
    /// Classify a tag name (case-insensitive)
    pub fn from_name(name: &str) -> Self {
        match name.to_ascii_lowercase().as_str() {
            "br" => Tag::LineBreak,
            "h1" => Tag::Heading(1),
            "h2" => Tag::Heading(2),
            "h3" => Tag::Heading(3),
            "h4" => Tag::Heading(4),
            "h5" => Tag::Heading(5),
            "h6" => Tag::Heading(6),
            "blockquote" => Tag::Blockquote,
            "div" => Tag::Division,
            "li" => Tag::ListItem,
            "b" | "strong" => Tag::Strong,
            "a" => Tag::Anchor,
            "img" => Tag::Image,
            "p" => Tag::Paragraph,
            "ul" => Tag::UnorderedList,
            "table" => Tag::Table,
            "tfoot" => Tag::TableFooter,
            "th" => Tag::TableHeaderCell,
            "tr" => Tag::TableRow,
            "td" => Tag::TableDataCell,
            "pre" => Tag::Preformatted,
            "style" | "script" | "head" => Tag::Hidden,
            _ => Tag::Unknown,
        }
    }
}
