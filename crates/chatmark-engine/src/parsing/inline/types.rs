use serde::Serialize;

/// A parsed inline node.
///
/// Only `Heading` carries children: its content is re-parsed so headings
/// can hold nested styles. The other styled variants keep their captured
/// text literal.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub enum InlineNode {
    /// Plain text that isn't part of any matched construct.
    Text(String),
    /// `**bold**` content.
    Bold(String),
    /// `*italic*` content.
    Italic(String),
    /// `` `code` `` content, verbatim.
    Code(String),
    /// `[text](href)` link.
    Link { text: String, href: String },
    /// A `#`, `##` or `###` heading consuming a full line.
    Heading { level: u8, children: Vec<InlineNode> },
}
