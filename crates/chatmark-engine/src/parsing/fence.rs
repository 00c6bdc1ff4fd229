use std::sync::OnceLock;

use regex::Regex;
use serde::Serialize;

/// A contiguous span of input classified as code or non-code text.
///
/// Concatenating segment contents in order reconstructs the original text
/// with fence markers removed. Zero-length segments are never emitted.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub enum Segment {
    /// Plain text between fenced blocks.
    Text(String),
    /// A fenced code block. `language` is empty when the fence had no tag.
    Code { language: String, code: String },
}

fn fence_regex() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    // Non-greedy body: the first closing fence terminates the block. An
    // unterminated fence fails to match and stays plain text.
    RE.get_or_init(|| Regex::new(r"(?s)```(\w+)?\n(.*?)```").expect("invalid fence pattern"))
}

/// Splits raw text into an ordered list of text and code segments.
///
/// A fence is three backticks, optionally followed immediately by a
/// language tag, then a newline; the block ends at the next triple
/// backtick. Fences are extracted left to right and independently.
pub fn extract_segments(text: &str) -> Vec<Segment> {
    let mut segments = vec![];
    let mut cursor = 0;

    for caps in fence_regex().captures_iter(text) {
        let Some(whole) = caps.get(0) else { continue };
        if whole.start() > cursor {
            segments.push(Segment::Text(text[cursor..whole.start()].to_string()));
        }
        segments.push(Segment::Code {
            language: caps
                .get(1)
                .map(|m| m.as_str())
                .unwrap_or_default()
                .to_string(),
            code: caps
                .get(2)
                .map(|m| m.as_str())
                .unwrap_or_default()
                .to_string(),
        });
        cursor = whole.end();
    }

    if cursor < text.len() {
        segments.push(Segment::Text(text[cursor..].to_string()));
    }

    segments
}
