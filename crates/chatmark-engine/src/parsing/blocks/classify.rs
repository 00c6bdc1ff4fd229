use std::sync::OnceLock;

use regex::Regex;

use super::markers::{BulletMarker, OrderedMarker};
use super::types::{BlockClass, ParagraphBlock};

fn blank_line_regex() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| Regex::new(r"\n\s*\n").expect("invalid blank-line pattern"))
}

/// Splits a text segment on one-or-more blank lines into classified blocks.
///
/// Whitespace-only blocks are dropped. A block is `List` if any of its
/// trimmed lines starts with a bullet or ordered marker, else `Prose`.
pub fn split_blocks(text: &str) -> Vec<ParagraphBlock> {
    blank_line_regex()
        .split(text)
        .filter(|block| !block.trim().is_empty())
        .map(|block| ParagraphBlock {
            class: classify_block(block),
            text: block.to_string(),
        })
        .collect()
}

fn classify_block(block: &str) -> BlockClass {
    let is_list = block
        .lines()
        .map(str::trim)
        .filter(|line| !line.is_empty())
        .any(|line| BulletMarker::capture(line).is_some() || OrderedMarker::capture(line).is_some());

    if is_list {
        BlockClass::List
    } else {
        BlockClass::Prose
    }
}
