//! # Message Parsing
//!
//! Turns streamed chat text into a flat sequence of renderable nodes.
//!
//! ## Parsing Phases
//!
//! 1. **Fence extraction** (`fence`): raw text is split into alternating
//!    text and fenced-code segments; code content is never touched again
//! 2. **Preprocessing** (`preprocess`): arithmetic `*` between numeric or
//!    currency tokens is rewritten to `×` so it cannot read as emphasis
//! 3. **Block segmentation** (`blocks`): each text segment is split on
//!    blank lines and classified as list or prose
//! 4. **Inline matching** (`inline`): prose runs through an ordered rule
//!    registry with priority-based overlap resolution
//!
//! ## Key Invariants
//!
//! - Parsing is a pure function of the input string: no shared state, no
//!   I/O, no panics for any input
//! - Fenced code is a raw zone: no preprocessing or inline parsing inside
//! - Accepted inline matches never overlap

pub mod blocks;
pub mod fence;
pub mod inline;
pub mod preprocess;

use serde::Serialize;

use blocks::{BlockClass, ListBuilder, split_blocks};
use fence::{Segment, extract_segments};
use inline::{InlineNode, parse_inline};

/// A renderable block-level node, consumed in order by the UI layer.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub enum MessageNode {
    /// A run of prose (may contain headings, which consume full lines).
    Paragraph(Vec<InlineNode>),
    /// A bullet or numbered list; all items share the same kind.
    List {
        ordered: bool,
        items: Vec<Vec<InlineNode>>,
    },
    /// A fenced code block, displayed verbatim with a language label.
    CodeBlock { language: String, code: String },
}

/// Parses an accumulated chat message into renderable nodes.
///
/// Callers re-invoke this on the full text so far after every streamed
/// chunk; there is no incremental state to carry between calls. Identical
/// input always yields a structurally identical node sequence.
///
/// Malformed markup (unterminated fences, unbalanced delimiters, lone `*`)
/// never fails: whatever doesn't match a construct is preserved as text.
pub fn parse_message(text: &str) -> Vec<MessageNode> {
    let mut out = vec![];

    for segment in extract_segments(text) {
        match segment {
            Segment::Code { language, code } => {
                out.push(MessageNode::CodeBlock { language, code });
            }
            Segment::Text(raw) => {
                let prepared = preprocess::disambiguate_multiplication(&raw);
                for block in split_blocks(&prepared) {
                    match block.class {
                        BlockClass::List => {
                            let mut builder = ListBuilder::new();
                            for line in block.text.lines() {
                                builder.push(line);
                            }
                            out.extend(builder.finish());
                        }
                        BlockClass::Prose => {
                            out.push(MessageNode::Paragraph(parse_inline(&block.text)));
                        }
                    }
                }
            }
        }
    }

    // Whitespace-only input still renders as-is rather than disappearing.
    if out.is_empty() && !text.is_empty() {
        out.push(MessageNode::Paragraph(vec![InlineNode::Text(
            text.to_string(),
        )]));
    }

    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn empty_input_yields_no_nodes() {
        assert_eq!(parse_message(""), vec![]);
    }

    #[test]
    fn whitespace_only_input_falls_back_to_raw_text() {
        let nodes = parse_message("   \n  ");
        assert_eq!(
            nodes,
            vec![MessageNode::Paragraph(vec![InlineNode::Text(
                "   \n  ".to_string()
            )])]
        );
    }

    #[test]
    fn prose_and_code_keep_original_order() {
        let nodes = parse_message("intro\n\n```rust\nfn main() {}\n```\n\noutro");
        assert_eq!(nodes.len(), 3);
        assert!(matches!(nodes[0], MessageNode::Paragraph(_)));
        assert!(matches!(nodes[1], MessageNode::CodeBlock { .. }));
        assert!(matches!(nodes[2], MessageNode::Paragraph(_)));
    }

    #[test]
    fn code_segments_skip_preprocessing_and_inline_parsing() {
        let nodes = parse_message("```\n100 * 2 and **bold**\n```");
        assert_eq!(
            nodes,
            vec![MessageNode::CodeBlock {
                language: String::new(),
                code: "100 * 2 and **bold**\n".to_string(),
            }]
        );
    }

    #[test]
    fn list_block_inside_message_becomes_list_node() {
        let nodes = parse_message("intro:\n\n- one\n- two");
        assert_eq!(nodes.len(), 2);
        assert_eq!(
            nodes[1],
            MessageNode::List {
                ordered: false,
                items: vec![
                    vec![InlineNode::Text("one".to_string())],
                    vec![InlineNode::Text("two".to_string())],
                ],
            }
        );
    }

    #[test]
    fn numeric_bullet_after_numeric_line_survives_preprocessing() {
        let nodes = parse_message("Subtotal 5\n* 3 units");
        assert_eq!(
            nodes,
            vec![
                MessageNode::Paragraph(vec![InlineNode::Text("Subtotal 5".to_string())]),
                MessageNode::List {
                    ordered: false,
                    items: vec![vec![InlineNode::Text("3 units".to_string())]],
                },
            ]
        );
    }

    #[test]
    fn heading_line_is_parsed_inside_its_paragraph() {
        let nodes = parse_message("## Title\nbody");
        assert_eq!(
            nodes,
            vec![MessageNode::Paragraph(vec![
                InlineNode::Heading {
                    level: 2,
                    children: vec![InlineNode::Text("Title".to_string())],
                },
                InlineNode::Text("\nbody".to_string()),
            ])]
        );
    }
}
