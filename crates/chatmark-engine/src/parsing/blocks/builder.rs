use crate::parsing::MessageNode;
use crate::parsing::inline::{InlineNode, parse_inline};

use super::markers::{BulletMarker, OrderedMarker};

/// State machine over the lines of a list-classified block.
///
/// Contiguous same-kind marker lines accumulate into one list node. A
/// marker of the other kind flushes the open buffer and starts a fresh one,
/// so `- a\n1. b\n- c` yields three list nodes. Non-marker lines flush the
/// buffer and come out as standalone paragraphs, letting free text
/// interleave with list items instead of being dropped or merged.
pub struct ListBuilder {
    items: Vec<Vec<InlineNode>>,
    ordered: Option<bool>,
    out: Vec<MessageNode>,
}

impl ListBuilder {
    pub fn new() -> Self {
        Self {
            items: vec![],
            ordered: None,
            out: vec![],
        }
    }

    /// Feeds one line of the block. Blank lines are skipped.
    pub fn push(&mut self, line: &str) {
        let trimmed = line.trim();
        if trimmed.is_empty() {
            return;
        }

        if let Some(item) = BulletMarker::capture(trimmed) {
            self.open(false);
            self.items.push(parse_inline(item));
        } else if let Some(item) = OrderedMarker::capture(trimmed) {
            self.open(true);
            self.items.push(parse_inline(item));
        } else {
            self.flush_list();
            self.out.push(MessageNode::Paragraph(parse_inline(trimmed)));
        }
    }

    /// EOF flush.
    pub fn finish(mut self) -> Vec<MessageNode> {
        self.flush_list();
        self.out
    }

    /// Makes the open buffer accept items of the given kind, flushing a
    /// buffer of the other kind first.
    fn open(&mut self, ordered: bool) {
        if self.ordered != Some(ordered) {
            self.flush_list();
            self.ordered = Some(ordered);
        }
    }

    fn flush_list(&mut self) {
        let ordered = self.ordered.take().unwrap_or(false);
        if self.items.is_empty() {
            return;
        }
        self.out.push(MessageNode::List {
            ordered,
            items: std::mem::take(&mut self.items),
        });
    }
}

impl Default for ListBuilder {
    fn default() -> Self {
        Self::new()
    }
}
