use std::sync::OnceLock;

use regex::{Captures, Regex};

use super::matcher::parse_inline_with_depth;
use super::types::InlineNode;

/// One immutable rule descriptor in the registry.
///
/// Registration order matters: when two candidates tie on both start and
/// priority, the earlier-registered rule wins. Builders receive the
/// current nesting depth so recursive rules can bound themselves.
pub struct InlineRule {
    pub pattern: &'static str,
    pub priority: i32,
    pub build: fn(&Captures, u8) -> InlineNode,
}

/// Headings consume a full line, so they sit above every in-line style.
const HEADING_PRIORITY: i32 = 100;
/// Bold must beat italic, or `**x**` reads as nested italics.
const BOLD_PRIORITY: i32 = 50;
/// Code and links rank equal, above italic.
const CODE_PRIORITY: i32 = 40;
const LINK_PRIORITY: i32 = 40;
const ITALIC_PRIORITY: i32 = 30;

/// Bounds heading re-parse recursion; deeper content stays literal text,
/// so pathological `# # # …` chains cannot exhaust the stack.
const MAX_HEADING_DEPTH: u8 = 8;

/// The fixed rule registry. Adding a rule means adding a descriptor here;
/// the conflict-resolution pass in `matcher` is independent of the count.
const RULES: &[InlineRule] = &[
    InlineRule {
        pattern: r"(?m)^###\s+(.+)$",
        priority: HEADING_PRIORITY,
        build: build_h3,
    },
    InlineRule {
        pattern: r"(?m)^##\s+(.+)$",
        priority: HEADING_PRIORITY,
        build: build_h2,
    },
    InlineRule {
        pattern: r"(?m)^#\s+(.+)$",
        priority: HEADING_PRIORITY,
        build: build_h1,
    },
    InlineRule {
        pattern: r"\*\*(.+?)\*\*",
        priority: BOLD_PRIORITY,
        build: build_bold,
    },
    InlineRule {
        pattern: r"\*(.+?)\*",
        priority: ITALIC_PRIORITY,
        build: build_italic,
    },
    InlineRule {
        pattern: r"`([^`]+)`",
        priority: CODE_PRIORITY,
        build: build_code,
    },
    InlineRule {
        pattern: r"\[([^\]]+)\]\(([^)]+)\)",
        priority: LINK_PRIORITY,
        build: build_link,
    },
];

/// A registry rule with its pattern compiled.
pub(super) struct CompiledRule {
    pub regex: Regex,
    pub priority: i32,
    pub build: fn(&Captures, u8) -> InlineNode,
}

/// Compiles the registry once; parsing is called per streamed chunk.
pub(super) fn registry() -> &'static [CompiledRule] {
    static REGISTRY: OnceLock<Vec<CompiledRule>> = OnceLock::new();
    REGISTRY.get_or_init(|| {
        RULES
            .iter()
            .map(|rule| CompiledRule {
                regex: Regex::new(rule.pattern).expect("invalid inline pattern"),
                priority: rule.priority,
                build: rule.build,
            })
            .collect()
    })
}

/// Captured group text, or empty when the group produced nothing.
fn group(caps: &Captures, index: usize) -> String {
    caps.get(index)
        .map(|m| m.as_str())
        .unwrap_or_default()
        .to_string()
}

fn heading(level: u8, caps: &Captures, depth: u8) -> InlineNode {
    let content = group(caps, 1);
    let children = if depth < MAX_HEADING_DEPTH {
        parse_inline_with_depth(&content, depth + 1)
    } else {
        vec![InlineNode::Text(content)]
    };
    InlineNode::Heading { level, children }
}

fn build_h1(caps: &Captures, depth: u8) -> InlineNode {
    heading(1, caps, depth)
}

fn build_h2(caps: &Captures, depth: u8) -> InlineNode {
    heading(2, caps, depth)
}

fn build_h3(caps: &Captures, depth: u8) -> InlineNode {
    heading(3, caps, depth)
}

fn build_bold(caps: &Captures, _depth: u8) -> InlineNode {
    InlineNode::Bold(group(caps, 1))
}

fn build_italic(caps: &Captures, _depth: u8) -> InlineNode {
    InlineNode::Italic(group(caps, 1))
}

fn build_code(caps: &Captures, _depth: u8) -> InlineNode {
    InlineNode::Code(group(caps, 1))
}

fn build_link(caps: &Captures, _depth: u8) -> InlineNode {
    InlineNode::Link {
        text: group(caps, 1),
        href: group(caps, 2),
    }
}
