use super::rules::registry;
use super::types::InlineNode;

/// A raw rule match over one prose string, before overlap resolution.
struct Candidate {
    start: usize,
    end: usize,
    priority: i32,
    node: InlineNode,
}

/// Parses a prose string into an ordered sequence of inline nodes.
///
/// Every registry rule is run globally and each raw match becomes a
/// candidate with its `[start, end)` byte span and priority. Candidates
/// are sorted by start ascending, then priority descending (the sort is
/// stable, so a full tie keeps registration order), then accepted greedily
/// when their span intersects nothing already accepted. Unmatched gaps are
/// preserved as `Text` nodes.
///
/// This is interval scheduling by priority, not maximum-count selection:
/// one high-priority span can displace several smaller candidates inside
/// it, which is exactly what keeps `**bold *and* more**` a single bold
/// node.
pub fn parse_inline(text: &str) -> Vec<InlineNode> {
    parse_inline_with_depth(text, 0)
}

/// `depth` counts how many heading re-parses led here; heading builders
/// stop recursing past their cap.
pub(super) fn parse_inline_with_depth(text: &str, depth: u8) -> Vec<InlineNode> {
    let mut candidates = vec![];
    for rule in registry() {
        for caps in rule.regex.captures_iter(text) {
            let Some(whole) = caps.get(0) else { continue };
            candidates.push(Candidate {
                start: whole.start(),
                end: whole.end(),
                priority: rule.priority,
                node: (rule.build)(&caps, depth),
            });
        }
    }

    candidates.sort_by(|a, b| a.start.cmp(&b.start).then(b.priority.cmp(&a.priority)));

    let mut accepted: Vec<Candidate> = vec![];
    for candidate in candidates {
        let intersects = accepted
            .iter()
            .any(|a| candidate.start < a.end && candidate.end > a.start);
        if !intersects {
            accepted.push(candidate);
        }
    }
    accepted.sort_by_key(|c| c.start);

    let mut out = vec![];
    let mut cursor = 0;
    for candidate in accepted {
        if candidate.start > cursor {
            out.push(InlineNode::Text(text[cursor..candidate.start].to_string()));
        }
        out.push(candidate.node);
        cursor = candidate.end;
    }
    if cursor < text.len() {
        out.push(InlineNode::Text(text[cursor..].to_string()));
    }

    out
}
