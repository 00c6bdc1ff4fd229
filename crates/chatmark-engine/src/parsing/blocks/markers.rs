use std::sync::OnceLock;

use regex::Regex;

/// Bullet list marker: `*`, `-` or `+` followed by whitespace.
pub struct BulletMarker;

impl BulletMarker {
    /// Returns the item text if `line` (already trimmed) starts with a
    /// bullet marker.
    pub fn capture(line: &str) -> Option<&str> {
        static RE: OnceLock<Regex> = OnceLock::new();
        let re = RE.get_or_init(|| Regex::new(r"^[*+-]\s+(.+)$").expect("invalid bullet pattern"));
        re.captures(line).and_then(|c| c.get(1)).map(|m| m.as_str())
    }
}

/// Ordered list marker: digits, a dot, then whitespace.
pub struct OrderedMarker;

impl OrderedMarker {
    /// Returns the item text if `line` (already trimmed) starts with an
    /// ordered marker.
    pub fn capture(line: &str) -> Option<&str> {
        static RE: OnceLock<Regex> = OnceLock::new();
        let re =
            RE.get_or_init(|| Regex::new(r"^\d+\.\s+(.+)$").expect("invalid ordered pattern"));
        re.captures(line).and_then(|c| c.get(1)).map(|m| m.as_str())
    }
}
