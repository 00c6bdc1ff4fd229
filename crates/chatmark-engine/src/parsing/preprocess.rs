use std::sync::OnceLock;

use regex::{Captures, Regex};

/// Replacement glyph for arithmetic `*`.
const MULTIPLICATION_SIGN: char = '×';

fn multiplication_regex() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| {
        // left side: digits, separators, currency symbols, optional "= rhs"
        // right side: digits and separators only
        // Horizontal whitespace only: the rewrite runs before block
        // segmentation and must never consume a newline, or a numeric
        // bullet line after a numeric-tailed line would merge into it.
        Regex::new(r"([\d.,Rp$€£¥]+(?:[ \t]*=[ \t]*[\d.,Rp$€£¥]+)?)[ \t]*\*[ \t]*([\d.,]+)")
            .expect("invalid multiplication pattern")
    })
}

fn numeric_left_regex() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| Regex::new(r"^[\d.,Rp$€£¥=\s]+$").expect("invalid left guard pattern"))
}

fn numeric_right_regex() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| Regex::new(r"^[\d.,]+$").expect("invalid right guard pattern"))
}

/// Rewrites multiplication-style `*` between numeric or currency tokens to
/// `×` so the inline matcher cannot read it as emphasis markup.
///
/// Examples that rewrite: `100 * 2`, `Rp40.000.000 * 1.03`,
/// `= Rp40.000.000 * 1.03`. Both captured sides are re-validated before
/// rewriting; anything else is left untouched. Applied to text segments
/// only, never to code.
pub fn disambiguate_multiplication(text: &str) -> String {
    multiplication_regex()
        .replace_all(text, |caps: &Captures| {
            let left = caps.get(1).map(|m| m.as_str()).unwrap_or_default();
            let right = caps.get(2).map(|m| m.as_str()).unwrap_or_default();

            if numeric_left_regex().is_match(left.trim())
                && numeric_right_regex().is_match(right.trim())
            {
                format!("{left} {MULTIPLICATION_SIGN} {right}")
            } else {
                caps.get(0)
                    .map(|m| m.as_str())
                    .unwrap_or_default()
                    .to_string()
            }
        })
        .into_owned()
}
