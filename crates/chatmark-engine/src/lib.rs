pub mod parsing;

// Re-export key types for easier usage
pub use parsing::{MessageNode, parse_message};
pub use parsing::fence::{Segment, extract_segments};
pub use parsing::inline::InlineNode;
