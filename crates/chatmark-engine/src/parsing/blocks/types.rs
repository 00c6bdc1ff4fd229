/// Classification of one paragraph-like block.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BlockClass {
    /// At least one line carries a bullet or ordered marker.
    List,
    /// Everything else; goes straight to the inline matcher.
    Prose,
}

/// A blank-line-delimited block of a text segment.
///
/// Owned transiently during segmentation; never mutated after
/// classification.
#[derive(Debug, Clone, PartialEq)]
pub struct ParagraphBlock {
    pub text: String,
    pub class: BlockClass,
}
