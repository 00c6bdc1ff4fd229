//! # Inline Matching
//!
//! Registry-driven inline parsing with priority-based overlap resolution.
//!
//! ## Architecture
//!
//! A fixed, ordered registry of rule descriptors (`rules`) is run globally
//! over one prose string; every raw match becomes a candidate tagged with
//! its span and priority. The matcher (`matcher`) sorts candidates by
//! start, then priority descending, and greedily accepts spans that don't
//! intersect anything already accepted. Gaps become `Text` nodes.
//!
//! ## Modules
//!
//! - **`types`**: `InlineNode` enum
//! - **`rules`**: the rule registry (patterns, priorities, node builders)
//! - **`matcher`**: `parse_inline()` candidate collection and resolution
//!
//! ## Selective Recursion
//!
//! Heading content runs back through `parse_inline`, so a heading can hold
//! bold text. Bold, italic, code and link captures stay literal: in
//! `**a *b* c**` the inner stars render as-is. That asymmetry matches the
//! shipped renderer and is kept deliberately.

pub mod matcher;
pub mod rules;
pub mod types;

pub use matcher::parse_inline;
pub use types::InlineNode;
