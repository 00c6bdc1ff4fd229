//! # Block Segmentation
//!
//! Two-phase block handling for one text segment:
//!
//! 1. **Classification** (`classify`): the segment is split on blank-line
//!    runs and each block is classified as list or prose from local facts
//! 2. **List construction** (`builder`): a `ListBuilder` folds over a list
//!    block's lines, grouping contiguous same-kind items and demoting
//!    non-marker lines to standalone paragraphs
//!
//! ## Modules
//!
//! - **`types`**: `BlockClass` and `ParagraphBlock`
//! - **`markers`**: bullet and ordered marker syntax (`BulletMarker`, `OrderedMarker`)
//! - **`classify`**: `split_blocks` blank-line segmentation and classification
//! - **`builder`**: `ListBuilder` state machine
//!
//! ## Key Invariants
//!
//! - Block boundaries are never re-merged; blocks process independently
//! - A kind transition inside one block flushes exactly one list node and
//!   opens exactly one fresh buffer; no items are lost or duplicated

pub mod builder;
pub mod classify;
pub mod markers;
pub mod types;

pub use builder::ListBuilder;
pub use classify::split_blocks;
pub use types::{BlockClass, ParagraphBlock};
