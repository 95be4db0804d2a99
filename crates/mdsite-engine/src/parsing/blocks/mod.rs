//! # Block Parsing
//!
//! Splits a document into blank-line separated blocks and classifies each
//! one by its leading syntax markers.
//!
//! ## Modules
//!
//! - **`segment`**: `segment()` turns a document into trimmed block slices
//! - **`types`**: `BlockType` enum
//! - **`kinds`**: Block-specific types with owned delimiters (Heading, CodeFence,
//!   BlockQuote, UnorderedList, OrderedList)
//! - **`classify`**: `classify()` applies the block openers in precedence order
//!
//! ## Key Invariants
//!
//! - Blocks borrow from the document; nothing is copied until assembly
//! - Code blocks are raw zones: no inline parsing inside
//! - Anything that fails a stricter rule falls back to `Paragraph`

pub mod classify;
pub mod kinds;
pub mod segment;
pub mod types;

pub use classify::classify;
pub use segment::segment;
pub use types::BlockType;
