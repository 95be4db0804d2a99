//! # Block Kinds
//!
//! Each block type owns its syntax markers and the helpers that recognise
//! and strip them. The classifier and assembler call these; they never
//! hardcode `#`, `>` or fence strings themselves.

pub mod block_quote;
pub mod code_fence;
pub mod heading;
pub mod list;

pub use block_quote::BlockQuote;
pub use code_fence::CodeFence;
pub use heading::Heading;
pub use list::{OrderedList, UnorderedList};
