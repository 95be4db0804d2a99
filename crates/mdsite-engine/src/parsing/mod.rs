//! # Markdown Parsing
//!
//! Block segmentation and classification ([`blocks`]), inline tokenization
//! ([`inline`]), assembly into an [`HtmlNode`](crate::html::HtmlNode) tree
//! ([`assemble`]) and page title extraction ([`title`]).
//!
//! ```text
//! document → segment → classify → assemble ─┬→ HtmlNode tree
//!                                  (per block) └→ tokenize → span_to_node
//! ```
//!
//! Everything here is pure: no I/O, no shared state.

pub mod assemble;
pub mod blocks;
pub mod inline;
pub mod title;

pub use assemble::markdown_to_html_node;
pub use title::{TitleError, extract_title};
