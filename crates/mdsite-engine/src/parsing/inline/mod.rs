//! # Inline Parsing
//!
//! Multi-pass inline tokenization of block text into [`TextSpan`]s.
//!
//! ## Architecture
//!
//! Inline parsing runs over the text of inline-eligible blocks (paragraphs,
//! headings, quotes, list items). It starts from a single plain span and
//! applies one pass per construct, each returning a fresh span list:
//!
//! 1. `**` bold
//! 2. `_` italic
//! 3. `` ` `` code
//! 4. `![alt](url)` images
//! 5. `[text](url)` links
//!
//! A pass only rewrites spans that are still `Plain`, so earlier passes win.
//! Emphasis does not nest.
//!
//! ## Modules
//!
//! - **`types`**: `TextSpan` and `SpanKind`
//! - **`kinds`**: Inline-specific types with owned delimiters and patterns
//! - **`parser`**: `tokenize()` and the individual passes
//! - **`convert`**: `span_to_node()` / `text_to_children()` into the HTML model

pub mod convert;
pub mod kinds;
pub mod parser;
pub mod types;

pub use convert::{span_to_node, text_to_children};
pub use parser::{extract_markdown_images, extract_markdown_links, tokenize};
pub use types::{SpanKind, TextSpan};
