//! # HTML Node Model
//!
//! A minimal, immutable HTML tree produced by the document assembler.
//!
//! A node is either a **leaf** (optional tag + text value) or a **container**
//! (tag + ordered children). Structural rules are checked when a node is
//! built, so a finished tree always serializes.

pub mod node;

pub use node::{Attributes, HtmlError, HtmlNode, NodeBody};
