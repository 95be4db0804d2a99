/// The structural type of a block, derived from its leading markers.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BlockType {
    /// Default when no other block opener matches.
    Paragraph,
    /// ATX heading (`#` through `######`).
    Heading {
        /// Number of leading `#` characters, 1 through 6.
        level: u8,
    },
    /// A block fenced with ``` on both ends.
    Code,
    /// Every line starts with `>`.
    Quote,
    /// Every line starts with `- `.
    UnorderedList,
    /// Lines numbered `1. `, `2. `, ... in sequence.
    OrderedList,
}
