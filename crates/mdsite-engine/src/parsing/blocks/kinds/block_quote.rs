/// Blockquote block type with owned prefix constant.
pub struct BlockQuote;

impl BlockQuote {
    /// The blockquote prefix character.
    pub const PREFIX: char = '>';

    /// True when every line carries the `>` prefix.
    pub fn is_quote(block: &str) -> bool {
        block.split('\n').all(|line| line.starts_with(Self::PREFIX))
    }

    /// Strips `> ` (or a bare `>`) from one line.
    pub fn strip_prefix(line: &str) -> &str {
        line.strip_prefix("> ")
            .or_else(|| line.strip_prefix(Self::PREFIX))
            .unwrap_or(line)
    }

    /// Quote content with every line's prefix removed, rejoined with `\n`.
    pub fn content(block: &str) -> String {
        block
            .split('\n')
            .map(Self::strip_prefix)
            .collect::<Vec<_>>()
            .join("\n")
    }
}
