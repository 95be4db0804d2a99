/// Fenced code block type with owned fence constant.
///
/// Code blocks are raw zones: their content is never inline-parsed.
pub struct CodeFence;

impl CodeFence {
    pub const FENCE: &'static str = "```";

    /// A block is fenced when it both starts and ends with a fence.
    ///
    /// A lone "``````" satisfies both checks and counts as an empty block.
    pub fn is_fenced(block: &str) -> bool {
        block.starts_with(Self::FENCE) && block.ends_with(Self::FENCE)
    }

    /// Lines strictly between the opening and closing fence lines, each
    /// terminated by `\n`. Empty when there is nothing between them.
    pub fn content(block: &str) -> String {
        let lines: Vec<&str> = block.split('\n').collect();
        if lines.len() <= 2 {
            return String::new();
        }
        let mut content = lines[1..lines.len() - 1].join("\n");
        content.push('\n');
        content
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn detect_fenced_block() {
        assert!(CodeFence::is_fenced("```\ncode\n```"));
        assert!(CodeFence::is_fenced("```rust\nfn main() {}\n```"));
    }

    #[test]
    fn six_backticks_is_an_empty_code_block() {
        assert!(CodeFence::is_fenced("``````"));
        assert_eq!(CodeFence::content("``````"), "");
    }

    #[test]
    fn unterminated_fence_is_not_code() {
        assert!(!CodeFence::is_fenced("```\ncode without end"));
    }

    #[test]
    fn content_drops_fence_lines() {
        assert_eq!(
            CodeFence::content("```python\nprint(1)\nprint(2)\n```"),
            "print(1)\nprint(2)\n"
        );
    }

    #[test]
    fn content_of_fence_pair_is_empty() {
        assert_eq!(CodeFence::content("```\n```"), "");
    }
}
