/// Separator between blocks: one blank line.
pub const BLOCK_SEPARATOR: &str = "\n\n";

/// Splits `document` into trimmed, non-empty blocks in document order.
pub fn segment(document: &str) -> Vec<&str> {
    document
        .split(BLOCK_SEPARATOR)
        .map(str::trim)
        .filter(|block| !block.is_empty())
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn splits_on_blank_lines() {
        let md = "
This is **bolded** paragraph

This is another paragraph with _italic_ text and `code` here
This is the same paragraph on a new line

- This is a list
- with items
";
        assert_eq!(
            segment(md),
            vec![
                "This is **bolded** paragraph",
                "This is another paragraph with _italic_ text and `code` here\nThis is the same paragraph on a new line",
                "- This is a list\n- with items",
            ]
        );
    }

    #[test]
    fn excess_blank_lines_are_dropped() {
        let md = "# Heading\n\n\n\n\nParagraph\n\n   \n\n- item";
        assert_eq!(segment(md), vec!["# Heading", "Paragraph", "- item"]);
    }

    #[test]
    fn surrounding_whitespace_is_trimmed() {
        assert_eq!(segment("   first  \n\n\tsecond\t"), vec!["first", "second"]);
    }

    #[test]
    fn empty_document_has_no_blocks() {
        assert!(segment("").is_empty());
        assert!(segment("\n\n\n").is_empty());
    }
}
