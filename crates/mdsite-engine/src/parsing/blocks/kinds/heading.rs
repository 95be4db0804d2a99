/// ATX heading block type with owned marker constants.
pub struct Heading;

impl Heading {
    /// The heading marker character.
    pub const MARKER: char = '#';
    /// Deepest heading level (`<h6>`).
    pub const MAX_LEVEL: usize = 6;

    /// Returns the heading level if `block` opens with 1-6 `#` followed by a space.
    pub fn level(block: &str) -> Option<u8> {
        let level = block.chars().take_while(|&c| c == Self::MARKER).count();
        if level == 0 || level > Self::MAX_LEVEL {
            return None;
        }
        // `#` is one byte, so `level` is also a byte offset
        if !block[level..].starts_with(' ') {
            return None;
        }
        u8::try_from(level).ok()
    }

    /// Heading text after the marker run and its leading spaces.
    ///
    /// `level` must come from [`Heading::level`] on the same block.
    pub fn content(block: &str, level: u8) -> &str {
        block
            .get(usize::from(level)..)
            .unwrap_or_default()
            .trim_start()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case("# H", Some(1))]
    #[case("### Three", Some(3))]
    #[case("###### Six", Some(6))]
    #[case("####### Seven", None)]
    #[case("##H", None)]
    #[case("#", None)]
    #[case("Not # a heading", None)]
    fn heading_level(#[case] block: &str, #[case] expected: Option<u8>) {
        assert_eq!(Heading::level(block), expected);
    }

    #[test]
    fn content_strips_marker_and_spaces() {
        assert_eq!(Heading::content("##   Spaced out", 2), "Spaced out");
        assert_eq!(Heading::content("# **Bold** title", 1), "**Bold** title");
    }
}
