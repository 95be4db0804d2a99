use super::blocks::{BlockType, classify, kinds::Heading, segment};

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum TitleError {
    #[error("document has no level-1 heading to use as a title")]
    MissingHeading,
}

/// Returns the text of the first `# ` heading block, trimmed.
///
/// Inline markup inside the title is kept as written.
pub fn extract_title(markdown: &str) -> Result<String, TitleError> {
    segment(markdown)
        .into_iter()
        .find_map(|block| match classify(block) {
            BlockType::Heading { level: 1 } => Some(Heading::content(block, 1).trim().to_string()),
            _ => None,
        })
        .ok_or(TitleError::MissingHeading)
}
