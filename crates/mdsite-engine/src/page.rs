//! Template substitution for a single page.

use crate::html::HtmlError;
use crate::parsing::{TitleError, extract_title, markdown_to_html_node};

/// Replaced with the document's first `# ` heading.
pub const TITLE_PLACEHOLDER: &str = "{{ Title }}";
/// Replaced with the serialized document body.
pub const CONTENT_PLACEHOLDER: &str = "{{ Content }}";

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum RenderError {
    #[error(transparent)]
    Title(#[from] TitleError),
    #[error(transparent)]
    Html(#[from] HtmlError),
}

/// Renders `markdown` into `template` by literal placeholder replacement.
pub fn render_page(markdown: &str, template: &str) -> Result<String, RenderError> {
    let title = extract_title(markdown)?;
    let content = markdown_to_html_node(markdown)?.serialize();

    Ok(template
        .replace(TITLE_PLACEHOLDER, &title)
        .replace(CONTENT_PLACEHOLDER, &content))
}
