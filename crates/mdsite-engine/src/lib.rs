pub mod html;
pub mod io;
pub mod page;
pub mod parsing;

#[cfg(test)]
pub mod tests;

// Re-export key types for easier usage
pub use html::{HtmlError, HtmlNode};
pub use page::{CONTENT_PLACEHOLDER, RenderError, TITLE_PLACEHOLDER, render_page};
pub use parsing::{TitleError, extract_title, markdown_to_html_node as assemble};
