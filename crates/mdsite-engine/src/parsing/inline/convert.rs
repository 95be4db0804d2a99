use crate::html::{HtmlError, HtmlNode};

use super::{
    parser::tokenize,
    types::{SpanKind, TextSpan},
};

/// Converts one inline span into its HTML leaf.
///
/// Images carry their alt text as an attribute and an empty value.
pub fn span_to_node(span: TextSpan) -> Result<HtmlNode, HtmlError> {
    let TextSpan { text, kind } = span;
    match kind {
        SpanKind::Plain => Ok(HtmlNode::text(text)),
        SpanKind::Bold => HtmlNode::leaf("b", text),
        SpanKind::Italic => HtmlNode::leaf("i", text),
        SpanKind::Code => HtmlNode::leaf("code", text),
        SpanKind::Link { url } => Ok(HtmlNode::leaf("a", text)?.with_attribute("href", url)),
        SpanKind::Image { url } => Ok(HtmlNode::leaf("img", "")?
            .with_attribute("src", url)
            .with_attribute("alt", text)),
    }
}

/// Tokenizes `text` and converts every span into an HTML node.
pub fn text_to_children(text: &str) -> Result<Vec<HtmlNode>, HtmlError> {
    tokenize(text).into_iter().map(span_to_node).collect()
}
