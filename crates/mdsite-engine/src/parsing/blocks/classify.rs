use super::{
    kinds::{BlockQuote, CodeFence, Heading, OrderedList, UnorderedList},
    types::BlockType,
};

/// Classifies a trimmed block by its leading syntax markers.
///
/// Openers are tried in precedence order and the first match wins:
/// heading, fenced code, quote, unordered list, ordered list. Anything
/// else, including a malformed variant of one of these, is a paragraph.
pub fn classify(block: &str) -> BlockType {
    if let Some(level) = Heading::level(block) {
        return BlockType::Heading { level };
    }
    if CodeFence::is_fenced(block) {
        return BlockType::Code;
    }
    if BlockQuote::is_quote(block) {
        return BlockType::Quote;
    }
    if UnorderedList::is_list(block) {
        return BlockType::UnorderedList;
    }
    if OrderedList::is_list(block) {
        return BlockType::OrderedList;
    }
    BlockType::Paragraph
}
