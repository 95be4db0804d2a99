use crate::html::{HtmlError, HtmlNode};

use super::{
    blocks::{
        BlockType, classify,
        kinds::{BlockQuote, CodeFence, Heading, OrderedList, UnorderedList},
        segment,
    },
    inline::text_to_children,
};

/// Converts a markdown document into a single `div` node, one child per block.
pub fn markdown_to_html_node(markdown: &str) -> Result<HtmlNode, HtmlError> {
    let blocks = segment(markdown);
    log::debug!("assembling document with {} blocks", blocks.len());

    let children = blocks
        .into_iter()
        .map(block_to_html_node)
        .collect::<Result<Vec<_>, _>>()?;
    HtmlNode::container("div", children)
}

fn block_to_html_node(block: &str) -> Result<HtmlNode, HtmlError> {
    let block_type = classify(block);
    log::trace!("classified block as {block_type:?}");

    match block_type {
        BlockType::Paragraph => {
            let text = block.replace('\n', " ");
            HtmlNode::container("p", text_to_children(&text)?)
        }
        BlockType::Heading { level } => {
            let text = Heading::content(block, level);
            HtmlNode::container(format!("h{level}"), text_to_children(text)?)
        }
        BlockType::Code => {
            let code = HtmlNode::text(CodeFence::content(block));
            HtmlNode::container("pre", vec![HtmlNode::container("code", vec![code])?])
        }
        BlockType::Quote => {
            let text = BlockQuote::content(block);
            HtmlNode::container("blockquote", text_to_children(&text)?)
        }
        BlockType::UnorderedList => list_node("ul", UnorderedList::items(block)),
        BlockType::OrderedList => list_node("ol", OrderedList::items(block)),
    }
}

fn list_node(tag: &str, items: Vec<&str>) -> Result<HtmlNode, HtmlError> {
    let items = items
        .into_iter()
        .map(|item| HtmlNode::container("li", text_to_children(item)?))
        .collect::<Result<Vec<_>, _>>()?;
    HtmlNode::container(tag, items)
}
