//! Block converter - compiles a classified block into an HTML subtree.

use super::SpanConverter;
use crate::core::ast::BlockKind;
use crate::core::html::HtmlNode;
use crate::error::Error;
use crate::parser::{count_hashes, ordered_marker};
use crate::{ConvertOptions, ListMarkerStrip, Result};

const CODE_FENCE: &str = "```";
const ORDERED_MARKER_WIDTH: usize = 3;
const UNORDERED_MARKER_WIDTH: usize = 2;

/// Converter for block elements.
pub struct BlockConverter;

impl BlockConverter {
    /// Compiles `block` as the given kind.
    pub fn convert(block: &str, kind: BlockKind, options: &ConvertOptions) -> Result<HtmlNode> {
        match kind {
            BlockKind::Paragraph => Self::paragraph(block),
            BlockKind::Heading(_) => Self::heading(block),
            BlockKind::Code => Self::code(block),
            BlockKind::Quote => Self::quote(block),
            BlockKind::OrderedList => Self::ordered_list(block, options.list_markers),
            BlockKind::UnorderedList => Self::unordered_list(block),
        }
    }

    fn paragraph(block: &str) -> Result<HtmlNode> {
        let text = block.split('\n').collect::<Vec<_>>().join(" ");
        Ok(HtmlNode::element(
            "p",
            SpanConverter::text_to_children(&text)?,
        ))
    }

    fn heading(block: &str) -> Result<HtmlNode> {
        // Level comes from the text itself, not from the classification.
        let level = count_hashes(block);
        if level + 1 >= block.chars().count() {
            return Err(Error::InvalidHeading(level));
        }
        let text = block
            .get(level + 1..)
            .ok_or(Error::InvalidHeading(level))?;
        Ok(HtmlNode::element(
            format!("h{}", level),
            SpanConverter::text_to_children(text)?,
        ))
    }

    fn code(block: &str) -> Result<HtmlNode> {
        if !block.starts_with(CODE_FENCE) || !block.ends_with(CODE_FENCE) {
            return Err(Error::InvalidCodeBlock);
        }
        // Opening fence plus the character after it (normally the newline).
        let inner = block
            .strip_prefix(CODE_FENCE)
            .map(|rest| skip_chars(rest, 1))
            .and_then(|rest| rest.strip_suffix(CODE_FENCE))
            .ok_or(Error::InvalidCodeBlock)?;
        let code = HtmlNode::element("code", vec![HtmlNode::text(inner)]);
        Ok(HtmlNode::element("pre", vec![code]))
    }

    fn quote(block: &str) -> Result<HtmlNode> {
        let mut lines = Vec::new();
        for line in block.split('\n') {
            if !line.starts_with('>') {
                return Err(Error::InvalidQuote);
            }
            lines.push(line.trim_start_matches('>').trim());
        }
        let text = lines.join(" ");
        Ok(HtmlNode::element(
            "blockquote",
            SpanConverter::text_to_children(&text)?,
        ))
    }

    fn ordered_list(block: &str, markers: ListMarkerStrip) -> Result<HtmlNode> {
        let mut items = Vec::new();
        for (i, line) in block.split('\n').enumerate() {
            let text = match markers {
                ListMarkerStrip::Exact => line
                    .strip_prefix(&ordered_marker(i + 1))
                    .unwrap_or_else(|| skip_chars(line, ORDERED_MARKER_WIDTH)),
                ListMarkerStrip::FixedWidth => skip_chars(line, ORDERED_MARKER_WIDTH),
            };
            items.push(Self::list_item(text)?);
        }
        Ok(HtmlNode::element("ol", items))
    }

    fn unordered_list(block: &str) -> Result<HtmlNode> {
        let items = block
            .split('\n')
            .map(|line| Self::list_item(skip_chars(line, UNORDERED_MARKER_WIDTH)))
            .collect::<Result<Vec<_>>>()?;
        Ok(HtmlNode::element("ul", items))
    }

    fn list_item(text: &str) -> Result<HtmlNode> {
        Ok(HtmlNode::element(
            "li",
            SpanConverter::text_to_children(text)?,
        ))
    }
}

/// Drops the first `count` characters of `s`.
fn skip_chars(s: &str, count: usize) -> &str {
    match s.char_indices().nth(count) {
        Some((idx, _)) => &s[idx..],
        None => "",
    }
}
