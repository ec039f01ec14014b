//! Span converter - maps inline spans to HTML leaves.

use crate::core::ast::{SpanKind, TextSpan};
use crate::core::html::HtmlNode;
use crate::parser::parse_spans;
use crate::Result;

/// Converter for inline spans.
pub struct SpanConverter;

impl SpanConverter {
    /// Converts one span to its HTML node.
    pub fn convert(span: TextSpan) -> HtmlNode {
        let TextSpan { kind, text, url } = span;
        let url = url.unwrap_or_default();
        match kind {
            SpanKind::Plain => HtmlNode::text(text),
            SpanKind::Bold => HtmlNode::leaf(Some("b"), Some(&text)),
            SpanKind::Italic => HtmlNode::leaf(Some("i"), Some(&text)),
            SpanKind::Code => HtmlNode::leaf(Some("code"), Some(&text)),
            SpanKind::Link => HtmlNode::leaf(Some("a"), Some(&text)).with_attribute("href", url),
            SpanKind::Image => HtmlNode::element("img", Vec::new())
                .with_attribute("src", url)
                .with_attribute("alt", text),
        }
    }

    /// Parses `text` into spans and converts each of them.
    pub fn text_to_children(text: &str) -> Result<Vec<HtmlNode>> {
        Ok(parse_spans(text)?
            .into_iter()
            .map(Self::convert)
            .collect())
    }
}
