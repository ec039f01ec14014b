//! # md2page
//!
//! Restricted Markdown to HTML converter and static page generator.
//!
//! ## Example
//!
//! ```
//! let html = md2page::render_document("# Hi\n\nThis is **bold** text.").unwrap();
//! assert_eq!(html, "<div><h1>Hi</h1><p>This is <b>bold</b> text.</p></div>");
//! ```
//!
//! The supported dialect is deliberately small: paragraphs, `#` headings,
//! fenced code, `>` quotes, `-` and `1.` lists, and non-nesting `**bold**`,
//! `_italic_`, `` `code` ``, `[links](url)` and `![images](url)`. Text is
//! inserted into the output without HTML escaping.

pub mod converter;
pub mod core;
pub mod error;
pub mod parser;
pub mod render;
pub mod site;

pub use converter::{compile_block, MarkdownToHtml};
pub use crate::core::{BlockKind, CompiledBlock, DocumentAst, HtmlNode, SpanKind, TextSpan};
pub use error::{Error, Result};
pub use parser::{classify, parse_spans, segment};
pub use render::{HtmlRenderer, Renderer};

/// Options for Markdown to HTML conversion.
#[derive(Debug, Clone, Copy, Default)]
pub struct ConvertOptions {
    /// How ordered list markers are removed from item text.
    pub list_markers: ListMarkerStrip,
}

/// Specifies how the `N. ` marker of an ordered list item is removed.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum ListMarkerStrip {
    /// Remove the marker by its real width, so `10. ` loses four characters.
    #[default]
    Exact,
    /// Always remove three characters. Items numbered 10 and above keep a
    /// leading space.
    FixedWidth,
}

/// Parses `markdown` into its compiled blocks.
pub fn parse_document(markdown: &str) -> Result<DocumentAst> {
    MarkdownToHtml::with_defaults().parse(markdown)
}

/// Converts `markdown` to an HTML tree rooted at a `<div>`.
pub fn markdown_to_html(markdown: &str) -> Result<HtmlNode> {
    MarkdownToHtml::with_defaults().convert(markdown)
}

/// Converts `markdown` to an HTML string.
pub fn render_document(markdown: &str) -> Result<String> {
    MarkdownToHtml::with_defaults().render(markdown)
}
