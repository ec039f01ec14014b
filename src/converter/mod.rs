//! Converter modules for Markdown to HTML transformation.

mod block;
mod span;

use crate::core::ast::{BlockKind, CompiledBlock, DocumentAst};
use crate::core::html::HtmlNode;
use crate::parser::{classify, segment};
use crate::render::{HtmlRenderer, Renderer};
use crate::{ConvertOptions, Result};
use log::debug;

pub use self::block::BlockConverter;
pub use self::span::SpanConverter;

/// Main converter struct that orchestrates Markdown to HTML conversion.
#[derive(Debug, Clone, Default)]
pub struct MarkdownToHtml {
    options: ConvertOptions,
}

impl MarkdownToHtml {
    /// Creates a new converter with the given options.
    pub fn new(options: ConvertOptions) -> Self {
        Self { options }
    }

    /// Creates a new converter with default options.
    pub fn with_defaults() -> Self {
        Self::new(ConvertOptions::default())
    }

    /// Segments, classifies and compiles every block of `markdown`.
    ///
    /// The blocks keep their kind and source text so callers can inspect
    /// them before they are collapsed into a single tree.
    pub fn parse(&self, markdown: &str) -> Result<DocumentAst> {
        let mut doc = DocumentAst::default();
        for source in segment(markdown) {
            let kind = classify(&source);
            debug!("compiling {:?} block ({} bytes)", kind, source.len());
            let node = BlockConverter::convert(&source, kind, &self.options)?;
            doc.blocks.push(CompiledBlock { kind, source, node });
        }
        Ok(doc)
    }

    /// Converts `markdown` to a tree rooted at a `<div>`.
    pub fn convert(&self, markdown: &str) -> Result<HtmlNode> {
        Ok(self.parse(markdown)?.into_root())
    }

    /// Converts `markdown` to an HTML string.
    pub fn render(&self, markdown: &str) -> Result<String> {
        HtmlRenderer.render(&self.parse(markdown)?)
    }
}

/// Compiles a single block with default options.
pub fn compile_block(block: &str, kind: BlockKind) -> Result<HtmlNode> {
    BlockConverter::convert(block, kind, &ConvertOptions::default())
}
