//! Data model shared by the parser, converter and renderer.

pub mod ast;
pub mod html;

pub use ast::{BlockKind, CompiledBlock, DocumentAst, SpanKind, TextSpan};
pub use html::{Attributes, HtmlNode};
