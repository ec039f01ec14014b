mod html;

use crate::core::ast::DocumentAst;
use crate::Result;

pub use html::HtmlRenderer;

pub trait Renderer {
    fn render(&self, document: &DocumentAst) -> Result<String>;
}
