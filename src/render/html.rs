use crate::core::ast::{DocumentAst, ROOT_TAG};
use crate::render::Renderer;
use crate::Result;

#[derive(Debug, Default, Clone, Copy)]
pub struct HtmlRenderer;

impl Renderer for HtmlRenderer {
    fn render(&self, document: &DocumentAst) -> Result<String> {
        let mut out = format!("<{}>", ROOT_TAG);
        for block in &document.blocks {
            out.push_str(&block.node.to_html()?);
        }
        out.push_str(&format!("</{}>", ROOT_TAG));
        Ok(out)
    }
}
