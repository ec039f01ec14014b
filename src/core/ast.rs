use super::html::HtmlNode;

/// Tag of the element wrapping every block of a document.
pub const ROOT_TAG: &str = "div";

/// Formatting applied to an inline span.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SpanKind {
    Plain,
    Bold,
    Italic,
    Code,
    Link,
    Image,
}

/// A run of inline text carrying exactly one formatting kind.
///
/// `url` is set only for links and images.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TextSpan {
    pub kind: SpanKind,
    pub text: String,
    pub url: Option<String>,
}

impl TextSpan {
    pub fn plain(text: impl Into<String>) -> Self {
        Self::styled(SpanKind::Plain, text)
    }

    /// Creates a span of a kind that carries no URL.
    ///
    /// Link and image kinds must go through [`TextSpan::link`] and [`TextSpan::image`].
    pub fn styled(kind: SpanKind, text: impl Into<String>) -> Self {
        debug_assert!(!matches!(kind, SpanKind::Link | SpanKind::Image));
        Self {
            kind,
            text: text.into(),
            url: None,
        }
    }

    pub fn link(text: impl Into<String>, url: impl Into<String>) -> Self {
        Self {
            kind: SpanKind::Link,
            text: text.into(),
            url: Some(url.into()),
        }
    }

    pub fn image(alt: impl Into<String>, url: impl Into<String>) -> Self {
        Self {
            kind: SpanKind::Image,
            text: alt.into(),
            url: Some(url.into()),
        }
    }

    pub fn is_plain(&self) -> bool {
        self.kind == SpanKind::Plain
    }
}

/// Structural type of a block.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BlockKind {
    Paragraph,
    /// Heading with level 1 to 6.
    Heading(u8),
    Code,
    Quote,
    UnorderedList,
    OrderedList,
}

/// One block of a document after classification and compilation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CompiledBlock {
    pub kind: BlockKind,
    pub source: String,
    pub node: HtmlNode,
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct DocumentAst {
    pub blocks: Vec<CompiledBlock>,
}

impl DocumentAst {
    /// First block whose kind is `Heading(level)`.
    pub fn first_heading(&self, level: u8) -> Option<&CompiledBlock> {
        self.blocks
            .iter()
            .find(|block| block.kind == BlockKind::Heading(level))
    }

    /// Collapses the blocks into the root `<div>`.
    pub fn into_root(self) -> HtmlNode {
        HtmlNode::element(
            ROOT_TAG,
            self.blocks.into_iter().map(|block| block.node).collect(),
        )
    }

    /// Builds the root `<div>` without consuming the document.
    pub fn to_root(&self) -> HtmlNode {
        self.clone().into_root()
    }
}
