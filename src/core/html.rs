//! HTML node tree and its serialization.

use crate::error::Error;
use crate::Result;
use indexmap::IndexMap;

/// Insertion-ordered element attributes.
pub type Attributes = IndexMap<String, String>;

/// A node of the output HTML tree.
///
/// Nodes are never validated on construction. A node missing its content,
/// tag or children fails only when [`HtmlNode::to_html`] is called.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum HtmlNode {
    /// Raw text, rendered verbatim without escaping.
    Text { content: Option<String> },
    /// A tagged element with ordered attributes and children.
    Element {
        tag: String,
        attributes: Attributes,
        children: Option<Vec<HtmlNode>>,
    },
}

impl HtmlNode {
    /// Creates a raw text node.
    pub fn text(content: impl Into<String>) -> Self {
        HtmlNode::Text {
            content: Some(content.into()),
        }
    }

    /// Creates an element without attributes.
    pub fn element(tag: impl Into<String>, children: Vec<HtmlNode>) -> Self {
        HtmlNode::Element {
            tag: tag.into(),
            attributes: Attributes::new(),
            children: Some(children),
        }
    }

    /// Creates a leaf: a text node when `tag` is `None`, otherwise an element
    /// wrapping a single text child.
    ///
    /// A missing `value` is accepted here and reported by `to_html`.
    pub fn leaf(tag: Option<&str>, value: Option<&str>) -> Self {
        let text = HtmlNode::Text {
            content: value.map(str::to_string),
        };
        match tag {
            Some(tag) => HtmlNode::element(tag, vec![text]),
            None => text,
        }
    }

    /// Appends an attribute. Text nodes carry no attributes and are returned unchanged.
    pub fn with_attribute(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        if let HtmlNode::Element { attributes, .. } = &mut self {
            attributes.insert(key.into(), value.into());
        }
        self
    }

    /// Tag name of an element node.
    pub fn tag(&self) -> Option<&str> {
        match self {
            HtmlNode::Element { tag, .. } => Some(tag),
            HtmlNode::Text { .. } => None,
        }
    }

    /// Children of an element node.
    pub fn children(&self) -> &[HtmlNode] {
        match self {
            HtmlNode::Element {
                children: Some(children),
                ..
            } => children,
            _ => &[],
        }
    }

    /// Renders the attributes as ` key="value"` pairs in insertion order.
    pub fn attributes_to_html(&self) -> String {
        let HtmlNode::Element { attributes, .. } = self else {
            return String::new();
        };
        let mut out = String::new();
        for (key, value) in attributes {
            out.push_str(&format!(" {}=\"{}\"", key, value));
        }
        out
    }

    /// Concatenated text of this node and all of its descendants.
    pub fn text_content(&self) -> String {
        let mut out = String::new();
        self.collect_text(&mut out);
        out
    }

    fn collect_text(&self, out: &mut String) {
        match self {
            HtmlNode::Text { content } => {
                if let Some(content) = content {
                    out.push_str(content);
                }
            }
            HtmlNode::Element { .. } => {
                for child in self.children() {
                    child.collect_text(out);
                }
            }
        }
    }

    /// Serializes the tree to an HTML string.
    pub fn to_html(&self) -> Result<String> {
        let mut out = String::new();
        self.write_html(&mut out)?;
        Ok(out)
    }

    fn write_html(&self, out: &mut String) -> Result<()> {
        match self {
            HtmlNode::Text { content } => {
                let content = content
                    .as_deref()
                    .ok_or_else(|| Error::MalformedNode("no value".to_string()))?;
                out.push_str(content);
            }
            HtmlNode::Element { tag, children, .. } => {
                if tag.is_empty() {
                    return Err(Error::MalformedNode("no tag".to_string()));
                }
                let children = children
                    .as_ref()
                    .ok_or_else(|| Error::MalformedNode(format!("<{}> has no children", tag)))?;
                out.push('<');
                out.push_str(tag);
                out.push_str(&self.attributes_to_html());
                out.push('>');
                for child in children {
                    child.write_html(out)?;
                }
                out.push_str("</");
                out.push_str(tag);
                out.push('>');
            }
        }
        Ok(())
    }
}
