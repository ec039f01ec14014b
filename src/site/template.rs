//! Page template substitution.
//!
//! A template is an HTML page holding `{{ Title }}` and `{{ Content }}`
//! markers. Rendering fills both and then points root-relative `href` and
//! `src` attributes at the site's base path.

use crate::Result;
use std::fs;
use std::path::Path;

pub const TITLE_MARKER: &str = "{{ Title }}";
pub const CONTENT_MARKER: &str = "{{ Content }}";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PageTemplate {
    source: String,
}

impl PageTemplate {
    pub fn new(source: impl Into<String>) -> Self {
        Self {
            source: source.into(),
        }
    }

    /// Reads a template from disk.
    pub fn load(path: &Path) -> Result<Self> {
        Ok(Self::new(fs::read_to_string(path)?))
    }

    /// Fills the markers and rewrites root-relative links to `base_path`.
    pub fn render(&self, title: &str, content: &str, base_path: &str) -> String {
        let page = self
            .source
            .replace(TITLE_MARKER, title)
            .replace(CONTENT_MARKER, content);
        page.replace("href=\"/", &format!("href=\"{}", base_path))
            .replace("src=\"/", &format!("src=\"{}", base_path))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    const TEMPLATE: &str = "<title>{{ Title }}</title><link href=\"/index.css\"><body>{{ Content }}</body>";

    #[test]
    fn test_substitutes_markers() {
        let page = PageTemplate::new(TEMPLATE).render("Hi", "<div></div>", "/");
        assert_eq!(
            page,
            "<title>Hi</title><link href=\"/index.css\"><body><div></div></body>"
        );
    }

    #[test]
    fn test_rewrites_base_path_in_template_and_content() {
        let page = PageTemplate::new(TEMPLATE).render(
            "Hi",
            "<img src=\"/images/a.png\" alt=\"a\"></img>",
            "/blog/",
        );
        assert_eq!(
            page,
            "<title>Hi</title><link href=\"/blog/index.css\"><body><img src=\"/blog/images/a.png\" alt=\"a\"></img></body>"
        );
    }

    #[test]
    fn test_template_without_markers_is_unchanged() {
        let page = PageTemplate::new("<p>static</p>").render("t", "c", "/");
        assert_eq!(page, "<p>static</p>");
    }
}
