//! Static site generation on top of the Markdown converter.

mod template;

pub use template::{PageTemplate, CONTENT_MARKER, TITLE_MARKER};

use crate::converter::MarkdownToHtml;
use crate::core::ast::DocumentAst;
use crate::error::Error;
use crate::render::{HtmlRenderer, Renderer};
use crate::Result;
use log::{debug, info, warn};
use std::fs;
use std::path::{Path, PathBuf};

const MARKDOWN_EXTENSION: &str = "md";
const HTML_EXTENSION: &str = "html";

/// Locations and base path used when building a site.
#[derive(Debug, Clone)]
pub struct SiteOptions {
    /// Prefix substituted for root-relative `href`/`src` attributes.
    pub base_path: String,
    /// Directory copied verbatim into the output.
    pub static_dir: PathBuf,
    /// Directory of Markdown pages.
    pub content_dir: PathBuf,
    /// Page template holding the title and content markers.
    pub template_path: PathBuf,
    /// Output directory. Deleted and recreated on every build.
    pub output_dir: PathBuf,
}

impl Default for SiteOptions {
    fn default() -> Self {
        Self {
            base_path: "/".to_string(),
            static_dir: PathBuf::from("./static"),
            content_dir: PathBuf::from("./content"),
            template_path: PathBuf::from("./template.html"),
            output_dir: PathBuf::from("./docs"),
        }
    }
}

/// Counts reported after a build.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct BuildSummary {
    pub static_files: usize,
    pub pages: usize,
}

/// Copies the static directory and renders every content page.
pub fn build_site(options: &SiteOptions) -> Result<BuildSummary> {
    info!(
        "Copying static files from {} to {}",
        options.static_dir.display(),
        options.output_dir.display()
    );
    let static_files = copy_static(&options.static_dir, &options.output_dir)?;

    info!("Generating pages from {}", options.content_dir.display());
    let template = PageTemplate::load(&options.template_path)?;
    let pages = generate_pages_recursive(
        &options.content_dir,
        &template,
        &options.output_dir,
        &options.base_path,
    )?;

    Ok(BuildSummary {
        static_files,
        pages,
    })
}

/// Text of the first level 1 heading.
pub fn extract_title(document: &DocumentAst) -> Result<String> {
    document
        .first_heading(1)
        .map(|block| block.node.text_content().trim().to_string())
        .ok_or(Error::MissingTitle)
}

/// Renders one Markdown document into a full page.
pub fn generate_page(markdown: &str, template: &PageTemplate, base_path: &str) -> Result<String> {
    let document = MarkdownToHtml::with_defaults().parse(markdown)?;
    let title = extract_title(&document)?;
    let content = HtmlRenderer.render(&document)?;
    Ok(template.render(&title, &content, base_path))
}

/// Renders every `.md` file below `content_dir` to the mirrored `.html` path
/// below `dest_dir`. Returns the number of pages written.
pub fn generate_pages_recursive(
    content_dir: &Path,
    template: &PageTemplate,
    dest_dir: &Path,
    base_path: &str,
) -> Result<usize> {
    let mut count = 0;
    for path in sorted_entries(content_dir)? {
        let Some(name) = path.file_name() else {
            continue;
        };
        let dest = dest_dir.join(name);
        if path.is_dir() {
            count += generate_pages_recursive(&path, template, &dest, base_path)?;
        } else if path
            .extension()
            .is_some_and(|ext| ext == MARKDOWN_EXTENSION)
        {
            let dest = dest.with_extension(HTML_EXTENSION);
            write_page(&path, template, &dest, base_path).map_err(|source| Error::Page {
                path: path.clone(),
                source: Box::new(source),
            })?;
            count += 1;
        } else {
            debug!("skipping non-markdown file {}", path.display());
        }
    }
    Ok(count)
}

fn write_page(src: &Path, template: &PageTemplate, dest: &Path, base_path: &str) -> Result<()> {
    info!("Generating page from {} to {}", src.display(), dest.display());
    let markdown = fs::read_to_string(src)?;
    let page = generate_page(&markdown, template, base_path)?;
    if let Some(parent) = dest.parent() {
        fs::create_dir_all(parent)?;
    }
    fs::write(dest, page)?;
    Ok(())
}

/// Replaces `dest` with a recursive copy of `src`. Returns the number of files copied.
///
/// A missing `src` leaves an empty `dest`.
pub fn copy_static(src: &Path, dest: &Path) -> Result<usize> {
    if dest.exists() {
        debug!("removing {}", dest.display());
        fs::remove_dir_all(dest)?;
    }
    if !src.exists() {
        warn!("static directory {} does not exist", src.display());
        fs::create_dir_all(dest)?;
        return Ok(0);
    }
    copy_dir_recursive(src, dest)
}

fn copy_dir_recursive(src: &Path, dest: &Path) -> Result<usize> {
    fs::create_dir_all(dest)?;
    let mut count = 0;
    for path in sorted_entries(src)? {
        let Some(name) = path.file_name() else {
            continue;
        };
        let target = dest.join(name);
        if path.is_dir() {
            count += copy_dir_recursive(&path, &target)?;
        } else {
            debug!("copying {} -> {}", path.display(), target.display());
            fs::copy(&path, &target)?;
            count += 1;
        }
    }
    Ok(count)
}

fn sorted_entries(dir: &Path) -> Result<Vec<PathBuf>> {
    let mut paths = fs::read_dir(dir)?
        .map(|entry| entry.map(|entry| entry.path()))
        .collect::<std::io::Result<Vec<_>>>()?;
    paths.sort();
    Ok(paths)
}
