//! Error types for md2page.

use std::path::PathBuf;
use thiserror::Error;

/// Result type for md2page operations.
pub type Result<T> = std::result::Result<T, Error>;

/// Error types that can occur while converting Markdown or generating pages.
#[derive(Error, Debug)]
pub enum Error {
    /// An inline delimiter (`**`, `_`, `` ` ``) was opened but never closed.
    #[error("Invalid markdown, formatted section not closed: {0}")]
    UnclosedDelimiter(String),

    /// A heading block has no text after its `#` markers.
    #[error("Invalid heading level: {0}")]
    InvalidHeading(usize),

    /// A code block is not fenced with ``` on both ends.
    #[error("Invalid code block")]
    InvalidCodeBlock,

    /// A quote block contains a line not starting with `>`.
    #[error("Invalid quote block")]
    InvalidQuote,

    /// An HTML node is missing its tag, content or children.
    #[error("Invalid HTML: {0}")]
    MalformedNode(String),

    /// The document has no level-1 heading to use as the page title.
    #[error("No title found: document has no level 1 heading")]
    MissingTitle,

    /// Error occurred during file I/O operations.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Generating the page for a content file failed.
    #[error("Failed to generate page from {}: {source}", path.display())]
    Page {
        path: PathBuf,
        #[source]
        source: Box<Error>,
    },
}
