//! Markdown parsing: block segmentation, classification and inline spans.

mod blocks;
mod inline;

pub(crate) use blocks::{count_hashes, ordered_marker};
pub use blocks::{classify, segment};
pub use inline::{parse_spans, split_delimiter, split_images, split_links};
