//! Block segmentation and classification.

use crate::core::ast::BlockKind;

const CODE_FENCE: &str = "```";
const MAX_HEADING_LEVEL: usize = 6;

/// Splits a document into blocks separated by blank lines.
///
/// Each block is trimmed and then de-indented: every run of three spaces is
/// removed together with the spaces touching it, so an indented continuation
/// line such as `"- a\n    - b"` becomes `"- a\n- b"`. Blocks left empty are
/// dropped.
pub fn segment(document: &str) -> Vec<String> {
    document
        .split("\n\n")
        .filter(|piece| !piece.is_empty())
        .map(normalize_block)
        .filter(|block| !block.is_empty())
        .collect()
}

fn normalize_block(piece: &str) -> String {
    piece
        .trim()
        .split("   ")
        .map(|part| part.trim_matches(' '))
        .collect()
}

/// Determines the structural kind of a non-empty block.
pub fn classify(block: &str) -> BlockKind {
    if let Some(level) = heading_level(block) {
        return BlockKind::Heading(level);
    }

    let lines: Vec<&str> = block.split('\n').collect();
    if is_code_block(&lines) {
        return BlockKind::Code;
    }
    if lines.iter().all(|line| line.starts_with('>')) {
        return BlockKind::Quote;
    }
    if lines.iter().all(|line| line.starts_with("- ")) {
        return BlockKind::UnorderedList;
    }
    if lines
        .iter()
        .enumerate()
        .all(|(i, line)| line.starts_with(&ordered_marker(i + 1)))
    {
        return BlockKind::OrderedList;
    }

    BlockKind::Paragraph
}

/// Marker expected at the start of the `number`th (1-based) ordered list line.
pub(crate) fn ordered_marker(number: usize) -> String {
    format!("{}. ", number)
}

/// Number of leading `#` characters.
pub(crate) fn count_hashes(block: &str) -> usize {
    block.bytes().take_while(|b| *b == b'#').count()
}

fn heading_level(block: &str) -> Option<u8> {
    let hashes = count_hashes(block);
    if (1..=MAX_HEADING_LEVEL).contains(&hashes) && block[hashes..].starts_with(' ') {
        u8::try_from(hashes).ok()
    } else {
        None
    }
}

fn is_code_block(lines: &[&str]) -> bool {
    match (lines.first(), lines.last()) {
        (Some(first), Some(last)) if lines.len() > 1 => {
            first.starts_with(CODE_FENCE) && last.starts_with(CODE_FENCE)
        }
        _ => false,
    }
}
