//! Inline span parser - splits a run of text into formatted spans.
//!
//! Parsing is a fixed sequence of passes over a span list. Each pass only
//! looks at spans that are still [`SpanKind::Plain`]; spans formatted by an
//! earlier pass are carried through untouched, so formatting never nests.

use crate::core::ast::{SpanKind, TextSpan};
use crate::error::Error;
use crate::Result;
use regex::Regex;
use std::ops::Range;
use std::sync::OnceLock;

/// Delimiters in the order they are split.
const DELIMITERS: [(&str, SpanKind); 3] = [
    ("**", SpanKind::Bold),
    ("_", SpanKind::Italic),
    ("`", SpanKind::Code),
];

fn image_regex() -> &'static Regex {
    static IMAGE_REGEX: OnceLock<Regex> = OnceLock::new();
    IMAGE_REGEX.get_or_init(|| {
        Regex::new(r"!\[([^\[\]]*)\]\(([^\(\)]*)\)").expect("Invalid image regex")
    })
}

fn link_regex() -> &'static Regex {
    static LINK_REGEX: OnceLock<Regex> = OnceLock::new();
    LINK_REGEX.get_or_init(|| {
        Regex::new(r"\[([^\[\]]*)\]\(([^\(\)]*)\)").expect("Invalid link regex")
    })
}

/// A `[text](url)` style match inside a plain span.
#[derive(Debug, Clone, PartialEq, Eq)]
struct Reference {
    range: Range<usize>,
    text: String,
    url: String,
}

/// Parses a run of text into spans.
pub fn parse_spans(text: &str) -> Result<Vec<TextSpan>> {
    let mut spans = vec![TextSpan::plain(text)];
    for (delimiter, kind) in DELIMITERS {
        spans = split_delimiter(spans, delimiter, kind)?;
    }
    let spans = split_images(spans);
    Ok(split_links(spans))
}

/// Splits every plain span on `delimiter`; odd sections become `kind`.
///
/// An even number of sections means a delimiter was left open.
pub fn split_delimiter(
    spans: Vec<TextSpan>,
    delimiter: &str,
    kind: SpanKind,
) -> Result<Vec<TextSpan>> {
    let mut out = Vec::with_capacity(spans.len());
    for span in spans {
        if !span.is_plain() {
            out.push(span);
            continue;
        }
        let sections: Vec<&str> = span.text.split(delimiter).collect();
        if sections.len() % 2 == 0 {
            return Err(Error::UnclosedDelimiter(delimiter.to_string()));
        }
        for (i, section) in sections.into_iter().enumerate() {
            if section.is_empty() {
                continue;
            }
            if i % 2 == 0 {
                out.push(TextSpan::plain(section));
            } else {
                out.push(TextSpan::styled(kind, section));
            }
        }
    }
    Ok(out)
}

/// Extracts `![alt](url)` images from plain spans.
pub fn split_images(spans: Vec<TextSpan>) -> Vec<TextSpan> {
    split_references(spans, find_images, |alt, url| TextSpan::image(alt, url))
}

/// Extracts `[text](url)` links from plain spans, skipping anything preceded by `!`.
pub fn split_links(spans: Vec<TextSpan>) -> Vec<TextSpan> {
    split_references(spans, find_links, |text, url| TextSpan::link(text, url))
}

fn split_references(
    spans: Vec<TextSpan>,
    find: fn(&str) -> Vec<Reference>,
    make: fn(String, String) -> TextSpan,
) -> Vec<TextSpan> {
    let mut out = Vec::with_capacity(spans.len());
    for span in spans {
        if !span.is_plain() {
            out.push(span);
            continue;
        }
        let references = find(&span.text);
        if references.is_empty() {
            out.push(span);
            continue;
        }
        let mut last = 0;
        for reference in references {
            let before = &span.text[last..reference.range.start];
            if !before.is_empty() {
                out.push(TextSpan::plain(before));
            }
            out.push(make(reference.text, reference.url));
            last = reference.range.end;
        }
        let rest = &span.text[last..];
        if !rest.is_empty() {
            out.push(TextSpan::plain(rest));
        }
    }
    out
}

fn find_images(text: &str) -> Vec<Reference> {
    image_regex()
        .captures_iter(text)
        .filter_map(|caps| {
            let whole = caps.get(0)?;
            Some(Reference {
                range: whole.range(),
                text: caps[1].to_string(),
                url: caps[2].to_string(),
            })
        })
        .collect()
}

fn find_links(text: &str) -> Vec<Reference> {
    let mut found = Vec::new();
    let mut pos = 0;
    while pos < text.len() {
        let Some(caps) = link_regex().captures_at(text, pos) else {
            break;
        };
        let Some(whole) = caps.get(0) else {
            break;
        };
        if text[..whole.start()].ends_with('!') {
            // `[` is one byte, so the next search starts on a char boundary.
            pos = whole.start() + 1;
            continue;
        }
        found.push(Reference {
            range: whole.range(),
            text: caps[1].to_string(),
            url: caps[2].to_string(),
        });
        pos = whole.end();
    }
    found
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_plain_text_is_single_span() {
        let spans = parse_spans("just some words").unwrap();
        assert_eq!(spans, vec![TextSpan::plain("just some words")]);
    }

    #[test]
    fn test_bold_and_italic() {
        let spans = parse_spans("**bold** and _italic_").unwrap();
        assert_eq!(
            spans,
            vec![
                TextSpan::styled(SpanKind::Bold, "bold"),
                TextSpan::plain(" and "),
                TextSpan::styled(SpanKind::Italic, "italic"),
            ]
        );
    }

    #[test]
    fn test_alternating_pairs() {
        let spans = parse_spans("a `x` b `y` c").unwrap();
        assert_eq!(
            spans,
            vec![
                TextSpan::plain("a "),
                TextSpan::styled(SpanKind::Code, "x"),
                TextSpan::plain(" b "),
                TextSpan::styled(SpanKind::Code, "y"),
                TextSpan::plain(" c"),
            ]
        );
    }

    #[test]
    fn test_unclosed_delimiter() {
        match parse_spans("this is **broken") {
            Err(Error::UnclosedDelimiter(delimiter)) => assert_eq!(delimiter, "**"),
            other => panic!("expected UnclosedDelimiter, got {:?}", other),
        }
        assert!(matches!(
            parse_spans("snake_case"),
            Err(Error::UnclosedDelimiter(_))
        ));
    }

    #[test]
    fn test_formatted_spans_are_not_resplit() {
        // The bold pass runs first and sees an odd `**` count.
        let err = parse_spans("**a_b_c** and `x**y`").unwrap_err();
        assert!(matches!(err, Error::UnclosedDelimiter(ref d) if d == "**"));

        let spans = parse_spans("**snake_case** text").unwrap();
        assert_eq!(
            spans,
            vec![
                TextSpan::styled(SpanKind::Bold, "snake_case"),
                TextSpan::plain(" text"),
            ]
        );
    }

    #[test]
    fn test_empty_sections_are_dropped() {
        let spans = parse_spans("****x").unwrap();
        assert_eq!(spans, vec![TextSpan::plain("x")]);
    }

    #[test]
    fn test_image_then_link() {
        let spans = parse_spans("![a](u) and [b](v)").unwrap();
        assert_eq!(
            spans,
            vec![
                TextSpan::image("a", "u"),
                TextSpan::plain(" and "),
                TextSpan::link("b", "v"),
            ]
        );
    }

    #[test]
    fn test_image_is_never_a_link() {
        let spans = split_links(vec![TextSpan::plain("see ![a](u) here")]);
        assert_eq!(spans, vec![TextSpan::plain("see ![a](u) here")]);
    }

    #[test]
    fn test_multiple_links_with_surrounding_text() {
        let spans =
            parse_spans("Go [to the docs](https://docs.rs) or [crates](https://crates.io)!")
                .unwrap();
        assert_eq!(
            spans,
            vec![
                TextSpan::plain("Go "),
                TextSpan::link("to the docs", "https://docs.rs"),
                TextSpan::plain(" or "),
                TextSpan::link("crates", "https://crates.io"),
                TextSpan::plain("!"),
            ]
        );
    }

    #[test]
    fn test_unterminated_reference_stays_plain() {
        let spans = parse_spans("a [link](https://example.com and more").unwrap();
        assert_eq!(
            spans,
            vec![TextSpan::plain("a [link](https://example.com and more")]
        );
    }

    #[test]
    fn test_links_inside_code_are_literal() {
        let spans = parse_spans("`[x](y)` [z](w)").unwrap();
        assert_eq!(
            spans,
            vec![
                TextSpan::styled(SpanKind::Code, "[x](y)"),
                TextSpan::plain(" "),
                TextSpan::link("z", "w"),
            ]
        );
    }

    #[test]
    fn test_url_set_only_for_links_and_images() {
        let spans = parse_spans("**b** _i_ `c` [l](u) ![m](v) plain").unwrap();
        for span in spans {
            let has_url = matches!(span.kind, SpanKind::Link | SpanKind::Image);
            assert_eq!(span.url.is_some(), has_url, "{:?}", span);
        }
    }
}
