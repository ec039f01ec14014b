use md2page::{
    classify, markdown_to_html, parse_document, parse_spans, render_document, segment, BlockKind,
    Error, HtmlNode, SpanKind, TextSpan,
};
use pretty_assertions::assert_eq;

#[test]
fn heading_and_paragraph_round_trip() {
    let root = markdown_to_html("# Hi\n\nThis is **bold** text.").unwrap();
    assert_eq!(
        root,
        HtmlNode::element(
            "div",
            vec![
                HtmlNode::element("h1", vec![HtmlNode::text("Hi")]),
                HtmlNode::element(
                    "p",
                    vec![
                        HtmlNode::text("This is "),
                        HtmlNode::element("b", vec![HtmlNode::text("bold")]),
                        HtmlNode::text(" text."),
                    ]
                ),
            ]
        )
    );
    assert_eq!(
        root.to_html().unwrap(),
        "<div><h1>Hi</h1><p>This is <b>bold</b> text.</p></div>"
    );
    assert_eq!(root.to_html().unwrap(), root.to_html().unwrap());
}

#[test]
fn code_block_is_not_span_parsed() {
    let html = render_document("```\ncode here\n**not bold**\n```").unwrap();
    assert_eq!(
        html,
        "<div><pre><code>code here\n**not bold**\n</code></pre></div>"
    );
}

#[test]
fn full_document() {
    let md = "
# Tolkien Fan Club

![JRR Tolkien sketch](/images/tolkien.png)

Here's the deal, **I like Tolkien**.

> \"I am in fact a Hobbit in all but size.\"
>
> -- J.R.R. Tolkien

## Blog posts

- [Why Glorfindel is More Impressive than Legolas](/blog/glorfindel)
- [Why Tom Bombadil Was a Mistake](/blog/tom)

1. Hobbits
2. Elves
3. _Dwarves_

```
func main() {}
```
";
    let html = render_document(md).unwrap();
    assert_eq!(
        html,
        concat!(
            "<div>",
            "<h1>Tolkien Fan Club</h1>",
            "<p><img src=\"/images/tolkien.png\" alt=\"JRR Tolkien sketch\"></img></p>",
            "<p>Here's the deal, <b>I like Tolkien</b>.</p>",
            "<blockquote>\"I am in fact a Hobbit in all but size.\"  -- J.R.R. Tolkien</blockquote>",
            "<h2>Blog posts</h2>",
            "<ul>",
            "<li><a href=\"/blog/glorfindel\">Why Glorfindel is More Impressive than Legolas</a></li>",
            "<li><a href=\"/blog/tom\">Why Tom Bombadil Was a Mistake</a></li>",
            "</ul>",
            "<ol><li>Hobbits</li><li>Elves</li><li><i>Dwarves</i></li></ol>",
            "<pre><code>func main() {}\n</code></pre>",
            "</div>"
        )
    );
}

#[test]
fn blocks_stay_introspectable() {
    let doc = parse_document("## Intro\n\n# The _Title_\n\nbody").unwrap();
    let title = doc.first_heading(1).expect("document has an h1");
    assert_eq!(title.kind, BlockKind::Heading(1));
    assert_eq!(title.node.text_content(), "The Title");
    assert_eq!(doc.blocks.len(), 3);
}

#[test]
fn intermediate_operations() {
    assert_eq!(segment("A\n\nB\n\nC"), vec!["A", "B", "C"]);
    assert_eq!(classify("# Title"), BlockKind::Heading(1));
    assert_eq!(classify("1. a\n2. b"), BlockKind::OrderedList);
    assert_eq!(classify("1. a\n3. b"), BlockKind::Paragraph);
    assert_eq!(
        parse_spans("![a](u) and [b](v)").unwrap(),
        vec![
            TextSpan::image("a", "u"),
            TextSpan::plain(" and "),
            TextSpan::link("b", "v"),
        ]
    );
}

#[test]
fn even_delimiter_counts_alternate() {
    for n in 1..=4 {
        let text = (0..n).map(|i| format!("p{} _i{}_ ", i, i)).collect::<String>();
        let spans = parse_spans(&text).unwrap();
        assert_eq!(spans.len(), 2 * n + 1);
        for (i, span) in spans.iter().enumerate() {
            let expected = if i % 2 == 0 {
                SpanKind::Plain
            } else {
                SpanKind::Italic
            };
            assert_eq!(span.kind, expected);
        }
        assert!(matches!(
            parse_spans(&format!("{}_", text)),
            Err(Error::UnclosedDelimiter(_))
        ));
    }
}

#[test]
fn errors_abort_the_whole_document() {
    assert!(matches!(
        render_document("# fine\n\nnot `closed"),
        Err(Error::UnclosedDelimiter(_))
    ));
}
