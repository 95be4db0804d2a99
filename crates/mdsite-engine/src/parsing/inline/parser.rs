use super::{
    kinds::{Bold, CodeSpan, Found, Image, Italic, Link},
    types::{SpanKind, TextSpan},
};

/// Tokenizes inline markdown into an ordered list of [`TextSpan`]s.
///
/// Passes run in a fixed order (bold, italic, code, images, links) and each
/// only rewrites spans still `Plain`. Unmatched syntax stays plain text.
pub fn tokenize(text: &str) -> Vec<TextSpan> {
    let spans = vec![TextSpan::plain(text)];
    let spans = split_delimiter(spans, Bold::DELIMITER, &SpanKind::Bold);
    let spans = split_delimiter(spans, Italic::DELIMITER, &SpanKind::Italic);
    let spans = split_delimiter(spans, CodeSpan::DELIMITER, &SpanKind::Code);
    let spans = split_images(spans);
    split_links(spans)
}

/// Splits every plain span on `delimiter`, tagging enclosed parts as `kind`.
///
/// With an even number of delimiters, parts alternate plain / `kind`. With
/// an odd number one delimiter is dangling, so every part stays plain and
/// the delimiters are dropped. Empty parts are never emitted.
pub fn split_delimiter(spans: Vec<TextSpan>, delimiter: &str, kind: &SpanKind) -> Vec<TextSpan> {
    let mut out = Vec::with_capacity(spans.len());

    for span in spans {
        if !span.is_plain() || !span.text.contains(delimiter) {
            out.push(span);
            continue;
        }

        let parts: Vec<&str> = span.text.split(delimiter).collect();
        let balanced = parts.len() % 2 == 1;

        for (i, part) in parts.into_iter().enumerate() {
            if part.is_empty() {
                continue;
            }
            let part_kind = if balanced && i % 2 == 1 {
                kind.clone()
            } else {
                SpanKind::Plain
            };
            out.push(TextSpan::new(part, part_kind));
        }
    }

    out
}

/// Extracts `![alt](url)` images from plain spans.
pub fn split_images(spans: Vec<TextSpan>) -> Vec<TextSpan> {
    split_found(spans, Image::find_all, |alt, url| TextSpan::image(alt, url))
}

/// Extracts `[text](url)` links from plain spans.
pub fn split_links(spans: Vec<TextSpan>) -> Vec<TextSpan> {
    split_found(spans, Link::find_all, |text, url| TextSpan::link(text, url))
}

/// `(alt, url)` for every image in `text`.
pub fn extract_markdown_images(text: &str) -> Vec<(String, String)> {
    Image::find_all(text)
        .into_iter()
        .map(|f| (f.text, f.url))
        .collect()
}

/// `(anchor text, url)` for every link in `text`, excluding images.
pub fn extract_markdown_links(text: &str) -> Vec<(String, String)> {
    Link::find_all(text)
        .into_iter()
        .map(|f| (f.text, f.url))
        .collect()
}

/// Shared driver for the image and link passes.
///
/// Text before each match and after the last one is emitted as plain when
/// non-empty; a span without matches passes through unchanged.
fn split_found(
    spans: Vec<TextSpan>,
    find_all: fn(&str) -> Vec<Found>,
    make: fn(String, String) -> TextSpan,
) -> Vec<TextSpan> {
    let mut out = Vec::with_capacity(spans.len());

    for span in spans {
        if !span.is_plain() {
            out.push(span);
            continue;
        }

        let found = find_all(&span.text);
        if found.is_empty() {
            out.push(span);
            continue;
        }

        let mut cursor = 0;
        for Found { range, text, url } in found {
            let before = &span.text[cursor..range.start];
            if !before.is_empty() {
                out.push(TextSpan::plain(before));
            }
            out.push(make(text, url));
            cursor = range.end;
        }
        let rest = &span.text[cursor..];
        if !rest.is_empty() {
            out.push(TextSpan::plain(rest));
        }
    }

    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use rstest::rstest;

    #[test]
    fn plain_text_is_one_span() {
        assert_eq!(tokenize("hello world"), vec![TextSpan::plain("hello world")]);
    }

    #[test]
    fn mixed_inline_produces_ten_spans() {
        let spans = tokenize(
            "This is **text** with an _italic_ word and a `code block` and an ![alt](http://x/img.png) and a [link](http://x)",
        );
        assert_eq!(
            spans,
            vec![
                TextSpan::plain("This is "),
                TextSpan::new("text", SpanKind::Bold),
                TextSpan::plain(" with an "),
                TextSpan::new("italic", SpanKind::Italic),
                TextSpan::plain(" word and a "),
                TextSpan::new("code block", SpanKind::Code),
                TextSpan::plain(" and an "),
                TextSpan::image("alt", "http://x/img.png"),
                TextSpan::plain(" and a "),
                TextSpan::link("link", "http://x"),
            ]
        );
    }

    #[rstest]
    #[case("**", SpanKind::Bold, "This is **bold** text")]
    #[case("_", SpanKind::Italic, "This is _italic_ text")]
    #[case("`", SpanKind::Code, "This is `code` text")]
    fn delimiter_pairs(#[case] delimiter: &str, #[case] kind: SpanKind, #[case] text: &str) {
        let expected_inner = match kind {
            SpanKind::Bold => "bold",
            SpanKind::Italic => "italic",
            _ => "code",
        };
        assert_eq!(
            split_delimiter(vec![TextSpan::plain(text)], delimiter, &kind),
            vec![
                TextSpan::plain("This is "),
                TextSpan::new(expected_inner, kind.clone()),
                TextSpan::plain(" text"),
            ]
        );
    }

    #[test]
    fn dangling_delimiter_stays_plain() {
        assert_eq!(
            tokenize("a ` b"),
            vec![TextSpan::plain("a "), TextSpan::plain(" b")]
        );
    }

    #[test]
    fn dangling_after_pair_drops_all_markup() {
        assert_eq!(
            split_delimiter(
                vec![TextSpan::plain("**a** b **c")],
                Bold::DELIMITER,
                &SpanKind::Bold
            ),
            vec![
                TextSpan::plain("a"),
                TextSpan::plain(" b "),
                TextSpan::plain("c"),
            ]
        );
    }

    #[test]
    fn delimiter_at_edges_emits_no_empty_spans() {
        assert_eq!(
            tokenize("**all bold**"),
            vec![TextSpan::new("all bold", SpanKind::Bold)]
        );
    }

    #[test]
    fn multiple_pairs_alternate() {
        assert_eq!(
            tokenize("**one** and **two**"),
            vec![
                TextSpan::new("one", SpanKind::Bold),
                TextSpan::plain(" and "),
                TextSpan::new("two", SpanKind::Bold),
            ]
        );
    }

    #[test]
    fn earlier_passes_are_not_resplit() {
        // The italic pass must leave the bold span alone.
        assert_eq!(
            tokenize("**snake_case** _x_"),
            vec![
                TextSpan::new("snake_case", SpanKind::Bold),
                TextSpan::plain(" "),
                TextSpan::new("x", SpanKind::Italic),
            ]
        );
    }

    #[test]
    fn images_split_around_text() {
        assert_eq!(
            split_images(vec![TextSpan::plain(
                "This is text with an ![image](https://i.imgur.com/zjjcJKZ.png) and another ![second image](https://i.imgur.com/3elNhQu.png)"
            )]),
            vec![
                TextSpan::plain("This is text with an "),
                TextSpan::image("image", "https://i.imgur.com/zjjcJKZ.png"),
                TextSpan::plain(" and another "),
                TextSpan::image("second image", "https://i.imgur.com/3elNhQu.png"),
            ]
        );
    }

    #[test]
    fn links_split_with_trailing_text() {
        assert_eq!(
            split_links(vec![TextSpan::plain(
                "Visit [boot dev](https://www.boot.dev) today"
            )]),
            vec![
                TextSpan::plain("Visit "),
                TextSpan::link("boot dev", "https://www.boot.dev"),
                TextSpan::plain(" today"),
            ]
        );
    }

    #[test]
    fn repeated_identical_links_are_all_extracted() {
        assert_eq!(
            split_links(vec![TextSpan::plain("[a](b)[a](b)")]),
            vec![TextSpan::link("a", "b"), TextSpan::link("a", "b")]
        );
    }

    #[test]
    fn non_plain_spans_pass_through_image_and_link_passes() {
        let code = TextSpan::new("[x](y)", SpanKind::Code);
        assert_eq!(split_links(vec![code.clone()]), vec![code]);
    }

    #[test]
    fn only_links_and_images_carry_urls() {
        let spans = tokenize("**b** _i_ `c` ![img](u1) [link](u2) plain");
        for span in &spans {
            match span.kind {
                SpanKind::Link { .. } | SpanKind::Image { .. } => assert!(span.url().is_some()),
                _ => assert!(span.url().is_none()),
            }
        }
        assert_eq!(spans.iter().filter(|s| s.url().is_some()).count(), 2);
    }

    #[test]
    fn extract_helpers_return_pairs() {
        let text = "![cat](c.png) and [home](/)";
        assert_eq!(
            extract_markdown_images(text),
            vec![("cat".to_string(), "c.png".to_string())]
        );
        assert_eq!(
            extract_markdown_links(text),
            vec![("home".to_string(), "/".to_string())]
        );
    }
}
