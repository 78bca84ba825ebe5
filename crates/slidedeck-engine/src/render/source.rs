use xi_rope::Rope;

use crate::models::Document;
use crate::parsing::rope::slice::slice_to_string;

/// Re-emits the deck from slide spans, joined by normalized delimiter lines.
///
/// For any successfully parsed source this reproduces the input byte for
/// byte, except that each delimiter line is written as `<delimiter>\n`.
pub fn to_source(doc: &Document, rope: &Rope) -> String {
    let mut out = String::with_capacity(rope.len());
    for (i, slide) in doc.slides.iter().enumerate() {
        if i > 0 {
            out.push_str(&doc.delimiter);
            out.push('\n');
        }
        out.push_str(&slice_to_string(rope, slide.span));
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::parsing::{Syntax, parse_document};
    use pretty_assertions::assert_eq;
    use rstest::rstest;

    fn round_trip(src: &str) -> String {
        let rope = Rope::from(src);
        let doc = parse_document(&rope, &Syntax::default()).unwrap();
        to_source(&doc, &rope)
    }

    #[rstest]
    #[case("")]
    #[case("# A\nfoo\n---\n# B\nbar")]
    #[case("---\n---\n")]
    #[case("# T\n.fx: larger\n\n```python\n  x = 1\n```\n\n<img src=\"a.png\">\n\n# Presenter Notes\nsay it\n")]
    #[case("- a\n  - b\n\n1. c\r\n---\nend\r\n")]
    fn reproduces_source(#[case] src: &str) {
        assert_eq!(round_trip(src), src);
    }

    #[test]
    fn normalizes_delimiter_lines() {
        assert_eq!(round_trip("a\n---   \nb\n"), "a\n---\nb\n");
        assert_eq!(round_trip("a\n---"), "a\n---\n");
    }
}
