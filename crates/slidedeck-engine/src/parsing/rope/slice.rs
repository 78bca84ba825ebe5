use xi_rope::Rope;

use super::span::Span;

/// Extracts the text for a span from the rope as an owned String.
///
/// This allocates; prefer working with spans where possible.
pub fn slice_to_string(rope: &Rope, sp: Span) -> String {
    rope.slice_to_cow(sp.start..sp.end).into_owned()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn slice_to_string_partial_span() {
        let rope = Rope::from("# A\nfoo\n---\n");
        let sp = Span { start: 4, end: 8 };
        assert_eq!(slice_to_string(&rope, sp), "foo\n");
    }
}
