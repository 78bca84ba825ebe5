use xi_rope::Rope;

use crate::models::Document;
use crate::parsing::rope::slice::slice_to_string;

/// Validates segmenter output invariants.
///
/// Asserts that:
/// - All slide spans are within rope bounds and in source order
/// - Consecutive slides are separated by exactly one delimiter line
/// - Slide indices match their position
/// - Block spans are non-empty and lie inside their slide span, in order and
///   without overlap
///
/// # Panics
/// Panics with a descriptive message if any invariant is violated.
pub fn check(rope: &Rope, doc: &Document) {
    let n = rope.len();
    let mut prev_end: Option<usize> = None;

    for (i, slide) in doc.slides.iter().enumerate() {
        assert_eq!(slide.index, i, "slide index out of order");
        assert!(
            slide.span.start <= slide.span.end && slide.span.end <= n,
            "slide span out of bounds: {:?} (rope len: {})",
            slide.span,
            n
        );

        match prev_end {
            None => assert_eq!(slide.span.start, 0, "first slide must start at 0"),
            Some(end) => {
                let gap = slice_to_string(
                    rope,
                    crate::parsing::rope::Span {
                        start: end,
                        end: slide.span.start,
                    },
                );
                assert_eq!(
                    gap.trim_end(),
                    doc.delimiter,
                    "slides {} and {} not separated by a single delimiter line",
                    i - 1,
                    i
                );
            }
        }
        prev_end = Some(slide.span.end);

        let mut block_end = slide.span.start;
        for node in &slide.body {
            assert!(
                slide.span.contains(node.span),
                "block span not contained in slide span: block {:?}, slide {:?}",
                node.span,
                slide.span
            );
            assert!(!node.span.is_empty(), "block at {:?} covers no source", node.span);
            assert!(
                node.span.start >= block_end,
                "block spans overlap or are out of order at {:?}",
                node.span
            );
            block_end = node.span.end;
        }
    }

    if let Some(end) = prev_end {
        assert_eq!(end, n, "last slide must end at the end of the source");
    }
}
