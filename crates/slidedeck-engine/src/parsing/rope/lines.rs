use xi_rope::Rope;

use super::span::Span;

/// A reference to a single source line with its byte span and line number.
#[derive(Debug, Clone)]
pub struct LineRef {
    /// Byte span of this line in the rope (includes newline if present).
    pub span: Span,
    /// 1-based line number in the whole document.
    pub number: usize,
    /// The raw line text, line ending included.
    pub text: String,
}

impl LineRef {
    /// The line text with its `\n` / `\r\n` ending removed.
    pub fn content(&self) -> &str {
        self.text.trim_end_matches(['\r', '\n'])
    }
}

/// Returns an iterator over lines with their byte spans and line numbers.
///
/// Uses `lines_raw` to preserve newline characters, so consecutive spans
/// tile the rope without gaps.
pub fn lines_with_spans(rope: &Rope) -> impl Iterator<Item = LineRef> + '_ {
    let mut offset = 0usize;
    rope.lines_raw(..).enumerate().map(move |(i, line)| {
        let start = offset;
        offset += line.len();
        LineRef {
            span: Span { start, end: offset },
            number: i + 1,
            text: line.into_owned(),
        }
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn spans_tile_the_rope() {
        let rope = Rope::from("one\ntwo\r\nthree");
        let lines: Vec<_> = lines_with_spans(&rope).collect();

        assert_eq!(lines.len(), 3);
        assert_eq!(lines[0].span, Span { start: 0, end: 4 });
        assert_eq!(lines[1].span, Span { start: 4, end: 9 });
        assert_eq!(lines[2].span, Span { start: 9, end: 14 });
        assert_eq!(lines[2].number, 3);
    }

    #[test]
    fn content_strips_line_endings() {
        let rope = Rope::from("a\r\nb\n");
        let lines: Vec<_> = lines_with_spans(&rope).collect();
        assert_eq!(lines[0].content(), "a");
        assert_eq!(lines[1].content(), "b");
    }
}
