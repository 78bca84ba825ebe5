/// ATX heading lines (`# Title`).
pub struct Heading;

impl Heading {
    pub const MARKER: char = '#';
    pub const MAX_LEVEL: usize = 6;

    /// Parses a heading line into `(level, text)`.
    ///
    /// Up to three leading spaces are allowed. A closing run of `#` preceded
    /// by a space is dropped from the text.
    pub fn parse(line: &str) -> Option<(u8, String)> {
        let t = line.trim_end_matches(['\r', '\n']);
        let indent = t.len() - t.trim_start_matches(' ').len();
        if indent > 3 {
            return None;
        }
        let t = &t[indent..];
        let level = t.chars().take_while(|&c| c == Self::MARKER).count();
        if level == 0 || level > Self::MAX_LEVEL {
            return None;
        }
        let rest = &t[level..];
        if !(rest.is_empty() || rest.starts_with([' ', '\t'])) {
            return None;
        }
        let mut text = rest.trim();
        let stripped = text.trim_end_matches(Self::MARKER);
        if stripped.is_empty() || stripped.ends_with([' ', '\t']) {
            text = stripped.trim_end();
        }
        Some((level as u8, text.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case("# A", 1, "A")]
    #[case("### Custom template tags\n", 3, "Custom template tags")]
    #[case("  ## Indented", 2, "Indented")]
    #[case("## Closed ##", 2, "Closed")]
    #[case("# C# rocks", 1, "C# rocks")]
    #[case("#", 1, "")]
    fn headings(#[case] line: &str, #[case] level: u8, #[case] text: &str) {
        assert_eq!(Heading::parse(line), Some((level, text.to_string())));
    }

    #[rstest]
    #[case("#hashtag")]
    #[case("####### seven")]
    #[case("    # code")]
    #[case("text # not heading")]
    fn not_headings(#[case] line: &str) {
        assert_eq!(Heading::parse(line), None);
    }
}
