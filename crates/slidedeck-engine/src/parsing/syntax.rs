/// Presentation-tool conventions the segmenter recognises.
///
/// Defaults follow the landslide markdown dialect.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Syntax {
    /// Line that separates slides, compared after trimming trailing whitespace.
    pub delimiter: String,
    /// Prefix that introduces a directive line, e.g. `.` in `.fx: large`.
    pub directive_prefix: String,
    /// Heading text that opens the presenter notes section (case-insensitive).
    pub notes_heading: String,
    /// Directive key whose values are appended to the presenter notes.
    pub notes_directive: Option<String>,
}

impl Syntax {
    pub const DEFAULT_DELIMITER: &'static str = "---";
    pub const DEFAULT_DIRECTIVE_PREFIX: &'static str = ".";
    pub const DEFAULT_NOTES_HEADING: &'static str = "Presenter Notes";
    pub const DEFAULT_NOTES_DIRECTIVE: &'static str = "notes";

    /// True if `line` (with or without its line ending) is a slide delimiter.
    pub fn is_delimiter(&self, line: &str) -> bool {
        line.trim_end() == self.delimiter
    }

    /// True if a heading with this text opens the presenter notes.
    pub fn is_notes_heading(&self, text: &str) -> bool {
        text.trim().eq_ignore_ascii_case(&self.notes_heading)
    }

    /// True if directive `key` feeds the presenter notes.
    pub fn is_notes_directive(&self, key: &str) -> bool {
        self.notes_directive.as_deref() == Some(key)
    }
}

impl Default for Syntax {
    fn default() -> Self {
        Self {
            delimiter: Self::DEFAULT_DELIMITER.to_string(),
            directive_prefix: Self::DEFAULT_DIRECTIVE_PREFIX.to_string(),
            notes_heading: Self::DEFAULT_NOTES_HEADING.to_string(),
            notes_directive: Some(Self::DEFAULT_NOTES_DIRECTIVE.to_string()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case("---", true)]
    #[case("---\n", true)]
    #[case("---  \r\n", true)]
    #[case(" ---", false)]
    #[case("----", false)]
    #[case("--- x", false)]
    fn delimiter_lines(#[case] line: &str, #[case] expected: bool) {
        assert_eq!(Syntax::default().is_delimiter(line), expected);
    }

    #[test]
    fn custom_delimiter() {
        let syntax = Syntax {
            delimiter: "***".into(),
            ..Syntax::default()
        };
        assert!(syntax.is_delimiter("***\n"));
        assert!(!syntax.is_delimiter("---\n"));
    }

    #[test]
    fn notes_heading_ignores_case() {
        let syntax = Syntax::default();
        assert!(syntax.is_notes_heading("presenter notes"));
        assert!(syntax.is_notes_heading(" Presenter Notes "));
        assert!(!syntax.is_notes_heading("Notes"));
    }

    #[test]
    fn notes_directive_can_be_disabled() {
        let syntax = Syntax {
            notes_directive: None,
            ..Syntax::default()
        };
        assert!(!syntax.is_notes_directive("notes"));
        assert!(Syntax::default().is_notes_directive("notes"));
    }
}
