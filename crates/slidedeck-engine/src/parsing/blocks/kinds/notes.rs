/// Accumulates presenter notes for one slide.
///
/// Notes come from the section after the notes heading and from notes
/// directive lines anywhere in the slide.
#[derive(Debug, Default, Clone)]
pub struct PresenterNotes {
    lines: Vec<String>,
    /// Set once the notes heading has been seen.
    pub in_section: bool,
}

impl PresenterNotes {
    pub fn push(&mut self, line: &str) {
        self.lines.push(line.to_string());
    }

    /// Lines joined with `\n`, with leading and trailing blank lines removed.
    pub fn finish(self) -> Option<String> {
        let start = self.lines.iter().position(|l| !l.trim().is_empty())?;
        let end = self.lines.iter().rposition(|l| !l.trim().is_empty())?;
        Some(self.lines[start..=end].join("\n"))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn trims_surrounding_blank_lines() {
        let mut notes = PresenterNotes::default();
        for line in ["", "Mention the demo.", "", "Then pause.", "  "] {
            notes.push(line);
        }
        assert_eq!(
            notes.finish(),
            Some("Mention the demo.\n\nThen pause.".to_string())
        );
    }

    #[test]
    fn blank_notes_are_none() {
        let mut notes = PresenterNotes::default();
        notes.push("");
        assert_eq!(notes.finish(), None);
        assert_eq!(PresenterNotes::default().finish(), None);
    }
}
