/// A list item line, split into its marker facts and item text.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ListMarker {
    pub ordered: bool,
    /// Leading columns before the marker; a tab counts as four.
    pub indent: usize,
    pub text: String,
}

pub struct List;

impl List {
    pub const BULLETS: [char; 3] = ['-', '*', '+'];
    const MAX_ORDINAL_DIGITS: usize = 9;

    pub fn parse(line: &str) -> Option<ListMarker> {
        let t = line.trim_end_matches(['\r', '\n']);
        let body = t.trim_start_matches([' ', '\t']);
        let indent = Self::columns(&t[..t.len() - body.len()]);

        let first = body.chars().next()?;
        let (ordered, after) = if Self::BULLETS.contains(&first) {
            (false, &body[1..])
        } else {
            let digits = body.chars().take_while(char::is_ascii_digit).count();
            if digits == 0 || digits > Self::MAX_ORDINAL_DIGITS {
                return None;
            }
            let rest = &body[digits..];
            let rest = rest.strip_prefix(['.', ')'])?;
            (true, rest)
        };

        if !(after.is_empty() || after.starts_with([' ', '\t'])) {
            return None;
        }
        Some(ListMarker {
            ordered,
            indent,
            text: after.trim().to_string(),
        })
    }

    pub fn columns(whitespace: &str) -> usize {
        whitespace
            .chars()
            .map(|c| if c == '\t' { 4 } else { 1 })
            .sum()
    }
}
