/// Slide-level directive lines such as `.fx: extra-large`.
pub struct Directive;

impl Directive {
    /// Parses `<prefix><key>: <value>` into `(key, value)`.
    ///
    /// Keys start with an ASCII letter and continue with letters, digits,
    /// `_` or `-`. The value is trimmed and may be empty.
    pub fn parse(prefix: &str, line: &str) -> Option<(String, String)> {
        let t = line.trim_end_matches(['\r', '\n']);
        let rest = t.strip_prefix(prefix)?;
        let (key, value) = rest.split_once(':')?;
        let mut chars = key.chars();
        if !chars.next().is_some_and(|c| c.is_ascii_alphabetic()) {
            return None;
        }
        if !chars.all(|c| c.is_ascii_alphanumeric() || c == '_' || c == '-') {
            return None;
        }
        Some((key.to_string(), value.trim().to_string()))
    }
}
