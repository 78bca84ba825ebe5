#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FenceKind {
    Backticks,
    Tildes,
}

impl FenceKind {
    fn marker(self) -> char {
        match self {
            FenceKind::Backticks => '`',
            FenceKind::Tildes => '~',
        }
    }
}

/// What a line looks like if it could open or close a fence.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FenceSig {
    pub kind: FenceKind,
    /// Number of fence characters (at least 3).
    pub len: usize,
    /// Info string after the fence characters, trimmed.
    pub info: String,
}

impl FenceSig {
    /// First word of the info string, used as the language hint.
    pub fn language(&self) -> Option<String> {
        self.info.split_whitespace().next().map(str::to_string)
    }

    /// Why this opener cannot be used, if it is malformed.
    pub fn malformed_reason(&self) -> Option<&'static str> {
        if self.kind == FenceKind::Backticks && self.info.contains('`') {
            Some("backtick fence info string contains a backtick")
        } else {
            None
        }
    }
}

pub struct CodeFence;

impl CodeFence {
    pub const MIN_LEN: usize = 3;
    /// Openers may be indented by up to this many spaces.
    pub const MAX_INDENT: usize = 3;

    pub fn sig(line: &str) -> Option<FenceSig> {
        let t = line.trim_end_matches(['\r', '\n']);
        let indent = t.len() - t.trim_start_matches(' ').len();
        if indent > Self::MAX_INDENT {
            return None;
        }
        let t = &t[indent..];
        let kind = match t.chars().next()? {
            '`' => FenceKind::Backticks,
            '~' => FenceKind::Tildes,
            _ => return None,
        };
        let len = t.chars().take_while(|&c| c == kind.marker()).count();
        if len < Self::MIN_LEN {
            return None;
        }
        let info = t[len..].trim();
        // A matching run later on the line closes an inline code span.
        if kind == FenceKind::Backticks && Self::has_backtick_run(info, len) {
            return None;
        }
        Some(FenceSig {
            kind,
            len,
            info: info.to_string(),
        })
    }

    fn has_backtick_run(s: &str, len: usize) -> bool {
        s.split(|c: char| c != '`').any(|run| run.len() == len)
    }

    /// True if `candidate` closes a fence opened by `open`.
    pub fn closes(open: &FenceSig, candidate: Option<&FenceSig>) -> bool {
        candidate
            .is_some_and(|c| c.kind == open.kind && c.len >= open.len && c.info.is_empty())
    }
}
