/// Fatal segmentation failures.
///
/// `slide` is the 0-based slide index, `line` the 1-based document line of
/// the offending fence opener.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ParseError {
    #[error("slide {slide}: code fence opened at line {line} is never closed")]
    UnterminatedFence { slide: usize, line: usize },

    #[error("slide {slide}: malformed code fence at line {line}: {reason}")]
    MalformedFence {
        slide: usize,
        line: usize,
        reason: String,
    },
}

impl ParseError {
    pub fn slide(&self) -> usize {
        match self {
            ParseError::UnterminatedFence { slide, .. } | ParseError::MalformedFence { slide, .. } => {
                *slide
            }
        }
    }

    pub fn line(&self) -> usize {
        match self {
            ParseError::UnterminatedFence { line, .. } | ParseError::MalformedFence { line, .. } => {
                *line
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn message_names_slide_and_line() {
        let err = ParseError::UnterminatedFence { slide: 2, line: 14 };
        assert_eq!(
            err.to_string(),
            "slide 2: code fence opened at line 14 is never closed"
        );
        assert_eq!(err.slide(), 2);
        assert_eq!(err.line(), 14);
    }
}
