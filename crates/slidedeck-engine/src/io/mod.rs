use std::fs;
use std::path::{Path, PathBuf};

use xi_rope::Rope;

use crate::models::Document;
use crate::parsing::{ParseError, Syntax, parse_document};

#[derive(Debug, thiserror::Error)]
pub enum IoError {
    #[error("Deck file not found: {0}")]
    NotFound(PathBuf),
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("Failed to parse deck {path}: {source}")]
    Parse { path: PathBuf, source: ParseError },
}

/// A deck file together with the source it was parsed from.
#[derive(Debug, Clone)]
pub struct LoadedDeck {
    pub path: PathBuf,
    pub source: Rope,
    pub document: Document,
}

/// Read a deck file and return its content
pub fn read_deck_source(path: &Path) -> Result<String, IoError> {
    if !path.exists() {
        return Err(IoError::NotFound(path.to_path_buf()));
    }
    fs::read_to_string(path).map_err(IoError::Io)
}

/// Read and segment a deck file
pub fn load_deck(path: &Path, syntax: &Syntax) -> Result<LoadedDeck, IoError> {
    let source = Rope::from(read_deck_source(path)?);
    let document = parse_document(&source, syntax).map_err(|err| {
        log::warn!(
            "{}: parse stopped at slide {}, line {}",
            path.display(),
            err.slide(),
            err.line()
        );
        IoError::Parse {
            path: path.to_path_buf(),
            source: err,
        }
    })?;
    log::info!("loaded {} slides from {}", document.len(), path.display());

    Ok(LoadedDeck {
        path: path.to_path_buf(),
        source,
        document,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::NamedTempFile;

    fn deck_file(content: &str) -> NamedTempFile {
        let mut file = NamedTempFile::new().unwrap();
        file.write_all(content.as_bytes()).unwrap();
        file
    }

    #[test]
    fn loads_and_segments_deck() {
        let file = deck_file("# Intro\n---\n# Outro\n");

        let deck = load_deck(file.path(), &Syntax::default()).unwrap();

        assert_eq!(deck.document.len(), 2);
        assert_eq!(deck.source.len(), 20);
        assert_eq!(deck.path, file.path());
    }

    #[test]
    fn missing_file_is_not_found() {
        let result = load_deck(Path::new("/this/deck/does/not/exist.md"), &Syntax::default());
        assert!(matches!(result, Err(IoError::NotFound(_))));
    }

    #[test]
    fn parse_errors_carry_the_path() {
        let file = deck_file("```\nnever closed\n");

        let err = load_deck(file.path(), &Syntax::default()).unwrap_err();

        match err {
            IoError::Parse { path, source } => {
                assert_eq!(path, file.path());
                assert_eq!(source, ParseError::UnterminatedFence { slide: 0, line: 1 });
            }
            other => panic!("expected parse error, got {other:?}"),
        }
    }
}
