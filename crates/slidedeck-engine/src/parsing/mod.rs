pub mod blocks;
pub mod error;
pub mod rope;
pub mod snapshot;
pub mod syntax;

mod deck;

use xi_rope::Rope;

use crate::models::Document;
use deck::DeckFold;
use rope::lines_with_spans;

pub use error::ParseError;
pub use syntax::Syntax;

/// Segments a deck into slides in one pass over its lines.
///
/// An empty source has no slides; otherwise there is one slide more than
/// there are delimiter lines.
pub fn parse_document(rope: &Rope, syntax: &Syntax) -> Result<Document, ParseError> {
    let slides = if rope.len() == 0 {
        vec![]
    } else {
        lines_with_spans(rope)
            .try_fold(DeckFold::new(syntax), DeckFold::push_line)?
            .finish()?
    };
    log::debug!(
        "segmented {} bytes into {} slides on {:?}",
        rope.len(),
        slides.len(),
        syntax.delimiter
    );

    Ok(Document {
        slides,
        delimiter: syntax.delimiter.clone(),
    })
}

/// Convenience: parse a string with the default landslide syntax.
pub fn parse_str(text: &str) -> Result<Document, ParseError> {
    parse_document(&Rope::from(text), &Syntax::default())
}
