//! # slidedeck-engine
//!
//! Segments landslide-style markdown decks into an immutable slide model.
//!
//! ```
//! use slidedeck_engine::{ContentBlock, parse_str};
//!
//! let doc = parse_str("# A\nfoo\n---\n# B\nbar").unwrap();
//!
//! assert_eq!(doc.len(), 2);
//! assert_eq!(doc.slides[1].title.as_deref(), Some("B"));
//! assert_eq!(
//!     doc.slides[0].blocks().next(),
//!     Some(&ContentBlock::Paragraph("foo".into()))
//! );
//! ```

pub mod io;
pub mod models;
pub mod parsing;
pub mod render;

// Re-export key types for easier usage
pub use io::{IoError, LoadedDeck, load_deck, read_deck_source};
pub use models::*;
pub use parsing::{ParseError, Syntax, parse_document, parse_str};
pub use render::{to_html, to_source};
