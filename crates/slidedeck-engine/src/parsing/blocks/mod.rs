//! # Slide Body Parsing
//!
//! Two-phase parsing of a single slide segment.
//!
//! ## Parsing Phases
//!
//! 1. **Line Classification** (`classify`): Each line is classified into a `LineClass`
//!    containing local facts (blank status, heading, directive, list marker,
//!    media tag, fence signature)
//!
//! 2. **Slide Construction** (`builder`): A `SlideBuilder` folds the classes of one
//!    segment into a `Slide`, emitting `BlockNode`s as leaf blocks open and close
//!
//! ## Modules
//!
//! - **`kinds`**: Line-level syntax, each kind owning its own delimiters
//!   (CodeFence, Heading, Directive, List, Media, PresenterNotes)
//! - **`classify`**: `SlideLineClassifier` produces `LineClass` for each line
//! - **`builder`**: `SlideBuilder` state machine for slide construction
//!
//! ## Key Invariants
//!
//! - Fenced code blocks are raw zones: their bytes are kept verbatim and no
//!   heading, directive or media recognition happens inside them
//! - Everything after the presenter notes heading is notes, never body
//! - All block nodes store byte spans into the rope

pub mod builder;
pub mod classify;
pub mod kinds;

pub use builder::SlideBuilder;
pub use classify::{LineClass, LineKind, SlideLineClassifier};
