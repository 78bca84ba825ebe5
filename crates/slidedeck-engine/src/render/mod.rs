//! Collaborators that turn a parsed [`crate::models::Document`] back into text.
//!
//! - **`source`**: lossless re-emission of the deck source
//! - **`html`**: audience-facing HTML; presenter notes are never rendered

pub mod html;
pub mod source;

pub use html::to_html;
pub use source::to_source;
