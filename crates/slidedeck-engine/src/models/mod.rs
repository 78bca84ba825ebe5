pub mod block;
pub mod document;

pub use block::{BlockNode, ContentBlock, ListItem, MediaEmbed, MediaKind};
pub use document::{Document, Slide};
