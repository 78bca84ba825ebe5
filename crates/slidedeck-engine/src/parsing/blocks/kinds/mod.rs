pub mod code_fence;
pub mod directive;
pub mod heading;
pub mod list;
pub mod media;
pub mod notes;

pub use code_fence::{CodeFence, FenceKind, FenceSig};
pub use directive::Directive;
pub use heading::Heading;
pub use list::{List, ListMarker};
pub use media::Media;
pub use notes::PresenterNotes;
