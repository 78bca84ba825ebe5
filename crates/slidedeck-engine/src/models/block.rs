use std::collections::BTreeMap;

use serde::Serialize;

use crate::parsing::rope::Span;

/// The kind of an embedded media element.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum MediaKind {
    Image,
    Video,
}

impl MediaKind {
    /// The HTML tag name for this kind.
    pub fn tag(self) -> &'static str {
        match self {
            MediaKind::Image => "img",
            MediaKind::Video => "video",
        }
    }
}

/// An image or video embedded in a slide.
///
/// Attributes other than the source are kept as written, in name order.
/// Valueless attributes such as `controls` map to `None`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct MediaEmbed {
    pub kind: MediaKind,
    pub source: String,
    pub attributes: BTreeMap<String, Option<String>>,
}

impl MediaEmbed {
    pub fn attribute(&self, name: &str) -> Option<&str> {
        self.attributes.get(name).and_then(|v| v.as_deref())
    }

    pub fn has_attribute(&self, name: &str) -> bool {
        self.attributes.contains_key(name)
    }
}

/// One entry of a list. `depth` is 0 for top-level items.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ListItem {
    pub depth: u8,
    pub text: String,
}

/// Audience-facing content of a slide body.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub enum ContentBlock {
    /// Consecutive text lines joined with `\n`.
    Paragraph(String),
    /// A heading that is not the slide title.
    Heading { level: u8, text: String },
    /// A fenced block. `text` is every byte between the fence lines.
    CodeBlock {
        language: Option<String>,
        text: String,
    },
    MediaEmbed(MediaEmbed),
    List { ordered: bool, items: Vec<ListItem> },
}

/// A body block together with its byte span in the source.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct BlockNode {
    /// Full byte span of the block including fences and markers.
    pub span: Span,
    pub block: ContentBlock,
}
