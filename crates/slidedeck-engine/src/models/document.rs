use std::collections::BTreeMap;

use serde::Serialize;

use super::block::{BlockNode, ContentBlock};
use crate::parsing::rope::Span;

/// A parsed slide deck. Slides are kept in presentation order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Document {
    pub slides: Vec<Slide>,
    /// The delimiter the deck was segmented on.
    pub delimiter: String,
}

impl Document {
    pub fn len(&self) -> usize {
        self.slides.len()
    }

    pub fn is_empty(&self) -> bool {
        self.slides.is_empty()
    }

    pub fn get(&self, index: usize) -> Option<&Slide> {
        self.slides.get(index)
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Slide> {
        self.slides.iter()
    }

    /// Titles of all slides, `None` for untitled ones.
    pub fn titles(&self) -> Vec<Option<&str>> {
        self.slides.iter().map(|s| s.title.as_deref()).collect()
    }
}

impl<'a> IntoIterator for &'a Document {
    type Item = &'a Slide;
    type IntoIter = std::slice::Iter<'a, Slide>;

    fn into_iter(self) -> Self::IntoIter {
        self.slides.iter()
    }
}

/// One displayed unit of the deck.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Slide {
    /// 0-based position in the deck.
    pub index: usize,
    /// Byte span of the slide's segment, delimiter lines excluded.
    pub span: Span,
    pub title: Option<String>,
    pub body: Vec<BlockNode>,
    /// Display directives such as `fx`, in key order.
    pub directives: BTreeMap<String, String>,
    /// Text shown only to the presenter.
    pub presenter_notes: Option<String>,
}

impl Slide {
    /// Body content without spans.
    pub fn blocks(&self) -> impl Iterator<Item = &ContentBlock> {
        self.body.iter().map(|n| &n.block)
    }

    pub fn directive(&self, key: &str) -> Option<&str> {
        self.directives.get(key).map(String::as_str)
    }
}
