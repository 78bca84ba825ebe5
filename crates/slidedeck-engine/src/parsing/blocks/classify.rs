use crate::models::MediaEmbed;
use crate::parsing::{
    rope::{lines::LineRef, span::Span},
    syntax::Syntax,
};

use super::kinds::{CodeFence, Directive, FenceSig, Heading, List, ListMarker, Media};

/// What a line is, judged without looking at its neighbours.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LineKind {
    Blank,
    Heading { level: u8, text: String },
    Directive { key: String, value: String },
    ListItem(ListMarker),
    Media(MediaEmbed),
    Text,
}

/// Classification of a single line containing only local facts.
///
/// This is the first phase of slide parsing: each line is classified
/// independently, then [`super::SlideBuilder`] folds the classes into a slide.
#[derive(Debug, Clone)]
pub struct LineClass {
    /// Full byte span of this line in the rope.
    pub line: Span,
    /// 1-based document line number.
    pub number: usize,
    /// Line text including its line ending, for raw zones.
    pub raw: String,
    /// Line text without its line ending.
    pub text: String,
    /// Leading columns of whitespace.
    pub indent: usize,
    /// If the line looks like a fence opener/closer.
    pub fence_sig: Option<FenceSig>,
    pub kind: LineKind,
}

/// Classifies individual lines of a slide segment.
pub struct SlideLineClassifier<'a> {
    syntax: &'a Syntax,
}

impl<'a> SlideLineClassifier<'a> {
    pub fn new(syntax: &'a Syntax) -> Self {
        Self { syntax }
    }

    /// Classifies a line into a [`LineClass`].
    ///
    /// Precedence: blank, directive, heading, list item, media, text. The
    /// fence signature is recorded independently because inside a fence
    /// only closers matter.
    pub fn classify(&self, lr: &LineRef) -> LineClass {
        let text = lr.content();
        let body = text.trim_start_matches([' ', '\t']);
        let indent = List::columns(&text[..text.len() - body.len()]);

        LineClass {
            line: lr.span,
            number: lr.number,
            raw: lr.text.clone(),
            text: text.to_string(),
            indent,
            fence_sig: CodeFence::sig(text),
            kind: self.kind(text),
        }
    }

    fn kind(&self, text: &str) -> LineKind {
        if text.trim().is_empty() {
            return LineKind::Blank;
        }
        if let Some((key, value)) = Directive::parse(&self.syntax.directive_prefix, text) {
            return LineKind::Directive { key, value };
        }
        if let Some((level, text)) = Heading::parse(text) {
            return LineKind::Heading { level, text };
        }
        if let Some(marker) = List::parse(text) {
            return LineKind::ListItem(marker);
        }
        if let Some(media) = Media::parse(text) {
            return LineKind::Media(media);
        }
        LineKind::Text
    }
}
