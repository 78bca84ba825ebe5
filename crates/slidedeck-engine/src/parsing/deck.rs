use crate::models::Slide;

use super::{
    blocks::{SlideBuilder, SlideLineClassifier},
    error::ParseError,
    rope::LineRef,
    syntax::Syntax,
};

/// Accumulator threaded through the single pass over the deck's lines.
///
/// Delimiter lines close the current slide and open the next one; every
/// other line is classified and handed to the current slide.
pub(crate) struct DeckFold<'a> {
    syntax: &'a Syntax,
    classifier: SlideLineClassifier<'a>,
    slides: Vec<Slide>,
    current: SlideBuilder<'a>,
}

impl<'a> DeckFold<'a> {
    pub(crate) fn new(syntax: &'a Syntax) -> Self {
        Self {
            syntax,
            classifier: SlideLineClassifier::new(syntax),
            slides: vec![],
            current: SlideBuilder::new(syntax, 0, 0),
        }
    }

    pub(crate) fn push_line(mut self, lr: LineRef) -> Result<Self, ParseError> {
        if self.syntax.is_delimiter(lr.content()) {
            let next = SlideBuilder::new(self.syntax, self.current.index() + 1, lr.span.end);
            let done = std::mem::replace(&mut self.current, next);
            self.slides.push(done.finish()?);
        } else {
            let class = self.classifier.classify(&lr);
            self.current.push(&class)?;
        }
        Ok(self)
    }

    pub(crate) fn finish(mut self) -> Result<Vec<Slide>, ParseError> {
        self.slides.push(self.current.finish()?);
        Ok(self.slides)
    }
}
