use std::collections::BTreeMap;

use crate::models::{BlockNode, ContentBlock, ListItem, Slide};
use crate::parsing::{error::ParseError, rope::span::Span, syntax::Syntax};

use super::{
    classify::{LineClass, LineKind},
    kinds::{CodeFence, FenceSig, ListMarker, PresenterNotes},
};

#[derive(Debug)]
enum LeafState {
    None,
    Paragraph {
        start: Span,
        lines: Vec<String>,
        last: Span,
    },
    Fence {
        sig: FenceSig,
        start: Span,
        opened_at: usize,
        text: String,
    },
    List {
        ordered: bool,
        start: Span,
        last: Span,
        /// Marker indents of the open nesting levels, outermost first.
        indents: Vec<usize>,
        items: Vec<ListItem>,
        blank_pending: bool,
    },
}

/// Folds the classified lines of one segment into a [`Slide`].
pub struct SlideBuilder<'a> {
    syntax: &'a Syntax,
    index: usize,
    span: Span,
    title: Option<String>,
    directives: BTreeMap<String, String>,
    notes: PresenterNotes,
    /// Fence opened inside the notes section, with its line number.
    notes_fence: Option<(FenceSig, usize)>,
    leaf: LeafState,
    out: Vec<BlockNode>,
}

impl<'a> SlideBuilder<'a> {
    /// Starts slide `index` whose segment begins at byte `start`.
    pub fn new(syntax: &'a Syntax, index: usize, start: usize) -> Self {
        Self {
            syntax,
            index,
            span: Span::empty(start),
            title: None,
            directives: BTreeMap::new(),
            notes: PresenterNotes::default(),
            notes_fence: None,
            leaf: LeafState::None,
            out: vec![],
        }
    }

    pub fn index(&self) -> usize {
        self.index
    }

    pub fn push(&mut self, c: &LineClass) -> Result<(), ParseError> {
        self.span.end = c.line.end;

        if self.in_fence() {
            self.consume_fence_line(c);
            return Ok(());
        }

        if self.notes.in_section {
            self.track_notes_fence(c)?;
            self.notes.push(&c.text);
            return Ok(());
        }

        // Precedence: fence beats everything else.
        if let Some(sig) = &c.fence_sig {
            self.check_opener(sig, c.number)?;
            self.flush_leaf();
            self.leaf = LeafState::Fence {
                sig: sig.clone(),
                start: c.line,
                opened_at: c.number,
                text: String::new(),
            };
            return Ok(());
        }

        match &c.kind {
            LineKind::Blank => self.on_blank(),
            LineKind::Heading { level, text } => {
                self.flush_leaf();
                self.on_heading(*level, text, c.line);
            }
            LineKind::Directive { key, value } => {
                self.flush_leaf();
                self.on_directive(key, value);
            }
            LineKind::Media(media) => {
                self.flush_leaf();
                self.out.push(BlockNode {
                    span: c.line,
                    block: ContentBlock::MediaEmbed(media.clone()),
                });
            }
            LineKind::ListItem(marker) => self.on_list_item(marker, c.line),
            LineKind::Text => self.on_text(c),
        }
        Ok(())
    }

    pub fn finish(mut self) -> Result<Slide, ParseError> {
        if let LeafState::Fence { opened_at, .. } = self.leaf {
            return Err(ParseError::UnterminatedFence {
                slide: self.index,
                line: opened_at,
            });
        }
        if let Some((_, opened_at)) = self.notes_fence {
            return Err(ParseError::UnterminatedFence {
                slide: self.index,
                line: opened_at,
            });
        }
        self.flush_leaf();

        Ok(Slide {
            index: self.index,
            span: self.span,
            title: self.title,
            body: self.out,
            directives: self.directives,
            presenter_notes: self.notes.finish(),
        })
    }

    fn check_opener(&self, sig: &FenceSig, line: usize) -> Result<(), ParseError> {
        match sig.malformed_reason() {
            Some(reason) => Err(ParseError::MalformedFence {
                slide: self.index,
                line,
                reason: reason.to_string(),
            }),
            None => Ok(()),
        }
    }

    /// Notes are kept verbatim, but their fences must still be balanced.
    fn track_notes_fence(&mut self, c: &LineClass) -> Result<(), ParseError> {
        let closed = self
            .notes_fence
            .as_ref()
            .map(|(open, _)| CodeFence::closes(open, c.fence_sig.as_ref()));
        match (closed, &c.fence_sig) {
            (Some(true), _) => self.notes_fence = None,
            (None, Some(sig)) => {
                self.check_opener(sig, c.number)?;
                self.notes_fence = Some((sig.clone(), c.number));
            }
            _ => {}
        }
        Ok(())
    }

    fn in_fence(&self) -> bool {
        matches!(self.leaf, LeafState::Fence { .. })
    }

    fn consume_fence_line(&mut self, c: &LineClass) {
        let LeafState::Fence { sig, text, .. } = &mut self.leaf else {
            return;
        };

        if !CodeFence::closes(sig, c.fence_sig.as_ref()) {
            text.push_str(&c.raw);
            return;
        }

        if let LeafState::Fence {
            sig, start, text, ..
        } = std::mem::replace(&mut self.leaf, LeafState::None)
        {
            self.out.push(BlockNode {
                span: start.cover(c.line),
                block: ContentBlock::CodeBlock {
                    language: sig.language(),
                    text,
                },
            });
        }
    }

    fn on_blank(&mut self) {
        match &mut self.leaf {
            LeafState::List { blank_pending, .. } => *blank_pending = true,
            _ => self.flush_leaf(),
        }
    }

    fn on_heading(&mut self, level: u8, text: &str, line: Span) {
        if self.syntax.is_notes_heading(text) {
            self.notes.in_section = true;
        } else if self.title.is_none() {
            self.title = Some(text.to_string());
        } else {
            self.out.push(BlockNode {
                span: line,
                block: ContentBlock::Heading {
                    level,
                    text: text.to_string(),
                },
            });
        }
    }

    fn on_directive(&mut self, key: &str, value: &str) {
        if self.syntax.is_notes_directive(key) {
            self.notes.push(value);
            return;
        }
        log::debug!("slide {}: directive {key}={value:?}", self.index);
        match self.directives.get_mut(key) {
            Some(existing) if existing.is_empty() => *existing = value.to_string(),
            Some(existing) if !value.is_empty() => {
                existing.push(' ');
                existing.push_str(value);
            }
            Some(_) => {}
            None => {
                self.directives.insert(key.to_string(), value.to_string());
            }
        }
    }

    fn on_list_item(&mut self, marker: &ListMarker, line: Span) {
        if let LeafState::List {
            ordered,
            last,
            indents,
            items,
            blank_pending,
            ..
        } = &mut self.leaf
        {
            let base = indents[0];
            if *ordered == marker.ordered || marker.indent > base {
                while indents.len() > 1 && marker.indent < indents[indents.len() - 1] {
                    indents.pop();
                }
                if marker.indent > indents[indents.len() - 1] {
                    indents.push(marker.indent);
                }
                items.push(ListItem {
                    depth: (indents.len() - 1).min(u8::MAX as usize) as u8,
                    text: marker.text.clone(),
                });
                *last = line;
                *blank_pending = false;
                return;
            }
        }

        self.flush_leaf();
        self.leaf = LeafState::List {
            ordered: marker.ordered,
            start: line,
            last: line,
            indents: vec![marker.indent],
            items: vec![ListItem {
                depth: 0,
                text: marker.text.clone(),
            }],
            blank_pending: false,
        };
    }

    fn on_text(&mut self, c: &LineClass) {
        if let LeafState::List {
            last,
            indents,
            items,
            blank_pending,
            ..
        } = &mut self.leaf
        {
            let continues = !*blank_pending || c.indent > indents[0];
            if continues && let Some(item) = items.last_mut() {
                item.text.push_str(if *blank_pending { "\n\n" } else { "\n" });
                item.text.push_str(c.text.trim());
                *last = c.line;
                *blank_pending = false;
                return;
            }
        }
        self.extend_paragraph(c);
    }

    fn extend_paragraph(&mut self, c: &LineClass) {
        if let LeafState::Paragraph { lines, last, .. } = &mut self.leaf {
            lines.push(c.text.clone());
            *last = c.line;
            return;
        }
        self.flush_leaf();
        self.leaf = LeafState::Paragraph {
            start: c.line,
            lines: vec![c.text.clone()],
            last: c.line,
        };
    }

    fn flush_leaf(&mut self) {
        let prev = std::mem::replace(&mut self.leaf, LeafState::None);
        match prev {
            LeafState::None => {}
            LeafState::Paragraph { start, lines, last } => self.out.push(BlockNode {
                span: start.cover(last),
                block: ContentBlock::Paragraph(lines.join("\n")),
            }),
            LeafState::List {
                ordered,
                start,
                last,
                items,
                ..
            } => self.out.push(BlockNode {
                span: start.cover(last),
                block: ContentBlock::List { ordered, items },
            }),
            fence @ LeafState::Fence { .. } => self.leaf = fence, // fences only close on their closer
        }
    }
}
