use std::fmt::Write;

use crate::models::{ContentBlock, Document, MediaEmbed};
use crate::parsing::rope::Span;

/// Renders a document as an indented outline, one node per line.
///
/// Strings are shown with `{:?}` so whitespace inside code blocks stays
/// visible in snapshots.
pub fn describe(doc: &Document) -> String {
    let mut out = String::new();
    for slide in doc {
        let title = match &slide.title {
            Some(t) => format!("{t:?}"),
            None => "-".to_string(),
        };
        let _ = writeln!(out, "slide {} {} title={title}", slide.index, span(slide.span));
        for (key, value) in &slide.directives {
            let _ = writeln!(out, "  directive {key}={value:?}");
        }
        for node in &slide.body {
            let sp = span(node.span);
            match &node.block {
                ContentBlock::Paragraph(text) => {
                    let _ = writeln!(out, "  paragraph {sp} {text:?}");
                }
                ContentBlock::Heading { level, text } => {
                    let _ = writeln!(out, "  heading{level} {sp} {text:?}");
                }
                ContentBlock::CodeBlock { language, text } => {
                    let lang = language.as_deref().unwrap_or("-");
                    let _ = writeln!(out, "  code {lang} {sp} {text:?}");
                }
                ContentBlock::MediaEmbed(media) => {
                    let _ = writeln!(out, "  {} {sp}", media_line(media));
                }
                ContentBlock::List { ordered, items } => {
                    let kind = if *ordered { "ordered" } else { "bullets" };
                    let _ = writeln!(out, "  list {kind} {sp}");
                    for item in items {
                        let _ = writeln!(out, "    {} {:?}", item.depth, item.text);
                    }
                }
            }
        }
        if let Some(notes) = &slide.presenter_notes {
            let _ = writeln!(out, "  notes {notes:?}");
        }
    }
    out
}

fn span(sp: Span) -> String {
    format!("[{}..{}]", sp.start, sp.end)
}

fn media_line(media: &MediaEmbed) -> String {
    let mut line = format!("{} {:?}", media.kind.tag(), media.source);
    for (name, value) in &media.attributes {
        match value {
            Some(v) => {
                let _ = write!(line, " {name}={v:?}");
            }
            None => {
                let _ = write!(line, " {name}");
            }
        }
    }
    line
}
