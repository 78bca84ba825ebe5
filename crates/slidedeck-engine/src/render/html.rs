use std::fmt::Write;

use html_escape::{encode_double_quoted_attribute, encode_text};
use pulldown_cmark::{Parser, html::push_html};

use crate::models::{ContentBlock, Document, ListItem, MediaEmbed, MediaKind, Slide};

/// Directive whose value is a list of CSS classes for the slide.
pub const FX_DIRECTIVE: &str = "fx";

/// Renders the audience-facing view of a deck, one `<section>` per slide.
///
/// `fx` values become classes, other directives become `data-*`
/// attributes. Presenter notes are left out.
pub fn to_html(doc: &Document) -> String {
    let mut out = String::new();
    for slide in doc {
        render_slide(&mut out, slide);
    }
    out
}

fn render_slide(out: &mut String, slide: &Slide) {
    let mut classes = vec!["slide"];
    if let Some(fx) = slide.directive(FX_DIRECTIVE) {
        classes.extend(fx.split_whitespace());
    }
    let _ = write!(
        out,
        "<section class=\"{}\" data-index=\"{}\"",
        encode_double_quoted_attribute(&classes.join(" ")),
        slide.index
    );
    for (key, value) in &slide.directives {
        if key != FX_DIRECTIVE {
            let _ = write!(out, " data-{key}=\"{}\"", encode_double_quoted_attribute(value));
        }
    }
    out.push_str(">\n");

    if let Some(title) = &slide.title {
        let _ = writeln!(out, "<h1>{}</h1>", encode_text(title));
    }
    for block in slide.blocks() {
        render_block(out, block);
    }
    out.push_str("</section>\n");
}

fn render_block(out: &mut String, block: &ContentBlock) {
    match block {
        ContentBlock::Paragraph(text) => push_html(out, Parser::new(text)),
        ContentBlock::Heading { level, text } => {
            let _ = writeln!(out, "<h{level}>{}</h{level}>", encode_text(text));
        }
        ContentBlock::CodeBlock { language, text } => {
            match language {
                Some(lang) => {
                    let _ = write!(
                        out,
                        "<pre><code class=\"language-{}\">",
                        encode_double_quoted_attribute(lang)
                    );
                }
                None => out.push_str("<pre><code>"),
            }
            out.push_str(&encode_text(text));
            out.push_str("</code></pre>\n");
        }
        ContentBlock::MediaEmbed(media) => render_media(out, media),
        ContentBlock::List { ordered, items } => render_list(out, *ordered, items),
    }
}

fn render_media(out: &mut String, media: &MediaEmbed) {
    let _ = write!(
        out,
        "<{} src=\"{}\"",
        media.kind.tag(),
        encode_double_quoted_attribute(&media.source)
    );
    for (name, value) in &media.attributes {
        match value {
            Some(v) => {
                let _ = write!(out, " {name}=\"{}\"", encode_double_quoted_attribute(v));
            }
            None => {
                let _ = write!(out, " {name}");
            }
        }
    }
    match media.kind {
        MediaKind::Image => out.push_str(">\n"),
        MediaKind::Video => out.push_str("></video>\n"),
    }
}

/// Nested items open a child list inside the previous `<li>`.
fn render_list(out: &mut String, ordered: bool, items: &[ListItem]) {
    let tag = if ordered { "ol" } else { "ul" };
    let _ = writeln!(out, "<{tag}>");
    let mut depth = 0u8;
    for (i, item) in items.iter().enumerate() {
        if i > 0 {
            if item.depth > depth {
                let _ = writeln!(out, "\n<{tag}>");
            } else {
                out.push_str("</li>\n");
                for _ in item.depth..depth {
                    let _ = writeln!(out, "</{tag}>\n</li>");
                }
            }
        }
        depth = item.depth;
        let _ = write!(out, "<li>{}", inline_html(&item.text));
    }
    if !items.is_empty() {
        out.push_str("</li>\n");
        for _ in 0..depth {
            let _ = writeln!(out, "</{tag}>\n</li>");
        }
    }
    let _ = writeln!(out, "</{tag}>");
}

/// Markdown rendered without the wrapping paragraph.
fn inline_html(text: &str) -> String {
    let mut html = String::new();
    push_html(&mut html, Parser::new(text));
    let trimmed = html.trim_end();
    match trimmed
        .strip_prefix("<p>")
        .and_then(|s| s.strip_suffix("</p>"))
    {
        Some(inner) if !inner.contains("<p>") => inner.to_string(),
        _ => trimmed.to_string(),
    }
}
