use std::collections::BTreeMap;
use std::sync::OnceLock;

use regex::Regex;

use crate::models::{MediaEmbed, MediaKind};

/// Whole-line media tags: `<img ...>`, `<video ...>` and `![alt](src "title")`.
pub struct Media;

/// Attribute text of a tag; `>` may appear inside quoted values.
const TAG_ATTRS: &str = r#"(?:[^>"']|"[^"]*"|'[^']*')*"#;

fn html_tag_regex() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| {
        Regex::new(&format!(r"(?i)^<(img|video)\b({TAG_ATTRS})>(.*)$"))
            .expect("Invalid media tag regex")
    })
}

fn video_tail_regex() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| {
        Regex::new(&format!(r"(?i)^(?:\s*<source\b{TAG_ATTRS}>)*\s*(?:</video>)?$"))
            .expect("Invalid video tail regex")
    })
}

fn source_tag_regex() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| {
        Regex::new(&format!(r"(?i)<source\b({TAG_ATTRS})>")).expect("Invalid source tag regex")
    })
}

fn attribute_regex() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| {
        Regex::new(
            r#"([A-Za-z_:][-A-Za-z0-9_:.]*)(?:\s*=\s*(?:"([^"]*)"|'([^']*)'|([^\s"'=<>`]+)))?"#,
        )
        .expect("Invalid attribute regex")
    })
}

fn markdown_image_regex() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| {
        Regex::new(r#"^!\[([^\]]*)\]\(\s*([^\s)]+)(?:\s+"([^"]*)")?\s*\)$"#)
            .expect("Invalid markdown image regex")
    })
}

impl Media {
    pub fn parse(line: &str) -> Option<MediaEmbed> {
        let t = line.trim();
        if t.starts_with('<') {
            Self::parse_html(t)
        } else if t.starts_with("![") {
            Self::parse_markdown(t)
        } else {
            None
        }
    }

    fn parse_html(t: &str) -> Option<MediaEmbed> {
        let caps = html_tag_regex().captures(t)?;
        let kind = if caps[1].eq_ignore_ascii_case("img") {
            MediaKind::Image
        } else {
            MediaKind::Video
        };
        let tail = &caps[3];
        let tail_ok = match kind {
            MediaKind::Image => tail.trim().is_empty(),
            MediaKind::Video => video_tail_regex().is_match(tail),
        };
        if !tail_ok {
            return None;
        }

        let mut attributes = Self::attributes(caps[2].trim_end().trim_end_matches('/'));
        let source = match attributes.remove("src").flatten() {
            Some(src) => src,
            None if kind == MediaKind::Video => source_tag_regex()
                .captures_iter(tail)
                .find_map(|c| Self::attributes(&c[1]).remove("src").flatten())?,
            None => return None,
        };

        Some(MediaEmbed {
            kind,
            source,
            attributes,
        })
    }

    fn parse_markdown(t: &str) -> Option<MediaEmbed> {
        let caps = markdown_image_regex().captures(t)?;
        let mut attributes = BTreeMap::new();
        attributes.insert("alt".to_string(), Some(caps[1].to_string()));
        if let Some(title) = caps.get(3) {
            attributes.insert("title".to_string(), Some(title.as_str().to_string()));
        }
        Some(MediaEmbed {
            kind: MediaKind::Image,
            source: caps[2].to_string(),
            attributes,
        })
    }

    /// Parses an HTML attribute list. Later duplicates win.
    fn attributes(s: &str) -> BTreeMap<String, Option<String>> {
        attribute_regex()
            .captures_iter(s)
            .map(|c| {
                let value = c
                    .get(2)
                    .or_else(|| c.get(3))
                    .or_else(|| c.get(4))
                    .map(|m| m.as_str().to_string());
                (c[1].to_string(), value)
            })
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn image_tag_with_size() {
        let m = Media::parse(r#"<img src="img/edit_mode.png" width="600">"#).unwrap();
        assert_eq!(m.kind, MediaKind::Image);
        assert_eq!(m.source, "img/edit_mode.png");
        assert_eq!(m.attribute("width"), Some("600"));
        assert!(!m.has_attribute("src"));
    }

    #[test]
    fn self_closing_image_with_unquoted_and_single_quoted_values() {
        let m = Media::parse("<img src=logo.svg alt='Logo' height=40 />").unwrap();
        assert_eq!(m.source, "logo.svg");
        assert_eq!(m.attribute("alt"), Some("Logo"));
        assert_eq!(m.attribute("height"), Some("40"));
        assert_eq!(m.attributes.len(), 2);
    }

    #[test]
    fn video_with_valueless_controls() {
        let m = Media::parse(r#"<video src="demo.webm" width="800" controls></video>"#).unwrap();
        assert_eq!(m.kind, MediaKind::Video);
        assert_eq!(m.source, "demo.webm");
        assert!(m.has_attribute("controls"));
        assert_eq!(m.attributes.get("controls"), Some(&None));
    }

    #[test]
    fn video_source_from_child_tag() {
        let m = Media::parse(r#"<video controls><source src="clip.mp4" type="video/mp4"></video>"#)
            .unwrap();
        assert_eq!(m.source, "clip.mp4");
        assert!(m.has_attribute("controls"));
    }

    #[test]
    fn quoted_values_may_contain_angle_brackets() {
        let m = Media::parse(r#"<img alt="a > b" src="img/cmp.png" title='x>y'>"#).unwrap();
        assert_eq!(m.source, "img/cmp.png");
        assert_eq!(m.attribute("alt"), Some("a > b"));
        assert_eq!(m.attribute("title"), Some("x>y"));

        let v = Media::parse(r#"<video controls><source src="a.mp4" title="1 > 0"></video>"#)
            .unwrap();
        assert_eq!(v.source, "a.mp4");
    }

    #[test]
    fn unknown_attributes_are_kept() {
        let m = Media::parse(r#"<img src="a.png" data-zoom="2" loading=lazy>"#).unwrap();
        assert_eq!(m.attribute("data-zoom"), Some("2"));
        assert_eq!(m.attribute("loading"), Some("lazy"));
    }

    #[test]
    fn markdown_image_with_title() {
        let m = Media::parse(r#"![Admin screen](img/admin.png "The admin")"#).unwrap();
        assert_eq!(m.kind, MediaKind::Image);
        assert_eq!(m.source, "img/admin.png");
        assert_eq!(m.attribute("alt"), Some("Admin screen"));
        assert_eq!(m.attribute("title"), Some("The admin"));
    }

    #[test]
    fn not_media() {
        assert_eq!(Media::parse("<img width=3>"), None);
        assert_eq!(Media::parse("<img src=a.png> and some text"), None);
        assert_eq!(Media::parse("<div class=x>"), None);
        assert_eq!(Media::parse("see ![inline](a.png) here"), None);
        assert_eq!(Media::parse("plain"), None);
    }
}
