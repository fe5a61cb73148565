use std::sync::OnceLock;

use regex::Regex;

/// Styling of an inline run of text
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FragmentKind {
    Plain,
    Bold,
    Italic,
    Code,
    Link,
    Image,
}

/// One inline-styled run of text with its delimiters already stripped.
///
/// Newlines in the content are folded into spaces for every kind except
/// [`FragmentKind::Code`], which keeps its original line structure.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TextFragment {
    content: String,
    kind: FragmentKind,
    target: Option<String>,
}

impl TextFragment {
    pub fn new(content: impl Into<String>, kind: FragmentKind) -> Self {
        Self::with_target(content, kind, None)
    }

    pub fn with_target(content: impl Into<String>, kind: FragmentKind, target: Option<String>) -> Self {
        let content = content.into();
        let content = match kind {
            FragmentKind::Code => content,
            _ => content.replace('\n', " "),
        };
        Self {
            content,
            kind,
            target,
        }
    }

    pub fn plain(content: impl Into<String>) -> Self {
        Self::new(content, FragmentKind::Plain)
    }

    pub fn link(text: impl Into<String>, url: impl Into<String>) -> Self {
        Self::with_target(text, FragmentKind::Link, Some(url.into()))
    }

    pub fn image(alt: impl Into<String>, url: impl Into<String>) -> Self {
        Self::with_target(alt, FragmentKind::Image, Some(url.into()))
    }

    pub fn content(&self) -> &str {
        &self.content
    }

    pub fn kind(&self) -> FragmentKind {
        self.kind
    }

    /// URL of a link or image.
    pub fn target(&self) -> Option<&str> {
        self.target.as_deref()
    }
}

fn image_regex() -> &'static Regex {
    static IMAGE_REGEX: OnceLock<Regex> = OnceLock::new();
    IMAGE_REGEX.get_or_init(|| Regex::new(r"!\[(.*?)\]\((.*?)\)").expect("Invalid image regex"))
}

fn link_regex() -> &'static Regex {
    static LINK_REGEX: OnceLock<Regex> = OnceLock::new();
    LINK_REGEX.get_or_init(|| Regex::new(r"\[(.*?)\]\((.*?)\)").expect("Invalid link regex"))
}

fn extract_pairs(pattern: &Regex, text: &str) -> Vec<(String, String)> {
    pattern
        .captures_iter(text)
        .map(|caps| (caps[1].to_string(), caps[2].to_string()))
        .collect()
}

/// Find every `![alt](url)` in document order.
pub fn extract_images(text: &str) -> Vec<(String, String)> {
    extract_pairs(image_regex(), text)
}

/// Find every `[text](url)` in document order. Images match too, so callers
/// that care must pull images out first.
pub fn extract_links(text: &str) -> Vec<(String, String)> {
    extract_pairs(link_regex(), text)
}

/// Split plain fragments around every match of `pattern`, turning each match
/// into a `kind` fragment targeting the second capture group.
fn split_pattern(fragments: Vec<TextFragment>, pattern: &Regex, kind: FragmentKind) -> Vec<TextFragment> {
    let mut out = Vec::with_capacity(fragments.len());

    for fragment in fragments {
        if fragment.kind != FragmentKind::Plain {
            out.push(fragment);
            continue;
        }

        let text = fragment.content.as_str();
        let mut pieces = Vec::new();
        let mut last = 0;

        for caps in pattern.captures_iter(text) {
            let (Some(whole), Some(label), Some(url)) = (caps.get(0), caps.get(1), caps.get(2)) else {
                continue;
            };
            if whole.start() > last {
                pieces.push(TextFragment::plain(&text[last..whole.start()]));
            }
            pieces.push(TextFragment::with_target(
                label.as_str(),
                kind,
                Some(url.as_str().to_string()),
            ));
            last = whole.end();
        }

        if pieces.is_empty() {
            out.push(fragment);
            continue;
        }
        if last < text.len() {
            pieces.push(TextFragment::plain(&text[last..]));
        }
        out.extend(pieces);
    }

    out
}

pub fn split_images(fragments: Vec<TextFragment>) -> Vec<TextFragment> {
    split_pattern(fragments, image_regex(), FragmentKind::Image)
}

pub fn split_links(fragments: Vec<TextFragment>) -> Vec<TextFragment> {
    split_pattern(fragments, link_regex(), FragmentKind::Link)
}

/// Split plain fragments on `delimiter`. Odd-indexed pieces take `kind`, even
/// ones stay plain, empty pieces are dropped. An unpaired delimiter is not an
/// error: everything after it simply takes the alternate style.
pub fn split_delimiter(fragments: Vec<TextFragment>, delimiter: &str, kind: FragmentKind) -> Vec<TextFragment> {
    let mut out = Vec::with_capacity(fragments.len());

    for fragment in fragments {
        if fragment.kind != FragmentKind::Plain {
            out.push(fragment);
            continue;
        }

        for (index, piece) in fragment.content.split(delimiter).enumerate() {
            if piece.is_empty() {
                continue;
            }
            let piece_kind = if index % 2 == 0 { fragment.kind } else { kind };
            out.push(TextFragment::with_target(piece, piece_kind, fragment.target.clone()));
        }
    }

    out
}

/// Lex inline markdown into a flat list of fragments.
///
/// Passes run in a fixed order: images, links, `**`, `_`, then backticks.
/// Images must go before links since the link pattern also matches the
/// bracketed half of an image.
pub fn lex(text: &str) -> Vec<TextFragment> {
    let fragments = vec![TextFragment::plain(text)];
    let fragments = split_images(fragments);
    let fragments = split_links(fragments);
    let fragments = split_delimiter(fragments, "**", FragmentKind::Bold);
    let fragments = split_delimiter(fragments, "_", FragmentKind::Italic);
    split_delimiter(fragments, "`", FragmentKind::Code)
}
