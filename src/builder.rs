use crate::block::{self, Block, BlockKind};
use crate::element::Element;
use crate::error::{Error, Result};
use crate::inline::{self, FragmentKind, TextFragment};

/// Build the element tree for a whole document, rooted at a `div`.
pub fn build(document: &str) -> Result<Element> {
    let mut children = Vec::new();

    for block in block::blocks(document) {
        log::debug!(
            "{:?} block starting {:?}",
            block.kind,
            block.text.lines().next().unwrap_or_default()
        );
        children.push(block_to_element(&block)?);
    }

    Ok(Element::parent("div", children))
}

fn block_to_element(block: &Block) -> Result<Element> {
    let text = block.text.as_str();
    match block.kind {
        BlockKind::Heading { level } => heading(text, level),
        BlockKind::Code => code_block(text),
        BlockKind::Quote => quote(text),
        BlockKind::UnorderedList => list(text, "ul", |_| "- ".to_string()),
        BlockKind::OrderedList => list(text, "ol", block::ordered_marker),
        BlockKind::Paragraph => Ok(Element::parent("p", inline_children(text)?)),
    }
}

/// Convert a lexed fragment into its leaf element.
pub fn fragment_to_element(fragment: &TextFragment) -> Result<Element> {
    let content = fragment.content();
    let element = match fragment.kind() {
        FragmentKind::Plain => Element::text(content),
        FragmentKind::Bold => Element::leaf("b", content),
        FragmentKind::Italic => Element::leaf("i", content),
        FragmentKind::Code => Element::leaf("code", content),
        FragmentKind::Link => Element::leaf("a", content).with_attribute("href", target_of(fragment)?),
        FragmentKind::Image => Element::leaf("img", "")
            .with_attribute("src", target_of(fragment)?)
            .with_attribute("alt", content),
    };
    Ok(element)
}

fn target_of(fragment: &TextFragment) -> Result<&str> {
    fragment
        .target()
        .ok_or_else(|| Error::structural(format!("{:?} fragment has no target", fragment.kind())))
}

fn inline_children(text: &str) -> Result<Vec<Element>> {
    inline::lex(text).iter().map(fragment_to_element).collect()
}

fn heading(text: &str, level: u8) -> Result<Element> {
    // `level` hashes plus the separating space
    let body = text
        .get(level as usize + 1..)
        .ok_or_else(|| Error::structural("heading without text"))?;
    Ok(Element::parent(format!("h{level}"), inline_children(body)?))
}

/// Drop the fence lines and keep everything between them untouched.
fn code_block(text: &str) -> Result<Element> {
    // Split on '\n' only so carriage returns inside the code survive.
    let lines: Vec<&str> = text.split('\n').collect();
    let interior = lines.get(1..lines.len().saturating_sub(1)).unwrap_or(&[]);

    let mut code = interior.join("\n");
    code.push('\n');

    let fragment = TextFragment::new(code, FragmentKind::Code);
    Ok(Element::parent("pre", vec![fragment_to_element(&fragment)?]))
}

fn quote(text: &str) -> Result<Element> {
    let lines = text
        .lines()
        .map(|line| {
            line.strip_prefix("> ")
                .or_else(|| line.strip_prefix('>'))
                .ok_or_else(|| Error::structural(format!("quote line {line:?} lacks '>'")))
        })
        .collect::<Result<Vec<_>>>()?;

    Ok(Element::parent("blockquote", inline_children(&lines.join("\n"))?))
}

/// One `li` per line, each lexed on its own after its marker is stripped.
fn list(text: &str, tag: &str, marker: impl Fn(usize) -> String) -> Result<Element> {
    let items = text
        .lines()
        .enumerate()
        .map(|(i, line)| {
            let marker = marker(i + 1);
            let item = line.strip_prefix(marker.as_str()).ok_or_else(|| {
                Error::structural(format!("list line {} lacks marker {marker:?}", i + 1))
            })?;
            Ok(Element::parent("li", inline_children(item)?))
        })
        .collect::<Result<Vec<_>>>()?;

    Ok(Element::parent(tag, items))
}
