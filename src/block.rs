/// Kind of a block-level construct
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BlockKind {
    Heading { level: u8 },
    Code,
    Quote,
    UnorderedList,
    OrderedList,
    Paragraph,
}

/// A trimmed, non-empty chunk of the source document and its kind
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Block {
    pub text: String,
    pub kind: BlockKind,
}

impl Block {
    pub fn new(text: impl Into<String>) -> Self {
        let text = text.into();
        let kind = classify(&text);
        Self { text, kind }
    }
}

pub(crate) const FENCE: &str = "```";

/// Split a document on blank lines into trimmed, non-empty blocks.
pub fn segment(document: &str) -> Vec<String> {
    document
        .split("\n\n")
        .map(str::trim)
        .filter(|piece| !piece.is_empty())
        .map(str::to_string)
        .collect()
}

/// Segment and classify a whole document.
pub fn blocks(document: &str) -> Vec<Block> {
    segment(document).into_iter().map(Block::new).collect()
}

/// Level of an ATX heading: one to six `#` followed by a space.
pub(crate) fn heading_level(block: &str) -> Option<u8> {
    let hashes = block.bytes().take_while(|&b| b == b'#').count();
    if (1..=6).contains(&hashes) && block[hashes..].starts_with(' ') {
        Some(hashes as u8)
    } else {
        None
    }
}

/// Marker that opens line `index` (1-based) of an ordered list.
pub(crate) fn ordered_marker(index: usize) -> String {
    format!("{index}. ")
}

/// Classify a block. Checks run in precedence order and the first match wins,
/// with paragraph as the fallback.
pub fn classify(block: &str) -> BlockKind {
    if let Some(level) = heading_level(block) {
        return BlockKind::Heading { level };
    }

    if block.starts_with(FENCE) && block.ends_with(FENCE) {
        return BlockKind::Code;
    }

    if block.lines().all(|line| line.starts_with('>')) {
        return BlockKind::Quote;
    }

    if block.lines().all(|line| line.starts_with("- ")) {
        return BlockKind::UnorderedList;
    }

    if block
        .lines()
        .enumerate()
        .all(|(i, line)| line.starts_with(&ordered_marker(i + 1)))
    {
        return BlockKind::OrderedList;
    }

    BlockKind::Paragraph
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use rstest::rstest;

    #[test]
    fn segments_on_blank_lines() {
        let md = "
This is **bolded** paragraph

This is another paragraph with _italic_ text and `code` here
This is the same paragraph on a new line

- This is a list
- with items
";
        assert_eq!(
            segment(md),
            vec![
                "This is **bolded** paragraph",
                "This is another paragraph with _italic_ text and `code` here\nThis is the same paragraph on a new line",
                "- This is a list\n- with items",
            ]
        );
    }

    #[test]
    fn segment_drops_whitespace_only_pieces() {
        assert_eq!(segment("a\n\n   \n\n\n\nb\n\n"), vec!["a", "b"]);
        assert!(segment("").is_empty());
    }

    #[rstest]
    #[case("# h1", BlockKind::Heading { level: 1 })]
    #[case("### This is a heading", BlockKind::Heading { level: 3 })]
    #[case("###### h6", BlockKind::Heading { level: 6 })]
    #[case("####### seven is too many", BlockKind::Paragraph)]
    #[case("#no space", BlockKind::Paragraph)]
    #[case("```\nlet x = 1;\n```", BlockKind::Code)]
    #[case("```inline code block```", BlockKind::Code)]
    #[case("```\nunterminated", BlockKind::Paragraph)]
    #[case("> quoted\n> text", BlockKind::Quote)]
    #[case(">tight\n> loose", BlockKind::Quote)]
    #[case("> quoted\n> text\nbut not this line", BlockKind::Paragraph)]
    #[case("- a bit\n- of text\n- as a list", BlockKind::UnorderedList)]
    #[case("- a bit\n-missing space", BlockKind::Paragraph)]
    #[case("1. one\n2. two\n3. three\n4. four", BlockKind::OrderedList)]
    #[case("1. one\n2. two\n4. four\n3. three", BlockKind::Paragraph)]
    #[case("2. starts late", BlockKind::Paragraph)]
    #[case("just a block of normal\ntext", BlockKind::Paragraph)]
    #[case("```\n- a\n- b\n```", BlockKind::Code)]
    #[case("```\n> q\n```", BlockKind::Code)]
    #[case("```\n1. one\n```", BlockKind::Code)]
    #[case("# 1. x", BlockKind::Heading { level: 1 })]
    #[case("## > not a quote", BlockKind::Heading { level: 2 })]
    #[case("# ```\ncode```", BlockKind::Heading { level: 1 })]
    #[case("> - a\n> - b", BlockKind::Quote)]
    fn classifies_blocks(#[case] block: &str, #[case] expected: BlockKind) {
        assert_eq!(classify(block), expected);
    }

    #[test]
    fn ordered_lists_may_exceed_nine_items() {
        let block = (1..=12)
            .map(|i| format!("{i}. item {i}"))
            .collect::<Vec<_>>()
            .join("\n");
        assert_eq!(classify(&block), BlockKind::OrderedList);
    }

    #[test]
    fn blocks_pairs_text_with_kind() {
        assert_eq!(
            blocks("# Title\n\n- item"),
            vec![
                Block {
                    text: "# Title".to_string(),
                    kind: BlockKind::Heading { level: 1 },
                },
                Block {
                    text: "- item".to_string(),
                    kind: BlockKind::UnorderedList,
                },
            ]
        );
    }
}
