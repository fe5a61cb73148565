use crate::error::{Error, Result};

/// Insertion-ordered HTML attributes
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Attributes(Vec<(String, String)>);

impl Attributes {
    pub fn new() -> Self {
        Self::default()
    }

    /// Set `key`, keeping its original position if it was already present.
    pub fn insert(&mut self, key: impl Into<String>, value: impl Into<String>) {
        let key = key.into();
        let value = value.into();
        match self.0.iter_mut().find(|(k, _)| *k == key) {
            Some(entry) => entry.1 = value,
            None => self.0.push((key, value)),
        }
    }

    pub fn get(&self, key: &str) -> Option<&str> {
        self.0
            .iter()
            .find(|(k, _)| k == key)
            .map(|(_, v)| v.as_str())
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.0.iter().map(|(k, v)| (k.as_str(), v.as_str()))
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Render as ` key="value"` pairs. Values are emitted as-is; this is not
    /// a sanitiser.
    pub fn to_html(&self) -> String {
        let mut out = String::new();
        for (key, value) in self.iter() {
            out.push(' ');
            out.push_str(key);
            out.push_str("=\"");
            out.push_str(value);
            out.push('"');
        }
        out
    }
}

impl<K: Into<String>, V: Into<String>> FromIterator<(K, V)> for Attributes {
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        let mut attributes = Attributes::new();
        for (key, value) in iter {
            attributes.insert(key, value);
        }
        attributes
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Node {
    /// Text, or a single styled span when tagged
    Leaf { tag: Option<String>, value: String },
    Parent { tag: String, children: Vec<Element> },
}

/// A node of the output document tree
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Element {
    pub node: Node,
    pub attributes: Attributes,
}

impl Element {
    /// Untagged leaf, rendered verbatim.
    pub fn text(value: impl Into<String>) -> Self {
        Self::from_node(Node::Leaf {
            tag: None,
            value: value.into(),
        })
    }

    pub fn leaf(tag: impl Into<String>, value: impl Into<String>) -> Self {
        Self::from_node(Node::Leaf {
            tag: Some(tag.into()),
            value: value.into(),
        })
    }

    pub fn parent(tag: impl Into<String>, children: Vec<Element>) -> Self {
        Self::from_node(Node::Parent {
            tag: tag.into(),
            children,
        })
    }

    fn from_node(node: Node) -> Self {
        Self {
            node,
            attributes: Attributes::new(),
        }
    }

    pub fn with_attribute(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.attributes.insert(key, value);
        self
    }

    pub fn tag(&self) -> Option<&str> {
        match &self.node {
            Node::Leaf { tag, .. } => tag.as_deref(),
            Node::Parent { tag, .. } => Some(tag),
        }
    }

    pub fn children(&self) -> &[Element] {
        match &self.node {
            Node::Leaf { .. } => &[],
            Node::Parent { children, .. } => children,
        }
    }

    /// Serialize this element and everything below it.
    pub fn to_html(&self) -> Result<String> {
        let mut out = String::new();
        self.write_html(&mut out)?;
        Ok(out)
    }

    /// Serialize only the children, concatenated.
    pub fn inner_html(&self) -> Result<String> {
        let mut out = String::new();
        for child in self.children() {
            child.write_html(&mut out)?;
        }
        Ok(out)
    }

    fn write_html(&self, out: &mut String) -> Result<()> {
        match &self.node {
            Node::Leaf { tag: None, value } => {
                out.push_str(value);
            }
            Node::Leaf {
                tag: Some(tag),
                value,
            } => {
                if tag.is_empty() {
                    return Err(Error::structural("leaf element has an empty tag"));
                }
                open_tag(tag, &self.attributes, out);
                out.push_str(value);
                close_tag(tag, out);
            }
            Node::Parent { tag, children } => {
                if tag.is_empty() {
                    return Err(Error::structural("parent element requires a tag"));
                }
                open_tag(tag, &self.attributes, out);
                for child in children {
                    child.write_html(out)?;
                }
                close_tag(tag, out);
            }
        }
        Ok(())
    }
}

fn open_tag(tag: &str, attributes: &Attributes, out: &mut String) {
    out.push('<');
    out.push_str(tag);
    if !attributes.is_empty() {
        out.push_str(&attributes.to_html());
    }
    out.push('>');
}

fn close_tag(tag: &str, out: &mut String) {
    out.push_str("</");
    out.push_str(tag);
    out.push('>');
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn attributes_render_in_insertion_order() {
        let attributes: Attributes = [("href", "https://www.google.com"), ("target", "_blank")]
            .into_iter()
            .collect();
        assert_eq!(
            attributes.to_html(),
            " href=\"https://www.google.com\" target=\"_blank\""
        );
        assert_eq!(Attributes::new().to_html(), "");
    }

    #[test]
    fn attribute_reinsert_keeps_position() {
        let mut attributes = Attributes::new();
        attributes.insert("src", "a.png");
        attributes.insert("alt", "a");
        attributes.insert("src", "b.png");
        assert_eq!(attributes.to_html(), " src=\"b.png\" alt=\"a\"");
        assert_eq!(attributes.get("src"), Some("b.png"));
    }

    #[test]
    fn attribute_values_are_not_escaped() {
        let leaf = Element::leaf("a", "x").with_attribute("title", "say \"hi\"");
        assert_eq!(leaf.to_html().unwrap(), "<a title=\"say \"hi\"\">x</a>");
    }

    #[test]
    fn text_leaf_is_verbatim() {
        assert_eq!(Element::text("a <b> & c").to_html().unwrap(), "a <b> & c");
    }

    #[test]
    fn tagged_leaf() {
        assert_eq!(
            Element::leaf("p", "Hello, world!").to_html().unwrap(),
            "<p>Hello, world!</p>"
        );
        assert_eq!(
            Element::leaf("a", "Click me!")
                .with_attribute("href", "https://www.google.com")
                .to_html()
                .unwrap(),
            "<a href=\"https://www.google.com\">Click me!</a>"
        );
    }

    #[test]
    fn parent_with_children() {
        let parent = Element::parent("div", vec![Element::leaf("span", "child")]);
        assert_eq!(parent.to_html().unwrap(), "<div><span>child</span></div>");
    }

    #[test]
    fn parent_with_grandchildren() {
        let child = Element::parent("span", vec![Element::leaf("b", "grandchild")]);
        let parent = Element::parent("div", vec![child]);
        assert_eq!(
            parent.to_html().unwrap(),
            "<div><span><b>grandchild</b></span></div>"
        );
        assert_eq!(parent.inner_html().unwrap(), "<span><b>grandchild</b></span>");
    }

    #[test]
    fn parent_attributes_are_rendered() {
        let parent = Element::parent("div", vec![Element::text("x")]).with_attribute("class", "note");
        assert_eq!(parent.to_html().unwrap(), "<div class=\"note\">x</div>");
    }

    #[test]
    fn empty_parent_renders_open_and_close() {
        assert_eq!(Element::parent("ul", Vec::new()).to_html().unwrap(), "<ul></ul>");
    }

    #[test]
    fn empty_tags_are_structural_errors() {
        let err = Element::parent("", vec![Element::text("x")]).to_html().unwrap_err();
        assert!(matches!(err, Error::Structural(_)));

        let nested = Element::parent("div", vec![Element::leaf("", "x")]);
        assert!(matches!(nested.to_html(), Err(Error::Structural(_))));
    }
}
