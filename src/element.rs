//! The output tree: elements with optional attributes and optional content.

/// Ordered attribute list; insertion order is the output order.
pub type Attributes = Vec<(String, String)>;

/// A child of an [`Element`]
#[derive(Debug, Clone, PartialEq)]
pub enum Node {
    /// Literal text, already escaped where required
    Text(String),
    /// A nested element
    Element(Element),
}

impl From<Element> for Node {
    fn from(element: Element) -> Self {
        Node::Element(element)
    }
}

impl From<String> for Node {
    fn from(text: String) -> Self {
        Node::Text(text)
    }
}

impl From<&str> for Node {
    fn from(text: &str) -> Self {
        Node::Text(text.to_string())
    }
}

/// A markup element.
///
/// `content: None` serializes as a self-closing tag; `Some(vec![])` still
/// produces an open/close pair.
#[derive(Debug, Clone, PartialEq)]
pub struct Element {
    /// Tag name, possibly namespace-prefixed (`atom:link`)
    pub name: String,
    pub attributes: Option<Attributes>,
    pub content: Option<Vec<Node>>,
}

impl Element {
    pub fn new(
        name: impl Into<String>,
        attributes: Option<Attributes>,
        content: Option<Vec<Node>>,
    ) -> Self {
        Self {
            name: name.into(),
            attributes,
            content,
        }
    }

    /// An element with neither attributes nor content
    pub fn empty(name: impl Into<String>) -> Self {
        Self::new(name, None, None)
    }

    /// An element holding a single text node
    pub fn with_text(name: impl Into<String>, text: impl Into<String>) -> Self {
        Self::new(name, None, Some(vec![Node::Text(text.into())]))
    }

    /// Looks up an attribute value by name
    pub fn attribute(&self, name: &str) -> Option<&str> {
        self.attributes
            .as_ref()?
            .iter()
            .find(|(key, _)| key == name)
            .map(|(_, value)| value.as_str())
    }

    /// Child elements, skipping text nodes
    pub fn children(&self) -> impl Iterator<Item = &Element> {
        self.content.iter().flatten().filter_map(|node| match node {
            Node::Element(element) => Some(element),
            Node::Text(_) => None,
        })
    }

    /// First child element with the given name
    pub fn child(&self, name: &str) -> Option<&Element> {
        self.children().find(|element| element.name == name)
    }

    /// Concatenation of the direct text children
    pub fn text(&self) -> String {
        self.content
            .iter()
            .flatten()
            .filter_map(|node| match node {
                Node::Text(text) => Some(text.as_str()),
                Node::Element(_) => None,
            })
            .collect()
    }

    pub fn is_self_closing(&self) -> bool {
        self.content.is_none()
    }
}
