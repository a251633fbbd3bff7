//! Minimal rendered-output tree.
//!
//! Hosts convert their rendered DOM into this shape (or implement the pass
//! over their own nodes using the same rule): elements own an ordered list of
//! children, each either a run of text or another element.

/// A rendered node.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Node {
    Text(String),
    Element(Element),
}

impl Node {
    /// Create a text node.
    #[must_use]
    pub fn text(text: impl Into<String>) -> Self {
        Self::Text(text.into())
    }

    /// Concatenated text of this node and its descendants.
    #[must_use]
    pub fn text_content(&self) -> String {
        match self {
            Self::Text(text) => text.clone(),
            Self::Element(element) => element.text_content(),
        }
    }
}

impl From<Element> for Node {
    fn from(element: Element) -> Self {
        Self::Element(element)
    }
}

/// A rendered element.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Element {
    pub tag: String,
    pub children: Vec<Node>,
}

impl Element {
    /// Create an element without children.
    #[must_use]
    pub fn new(tag: impl Into<String>) -> Self {
        Self {
            tag: tag.into(),
            children: Vec::new(),
        }
    }

    /// Append a child (builder pattern).
    #[must_use]
    pub fn child(mut self, node: impl Into<Node>) -> Self {
        self.children.push(node.into());
        self
    }

    /// Append a text child (builder pattern).
    #[must_use]
    pub fn with_text(self, text: impl Into<String>) -> Self {
        self.child(Node::text(text))
    }

    /// The text of a leaf element, whose only child is a single text run.
    #[must_use]
    pub fn leaf_text(&self) -> Option<&str> {
        match self.children.as_slice() {
            [Node::Text(text)] => Some(text.as_str()),
            _ => None,
        }
    }

    /// Mutable access to the text of a leaf element.
    pub fn leaf_text_mut(&mut self) -> Option<&mut String> {
        match self.children.as_mut_slice() {
            [Node::Text(text)] => Some(text),
            _ => None,
        }
    }

    /// Concatenated text of all descendants.
    #[must_use]
    pub fn text_content(&self) -> String {
        self.children.iter().map(Node::text_content).collect()
    }

    /// Visit every descendant element in document order, excluding `self`.
    pub fn for_each_descendant_mut(&mut self, f: &mut impl FnMut(&mut Element)) {
        for child in &mut self.children {
            if let Node::Element(element) = child {
                f(element);
                element.for_each_descendant_mut(f);
            }
        }
    }
}
