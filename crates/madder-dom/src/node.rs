//! The document tree: documents, nodes, and elements.
//!
//! A [`Document`] owns exactly one root [`Element`]. Elements hold their
//! attributes and children in document order; mutation happens in place
//! and never reorders siblings.

use crate::error::ParseError;

/// A node in the document tree.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Node {
    /// An element with a name, attributes, and children.
    Element(Element),
    /// Text content, entity-decoded.
    Text(String),
    /// A CDATA section, kept raw.
    CData(String),
    /// A comment.
    Comment(String),
}

impl Node {
    /// Returns the contained element, or `None` for non-element nodes.
    pub fn as_element(&self) -> Option<&Element> {
        match self {
            Node::Element(element) => Some(element),
            _ => None,
        }
    }
}

/// An element with a tag name, ordered attributes, and ordered children.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Element {
    name: String,
    attributes: Vec<(String, String)>,
    children: Vec<Node>,
}

impl Element {
    /// Create a new element with no attributes and no children.
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            attributes: Vec::new(),
            children: Vec::new(),
        }
    }

    /// The element's tag name.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Look up an attribute value by name.
    pub fn attribute(&self, name: &str) -> Option<&str> {
        self.attributes
            .iter()
            .find(|(attribute, _)| attribute == name)
            .map(|(_, value)| value.as_str())
    }

    /// Set an attribute, returning the previous value if one existed.
    ///
    /// An existing attribute is updated in place, keeping its position in
    /// the attribute list; a new attribute is appended at the end.
    pub fn set_attribute(&mut self, name: &str, value: &str) -> Option<String> {
        for (attribute, existing) in &mut self.attributes {
            if attribute == name {
                return Some(std::mem::replace(existing, value.to_string()));
            }
        }
        self.attributes.push((name.to_string(), value.to_string()));
        None
    }

    /// All attributes as name/value pairs, in document order.
    pub fn attributes(&self) -> &[(String, String)] {
        &self.attributes
    }

    /// All child nodes, in document order.
    pub fn children(&self) -> &[Node] {
        &self.children
    }

    /// Mutable access to the child nodes.
    ///
    /// Returned as a slice: children can be mutated in place but not
    /// added, removed, or reordered through this accessor.
    pub fn children_mut(&mut self) -> &mut [Node] {
        &mut self.children
    }

    /// Append a child node.
    pub fn push_child(&mut self, node: Node) {
        self.children.push(node);
    }

    /// Iterate over child elements carrying the given tag name.
    pub fn child_elements<'a>(&'a self, name: &'a str) -> impl Iterator<Item = &'a Element> {
        self.children
            .iter()
            .filter_map(Node::as_element)
            .filter(move |element| element.name() == name)
    }
}

/// An in-memory markup document with a single root element.
///
/// Created fresh per input file, mutated in place, serialized, and
/// discarded; documents are never cached or shared across files.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Document {
    root: Element,
}

impl Document {
    /// Create a document from a root element.
    pub fn new(root: Element) -> Self {
        Self { root }
    }

    /// Parse markup text into a document.
    ///
    /// # Errors
    ///
    /// Returns [`ParseError`] for ill-formed markup: syntax errors,
    /// mismatched or unclosed tags, and documents without exactly one
    /// root element.
    pub fn parse(text: &str) -> Result<Self, ParseError> {
        crate::parser::parse_document(text)
    }

    /// The root element.
    pub fn root(&self) -> &Element {
        &self.root
    }

    /// Mutable access to the root element.
    pub fn root_mut(&mut self) -> &mut Element {
        &mut self.root
    }
}
