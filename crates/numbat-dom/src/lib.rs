//! Document node tree for the Numbat engine.
//!
//! # Design
//!
//! The tree is an owned tagged union: every element exclusively owns its
//! children, so a parsed document is a single `Node` value with no ids,
//! arenas, or interior mutability. Consumers (the styled-tree builder, the
//! JSON dump) borrow into it read-only.
//!
//! Attributes are kept as an **ordered list**, not a map. Duplicate
//! attribute names are preserved in source order; last-write-wins is never
//! applied at parse time, so selector matching scans the full list. A bare
//! attribute (`disabled` with no `=value`) is represented by
//! [`AttributeValue::Bare`] and serializes as boolean `true`.

use serde::{Serialize, Serializer};

/// A node in the document tree: an element or a run of text.
///
/// [§ 4.4 Interface Node](https://dom.spec.whatwg.org/#interface-node)
/// "Each node has an associated node type" — here reduced to the two kinds
/// the markup parser produces.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "type", rename_all = "lowercase")]
pub enum Node {
    /// An element with a tag name, attributes, and owned children.
    Element(ElementData),
    /// A run of text, already trimmed of surrounding whitespace.
    Text {
        /// The text content.
        content: String,
    },
}

/// Element-specific data: tag name, ordered attributes, owned children.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ElementData {
    /// The element's tag name, as written in the source.
    pub tag_name: String,
    /// Attributes in source order. Duplicate names are preserved.
    pub attributes: Vec<Attribute>,
    /// Child nodes in source order.
    pub children: Vec<Node>,
}

/// A single attribute entry.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Attribute {
    /// The attribute name (need not be unique within an element).
    pub name: String,
    /// The attribute value: quoted text or a bare presence flag.
    pub value: AttributeValue,
}

/// The value side of an attribute.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AttributeValue {
    /// A quoted value, stored with the quote characters stripped.
    Text(String),
    /// A bare attribute, written with no `=value` (e.g. `disabled`).
    Bare,
}

impl AttributeValue {
    /// The textual value, or `None` for a bare attribute.
    #[must_use]
    pub fn as_str(&self) -> Option<&str> {
        match self {
            AttributeValue::Text(s) => Some(s),
            AttributeValue::Bare => None,
        }
    }
}

// A bare attribute denotes presence, so it serializes as boolean `true`;
// quoted values serialize as plain strings.
impl Serialize for AttributeValue {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        match self {
            AttributeValue::Text(s) => serializer.serialize_str(s),
            AttributeValue::Bare => serializer.serialize_bool(true),
        }
    }
}

impl Attribute {
    /// Build a quoted (`name="value"`) attribute entry.
    #[must_use]
    pub fn text(name: impl Into<String>, value: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            value: AttributeValue::Text(value.into()),
        }
    }

    /// Build a bare (`name` with no value) attribute entry.
    #[must_use]
    pub fn bare(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            value: AttributeValue::Bare,
        }
    }
}

impl Node {
    /// Build an element node.
    #[must_use]
    pub fn element(
        tag_name: impl Into<String>,
        attributes: Vec<Attribute>,
        children: Vec<Node>,
    ) -> Self {
        Node::Element(ElementData {
            tag_name: tag_name.into(),
            attributes,
            children,
        })
    }

    /// Build a text node.
    #[must_use]
    pub fn text(content: impl Into<String>) -> Self {
        Node::Text {
            content: content.into(),
        }
    }

    /// Element data if this node is an element.
    #[must_use]
    pub fn as_element(&self) -> Option<&ElementData> {
        match self {
            Node::Element(data) => Some(data),
            Node::Text { .. } => None,
        }
    }

    /// Text content if this node is a text node.
    #[must_use]
    pub fn as_text(&self) -> Option<&str> {
        match self {
            Node::Text { content } => Some(content),
            Node::Element(_) => None,
        }
    }

    /// Child nodes (empty slice for text nodes).
    #[must_use]
    pub fn children(&self) -> &[Node] {
        match self {
            Node::Element(data) => &data.children,
            Node::Text { .. } => &[],
        }
    }
}

impl ElementData {
    /// The first attribute entry with the given name, if any.
    ///
    /// Duplicates are legal; this returns the first in source order.
    #[must_use]
    pub fn attribute(&self, name: &str) -> Option<&AttributeValue> {
        self.attributes
            .iter()
            .find(|attr| attr.name == name)
            .map(|attr| &attr.value)
    }

    /// True when any attribute entry named `name` carries exactly the quoted
    /// value `value`.
    ///
    /// Scans the full list so duplicate entries all participate; bare
    /// attributes never equal a textual value.
    #[must_use]
    pub fn has_attribute_value(&self, name: &str, value: &str) -> bool {
        self.attributes
            .iter()
            .any(|attr| attr.name == name && attr.value.as_str() == Some(value))
    }
}
