//! Selector model and matching.
//!
//! Only the three simple selector kinds exist: a tag name, a `.class`, and
//! an `#id`. There are no combinators — a whitespace-separated selector
//! group is flattened by the parser into independent alternatives, so
//! matching is always one selector against one element.

use numbat_dom::{ElementData, Node};
use serde::Serialize;

/// The kind of a simple selector, in ascending specificity order.
///
/// The cascade never computes a numeric specificity score; this ordering is
/// the entire precedence model (see [`crate::cascade::sort_by_specificity`]).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum SelectorKind {
    /// A type selector: matches by tag name (`h1`).
    Tag,
    /// A class selector (`.title`).
    Class,
    /// An id selector (`#header`).
    Id,
}

/// A single simple selector.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Selector {
    /// What the selector keys on.
    pub kind: SelectorKind,
    /// The tag, class, or id name (without the `.`/`#` marker).
    pub name: String,
}

impl Selector {
    /// Build a selector.
    #[must_use]
    pub fn new(kind: SelectorKind, name: impl Into<String>) -> Self {
        Self {
            kind,
            name: name.into(),
        }
    }

    /// Test this selector against an element.
    ///
    /// - Tag: tag-name equality.
    /// - Id: some attribute entry named `id` carries exactly this value.
    ///   Duplicate `id` entries are legal; the first match suffices.
    /// - Class: some attribute entry named `class` whose **whole** value
    ///   equals the selector name. The class attribute is NOT split on
    ///   whitespace, so `class="a b"` matches neither `.a` nor `.b` — a
    ///   deliberate simplification of the engine, kept rather than silently
    ///   upgraded to token matching.
    #[must_use]
    pub fn matches(&self, element: &ElementData) -> bool {
        match self.kind {
            SelectorKind::Tag => element.tag_name == self.name,
            SelectorKind::Id => element.has_attribute_value("id", &self.name),
            SelectorKind::Class => element.has_attribute_value("class", &self.name),
        }
    }

    /// Test this selector against any node. Text nodes match nothing.
    #[must_use]
    pub fn matches_node(&self, node: &Node) -> bool {
        node.as_element().is_some_and(|el| self.matches(el))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use numbat_dom::Attribute;

    fn element(tag: &str, attrs: Vec<Attribute>) -> Node {
        Node::element(tag, attrs, vec![])
    }

    #[test]
    fn test_tag_selector_matches_tag_name() {
        let node = element("h1", vec![]);
        assert!(Selector::new(SelectorKind::Tag, "h1").matches_node(&node));
        assert!(!Selector::new(SelectorKind::Tag, "h2").matches_node(&node));
    }

    #[test]
    fn test_id_selector_scans_duplicate_entries() {
        let node = element(
            "div",
            vec![Attribute::text("id", "first"), Attribute::text("id", "second")],
        );
        assert!(Selector::new(SelectorKind::Id, "first").matches_node(&node));
        assert!(Selector::new(SelectorKind::Id, "second").matches_node(&node));
    }

    #[test]
    fn test_class_selector_is_whole_string_equality() {
        let node = element("li", vec![Attribute::text("class", "list__item active")]);
        // The whole attribute value must match; tokens do not.
        assert!(!Selector::new(SelectorKind::Class, "active").matches_node(&node));
        assert!(
            Selector::new(SelectorKind::Class, "list__item active").matches_node(&node)
        );
    }

    #[test]
    fn test_text_node_matches_nothing() {
        let node = Node::text("hello");
        assert!(!Selector::new(SelectorKind::Tag, "hello").matches_node(&node));
    }
}
