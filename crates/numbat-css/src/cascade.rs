//! Specificity ordering and cascade resolution.
//!
//! [§ 6 Cascading](https://www.w3.org/TR/css-cascade-4/#cascading)
//! "The cascade takes an unordered list of declared values for a given
//! property on a given element, sorts them by their declaration's
//! precedence..."
//!
//! This engine reduces specificity to a fixed group ordering (Tag, then
//! Class, then Id) with no numeric score. [`sort_by_specificity`] explodes
//! multi-selector rules and partitions them into those groups; the resolver
//! then walks the sorted list in order and lets every later match overwrite
//! earlier ones, so "higher specificity wins" falls out of list position
//! alone.

use std::collections::HashMap;

use numbat_common::warning::warn_once;
use numbat_dom::Node;
use serde::ser::SerializeStruct;
use serde::{Serialize, Serializer};

use crate::parser::{Rule, Stylesheet};
use crate::selector::SelectorKind;
use crate::value::Value;

/// Reorder a stylesheet into ascending-specificity form.
///
/// Every rule is split into one rule per selector, each carrying the full
/// original declaration list (specificity is a property of a selector, not
/// of a rule, so the declarations travel with each alternative). The
/// exploded single-selector rules are then stably
/// partitioned into Tag, Class, Id groups, concatenated in that order.
/// Relative order within a group is the input order; there is no numeric
/// weight.
#[must_use]
pub fn sort_by_specificity(stylesheet: &Stylesheet) -> Stylesheet {
    let mut tags = Vec::new();
    let mut classes = Vec::new();
    let mut ids = Vec::new();

    for rule in &stylesheet.rules {
        for selector in &rule.selectors {
            let exploded = Rule {
                selectors: vec![selector.clone()],
                declarations: rule.declarations.clone(),
            };
            match selector.kind {
                SelectorKind::Tag => tags.push(exploded),
                SelectorKind::Class => classes.push(exploded),
                SelectorKind::Id => ids.push(exploded),
            }
        }
    }

    let mut rules = tags;
    rules.append(&mut classes);
    rules.append(&mut ids);
    Stylesheet { rules }
}

/// The resolved display type of a styled node.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Display {
    /// The node participates in inline flow (the global default).
    Inline,
    /// The node generates a block-level box.
    Block,
    /// The node generates no box at all.
    None,
}

/// Default display type for elements whose `display` property is unset.
///
/// A fixed tag-name table standing in for a user-agent stylesheet: the
/// common flow-content containers are block-level, document metadata
/// generates nothing, and everything else is inline.
fn default_display_for_tag(tag_name: &str) -> Display {
    match tag_name {
        "html" | "body" | "div" | "p" | "h1" | "h2" | "h3" | "h4" | "h5" | "h6" | "ul" | "ol"
        | "li" | "section" | "article" | "header" | "footer" | "nav" | "hr" => Display::Block,
        "head" | "title" | "style" | "script" | "meta" | "link" | "!DOCTYPE" => Display::None,
        _ => Display::Inline,
    }
}

/// A document node paired with its resolved style properties.
///
/// The styled tree borrows the document tree read-only and mirrors its
/// shape exactly: one `StyledNode` per [`Node`], same child order. It is
/// built once per (tree, stylesheet) pair and never mutated afterwards.
#[derive(Debug, Clone, PartialEq)]
pub struct StyledNode<'a> {
    /// The underlying document node.
    pub node: &'a Node,
    /// Resolved property name → value mapping. Empty for text nodes.
    pub property_map: HashMap<String, Value>,
    /// Styled children, mirroring the document node's children.
    pub children: Vec<StyledNode<'a>>,
}

/// Build the styled tree for a document tree and a stylesheet.
///
/// The stylesheet is sorted by [`sort_by_specificity`] once, up front; the
/// sorted sheet is then shared read-only across the whole recursion.
#[must_use]
pub fn build_styled_tree<'a>(node: &'a Node, stylesheet: &Stylesheet) -> StyledNode<'a> {
    let sorted = sort_by_specificity(stylesheet);
    build_node(node, &sorted)
}

/// One step of the top-down construction pass.
fn build_node<'a>(node: &'a Node, sorted: &Stylesheet) -> StyledNode<'a> {
    StyledNode {
        node,
        property_map: resolve_property_map(node, sorted),
        children: node
            .children()
            .iter()
            .map(|child| build_node(child, sorted))
            .collect(),
    }
}

/// Resolve the property map for one node against a pre-sorted stylesheet.
///
/// Rules are applied in list order with last-write-wins per property name.
/// Because the list is sorted low to high specificity, a later (more
/// specific) match always overwrites an earlier one; that is the entire
/// cascade policy. Text nodes match nothing and get an empty map.
#[must_use]
pub fn resolve_property_map(node: &Node, sorted: &Stylesheet) -> HashMap<String, Value> {
    let mut map = HashMap::new();
    let Some(element) = node.as_element() else {
        return map;
    };
    for rule in &sorted.rules {
        if rule.selectors.iter().any(|sel| sel.matches(element)) {
            for decl in &rule.declarations {
                let _ = map.insert(decl.name.clone(), decl.value.clone());
            }
        }
    }
    map
}

impl StyledNode<'_> {
    /// The resolved value for a property, if any rule set it.
    #[must_use]
    pub fn value(&self, name: &str) -> Option<&Value> {
        self.property_map.get(name)
    }

    /// Look up `name`, then `fallback_name`, then return `default`.
    ///
    /// The shorthand-free grammar means related properties (e.g. `width` vs
    /// `auto-width` pairs in a consumer) are resolved by explicit fallback
    /// chains like this one.
    #[must_use]
    pub fn lookup(&self, name: &str, fallback_name: &str, default: &Value) -> Value {
        self.value(name)
            .or_else(|| self.value(fallback_name))
            .unwrap_or(default)
            .clone()
    }

    /// The node's display type.
    ///
    /// Derived, not stored: the `display` property value when present and
    /// recognized, otherwise the per-tag default table, otherwise inline.
    /// An unrecognized keyword warns once and falls back to the default.
    #[must_use]
    pub fn display(&self) -> Display {
        match self.value("display") {
            Some(Value::Keyword(keyword)) => match keyword.as_str() {
                "inline" => Display::Inline,
                "block" => Display::Block,
                "none" => Display::None,
                other => {
                    warn_once("CSS", &format!("unsupported display keyword '{other}'"));
                    self.default_display()
                }
            },
            // A length or color in `display` is meaningless; ignore it.
            Some(_) | None => self.default_display(),
        }
    }

    /// The display type with no `display` property in play.
    fn default_display(&self) -> Display {
        self.node
            .as_element()
            .map_or(Display::Inline, |el| default_display_for_tag(&el.tag_name))
    }
}

// The styled tree serializes as { node, propertyMap, children } so external
// dumps preserve the node discriminant, the typed values, and child order.
impl Serialize for StyledNode<'_> {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut state = serializer.serialize_struct("StyledNode", 3)?;
        state.serialize_field("node", self.node)?;
        state.serialize_field("propertyMap", &self.property_map)?;
        state.serialize_field("children", &self.children)?;
        state.end()
    }
}
