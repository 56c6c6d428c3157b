//! Stylesheet parsing, specificity ordering, and cascade resolution for the
//! Numbat engine.
//!
//! # Scope
//!
//! This crate implements the styling half of the pipeline:
//! - **Value model** — keyword, length-with-unit, and RGBA color values
//! - **Stylesheet parser** — recursive-descent parsing of
//!   `selectors { property: value; ... }` rules
//! - **Selector matching** — tag, class, and id selectors against element
//!   nodes
//! - **Specificity sorter** — rule-per-selector explosion and Tag < Class <
//!   Id group ordering
//! - **Cascade resolver** — the styled tree pairing each document node with
//!   its resolved property map
//!
//! # Not Implemented
//!
//! Media queries, pseudo-classes, attribute selectors, combinators (a
//! whitespace-separated selector group flattens into independent
//! alternatives), shorthand expansion, property inheritance, and `!important`
//! are all out of scope. Class matching compares the whole `class` attribute
//! string, not space-separated tokens — see [`selector::Selector::matches`].

/// Cascade resolution: specificity sorting and the styled tree.
pub mod cascade;
/// Recursive-descent stylesheet parsing.
pub mod parser;
/// Selector model and matching.
pub mod selector;
/// Declaration value types.
pub mod value;

pub use cascade::{Display, StyledNode, build_styled_tree, sort_by_specificity};
pub use parser::{CssParseError, CssParser, Declaration, Rule, Stylesheet, parse_stylesheet};
pub use selector::{Selector, SelectorKind};
pub use value::{ColorValue, Unit, Value};
