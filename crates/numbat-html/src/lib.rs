//! Markup parser for the Numbat engine.
//!
//! # Scope
//!
//! This crate implements a deliberately small recursive-descent parser over
//! an HTML-shaped markup language:
//! - element and text nodes, single forward pass, no backtracking
//! - quoted (`key="value"`, `key='value'`) and bare (`disabled`) attributes
//! - a fixed set of void tags that never take children or a closing tag
//! - a synthetic `root` element wrapping multiple top-level siblings
//!
//! # Not Implemented
//!
//! Full WHATWG parsing is out of scope: no comments, CDATA, character
//! references, script/style raw-text states, or malformed-input recovery.
//! Parsing is all-or-nothing — a missing required delimiter or a mismatched
//! closing tag aborts with [`HtmlParseError`], while a malformed attribute
//! fragment is dropped with a deduplicated warning.

/// Recursive-descent markup parsing.
pub mod parser;

pub use parser::{HtmlParseError, HtmlParser, parse_document};
