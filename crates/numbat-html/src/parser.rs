//! Recursive-descent markup parser producing a [`numbat_dom::Node`] tree.
//!
//! The grammar needs exactly one character of lookahead everywhere: `<`
//! starts an element, anything else is text, and inside a tag the character
//! that terminates an attribute key decides what kind of attribute follows.
//! The parser therefore drives a plain [`TextCursor`] directly, with no
//! token stream in between.

use numbat_common::cursor::TextCursor;
use numbat_common::warning::warn_once;
use numbat_dom::{Attribute, Node};
use thiserror::Error;

/// Tags that never take children or a closing tag.
///
/// Written with or without an explicit self-close slash, these produce an
/// element with an empty child list and consume no `</...>` sequence.
/// `!DOCTYPE` is treated as an ordinary void tag so prologue lines parse as
/// a childless element instead of failing.
pub const VOID_TAGS: [&str; 7] = ["br", "input", "img", "hr", "link", "meta", "!DOCTYPE"];

/// A fatal markup parsing failure.
///
/// Parsing is all-or-nothing: the first missing required delimiter aborts
/// the whole parse and no partial tree is returned.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum HtmlParseError {
    /// The input ended while a construct was still open.
    #[error("unexpected end of input while parsing markup")]
    UnexpectedEndOfInput,

    /// A required literal character was absent at its expected position.
    #[error("expected '{expected}' but found '{found}'")]
    ExpectedCharacter {
        /// The character the grammar requires here.
        expected: char,
        /// The character actually read.
        found: char,
    },

    /// An attribute value did not open with a single or double quote.
    #[error("expected a quote to open an attribute value, found '{found}'")]
    ExpectedQuote {
        /// The character actually read.
        found: char,
    },

    /// A closing tag named a different element than the one open.
    #[error("closing tag '</{found}>' does not match opening tag '<{expected}>'")]
    MismatchedClosingTag {
        /// The open element's tag name.
        expected: String,
        /// The tag name found in the closing sequence.
        found: String,
    },
}

/// Characters permitted in a tag name.
///
/// Word characters, plus `!` so `<!DOCTYPE ...>` scans as the tag name
/// `!DOCTYPE` (which the void set then swallows).
fn is_tag_name_char(c: char) -> bool {
    c.is_ascii_alphanumeric() || c == '_' || c == '!'
}

/// Characters that terminate an attribute key.
fn ends_attribute_key(c: char) -> bool {
    c == '=' || c == '>' || c == '/' || c.is_whitespace()
}

/// Recursive-descent parser over a markup string.
///
/// Use [`parse_document`] unless you need the raw top-level node list.
pub struct HtmlParser {
    cursor: TextCursor,
}

impl HtmlParser {
    /// Create a parser at the start of `source`.
    #[must_use]
    pub fn new(source: &str) -> Self {
        Self {
            cursor: TextCursor::new(source),
        }
    }

    /// Consume one character and require it to be `expected`.
    fn expect(&mut self, expected: char) -> Result<(), HtmlParseError> {
        match self.cursor.advance() {
            Some(found) if found == expected => Ok(()),
            Some(found) => Err(HtmlParseError::ExpectedCharacter { expected, found }),
            None => Err(HtmlParseError::UnexpectedEndOfInput),
        }
    }

    /// Parse sibling nodes until end-of-input or a closing-tag marker.
    ///
    /// Leading whitespace before each node is skipped, so inter-tag
    /// indentation never produces text nodes of its own.
    ///
    /// # Errors
    /// Propagates any fatal parse failure from a child node.
    pub fn parse_nodes(&mut self) -> Result<Vec<Node>, HtmlParseError> {
        let mut nodes = Vec::new();
        loop {
            self.cursor.consume_whitespace();
            if self.cursor.is_eof() || self.cursor.rest_starts_with("</") {
                return Ok(nodes);
            }
            nodes.push(self.parse_node()?);
        }
    }

    /// `<` opens an element; anything else begins text.
    fn parse_node(&mut self) -> Result<Node, HtmlParseError> {
        if self.cursor.peek() == Some('<') {
            self.parse_element()
        } else {
            Ok(self.parse_text())
        }
    }

    /// Scan verbatim up to the next `<`, trim, and wrap as a text node.
    fn parse_text(&mut self) -> Node {
        let content = self.cursor.consume_while(|c| c != '<');
        Node::text(content.trim())
    }

    /// Parse one element: tag name, attributes, and (unless void) children
    /// plus the matching closing tag.
    fn parse_element(&mut self) -> Result<Node, HtmlParseError> {
        self.expect('<')?;
        let tag_name = self.cursor.consume_while(is_tag_name_char);
        let attributes = self.parse_attributes()?;

        // The attribute loop stops only once the tag's '>' has been consumed.
        debug_assert_eq!(self.cursor.current(), Some('>'));

        if VOID_TAGS.contains(&tag_name.as_str()) {
            return Ok(Node::element(tag_name, attributes, Vec::new()));
        }

        let children = self.parse_nodes()?;
        self.expect('<')?;
        self.expect('/')?;
        let closing = self.cursor.consume_while(is_tag_name_char);
        if closing != tag_name {
            return Err(HtmlParseError::MismatchedClosingTag {
                expected: tag_name,
                found: closing,
            });
        }
        self.expect('>')?;
        Ok(Node::element(tag_name, attributes, children))
    }

    /// Parse attribute entries until the tag's `>` has been consumed.
    ///
    /// The `>` itself is read as an attribute delimiter, so the loop keys
    /// off the last consumed character rather than lookahead.
    fn parse_attributes(&mut self) -> Result<Vec<Attribute>, HtmlParseError> {
        let mut attributes = Vec::new();
        while self.cursor.current() != Some('>') {
            if let Some(attr) = self.parse_attribute()? {
                attributes.push(attr);
            }
        }
        Ok(attributes)
    }

    /// Parse one attribute, or drop a malformed fragment.
    ///
    /// The character after the key decides the shape:
    /// - `=`: quoted value follows (the key may be empty on malformed
    ///   input; it is stored as written, not guarded against).
    /// - `>` or whitespace with a non-empty key: bare attribute.
    /// - anything else: not an attribute; the fragment is discarded without
    ///   signaling the caller (a named fragment gets a one-shot warning).
    fn parse_attribute(&mut self) -> Result<Option<Attribute>, HtmlParseError> {
        self.cursor.consume_whitespace();
        let name = self.cursor.consume_while(|c| !ends_attribute_key(c));
        let Some(delimiter) = self.cursor.advance() else {
            return Err(HtmlParseError::UnexpectedEndOfInput);
        };

        if delimiter == '=' {
            let value = self.parse_attribute_value()?;
            return Ok(Some(Attribute::text(name, value)));
        }
        if !name.is_empty() && (delimiter == '>' || delimiter.is_whitespace()) {
            return Ok(Some(Attribute::bare(name)));
        }
        if !name.is_empty() {
            warn_once("HTML", &format!("dropped malformed attribute fragment '{name}'"));
        }
        Ok(None)
    }

    /// Parse a quoted attribute value, stripping the quotes.
    ///
    /// Either quote character opens the value; the content runs verbatim to
    /// the matching quote. A missing closing quote is fatal.
    fn parse_attribute_value(&mut self) -> Result<String, HtmlParseError> {
        let open = match self.cursor.advance() {
            Some(c @ ('"' | '\'')) => c,
            Some(found) => return Err(HtmlParseError::ExpectedQuote { found }),
            None => return Err(HtmlParseError::UnexpectedEndOfInput),
        };
        let value = self.cursor.consume_while(|c| c != open);
        self.expect(open)?;
        Ok(value)
    }
}

/// Parse a whole document string into a single node.
///
/// A lone top-level node is returned as-is. Several siblings (for example
/// leading text plus an element, or a `!DOCTYPE` prologue plus `<html>`) are
/// wrapped in a synthetic `root` element with empty attributes, preserving
/// their order. Zero nodes yield an empty `root` element.
///
/// # Errors
/// Returns the first fatal [`HtmlParseError`]; no partial tree survives.
pub fn parse_document(source: &str) -> Result<Node, HtmlParseError> {
    let mut parser = HtmlParser::new(source);
    let mut nodes = parser.parse_nodes()?;
    if nodes.len() == 1 {
        Ok(nodes.remove(0))
    } else {
        Ok(Node::element("root", Vec::new(), nodes))
    }
}
