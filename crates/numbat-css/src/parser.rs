//! Recursive-descent stylesheet parser.
//!
//! The grammar is a small subset of CSS: a stylesheet is a sequence of
//! rules, a rule is a selector group followed by a brace-delimited
//! declaration block, and every declaration is `name: value;` with the
//! semicolon mandatory. Like the markup parser, one character of lookahead
//! decides every branch, so the parser drives a [`TextCursor`] directly.
//!
//! Parsing is all-or-nothing: any required literal (`{`, `}`, `:`, `;`,
//! `#`) missing at its expected position aborts with [`CssParseError`].

use numbat_common::cursor::TextCursor;
use thiserror::Error;

use crate::selector::{Selector, SelectorKind};
use crate::value::{ColorValue, Unit, Value};

/// A single `name: value` pair inside a rule block.
#[derive(Debug, Clone, PartialEq)]
pub struct Declaration {
    /// The property name, e.g. `color`.
    pub name: String,
    /// The typed value.
    pub value: Value,
}

/// A parsed rule: a selector group and its declarations.
///
/// A rule with several selectors means "apply these declarations if ANY
/// selector matches" — the group is a list of alternatives, never a
/// combinator chain.
#[derive(Debug, Clone, PartialEq)]
pub struct Rule {
    /// The alternative selectors, in source order.
    pub selectors: Vec<Selector>,
    /// The declarations, in source order.
    pub declarations: Vec<Declaration>,
}

/// An ordered list of rules.
///
/// Produced by [`parse_stylesheet`]; reordered and selector-exploded by
/// [`crate::cascade::sort_by_specificity`] before resolution.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct Stylesheet {
    /// Rules in source order.
    pub rules: Vec<Rule>,
}

/// A fatal stylesheet parsing failure.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CssParseError {
    /// The input ended while a rule or declaration was still open.
    #[error("unexpected end of input while parsing stylesheet")]
    UnexpectedEndOfInput,

    /// A required literal character was absent at its expected position.
    #[error("expected '{expected}' but found '{found}'")]
    ExpectedCharacter {
        /// The character the grammar requires here.
        expected: char,
        /// The character actually read.
        found: char,
    },

    /// A length carried a unit outside the recognized set.
    #[error("unknown length unit '{unit}'")]
    UnknownUnit {
        /// The unit text as scanned.
        unit: String,
    },

    /// A color component was not a pair of hex digits.
    #[error("invalid hex color component '{component}'")]
    InvalidColorComponent {
        /// The two characters read for the component.
        component: String,
    },
}

/// Characters permitted in a selector name.
fn is_selector_name_char(c: char) -> bool {
    c.is_ascii_alphanumeric() || c == '_' || c == '-'
}

/// Characters permitted in a property name or keyword value.
fn is_ident_char(c: char) -> bool {
    c.is_ascii_alphabetic() || c == '-'
}

/// Recursive-descent parser over a stylesheet string.
///
/// Use [`parse_stylesheet`] unless you need to drive parsing manually.
pub struct CssParser {
    cursor: TextCursor,
}

impl CssParser {
    /// Create a parser at the start of `source`.
    #[must_use]
    pub fn new(source: &str) -> Self {
        Self {
            cursor: TextCursor::new(source),
        }
    }

    /// Consume one character and require it to be `expected`.
    fn expect(&mut self, expected: char) -> Result<(), CssParseError> {
        match self.cursor.advance() {
            Some(found) if found == expected => Ok(()),
            Some(found) => Err(CssParseError::ExpectedCharacter { expected, found }),
            None => Err(CssParseError::UnexpectedEndOfInput),
        }
    }

    /// Parse rules until end-of-input.
    ///
    /// # Errors
    /// Propagates the first fatal failure from any rule.
    pub fn parse_rules(&mut self) -> Result<Vec<Rule>, CssParseError> {
        let mut rules = Vec::new();
        loop {
            self.cursor.consume_whitespace();
            if self.cursor.is_eof() {
                return Ok(rules);
            }
            let selectors = self.parse_selectors()?;
            self.expect('{')?;
            let declarations = self.parse_declarations()?;
            self.expect('}')?;
            rules.push(Rule {
                selectors,
                declarations,
            });
        }
    }

    /// Parse a selector group, stopping before the rule's `{`.
    ///
    /// Selectors may be separated by commas and/or whitespace; both forms
    /// flatten into the same list of independent alternatives (whitespace is
    /// NOT a descendant combinator in this grammar).
    fn parse_selectors(&mut self) -> Result<Vec<Selector>, CssParseError> {
        let mut selectors = Vec::new();
        loop {
            self.cursor.consume_whitespace();
            match self.cursor.peek() {
                Some('{') => return Ok(selectors),
                // A rule that never reaches its '{' is unrecoverable.
                None => return Err(CssParseError::UnexpectedEndOfInput),
                Some(c) => {
                    let selector = self.parse_selector();
                    let consumed_comma = self.consume_comma();
                    // A character that opens neither a selector nor a comma
                    // would stall the loop; treat it as a missing '{'.
                    if selector.name.is_empty()
                        && selector.kind == SelectorKind::Tag
                        && !consumed_comma
                    {
                        return Err(CssParseError::ExpectedCharacter {
                            expected: '{',
                            found: c,
                        });
                    }
                    selectors.push(selector);
                }
            }
        }
    }

    /// Parse one selector: an optional `.`/`#` marker and a name.
    fn parse_selector(&mut self) -> Selector {
        let marker = match self.cursor.peek() {
            Some(c @ ('.' | '#')) => {
                let _ = self.cursor.advance();
                Some(c)
            }
            _ => None,
        };
        let name = self.cursor.consume_while(is_selector_name_char);
        let kind = match marker {
            Some('.') => SelectorKind::Class,
            Some('#') => SelectorKind::Id,
            _ => SelectorKind::Tag,
        };
        Selector { kind, name }
    }

    /// Consume a `,` if one is next; reports whether one was consumed.
    fn consume_comma(&mut self) -> bool {
        if self.cursor.peek() == Some(',') {
            let _ = self.cursor.advance();
            return true;
        }
        false
    }

    /// Parse declarations until the block's `}` peeks.
    fn parse_declarations(&mut self) -> Result<Vec<Declaration>, CssParseError> {
        let mut declarations = Vec::new();
        loop {
            self.cursor.consume_whitespace();
            match self.cursor.peek() {
                Some('}') => return Ok(declarations),
                // A block that never closes is unrecoverable.
                None => return Err(CssParseError::UnexpectedEndOfInput),
                Some(_) => {
                    declarations.push(self.parse_declaration()?);
                    self.cursor.consume_whitespace();
                    self.expect(';')?;
                }
            }
        }
    }

    /// Parse one `name: value` pair (the trailing `;` belongs to the caller).
    fn parse_declaration(&mut self) -> Result<Declaration, CssParseError> {
        let name = self.cursor.consume_while(is_ident_char);
        self.cursor.consume_whitespace();
        self.expect(':')?;
        let value = self.parse_value()?;
        Ok(Declaration { name, value })
    }

    /// Parse a declaration value, dispatching on its first character.
    ///
    /// A digit opens a length, `#` opens a color, and anything else is
    /// scanned as a keyword.
    fn parse_value(&mut self) -> Result<Value, CssParseError> {
        self.cursor.consume_whitespace();
        match self.cursor.peek() {
            Some(c) if c.is_ascii_digit() => self.parse_length(),
            Some('#') => self.parse_color(),
            _ => Ok(Value::Keyword(self.cursor.consume_while(is_ident_char))),
        }
    }

    /// Parse a number followed by a unit, e.g. `10px`.
    ///
    /// Numbers are unsigned integers in this grammar (the value dispatch
    /// only enters here on a digit). The unit must be one of the recognized
    /// [`Unit`]s.
    fn parse_length(&mut self) -> Result<Value, CssParseError> {
        let digits = self.cursor.consume_while(|c| c.is_ascii_digit());
        let number: f64 = digits.parse().unwrap_or(0.0);
        let unit_text = self.cursor.consume_while(|c| c.is_ascii_alphabetic());
        let unit: Unit = unit_text
            .parse()
            .map_err(|_| CssParseError::UnknownUnit { unit: unit_text })?;
        Ok(Value::Length(number, unit))
    }

    /// Parse a `#rrggbb` color.
    ///
    /// Exactly six hex digits are read as three byte pairs; alpha is fixed
    /// at 255. Eight-digit input is not supported — the two characters after
    /// `bb` would be left for the caller, which then fails on the missing
    /// `;`. That matches the engine's "colors are always 6-digit RGB"
    /// contract.
    fn parse_color(&mut self) -> Result<Value, CssParseError> {
        self.expect('#')?;
        let r = self.parse_hex_pair()?;
        let g = self.parse_hex_pair()?;
        let b = self.parse_hex_pair()?;
        Ok(Value::Color(ColorValue::opaque(r, g, b)))
    }

    /// Read two characters and interpret them as a base-16 byte.
    fn parse_hex_pair(&mut self) -> Result<u8, CssParseError> {
        let hi = self
            .cursor
            .advance()
            .ok_or(CssParseError::UnexpectedEndOfInput)?;
        let lo = self
            .cursor
            .advance()
            .ok_or(CssParseError::UnexpectedEndOfInput)?;
        let component = format!("{hi}{lo}");
        u8::from_str_radix(&component, 16)
            .map_err(|_| CssParseError::InvalidColorComponent { component })
    }
}

/// Parse a whole stylesheet string into an ordered rule list.
///
/// # Errors
/// Returns the first fatal [`CssParseError`]; no partial stylesheet
/// survives.
pub fn parse_stylesheet(source: &str) -> Result<Stylesheet, CssParseError> {
    let rules = CssParser::new(source).parse_rules()?;
    Ok(Stylesheet { rules })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_length_value() {
        let sheet = parse_stylesheet("p { margin: 10px; }").unwrap();
        assert_eq!(
            sheet.rules[0].declarations[0].value,
            Value::Length(10.0, Unit::Px)
        );
    }

    #[test]
    fn test_parse_color_value() {
        let sheet = parse_stylesheet("p { color: #FFFFFF; }").unwrap();
        assert_eq!(
            sheet.rules[0].declarations[0].value,
            Value::Color(ColorValue::opaque(255, 255, 255))
        );
    }

    #[test]
    fn test_parse_keyword_value() {
        let sheet = parse_stylesheet("nav { justify-content: space-between; }").unwrap();
        let decl = &sheet.rules[0].declarations[0];
        assert_eq!(decl.name, "justify-content");
        assert_eq!(decl.value, Value::keyword("space-between"));
    }

    #[test]
    fn test_unknown_unit_is_fatal() {
        assert_eq!(
            parse_stylesheet("p { width: 10pt; }"),
            Err(CssParseError::UnknownUnit {
                unit: "pt".to_string()
            })
        );
    }

    #[test]
    fn test_missing_semicolon_is_fatal() {
        assert_eq!(
            parse_stylesheet("p { color: red }"),
            Err(CssParseError::ExpectedCharacter {
                expected: ';',
                found: '}'
            })
        );
    }

    #[test]
    fn test_missing_close_brace_is_fatal() {
        assert_eq!(
            parse_stylesheet("p { color: red;"),
            Err(CssParseError::UnexpectedEndOfInput)
        );
    }

    #[test]
    fn test_invalid_hex_component_is_fatal() {
        assert_eq!(
            parse_stylesheet("p { color: #zzffee; }"),
            Err(CssParseError::InvalidColorComponent {
                component: "zz".to_string()
            })
        );
    }
}
