//! Single-character scanning primitive shared by the markup and stylesheet
//! parsers.
//!
//! Both parsers are hand-written recursive-descent parsers that only ever
//! need one character of lookahead, so the whole scanning contract fits in
//! one small type: peek the next character, consume it, or consume a run of
//! characters matching a predicate. End-of-input is represented by `None`
//! rather than a sentinel string, which makes the "the sentinel fails every
//! content predicate" property fall out of the type.

/// A cursor over an immutable input string.
///
/// The cursor tracks the offset of the next unread character and remembers
/// the character most recently consumed (see [`TextCursor::current`]), which
/// the markup parser's attribute loop keys off.
#[derive(Debug, Clone)]
pub struct TextCursor {
    /// The input, decoded up front so offsets address characters, not bytes.
    input: Vec<char>,
    /// Offset of the next unread character.
    position: usize,
    /// The character most recently returned by [`TextCursor::advance`].
    current: Option<char>,
}

impl TextCursor {
    /// Create a cursor at the start of `input`, with no character consumed.
    #[must_use]
    pub fn new(input: &str) -> Self {
        Self {
            input: input.chars().collect(),
            position: 0,
            current: None,
        }
    }

    /// True when no character remains to read.
    ///
    /// Because [`TextCursor::advance`] moves past the character it returns,
    /// this becomes true only after the last character has been consumed.
    /// That is the "one past the last read" boundary both parsers' stop
    /// conditions rely on.
    #[must_use]
    pub fn is_eof(&self) -> bool {
        self.position >= self.input.len()
    }

    /// The next unread character, or `None` at end-of-input. Never advances.
    #[must_use]
    pub fn peek(&self) -> Option<char> {
        self.input.get(self.position).copied()
    }

    /// Consume and return the next character, or `None` past end-of-input.
    ///
    /// Callers that require a character treat `None` as a fatal
    /// unexpected-end-of-input condition.
    pub fn advance(&mut self) -> Option<char> {
        let c = self.peek()?;
        self.position += 1;
        self.current = Some(c);
        Some(c)
    }

    /// The character most recently consumed, or `None` before the first
    /// [`TextCursor::advance`].
    #[must_use]
    pub fn current(&self) -> Option<char> {
        self.current
    }

    /// Consume characters while `pred` holds for the next one, returning the
    /// run as a `String`.
    ///
    /// Returns the empty string when `pred` fails immediately, including at
    /// end-of-input (there is no character for `pred` to accept).
    pub fn consume_while(&mut self, pred: impl Fn(char) -> bool) -> String {
        let mut result = String::new();
        while let Some(c) = self.peek() {
            if !pred(c) {
                break;
            }
            let _ = self.advance();
            result.push(c);
        }
        result
    }

    /// Skip over any run of whitespace.
    pub fn consume_whitespace(&mut self) {
        let _ = self.consume_while(char::is_whitespace);
    }

    /// True when the unconsumed remainder of the input starts with `s`.
    #[must_use]
    pub fn rest_starts_with(&self, s: &str) -> bool {
        let mut offset = self.position;
        for expected in s.chars() {
            if self.input.get(offset) != Some(&expected) {
                return false;
            }
            offset += 1;
        }
        true
    }
}
