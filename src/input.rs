//! The character-level `InputStream`.
//!
//! Wraps the raw source text and hands it out one `char` at a time,
//! tracking the line and column of the cursor for error reporting.

use memchr::{memchr, memmem};

/// A cursor over fully buffered source text.
///
/// The cursor is a byte offset that always sits on a `char` boundary and
/// never moves past the end of the buffer. Reading at the end yields `None`.
#[derive(Debug, Clone)]
pub struct InputStream<'a> {
    /// The source text.
    source: &'a str,
    /// Byte offset of the next unread character.
    cursor: usize,
    /// The current line number (1-indexed).
    line: usize,
    /// The current column number (1-indexed).
    column: usize,
}

impl<'a> InputStream<'a> {
    /// Creates a new `InputStream` positioned at line 1, column 1.
    pub fn new(source: &'a str) -> Self {
        InputStream {
            source,
            cursor: 0,
            line: 1,
            column: 1,
        }
    }

    /// Returns the next character without consuming it.
    #[inline]
    pub fn peek(&self) -> Option<char> {
        self.rest().chars().next()
    }

    /// Returns the character `n` positions past the next one, without consuming anything.
    #[inline]
    pub fn peek_nth(&self, n: usize) -> Option<char> {
        self.rest().chars().nth(n)
    }

    /// Consumes and returns the next character, updating line/column.
    #[inline]
    pub fn next_char(&mut self) -> Option<char> {
        let c = self.peek()?;
        self.cursor += c.len_utf8();
        if c == '\n' {
            self.line += 1;
            self.column = 1;
        } else {
            self.column += 1;
        }
        Some(c)
    }

    /// Reports the `(line, column)` of the next unread character.
    #[inline]
    pub fn position(&self) -> (usize, usize) {
        (self.line, self.column)
    }

    /// `true` once every character has been consumed.
    #[inline]
    pub fn is_eof(&self) -> bool {
        self.cursor >= self.source.len()
    }

    /// The unread remainder of the source.
    #[inline]
    pub(crate) fn rest(&self) -> &'a str {
        &self.source[self.cursor..]
    }

    /// Consumes `n` bytes, which must end on a `char` boundary.
    pub(crate) fn advance_bytes(&mut self, n: usize) {
        let end = self.cursor + n;
        while self.cursor < end && self.next_char().is_some() {}
    }

    /// Skips to the next `\n` (leaving it unread), or to end of input.
    pub(crate) fn skip_line(&mut self) {
        let rest = self.rest();
        let len = memchr(b'\n', rest.as_bytes()).unwrap_or(rest.len());
        // No newlines in this span, so only the column moves.
        self.column += rest[..len].chars().count();
        self.cursor += len;
    }

    /// Consumes everything up to and including the next occurrence of `needle`.
    ///
    /// Returns `false`, leaving the cursor untouched, if `needle` does not occur.
    pub(crate) fn skip_past(&mut self, needle: &str) -> bool {
        match memmem::find(self.rest().as_bytes(), needle.as_bytes()) {
            Some(i) => {
                self.advance_bytes(i + needle.len());
                true
            }
            None => false,
        }
    }
}
