//! Byte cursor for traversing a source buffer.
//!
//! This module provides the `Cursor` struct which maintains position state
//! while walking a raw byte buffer. Position and line only ever move
//! forward; the lexer starts a new cursor to rescan.

/// A cursor over a source byte buffer.
///
/// # Example
///
/// ```
/// use hirc_lex::cursor::Cursor;
///
/// let mut cursor = Cursor::new(b"let x = 42;");
///
/// assert_eq!(cursor.current(), Some(b'l'));
/// cursor.advance();
/// assert_eq!(cursor.current(), Some(b'e'));
/// ```
#[derive(Clone, Debug)]
pub struct Cursor<'a> {
    /// The buffer being traversed.
    bytes: &'a [u8],

    /// Current byte position.
    position: usize,

    /// Current line number (1-based).
    line: u32,
}

impl<'a> Cursor<'a> {
    /// Creates a cursor at the start of `bytes`, on line 1.
    pub fn new(bytes: &'a [u8]) -> Self {
        Self {
            bytes,
            position: 0,
            line: 1,
        }
    }

    /// Returns the byte under the cursor, or `None` at the end.
    #[inline]
    pub fn current(&self) -> Option<u8> {
        self.bytes.get(self.position).copied()
    }

    /// Returns the byte `offset` bytes ahead of the cursor.
    ///
    /// # Example
    ///
    /// ```
    /// use hirc_lex::cursor::Cursor;
    ///
    /// let cursor = Cursor::new(b"<<=");
    /// assert_eq!(cursor.peek(0), Some(b'<'));
    /// assert_eq!(cursor.peek(2), Some(b'='));
    /// assert_eq!(cursor.peek(3), None);
    /// ```
    #[inline]
    pub fn peek(&self, offset: usize) -> Option<u8> {
        self.bytes.get(self.position + offset).copied()
    }

    /// True if the byte under the cursor satisfies `pred`
    #[inline]
    pub fn check(&self, pred: impl Fn(u8) -> bool) -> bool {
        self.current().is_some_and(pred)
    }

    /// Advances past one byte, counting `\n` as a line break.
    ///
    /// Does nothing at the end of the buffer.
    #[inline]
    pub fn advance(&mut self) {
        if let Some(b) = self.current() {
            self.position += 1;
            if b == b'\n' {
                self.line += 1;
            }
        }
    }

    /// Advances by up to `count` bytes.
    pub fn advance_n(&mut self, count: usize) {
        for _ in 0..count {
            if self.is_at_end() {
                break;
            }
            self.advance();
        }
    }

    /// Consumes `expected` if it is the next byte.
    ///
    /// # Example
    ///
    /// ```
    /// use hirc_lex::cursor::Cursor;
    ///
    /// let mut cursor = Cursor::new(b"+=");
    /// assert!(cursor.eat(b'+'));
    /// assert!(!cursor.eat(b'+'));
    /// assert!(cursor.eat(b'='));
    /// ```
    #[inline]
    pub fn eat(&mut self, expected: u8) -> bool {
        if self.current() == Some(expected) {
            self.advance();
            true
        } else {
            false
        }
    }

    /// Consumes bytes while `pred` holds, returning how many were consumed.
    pub fn eat_while(&mut self, pred: impl Fn(u8) -> bool) -> usize {
        let start = self.position;
        while self.check(&pred) {
            self.advance();
        }
        self.position - start
    }

    /// Returns true if the cursor is at the end of the buffer.
    #[inline]
    pub fn is_at_end(&self) -> bool {
        self.position >= self.bytes.len()
    }

    /// Returns the current line number (1-based).
    #[inline]
    pub fn line(&self) -> u32 {
        self.line
    }

    /// Returns the current byte position.
    #[inline]
    pub fn position(&self) -> usize {
        self.position
    }

    /// Returns the bytes from `start` up to the cursor.
    pub fn slice_from(&self, start: usize) -> &'a [u8] {
        &self.bytes[start..self.position]
    }

    /// Returns the bytes from the cursor to the end.
    pub fn remaining(&self) -> &'a [u8] {
        &self.bytes[self.position..]
    }

    /// Returns the whole buffer.
    pub fn bytes(&self) -> &'a [u8] {
        self.bytes
    }
}
