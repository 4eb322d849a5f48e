//! Token definitions.
//!
//! A [`Token`] is a position/length view into the buffer that produced it.
//! It never owns lexeme bytes: text is materialized on demand by handing it
//! the originating [`Lexer`].

mod category;
mod kind;

pub use category::TokenCategory;
pub use kind::{raw_name, raw_spelling, TokenInfo, TokenType, TOKEN_TABLE, TOKEN_TYPE_COUNT};

use std::ops::Range;

use static_assertions::const_assert;

use crate::Lexer;

/// A classified, positioned lexeme
///
/// Offsets and lengths are in bytes; `line` is 1-based. A token is only
/// meaningful together with the exact buffer that produced it.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct Token {
    len: u32,
    pos: u32,
    line: u32,
    cat: TokenCategory,
    ty: TokenType,
}

const_assert!(std::mem::size_of::<Token>() <= 16);

impl Token {
    /// Create a token carrying its type's default category
    #[inline]
    pub const fn new(ty: TokenType, pos: u32, len: u32, line: u32) -> Self {
        Self::with_category(ty.category(), ty, pos, len, line)
    }

    #[inline]
    pub const fn with_category(
        cat: TokenCategory,
        ty: TokenType,
        pos: u32,
        len: u32,
        line: u32,
    ) -> Self {
        Self {
            len,
            pos,
            line,
            cat,
            ty,
        }
    }

    /// The end-of-file sentinel: zero length, no category
    #[inline]
    pub const fn eof(pos: u32, line: u32) -> Self {
        Self::with_category(
            TokenCategory::NON_CATEGORICAL,
            TokenType::EndOfFile,
            pos,
            0,
            line,
        )
    }

    /// A sentinel for an unrecognized byte span
    #[inline]
    pub const fn illegal(pos: u32, len: u32, line: u32) -> Self {
        Self::with_category(
            TokenCategory::NON_CATEGORICAL,
            TokenType::Illegal,
            pos,
            len,
            line,
        )
    }

    #[inline]
    pub const fn ty(&self) -> TokenType {
        self.ty
    }

    #[inline]
    pub const fn category(&self) -> TokenCategory {
        self.cat
    }

    /// Byte offset of the first lexeme byte
    #[inline]
    pub const fn pos(&self) -> u32 {
        self.pos
    }

    /// Lexeme length in bytes
    #[inline]
    pub const fn len(&self) -> u32 {
        self.len
    }

    #[inline]
    pub const fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// 1-based line of the first lexeme byte
    #[inline]
    pub const fn line(&self) -> u32 {
        self.line
    }

    /// Byte range of the lexeme in the source buffer
    #[inline]
    pub fn range(&self) -> Range<usize> {
        let start = self.pos as usize;
        start..start + self.len as usize
    }

    /// True if the token is in any of the categories in `mask`
    #[inline]
    pub const fn is(&self, mask: TokenCategory) -> bool {
        self.cat.intersects(mask)
    }

    #[inline]
    pub const fn is_eof(&self) -> bool {
        matches!(self.ty, TokenType::EndOfFile)
    }

    #[inline]
    pub const fn is_illegal(&self) -> bool {
        matches!(self.ty, TokenType::Illegal)
    }

    /// True for the clause separators `;` and `,`
    #[inline]
    pub const fn is_terminator(&self) -> bool {
        matches!(self.ty, TokenType::Semicolon | TokenType::Comma)
    }

    /// Binary-operator precedence, see [`TokenType::prec`]
    #[inline]
    pub const fn prec(&self) -> Option<u16> {
        self.ty.prec()
    }

    /// The raw lexeme bytes
    ///
    /// # Panics
    ///
    /// Panics if the token does not lie inside `lxr`'s buffer, which means
    /// it came from a different buffer.
    pub fn lexeme<'a>(&self, lxr: &Lexer<'a>) -> &'a [u8] {
        let bytes = lxr.bytes();
        let range = self.range();
        assert!(
            range.end <= bytes.len(),
            "token {}..{} lies outside a {}-byte buffer",
            range.start,
            range.end,
            bytes.len()
        );
        &bytes[range]
    }

    /// The lexeme as text, or `None` for zero-length tokens
    ///
    /// Invalid UTF-8 is replaced with U+FFFD.
    ///
    /// # Panics
    ///
    /// Panics if the token does not lie inside `lxr`'s buffer.
    ///
    /// # Examples
    ///
    /// ```
    /// use hirc_lex::{Lexer, TokenType};
    ///
    /// let mut lexer = Lexer::new(b"let answer = 42;")?;
    /// let tokens = lexer.tokenize();
    /// assert_eq!(tokens[1].ty(), TokenType::Identifier);
    /// assert_eq!(tokens[1].value(&lexer).as_deref(), Some("answer"));
    /// assert_eq!(tokens.last().unwrap().value(&lexer), None);
    /// # Ok::<(), hirc_lex::LexError>(())
    /// ```
    pub fn value(&self, lxr: &Lexer<'_>) -> Option<String> {
        if self.len == 0 {
            return None;
        }
        let bytes = lxr.bytes();
        let start = self.pos as usize;
        let last = start + self.len as usize - 1;
        assert!(start < bytes.len(), "token offset {start} out of bounds");
        assert!(last < bytes.len(), "token end {last} out of bounds");

        Some(String::from_utf8_lossy(&bytes[start..=last]).into_owned())
    }

    /// Debug rendering: type, value, position and category on one line
    pub fn format(&self, lxr: &Lexer<'_>) -> String {
        let value = self.value(lxr);
        format!(
            "{:<12}: \"{}\" -- LINE={},POS={} -- {}\n",
            self.ty,
            value.as_deref().unwrap_or("N/A"),
            self.line,
            self.pos,
            self.cat
        )
    }
}
