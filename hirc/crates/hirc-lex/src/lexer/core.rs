//! Core lexer implementation.
//!
//! This module contains the main Lexer struct and its dispatch loop.

use std::iter::FusedIterator;

use tracing::{debug, trace};

use crate::cursor::Cursor;
use crate::error::{LexError, LexResult};
use crate::token::{Token, TokenType};
use crate::unicode::{is_ident_start, utf8_sequence_len};

const BOM: &[u8] = b"\xEF\xBB\xBF";

/// Lexer for HIR source buffers.
///
/// Borrows the buffer for its whole lifetime and yields [`Token`]s that
/// refer back into it. Scanning never fails: unrecognized input becomes an
/// [`Illegal`](TokenType::Illegal) token and scanning resumes after it.
///
/// Once the end of the buffer is reached, [`Lexer::next_token`] keeps
/// returning the same EndOfFile token. The [`Iterator`] impl yields that
/// token exactly once and then stops, and [`Lexer::tokenize`] counts as
/// having yielded it. Only [`Lexer::reset`] rearms the iterator.
///
/// # Example
///
/// ```
/// use hirc_lex::{Lexer, TokenType};
///
/// let mut lexer = Lexer::new(b"x += 1;")?;
/// let types: Vec<TokenType> = lexer.by_ref().map(|t| t.ty()).collect();
/// assert_eq!(
///     types,
///     [
///         TokenType::Identifier,
///         TokenType::PlusEq,
///         TokenType::IntegerLiteral,
///         TokenType::Semicolon,
///         TokenType::EndOfFile,
///     ]
/// );
/// # Ok::<(), hirc_lex::LexError>(())
/// ```
#[derive(Clone, Debug)]
pub struct Lexer<'a> {
    /// Byte cursor; its position always fits in `u32`.
    pub(crate) cursor: Cursor<'a>,

    /// Starting byte offset of the token being scanned.
    pub(crate) token_start: usize,

    /// Line on which the token being scanned starts.
    pub(crate) token_line: u32,

    /// Tokens produced since the last reset, EndOfFile included.
    tokens: usize,

    /// Illegal tokens produced since the last reset.
    illegal: usize,

    /// Set once EndOfFile has been produced.
    finished: bool,

    /// Set once the iterator has yielded EndOfFile.
    exhausted: bool,
}

impl<'a> Lexer<'a> {
    /// Creates a lexer over a fully materialized buffer.
    ///
    /// A leading UTF-8 byte order mark is skipped.
    ///
    /// # Errors
    ///
    /// Returns [`LexError::SourceTooLarge`] when the buffer is longer than
    /// `u32::MAX` bytes.
    pub fn new(bytes: &'a [u8]) -> LexResult<Self> {
        check_len(bytes.len())?;
        let mut lexer = Self {
            cursor: Cursor::new(bytes),
            token_start: 0,
            token_line: 1,
            tokens: 0,
            illegal: 0,
            finished: false,
            exhausted: false,
        };
        lexer.skip_bom();
        Ok(lexer)
    }

    fn skip_bom(&mut self) {
        if self.cursor.bytes().starts_with(BOM) {
            self.cursor.advance_n(BOM.len());
        }
    }

    /// Restarts scanning from the beginning of the buffer.
    pub fn reset(&mut self) {
        self.cursor = Cursor::new(self.cursor.bytes());
        self.token_start = 0;
        self.token_line = 1;
        self.tokens = 0;
        self.illegal = 0;
        self.finished = false;
        self.exhausted = false;
        self.skip_bom();
    }

    /// Scans the whole buffer from the start.
    ///
    /// The returned sequence always ends with exactly one EndOfFile token.
    /// The iterator is left exhausted.
    pub fn tokenize(&mut self) -> Vec<Token> {
        self.reset();
        let mut tokens = Vec::with_capacity(self.cursor.bytes().len() / 4 + 1);
        loop {
            let token = self.next_token();
            tokens.push(token);
            if token.is_eof() {
                self.exhausted = true;
                return tokens;
            }
        }
    }

    /// Returns the next token from the buffer.
    ///
    /// Skips whitespace and comments, then dispatches on the first byte of
    /// the lexeme.
    pub fn next_token(&mut self) -> Token {
        if let Some(unterminated) = self.skip_trivia() {
            return self.record(unterminated);
        }

        self.token_start = self.cursor.position();
        self.token_line = self.cursor.line();

        let Some(b) = self.cursor.current() else {
            let eof = Token::eof(self.token_start as u32, self.token_line);
            if !self.finished {
                self.finished = true;
                self.tokens += 1;
                debug!(
                    tokens = self.tokens,
                    illegal = self.illegal,
                    bytes = self.cursor.bytes().len(),
                    "scan complete"
                );
            }
            return eof;
        };

        let token = match b {
            b'(' => self.single(TokenType::LParen),
            b')' => self.single(TokenType::RParen),
            b'{' => self.single(TokenType::LBrace),
            b'}' => self.single(TokenType::RBrace),
            b'[' => self.single(TokenType::LSqrBracket),
            b']' => self.single(TokenType::RSqrBracket),
            b';' => self.single(TokenType::Semicolon),
            b',' => self.single(TokenType::Comma),
            b'@' => self.single(TokenType::At),
            b'?' => self.single(TokenType::Question),
            b'~' => self.single(TokenType::BitwiseNot),
            b'+' => self.lex_plus(),
            b'-' => self.lex_minus(),
            b'*' => self.lex_star(),
            b'/' => self.lex_slash(),
            b'%' => self.lex_percent(),
            b'=' => self.lex_equals(),
            b'!' => self.lex_bang(),
            b'<' => self.lex_less(),
            b'>' => self.lex_greater(),
            b'&' => self.lex_ampersand(),
            b'|' => self.lex_pipe(),
            b'^' => self.lex_caret(),
            b':' => self.lex_colon(),
            b'.' => self.lex_dot(),
            b'"' => self.lex_string(),
            b'\'' => self.lex_char(),
            b'0'..=b'9' => self.lex_number(),
            b if is_ident_start(b) => self.lex_identifier(),
            0x80..=0xFF => {
                let width = utf8_sequence_len(self.cursor.remaining()).unwrap_or(1);
                self.cursor.advance_n(width);
                self.illegal_token()
            },
            _ => {
                self.cursor.advance();
                self.illegal_token()
            },
        };

        self.record(token)
    }

    fn record(&mut self, token: Token) -> Token {
        self.tokens += 1;
        if token.is_illegal() {
            self.illegal += 1;
            trace!(
                pos = token.pos(),
                len = token.len(),
                line = token.line(),
                "illegal token"
            );
        }
        token
    }

    /// Consumes one byte and produces a token of type `ty`.
    #[inline]
    pub(crate) fn single(&mut self, ty: TokenType) -> Token {
        self.cursor.advance();
        self.make(ty)
    }

    /// A token of type `ty` spanning from the token start to the cursor.
    #[inline]
    pub(crate) fn make(&self, ty: TokenType) -> Token {
        Token::new(ty, self.token_start as u32, self.lexeme_len(), self.token_line)
    }

    /// An Illegal token spanning from the token start to the cursor.
    #[inline]
    pub(crate) fn illegal_token(&self) -> Token {
        Token::illegal(self.token_start as u32, self.lexeme_len(), self.token_line)
    }

    #[inline]
    fn lexeme_len(&self) -> u32 {
        (self.cursor.position() - self.token_start) as u32
    }

    /// The buffer being scanned.
    #[inline]
    pub fn bytes(&self) -> &'a [u8] {
        self.cursor.bytes()
    }

    /// Returns the current line number (1-based).
    #[inline]
    pub fn line(&self) -> u32 {
        self.cursor.line()
    }

    /// Returns the current byte offset.
    #[inline]
    pub fn position(&self) -> usize {
        self.cursor.position()
    }

    /// Number of Illegal tokens produced since the last reset.
    #[inline]
    pub fn illegal_count(&self) -> usize {
        self.illegal
    }

    /// True once EndOfFile has been produced.
    #[inline]
    pub fn is_finished(&self) -> bool {
        self.finished
    }
}

fn check_len(len: usize) -> LexResult<()> {
    if u32::try_from(len).is_err() {
        return Err(LexError::SourceTooLarge { len });
    }
    Ok(())
}

impl<'a> Iterator for Lexer<'a> {
    type Item = Token;

    fn next(&mut self) -> Option<Self::Item> {
        if self.exhausted {
            return None;
        }
        let token = self.next_token();
        if token.is_eof() {
            self.exhausted = true;
        }
        Some(token)
    }
}

impl FusedIterator for Lexer<'_> {}
