//! Error types for hirc-lex.
//!
//! Malformed input is never an error here: it becomes an
//! [`Illegal`](crate::TokenType::Illegal) token. These errors cover misuse of
//! the API itself.

use thiserror::Error;

/// Error type for lexer construction and token conversions
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum LexError {
    /// Token offsets are 32-bit, so larger buffers cannot be addressed
    #[error("source is {len} bytes; the lexer addresses at most {} bytes", u32::MAX)]
    SourceTooLarge { len: usize },

    /// A raw discriminant outside the closed set of token types
    #[error("{0} is not a token type discriminant")]
    InvalidTokenType(u8),
}

/// Result type alias for lexer operations
pub type LexResult<T> = std::result::Result<T, LexError>;
