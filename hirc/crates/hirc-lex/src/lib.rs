//! hirc-lex - Lexical Analyzer for the HIR language
//!
//! This crate turns a UTF-8 source buffer into a sequence of positioned,
//! categorized [`Token`]s. Tokens are compact views into the buffer: they
//! store an offset, a length and a line, never the lexeme itself.
//!
//! # Example Usage
//!
//! ```
//! use hirc_lex::{Lexer, TokenCategory, TokenType};
//!
//! let mut lexer = Lexer::new(b"x += 1;")?;
//! let tokens = lexer.tokenize();
//!
//! assert_eq!(tokens[1].ty(), TokenType::PlusEq);
//! assert!(tokens[1].is(TokenCategory::VALUE_ASSIGN_OP));
//! assert_eq!(tokens[1].value(&lexer).as_deref(), Some("+="));
//! assert!(tokens[3].is_terminator());
//! assert!(tokens[4].is_eof());
//! # Ok::<(), hirc_lex::LexError>(())
//! ```
//!
//! # Module Structure
//!
//! - [`token`] - Token record, type table and category flags
//! - [`keyword`] - Compile-time hashed keyword table
//! - [`lexer`] - Scanner
//! - [`cursor`] - Byte cursor for source traversal
//! - [`unicode`] - Byte classification
//!
//! # Error Handling
//!
//! Scanning itself cannot fail. Unrecognized input becomes an
//! [`Illegal`](TokenType::Illegal) token and scanning resumes right after
//! it, so a caller can report every problem in one pass. [`LexError`] only
//! covers buffers too large for 32-bit offsets and bad raw discriminants.

#![warn(rustdoc::missing_crate_level_docs)]

pub mod cursor;
pub mod keyword;
pub mod lexer;
pub mod token;
pub mod unicode;

mod edge_cases;
mod error;
mod murmur;

pub use error::{LexError, LexResult};
pub use keyword::{KeywordEntry, KeywordTable, KEYWORDS, KEYWORD_SEED, MAX_KEYWORD_LEN};
pub use lexer::Lexer;
pub use murmur::murmur3_x86_32;
pub use token::{Token, TokenCategory, TokenInfo, TokenType, TOKEN_TABLE};
