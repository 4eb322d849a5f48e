//! Lexer implementation.
//!
//! `core` owns the [`Lexer`] state and the dispatch loop. Every other
//! module adds an `impl Lexer` block for one lexeme family.

mod comment;
mod core;
mod identifier;
mod number;
mod operator;
mod string;

pub use self::core::Lexer;
