//! Number literal lexing.
//!
//! This module handles lexing of integer and floating-point literals.
//!
//! - Decimal: `42`, `1_000`
//! - Hexadecimal: `0xFF`, `0xAB_CD`
//! - Binary: `0b1010`
//! - Octal: `0o777`
//! - Float: `3.14`, `1e10`, `2.5e-3`
//!
//! A malformed literal becomes one Illegal token covering the whole
//! alphanumeric run, so `0xZZ` or `12abc` never split into several tokens.

use crate::token::{Token, TokenType};
use crate::unicode::{is_digit_in_base, is_ident_continue};
use crate::Lexer;

impl<'a> Lexer<'a> {
    /// Lexes a number literal. Entered on an ASCII digit.
    pub(crate) fn lex_number(&mut self) -> Token {
        let radix = match (self.cursor.current(), self.cursor.peek(1)) {
            (Some(b'0'), Some(b'x' | b'X')) => 16,
            (Some(b'0'), Some(b'b' | b'B')) => 2,
            (Some(b'0'), Some(b'o' | b'O')) => 8,
            _ => 10,
        };

        let ty = if radix == 10 {
            self.lex_decimal()
        } else {
            self.cursor.advance_n(2);
            if self.eat_digits(radix) == 0 {
                TokenType::Illegal
            } else {
                TokenType::IntegerLiteral
            }
        };

        // A literal must not run straight into identifier characters.
        if ty == TokenType::Illegal || self.cursor.check(is_ident_continue) {
            self.cursor.eat_while(is_ident_continue);
            return self.illegal_token();
        }
        self.make(ty)
    }

    fn lex_decimal(&mut self) -> TokenType {
        self.eat_digits(10);
        let mut ty = TokenType::IntegerLiteral;

        if self.cursor.current() == Some(b'.') && self.cursor.peek(1).is_some_and(|b| b.is_ascii_digit()) {
            self.cursor.advance();
            self.eat_digits(10);
            ty = TokenType::FloatLiteral;
        }

        if matches!(self.cursor.current(), Some(b'e' | b'E')) {
            let digits_at = match self.cursor.peek(1) {
                Some(b'+' | b'-') => 2,
                _ => 1,
            };
            if self.cursor.peek(digits_at).is_some_and(|b| b.is_ascii_digit()) {
                self.cursor.advance_n(digits_at);
                self.eat_digits(10);
                ty = TokenType::FloatLiteral;
            }
        }
        ty
    }

    /// Eats digits of `radix` and `_` separators, returning the digit count.
    fn eat_digits(&mut self, radix: u32) -> usize {
        let mut digits = 0;
        while let Some(b) = self.cursor.current() {
            if is_digit_in_base(b, radix) {
                digits += 1;
            } else if b != b'_' {
                break;
            }
            self.cursor.advance();
        }
        digits
    }
}
