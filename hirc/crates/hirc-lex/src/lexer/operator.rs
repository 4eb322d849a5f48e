//! Operator and punctuation lexing.
//!
//! Every function here is entered with the cursor on the operator's first
//! byte and applies maximal munch.

use crate::token::{Token, TokenType};
use crate::Lexer;

impl<'a> Lexer<'a> {
    /// Lexes `op` or `op=`, whichever is longer.
    fn lex_with_eq(&mut self, plain: TokenType, with_eq: TokenType) -> Token {
        self.cursor.advance();
        if self.cursor.eat(b'=') {
            self.make(with_eq)
        } else {
            self.make(plain)
        }
    }

    /// Handles: `+`, `++`, `+=`
    pub(crate) fn lex_plus(&mut self) -> Token {
        self.cursor.advance();
        if self.cursor.eat(b'+') {
            self.make(TokenType::Inc)
        } else if self.cursor.eat(b'=') {
            self.make(TokenType::PlusEq)
        } else {
            self.make(TokenType::Plus)
        }
    }

    /// Handles: `-`, `--`, `-=`, `->`
    pub(crate) fn lex_minus(&mut self) -> Token {
        self.cursor.advance();
        if self.cursor.eat(b'-') {
            self.make(TokenType::Dec)
        } else if self.cursor.eat(b'=') {
            self.make(TokenType::SubEq)
        } else if self.cursor.eat(b'>') {
            self.make(TokenType::SkinnyArrow)
        } else {
            self.make(TokenType::Sub)
        }
    }

    /// Handles: `*`, `*=`
    pub(crate) fn lex_star(&mut self) -> Token {
        self.lex_with_eq(TokenType::Mul, TokenType::MulEq)
    }

    /// Handles: `/`, `/=`
    ///
    /// Comments never reach here; they are consumed as trivia.
    pub(crate) fn lex_slash(&mut self) -> Token {
        self.lex_with_eq(TokenType::Div, TokenType::DivEq)
    }

    /// Handles: `%`, `%=`
    pub(crate) fn lex_percent(&mut self) -> Token {
        self.lex_with_eq(TokenType::Mod, TokenType::ModEq)
    }

    /// Handles: `=`, `==`
    pub(crate) fn lex_equals(&mut self) -> Token {
        self.lex_with_eq(TokenType::ValueAssignment, TokenType::Eq)
    }

    /// Handles: `!`, `!=`
    pub(crate) fn lex_bang(&mut self) -> Token {
        self.lex_with_eq(TokenType::LogicalNot, TokenType::Neq)
    }

    /// Handles: `^`, `^=`
    pub(crate) fn lex_caret(&mut self) -> Token {
        self.lex_with_eq(TokenType::Xor, TokenType::XorEq)
    }

    /// Handles: `<`, `<=`, `<<`, `<<=`
    pub(crate) fn lex_less(&mut self) -> Token {
        self.cursor.advance();
        if self.cursor.eat(b'=') {
            self.make(TokenType::Lte)
        } else if self.cursor.eat(b'<') {
            if self.cursor.eat(b'=') {
                self.make(TokenType::LshiftEq)
            } else {
                self.make(TokenType::Lshift)
            }
        } else {
            self.make(TokenType::Lt)
        }
    }

    /// Handles: `>`, `>=`, `>>`, `>>=`
    pub(crate) fn lex_greater(&mut self) -> Token {
        self.cursor.advance();
        if self.cursor.eat(b'=') {
            self.make(TokenType::Gte)
        } else if self.cursor.eat(b'>') {
            if self.cursor.eat(b'=') {
                self.make(TokenType::RshiftEq)
            } else {
                self.make(TokenType::Rshift)
            }
        } else {
            self.make(TokenType::Gt)
        }
    }

    /// Handles: `&`, `&&`, `&=`
    pub(crate) fn lex_ampersand(&mut self) -> Token {
        self.cursor.advance();
        if self.cursor.eat(b'&') {
            self.make(TokenType::LogicalAnd)
        } else if self.cursor.eat(b'=') {
            self.make(TokenType::BitwiseAndEq)
        } else {
            self.make(TokenType::BitwiseAnd)
        }
    }

    /// Handles: `|`, `||`, `|=`
    pub(crate) fn lex_pipe(&mut self) -> Token {
        self.cursor.advance();
        if self.cursor.eat(b'|') {
            self.make(TokenType::LogicalOr)
        } else if self.cursor.eat(b'=') {
            self.make(TokenType::BitwiseOrEq)
        } else {
            self.make(TokenType::BitwiseOr)
        }
    }

    /// Handles: `:`, `::`
    pub(crate) fn lex_colon(&mut self) -> Token {
        self.cursor.advance();
        if self.cursor.eat(b':') {
            self.make(TokenType::NamespaceOperator)
        } else {
            self.make(TokenType::Colon)
        }
    }

    /// Handles: `.`, `...`
    ///
    /// `..` is two Dot tokens.
    pub(crate) fn lex_dot(&mut self) -> Token {
        self.cursor.advance();
        if self.cursor.current() == Some(b'.') && self.cursor.peek(1) == Some(b'.') {
            self.cursor.advance_n(2);
            self.make(TokenType::Ellipsis)
        } else {
            self.make(TokenType::Dot)
        }
    }
}
