//! String and character literal lexing.
//!
//! Both literal forms are single-line. Escapes are validated only far
//! enough to find the closing quote; decoding them is left to later phases.

use crate::token::{Token, TokenType};
use crate::unicode::utf8_sequence_len;
use crate::Lexer;

impl<'a> Lexer<'a> {
    /// Lexes a string literal. Entered on the opening `"`.
    ///
    /// A raw newline or the end of the buffer before the closing quote
    /// produces an Illegal token that stops short of the newline.
    pub(crate) fn lex_string(&mut self) -> Token {
        self.cursor.advance();
        loop {
            match self.cursor.current() {
                None | Some(b'\n') => return self.illegal_token(),
                Some(b'"') => {
                    self.cursor.advance();
                    return self.make(TokenType::StringLiteral);
                },
                Some(b'\\') => {
                    self.cursor.advance();
                    if !matches!(self.cursor.current(), None | Some(b'\n')) {
                        self.cursor.advance();
                    }
                },
                Some(_) => self.cursor.advance(),
            }
        }
    }

    /// Lexes a character literal. Entered on the opening `'`.
    ///
    /// Accepts one escape (`'\n'`) or one UTF-8 encoded scalar. On failure
    /// the Illegal token runs to the next `'` on the same line, inclusive,
    /// or to the end of the line.
    pub(crate) fn lex_char(&mut self) -> Token {
        self.cursor.advance();
        if self.char_body() && self.cursor.eat(b'\'') {
            return self.make(TokenType::CharLiteral);
        }
        self.cursor.eat_while(|b| b != b'\'' && b != b'\n');
        self.cursor.eat(b'\'');
        self.illegal_token()
    }

    /// Consumes the scalar between the quotes, returning false if there is none.
    fn char_body(&mut self) -> bool {
        match self.cursor.current() {
            None | Some(b'\n' | b'\'') => false,
            Some(b'\\') => {
                self.cursor.advance();
                match self.cursor.current() {
                    None | Some(b'\n') => false,
                    Some(_) => {
                        self.cursor.advance();
                        true
                    },
                }
            },
            Some(_) => match utf8_sequence_len(self.cursor.remaining()) {
                Some(width) => {
                    self.cursor.advance_n(width);
                    true
                },
                None => false,
            },
        }
    }
}

#[cfg(test)]
mod tests {
    use crate::{Lexer, Token, TokenType};

    fn lex(source: &str) -> Vec<Token> {
        Lexer::new(source.as_bytes()).unwrap().tokenize()
    }

    #[test]
    fn test_string_literals() {
        let tokens = lex(r#""hello" "" "a\"b" "tab\t""#);
        let lens: Vec<u32> = tokens.iter().map(|t| t.len()).collect();
        assert!(tokens[..4].iter().all(|t| t.ty() == TokenType::StringLiteral));
        assert_eq!(lens, vec![7, 2, 6, 7, 0]);
    }

    #[test]
    fn test_string_value_keeps_quotes() {
        let mut lexer = Lexer::new("\"héllo\"".as_bytes()).unwrap();
        let token = lexer.next_token();
        assert_eq!(token.value(&lexer).as_deref(), Some("\"héllo\""));
    }

    #[test]
    fn test_unterminated_string_stops_before_newline() {
        let tokens = lex("\"abc\nx");
        assert_eq!(tokens[0], Token::illegal(0, 4, 1));
        assert_eq!(tokens[1].ty(), TokenType::Identifier);
        assert_eq!(tokens[1].line(), 2);
    }

    #[test]
    fn test_unterminated_string_at_end_of_buffer() {
        assert_eq!(lex("\"abc")[0], Token::illegal(0, 4, 1));
        assert_eq!(lex("\"abc\\")[0], Token::illegal(0, 5, 1));
    }

    #[test]
    fn test_escaped_newline_does_not_continue_string() {
        let tokens = lex("\"a\\\nb\"");
        assert_eq!(tokens[0], Token::illegal(0, 3, 1));
    }

    #[test]
    fn test_char_literals() {
        for source in ["'a'", "'\\n'", "'\\''", "'λ'", "'😀'"] {
            let tokens = lex(source);
            assert_eq!(tokens[0].ty(), TokenType::CharLiteral, "{source}");
            assert_eq!(tokens[0].len() as usize, source.len(), "{source}");
            assert!(tokens[1].is_eof());
        }
    }

    #[test]
    fn test_malformed_char_literals() {
        assert_eq!(lex("''")[0], Token::illegal(0, 2, 1));
        assert_eq!(lex("'ab' x")[0], Token::illegal(0, 4, 1));
        assert_eq!(lex("'a")[0], Token::illegal(0, 2, 1));
        assert_eq!(lex("'\n'")[0], Token::illegal(0, 1, 1));

        let mut lexer = Lexer::new(b"'\xFF'").unwrap();
        assert_eq!(lexer.next_token(), Token::illegal(0, 3, 1));
    }
}
