//! Whitespace and comment skipping.

use crate::token::Token;
use crate::unicode::is_whitespace;
use crate::Lexer;

impl<'a> Lexer<'a> {
    /// Skips whitespace, line comments and block comments.
    ///
    /// Returns an Illegal token if a block comment runs to the end of the
    /// buffer; the token spans from its `/*` to the end.
    pub(crate) fn skip_trivia(&mut self) -> Option<Token> {
        loop {
            match (self.cursor.current(), self.cursor.peek(1)) {
                (Some(b), _) if is_whitespace(b) => self.cursor.advance(),
                (Some(b'/'), Some(b'/')) => self.skip_line_comment(),
                (Some(b'/'), Some(b'*')) => {
                    if let Some(unterminated) = self.skip_block_comment() {
                        return Some(unterminated);
                    }
                },
                _ => return None,
            }
        }
    }

    /// Skips a line comment, leaving the `\n` for whitespace handling.
    fn skip_line_comment(&mut self) {
        self.cursor.eat_while(|b| b != b'\n');
    }

    /// Skips a block comment. Block comments nest.
    fn skip_block_comment(&mut self) -> Option<Token> {
        self.token_start = self.cursor.position();
        self.token_line = self.cursor.line();
        self.cursor.advance_n(2);

        let mut depth = 1usize;
        loop {
            match (self.cursor.current(), self.cursor.peek(1)) {
                (None, _) => return Some(self.illegal_token()),
                (Some(b'/'), Some(b'*')) => {
                    self.cursor.advance_n(2);
                    depth += 1;
                },
                (Some(b'*'), Some(b'/')) => {
                    self.cursor.advance_n(2);
                    depth -= 1;
                    if depth == 0 {
                        return None;
                    }
                },
                _ => self.cursor.advance(),
            }
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
    fn test_comments_only() {
        let tokens = lex("// comment\n/* block */\n// another");
        assert_eq!(tokens, vec![Token::eof(33, 3)]);
    }

    #[test]
    fn test_line_comment_ends_at_newline() {
        let tokens = lex("a // b c\nd");
        assert_eq!(tokens.len(), 3);
        assert_eq!(tokens[1].pos(), 9);
        assert_eq!(tokens[1].line(), 2);
    }

    #[test]
    fn test_nested_block_comment() {
        let tokens = lex("/* outer /* inner */ still outer */ x");
        assert_eq!(tokens[0].ty(), TokenType::Identifier);
        assert_eq!(tokens[0].pos(), 36);
    }

    #[test]
    fn test_block_comment_counts_lines() {
        let tokens = lex("/*\n\n*/x");
        assert_eq!(tokens[0].line(), 3);
    }

    #[test]
    fn test_unterminated_block_comment() {
        let tokens = lex("a /* b\n /* c */");
        assert_eq!(tokens.len(), 3);
        assert_eq!(tokens[1], Token::illegal(2, 13, 1));
        assert_eq!(tokens[2], Token::eof(15, 2));
    }

    #[test]
    fn test_comment_markers_need_both_bytes() {
        let tokens = lex("a / b /");
        assert_eq!(tokens[1].ty(), TokenType::Div);
        assert_eq!(tokens[3].ty(), TokenType::Div);
        assert!(tokens[4].is_eof());
    }

    #[test]
    fn test_close_marker_outside_comment_is_operators() {
        let types: Vec<TokenType> = lex("*/").iter().map(|t| t.ty()).collect();
        assert_eq!(types, vec![TokenType::Mul, TokenType::Div, TokenType::EndOfFile]);
    }

    #[test]
    fn test_vertical_tab_and_form_feed_are_whitespace() {
        let tokens = lex("\x0B\x0Cx");
        assert_eq!(tokens[0].pos(), 2);
    }
}
