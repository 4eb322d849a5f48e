//! Identifier and keyword lexing.

use crate::keyword::KEYWORDS;
use crate::token::{Token, TokenType};
use crate::unicode::is_ident_continue;
use crate::Lexer;

impl<'a> Lexer<'a> {
    /// Lexes an identifier, promoting it to a keyword when the table says so.
    pub(crate) fn lex_identifier(&mut self) -> Token {
        self.cursor.eat_while(is_ident_continue);
        let text = self.cursor.slice_from(self.token_start);

        match KEYWORDS.get(text) {
            Some(entry) => Token::with_category(
                entry.category,
                entry.ty,
                self.token_start as u32,
                text.len() as u32,
                self.token_line,
            ),
            None => self.make(TokenType::Identifier),
        }
    }
}

#[cfg(test)]
mod tests {
    use crate::{Lexer, TokenCategory, TokenType};

    #[test]
    fn test_keywords_and_identifiers() {
        let mut lexer = Lexer::new(b"proc main letter _x9 null").unwrap();
        let types: Vec<TokenType> = lexer.tokenize().iter().map(|t| t.ty()).collect();
        assert_eq!(
            types,
            vec![
                TokenType::Proc,
                TokenType::Identifier,
                TokenType::Identifier,
                TokenType::Identifier,
                TokenType::Null,
                TokenType::EndOfFile,
            ]
        );
    }

    #[test]
    fn test_keyword_carries_table_category() {
        let mut lexer = Lexer::new(b"while").unwrap();
        let token = lexer.next_token();
        assert!(token.is(TokenCategory::KEYWORD));
        assert!(token.is(TokenCategory::CONTROL_FLOW));
        assert_eq!(token.category(), TokenType::While.category());
        assert_eq!(token.len(), 5);
    }

    #[test]
    fn test_identifier_category() {
        let mut lexer = Lexer::new(b"snake_Case_1").unwrap();
        let token = lexer.next_token();
        assert_eq!(token.category(), TokenCategory::IDENTIFIER);
        assert_eq!(token.value(&lexer).as_deref(), Some("snake_Case_1"));
    }

    #[test]
    fn test_identifier_sharing_a_keyword_hash() {
        // same murmur3 hash as `let`
        let mut lexer = Lexer::new(b"aaawRZY6 let").unwrap();
        let tokens = lexer.tokenize();
        assert_eq!(tokens[0].ty(), TokenType::Identifier);
        assert_eq!(tokens[0].category(), TokenCategory::IDENTIFIER);
        assert_eq!(tokens[1].ty(), TokenType::Let);
    }

    #[test]
    fn test_long_identifier_is_not_a_keyword() {
        let source = "namespace_namespace_namespace";
        let mut lexer = Lexer::new(source.as_bytes()).unwrap();
        let token = lexer.next_token();
        assert_eq!(token.ty(), TokenType::Identifier);
        assert_eq!(token.len() as usize, source.len());
    }

    #[test]
    fn test_identifier_stops_at_non_ascii() {
        let mut lexer = Lexer::new("abé".as_bytes()).unwrap();
        let tokens = lexer.tokenize();
        assert_eq!(tokens[0].len(), 2);
        assert_eq!(tokens[1].ty(), TokenType::Illegal);
        assert_eq!(tokens[1].len(), 2);
    }
}
