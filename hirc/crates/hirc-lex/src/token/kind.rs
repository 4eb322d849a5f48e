//! The closed set of token types and the table every per-type fact is read
//! from.
//!
//! [`TOKEN_TABLE`] holds one row per [`TokenType`], in discriminant order:
//! canonical name, surface spelling and default category. Names, spellings,
//! categories and the keyword table are all derived from it.

use std::fmt;

use super::category::TokenCategory;
use crate::error::LexError;
use crate::keyword::KEYWORDS;

/// Concrete lexical kind of a token
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[repr(u8)]
pub enum TokenType {
    // Variable-content kinds
    Identifier,
    IntegerLiteral,
    FloatLiteral,
    StringLiteral,
    CharLiteral,

    // Punctuation
    LParen,
    RParen,
    LBrace,
    RBrace,
    LSqrBracket,
    RSqrBracket,
    Semicolon,
    Comma,
    Colon,
    NamespaceOperator,
    Dot,
    SkinnyArrow,
    At,
    Question,
    Ellipsis,

    // Operators
    ValueAssignment,
    Plus,
    Sub,
    Mul,
    Div,
    Mod,
    Inc,
    Dec,
    PlusEq,
    SubEq,
    MulEq,
    DivEq,
    ModEq,
    BitwiseAnd,
    BitwiseOr,
    Xor,
    BitwiseNot,
    Lshift,
    Rshift,
    BitwiseAndEq,
    BitwiseOrEq,
    XorEq,
    LshiftEq,
    RshiftEq,
    LogicalAnd,
    LogicalOr,
    LogicalNot,
    Eq,
    Neq,
    Lt,
    Lte,
    Gt,
    Gte,

    // Keywords
    If,
    Else,
    While,
    For,
    Return,
    Break,
    Continue,
    Defer,
    Proc,
    Let,
    Const,
    Mut,
    Struct,
    Enum,
    Namespace,
    Alias,
    As,
    Sizeof,
    Typeof,
    Inline,
    Extern,
    True,
    False,
    Null,

    // Sentinels
    EndOfFile,
    Illegal,
}

/// One row of [`TOKEN_TABLE`]
#[derive(Clone, Copy, Debug)]
pub struct TokenInfo {
    pub ty: TokenType,
    /// Canonical identifier name, e.g. `LogicalAnd`
    pub name: &'static str,
    /// Surface spelling, e.g. `&&`, or a `<...>` placeholder for
    /// variable-content kinds
    pub spelling: &'static str,
    /// Category a token of this type carries
    pub category: TokenCategory,
}

const fn row(
    ty: TokenType,
    name: &'static str,
    spelling: &'static str,
    category: TokenCategory,
) -> TokenInfo {
    TokenInfo {
        ty,
        name,
        spelling,
        category,
    }
}

type C = TokenCategory;

const NONE: C = C::NON_CATEGORICAL;
const PUNCT: C = C::PUNCTUATOR;
const ACCESS: C = C::PUNCTUATOR.union(C::BINARY_OP);
const LIT: C = C::LITERAL;
const ASSIGN: C = C::BINARY_OP.union(C::VALUE_ASSIGN_OP);
const ARITH: C = C::BINARY_OP.union(C::ARITHMETIC_OP);
const ARITH_UNARY: C = ARITH.union(C::UNARY_OP);
const ARITH_ASSIGN: C = ARITH.union(C::VALUE_ASSIGN_OP);
const STEP: C = C::UNARY_OP.union(C::ARITHMETIC_OP);
const BITWISE: C = C::BINARY_OP.union(C::BITWISE_OP);
const BITWISE_UNARY: C = BITWISE.union(C::UNARY_OP);
const BITWISE_ASSIGN: C = BITWISE.union(C::VALUE_ASSIGN_OP);
const LOGICAL: C = C::BINARY_OP.union(C::LOGICAL_OP);
const EQUALITY: C = C::BINARY_OP.union(C::EQUALITY_OP);
const RELATIONAL: C = C::BINARY_OP.union(C::RELATIONAL_OP);
const KW: C = C::KEYWORD;
const KW_FLOW: C = C::KEYWORD.union(C::CONTROL_FLOW);
const KW_DECL: C = C::KEYWORD.union(C::DECLARATION);
const KW_LIT: C = C::KEYWORD.union(C::LITERAL);

/// Number of token types
pub const TOKEN_TYPE_COUNT: usize = TokenType::Illegal as usize + 1;

/// Authoritative per-type data, indexed by discriminant
pub const TOKEN_TABLE: [TokenInfo; TOKEN_TYPE_COUNT] = {
    use TokenType as T;
    [
        row(T::Identifier, "Identifier", "<identifier>", C::IDENTIFIER),
        row(T::IntegerLiteral, "IntegerLiteral", "<integer>", LIT),
        row(T::FloatLiteral, "FloatLiteral", "<float>", LIT),
        row(T::StringLiteral, "StringLiteral", "<string>", LIT),
        row(T::CharLiteral, "CharLiteral", "<char>", LIT),
        row(T::LParen, "LParen", "(", PUNCT),
        row(T::RParen, "RParen", ")", PUNCT),
        row(T::LBrace, "LBrace", "{", PUNCT),
        row(T::RBrace, "RBrace", "}", PUNCT),
        row(T::LSqrBracket, "LSqrBracket", "[", PUNCT),
        row(T::RSqrBracket, "RSqrBracket", "]", PUNCT),
        row(T::Semicolon, "Semicolon", ";", PUNCT),
        row(T::Comma, "Comma", ",", PUNCT),
        row(T::Colon, "Colon", ":", PUNCT),
        row(T::NamespaceOperator, "NamespaceOperator", "::", ACCESS),
        row(T::Dot, "Dot", ".", ACCESS),
        row(T::SkinnyArrow, "SkinnyArrow", "->", ACCESS),
        row(T::At, "At", "@", PUNCT),
        row(T::Question, "Question", "?", PUNCT),
        row(T::Ellipsis, "Ellipsis", "...", PUNCT),
        row(T::ValueAssignment, "ValueAssignment", "=", ASSIGN),
        row(T::Plus, "Plus", "+", ARITH_UNARY),
        row(T::Sub, "Sub", "-", ARITH_UNARY),
        row(T::Mul, "Mul", "*", ARITH_UNARY),
        row(T::Div, "Div", "/", ARITH),
        row(T::Mod, "Mod", "%", ARITH),
        row(T::Inc, "Inc", "++", STEP),
        row(T::Dec, "Dec", "--", STEP),
        row(T::PlusEq, "PlusEq", "+=", ARITH_ASSIGN),
        row(T::SubEq, "SubEq", "-=", ARITH_ASSIGN),
        row(T::MulEq, "MulEq", "*=", ARITH_ASSIGN),
        row(T::DivEq, "DivEq", "/=", ARITH_ASSIGN),
        row(T::ModEq, "ModEq", "%=", ARITH_ASSIGN),
        row(T::BitwiseAnd, "BitwiseAnd", "&", BITWISE_UNARY),
        row(T::BitwiseOr, "BitwiseOr", "|", BITWISE),
        row(T::Xor, "Xor", "^", BITWISE),
        row(T::BitwiseNot, "BitwiseNot", "~", C::UNARY_OP.union(C::BITWISE_OP)),
        row(T::Lshift, "Lshift", "<<", BITWISE),
        row(T::Rshift, "Rshift", ">>", BITWISE),
        row(T::BitwiseAndEq, "BitwiseAndEq", "&=", BITWISE_ASSIGN),
        row(T::BitwiseOrEq, "BitwiseOrEq", "|=", BITWISE_ASSIGN),
        row(T::XorEq, "XorEq", "^=", BITWISE_ASSIGN),
        row(T::LshiftEq, "LshiftEq", "<<=", BITWISE_ASSIGN),
        row(T::RshiftEq, "RshiftEq", ">>=", BITWISE_ASSIGN),
        row(T::LogicalAnd, "LogicalAnd", "&&", LOGICAL),
        row(T::LogicalOr, "LogicalOr", "||", LOGICAL),
        row(T::LogicalNot, "LogicalNot", "!", C::UNARY_OP.union(C::LOGICAL_OP)),
        row(T::Eq, "Eq", "==", EQUALITY),
        row(T::Neq, "Neq", "!=", EQUALITY),
        row(T::Lt, "Lt", "<", RELATIONAL),
        row(T::Lte, "Lte", "<=", RELATIONAL),
        row(T::Gt, "Gt", ">", RELATIONAL),
        row(T::Gte, "Gte", ">=", RELATIONAL),
        row(T::If, "If", "if", KW_FLOW),
        row(T::Else, "Else", "else", KW_FLOW),
        row(T::While, "While", "while", KW_FLOW),
        row(T::For, "For", "for", KW_FLOW),
        row(T::Return, "Return", "return", KW_FLOW),
        row(T::Break, "Break", "break", KW_FLOW),
        row(T::Continue, "Continue", "continue", KW_FLOW),
        row(T::Defer, "Defer", "defer", KW_FLOW),
        row(T::Proc, "Proc", "proc", KW_DECL),
        row(T::Let, "Let", "let", KW_DECL),
        row(T::Const, "Const", "const", KW_DECL),
        row(T::Mut, "Mut", "mut", KW_DECL),
        row(T::Struct, "Struct", "struct", KW_DECL),
        row(T::Enum, "Enum", "enum", KW_DECL),
        row(T::Namespace, "Namespace", "namespace", KW_DECL),
        row(T::Alias, "Alias", "alias", KW_DECL),
        row(T::As, "As", "as", KW),
        row(T::Sizeof, "Sizeof", "sizeof", KW),
        row(T::Typeof, "Typeof", "typeof", KW),
        row(T::Inline, "Inline", "inline", KW_DECL),
        row(T::Extern, "Extern", "extern", KW_DECL),
        row(T::True, "True", "true", KW_LIT),
        row(T::False, "False", "false", KW_LIT),
        row(T::Null, "Null", "null", KW_LIT),
        row(T::EndOfFile, "EndOfFile", "<eof>", NONE),
        row(T::Illegal, "Illegal", "<illegal>", NONE),
    ]
};

// Row `i` must describe discriminant `i`.
const _: () = {
    let mut i = 0;
    while i < TOKEN_TABLE.len() {
        assert!(
            TOKEN_TABLE[i].ty as usize == i,
            "TOKEN_TABLE is out of discriminant order"
        );
        i += 1;
    }
};

const FALLBACK: &str = "Unknown";

/// Canonical name for a raw discriminant, `"Unknown"` outside the closed set
pub const fn raw_name(raw: u8) -> &'static str {
    let idx = raw as usize;
    if idx < TOKEN_TABLE.len() {
        TOKEN_TABLE[idx].name
    } else {
        FALLBACK
    }
}

/// Surface spelling for a raw discriminant, `"Unknown"` outside the closed set
pub const fn raw_spelling(raw: u8) -> &'static str {
    let idx = raw as usize;
    if idx < TOKEN_TABLE.len() {
        TOKEN_TABLE[idx].spelling
    } else {
        FALLBACK
    }
}

impl TokenType {
    /// Every token type in discriminant order
    pub const ALL: [TokenType; TOKEN_TYPE_COUNT] = {
        let mut all = [TokenType::Illegal; TOKEN_TYPE_COUNT];
        let mut i = 0;
        while i < TOKEN_TYPE_COUNT {
            all[i] = TOKEN_TABLE[i].ty;
            i += 1;
        }
        all
    };

    /// This type's row in [`TOKEN_TABLE`]
    #[inline]
    pub const fn info(self) -> TokenInfo {
        TOKEN_TABLE[self as usize]
    }

    /// Canonical identifier name, e.g. `"LogicalAnd"`
    #[inline]
    pub const fn name(self) -> &'static str {
        raw_name(self as u8)
    }

    /// Literal surface spelling, e.g. `"&&"`
    ///
    /// # Examples
    ///
    /// ```
    /// use hirc_lex::TokenType;
    ///
    /// assert_eq!(TokenType::LogicalAnd.to_string(), "LogicalAnd");
    /// assert_eq!(TokenType::LogicalAnd.string_repr(), "&&");
    /// assert_eq!(TokenType::Proc.string_repr(), "proc");
    /// ```
    #[inline]
    pub const fn string_repr(self) -> &'static str {
        raw_spelling(self as u8)
    }

    /// Category a token of this type carries
    #[inline]
    pub const fn category(self) -> TokenCategory {
        self.info().category
    }

    #[inline]
    pub const fn is_keyword(self) -> bool {
        self.category().contains(TokenCategory::KEYWORD)
    }

    /// Token type registered for a keyword spelling
    ///
    /// # Examples
    ///
    /// ```
    /// use hirc_lex::TokenType;
    ///
    /// assert_eq!(TokenType::from_keyword("defer"), Some(TokenType::Defer));
    /// assert_eq!(TokenType::from_keyword("deferred"), None);
    /// ```
    pub fn from_keyword(spelling: impl AsRef<[u8]>) -> Option<TokenType> {
        KEYWORDS.get(spelling.as_ref()).map(|entry| entry.ty)
    }

    /// Binary-operator binding power, larger binds tighter
    ///
    /// | rank | operators |
    /// |------|-----------|
    /// | 1 | `=` and compound assignments |
    /// | 2 | `\|\|` |
    /// | 3 | `&&` |
    /// | 4 | `==` `!=` |
    /// | 5 | `<` `<=` `>` `>=` |
    /// | 6 | `+` `-` |
    /// | 7 | `*` `/` `%` `&` `\|` `^` `<<` `>>` |
    /// | 8 | `.` `::` `->` |
    ///
    /// Every other type returns `None`.
    pub const fn prec(self) -> Option<u16> {
        use TokenType::*;
        let rank = match self {
            ValueAssignment | PlusEq | SubEq | MulEq | DivEq | ModEq | BitwiseAndEq
            | BitwiseOrEq | XorEq | LshiftEq | RshiftEq => 1,
            LogicalOr => 2,
            LogicalAnd => 3,
            Eq | Neq => 4,
            Lt | Lte | Gt | Gte => 5,
            Plus | Sub => 6,
            Mul | Div | Mod | BitwiseAnd | BitwiseOr | Xor | Lshift | Rshift => 7,
            Dot | NamespaceOperator | SkinnyArrow => 8,
            _ => return None,
        };
        Some(rank)
    }

    /// True for operators that group right-to-left (the assignments)
    #[inline]
    pub const fn is_right_assoc(self) -> bool {
        matches!(self.prec(), Some(1))
    }
}

impl fmt::Display for TokenType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.pad(self.name())
    }
}

impl TryFrom<u8> for TokenType {
    type Error = LexError;

    fn try_from(raw: u8) -> Result<Self, Self::Error> {
        TOKEN_TABLE
            .get(usize::from(raw))
            .map(|info| info.ty)
            .ok_or(LexError::InvalidTokenType(raw))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use TokenType as T;

    #[test]
    fn test_all_matches_discriminants() {
        assert_eq!(TokenType::ALL.len(), 79);
        for (i, ty) in TokenType::ALL.iter().enumerate() {
            assert_eq!(*ty as usize, i);
            assert_eq!(TokenType::try_from(i as u8), Ok(*ty));
        }
    }

    #[test]
    fn test_names_are_unique_and_match_debug() {
        let mut names = std::collections::HashSet::new();
        for ty in TokenType::ALL {
            assert!(names.insert(ty.name()));
            assert_eq!(ty.name(), format!("{:?}", ty));
        }
    }

    #[test]
    fn test_fixed_spellings_are_unique() {
        let mut spellings = std::collections::HashSet::new();
        for ty in TokenType::ALL {
            let s = ty.string_repr();
            assert!(!s.is_empty());
            assert!(spellings.insert(s), "duplicate spelling {s}");
        }
    }

    #[test]
    fn test_name_differs_from_spelling() {
        assert_eq!(T::PlusEq.to_string(), "PlusEq");
        assert_eq!(T::PlusEq.string_repr(), "+=");
        assert_eq!(T::NamespaceOperator.string_repr(), "::");
        assert_eq!(T::Ellipsis.string_repr(), "...");
        assert_eq!(T::Identifier.string_repr(), "<identifier>");
        assert_eq!(T::EndOfFile.string_repr(), "<eof>");
    }

    #[test]
    fn test_display_pads() {
        assert_eq!(format!("{:<12}|", T::Lt), "Lt          |");
    }

    #[test]
    fn test_out_of_range_raw_values() {
        assert_eq!(raw_name(79), "Unknown");
        assert_eq!(raw_spelling(255), "Unknown");
        assert_eq!(raw_name(T::Gte as u8), "Gte");
        assert_eq!(TokenType::try_from(79), Err(LexError::InvalidTokenType(79)));
    }

    #[test]
    fn test_categories() {
        let plus_eq = T::PlusEq.category();
        assert!(plus_eq.contains(TokenCategory::VALUE_ASSIGN_OP | TokenCategory::ARITHMETIC_OP));
        assert!(T::If.category().contains(TokenCategory::CONTROL_FLOW));
        assert!(T::Let.category().contains(TokenCategory::DECLARATION));
        assert!(T::Null.category().contains(TokenCategory::LITERAL));
        assert!(T::EndOfFile.category().is_non_categorical());
        assert!(T::Illegal.category().is_non_categorical());
    }

    #[test]
    fn test_sentinels_are_the_only_uncategorized_types() {
        for ty in TokenType::ALL {
            let uncategorized = ty.category().is_non_categorical();
            assert_eq!(uncategorized, matches!(ty, T::EndOfFile | T::Illegal), "{ty}");
        }
    }

    #[test]
    fn test_keyword_rows_have_lowercase_spelling() {
        let keywords: Vec<_> = TokenType::ALL.into_iter().filter(|t| t.is_keyword()).collect();
        assert_eq!(keywords.len(), 24);
        for ty in keywords {
            assert!(ty.string_repr().bytes().all(|b| b.is_ascii_lowercase()));
            assert_eq!(TokenType::from_keyword(ty.string_repr()), Some(ty));
        }
    }

    #[test]
    fn test_prec_ladder() {
        let ladder: [(&[TokenType], u16); 8] = [
            (
                &[
                    T::ValueAssignment,
                    T::PlusEq,
                    T::SubEq,
                    T::MulEq,
                    T::DivEq,
                    T::ModEq,
                    T::BitwiseAndEq,
                    T::BitwiseOrEq,
                    T::XorEq,
                    T::LshiftEq,
                    T::RshiftEq,
                ],
                1,
            ),
            (&[T::LogicalOr], 2),
            (&[T::LogicalAnd], 3),
            (&[T::Eq, T::Neq], 4),
            (&[T::Lt, T::Lte, T::Gt, T::Gte], 5),
            (&[T::Plus, T::Sub], 6),
            (
                &[T::Mul, T::Div, T::Mod, T::BitwiseAnd, T::BitwiseOr, T::Xor, T::Lshift, T::Rshift],
                7,
            ),
            (&[T::Dot, T::NamespaceOperator, T::SkinnyArrow], 8),
        ];

        let mut ranked = 0;
        for (types, rank) in ladder {
            for ty in types {
                assert_eq!(ty.prec(), Some(rank), "{ty}");
                assert_eq!(ty.is_right_assoc(), rank == 1, "{ty}");
                ranked += 1;
            }
        }

        let unranked = TokenType::ALL.iter().filter(|t| t.prec().is_none()).count();
        assert_eq!(ranked + unranked, TOKEN_TYPE_COUNT);
    }

    #[test]
    fn test_prec_none_for_non_binary() {
        for ty in [T::Identifier, T::LParen, T::Inc, T::BitwiseNot, T::LogicalNot, T::If, T::EndOfFile] {
            assert_eq!(ty.prec(), None, "{ty}");
            assert!(!ty.is_right_assoc());
        }
    }

    #[test]
    fn test_every_ranked_type_is_binary() {
        for ty in TokenType::ALL {
            if ty.prec().is_some() {
                assert!(ty.category().contains(TokenCategory::BINARY_OP), "{ty}");
            }
        }
    }
}
