//! Grammatical categories of tokens.

use std::fmt;

use bitflags::bitflags;

use crate::keyword::KEYWORDS;

bitflags! {
    /// Bit-flag classification of a token's grammatical role.
    ///
    /// A token can sit in several categories at once: `+=` is a binary
    /// operator, an assignment and arithmetic. The empty set is
    /// [`TokenCategory::NON_CATEGORICAL`].
    #[derive(Copy, Clone, Eq, PartialEq, Hash, Debug, Default)]
    pub struct TokenCategory: u16 {
        /// Delimiters and separators.
        const PUNCTUATOR = 1 << 0;
        /// User-defined names.
        const IDENTIFIER = 1 << 1;
        /// Reserved words.
        const KEYWORD = 1 << 2;
        /// Literal values, including `true`, `false` and `null`.
        const LITERAL = 1 << 3;
        /// Infix operators.
        const BINARY_OP = 1 << 4;
        /// Prefix or postfix operators.
        const UNARY_OP = 1 << 5;
        /// `=` and every compound assignment.
        const VALUE_ASSIGN_OP = 1 << 6;
        const ARITHMETIC_OP = 1 << 7;
        const BITWISE_OP = 1 << 8;
        const LOGICAL_OP = 1 << 9;
        /// `==` and `!=`.
        const EQUALITY_OP = 1 << 10;
        /// `<`, `<=`, `>` and `>=`.
        const RELATIONAL_OP = 1 << 11;
        /// Keywords that transfer control.
        const CONTROL_FLOW = 1 << 12;
        /// Keywords that introduce or qualify a declaration.
        const DECLARATION = 1 << 13;
    }
}

/// Display names in declaration order.
const NAMES: [(TokenCategory, &str); 14] = [
    (TokenCategory::PUNCTUATOR, "Punctuator"),
    (TokenCategory::IDENTIFIER, "Identifier"),
    (TokenCategory::KEYWORD, "Keyword"),
    (TokenCategory::LITERAL, "Literal"),
    (TokenCategory::BINARY_OP, "BinaryOp"),
    (TokenCategory::UNARY_OP, "UnaryOp"),
    (TokenCategory::VALUE_ASSIGN_OP, "ValueAssignOp"),
    (TokenCategory::ARITHMETIC_OP, "ArithmeticOp"),
    (TokenCategory::BITWISE_OP, "BitwiseOp"),
    (TokenCategory::LOGICAL_OP, "LogicalOp"),
    (TokenCategory::EQUALITY_OP, "EqualityOp"),
    (TokenCategory::RELATIONAL_OP, "RelationalOp"),
    (TokenCategory::CONTROL_FLOW, "ControlFlow"),
    (TokenCategory::DECLARATION, "Declaration"),
];

const SEPARATOR: &str = " | ";

impl TokenCategory {
    /// The empty category set
    pub const NON_CATEGORICAL: Self = Self::empty();

    /// Returns true when no flag is set
    #[inline]
    pub const fn is_non_categorical(self) -> bool {
        self.is_empty()
    }

    /// Iterate over the display names of every set flag, in declaration order
    pub fn flag_names(self) -> impl Iterator<Item = &'static str> {
        NAMES
            .iter()
            .filter(move |(flag, _)| self.contains(*flag))
            .map(|(_, name)| *name)
    }

    /// Category registered for a keyword spelling
    ///
    /// Returns `None` for anything that is not a keyword, including every
    /// spelling longer than [`MAX_KEYWORD_LEN`](crate::MAX_KEYWORD_LEN).
    ///
    /// # Examples
    ///
    /// ```
    /// use hirc_lex::TokenCategory;
    ///
    /// let cat = TokenCategory::from_keyword("while").unwrap();
    /// assert!(cat.contains(TokenCategory::CONTROL_FLOW));
    /// assert!(TokenCategory::from_keyword("whilst").is_none());
    /// ```
    pub fn from_keyword(spelling: impl AsRef<[u8]>) -> Option<TokenCategory> {
        KEYWORDS.get(spelling.as_ref()).map(|entry| entry.category)
    }
}

impl fmt::Display for TokenCategory {
    /// Pipe-joined flag names, or `NonCategorical` for the empty set
    ///
    /// ```
    /// use hirc_lex::TokenCategory;
    ///
    /// let cat = TokenCategory::BINARY_OP | TokenCategory::ARITHMETIC_OP;
    /// assert_eq!(cat.to_string(), "BinaryOp | ArithmeticOp");
    /// assert_eq!(TokenCategory::NON_CATEGORICAL.to_string(), "NonCategorical");
    /// ```
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.is_empty() {
            return f.write_str("NonCategorical");
        }
        for (i, name) in self.flag_names().enumerate() {
            if i > 0 {
                f.write_str(SEPARATOR)?;
            }
            f.write_str(name)?;
        }
        Ok(())
    }
}
