//! Edge case tests for hirc-lex
