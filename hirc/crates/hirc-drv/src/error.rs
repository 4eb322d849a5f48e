//! Error handling module for the hirc driver.
//!
//! Illegal tokens are not errors while scanning; they only become one here,
//! when `hirc check` has to report failure to the shell.

use hirc_lex::LexError;
use hirc_util::SourceError;
use thiserror::Error;

/// Main error type for the hirc driver.
#[derive(Error, Debug)]
pub enum DriverError {
    /// The configuration file is missing or malformed.
    #[error("Configuration error: {0}")]
    Config(String),

    /// An input could not be read.
    #[error(transparent)]
    Source(#[from] SourceError),

    /// An input cannot be handed to the lexer.
    #[error("cannot lex `{name}`: {source}")]
    Lex {
        name: String,
        #[source]
        source: LexError,
    },

    /// Writing output failed.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// JSON serialization failed.
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// `check` found lexical errors.
    #[error("found {count} illegal token{}", plural(.count))]
    IllegalTokens { count: usize },
}

fn plural(count: &usize) -> &'static str {
    if *count == 1 {
        ""
    } else {
        "s"
    }
}

/// Result type alias using DriverError.
pub type Result<T> = std::result::Result<T, DriverError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_config_error_display() {
        let err = DriverError::Config("missing field".to_string());
        assert_eq!(err.to_string(), "Configuration error: missing field");
    }

    #[test]
    fn test_source_error_is_transparent() {
        let err: DriverError = SourceError::NotFound("main.hir".to_string()).into();
        assert_eq!(err.to_string(), "no such source: `main.hir`");
    }

    #[test]
    fn test_lex_error_display() {
        let err = DriverError::Lex {
            name: "big.hir".to_string(),
            source: LexError::SourceTooLarge { len: 5_000_000_000 },
        };
        assert!(err.to_string().starts_with("cannot lex `big.hir`: source is 5000000000 bytes"));
    }

    #[test]
    fn test_illegal_tokens_display() {
        assert_eq!(
            DriverError::IllegalTokens { count: 1 }.to_string(),
            "found 1 illegal token"
        );
        assert_eq!(
            DriverError::IllegalTokens { count: 3 }.to_string(),
            "found 3 illegal tokens"
        );
    }

    #[test]
    fn test_io_error_conversion() {
        let io_err = std::io::Error::new(std::io::ErrorKind::BrokenPipe, "closed");
        let err: DriverError = io_err.into();
        assert!(matches!(err, DriverError::Io(_)));
    }

    #[test]
    fn test_json_error_conversion() {
        let json_err = serde_json::from_str::<serde_json::Value>("invalid json").unwrap_err();
        let err: DriverError = json_err.into();
        assert!(matches!(err, DriverError::Json(_)));
    }
}
