//! Core error types for hirc-util crate
//!
//! This module defines error types used throughout the util crate.

use thiserror::Error;

/// Error type for reading source bytes from a [`ByteSource`](crate::io::ByteSource)
#[derive(Debug, Error)]
pub enum SourceError {
    /// The underlying device failed while reading
    #[error("failed to read `{name}`: {source}")]
    Read {
        name: String,
        #[source]
        source: std::io::Error,
    },

    /// The resource does not exist
    #[error("no such source: `{0}`")]
    NotFound(String),
}

/// Result type alias for source reads
pub type SourceResult<T> = std::result::Result<T, SourceError>;
