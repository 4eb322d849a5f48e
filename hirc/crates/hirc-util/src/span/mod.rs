//! Span module - Source location tracking.
//!
//! This module provides types for representing source code locations,
//! including byte offsets, line/column information, and file identification.
//!
//! # Examples
//!
//! ```
//! use hirc_util::span::{Span, FileId};
//!
//! // Create a span at a specific location
//! let span = Span::new(10, 20, 1, 5);
//! assert_eq!(span.len(), 10);
//!
//! // Create a span associated with a specific file
//! let span = Span::with_file(10, 20, FileId(1), 1, 5);
//! assert_eq!(span.file_id, FileId(1));
//! ```

mod source_map;

pub use source_map::{SourceFile, SourceMap};

/// A unique identifier for a source file
///
/// FileIds are assigned sequentially as files are added to the [`SourceMap`].
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct FileId(pub usize);

impl FileId {
    /// A dummy FileId for testing
    pub const DUMMY: FileId = FileId(0);
}

impl Default for FileId {
    #[inline]
    fn default() -> Self {
        Self::DUMMY
    }
}

/// Source location span
///
/// A `Span` represents a byte range in a source buffer together with the
/// human-readable position of its first byte.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct Span {
    /// Start byte offset in source
    pub start: usize,
    /// End byte offset in source (exclusive)
    pub end: usize,
    /// Line number (1-based)
    pub line: u32,
    /// Column number (1-based, in bytes)
    pub column: u32,
    /// File identifier
    pub file_id: FileId,
}

impl Span {
    /// Dummy span for testing
    ///
    /// # Examples
    ///
    /// ```
    /// use hirc_util::span::Span;
    ///
    /// assert_eq!(Span::DUMMY.start, 0);
    /// assert!(Span::DUMMY.is_empty());
    /// ```
    pub const DUMMY: Span = Span {
        start: 0,
        end: 0,
        line: 0,
        column: 0,
        file_id: FileId::DUMMY,
    };

    /// Create a new span
    ///
    /// # Arguments
    ///
    /// * `start` - Start byte offset
    /// * `end` - End byte offset (exclusive)
    /// * `line` - Line number (1-based)
    /// * `column` - Column number (1-based)
    #[inline]
    pub const fn new(start: usize, end: usize, line: u32, column: u32) -> Self {
        Self {
            start,
            end,
            line,
            column,
            file_id: FileId::DUMMY,
        }
    }

    /// Create a new span in a specific file
    #[inline]
    pub const fn with_file(
        start: usize,
        end: usize,
        file_id: FileId,
        line: u32,
        column: u32,
    ) -> Self {
        Self {
            start,
            end,
            line,
            column,
            file_id,
        }
    }

    /// Returns true if the span covers no bytes
    #[inline]
    pub const fn is_empty(&self) -> bool {
        self.start >= self.end
    }

    /// Length of the span in bytes
    #[inline]
    pub const fn len(&self) -> usize {
        self.end.saturating_sub(self.start)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_span_len_and_empty() {
        let span = Span::new(3, 7, 1, 4);
        assert_eq!(span.len(), 4);
        assert!(!span.is_empty());
        assert!(Span::new(5, 5, 1, 6).is_empty());
    }

    #[test]
    fn test_span_inverted_len_saturates() {
        let span = Span::new(9, 2, 1, 1);
        assert_eq!(span.len(), 0);
        assert!(span.is_empty());
    }

    #[test]
    fn test_span_with_file() {
        let span = Span::with_file(4, 6, FileId(3), 2, 1);
        assert_eq!(span.file_id, FileId(3));
        assert_eq!(span.len(), 2);
    }

    #[test]
    fn test_file_id_default_is_dummy() {
        assert_eq!(FileId::default(), FileId::DUMMY);
    }
}
