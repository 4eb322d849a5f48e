//! Source map for managing source buffers and computing source locations.
//!
//! This module provides the [`SourceMap`] type for managing multiple source
//! buffers and computing line/column information from byte offsets. Buffers
//! are raw bytes: the lexer scans bytes, and text is only decoded (lossily)
//! when a line is displayed.

use std::borrow::Cow;
use std::ops::Range;
use std::sync::Arc;

use super::{FileId, Span};

/// A source file with its content and metadata
///
/// # Examples
///
/// ```
/// use hirc_util::span::SourceFile;
///
/// let file = SourceFile::new(0, "main.hir", "proc main() {}".as_bytes());
/// assert_eq!(file.name(), "main.hir");
/// assert_eq!(file.bytes(), b"proc main() {}");
/// ```
#[derive(Clone)]
pub struct SourceFile {
    /// Unique file identifier
    id: FileId,
    /// File name (path or display name)
    name: String,
    /// File content
    content: Arc<[u8]>,
    /// Precomputed line start offsets
    line_starts: Arc<[usize]>,
}

impl SourceFile {
    /// Create a new source file
    ///
    /// # Arguments
    ///
    /// * `id` - Unique file identifier
    /// * `name` - File name or path
    /// * `content` - File content
    pub fn new(id: usize, name: impl Into<String>, content: impl Into<Arc<[u8]>>) -> Self {
        let content = content.into();
        let line_starts = Self::line_starts(&content);
        Self {
            id: FileId(id),
            name: name.into(),
            content,
            line_starts,
        }
    }

    /// Compute line start offsets from content
    fn line_starts(content: &[u8]) -> Arc<[usize]> {
        let mut line_starts = vec![0];
        line_starts.extend(
            content
                .iter()
                .enumerate()
                .filter(|(_, &b)| b == b'\n')
                .map(|(i, _)| i + 1),
        );
        line_starts.into()
    }

    /// Get the file identifier
    #[inline]
    pub fn id(&self) -> FileId {
        self.id
    }

    /// Get the file name
    #[inline]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Get the raw file content
    #[inline]
    pub fn bytes(&self) -> &[u8] {
        &self.content
    }

    /// Get the byte offset where a line starts (0-indexed line number)
    #[inline]
    pub fn line_start(&self, line: usize) -> Option<usize> {
        self.line_starts.get(line).copied()
    }

    /// Convert a byte offset to (line, column) coordinates
    ///
    /// Line and column are 1-indexed. Column is measured in bytes from the
    /// start of the line.
    ///
    /// # Examples
    ///
    /// ```
    /// use hirc_util::span::SourceFile;
    ///
    /// let file = SourceFile::new(0, "main.hir", "let x\nlet y".as_bytes());
    /// assert_eq!(file.offset_to_line_col(4), (1, 5));
    /// assert_eq!(file.offset_to_line_col(6), (2, 1));
    /// ```
    pub fn offset_to_line_col(&self, offset: usize) -> (usize, usize) {
        match self.line_starts.binary_search(&offset) {
            Ok(line) => (line + 1, 1),
            Err(insert_point) => {
                // line_starts[0] == 0, so insert_point is at least 1 here
                let line = insert_point.saturating_sub(1);
                let col = offset.saturating_sub(self.line_starts[line]) + 1;
                (line + 1, col)
            },
        }
    }

    /// Byte range of a source line (1-indexed), without its terminator
    ///
    /// # Examples
    ///
    /// ```
    /// use hirc_util::span::SourceFile;
    ///
    /// let file = SourceFile::new(0, "main.hir", "ab\r\ncd".as_bytes());
    /// assert_eq!(file.line_range(1), Some(0..2));
    /// assert_eq!(file.line_range(2), Some(4..6));
    /// assert_eq!(file.line_range(3), None);
    /// ```
    pub fn line_range(&self, line: usize) -> Option<Range<usize>> {
        if line == 0 {
            return None;
        }
        let start = self.line_start(line - 1)?;
        let mut end = self.line_start(line).unwrap_or(self.content.len());
        while end > start && matches!(self.content[end - 1], b'\n' | b'\r') {
            end -= 1;
        }
        Some(start..end)
    }

    /// Get a specific source line (1-indexed), without its terminator
    ///
    /// Invalid UTF-8 is replaced with U+FFFD.
    ///
    /// # Examples
    ///
    /// ```
    /// use hirc_util::span::SourceFile;
    ///
    /// let file = SourceFile::new(0, "main.hir", "line1\r\nline2".as_bytes());
    /// assert_eq!(file.line_at(1).as_deref(), Some("line1"));
    /// assert_eq!(file.line_at(2).as_deref(), Some("line2"));
    /// assert!(file.line_at(3).is_none());
    /// ```
    pub fn line_at(&self, line: usize) -> Option<Cow<'_, str>> {
        let range = self.line_range(line)?;
        Some(String::from_utf8_lossy(&self.content[range]))
    }

    /// Build a [`Span`] for `len` bytes starting at `offset`, resolving its
    /// line and column against this file
    pub fn span(&self, offset: usize, len: usize) -> Span {
        let (line, column) = self.offset_to_line_col(offset);
        Span::with_file(
            offset,
            offset + len,
            self.id,
            u32::try_from(line).unwrap_or(u32::MAX),
            u32::try_from(column).unwrap_or(u32::MAX),
        )
    }
}

impl std::fmt::Debug for SourceFile {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("SourceFile")
            .field("id", &self.id)
            .field("name", &self.name)
            .field("len", &self.content.len())
            .field("lines", &self.line_starts.len())
            .finish()
    }
}

/// A source map managing multiple source files
///
/// # Examples
///
/// ```
/// use hirc_util::span::SourceMap;
///
/// let mut map = SourceMap::new();
/// map.add_file("main.hir", "proc main() {}".as_bytes());
/// map.add_file("util.hir", "let x;".as_bytes());
/// let names: Vec<&str> = map.iter().map(|f| f.name()).collect();
/// assert_eq!(names, ["main.hir", "util.hir"]);
/// ```
#[derive(Debug, Default)]
pub struct SourceMap {
    files: Vec<Arc<SourceFile>>,
}

impl SourceMap {
    /// Create a new empty source map
    #[inline]
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a new source file
    ///
    /// Returns the [`FileId`] for the added file.
    pub fn add_file(&mut self, name: impl Into<String>, content: impl Into<Arc<[u8]>>) -> FileId {
        let id = self.files.len();
        let file = SourceFile::new(id, name, content);
        let file_id = file.id();
        self.files.push(Arc::new(file));
        file_id
    }

    /// Get the number of files in the source map
    #[inline]
    pub fn file_count(&self) -> usize {
        self.files.len()
    }

    /// Iterate over all files in insertion order
    pub fn iter(&self) -> impl Iterator<Item = &Arc<SourceFile>> {
        self.files.iter()
    }
}
