//! Diagnostic builder for fluent diagnostic construction.
//!
//! This module provides the [`DiagnosticBuilder`] type for constructing
//! diagnostics with a fluent API, including source code snippets.

use super::{Diagnostic, DiagnosticCode, Level, Span};
use crate::span::SourceFile;

/// A source code snippet for display in diagnostics
///
/// Contains the source line affected by the diagnostic, with optional
/// highlighting of the specific range. Columns count characters of the
/// displayed line, not bytes.
///
/// # Examples
///
/// ```
/// use hirc_util::diagnostic::SourceSnippet;
/// use hirc_util::span::SourceFile;
///
/// let file = SourceFile::new(0, "main.hir", "let x = `;".as_bytes());
/// let snippet = SourceSnippet::from_span(&file, file.span(8, 1)).unwrap();
/// assert!(snippet.format().ends_with("|         ^"));
/// ```
#[derive(Clone, Debug)]
pub struct SourceSnippet {
    /// The source line content
    pub line: String,
    /// Line number (1-based)
    pub line_number: usize,
    /// Column where the issue starts (1-based)
    pub start_column: usize,
    /// Column where the issue ends (1-based, exclusive)
    pub end_column: usize,
    /// Optional label to display under the highlighted range
    pub label: Option<String>,
}

impl SourceSnippet {
    /// Build a snippet for `span` from the file it points into
    ///
    /// Spans crossing a line break are underlined up to the end of their
    /// first line. Returns `None` when the span's line does not exist.
    pub fn from_span(file: &SourceFile, span: Span) -> Option<Self> {
        let (line_number, _) = file.offset_to_line_col(span.start);
        let range = file.line_range(line_number)?;
        let bytes = file.bytes();

        let start = span.start.clamp(range.start, range.end);
        let end = span.end.clamp(start, range.end);
        let start_column = display_width(&bytes[range.start..start]) + 1;
        let end_column = start_column + display_width(&bytes[start..end]);

        Some(Self {
            line: String::from_utf8_lossy(&bytes[range]).into_owned(),
            line_number,
            start_column,
            end_column,
            label: None,
        })
    }

    /// Set the label for this snippet
    pub fn with_label(mut self, label: impl Into<String>) -> Self {
        self.label = Some(label.into());
        self
    }

    /// Format the snippet for display
    ///
    /// Returns a formatted string showing the source line with a caret (^)
    /// pointing to the relevant range.
    pub fn format(&self) -> String {
        let line_num_width = self.line_number.to_string().len().max(3);
        let mut result = String::new();

        result.push_str(&format!(
            "{:>width$} | {}\n",
            self.line_number,
            self.line,
            width = line_num_width
        ));

        result.push_str(&format!("{:>width$} | ", "", width = line_num_width));

        let underline_start = self.start_column.saturating_sub(1);
        let underline_len = self.end_column.saturating_sub(self.start_column).max(1);

        result.push_str(&" ".repeat(underline_start));
        result.push_str(&"^".repeat(underline_len));

        if let Some(ref label) = self.label {
            result.push_str(&format!(" {}", label));
        }

        result
    }
}

/// Characters `bytes` occupy once decoded for display
fn display_width(bytes: &[u8]) -> usize {
    String::from_utf8_lossy(bytes).chars().count()
}

/// Builder for constructing diagnostics with a fluent API
///
/// # Examples
///
/// ```
/// use hirc_util::diagnostic::{DiagnosticBuilder, DiagnosticCode, Level};
/// use hirc_util::Span;
///
/// let diag = DiagnosticBuilder::new(Level::Error, "unexpected byte")
///     .code(DiagnosticCode::E_LEXER_UNEXPECTED_BYTE)
///     .span(Span::new(3, 4, 1, 4))
///     .help("remove this character")
///     .build();
/// assert_eq!(diag.helps.len(), 1);
/// ```
pub struct DiagnosticBuilder {
    level: Level,
    message: String,
    span: Span,
    code: Option<DiagnosticCode>,
    helps: Vec<String>,
    snippets: Vec<SourceSnippet>,
}

impl DiagnosticBuilder {
    /// Create a new diagnostic builder
    pub fn new(level: Level, message: impl Into<String>) -> Self {
        Self {
            level,
            message: message.into(),
            span: Span::DUMMY,
            code: None,
            helps: Vec::new(),
            snippets: Vec::new(),
        }
    }

    /// Create an error builder
    pub fn error(message: impl Into<String>) -> Self {
        Self::new(Level::Error, message)
    }

    /// Create a warning builder
    pub fn warning(message: impl Into<String>) -> Self {
        Self::new(Level::Warning, message)
    }

    /// Set the diagnostic code
    pub fn code(mut self, code: DiagnosticCode) -> Self {
        self.code = Some(code);
        self
    }

    /// Set the source span
    pub fn span(mut self, span: Span) -> Self {
        self.span = span;
        self
    }

    /// Add a help suggestion to the diagnostic
    pub fn help(mut self, help: impl Into<String>) -> Self {
        self.helps.push(help.into());
        self
    }

    /// Add a source snippet
    pub fn snippet(mut self, snippet: SourceSnippet) -> Self {
        self.snippets.push(snippet);
        self
    }

    /// Build the diagnostic
    pub fn build(self) -> Diagnostic {
        Diagnostic {
            level: self.level,
            message: self.message,
            span: self.span,
            code: self.code,
            helps: self.helps,
            snippets: self.snippets,
        }
    }

    /// Build the diagnostic and emit it to a handler
    pub fn emit(self, handler: &super::Handler) {
        handler.emit_diagnostic(self.build());
    }
}
