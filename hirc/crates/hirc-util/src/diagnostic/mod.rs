//! Diagnostic module - Error and warning reporting infrastructure.
//!
//! This module provides types for creating, formatting, and reporting
//! diagnostics (errors and warnings with help messages) about lexed source
//! buffers.
//!
//! # Examples
//!
//! ```
//! use hirc_util::diagnostic::{DiagnosticBuilder, DiagnosticCode, Handler};
//! use hirc_util::Span;
//!
//! let handler = Handler::new();
//! DiagnosticBuilder::error("unexpected byte")
//!     .code(DiagnosticCode::E_LEXER_UNEXPECTED_BYTE)
//!     .span(Span::new(0, 1, 1, 1))
//!     .emit(&handler);
//!
//! let diagnostics = handler.take();
//! assert_eq!(diagnostics.len(), 1);
//! assert!(diagnostics[0].to_string().starts_with("error[E1001]"));
//! ```

mod builder;
mod codes;

pub use builder::{DiagnosticBuilder, SourceSnippet};
pub use codes::DiagnosticCode;

pub use crate::span::Span;
use crate::span::SourceFile;
use std::cell::RefCell;
use std::fmt::{self, Write as _};

/// Diagnostic severity level
///
/// # Examples
///
/// ```
/// use hirc_util::diagnostic::Level;
///
/// assert_eq!(format!("{}", Level::Error), "error");
/// assert_eq!(format!("{}", Level::Warning), "warning");
/// ```
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Level {
    /// An error that makes the input invalid
    Error,
    /// A warning that doesn't invalidate the input
    Warning,
}

impl fmt::Display for Level {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Level::Error => write!(f, "error"),
            Level::Warning => write!(f, "warning"),
        }
    }
}

/// A diagnostic message with severity and location
///
/// Built with a [`DiagnosticBuilder`].
#[derive(Clone, Debug)]
pub struct Diagnostic {
    /// Diagnostic severity level
    pub level: Level,
    /// Main diagnostic message
    pub message: String,
    /// Source location
    pub span: Span,
    /// Optional diagnostic code
    pub code: Option<DiagnosticCode>,
    /// Help suggestions for fixing the issue
    pub helps: Vec<String>,
    /// Source code snippets for display
    pub snippets: Vec<SourceSnippet>,
}

impl Diagnostic {
    /// Render the diagnostic as plain text
    ///
    /// When `file` is given, the header is followed by a `--> name:line:col`
    /// location line. Attached snippets and helps follow in that order.
    ///
    /// # Examples
    ///
    /// ```
    /// use hirc_util::diagnostic::{DiagnosticBuilder, DiagnosticCode};
    /// use hirc_util::span::SourceFile;
    ///
    /// let file = SourceFile::new(0, "main.hir", "let x = `;".as_bytes());
    /// let diag = DiagnosticBuilder::error("unexpected byte")
    ///     .code(DiagnosticCode::E_LEXER_UNEXPECTED_BYTE)
    ///     .span(file.span(8, 1))
    ///     .build();
    /// let text = diag.render(Some(&file));
    /// assert!(text.starts_with("error[E1001]: unexpected byte\n  --> main.hir:1:9\n"));
    /// ```
    pub fn render(&self, file: Option<&SourceFile>) -> String {
        let mut out = String::new();

        match self.code {
            Some(code) => {
                let _ = writeln!(out, "{}[{}]: {}", self.level, code, self.message);
            },
            None => {
                let _ = writeln!(out, "{}: {}", self.level, self.message);
            },
        }

        if let Some(file) = file {
            let _ = writeln!(
                out,
                "  --> {}:{}:{}",
                file.name(),
                self.span.line,
                self.span.column
            );
        }

        for snippet in &self.snippets {
            out.push_str(&snippet.format());
            out.push('\n');
        }

        for help in &self.helps {
            let _ = writeln!(out, "  = help: {}", help);
        }

        out
    }
}

impl fmt::Display for Diagnostic {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.render(None))
    }
}

/// Handler for collecting diagnostics
///
/// It is single-threaded; parallel callers keep one handler per unit of
/// work.
pub struct Handler {
    /// Collected diagnostics
    diagnostics: RefCell<Vec<Diagnostic>>,
}

impl Handler {
    /// Create a new handler
    pub fn new() -> Self {
        Self {
            diagnostics: RefCell::new(Vec::new()),
        }
    }

    /// Emit a pre-built diagnostic
    pub fn emit_diagnostic(&self, diagnostic: Diagnostic) {
        self.diagnostics.borrow_mut().push(diagnostic);
    }

    /// Create a diagnostic builder for a warning at `span`
    pub fn build_warning(&self, span: Span, message: impl Into<String>) -> DiagnosticBuilder {
        DiagnosticBuilder::warning(message).span(span)
    }

    /// Take all diagnostics in emission order, leaving the handler empty
    pub fn take(&self) -> Vec<Diagnostic> {
        std::mem::take(&mut *self.diagnostics.borrow_mut())
    }
}

impl Default for Handler {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_level_display() {
        assert_eq!(format!("{}", Level::Error), "error");
        assert_eq!(format!("{}", Level::Warning), "warning");
    }

    #[test]
    fn test_render_without_file() {
        let diag = DiagnosticBuilder::warning("stopped after 3 errors").build();
        assert_eq!(diag.render(None), "warning: stopped after 3 errors\n");
        assert_eq!(diag.to_string(), diag.render(None));
    }

    #[test]
    fn test_render_full() {
        let file = SourceFile::new(0, "a.hir", "x = \"abc\ny".as_bytes());
        let span = file.span(4, 4);
        let snippet = SourceSnippet::from_span(&file, span)
            .unwrap()
            .with_label("string starts here");
        let diag = DiagnosticBuilder::error("unterminated string literal")
            .code(DiagnosticCode::E_LEXER_UNTERMINATED_STRING)
            .span(span)
            .snippet(snippet)
            .help("close the string with `\"`")
            .build();

        let text = diag.render(Some(&file));
        let lines: Vec<&str> = text.lines().collect();
        assert_eq!(lines[0], "error[E1002]: unterminated string literal");
        assert_eq!(lines[1], "  --> a.hir:1:5");
        assert_eq!(lines[2], "  1 | x = \"abc");
        assert_eq!(lines[3], "    |     ^^^^ string starts here");
        assert_eq!(lines[4], "  = help: close the string with `\"`");
    }

    #[test]
    fn test_handler_take_drains() {
        let handler = Handler::new();
        handler.emit_diagnostic(DiagnosticBuilder::error("first").build());
        DiagnosticBuilder::error("second").emit(&handler);

        let messages: Vec<String> = handler.take().into_iter().map(|d| d.message).collect();
        assert_eq!(messages, ["first", "second"]);
        assert!(handler.take().is_empty());
    }

    #[test]
    fn test_handler_build_warning() {
        let handler = Handler::new();
        handler
            .build_warning(Span::new(7, 7, 2, 1), "truncated")
            .code(DiagnosticCode::W_LEXER_ERRORS_TRUNCATED)
            .emit(&handler);

        let diags = handler.take();
        assert_eq!(diags[0].level, Level::Warning);
        assert_eq!(diags[0].code, Some(DiagnosticCode::W_LEXER_ERRORS_TRUNCATED));
        assert_eq!(diags[0].span.start, 7);
    }
}
