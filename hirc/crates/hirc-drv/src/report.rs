//! Diagnostics for Illegal tokens.
//!
//! The lexer only records where it gave up. The kind of problem is read back
//! from the first bytes of each Illegal lexeme.

use hirc_lex::Token;
use hirc_util::diagnostic::{Diagnostic, DiagnosticBuilder, DiagnosticCode, Handler, SourceSnippet};

use crate::session::LexedFile;

/// What went wrong inside an Illegal token.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum IllegalKind {
    UnexpectedByte,
    UnterminatedString,
    MalformedNumber,
    UnterminatedComment,
    MalformedChar,
}

impl IllegalKind {
    /// Classify an Illegal lexeme by its leading bytes.
    pub fn classify(lexeme: &[u8]) -> Self {
        match lexeme {
            [b'"', ..] => Self::UnterminatedString,
            [b'\'', ..] => Self::MalformedChar,
            [b'/', b'*', ..] => Self::UnterminatedComment,
            [b'0'..=b'9', ..] => Self::MalformedNumber,
            _ => Self::UnexpectedByte,
        }
    }

    pub fn code(self) -> DiagnosticCode {
        match self {
            Self::UnexpectedByte => DiagnosticCode::E_LEXER_UNEXPECTED_BYTE,
            Self::UnterminatedString => DiagnosticCode::E_LEXER_UNTERMINATED_STRING,
            Self::MalformedNumber => DiagnosticCode::E_LEXER_INVALID_NUMBER,
            Self::UnterminatedComment => DiagnosticCode::E_LEXER_UNTERMINATED_COMMENT,
            Self::MalformedChar => DiagnosticCode::E_LEXER_INVALID_CHAR,
        }
    }

    fn label(self) -> &'static str {
        match self {
            Self::UnexpectedByte => "not valid here",
            Self::UnterminatedString => "string starts here",
            Self::MalformedNumber => "invalid literal",
            Self::UnterminatedComment => "comment starts here",
            Self::MalformedChar => "invalid character literal",
        }
    }

    fn help(self) -> Option<&'static str> {
        match self {
            Self::UnterminatedString => Some("close the string with `\"` before the end of the line"),
            Self::UnterminatedComment => Some("every `/*` needs a matching `*/`"),
            Self::MalformedChar => Some("a character literal holds exactly one character or escape"),
            Self::MalformedNumber | Self::UnexpectedByte => None,
        }
    }
}

/// Headline for an Illegal lexeme.
fn message(kind: IllegalKind, lexeme: &[u8]) -> String {
    match kind {
        IllegalKind::UnterminatedString => "unterminated string literal".to_string(),
        IllegalKind::UnterminatedComment => "unterminated block comment".to_string(),
        IllegalKind::MalformedChar => "malformed character literal".to_string(),
        IllegalKind::MalformedNumber => {
            format!("malformed number `{}`", String::from_utf8_lossy(lexeme))
        },
        IllegalKind::UnexpectedByte => match std::str::from_utf8(lexeme) {
            Ok(text) if text.chars().all(|c| !c.is_control()) => {
                format!("unexpected character `{text}`")
            },
            _ => {
                let hex: Vec<String> = lexeme.iter().map(|b| format!("0x{b:02X}")).collect();
                format!("unexpected byte {}", hex.join(" "))
            },
        },
    }
}

/// Build the diagnostic for one Illegal token of `lexed`.
pub fn illegal_token_diagnostic(lexed: &LexedFile<'_>, token: &Token) -> Diagnostic {
    let lexeme = token.lexeme(&lexed.lexer);
    let kind = IllegalKind::classify(lexeme);
    let span = lexed.file.span(token.pos() as usize, token.len() as usize);

    let mut builder = DiagnosticBuilder::error(message(kind, lexeme))
        .code(kind.code())
        .span(span);
    if let Some(snippet) = SourceSnippet::from_span(lexed.file, span) {
        builder = builder.snippet(snippet.with_label(kind.label()));
    }
    if let Some(help) = kind.help() {
        builder = builder.help(help);
    }
    builder.build()
}

/// Collect diagnostics for the first `max_errors` Illegal tokens of `lexed`.
///
/// When more exist, a trailing warning says how many were left out.
pub fn diagnose(lexed: &LexedFile<'_>, max_errors: usize, handler: &Handler) {
    for token in lexed.illegal_tokens().take(max_errors) {
        handler.emit_diagnostic(illegal_token_diagnostic(lexed, token));
    }

    let total = lexed.illegal_count();
    if total > max_errors {
        let eof = lexed.tokens.last().map_or(0, |t| t.pos() as usize);
        handler
            .build_warning(
                lexed.file.span(eof, 0),
                format!("{} more illegal tokens not shown", total - max_errors),
            )
            .code(DiagnosticCode::W_LEXER_ERRORS_TRUNCATED)
            .help("raise `diagnostics.max_errors` or pass `--max-errors`")
            .emit(handler);
    }
}

/// Render every diagnostic for `lexed` as text.
pub fn render(lexed: &LexedFile<'_>, max_errors: usize) -> String {
    let handler = Handler::new();
    diagnose(lexed, max_errors, &handler);
    handler
        .take()
        .iter()
        .map(|d| d.render(Some(lexed.file)))
        .collect::<Vec<_>>()
        .join("\n")
}
