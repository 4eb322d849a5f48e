//! Token stream output for `hirc lex`.

use std::collections::BTreeMap;
use std::io::Write;

use serde::Serialize;

use hirc_lex::Token;

use crate::config::OutputFormat;
use crate::error::Result;
use crate::session::LexedFile;

/// One token in JSON output.
#[derive(Debug, Serialize, PartialEq)]
pub struct TokenRecord {
    #[serde(rename = "type")]
    pub ty: &'static str,
    pub category: String,
    pub offset: u32,
    pub length: u32,
    pub line: u32,
    pub value: Option<String>,
}

/// One input file in JSON output.
#[derive(Debug, Serialize)]
pub struct FileRecord {
    pub file: String,
    pub illegal: usize,
    pub tokens: Vec<TokenRecord>,
}

impl TokenRecord {
    pub fn new(token: &Token, lexed: &LexedFile<'_>) -> Self {
        Self {
            ty: token.ty().name(),
            category: token.category().to_string(),
            offset: token.pos(),
            length: token.len(),
            line: token.line(),
            value: token.value(&lexed.lexer),
        }
    }
}

impl FileRecord {
    pub fn new(lexed: &LexedFile<'_>) -> Self {
        Self {
            file: lexed.name().to_string(),
            illegal: lexed.illegal_count(),
            tokens: lexed.tokens.iter().map(|t| TokenRecord::new(t, lexed)).collect(),
        }
    }
}

/// Write every file's tokens to `out` in `format`.
///
/// Debug and summary output get a `==> name <==` header per file when
/// there is more than one.
pub fn emit(files: &[LexedFile<'_>], format: OutputFormat, out: &mut dyn Write) -> Result<()> {
    match format {
        OutputFormat::Json => {
            let records: Vec<FileRecord> = files.iter().map(FileRecord::new).collect();
            serde_json::to_writer_pretty(&mut *out, &records)?;
            writeln!(out)?;
        },
        OutputFormat::Debug | OutputFormat::Summary => {
            for (i, lexed) in files.iter().enumerate() {
                if files.len() > 1 {
                    if i > 0 {
                        writeln!(out)?;
                    }
                    writeln!(out, "==> {} <==", lexed.name())?;
                }
                if format == OutputFormat::Debug {
                    write_debug(lexed, out)?;
                } else {
                    write_summary(lexed, out)?;
                }
            }
        },
    }
    out.flush()?;
    Ok(())
}

fn write_debug(lexed: &LexedFile<'_>, out: &mut dyn Write) -> Result<()> {
    for token in &lexed.tokens {
        out.write_all(token.format(&lexed.lexer).as_bytes())?;
    }
    Ok(())
}

/// Tokens counted under every flag they carry; flagless tokens count as
/// `NonCategorical`.
pub fn category_counts(tokens: &[Token]) -> BTreeMap<&'static str, usize> {
    let mut counts = BTreeMap::new();
    for token in tokens {
        let cat = token.category();
        if cat.is_non_categorical() {
            *counts.entry("NonCategorical").or_insert(0) += 1;
        }
        for name in cat.flag_names() {
            *counts.entry(name).or_insert(0) += 1;
        }
    }
    counts
}

fn write_summary(lexed: &LexedFile<'_>, out: &mut dyn Write) -> Result<()> {
    writeln!(
        out,
        "{} tokens, {} illegal, {} lines",
        lexed.tokens.len(),
        lexed.illegal_count(),
        lexed.tokens.last().map_or(1, |t| t.line())
    )?;
    for (name, count) in category_counts(&lexed.tokens) {
        writeln!(out, "  {name:<14} {count}")?;
    }
    Ok(())
}
