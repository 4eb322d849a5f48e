//! Input loading and parallel scanning.
//!
//! Every input is read in full before any scanning starts. Buffers are then
//! lexed in parallel, one independent [`Lexer`] per buffer, and results come
//! back in input order.

use rayon::prelude::*;
use tracing::{debug, info};

use hirc_lex::{Lexer, Token};
use hirc_util::io::{self, ByteSource};
use hirc_util::{SourceFile, SourceMap};

use crate::error::{DriverError, Result};

/// The loaded inputs of one driver invocation.
#[derive(Debug, Default)]
pub struct Session {
    sources: SourceMap,
}

/// One scanned input.
#[derive(Debug)]
pub struct LexedFile<'a> {
    pub file: &'a SourceFile,
    /// The lexer that produced `tokens`, kept for [`Token::value`].
    pub lexer: Lexer<'a>,
    pub tokens: Vec<Token>,
}

impl Session {
    pub fn new() -> Self {
        Self::default()
    }

    /// Read every input named on the command line, `-` meaning stdin.
    pub fn load<S: AsRef<str>>(inputs: &[S]) -> Result<Self> {
        let mut session = Self::new();
        for input in inputs {
            let source = io::open(input.as_ref());
            session.add_source(&*source)?;
        }
        info!(files = session.file_count(), "loaded sources");
        Ok(session)
    }

    /// Read one source in full and register it.
    pub fn add_source(&mut self, source: &dyn ByteSource) -> Result<()> {
        let bytes = source.read_all()?;
        debug!(name = source.name(), bytes = bytes.len(), "read source");
        self.sources.add_file(source.name(), bytes);
        Ok(())
    }

    /// Register an in-memory buffer.
    pub fn add_bytes(&mut self, name: impl Into<String>, bytes: impl Into<Vec<u8>>) {
        self.sources.add_file(name, bytes.into());
    }

    pub fn file_count(&self) -> usize {
        self.sources.file_count()
    }

    /// Scan every loaded buffer, in parallel, preserving input order.
    pub fn lex_all(&self) -> Result<Vec<LexedFile<'_>>> {
        let files: Vec<&SourceFile> = self.sources.iter().map(|file| &**file).collect();
        let lexed = files
            .into_par_iter()
            .map(lex_file)
            .collect::<Result<Vec<_>>>()?;

        info!(
            files = lexed.len(),
            tokens = lexed.iter().map(|f| f.tokens.len()).sum::<usize>(),
            illegal = total_illegal(&lexed),
            "lexing complete"
        );
        Ok(lexed)
    }
}

/// Scan a single buffer.
pub fn lex_file(file: &SourceFile) -> Result<LexedFile<'_>> {
    let mut lexer = Lexer::new(file.bytes()).map_err(|source| DriverError::Lex {
        name: file.name().to_string(),
        source,
    })?;
    let tokens = lexer.tokenize();
    debug!(
        file = file.name(),
        tokens = tokens.len(),
        illegal = lexer.illegal_count(),
        "lexed file"
    );
    Ok(LexedFile {
        file,
        lexer,
        tokens,
    })
}

/// Illegal tokens across all files.
pub fn total_illegal(files: &[LexedFile<'_>]) -> usize {
    files.iter().map(LexedFile::illegal_count).sum()
}

impl<'a> LexedFile<'a> {
    pub fn name(&self) -> &str {
        self.file.name()
    }

    pub fn illegal_count(&self) -> usize {
        self.lexer.illegal_count()
    }

    pub fn illegal_tokens(&self) -> impl Iterator<Item = &Token> + '_ {
        self.tokens.iter().filter(|t| t.is_illegal())
    }
}
