//! Whole-resource byte sources.
//!
//! Lexing never performs streaming reads: a [`ByteSource`] materializes the
//! full contents of a resource before scanning begins.

use std::fs;
use std::io::{self, Read};
use std::path::{Path, PathBuf};

use crate::error::{SourceError, SourceResult};

/// Name used on the command line for standard input
pub const STDIN_NAME: &str = "-";

/// A resource that can be read fully into memory
pub trait ByteSource {
    /// Display name used in diagnostics
    fn name(&self) -> &str;

    /// Read the entire resource
    fn read_all(&self) -> SourceResult<Vec<u8>>;
}

/// A file on disk
///
/// # Examples
///
/// ```no_run
/// use hirc_util::io::{ByteSource, FileSource};
///
/// let source = FileSource::new("main.hir");
/// let bytes = source.read_all()?;
/// # Ok::<(), hirc_util::error::SourceError>(())
/// ```
#[derive(Clone, Debug)]
pub struct FileSource {
    path: PathBuf,
    name: String,
}

impl FileSource {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        let path = path.into();
        let name = path.display().to_string();
        Self { path, name }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl ByteSource for FileSource {
    fn name(&self) -> &str {
        &self.name
    }

    fn read_all(&self) -> SourceResult<Vec<u8>> {
        fs::read(&self.path).map_err(|source| match source.kind() {
            io::ErrorKind::NotFound => SourceError::NotFound(self.name.clone()),
            _ => SourceError::Read {
                name: self.name.clone(),
                source,
            },
        })
    }
}

/// The process's standard input
#[derive(Clone, Copy, Debug, Default)]
pub struct StdinSource;

impl ByteSource for StdinSource {
    fn name(&self) -> &str {
        "<stdin>"
    }

    fn read_all(&self) -> SourceResult<Vec<u8>> {
        let mut buf = Vec::new();
        io::stdin()
            .lock()
            .read_to_end(&mut buf)
            .map_err(|source| SourceError::Read {
                name: self.name().to_string(),
                source,
            })?;
        Ok(buf)
    }
}

/// Pick a source for a command-line argument, treating `-` as stdin
pub fn open(arg: &str) -> Box<dyn ByteSource + Send + Sync> {
    if arg == STDIN_NAME {
        Box::new(StdinSource)
    } else {
        Box::new(FileSource::new(arg))
    }
}
