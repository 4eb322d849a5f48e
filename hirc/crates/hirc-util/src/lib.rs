//! hirc-util - Foundation types for the HIR front end
//!
//! This crate holds the pieces every other hirc crate leans on:
//!
//! - [`span`]: byte spans, file identifiers, and the [`SourceMap`] that turns
//!   byte offsets into line/column positions
//! - [`diagnostic`]: severity levels, numbered codes, source snippets, and a
//!   collecting [`Handler`](diagnostic::Handler)
//! - [`io`]: the [`ByteSource`](io::ByteSource) trait that supplies whole
//!   source buffers from files or stdin
//! - [`error`]: `thiserror` error enums for the above
//!
//! # Examples
//!
//! ```
//! use hirc_util::SourceMap;
//!
//! let mut map = SourceMap::new();
//! map.add_file("main.hir", "let x = 1;".as_bytes());
//! let file = map.iter().next().unwrap();
//! assert_eq!(file.offset_to_line_col(4), (1, 5));
//! ```

pub mod diagnostic;
pub mod error;
pub mod io;
pub mod span;

pub use diagnostic::{Diagnostic, DiagnosticBuilder, DiagnosticCode, Handler, Level};
pub use error::SourceError;
pub use span::{FileId, SourceFile, SourceMap, Span};
