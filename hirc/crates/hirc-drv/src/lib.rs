//! hirc-drv - Driver for the HIR lexer
//!
//! Loads source buffers, scans them in parallel with [`hirc_lex`], and
//! prints token streams or diagnostics. The `hirc` binary is a thin clap
//! front end over [`commands`].
//!
//! ```
//! use hirc_drv::session::Session;
//!
//! let mut session = Session::new();
//! session.add_bytes("main.hir", "let x = 1;");
//! let lexed = session.lex_all()?;
//! assert_eq!(lexed[0].tokens.len(), 6);
//! # Ok::<(), hirc_drv::error::DriverError>(())
//! ```

pub mod commands;
pub mod config;
pub mod emit;
pub mod error;
pub mod report;
pub mod session;

pub use config::{Config, OutputFormat};
pub use error::{DriverError, Result};
