//! `lex` and `check` command implementations.

use std::fs::File;
use std::io::{self, BufWriter, Write};
use std::path::PathBuf;
use std::time::Instant;

use tracing::{debug, info};

use crate::config::OutputFormat;
use crate::emit::emit;
use crate::error::{DriverError, Result};
use crate::report;
use crate::session::{total_illegal, Session};

/// Arguments for the lex command.
#[derive(Debug, Clone, Default)]
pub struct LexArgs {
    /// Inputs to scan; `-` is stdin.
    pub inputs: Vec<String>,
    pub format: OutputFormat,
    /// Write here instead of stdout.
    pub output: Option<PathBuf>,
}

/// Arguments for the check command.
#[derive(Debug, Clone)]
pub struct CheckArgs {
    /// Inputs to scan; `-` is stdin.
    pub inputs: Vec<String>,
    /// Diagnostics rendered per file.
    pub max_errors: usize,
}

/// Scan the inputs and print their token streams.
///
/// Illegal tokens are printed like any other token and do not fail the
/// command.
pub fn run_lex(args: &LexArgs) -> Result<()> {
    let start = Instant::now();
    let session = Session::load(&args.inputs)?;
    let lexed = session.lex_all()?;

    match &args.output {
        Some(path) => {
            debug!(path = %path.display(), "writing tokens to file");
            let mut out = BufWriter::new(File::create(path)?);
            emit(&lexed, args.format, &mut out)?;
        },
        None => {
            let stdout = io::stdout();
            let mut out = stdout.lock();
            emit(&lexed, args.format, &mut out)?;
        },
    }

    info!(elapsed = ?start.elapsed(), format = %args.format, "lex finished");
    Ok(())
}

/// Scan the inputs and report every Illegal token to `err`.
///
/// Fails with [`DriverError::IllegalTokens`] when any were found.
pub fn run_check(args: &CheckArgs, err: &mut dyn Write) -> Result<()> {
    let start = Instant::now();
    let session = Session::load(&args.inputs)?;
    let lexed = session.lex_all()?;

    for file in &lexed {
        let text = report::render(file, args.max_errors);
        if !text.is_empty() {
            writeln!(err, "{text}")?;
        }
    }
    err.flush()?;

    let count = total_illegal(&lexed);
    info!(elapsed = ?start.elapsed(), illegal = count, "check finished");
    if count > 0 {
        return Err(DriverError::IllegalTokens { count });
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    fn write(dir: &TempDir, name: &str, text: &str) -> String {
        let path = dir.path().join(name);
        std::fs::write(&path, text).unwrap();
        path.display().to_string()
    }

    #[test]
    fn test_run_lex_to_file() {
        let dir = TempDir::new().unwrap();
        let input = write(&dir, "main.hir", "let x;");
        let output = dir.path().join("tokens.json");

        let args = LexArgs {
            inputs: vec![input],
            format: OutputFormat::Json,
            output: Some(output.clone()),
        };
        run_lex(&args).unwrap();

        let value: serde_json::Value =
            serde_json::from_str(&std::fs::read_to_string(output).unwrap()).unwrap();
        assert_eq!(value[0]["tokens"].as_array().unwrap().len(), 4);
    }

    #[test]
    fn test_run_lex_tolerates_illegal_tokens() {
        let dir = TempDir::new().unwrap();
        let input = write(&dir, "bad.hir", "`");
        let args = LexArgs {
            inputs: vec![input],
            output: Some(dir.path().join("out.txt")),
            ..LexArgs::default()
        };
        assert!(run_lex(&args).is_ok());
    }

    #[test]
    fn test_run_check_clean() {
        let dir = TempDir::new().unwrap();
        let input = write(&dir, "ok.hir", "proc main() { return 0; }");
        let mut err = Vec::new();

        let args = CheckArgs {
            inputs: vec![input],
            max_errors: 50,
        };
        run_check(&args, &mut err).unwrap();
        assert!(err.is_empty());
    }

    #[test]
    fn test_run_check_reports_in_input_order() {
        let dir = TempDir::new().unwrap();
        let first = write(&dir, "first.hir", "#");
        let second = write(&dir, "second.hir", "let s = \"open");
        let mut err = Vec::new();

        let args = CheckArgs {
            inputs: vec![first, second],
            max_errors: 50,
        };
        let result = run_check(&args, &mut err);
        assert!(matches!(result, Err(DriverError::IllegalTokens { count: 2 })));

        let text = String::from_utf8(err).unwrap();
        let e1001 = text.find("error[E1001]").unwrap();
        let e1002 = text.find("error[E1002]").unwrap();
        assert!(e1001 < e1002);
        assert!(text.contains("first.hir:1:1"));
        assert!(text.contains("second.hir:1:9"));
    }

    #[test]
    fn test_run_check_missing_input() {
        let args = CheckArgs {
            inputs: vec!["/nonexistent/input.hir".to_string()],
            max_errors: 50,
        };
        let result = run_check(&args, &mut Vec::new());
        assert!(matches!(result, Err(DriverError::Source(_))));
    }
}
