//! CLI command implementations.
//!
//! Contains the business logic for the two invocation modes: running a
//! script file and the interactive prompt.

// Statement-level diagnostics go to stderr as the run proceeds.
#![allow(clippy::print_stderr)]

use crate::cli::output::{OutputFormat, format_run};
use crate::cli::parser::Cli;
use crate::cli::repl;
use crate::error::Result;
use crate::interp::Interpreter;

/// Executes the CLI invocation.
///
/// File mode returns the run's stdout payload for the caller to print;
/// interactive mode prints as it goes and returns an empty string.
///
/// # Errors
///
/// Returns invocation errors (wrong extension, missing file) and prompt
/// I/O failures.
pub fn execute(cli: &Cli) -> Result<String> {
    let interp = Interpreter::new()?;
    let format = OutputFormat::parse(&cli.format);

    match &cli.script {
        Some(path) => {
            let outcomes = interp.run_file(path)?;
            if format == OutputFormat::Text {
                for line in outcomes.iter().filter_map(|o| o.stderr_line()) {
                    eprintln!("{line}");
                }
            }
            Ok(format_run(&outcomes, format))
        }
        None => {
            repl::run(&interp)?;
            Ok(String::new())
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::NamedTempFile;

    fn cli_for(path: &std::path::Path) -> Cli {
        Cli {
            script: Some(path.to_path_buf()),
            format: "text".to_string(),
        }
    }

    #[test]
    fn test_execute_script() {
        let mut file = NamedTempFile::with_suffix(".vipl").unwrap();
        writeln!(file, "# greeting").unwrap();
        writeln!(file, "in_ra_màn_hình:\"hello\"").unwrap();
        writeln!(file, "in_ra_màn_hình:2+2").unwrap();

        let output = execute(&cli_for(file.path())).unwrap();
        assert_eq!(output, "hello\n4\n");
    }

    #[test]
    fn test_execute_wrong_extension() {
        let file = NamedTempFile::with_suffix(".txt").unwrap();
        let err = execute(&cli_for(file.path())).unwrap_err();
        assert!(err.to_string().contains("not a vipl file"));
    }

    #[test]
    fn test_execute_missing_file() {
        let cli = cli_for(std::path::Path::new("/nonexistent/run.vipl"));
        let err = execute(&cli).unwrap_err();
        assert!(err.to_string().contains("does not exist"));
    }

    #[test]
    fn test_execute_json_format() {
        let mut file = NamedTempFile::with_suffix(".vipl").unwrap();
        writeln!(file, "in_ra_màn_hình:1+1").unwrap();

        let cli = Cli {
            script: Some(file.path().to_path_buf()),
            format: "json".to_string(),
        };
        let output = execute(&cli).unwrap();
        let parsed: serde_json::Value = serde_json::from_str(&output).unwrap();
        assert_eq!(parsed[0]["output"], "2");
    }
}
