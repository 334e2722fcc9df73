//! Command-line argument parsing.
//!
//! Defines the CLI structure using clap derive macros.

use clap::Parser;
use std::path::PathBuf;

/// vipl-rs: interpreter for ViPL scripts.
///
/// Runs a `.vipl` script when given a path, or an interactive prompt
/// when invoked without arguments.
#[derive(Parser, Debug)]
#[command(name = "vipl-rs")]
#[command(version, about, long_about = None)]
pub struct Cli {
    /// Path to a `.vipl` script. Omit to start the interactive prompt.
    pub script: Option<PathBuf>,

    /// Output format (text, json).
    #[arg(long, default_value = "text", env = "VIPL_FORMAT")]
    pub format: String,
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn test_cli_parse() {
        // Test that CLI can be created
        Cli::command().debug_assert();
    }

    #[test]
    fn test_script_argument() {
        let cli = Cli::parse_from(["vipl-rs", "hello.vipl"]);
        assert_eq!(cli.script, Some(PathBuf::from("hello.vipl")));
        assert_eq!(cli.format, "text");
    }

    #[test]
    fn test_no_arguments_means_interactive() {
        let cli = Cli::parse_from(["vipl-rs"]);
        assert!(cli.script.is_none());
    }

    #[test]
    fn test_format_flag() {
        let cli = Cli::parse_from(["vipl-rs", "--format", "json", "hello.vipl"]);
        assert_eq!(cli.format, "json");
    }
}
