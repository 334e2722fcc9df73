//! CLI layer for vipl-rs.
//!
//! Provides the command-line interface using clap: file mode for running
//! `.vipl` scripts and the interactive prompt when no script is given.

pub mod commands;
pub mod output;
pub mod parser;
pub mod repl;

pub use commands::execute;
pub use output::OutputFormat;
pub use parser::Cli;
