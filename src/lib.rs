//! # vipl-rs
//!
//! Interpreter for ViPL scripts.
//!
//! ViPL is a one-statement toy language: lines starting with `#` are
//! comments, and any line containing the trigger keyword followed by a
//! colon prints its payload, either a quoted literal verbatim or the value
//! of a small expression. Scripts live in `.vipl` files; invoking the
//! binary without a script starts an interactive prompt.
//!
//! ## Pipeline
//!
//! - **Input acquisition**: a validated script file, an interactive line,
//!   or a string buffer, as trimmed lines
//! - **Comment filtering**: a pure filter dropping `#`-lines
//! - **Extraction and evaluation**: every trigger payload, run through a
//!   closed expression grammar with no shared state between statements

#![deny(clippy::all)]
#![warn(clippy::pedantic)]
#![warn(clippy::nursery)]
#![warn(missing_docs)]
#![deny(unsafe_code)]

pub mod cli;
pub mod core;
pub mod error;
pub mod eval;
pub mod interp;
pub mod io;
pub mod scan;

// Re-export commonly used types at crate root
pub use error::{Error, EvalError, IoError, Result};

// Re-export core domain types
pub use core::{Dialect, INVALID_INPUT, Outcome, OutcomeKind, Statement};

// Re-export pipeline stages
pub use eval::{Value, evaluate};
pub use interp::Interpreter;
pub use scan::{Extractor, strip_comments};

// Re-export CLI types
pub use cli::{Cli, OutputFormat};
