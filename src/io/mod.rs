//! Script file I/O.

pub mod reader;

pub use reader::{read_script, trimmed_lines};
