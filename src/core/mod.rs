//! Core domain models for ViPL.
//!
//! This module contains the fundamental data structures used throughout the
//! interpreter: the language dialect (the grammar's fixed tokens) and the
//! extracted statements with their run outcomes. These are pure domain
//! models with no I/O dependencies.

pub mod dialect;
pub mod statement;

pub use dialect::{COMMENT_MARKER, Dialect, EXTENSION, TRIGGER};
pub use statement::{INVALID_INPUT, Outcome, OutcomeKind, Statement};
