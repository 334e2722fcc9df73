//! Error types for ViPL operations.
//!
//! This module provides the error hierarchy using `thiserror` for all
//! interpreter operations: script I/O, statement extraction, and expression
//! evaluation.

use thiserror::Error;

/// Result type alias for ViPL operations.
pub type Result<T> = std::result::Result<T, Error>;

/// Top-level error type for ViPL operations.
#[derive(Error, Debug)]
pub enum Error {
    /// Script I/O errors (invocation failures, read failures).
    #[error("{0}")]
    Io(#[from] IoError),

    /// Expression evaluation errors.
    #[error("evaluation error: {0}")]
    Eval(#[from] EvalError),

    /// Statement pattern compilation errors.
    #[error("pattern error: {0}")]
    Pattern(String),
}

/// Script I/O errors.
///
/// The first two variants are the invocation errors reported to the user
/// before any statement runs; both terminate the process with status 1.
#[derive(Error, Debug)]
pub enum IoError {
    /// Script path does not carry the recognized extension.
    #[error("File is not a vipl file: {path}")]
    WrongExtension {
        /// Path that was rejected.
        path: String,
    },

    /// Script path does not denote an existing file.
    #[error("File does not exist: {path}")]
    FileNotFound {
        /// Path that was not found.
        path: String,
    },

    /// Failed to read the script file.
    #[error("failed to read file: {path}: {reason}")]
    ReadFailed {
        /// Path to the file.
        path: String,
        /// Reason for failure.
        reason: String,
    },

    /// Generic I/O error wrapper.
    #[error("I/O error: {0}")]
    Generic(String),
}

/// Expression evaluation errors.
///
/// This is a closed set: every way an extracted payload can fail to
/// evaluate is one of these variants, and all of them are recoverable
/// per statement. Columns are 1-based grapheme positions in the payload.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum EvalError {
    /// A numeric literal that does not scan as an integer or float.
    ///
    /// This is the conversion class: it renders as the fixed user-facing
    /// `Invalid input` line instead of its message.
    #[error("malformed number at column {column}: {literal}")]
    MalformedNumber {
        /// The offending literal text.
        literal: String,
        /// Column where the literal starts.
        column: usize,
    },

    /// A character outside the expression grammar.
    #[error("unexpected character at column {column}: {ch:?}")]
    UnexpectedChar {
        /// The offending character.
        ch: char,
        /// Column of the character.
        column: usize,
    },

    /// A string literal with no closing quote.
    #[error("unterminated string starting at column {column}")]
    UnterminatedString {
        /// Column of the opening quote.
        column: usize,
    },

    /// A token that does not fit the grammar at this position.
    #[error("unexpected token at column {column}: {found}")]
    UnexpectedToken {
        /// Rendering of the offending token.
        found: String,
        /// Column of the token.
        column: usize,
    },

    /// The expression ended where more input was required.
    #[error("unexpected end of expression")]
    UnexpectedEnd,

    /// An identifier was used; the evaluation environment is always empty.
    #[error("name is not defined: {name}")]
    UnknownName {
        /// The unresolved identifier.
        name: String,
    },

    /// Division or modulo with a zero divisor.
    #[error("division by zero")]
    DivisionByZero,

    /// Integer arithmetic out of range.
    #[error("integer overflow")]
    Overflow,

    /// A binary operator applied to operand types it does not support.
    #[error("type mismatch: cannot apply {op} to {lhs} and {rhs}")]
    TypeMismatch {
        /// Operator lexeme.
        op: String,
        /// Type name of the left operand.
        lhs: String,
        /// Type name of the right operand.
        rhs: String,
    },

    /// A unary operator applied to an operand type it does not support.
    #[error("invalid operand: cannot apply {op} to {operand}")]
    InvalidOperand {
        /// Operator lexeme.
        op: String,
        /// Type name of the operand.
        operand: String,
    },
}

impl EvalError {
    /// Whether this error is in the conversion class.
    ///
    /// Conversion failures render as the fixed `Invalid input` line;
    /// every other variant is reported with its own message.
    #[must_use]
    pub const fn is_conversion(&self) -> bool {
        matches!(self, Self::MalformedNumber { .. })
    }
}

// Implement From traits for standard library and ecosystem errors

impl From<std::io::Error> for Error {
    fn from(err: std::io::Error) -> Self {
        Self::Io(IoError::Generic(err.to_string()))
    }
}

impl From<regex::Error> for Error {
    fn from(err: regex::Error) -> Self {
        Self::Pattern(err.to_string())
    }
}
