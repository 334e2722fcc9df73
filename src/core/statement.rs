//! Extracted statements and their run outcomes.
//!
//! A statement is the raw payload text captured after the trigger keyword;
//! it has no identity beyond its text and its order of appearance. Running
//! one produces an `Outcome`, which the CLI layer renders.

use crate::error::EvalError;

/// Fixed user-facing line printed for conversion-class evaluation errors.
pub const INVALID_INPUT: &str = "Invalid input";

/// A single extracted statement payload.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Statement {
    /// Raw payload text captured after the trigger keyword and colon.
    pub payload: String,

    /// Zero-based order of appearance in the filtered source.
    pub index: usize,
}

impl Statement {
    /// Creates a statement from its captured payload.
    #[must_use]
    pub const fn new(payload: String, index: usize) -> Self {
        Self { payload, index }
    }
}

/// The result of running one statement.
#[derive(Debug, Clone, PartialEq)]
pub struct Outcome {
    /// The payload the statement was run from, as captured.
    pub payload: String,

    /// What running the payload produced.
    pub kind: OutcomeKind,
}

/// What running a payload produced.
#[derive(Debug, Clone, PartialEq)]
pub enum OutcomeKind {
    /// A line for standard output: a quoted literal printed verbatim, or
    /// the rendering of an evaluated value.
    Printed(String),

    /// A conversion-class failure, rendered as the fixed
    /// [`INVALID_INPUT`] line.
    Invalid(EvalError),

    /// Any other evaluation failure; reported but does not stop the run.
    Failed(EvalError),
}

impl Outcome {
    /// The line this outcome contributes to standard output, if any.
    #[must_use]
    pub fn stdout_line(&self) -> Option<String> {
        match &self.kind {
            OutcomeKind::Printed(text) => Some(text.clone()),
            OutcomeKind::Invalid(_) => Some(INVALID_INPUT.to_string()),
            OutcomeKind::Failed(_) => None,
        }
    }

    /// The diagnostic this outcome contributes to standard error, if any.
    #[must_use]
    pub fn stderr_line(&self) -> Option<String> {
        match &self.kind {
            OutcomeKind::Failed(err) => Some(err.to_string()),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_printed_outcome_lines() {
        let outcome = Outcome {
            payload: "2+2".to_string(),
            kind: OutcomeKind::Printed("4".to_string()),
        };
        assert_eq!(outcome.stdout_line().as_deref(), Some("4"));
        assert_eq!(outcome.stderr_line(), None);
    }

    #[test]
    fn test_invalid_outcome_lines() {
        let outcome = Outcome {
            payload: "1.2.3".to_string(),
            kind: OutcomeKind::Invalid(EvalError::MalformedNumber {
                literal: "1.2.3".to_string(),
                column: 1,
            }),
        };
        assert_eq!(outcome.stdout_line().as_deref(), Some("Invalid input"));
        assert_eq!(outcome.stderr_line(), None);
    }

    #[test]
    fn test_failed_outcome_lines() {
        let outcome = Outcome {
            payload: "x".to_string(),
            kind: OutcomeKind::Failed(EvalError::UnknownName {
                name: "x".to_string(),
            }),
        };
        assert_eq!(outcome.stdout_line(), None);
        assert_eq!(
            outcome.stderr_line().as_deref(),
            Some("name is not defined: x")
        );
    }
}
