//! The interpreter pipeline.
//!
//! Chains the three responsibilities linearly: input acquisition, comment
//! filtering, and statement extraction plus evaluation. Each statement is
//! run independently; a failure in one never stops the ones after it.

use crate::core::{Dialect, Outcome, OutcomeKind, Statement};
use crate::error::Result;
use crate::eval;
use crate::io::{read_script, trimmed_lines};
use crate::scan::{Extractor, strip_comments};
use std::path::Path;

/// A ViPL interpreter for one dialect.
///
/// # Examples
///
/// ```
/// use vipl_rs::interp::Interpreter;
///
/// let interp = Interpreter::new().unwrap();
/// let outcomes = interp.run_source("in_ra_màn_hình:2+2");
/// assert_eq!(outcomes[0].stdout_line().as_deref(), Some("4"));
/// ```
#[derive(Debug)]
pub struct Interpreter {
    dialect: Dialect,
    extractor: Extractor,
}

impl Interpreter {
    /// Creates an interpreter for the default ViPL dialect.
    ///
    /// # Errors
    ///
    /// Returns an error if the statement pattern fails to compile.
    pub fn new() -> Result<Self> {
        Self::with_dialect(Dialect::default())
    }

    /// Creates an interpreter for a custom dialect.
    ///
    /// # Errors
    ///
    /// Returns an error if the statement pattern fails to compile.
    pub fn with_dialect(dialect: Dialect) -> Result<Self> {
        let extractor = Extractor::new(&dialect)?;
        Ok(Self { dialect, extractor })
    }

    /// The dialect this interpreter runs.
    #[must_use]
    pub const fn dialect(&self) -> &Dialect {
        &self.dialect
    }

    /// Runs a script file and returns the outcomes in statement order.
    ///
    /// # Errors
    ///
    /// Returns the invocation errors of [`read_script`]; statement-level
    /// failures are outcomes, not errors.
    pub fn run_file<P: AsRef<Path>>(&self, path: P) -> Result<Vec<Outcome>> {
        let lines = read_script(path, &self.dialect)?;
        Ok(self.run_lines(&lines))
    }

    /// Runs source text from a string buffer.
    ///
    /// Lines are trimmed exactly as in file mode; the interactive prompt
    /// feeds each typed line through here as a one-line program.
    #[must_use]
    pub fn run_source(&self, source: &str) -> Vec<Outcome> {
        self.run_lines(&trimmed_lines(source))
    }

    fn run_lines(&self, lines: &[String]) -> Vec<Outcome> {
        let blob = strip_comments(lines, &self.dialect);
        self.extractor
            .extract(&blob)
            .iter()
            .map(|stmt| self.run_statement(stmt))
            .collect()
    }

    /// Runs one extracted statement.
    #[must_use]
    pub fn run_statement(&self, statement: &Statement) -> Outcome {
        Outcome {
            payload: statement.payload.clone(),
            kind: run_payload(&statement.payload),
        }
    }
}

/// Dispatches a payload: quoted literals print verbatim, everything else
/// goes through the expression evaluator.
fn run_payload(payload: &str) -> OutcomeKind {
    let trimmed = payload.trim();

    // A quoted literal loses exactly one leading and one trailing quote;
    // no escape processing.
    if trimmed.len() >= 2 && trimmed.starts_with('"') && trimmed.ends_with('"') {
        return OutcomeKind::Printed(trimmed[1..trimmed.len() - 1].to_string());
    }

    match eval::evaluate(trimmed) {
        Ok(value) => OutcomeKind::Printed(value.to_string()),
        Err(err) if err.is_conversion() => OutcomeKind::Invalid(err),
        Err(err) => OutcomeKind::Failed(err),
    }
}
