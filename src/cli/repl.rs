//! Interactive prompt.
//!
//! Each typed line is run as a one-line program through the same pipeline
//! as file mode. The session ends on the literal line `exit()`, on
//! end-of-input, or on Ctrl-C with a farewell; all three exit with
//! status 0.

// The prompt prints as the session goes.
#![allow(clippy::print_stdout, clippy::print_stderr)]

use crate::error::{IoError, Result};
use crate::interp::Interpreter;
use rustyline::DefaultEditor;
use rustyline::error::ReadlineError;

/// The prompt shown for each input line.
pub const PROMPT: &str = ">>> ";

/// The literal input line that ends the session.
pub const EXIT_COMMAND: &str = "exit()";

/// Farewell printed when the session is interrupted.
pub const FAREWELL: &str = "Bye";

/// Runs the interactive prompt until the session ends.
///
/// # Errors
///
/// Returns an error if the line editor cannot be created or reading from
/// the terminal fails. Ending the session normally is not an error.
pub fn run(interp: &Interpreter) -> Result<()> {
    let mut editor =
        DefaultEditor::new().map_err(|e| IoError::Generic(e.to_string()))?;

    loop {
        match editor.readline(PROMPT) {
            Ok(line) => {
                if line == EXIT_COMMAND {
                    break;
                }
                let _ = editor.add_history_entry(&line);
                for outcome in interp.run_source(&line) {
                    if let Some(text) = outcome.stdout_line() {
                        println!("{text}");
                    }
                    if let Some(diag) = outcome.stderr_line() {
                        eprintln!("{diag}");
                    }
                }
            }
            Err(ReadlineError::Interrupted) => {
                println!("{FAREWELL}");
                break;
            }
            Err(ReadlineError::Eof) => break,
            Err(e) => return Err(IoError::Generic(e.to_string()).into()),
        }
    }
    Ok(())
}
