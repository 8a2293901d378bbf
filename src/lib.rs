//! # macaque
//!
//! macaque is a tiny command-oriented script interpreter written in Rust.
//! A program is read line by line; each line holds one `print`, `var` or `if`
//! statement and is executed as soon as it has been recognized. Variables hold
//! integers, booleans or strings, with the type inferred from how the value is
//! written.

#![warn(
    clippy::redundant_clone,
    clippy::needless_pass_by_value,
    clippy::similar_names,
    clippy::large_enum_variant,
    clippy::string_lit_as_bytes,
    clippy::match_same_arms,
    clippy::cargo,
    clippy::nursery,
    clippy::perf,
    clippy::style,
    clippy::suspicious,
    clippy::correctness,
    clippy::complexity,
    clippy::pedantic,
    //missing_docs,
)]
#![allow(clippy::missing_errors_doc)]

use std::io::Write;

use crate::{error::ScriptError, interpreter::executor::Interpreter};

/// Provides the error types for loading and running scripts.
///
/// Load errors cover a missing script argument and unreadable files. Script
/// errors cover every way a statement can fail, each tagged with the 1-based
/// line it came from.
///
/// # Responsibilities
/// - Defines one error enum per phase (loading, execution).
/// - Attaches line numbers so messages read `line <n>: <reason>`.
/// - Wraps both phases in a single type for the binary to report.
pub mod error;
/// Runs source code line by line.
///
/// This module ties together lexing, argument coercion, statement recognition
/// and execution. It exposes the session type that owns the variable store.
///
/// # Responsibilities
/// - Splits source into lines and words.
/// - Resolves words into typed values.
/// - Executes statements against a session's store and output.
pub mod interpreter;
/// The stderr logger used by the binary.
pub mod logging;

/// Run-time settings for [`run_script`].
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct RunOptions {
    /// Report failing lines and keep executing instead of stopping at the
    /// first error.
    pub keep_going: bool,
}

/// Runs a program in a fresh session, writing its output to `out`.
///
/// By default execution stops at the first failing line. With
/// [`RunOptions::keep_going`] every line runs and every error is collected.
///
/// # Errors
/// Returns every error raised, in line order. Without `keep_going` this holds
/// exactly one error.
///
/// # Examples
/// ```
/// use macaque::{RunOptions, run_script};
///
/// let mut out = Vec::new();
/// let source = "var name = 'macaque'\nprint 'hello, ' name\n";
///
/// assert!(run_script(source, &mut out, RunOptions::default()).is_ok());
/// assert_eq!(out, b"hello, macaque\n");
///
/// // An unknown statement stops the run.
/// let errors = run_script("goto 10\nprint 'unreachable'", Vec::new(), RunOptions::default())
///     .unwrap_err();
/// assert_eq!(errors.len(), 1);
/// assert_eq!(errors[0].to_string(), "line 1: unknown identifier goto");
/// ```
pub fn run_script<W: Write>(source: &str,
                            out: W,
                            options: RunOptions)
                            -> Result<(), Vec<ScriptError>> {
    let mut interpreter = Interpreter::new(out);

    if options.keep_going {
        let errors = interpreter.run_recovering(source);
        if errors.is_empty() { Ok(()) } else { Err(errors) }
    } else {
        interpreter.run(source).map_err(|e| vec![e])
    }
}
