use thiserror::Error;

/// Errors raised before a script runs.
///
/// Covers everything that can go wrong while locating and loading the program
/// text: a missing script argument or a file that cannot be read.
pub mod load_error;
/// Errors raised while executing statements.
///
/// Every variant carries the 1-based line number of the statement that failed,
/// so the message can point the user at the offending line.
pub mod script_error;

pub use load_error::LoadError;
pub use script_error::{ScriptError, ScriptResult};

/// Any error the interpreter can report to the user.
///
/// The binary collects these and prints each one prefixed with `macaque:`.
#[derive(Debug, Error)]
pub enum MacaqueError {
    /// The script could not be loaded.
    #[error(transparent)]
    Load(#[from] LoadError),
    /// A statement failed.
    #[error(transparent)]
    Script(#[from] ScriptError),
}
