use std::{io, path::PathBuf};

use thiserror::Error;

#[derive(Debug, Error)]
/// Represents all errors that can occur while loading a script.
pub enum LoadError {
    /// Neither a script path nor inline source was given.
    #[error("program name not provided")]
    MissingProgramArgument,
    /// The script file could not be read.
    #[error("could not read {}: {source}", .path.display())]
    FileReadFailure {
        /// The path that was requested.
        path:   PathBuf,
        /// The underlying I/O failure.
        source: io::Error,
    },
}
