use std::io;

use thiserror::Error;

/// Result type used by the lexer, the statement recognizer and the executor.
pub type ScriptResult<T> = Result<T, ScriptError>;

#[derive(Debug, Error)]
/// Represents all errors that can occur while executing a script.
pub enum ScriptError {
    /// A statement has fewer tokens than its form requires, or its tokens are
    /// arranged in a way the form does not allow.
    #[error("line {line}: malformed statement: {reason}")]
    MalformedStatement {
        /// What is wrong with the statement.
        reason: String,
        /// The source line where the error occurred.
        line:   usize,
    },
    /// The leading keyword is not a known statement.
    #[error("line {line}: unknown identifier {token}")]
    UnknownIdentifier {
        /// The unrecognized keyword.
        token: String,
        /// The source line where the error occurred.
        line:  usize,
    },
    /// A variable could not be resolved to a supported value.
    ///
    /// Raised by `if` when the tested name is not bound in the store.
    #[error("line {line}: variable {name} has unknown type or was not declared")]
    UnknownVariableType {
        /// The name of the variable.
        name: String,
        /// The source line where the error occurred.
        line: usize,
    },
    /// An `if` test is not wrapped in parentheses.
    #[error("line {line}: test {test} must be wrapped in parentheses")]
    UnparenthesizedTest {
        /// The test as written.
        test: String,
        /// The source line where the error occurred.
        line: usize,
    },
    /// An `if` test opens a parenthesis it does not close.
    #[error("line {line}: expected closing parenthesis ')' in test {test}")]
    MissingClosingParen {
        /// The test as written.
        test: String,
        /// The source line where the error occurred.
        line: usize,
    },
    /// An `if` test is empty or a boolean constant.
    #[error("line {line}: pointless test {test}, expected a variable name")]
    PointlessTest {
        /// The test as written.
        test: String,
        /// The source line where the error occurred.
        line: usize,
    },
    /// Writing program output failed.
    #[error("line {line}: could not write output: {source}")]
    Output {
        /// The underlying I/O failure.
        source: io::Error,
        /// The source line where the error occurred.
        line:   usize,
    },
}

impl ScriptError {
    /// Returns the 1-based line number the error refers to.
    ///
    /// # Example
    /// ```
    /// use macaque::error::ScriptError;
    ///
    /// let err = ScriptError::UnknownIdentifier { token: "goto".to_string(),
    ///                                            line:  7, };
    ///
    /// assert_eq!(err.line(), 7);
    /// ```
    #[must_use]
    pub const fn line(&self) -> usize {
        match self {
            Self::MalformedStatement { line, .. }
            | Self::UnknownIdentifier { line, .. }
            | Self::UnknownVariableType { line, .. }
            | Self::UnparenthesizedTest { line, .. }
            | Self::MissingClosingParen { line, .. }
            | Self::PointlessTest { line, .. }
            | Self::Output { line, .. } => *line,
        }
    }

    /// Whether execution can meaningfully continue after this error.
    ///
    /// Statement errors only affect their own line. An output failure affects
    /// every line after it, so it always stops the run.
    #[must_use]
    pub const fn is_recoverable(&self) -> bool {
        !matches!(self, Self::Output { .. })
    }

    pub(crate) fn malformed(reason: impl Into<String>, line: usize) -> Self {
        Self::MalformedStatement { reason: reason.into(),
                                   line }
    }
}
