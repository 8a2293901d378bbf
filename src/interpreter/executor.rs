use std::io::Write;

use log::{debug, trace, warn};

use crate::{
    error::{ScriptError, ScriptResult},
    interpreter::{
        coercion::{concatenate, resolve_all},
        lexer::{Lines, SourceLine},
        statement::{Statement, recognize},
        store::Store,
        value::Value,
    },
};

/// Text written in front of an `if` result.
pub const TEST_PREFIX: &str = "=> ";

/// One interpreter session.
///
/// An `Interpreter` owns the variable store and the writer program output goes
/// to. Lines are executed strictly in order, each as soon as it has been
/// lexed. The store is the only state carried from one line to the next.
///
/// Sessions are independent: two interpreters in the same process never share
/// variables.
///
/// ## Usage
///
/// ```
/// use macaque::interpreter::executor::Interpreter;
///
/// let mut interpreter = Interpreter::new(Vec::new());
/// interpreter.run("var x = 5\nprint x\nif (x)\n").unwrap();
///
/// let output = String::from_utf8(interpreter.into_output()).unwrap();
/// assert_eq!(output, "5\n=> true\n");
/// ```
pub struct Interpreter<W: Write> {
    store: Store,
    out:   W,
}

impl<W: Write> Interpreter<W> {
    /// Creates a session with an empty store that writes to `out`.
    #[must_use]
    pub fn new(out: W) -> Self {
        Self { store: Store::new(),
               out }
    }

    /// The variables bound so far.
    #[must_use]
    pub const fn store(&self) -> &Store {
        &self.store
    }

    /// Ends the session and hands back the output writer.
    pub fn into_output(self) -> W {
        self.out
    }

    /// Runs a whole program, stopping at the first error.
    ///
    /// Nothing after the failing line is executed, so it produces no output.
    ///
    /// # Errors
    /// The first `ScriptError` raised by any line.
    pub fn run(&mut self, source: &str) -> ScriptResult<()> {
        let mut last_line = 0;

        for line in Lines::new(source) {
            let line = line?;
            last_line = line.number;
            self.execute_line(&line)?;
        }

        self.flush(last_line)
    }

    /// Runs a whole program, reporting errors without stopping.
    ///
    /// A failing line is skipped and its error collected; the lines after it
    /// still run against whatever the store holds. Output failures still end
    /// the run, since nothing after them could be written.
    ///
    /// # Returns
    /// Every error raised, in line order. Empty if the program ran cleanly.
    pub fn run_recovering(&mut self, source: &str) -> Vec<ScriptError> {
        let mut errors = Vec::new();
        let mut last_line = 0;

        for line in Lines::new(source) {
            let result = line.and_then(|line| {
                                 last_line = line.number;
                                 self.execute_line(&line)
                             });

            if let Err(e) = result {
                if !e.is_recoverable() {
                    errors.push(e);
                    return errors;
                }
                warn!("{e}; continuing");
                errors.push(e);
            }
        }

        if let Err(e) = self.flush(last_line) {
            errors.push(e);
        }

        errors
    }

    /// Recognizes and executes a single line.
    ///
    /// A blank line is a no-op.
    ///
    /// # Errors
    /// Any error from recognizing or executing the statement.
    pub fn execute_line(&mut self, line: &SourceLine<'_>) -> ScriptResult<()> {
        match recognize(&line.words, line.number)? {
            Some(statement) => self.execute(&statement, line.number),
            None => {
                trace!("line {}: blank", line.number);
                Ok(())
            },
        }
    }

    /// Executes one statement.
    ///
    /// # Parameters
    /// - `statement`: The statement to run.
    /// - `line`: Line number for error reporting.
    ///
    /// # Errors
    /// - `UnknownVariableType` if an `if` names an unbound variable.
    /// - `Output` if writing fails.
    pub fn execute(&mut self, statement: &Statement<'_>, line: usize) -> ScriptResult<()> {
        debug!("line {line}: {statement:?}");

        match statement {
            Statement::Print { arguments } => {
                let text = concatenate(arguments, &self.store);
                self.emit(&text, line)
            },
            Statement::Var { name, value } => {
                let value = resolve_all(value, &self.store);
                trace!("line {line}: {name} = {value} ({})", value.type_name());
                self.store.set(*name, value);
                Ok(())
            },
            Statement::If { name } => {
                let truthy =
                    self.store
                        .get(name)
                        .map(Value::is_truthy)
                        .ok_or_else(|| ScriptError::UnknownVariableType { name: (*name).to_string(),
                                                                          line })?;
                self.emit(&format!("{TEST_PREFIX}{truthy}"), line)
            },
        }
    }

    fn emit(&mut self, text: &str, line: usize) -> ScriptResult<()> {
        writeln!(self.out, "{text}").map_err(|source| ScriptError::Output { source, line })
    }

    fn flush(&mut self, line: usize) -> ScriptResult<()> {
        self.out
            .flush()
            .map_err(|source| ScriptError::Output { source, line })
    }
}
