use std::borrow::Cow;

use crate::{
    error::{ScriptError, ScriptResult},
    interpreter::coercion::group_arguments,
};

/// `print <argument>...`
pub const PRINT: &str = "print";
/// `var <name> = <value>...`
pub const VAR: &str = "var";
/// `if (<name>)`
pub const IF: &str = "if";

/// A recognized statement, built for one line and dropped once it has run.
///
/// Arguments are kept as raw text; they are resolved against the store only
/// when the statement executes.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Statement<'s> {
    /// Prints its arguments, concatenated, followed by a newline.
    Print {
        /// Raw arguments, with multi-word quoted literals already grouped.
        arguments: Vec<Cow<'s, str>>,
    },
    /// Binds a variable.
    Var {
        /// The variable name.
        name:  &'s str,
        /// The right-hand side, grouped the same way as `print` arguments.
        value: Vec<Cow<'s, str>>,
    },
    /// Prints the truthiness of a variable as `=> true` or `=> false`.
    If {
        /// The variable named between the parentheses.
        name: &'s str,
    },
}

/// Recognizes the statement on one line.
///
/// The first word selects the statement form; the rest are checked against
/// what that form requires. Syntax problems are reported here, so a malformed
/// statement never reaches execution.
///
/// # Parameters
/// - `words`: The line's words, keyword first.
/// - `line`: Line number for error reporting.
///
/// # Returns
/// - `Ok(None)` for a blank line.
/// - `Ok(Some(statement))` otherwise.
///
/// # Errors
/// - `UnknownIdentifier` if the keyword is not `print`, `var` or `if`.
/// - `MalformedStatement` if the statement is missing tokens or has extra
///   ones.
/// - `UnparenthesizedTest`, `MissingClosingParen` or `PointlessTest` for a bad
///   `if` test.
///
/// # Example
/// ```
/// use macaque::interpreter::statement::{Statement, recognize};
///
/// let statement = recognize(&["var", "greeting", "=", "'hi", "there'"], 1).unwrap();
///
/// assert_eq!(statement,
///            Some(Statement::Var { name:  "greeting",
///                                  value: vec!["'hi there'".into()], }));
/// assert_eq!(recognize(&[], 2).unwrap(), None);
/// ```
pub fn recognize<'s>(words: &[&'s str], line: usize) -> ScriptResult<Option<Statement<'s>>> {
    let Some((&keyword, rest)) = words.split_first() else {
        return Ok(None);
    };

    let statement = match keyword {
        PRINT => recognize_print(rest, line)?,
        VAR => recognize_var(rest, line)?,
        IF => recognize_if(rest, line)?,
        _ => {
            return Err(ScriptError::UnknownIdentifier { token: keyword.to_string(),
                                                        line });
        },
    };

    Ok(Some(statement))
}

fn recognize_print<'s>(rest: &[&'s str], line: usize) -> ScriptResult<Statement<'s>> {
    if rest.is_empty() {
        return Err(ScriptError::malformed("print expects at least one argument", line));
    }

    Ok(Statement::Print { arguments: group_arguments(rest, line)? })
}

/// Parses `var <name> = <value>...`.
///
/// Everything after `=` is grouped like `print` arguments. A single group is
/// resolved to its typed value; several groups bind the string `print` would
/// output for them, so `var s = 'a' 'b'` binds `ab`.
fn recognize_var<'s>(rest: &[&'s str], line: usize) -> ScriptResult<Statement<'s>> {
    match rest {
        [name, "=", value @ ..] if !value.is_empty() => {
            Ok(Statement::Var { name:  *name,
                                value: group_arguments(value, line)?, })
        },
        [_, "=", ..] => Err(ScriptError::malformed("var expects a value after '='", line)),
        [_, other, ..] => {
            Err(ScriptError::malformed(format!("var expects '=' after the name, found {other}"),
                                       line))
        },
        _ => Err(ScriptError::malformed("var expects the form: var <name> = <value>", line)),
    }
}

/// Parses `if (<name>)`.
///
/// The test must be a single word: an opening parenthesis, a variable name and
/// a closing parenthesis with nothing in between.
fn recognize_if<'s>(rest: &[&'s str], line: usize) -> ScriptResult<Statement<'s>> {
    let Some((&test, extra)) = rest.split_first() else {
        return Err(ScriptError::malformed("if expects a test such as (x)", line));
    };

    let Some(inner) = test.strip_prefix('(') else {
        return Err(ScriptError::UnparenthesizedTest { test: test.to_string(),
                                                      line });
    };

    let name = match inner.strip_suffix(')') {
        Some(name) if !name.contains(['(', ')']) => name,
        _ => {
            return Err(ScriptError::MissingClosingParen { test: test.to_string(),
                                                          line });
        },
    };

    if let Some(&extra) = extra.first() {
        return Err(ScriptError::malformed(format!("unexpected {extra} after the test {test}"),
                                          line));
    }

    if matches!(name, "" | "true" | "false") {
        return Err(ScriptError::PointlessTest { test: test.to_string(),
                                                line });
    }

    Ok(Statement::If { name })
}
