use std::borrow::Cow;

use crate::{
    error::{ScriptError, ScriptResult},
    interpreter::{store::Store, value::Value},
};

/// Quote characters that delimit a string literal.
pub const QUOTES: [char; 2] = ['\'', '"'];

/// Returns the interior of a quoted literal.
///
/// A literal is quoted when it is at least two characters long and starts and
/// ends with the same quote character (`'` or `"`).
///
/// # Example
/// ```
/// use macaque::interpreter::coercion::strip_quotes;
///
/// assert_eq!(strip_quotes("'hello'"), Some("hello"));
/// assert_eq!(strip_quotes("\"a b\""), Some("a b"));
/// assert_eq!(strip_quotes("''"), Some(""));
/// assert_eq!(strip_quotes("'mixed\""), None);
/// assert_eq!(strip_quotes("'"), None);
/// ```
#[must_use]
pub fn strip_quotes(raw: &str) -> Option<&str> {
    QUOTES.iter().find_map(|&quote| {
                     raw.strip_prefix(quote)
                        .and_then(|rest| rest.strip_suffix(quote))
                 })
}

/// Resolves a raw argument to a typed value.
///
/// This is the single coercion rule used by every statement. It is applied in
/// order, and the first rule that matches wins:
///
/// 1. A quoted literal becomes a `Str` of its interior.
/// 2. A bound variable name becomes a copy of the bound value.
/// 3. Anything `i64` can parse becomes an `Integer`.
/// 4. Exactly `true` or `false` (lowercase) becomes a `Bool`.
/// 5. Anything else is taken literally as a `Str`.
///
/// # Parameters
/// - `raw`: The argument text. Multi-word arguments are passed already
///   rejoined with single spaces.
/// - `store`: The variables visible to the statement.
///
/// # Example
/// ```
/// use macaque::interpreter::{coercion::resolve, store::Store, value::Value};
///
/// let mut store = Store::new();
/// store.set("x", Value::Integer(5));
///
/// assert_eq!(resolve("x", &store), Value::Integer(5));
/// assert_eq!(resolve("'x'", &store), Value::from("x"));
/// assert_eq!(resolve("-12", &store), Value::Integer(-12));
/// assert_eq!(resolve("false", &store), Value::Bool(false));
/// assert_eq!(resolve("False", &store), Value::from("False"));
/// assert_eq!(resolve("hello world", &store), Value::from("hello world"));
/// ```
#[must_use]
pub fn resolve(raw: &str, store: &Store) -> Value {
    if let Some(interior) = strip_quotes(raw) {
        return Value::from(interior);
    }
    if let Some(value) = store.get(raw) {
        return value.clone();
    }
    if let Ok(n) = raw.parse::<i64>() {
        return Value::Integer(n);
    }

    match raw {
        "true" => Value::Bool(true),
        "false" => Value::Bool(false),
        _ => Value::from(raw),
    }
}

/// Renders every argument and concatenates them with no separator.
///
/// This is the text a `print` statement writes, without the newline.
///
/// # Example
/// ```
/// use macaque::interpreter::{coercion::concatenate, store::Store, value::Value};
///
/// let mut store = Store::new();
/// store.set("n", Value::Integer(3));
///
/// assert_eq!(concatenate(&["n", "' items'"], &store), "3 items");
/// ```
#[must_use]
pub fn concatenate<S: AsRef<str>>(arguments: &[S], store: &Store) -> String {
    arguments.iter()
             .map(|argument| resolve(argument.as_ref(), store).to_string())
             .collect()
}

/// Resolves a grouped right-hand side to one value.
///
/// A single argument keeps its inferred type. Several arguments become the
/// string [`concatenate`] produces for them.
///
/// # Example
/// ```
/// use macaque::interpreter::{coercion::resolve_all, store::Store, value::Value};
///
/// let store = Store::new();
///
/// assert_eq!(resolve_all(&["42"], &store), Value::Integer(42));
/// assert_eq!(resolve_all(&["'a'", "'b'"], &store), Value::from("ab"));
/// ```
#[must_use]
pub fn resolve_all<S: AsRef<str>>(arguments: &[S], store: &Store) -> Value {
    match arguments {
        [single] => resolve(single.as_ref(), store),
        _ => Value::Str(concatenate(arguments, store)),
    }
}

/// Groups the words of a statement into arguments.
///
/// Every word is its own argument, except that a word opening a quote it does
/// not close starts a quoted literal that runs up to the next word ending with
/// the same quote character. The words of such a literal are rejoined with
/// single spaces.
///
/// # Parameters
/// - `words`: The statement's words after the keyword.
/// - `line`: Line number for error reporting.
///
/// # Errors
/// `MalformedStatement` if a quoted literal is never closed.
///
/// # Example
/// ```
/// use macaque::interpreter::coercion::group_arguments;
///
/// let args = group_arguments(&["'a", "b", "c'", "x"], 1).unwrap();
///
/// assert_eq!(args, ["'a b c'", "x"]);
/// assert!(group_arguments(&["'never", "closed"], 1).is_err());
/// ```
pub fn group_arguments<'s>(words: &[&'s str], line: usize) -> ScriptResult<Vec<Cow<'s, str>>> {
    let mut arguments = Vec::with_capacity(words.len());
    let mut iter = words.iter();

    while let Some(&word) = iter.next() {
        let Some(quote) = opening_quote(word) else {
            arguments.push(Cow::Borrowed(word));
            continue;
        };

        let mut literal = word.to_string();
        let mut closed = false;

        for &next in iter.by_ref() {
            literal.push(' ');
            literal.push_str(next);
            if next.ends_with(quote) {
                closed = true;
                break;
            }
        }

        if !closed {
            return Err(ScriptError::malformed(format!("unterminated string literal {literal}"),
                                              line));
        }

        arguments.push(Cow::Owned(literal));
    }

    Ok(arguments)
}

/// The quote a word opens without closing, if any.
fn opening_quote(word: &str) -> Option<char> {
    let first = word.chars().next()?;

    if QUOTES.contains(&first) && strip_quotes(word).is_none() {
        Some(first)
    } else {
        None
    }
}
