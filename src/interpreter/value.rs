/// Represents a runtime value in the interpreter.
///
/// Every binding in the store and every resolved statement argument is one of
/// these three variants. There is no numeric widening: an integer stays an
/// integer until it is overwritten.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Value {
    /// A 64-bit signed integer, written as decimal digits such as `42` or `-7`.
    Integer(i64),
    /// A boolean, written as `true` or `false`.
    Bool(bool),
    /// A string. Produced by quoted literals and by any word that is neither a
    /// variable, an integer nor a boolean.
    Str(String),
}

impl From<i64> for Value {
    fn from(v: i64) -> Self {
        Self::Integer(v)
    }
}

impl From<bool> for Value {
    fn from(v: bool) -> Self {
        Self::Bool(v)
    }
}

impl From<String> for Value {
    fn from(v: String) -> Self {
        Self::Str(v)
    }
}

impl From<&str> for Value {
    fn from(v: &str) -> Self {
        Self::Str(v.to_string())
    }
}

impl Value {
    /// Converts the value to the boolean an `if` test reports.
    ///
    /// - `Integer`: true if the value is at least 1. Zero and negatives are
    ///   false.
    /// - `Bool`: the value itself.
    /// - `Str`: true unless the string is exactly two characters long. This is
    ///   a long-standing quirk of the language and is kept as is; the empty
    ///   string and one-character strings are true.
    ///
    /// # Example
    /// ```
    /// use macaque::interpreter::value::Value;
    ///
    /// assert!(Value::Integer(1).is_truthy());
    /// assert!(!Value::Integer(0).is_truthy());
    /// assert!(!Value::from("ab").is_truthy());
    /// assert!(Value::from("").is_truthy());
    /// ```
    #[must_use]
    pub fn is_truthy(&self) -> bool {
        match self {
            Self::Integer(n) => *n >= 1,
            Self::Bool(b) => *b,
            Self::Str(s) => s.chars().count() != 2,
        }
    }

    /// Name of the variant, for log messages.
    #[must_use]
    pub const fn type_name(&self) -> &'static str {
        match self {
            Self::Integer(_) => "integer",
            Self::Bool(_) => "boolean",
            Self::Str(_) => "string",
        }
    }
}

impl std::fmt::Display for Value {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Integer(n) => write!(f, "{n}"),
            Self::Bool(b) => write!(f, "{b}"),
            Self::Str(s) => write!(f, "{s}"),
        }
    }
}
