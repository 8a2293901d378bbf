use std::collections::HashMap;

use crate::interpreter::value::Value;

/// The variable store of one interpreter session.
///
/// Maps variable names to their current [`Value`]. Bindings are created or
/// overwritten by `var` statements and are never removed. A fresh store is
/// empty; each [`Interpreter`](crate::interpreter::executor::Interpreter) owns
/// its own, so independent runs never see each other's variables.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Store {
    variables: HashMap<String, Value>,
}

impl Store {
    /// Creates an empty store.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Looks up a variable by name.
    #[must_use]
    pub fn get(&self, name: &str) -> Option<&Value> {
        self.variables.get(name)
    }

    /// Binds `name` to `value`, replacing any previous binding regardless of
    /// its type.
    ///
    /// # Returns
    /// The value previously bound to `name`, if any.
    ///
    /// # Example
    /// ```
    /// use macaque::interpreter::{store::Store, value::Value};
    ///
    /// let mut store = Store::new();
    ///
    /// assert_eq!(store.set("x", Value::Integer(1)), None);
    /// assert_eq!(store.set("x", Value::from("one")), Some(Value::Integer(1)));
    /// assert_eq!(store.get("x"), Some(&Value::from("one")));
    /// ```
    pub fn set(&mut self, name: impl Into<String>, value: Value) -> Option<Value> {
        self.variables.insert(name.into(), value)
    }

    /// Number of bound variables.
    #[must_use]
    pub fn len(&self) -> usize {
        self.variables.len()
    }

    /// Whether no variable has been bound yet.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.variables.is_empty()
    }

    /// Names of all bound variables, sorted.
    #[must_use]
    pub fn names(&self) -> Vec<&str> {
        let mut names: Vec<&str> = self.variables.keys().map(String::as_str).collect();
        names.sort_unstable();
        names
    }
}
