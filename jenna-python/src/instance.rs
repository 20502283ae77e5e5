//! Object instantiation expressions.

use std::fmt;

use crate::{Expr, Value};

/// An object instantiation such as `Point(1, 2, label='origin')`.
///
/// Keyword arguments render after positional ones and keep the position of
/// their first insertion; adding an existing keyword replaces its value.
#[derive(Debug, Clone, PartialEq)]
pub struct ClassInstance {
    class_name: String,
    args: Vec<String>,
    kwargs: Vec<(String, Value)>,
}

impl ClassInstance {
    pub fn new(class_name: impl Into<String>) -> Self {
        Self {
            class_name: class_name.into(),
            args: Vec::new(),
            kwargs: Vec::new(),
        }
    }

    /// Add a positional argument, rendered verbatim.
    pub fn arg(mut self, arg: impl Into<String>) -> Self {
        self.add_arg(arg);
        self
    }

    /// Add a keyword argument.
    pub fn kwarg(mut self, key: impl Into<String>, value: impl Into<Value>) -> Self {
        self.add_kwarg(key, value);
        self
    }

    pub fn add_arg(&mut self, arg: impl Into<String>) {
        self.args.push(arg.into());
    }

    pub fn add_kwarg(&mut self, key: impl Into<String>, value: impl Into<Value>) {
        let key = key.into();
        let value = value.into();
        match self.kwargs.iter_mut().find(|(existing, _)| *existing == key) {
            Some((_, slot)) => *slot = value,
            None => self.kwargs.push((key, value)),
        }
    }

    pub fn class_name(&self) -> &str {
        &self.class_name
    }

    pub fn args(&self) -> &[String] {
        &self.args
    }

    pub fn kwargs(&self) -> &[(String, Value)] {
        &self.kwargs
    }
}

impl fmt::Display for ClassInstance {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let args = self.args.join(", ");
        let kwargs = self
            .kwargs
            .iter()
            .map(|(key, value)| format!("{}={}", key, value))
            .collect::<Vec<_>>()
            .join(", ");
        let separator = if !args.is_empty() && !kwargs.is_empty() {
            ", "
        } else {
            ""
        };
        write!(f, "{}({}{}{})", self.class_name, args, separator, kwargs)
    }
}

impl From<ClassInstance> for Expr {
    fn from(instance: ClassInstance) -> Self {
        Expr::new(instance.to_string())
    }
}
