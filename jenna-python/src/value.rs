//! Values that are either string literals or raw code.

use std::fmt;

use jenna_core::stringify;

use crate::ClassInstance;

/// A string literal, rendered in single quotes.
///
/// Distinguishes `'human'` (a literal) from `human` (a name) wherever a
/// value could be either.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StringLiteral(String);

impl StringLiteral {
    pub fn new(value: impl Into<String>) -> Self {
        Self(value.into())
    }

    /// The unquoted value.
    pub fn value(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for StringLiteral {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&stringify(&self.0))
    }
}

/// A value assigned to a variable or passed as a keyword argument.
#[derive(Debug, Clone, PartialEq)]
pub enum Value {
    /// Quoted string literal.
    Literal(StringLiteral),
    /// Code passed through verbatim (numbers, booleans, names, expressions).
    Raw(String),
    /// Object instantiation expression.
    Instance(ClassInstance),
}

impl Value {
    pub fn literal(value: impl Into<String>) -> Self {
        Self::Literal(StringLiteral::new(value))
    }

    pub fn raw(code: impl Into<String>) -> Self {
        Self::Raw(code.into())
    }
}

impl fmt::Display for Value {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Literal(literal) => fmt::Display::fmt(literal, f),
            Self::Raw(code) => f.write_str(code),
            Self::Instance(instance) => fmt::Display::fmt(instance, f),
        }
    }
}

impl From<StringLiteral> for Value {
    fn from(literal: StringLiteral) -> Self {
        Self::Literal(literal)
    }
}

impl From<ClassInstance> for Value {
    fn from(instance: ClassInstance) -> Self {
        Self::Instance(instance)
    }
}

impl From<&str> for Value {
    fn from(code: &str) -> Self {
        Self::Raw(code.to_string())
    }
}

impl From<String> for Value {
    fn from(code: String) -> Self {
        Self::Raw(code)
    }
}
