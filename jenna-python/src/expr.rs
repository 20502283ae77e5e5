//! Raw expression lines.

use jenna_codegen::{Block, tabs};
use jenna_core::Result;

/// A single line of raw code, e.g. `a < b` or `return total`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Expr {
    expression: String,
    indent_level: usize,
}

impl Expr {
    pub fn new(expression: impl Into<String>) -> Self {
        Self {
            expression: expression.into(),
            indent_level: 0,
        }
    }

    pub fn with_indent_level(mut self, level: usize) -> Self {
        self.indent_level = level;
        self
    }

    /// The code without indentation.
    pub fn expression(&self) -> &str {
        &self.expression
    }
}

impl Block for Expr {
    fn indent_level(&self) -> usize {
        self.indent_level
    }

    fn set_indent_level(&mut self, level: usize) {
        self.indent_level = level;
    }

    fn render(&self) -> Result<String> {
        Ok(format!("{}{}", tabs(self.indent_level), self.expression))
    }

    fn is_line(&self) -> bool {
        true
    }
}

impl From<&str> for Expr {
    fn from(expression: &str) -> Self {
        Self::new(expression)
    }
}

impl From<String> for Expr {
    fn from(expression: String) -> Self {
        Self::new(expression)
    }
}
