//! Variable assignments.

use jenna_codegen::{Block, tabs};
use jenna_core::Result;

use crate::Value;

/// An assignment `name = value`, rendered on its own line.
///
/// String literals and instances render through their [`Value`] form; raw
/// values pass through unquoted.
#[derive(Debug, Clone, PartialEq)]
pub struct Variable {
    name: String,
    value: Value,
    indent_level: usize,
}

impl Variable {
    pub fn new(name: impl Into<String>, value: impl Into<Value>) -> Self {
        Self {
            name: name.into(),
            value: value.into(),
            indent_level: 0,
        }
    }

    pub fn with_indent_level(mut self, level: usize) -> Self {
        self.indent_level = level;
        self
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn value(&self) -> &Value {
        &self.value
    }

    pub fn set_value(&mut self, value: impl Into<Value>) {
        self.value = value.into();
    }
}

impl Block for Variable {
    fn indent_level(&self) -> usize {
        self.indent_level
    }

    fn set_indent_level(&mut self, level: usize) {
        self.indent_level = level;
    }

    fn render(&self) -> Result<String> {
        Ok(format!(
            "\n{}{} = {}",
            tabs(self.indent_level),
            self.name,
            self.value
        ))
    }
}
