//! Methods: functions defined inside a class.

use jenna_codegen::Block;
use jenna_core::Result;

use crate::Function;

/// Implicit first parameter of instance methods.
pub const IMPLICIT_RECEIVER: &str = "self";

/// A function that lives in a class body.
///
/// Instance methods get [`IMPLICIT_RECEIVER`] prepended to their parameters
/// at construction; static methods keep the supplied list exactly. Methods
/// start one level deeper than functions, matching their usual place inside
/// a class.
#[derive(Debug)]
pub struct Method {
    function: Function,
    is_static: bool,
}

impl Method {
    /// Create an instance method taking `self` followed by `params`.
    pub fn new(name: impl Into<String>, params: impl IntoIterator<Item = impl Into<String>>) -> Self {
        let params = std::iter::once(IMPLICIT_RECEIVER.to_string())
            .chain(params.into_iter().map(Into::into))
            .collect::<Vec<String>>();
        Self::from_parts(name, params, false)
    }

    /// Create a static method taking exactly `params`.
    pub fn new_static(
        name: impl Into<String>,
        params: impl IntoIterator<Item = impl Into<String>>,
    ) -> Self {
        Self::from_parts(name, params, true)
    }

    fn from_parts(
        name: impl Into<String>,
        params: impl IntoIterator<Item = impl Into<String>>,
        is_static: bool,
    ) -> Self {
        Self {
            function: Function::new(name, params).with_indent_level(1),
            is_static,
        }
    }

    pub fn with_indent_level(mut self, level: usize) -> Self {
        self.function.set_indent_level(level);
        self
    }

    pub fn with_body(mut self, body: Vec<Box<dyn Block>>) -> Self {
        self.function.set_body(body);
        self
    }

    pub fn with_decorator(mut self, decorator: impl Into<String>) -> Result<Self> {
        self.function.add_decorator(decorator)?;
        Ok(self)
    }

    pub fn is_static(&self) -> bool {
        self.is_static
    }

    pub fn name(&self) -> &str {
        self.function.name()
    }

    pub fn params(&self) -> &[String] {
        self.function.params()
    }

    pub fn function(&self) -> &Function {
        &self.function
    }

    pub fn function_mut(&mut self) -> &mut Function {
        &mut self.function
    }

    pub fn add_decorator(&mut self, decorator: impl Into<String>) -> Result<()> {
        self.function.add_decorator(decorator)
    }

    pub fn set_body(&mut self, body: Vec<Box<dyn Block>>) {
        self.function.set_body(body);
    }

    pub fn push(&mut self, block: impl Block + 'static) {
        self.function.push(block);
    }
}

impl Block for Method {
    fn indent_level(&self) -> usize {
        self.function.indent_level()
    }

    fn set_indent_level(&mut self, level: usize) {
        self.function.set_indent_level(level);
    }

    fn assign_indents(&mut self) {
        self.function.assign_indents();
    }

    fn render(&self) -> Result<String> {
        self.function.render()
    }
}
