//! Python function definitions.

use jenna_codegen::{Block, tabs};
use jenna_core::{CodegenError, Result};

/// Builder for Python functions.
///
/// A function without a body renders a `pass` placeholder. Body items are
/// stamped with `indent_level + 1` by the assign pass; bare lines
/// ([`Block::is_line`]) get a leading newline, composite items bring their
/// own separation.
#[derive(Debug)]
pub struct Function {
    name: String,
    params: Vec<String>,
    body: Option<Vec<Box<dyn Block>>>,
    indent_level: usize,
    decorators: Vec<String>,
}

impl Function {
    pub fn new(name: impl Into<String>, params: impl IntoIterator<Item = impl Into<String>>) -> Self {
        Self {
            name: name.into(),
            params: params.into_iter().map(Into::into).collect(),
            body: None,
            indent_level: 0,
            decorators: Vec::new(),
        }
    }

    pub fn with_indent_level(mut self, level: usize) -> Self {
        self.set_indent_level(level);
        self
    }

    pub fn with_body(mut self, body: Vec<Box<dyn Block>>) -> Self {
        self.set_body(body);
        self
    }

    pub fn with_decorator(mut self, decorator: impl Into<String>) -> Result<Self> {
        self.add_decorator(decorator)?;
        Ok(self)
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn params(&self) -> &[String] {
        &self.params
    }

    pub fn decorators(&self) -> &[String] {
        &self.decorators
    }

    pub fn body(&self) -> Option<&[Box<dyn Block>]> {
        self.body.as_deref()
    }

    /// Add a decorator rendered above the signature, e.g. `@property`.
    pub fn add_decorator(&mut self, decorator: impl Into<String>) -> Result<()> {
        let decorator = decorator.into();
        if !decorator.starts_with('@') {
            return Err(CodegenError::InvalidDecorator { decorator });
        }
        self.decorators.push(decorator);
        Ok(())
    }

    /// Replace the body. An empty body renders the placeholder.
    pub fn set_body(&mut self, body: Vec<Box<dyn Block>>) {
        self.body = if body.is_empty() { None } else { Some(body) };
        self.assign_indents();
    }

    /// Append one construct to the body.
    pub fn push(&mut self, mut block: impl Block + 'static) {
        block.set_indent_level(self.indent_level + 1);
        block.assign_indents();
        self.body.get_or_insert_with(Vec::new).push(Box::new(block));
    }

    fn signature(&self) -> String {
        format!(
            "{}def {}({}):",
            tabs(self.indent_level),
            self.name,
            self.params.join(", ")
        )
    }
}

impl Block for Function {
    fn indent_level(&self) -> usize {
        self.indent_level
    }

    fn set_indent_level(&mut self, level: usize) {
        self.indent_level = level;
        self.assign_indents();
    }

    fn assign_indents(&mut self) {
        let level = self.indent_level + 1;
        for block in self.body.iter_mut().flatten() {
            block.set_indent_level(level);
            block.assign_indents();
        }
    }

    fn render(&self) -> Result<String> {
        let tabs = tabs(self.indent_level);
        let mut out = String::new();

        for decorator in &self.decorators {
            out.push('\n');
            out.push_str(&tabs);
            out.push_str(decorator);
        }

        out.push('\n');
        out.push_str(&self.signature());

        match &self.body {
            None => {
                out.push('\n');
                out.push_str(&tabs);
                out.push_str("\tpass");
            }
            Some(body) => {
                for block in body {
                    let rendered = block.render()?;
                    if block.is_line() {
                        out.push('\n');
                    }
                    out.push_str(&rendered);
                }
            }
        }

        Ok(out)
    }
}
