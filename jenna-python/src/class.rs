//! Python class definitions.

use indexmap::IndexMap;
use jenna_codegen::{Block, tabs};
use jenna_core::{CodegenError, Result, capitalize_first, triple_stringify, validate_identifier};

use crate::Method;

/// Builder for Python classes.
///
/// The body is emitted in a fixed order: docstring, `__init__` stub,
/// methods, class variables, nested classes. A class with none of the last
/// four renders a single `pass`.
#[derive(Debug)]
pub struct Class {
    name: String,
    base_class: Option<String>,
    init_method: bool,
    methods: Vec<Method>,
    class_variables: IndexMap<String, String>,
    subclasses: Vec<Class>,
    description: String,
    indent_level: usize,
}

impl Class {
    /// Create a class. The first character of `name` is upper-cased.
    pub fn new(name: &str) -> Self {
        Self {
            name: capitalize_first(name),
            base_class: None,
            init_method: false,
            methods: Vec::new(),
            class_variables: IndexMap::new(),
            subclasses: Vec::new(),
            description: String::new(),
            indent_level: 0,
        }
    }

    pub fn with_base_class(mut self, base_class: impl Into<String>) -> Self {
        self.base_class = Some(base_class.into());
        self
    }

    /// Emit a placeholder `__init__` method.
    pub fn with_init_method(mut self) -> Self {
        self.init_method = true;
        self
    }

    /// Set the docstring rendered under the class header.
    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = triple_stringify(description.into());
        self
    }

    pub fn with_indent_level(mut self, level: usize) -> Self {
        self.set_indent_level(level);
        self
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn base_class(&self) -> Option<&str> {
        self.base_class.as_deref()
    }

    pub fn has_init_method(&self) -> bool {
        self.init_method
    }

    /// The docstring in its triple-quoted form, empty when unset.
    pub fn description(&self) -> &str {
        &self.description
    }

    pub fn methods(&self) -> &[Method] {
        &self.methods
    }

    pub fn class_variables(&self) -> &IndexMap<String, String> {
        &self.class_variables
    }

    pub fn subclasses(&self) -> &[Class] {
        &self.subclasses
    }

    /// Add a method, moving it to `indent_level + 1`.
    pub fn add_method(&mut self, mut method: Method) -> &mut Method {
        method.set_indent_level(self.indent_level + 1);
        let index = self.methods.len();
        self.methods.push(method);
        &mut self.methods[index]
    }

    /// Synthesize an instance method with a placeholder body.
    ///
    /// Fails when the name is not a usable identifier, a parameter is blank
    /// or a decorator does not start with `@`. Nothing is added on failure.
    pub fn add_method_named(
        &mut self,
        name: &str,
        params: impl IntoIterator<Item = impl Into<String>>,
        decorators: impl IntoIterator<Item = impl Into<String>>,
    ) -> Result<&mut Method> {
        let params = params.into_iter().map(Into::into).collect::<Vec<String>>();
        if validate_identifier(name).is_some() || params.iter().any(|p| p.trim().is_empty()) {
            return Err(CodegenError::InvalidMethod);
        }

        let mut method = Method::new(name, params);
        for decorator in decorators {
            method.add_decorator(decorator)?;
        }
        Ok(self.add_method(method))
    }

    /// Set a class-level variable. The value is emitted verbatim.
    ///
    /// Re-adding a name replaces its value but keeps its original position.
    pub fn add_class_variable(&mut self, name: impl Into<String>, value: impl ToString) {
        self.class_variables.insert(name.into(), value.to_string());
    }

    /// Nest a class, moving it to `indent_level + 1`.
    pub fn add_subclass(&mut self, mut class: Class) -> &mut Class {
        class.set_indent_level(self.indent_level + 1);
        let index = self.subclasses.len();
        self.subclasses.push(class);
        &mut self.subclasses[index]
    }

    fn has_body(&self) -> bool {
        self.init_method
            || !self.methods.is_empty()
            || !self.class_variables.is_empty()
            || !self.subclasses.is_empty()
    }

    fn header(&self) -> String {
        match &self.base_class {
            Some(base) => format!("class {}({}):", self.name, base),
            None => format!("class {}:", self.name),
        }
    }
}

impl Block for Class {
    fn indent_level(&self) -> usize {
        self.indent_level
    }

    fn set_indent_level(&mut self, level: usize) {
        self.indent_level = level;
        self.assign_indents();
    }

    fn assign_indents(&mut self) {
        let level = self.indent_level + 1;
        for method in &mut self.methods {
            method.set_indent_level(level);
            method.assign_indents();
        }
        for class in &mut self.subclasses {
            class.set_indent_level(level);
            class.assign_indents();
        }
    }

    fn render(&self) -> Result<String> {
        let tabs = tabs(self.indent_level);
        let mut out = format!("\n\n{}{}", tabs, self.header());

        if !self.description.is_empty() {
            out.push_str(&format!("\n{}\t{}", tabs, self.description));
        }

        if !self.has_body() {
            out.push_str(&format!("\n{}\tpass\n", tabs));
            return Ok(out);
        }

        if self.init_method {
            out.push_str(&format!("\n{0}\tdef __init__(self):\n{0}\t\tpass", tabs));
        }

        for method in &self.methods {
            out.push('\n');
            out.push_str(&method.render()?);
        }

        for (name, value) in &self.class_variables {
            out.push_str(&format!("\n{}\t{} = {}", tabs, name, value));
        }

        for class in &self.subclasses {
            out.push_str(&class.render()?);
        }

        out.push('\n');
        Ok(out)
    }
}
