//! Python construct tree for the Jenna source generator.
//!
//! Callers build a tree of constructs, attach children through explicit
//! `add_*`/`set_*` operations and render the root. Indent levels are stamped
//! onto children top-down by [`render`] right before text is produced, so a
//! subtree can be re-parented freely until it is rendered.
//!
//! # Example
//!
//! ```
//! use jenna_python::{Class, Method, render};
//!
//! let mut class = Class::new("person").with_init_method();
//! class.add_method(Method::new("greet", ["name"]));
//! class.add_class_variable("species", "'human'");
//!
//! let text = render(&mut class).unwrap();
//! assert!(text.starts_with("\n\nclass Person:"));
//! assert!(text.contains("\tdef greet(self, name):"));
//! ```
//!
//! Rendered text uses one tab per level; [`jenna_codegen::Document`]
//! collects it and normalizes indentation when finalized.

mod class;
mod comment;
mod conditional;
mod expr;
mod function;
mod instance;
mod method;
mod value;
mod variable;

pub use class::Class;
pub use comment::{MultilineComment, SingleLineComment};
pub use conditional::{ConditionalKind, If, IfElse};
pub use expr::Expr;
pub use function::Function;
pub use instance::ClassInstance;
pub use jenna_codegen::{Block, render};
pub use jenna_core::{CodegenError, Result};
pub use method::{IMPLICIT_RECEIVER, Method};
pub use value::{StringLiteral, Value};
pub use variable::Variable;
