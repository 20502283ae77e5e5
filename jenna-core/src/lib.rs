//! Core utilities and types for the Jenna Python source generator.
//!
//! This crate provides the construct error type and the string helpers
//! shared by the rest of the Jenna workspace.

mod error;
mod utils;
mod validate;

// Errors
pub use error::{CodegenError, Result};
// String utilities
pub use utils::{
    capitalize_first, strip_string_quotes, stringify, to_camel_case, to_pascal_case,
    to_snake_case, triple_stringify,
};
// Python identifier rules
pub use validate::{is_python_builtin, is_python_keyword, validate_identifier};
