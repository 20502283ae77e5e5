//! Validation utilities for Python identifiers

/// Python reserved keywords that cannot be used as identifiers
/// Source: https://docs.python.org/3/reference/lexical_analysis.html#keywords
const PYTHON_KEYWORDS: &[&str] = &[
    "False", "None", "True", "and", "as", "assert", "async", "await", "break", "class",
    "continue", "def", "del", "elif", "else", "except", "finally", "for", "from", "global", "if",
    "import", "in", "is", "lambda", "nonlocal", "not", "or", "pass", "raise", "return", "try",
    "while", "with", "yield",
];

/// Names bound in Python's `builtins` module
const PYTHON_BUILTINS: &[&str] = &[
    // Functions
    "abs", "aiter", "all", "anext", "any", "ascii", "bin", "breakpoint", "callable", "chr",
    "compile", "delattr", "dir", "divmod", "eval", "exec", "format", "getattr", "globals",
    "hasattr", "hash", "help", "hex", "id", "input", "isinstance", "issubclass", "iter", "len",
    "locals", "max", "min", "next", "oct", "open", "ord", "pow", "print", "repr", "round",
    "setattr", "sorted", "sum", "vars", "__import__",
    // Types
    "bool", "bytearray", "bytes", "classmethod", "complex", "dict", "enumerate", "filter",
    "float", "frozenset", "int", "list", "map", "memoryview", "object", "property", "range",
    "reversed", "set", "slice", "staticmethod", "str", "super", "tuple", "type", "zip",
    // Constants
    "Ellipsis", "NotImplemented", "False", "None", "True",
    // Common exceptions
    "BaseException", "Exception", "ArithmeticError", "AssertionError", "AttributeError",
    "EOFError", "ImportError", "IndexError", "KeyError", "KeyboardInterrupt", "LookupError",
    "MemoryError", "NameError", "NotImplementedError", "OSError", "OverflowError",
    "RecursionError", "RuntimeError", "StopIteration", "SyntaxError", "SystemExit", "TypeError",
    "ValueError", "ZeroDivisionError",
];

/// Check if a name is a Python reserved keyword
pub fn is_python_keyword(name: &str) -> bool {
    PYTHON_KEYWORDS.contains(&name)
}

/// Check if a name is bound by Python's `builtins` module
pub fn is_python_builtin(name: &str) -> bool {
    PYTHON_BUILTINS.contains(&name)
}

/// Validate that a name is a usable Python identifier.
/// Returns None if valid, Some(reason) if invalid
pub fn validate_identifier(name: &str) -> Option<&'static str> {
    if is_python_keyword(name) {
        return Some("name is a Python reserved keyword");
    }

    let mut chars = name.chars();

    // First character must be a letter or underscore
    match chars.next() {
        Some(c) if c.is_alphabetic() || c == '_' => {}
        Some(_) => return Some("name must start with a letter or underscore"),
        None => return Some("name cannot be empty"),
    }

    if chars.any(|c| !(c.is_alphanumeric() || c == '_')) {
        return Some("name must contain only letters, numbers, and underscores");
    }

    None
}
