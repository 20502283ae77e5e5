//! Shared string helpers for code generation.

/// Wrap a value in single quotes (e.g., `human` -> `'human'`)
pub fn stringify(value: impl std::fmt::Display) -> String {
    format!("'{}'", value)
}

/// Wrap a value in triple double quotes, the docstring form
pub fn triple_stringify(value: impl std::fmt::Display) -> String {
    format!("\"\"\"{}\"\"\"", value)
}

/// Remove one pair of surrounding double quotes, if present
pub fn strip_string_quotes(s: &str) -> &str {
    s.strip_prefix('"')
        .and_then(|rest| rest.strip_suffix('"'))
        .unwrap_or(s)
}

/// Upper-case the first character and leave the rest untouched (e.g., "person" -> "Person")
pub fn capitalize_first(s: &str) -> String {
    let mut chars = s.chars();
    match chars.next() {
        None => String::new(),
        Some(c) => c.to_uppercase().chain(chars).collect(),
    }
}

/// Convert a string to PascalCase (e.g., "hello_world" -> "HelloWorld")
pub fn to_pascal_case(s: &str) -> String {
    s.split('_').map(capitalize_first).collect()
}

/// Convert snake_case to camelCase (e.g., "hello_big_world" -> "helloBigWorld")
///
/// Every segment after the first is capitalized with the remainder lower-cased.
pub fn to_camel_case(s: &str) -> String {
    s.split('_')
        .enumerate()
        .map(|(i, part)| {
            if i == 0 {
                return part.to_string();
            }
            let mut chars = part.chars();
            match chars.next() {
                None => String::new(),
                Some(c) => c.to_uppercase().chain(chars.flat_map(char::to_lowercase)).collect(),
            }
        })
        .collect()
}

/// Convert a string to snake_case (e.g., "HelloWorld" -> "hello_world")
pub fn to_snake_case(s: &str) -> String {
    let mut result = String::new();
    for (i, c) in s.chars().enumerate() {
        if c.is_uppercase() && i > 0 {
            result.push('_');
        }
        result.extend(c.to_lowercase());
    }
    result.replace('-', "_")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_stringify() {
        assert_eq!(stringify("human"), "'human'");
        assert_eq!(stringify(42), "'42'");
        assert_eq!(triple_stringify("A person"), "\"\"\"A person\"\"\"");
    }

    #[test]
    fn test_strip_string_quotes() {
        assert_eq!(strip_string_quotes("\"hello\""), "hello");
        assert_eq!(strip_string_quotes("hello"), "hello");
        assert_eq!(strip_string_quotes("\"hello"), "\"hello");
        assert_eq!(strip_string_quotes("\"\""), "");
    }

    #[test]
    fn test_capitalize_first() {
        assert_eq!(capitalize_first("person"), "Person");
        assert_eq!(capitalize_first("bankAccount"), "BankAccount");
        assert_eq!(capitalize_first("Already"), "Already");
        assert_eq!(capitalize_first(""), "");
    }

    #[test]
    fn test_to_pascal_case() {
        assert_eq!(to_pascal_case("hello"), "Hello");
        assert_eq!(to_pascal_case("hello_world"), "HelloWorld");
        assert_eq!(to_pascal_case("foo_bar_baz"), "FooBarBaz");
        assert_eq!(to_pascal_case(""), "");
    }

    #[test]
    fn test_to_camel_case() {
        assert_eq!(to_camel_case("hello"), "hello");
        assert_eq!(to_camel_case("hello_big_world"), "helloBigWorld");
        assert_eq!(to_camel_case("user_ID"), "userId");
        assert_eq!(to_camel_case(""), "");
    }

    #[test]
    fn test_to_snake_case() {
        assert_eq!(to_snake_case("Hello"), "hello");
        assert_eq!(to_snake_case("HelloWorld"), "hello_world");
        assert_eq!(to_snake_case("camelCaseName"), "camel_case_name");
        assert_eq!(to_snake_case("hello-world"), "hello_world");
        assert_eq!(to_snake_case(""), "");
    }
}
