//! Destination naming rules.

use std::time::{SystemTime, UNIX_EPOCH};

use jenna_core::{CodegenError, Result};

/// Check that a name ends in a python file name made of word characters.
///
/// Directory components before the last separator are not checked.
pub fn is_valid_document_name(name: &str) -> bool {
    let file_name = name.rsplit(['/', '\\']).next().unwrap_or(name);
    match file_name.strip_suffix(".py") {
        Some(stem) => {
            !stem.is_empty() && stem.chars().all(|c| c.is_alphanumeric() || c == '_')
        }
        None => false,
    }
}

/// Validate a destination name, failing with [`CodegenError::InvalidDocumentName`].
pub fn validate_document_name(name: &str) -> Result<()> {
    if is_valid_document_name(name) {
        Ok(())
    } else {
        Err(CodegenError::InvalidDocumentName {
            name: name.to_string(),
        })
    }
}

/// Default destination name: `jenna_output_<unix seconds>.py`.
pub fn default_document_name() -> String {
    let seconds = SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|elapsed| elapsed.as_secs())
        .unwrap_or_default();
    format!("jenna_output_{}.py", seconds)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_valid_names() {
        assert!(is_valid_document_name("models.py"));
        assert!(is_valid_document_name("jenna_output_1700000000.py"));
        assert!(is_valid_document_name("out/models.py"));
        assert!(is_valid_document_name("C:\\work\\models.py"));
    }

    #[test]
    fn test_invalid_names() {
        assert!(!is_valid_document_name(""));
        assert!(!is_valid_document_name(".py"));
        assert!(!is_valid_document_name("models.txt"));
        assert!(!is_valid_document_name("my-models.py"));
        assert!(!is_valid_document_name("models.py.bak"));
        assert!(!is_valid_document_name("out/"));
    }

    #[test]
    fn test_validate_document_name_error() {
        let err = validate_document_name("notes.md").unwrap_err();
        assert_eq!(
            err,
            CodegenError::InvalidDocumentName {
                name: "notes.md".to_string()
            }
        );
    }

    #[test]
    fn test_default_name_is_valid() {
        let name = default_document_name();
        assert!(name.starts_with("jenna_output_"));
        assert!(is_valid_document_name(&name));
    }
}
