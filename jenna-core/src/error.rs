use thiserror::Error;

/// Result type for construct building and rendering.
pub type Result<T> = std::result::Result<T, CodegenError>;

/// Error raised when a construct is built or rendered with invalid input.
///
/// Every variant is raised at the call that violates the precondition; none
/// are recoverable internally.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CodegenError {
    #[error("invalid decorator '{decorator}': decorator should start with @")]
    InvalidDecorator { decorator: String },

    #[error("No If object attached to IfElse object")]
    MissingPrimaryConditional,

    #[error("method name or argument name invalid")]
    InvalidMethod,

    #[error("invalid document name '{name}': expected a python file name such as 'output.py'")]
    InvalidDocumentName { name: String },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_messages() {
        assert_eq!(
            CodegenError::MissingPrimaryConditional.to_string(),
            "No If object attached to IfElse object"
        );
        assert_eq!(
            CodegenError::InvalidMethod.to_string(),
            "method name or argument name invalid"
        );
        let err = CodegenError::InvalidDecorator {
            decorator: "property".to_string(),
        };
        assert!(err.to_string().contains("'property'"));
        assert!(err.to_string().contains("should start with @"));
    }
}
