//! Error types for FieldLab

use thiserror::Error;

/// Main error type for FieldLab operations.
///
/// The motion engine itself never fails; these variants only surface at the
/// edges where configuration is parsed or the browser is queried.
#[derive(Error, Debug)]
pub enum FieldLabError {
    /// Site configuration could not be parsed
    #[error("Config error: {0}")]
    Config(#[from] serde_json::Error),

    /// Site configuration parsed but holds out-of-range values
    #[error("Invalid config: {0}")]
    InvalidConfig(String),

    /// A DOM element the caller expected is not mounted
    #[error("Element not found: {0}")]
    MissingElement(String),

    /// The host environment refused an operation
    #[error("Platform error: {0}")]
    Platform(String),
}

/// Result type alias using FieldLabError
pub type FieldLabResult<T> = Result<T, FieldLabError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = FieldLabError::MissingElement("next-section".to_string());
        assert_eq!(format!("{}", err), "Element not found: next-section");
    }

    #[test]
    fn test_error_from_json() {
        let json_err = serde_json::from_str::<serde_json::Value>("{").unwrap_err();
        let err: FieldLabError = json_err.into();
        assert!(matches!(err, FieldLabError::Config(_)));
    }
}
