use std::io;
use thiserror::Error;

/// Application-wide error type.
///
/// The analysis core in [`crate::studio`] is total and never produces one of
/// these; they come from configuration loading, schedule parsing and the
/// dispatcher seam.
#[derive(Debug, Error)]
pub enum AppError {
    /// Represents standard input/output errors.
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    /// Represents data validation errors (e.g., an empty post body).
    #[error("Validation error: {0}")]
    Validation(String),

    /// Represents configuration-related errors (e.g., a malformed environment variable).
    #[error("Configuration error: {0}")]
    Config(String),

    /// Represents a failure reported by a post/broadcast dispatcher.
    #[error("Dispatch error: {0}")]
    Dispatch(String),

    /// Represents unexpected internal errors that indicate a bug.
    #[error("Internal error: {0}")]
    Internal(String),
}

impl Clone for AppError {
    fn clone(&self) -> Self {
        match self {
            AppError::Io(e) => AppError::Io(io::Error::new(e.kind(), e.to_string())),
            AppError::Validation(s) => AppError::Validation(s.clone()),
            AppError::Config(s) => AppError::Config(s.clone()),
            AppError::Dispatch(s) => AppError::Dispatch(s.clone()),
            AppError::Internal(s) => AppError::Internal(s.clone()),
        }
    }
}

impl From<serde_json::Error> for AppError {
    fn from(err: serde_json::Error) -> Self {
        AppError::Validation(format!("JSON error: {}", err))
    }
}

impl From<validator::ValidationErrors> for AppError {
    fn from(err: validator::ValidationErrors) -> Self {
        AppError::Validation(format!("Validation errors: {}", err))
    }
}

impl From<chrono::ParseError> for AppError {
    fn from(err: chrono::ParseError) -> Self {
        AppError::Validation(format!("Date parse error: {}", err))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_messages() {
        let err = AppError::Config("STUDIO_SEED is not a number".to_string());
        assert_eq!(
            err.to_string(),
            "Configuration error: STUDIO_SEED is not a number"
        );

        let err = AppError::Dispatch("rejected".to_string());
        assert_eq!(err.to_string(), "Dispatch error: rejected");
    }

    #[test]
    fn test_validation_errors_map_to_validation() {
        let parse_err = chrono::DateTime::parse_from_rfc3339("soon").unwrap_err();
        let err: AppError = parse_err.into();
        assert!(matches!(err, AppError::Validation(_)));
    }

    #[test]
    fn test_clone_preserves_variant() {
        let err = AppError::Io(io::Error::new(io::ErrorKind::NotFound, "outline.md"));
        match err.clone() {
            AppError::Io(e) => assert_eq!(e.kind(), io::ErrorKind::NotFound),
            other => panic!("unexpected variant: {:?}", other),
        }
    }
}
