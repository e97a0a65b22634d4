use thiserror::Error;

/// Unified error type for environment resolution
#[derive(Error, Debug)]
pub enum EnvError {
    #[error("Git operation failed: {0}")]
    Git(#[from] git2::Error),

    #[error("Version parsing error: {0}")]
    Version(String),

    #[error("Unrecognized mode: '{0}'")]
    Mode(String),

    #[error("Package metadata error: {0}")]
    Metadata(String),

    #[error("Revision query failed: {0}")]
    Revision(String),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

/// Convenience type alias for Results in buildenv
pub type Result<T> = std::result::Result<T, EnvError>;

impl EnvError {
    /// Create a version error with context
    pub fn version(msg: impl Into<String>) -> Self {
        EnvError::Version(msg.into())
    }

    /// Create a metadata error with context
    pub fn metadata(msg: impl Into<String>) -> Self {
        EnvError::Metadata(msg.into())
    }

    /// Create a revision-query error with context
    pub fn revision(msg: impl Into<String>) -> Self {
        EnvError::Revision(msg.into())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = EnvError::version("not a semver");
        assert_eq!(err.to_string(), "Version parsing error: not a semver");
    }

    #[test]
    fn test_error_from_io() {
        let io_err = std::io::Error::new(std::io::ErrorKind::NotFound, "file not found");
        let err: EnvError = io_err.into();
        assert!(err.to_string().contains("I/O error"));
    }

    #[test]
    fn test_error_constructors() {
        assert!(EnvError::metadata("test").to_string().contains("metadata"));
        assert!(EnvError::revision("test").to_string().contains("Revision"));
    }

    #[test]
    fn test_error_messages_are_descriptive() {
        let error_pairs = vec![
            (EnvError::version("x"), "Version parsing error"),
            (EnvError::metadata("x"), "Package metadata error"),
            (EnvError::revision("x"), "Revision query failed"),
        ];

        for (err, expected_prefix) in error_pairs {
            let msg = err.to_string();
            assert!(
                msg.starts_with(expected_prefix),
                "Error message should start with '{}', but got '{}'",
                expected_prefix,
                msg
            );
        }
    }
}
