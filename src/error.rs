//! Error handling for the ticket intake application
//!
//! This module defines custom error types and a Result alias for use
//! throughout the application. Field validation problems are not errors in
//! this sense; see [`crate::ticket::ValidationErrors`].

use thiserror::Error;

/// Main error type for ticket intake operations
#[derive(Error, Debug)]
pub enum IntakeError {
    /// Errors related to configuration or app state loading/saving
    #[error("Configuration error: {0}")]
    Config(String),

    /// A translation catalog could not be loaded or parsed
    #[error("Translation error ({language}): {message}")]
    Translation { language: String, message: String },

    /// The submission boundary rejected or failed to deliver a ticket
    #[error("Submission error: {0}")]
    Submission(String),

    /// Errors related to channel communication
    #[error("Channel error: {0}")]
    Channel(String),

    /// IO errors
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Serialization errors
    #[error("Serialization error: {0}")]
    Serialization(String),

    /// Generic errors with context
    #[error("{context}: {source}")]
    WithContext {
        context: String,
        #[source]
        source: Box<IntakeError>,
    },
}

impl IntakeError {
    /// Add context to an error
    pub fn with_context(self, context: impl Into<String>) -> Self {
        IntakeError::WithContext {
            context: context.into(),
            source: Box::new(self),
        }
    }

    /// Create a translation error for the given language code
    pub fn translation(language: impl Into<String>, message: impl Into<String>) -> Self {
        IntakeError::Translation {
            language: language.into(),
            message: message.into(),
        }
    }
}

impl From<serde_json::Error> for IntakeError {
    fn from(err: serde_json::Error) -> Self {
        IntakeError::Serialization(err.to_string())
    }
}

/// Result type alias for ticket intake operations
pub type Result<T> = std::result::Result<T, IntakeError>;

/// Extension trait for adding context to Results
pub trait ResultExt<T> {
    /// Add context to an error result
    fn context(self, context: impl Into<String>) -> Result<T>;

    /// Add context lazily to an error result
    fn with_context<F>(self, f: F) -> Result<T>
    where
        F: FnOnce() -> String;
}

impl<T> ResultExt<T> for Result<T> {
    fn context(self, context: impl Into<String>) -> Result<T> {
        self.map_err(|e| e.with_context(context))
    }

    fn with_context<F>(self, f: F) -> Result<T>
    where
        F: FnOnce() -> String,
    {
        self.map_err(|e| e.with_context(f()))
    }
}

impl<T> ResultExt<T> for std::result::Result<T, std::io::Error> {
    fn context(self, context: impl Into<String>) -> Result<T> {
        self.map_err(|e| IntakeError::Io(e).with_context(context))
    }

    fn with_context<F>(self, f: F) -> Result<T>
    where
        F: FnOnce() -> String,
    {
        self.map_err(|e| IntakeError::Io(e).with_context(f()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = IntakeError::Submission("backend unreachable".to_string());
        assert_eq!(err.to_string(), "Submission error: backend unreachable");
    }

    #[test]
    fn test_error_with_context() {
        let err = IntakeError::Config("bad value".to_string());
        let with_ctx = err.with_context("Failed to load config.toml");
        assert!(with_ctx.to_string().starts_with("Failed to load config.toml"));
        assert!(with_ctx.to_string().contains("bad value"));
    }

    #[test]
    fn test_translation_error() {
        let err = IntakeError::translation("ru", "missing file");
        assert_eq!(err.to_string(), "Translation error (ru): missing file");
    }

    #[test]
    fn test_io_result_context() {
        let res: std::result::Result<(), std::io::Error> = Err(std::io::Error::new(
            std::io::ErrorKind::NotFound,
            "gone",
        ));
        let err = res.context("Reading catalog").unwrap_err();
        assert!(matches!(err, IntakeError::WithContext { .. }));
        assert!(err.to_string().contains("gone"));
    }
}
