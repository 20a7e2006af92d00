//! Builder methods for creating errors with context

use super::types::Error;

impl Error {
    /// Create an operation error
    #[must_use]
    pub fn operation(operation: impl Into<String>, message: impl Into<String>) -> Self {
        Error::Operation {
            operation: operation.into(),
            message: message.into(),
            source: None,
        }
    }

    /// Create an operation error with a source error
    #[must_use]
    pub fn operation_with_source(
        operation: impl Into<String>,
        message: impl Into<String>,
        source: impl Into<Box<dyn std::error::Error + Send + Sync>>,
    ) -> Self {
        Error::Operation {
            operation: operation.into(),
            message: message.into(),
            source: Some(source.into()),
        }
    }

    /// Create a configuration error
    #[must_use]
    pub fn configuration(message: impl Into<String>) -> Self {
        Error::Configuration {
            message: message.into(),
        }
    }

    /// Create a cancellation error
    #[must_use]
    pub fn cancelled(operation: impl Into<String>) -> Self {
        Error::Cancelled {
            operation: operation.into(),
        }
    }

    /// Whether this error reports a cancellation
    #[must_use]
    pub fn is_cancelled(&self) -> bool {
        matches!(self, Error::Cancelled { .. })
    }
}
