//! Extension traits for error handling

use super::types::{Error, Result};

/// Extension trait for adding context to Results
pub trait ResultExt<T> {
    /// Add context to a Result
    fn context(self, message: impl Into<String>) -> Result<T>;

    /// Add context with a lazy message
    fn with_context<F>(self, f: F) -> Result<T>
    where
        F: FnOnce() -> String;
}

impl<T, E> ResultExt<T> for std::result::Result<T, E>
where
    E: Into<Error>,
{
    fn context(self, message: impl Into<String>) -> Result<T> {
        self.map_err(|e| {
            let base_error = e.into();
            Error::Operation {
                operation: message.into(),
                message: base_error.to_string(),
                source: Some(Box::new(base_error)),
            }
        })
    }

    fn with_context<F>(self, f: F) -> Result<T>
    where
        F: FnOnce() -> String,
    {
        self.map_err(|e| {
            let base_error = e.into();
            Error::Operation {
                operation: f(),
                message: base_error.to_string(),
                source: Some(Box::new(base_error)),
            }
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_context_wraps_error() {
        let result: std::result::Result<(), Error> = Err(Error::configuration("no runtime"));
        let error = result.context("waiting on handle").unwrap_err();

        assert_eq!(
            error.to_string(),
            "operation 'waiting on handle' failed: configuration error: no runtime"
        );
        assert!(std::error::Error::source(&error).is_some());
    }

    #[test]
    fn test_with_context_is_lazy() {
        let result: std::result::Result<u8, Error> = Ok(7);
        let value = result
            .with_context(|| panic!("context must not be built on success"))
            .unwrap();
        assert_eq!(value, 7);
    }
}
