//! Conversion implementations for error types

use super::types::Error;

impl From<tokio::task::JoinError> for Error {
    fn from(error: tokio::task::JoinError) -> Self {
        if error.is_cancelled() {
            Error::Cancelled {
                operation: "join task".to_string(),
            }
        } else {
            Error::Operation {
                operation: "join task".to_string(),
                message: error.to_string(),
                source: Some(Box::new(error)),
            }
        }
    }
}

impl From<anyhow::Error> for Error {
    fn from(error: anyhow::Error) -> Self {
        Error::Operation {
            operation: "unknown".to_string(),
            message: format!("{error:#}"),
            source: Some(error.into()),
        }
    }
}
