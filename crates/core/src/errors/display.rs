//! Display implementations for error types

use super::types::Error;
use std::fmt;

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Error::Operation {
                operation, message, ..
            } => {
                write!(f, "operation '{operation}' failed: {message}")
            }
            Error::Configuration { message } => {
                write!(f, "configuration error: {message}")
            }
            Error::Cancelled { operation } => {
                write!(f, "operation '{operation}' was cancelled")
            }
        }
    }
}
