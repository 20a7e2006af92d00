//! Core error type definitions

/// Result type alias for tapline operations
pub type Result<T> = std::result::Result<T, Error>;

/// Errors raised by the library itself.
///
/// Failures returned by caller-supplied functions are never wrapped in this
/// type by the combinators; they travel back to the caller unchanged. This
/// enum only covers what the async helpers and the host integration can
/// produce on their own.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// A wrapped operation failed
    Operation {
        operation: String,
        message: String,
        #[source]
        source: Option<Box<dyn std::error::Error + Send + Sync>>,
    },

    /// Runtime or host configuration errors
    Configuration { message: String },

    /// The awaited operation was cancelled before producing a value
    Cancelled { operation: String },
}
