//! Core combinators and errors for `tapline`.
//!
//! ## Key Components
//!
//! - **`functional`**: the fluent combinators. [`SequenceExt`] adapts
//!   iterators element by element, [`PipelineExt`] folds a sequence through
//!   a stage function into a single value, and [`ValueExt`] transforms, taps
//!   and mutates single values.
//! - **`errors`**: the library's own `Error` enum and `Result` alias. Caller
//!   failures never pass through it; combinators hand them back unchanged.
//!
//! ```
//! use tapline_core::prelude::*;
//!
//! let last_len = ["a", "bbb", "cc"]
//!     .into_iter()
//!     .tap_each(|s| if s.is_empty() { Err("empty") } else { Ok(()) }, FailurePolicy::Propagate)
//!     .collect::<Result<Vec<_>, _>>()
//!     .and_then(|items| items.into_iter().fold_stage(|s| Ok(s.len())));
//!
//! assert_eq!(last_len, Ok(2));
//! ```

pub mod errors;
pub mod functional;

#[cfg(any(test, feature = "test-utils"))]
pub mod testing;

pub use self::{
    errors::{Error, Result, ResultExt},
    functional::{FailurePolicy, PipelineExt, SequenceExt, ValueExt},
};

/// Everything needed to chain combinators fluently
pub mod prelude {
    pub use crate::functional::prelude::*;
}
