//! Functional combinators for the tapline project
//!
//! This module provides fluent combinators over sequences, single values and
//! pipelines of stage functions, with a shared failure policy.

pub mod pipeline;
pub mod policy;
pub mod sequence;
pub mod value;

// Re-export commonly used traits and types
pub use pipeline::{Pipeline, PipelineExt, TerminalPipeline};
pub use policy::FailurePolicy;
pub use sequence::{MutateEach, SequenceExt, TapEach};
pub use value::ValueExt;

/// Prelude module for convenient imports
pub mod prelude {
    pub use super::pipeline::{Pipeline, PipelineExt};
    pub use super::policy::FailurePolicy;
    pub use super::sequence::SequenceExt;
    pub use super::value::ValueExt;
}
