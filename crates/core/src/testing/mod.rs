//! Property-based testing utilities for the combinators
//!
//! The generators are public under the `test-utils` feature so downstream
//! crates can reuse them in their own property tests.

use proptest::prelude::*;

/// Property-based test generators
pub mod generators {
    use super::*;
    use proptest::collection::vec;

    /// Generate ordered sequences, including the empty one
    pub fn sequence() -> impl Strategy<Value = Vec<i64>> {
        vec(any::<i64>(), 0..=64)
    }

    /// Generate sequences with at least one element
    pub fn non_empty_sequence() -> impl Strategy<Value = Vec<i64>> {
        vec(any::<i64>(), 1..=64)
    }

    /// Generate a sequence together with a valid index into it
    pub fn sequence_with_index() -> impl Strategy<Value = (Vec<i64>, usize)> {
        non_empty_sequence().prop_flat_map(|items| {
            let len = items.len();
            (Just(items), 0..len)
        })
    }
}
