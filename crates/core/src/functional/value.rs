//! Single-value combinators
//!
//! [`ValueExt`] is implemented for every sized type, so any value can be
//! piped, tapped or mutated inline:
//!
//! ```
//! use tapline_core::functional::prelude::*;
//!
//! let total = vec![1, 2, 3]
//!     .mutate(|v| v.push(4))
//!     .tap(|v| assert_eq!(v.len(), 4))
//!     .pipe(|v| v.iter().sum::<i32>());
//!
//! assert_eq!(total, 10);
//! ```

use super::policy::FailurePolicy;
use std::future::Future;

/// Fluent combinators for a single value
pub trait ValueExt: Sized {
    /// Transform the value
    fn pipe<U, F>(self, mapper: F) -> U
    where
        F: FnOnce(Self) -> U,
    {
        mapper(self)
    }

    /// Transform the value with a fallible mapper, propagating its failure
    fn try_pipe<U, E, F>(self, mapper: F) -> Result<U, E>
    where
        F: FnOnce(Self) -> Result<U, E>,
    {
        mapper(self)
    }

    /// Transform the value, returning `fallback` if the mapper fails.
    ///
    /// The failure itself is dropped.
    fn map_or_fallback<U, E, F>(self, mapper: F, fallback: U) -> U
    where
        F: FnOnce(&Self) -> Result<U, E>,
    {
        mapper(&self).unwrap_or(fallback)
    }

    /// Transform the value; if the mapper fails, `recover` receives the
    /// original value and the failure and produces the result instead.
    fn map_or_recover<U, E, F, R>(self, mapper: F, recover: R) -> U
    where
        F: FnOnce(&Self) -> Result<U, E>,
        R: FnOnce(Self, E) -> U,
    {
        match mapper(&self) {
            Ok(mapped) => mapped,
            Err(error) => recover(self, error),
        }
    }

    /// Run a side effect and return the value unchanged
    fn tap<F>(self, action: F) -> Self
    where
        F: FnOnce(&Self),
    {
        action(&self);
        self
    }

    /// Run a fallible side effect and return the value unchanged.
    ///
    /// With [`FailurePolicy::Suppress`] the failure is discarded silently and
    /// `Ok(self)` is returned; see the hazard note on [`FailurePolicy`].
    fn try_tap<E, F>(self, action: F, policy: impl Into<FailurePolicy>) -> Result<Self, E>
    where
        F: FnOnce(&Self) -> Result<(), E>,
    {
        let policy = policy.into();
        match action(&self) {
            Ok(()) => Ok(self),
            Err(_) if policy.suppresses() => Ok(self),
            Err(error) => Err(error),
        }
    }

    /// Mutate the value in place and return it
    fn mutate<F>(mut self, action: F) -> Self
    where
        F: FnOnce(&mut Self),
    {
        action(&mut self);
        self
    }

    /// Mutate the value in place with a fallible action.
    ///
    /// Failures always propagate; there is no suppression here.
    fn try_mutate<E, F>(mut self, action: F) -> Result<Self, E>
    where
        F: FnOnce(&mut Self) -> Result<(), E>,
    {
        action(&mut self)?;
        Ok(self)
    }

    /// Run an async action against a clone of the value and return the
    /// original once the action completes.
    ///
    /// The value the action resolves to is discarded: the result is always
    /// the original input, even when the action produces something else.
    /// Use this with shared handles (`Arc<Mutex<_>>` and friends) whose
    /// clones point at the same state.
    fn mutate_async<F, Fut>(self, action: F) -> impl Future<Output = Self>
    where
        Self: Clone,
        F: FnOnce(Self) -> Fut,
        Fut: Future,
    {
        async move {
            let _discarded = action(self.clone()).await;
            self
        }
    }

    /// Fallible [`mutate_async`](Self::mutate_async). A failure propagates;
    /// a successful resolved value is discarded.
    fn try_mutate_async<R, E, F, Fut>(self, action: F) -> impl Future<Output = Result<Self, E>>
    where
        Self: Clone,
        F: FnOnce(Self) -> Fut,
        Fut: Future<Output = Result<R, E>>,
    {
        async move {
            action(self.clone()).await?;
            Ok(self)
        }
    }
}

impl<T> ValueExt for T {}
