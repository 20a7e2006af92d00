//! Per-element combinators over ordered sequences
//!
//! Both adapters are lazy: nothing runs until the output is advanced, and the
//! caller's action runs at most once per source element, in source order.

use super::policy::FailurePolicy;
use std::fmt;
use std::iter::FusedIterator;
use std::marker::PhantomData;

/// Runs an action against each element in place, yielding the same element.
///
/// Created by [`SequenceExt::mutate_each`].
#[derive(Debug, Clone)]
#[must_use = "iterator adapters are lazy and do nothing unless consumed"]
pub struct MutateEach<I, F> {
    iter: I,
    action: F,
}

impl<I, F> Iterator for MutateEach<I, F>
where
    I: Iterator,
    F: FnMut(&mut I::Item),
{
    type Item = I::Item;

    fn next(&mut self) -> Option<Self::Item> {
        let mut item = self.iter.next()?;
        (self.action)(&mut item);
        Some(item)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        self.iter.size_hint()
    }
}

impl<I, F> FusedIterator for MutateEach<I, F>
where
    I: FusedIterator,
    F: FnMut(&mut I::Item),
{
}

/// Runs a fallible action against each element, yielding `Ok(element)`.
///
/// Under [`FailurePolicy::Propagate`] the first failure is yielded as `Err`
/// and the adapter stops pulling from the source. Under
/// [`FailurePolicy::Suppress`] failures are dropped and never surface.
///
/// Created by [`SequenceExt::tap_each`].
#[must_use = "iterator adapters are lazy and do nothing unless consumed"]
pub struct TapEach<I, F, E> {
    iter: I,
    action: F,
    policy: FailurePolicy,
    failed: bool,
    _error: PhantomData<fn() -> E>,
}

impl<I: fmt::Debug, F, E> fmt::Debug for TapEach<I, F, E> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("TapEach")
            .field("iter", &self.iter)
            .field("policy", &self.policy)
            .field("failed", &self.failed)
            .finish_non_exhaustive()
    }
}

impl<I, F, E> TapEach<I, F, E> {
    /// The policy this adapter applies to failures
    pub fn policy(&self) -> FailurePolicy {
        self.policy
    }
}

impl<I, F, E> Iterator for TapEach<I, F, E>
where
    I: Iterator,
    F: FnMut(&I::Item) -> Result<(), E>,
{
    type Item = Result<I::Item, E>;

    fn next(&mut self) -> Option<Self::Item> {
        if self.failed {
            return None;
        }

        let item = self.iter.next()?;
        match (self.action)(&item) {
            Ok(()) => Some(Ok(item)),
            Err(_) if self.policy.suppresses() => Some(Ok(item)),
            Err(error) => {
                self.failed = true;
                Some(Err(error))
            }
        }
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        if self.failed {
            return (0, Some(0));
        }

        let (lower, upper) = self.iter.size_hint();
        match self.policy {
            FailurePolicy::Suppress => (lower, upper),
            // A failure on the first element ends the sequence early.
            FailurePolicy::Propagate => (lower.min(1), upper),
        }
    }
}

impl<I, F, E> FusedIterator for TapEach<I, F, E>
where
    I: FusedIterator,
    F: FnMut(&I::Item) -> Result<(), E>,
{
}

/// Per-element combinators for any iterator
pub trait SequenceExt: Iterator + Sized {
    /// Invoke `action` on every element, in order, and yield the element.
    ///
    /// The action is expected to mutate the element (or state reachable from
    /// it), not replace it wholesale.
    fn mutate_each<F>(self, action: F) -> MutateEach<Self, F>
    where
        F: FnMut(&mut Self::Item),
    {
        MutateEach { iter: self, action }
    }

    /// Invoke a fallible `action` on every element, in order.
    ///
    /// See [`FailurePolicy`] for what happens when the action fails.
    /// Collecting into `Result<Vec<_>, _>` returns the first propagated
    /// failure.
    fn tap_each<F, E>(self, action: F, policy: impl Into<FailurePolicy>) -> TapEach<Self, F, E>
    where
        F: FnMut(&Self::Item) -> Result<(), E>,
    {
        TapEach {
            iter: self,
            action,
            policy: policy.into(),
            failed: false,
            _error: PhantomData,
        }
    }
}

impl<I> SequenceExt for I where I: Iterator {}
