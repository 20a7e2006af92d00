//! String joining over any sequence of displayable items.

use std::fmt::Display;

/// Join the `Display` form of every item with `separator`
pub fn join_with<I>(items: I, separator: &str) -> String
where
    I: IntoIterator,
    I::Item: Display,
{
    items
        .into_iter()
        .map(|item| item.to_string())
        .collect::<Vec<_>>()
        .join(separator)
}

/// Fluent form of [`join_with`]
pub trait JoinExt: Iterator + Sized {
    /// Join the `Display` form of every element with `separator`
    fn join_with(self, separator: &str) -> String
    where
        Self::Item: Display,
    {
        join_with(self, separator)
    }
}

impl<I> JoinExt for I where I: Iterator {}
