//! Random selection, delegating to `rand`.

use rand::seq::{IteratorRandom, SliceRandom};
use rand::Rng;

/// Pick a random element of `items` using the thread-local generator
pub fn pick<T>(items: &[T]) -> Option<&T> {
    items.choose(&mut rand::thread_rng())
}

/// Pick a random element of `items` using `rng`
pub fn pick_with<'a, T, R>(items: &'a [T], rng: &mut R) -> Option<&'a T>
where
    R: Rng + ?Sized,
{
    items.choose(rng)
}

/// Pick a random element from any sequence, consuming it
pub fn pick_from_iter<I>(items: I) -> Option<I::Item>
where
    I: IntoIterator,
{
    items.into_iter().choose(&mut rand::thread_rng())
}
