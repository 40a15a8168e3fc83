//! Iterator recipes.
//!
//! Every recipe is a lazy, one-shot adapter over a source iterator:
//!
//! | Function | Description |
//! |----------|-------------|
//! | [`batch`] / [`batch_with`] | Fixed-size chunks, optionally padding the last one |
//! | [`cycle`] / [`cycle_times`] | Repeat the elements indefinitely or a number of times |
//! | [`intertwine`] | Round-robin over several iterables |
//! | [`iterate`] | Advance an iterator, discarding the elements |
//! | [`pad`] / [`pad_none`] | Follow the elements with an infinite fill |
//! | [`unique`] / [`unique_by`] | Drop elements whose key was already seen |
//!
//! The same adapters are available as methods through the [`Recipes`]
//! extension trait.
//!
//! # Examples
//!
//! ```rust
//! use taipan::generators::{batch, intertwine, unique};
//!
//! let batches: Vec<_> = batch(vec![1, 2, 3, 4, 5], 2).unwrap().collect();
//! assert_eq!(batches, vec![vec![1, 2], vec![3, 4], vec![5]]);
//!
//! let merged: Vec<_> = intertwine(vec![vec![1, 2, 3], vec![10, 20]]).collect();
//! assert_eq!(merged, vec![1, 10, 2, 20, 3]);
//!
//! let distinct: Vec<_> = unique(vec![1, 1, 2, 3, 3, 3, 4]).collect();
//! assert_eq!(distinct, vec![1, 2, 3, 4]);
//! ```

mod batch;
mod cycle;
mod intertwine;
mod pad;
mod unique;

pub use batch::{Batch, PaddedBatch};
pub use cycle::Cycle;
pub use intertwine::Intertwine;
pub use pad::Pad;
pub use unique::{Unique, UniqueBy};

use std::hash::Hash;

use crate::Error;

fn to_count<N: TryInto<usize>>(value: N, message: &str) -> Result<usize, Error> {
    value.try_into().map_err(|_| Error::Value(message.to_string()))
}

fn batch_size<N: TryInto<usize>>(n: N) -> Result<usize, Error> {
    const MESSAGE: &str = "number of elements in a batch must be positive";
    match to_count(n, MESSAGE)? {
        0 => Err(Error::Value(MESSAGE.to_string())),
        size => Ok(size),
    }
}

/// Groups the elements of `iterable` into chunks of `n`.
///
/// The last chunk holds the remaining elements and may be shorter than `n`.
///
/// # Errors
///
/// Returns [`Error::Value`] if `n` is zero or negative.
///
/// # Examples
///
/// ```rust
/// use taipan::generators::batch;
///
/// let batches: Vec<_> = batch(1..=5, 2).unwrap().collect();
/// assert_eq!(batches, vec![vec![1, 2], vec![3, 4], vec![5]]);
///
/// assert!(batch(1..=5, 0).is_err());
/// assert!(batch(1..=5, -1).is_err());
/// ```
pub fn batch<I, N>(iterable: I, n: N) -> Result<Batch<I::IntoIter>, Error>
where
    I: IntoIterator,
    N: TryInto<usize>,
{
    Ok(Batch::new(iterable.into_iter(), batch_size(n)?))
}

/// Groups the elements of `iterable` into chunks of `n`, padding the last
/// chunk with clones of `fill`.
///
/// # Errors
///
/// Returns [`Error::Value`] if `n` is zero or negative.
///
/// # Examples
///
/// ```rust
/// use taipan::generators::batch_with;
///
/// let batches: Vec<_> = batch_with(vec![1, 2, 3, 4, 5], 2, 0).unwrap().collect();
/// assert_eq!(batches, vec![vec![1, 2], vec![3, 4], vec![5, 0]]);
/// ```
pub fn batch_with<I, N>(
    iterable: I,
    n: N,
    fill: I::Item,
) -> Result<PaddedBatch<I::IntoIter, I::Item>, Error>
where
    I: IntoIterator,
    I::Item: Clone,
    N: TryInto<usize>,
{
    Ok(PaddedBatch::new(iterable.into_iter(), batch_size(n)?, fill))
}

/// Repeats the elements of `iterable` indefinitely.
///
/// Unlike [`Iterator::cycle`], the source does not need to be [`Clone`]:
/// its elements are saved during the first pass. An empty source yields
/// nothing.
///
/// # Examples
///
/// ```rust
/// use taipan::generators::cycle;
///
/// let repeated: Vec<_> = cycle(vec![1, 2]).take(6).collect();
/// assert_eq!(repeated, vec![1, 2, 1, 2, 1, 2]);
/// ```
pub fn cycle<I>(iterable: I) -> Cycle<I::IntoIter, I::Item>
where
    I: IntoIterator,
    I::Item: Clone,
{
    Cycle::new(iterable.into_iter(), None)
}

/// Repeats the elements of `iterable` `times` times.
///
/// # Errors
///
/// Returns [`Error::Value`] if `times` is negative.
///
/// # Examples
///
/// ```rust
/// use taipan::generators::cycle_times;
///
/// let repeated: Vec<_> = cycle_times(vec![1, 2], 3).unwrap().collect();
/// assert_eq!(repeated, vec![1, 2, 1, 2, 1, 2]);
///
/// assert!(cycle_times(vec![1, 2], -1).is_err());
/// ```
pub fn cycle_times<I, N>(iterable: I, times: N) -> Result<Cycle<I::IntoIter, I::Item>, Error>
where
    I: IntoIterator,
    I::Item: Clone,
    N: TryInto<usize>,
{
    let times = to_count(times, "number of cycles cannot be negative")?;
    Ok(Cycle::new(iterable.into_iter(), Some(times)))
}

/// Takes one element from each iterable in turn, skipping exhausted ones,
/// until all are exhausted.
///
/// # Examples
///
/// ```rust
/// use taipan::generators::intertwine;
///
/// let merged: Vec<_> = intertwine([vec![1, 2, 3], vec![10, 20], vec![]]).collect();
/// assert_eq!(merged, vec![1, 10, 2, 20, 3]);
/// ```
pub fn intertwine<I>(iterables: I) -> Intertwine<<I::Item as IntoIterator>::IntoIter>
where
    I: IntoIterator,
    I::Item: IntoIterator,
{
    Intertwine::new(iterables.into_iter().map(IntoIterator::into_iter))
}

/// Advances `iterator` by `n` elements, or to its end when `n` is `None`,
/// discarding the elements.
///
/// Pass the iterator by mutable reference to keep using it afterwards.
///
/// # Examples
///
/// ```rust
/// use taipan::generators::iterate;
///
/// let mut numbers = 1..=5;
/// iterate(&mut numbers, Some(2));
/// assert_eq!(numbers.next(), Some(3));
///
/// iterate(&mut numbers, None);
/// assert_eq!(numbers.next(), None);
/// ```
pub fn iterate<I: Iterator>(mut iterator: I, n: Option<usize>) {
    match n {
        None => iterator.for_each(drop),
        Some(0) => {}
        Some(n) => {
            iterator.nth(n - 1);
        }
    }
}

/// Yields the elements of `iterable` followed by an infinite tail of
/// `fill`.
///
/// # Examples
///
/// ```rust
/// use taipan::generators::pad;
///
/// let padded: Vec<_> = pad(vec![1, 2], 0).take(5).collect();
/// assert_eq!(padded, vec![1, 2, 0, 0, 0]);
/// ```
pub fn pad<I>(iterable: I, fill: I::Item) -> Pad<I::IntoIter, I::Item>
where
    I: IntoIterator,
    I::Item: Clone,
{
    Pad::new(iterable.into_iter(), fill)
}

/// The iterator returned by [`pad_none`].
pub type PadNone<I> = Pad<
    std::iter::Map<I, fn(<I as Iterator>::Item) -> Option<<I as Iterator>::Item>>,
    Option<<I as Iterator>::Item>,
>;

/// Yields `Some(element)` for each element of `iterable`, followed by an
/// infinite tail of `None`.
///
/// # Examples
///
/// ```rust
/// use taipan::generators::pad_none;
///
/// let padded: Vec<_> = pad_none(["a"]).take(3).collect();
/// assert_eq!(padded, vec![Some("a"), None, None]);
/// ```
pub fn pad_none<I>(iterable: I) -> PadNone<I::IntoIter>
where
    I: IntoIterator,
    I::Item: Clone,
{
    let wrap: fn(I::Item) -> Option<I::Item> = Some;
    Pad::new(iterable.into_iter().map(wrap), None)
}

/// Yields the elements of `iterable` in order, skipping any element equal
/// to one already yielded.
///
/// # Examples
///
/// ```rust
/// use taipan::generators::unique;
///
/// let distinct: Vec<_> = unique("mississippi".chars()).collect();
/// assert_eq!(distinct, vec!['m', 'i', 's', 'p']);
/// ```
pub fn unique<I>(iterable: I) -> Unique<I::IntoIter>
where
    I: IntoIterator,
    I::Item: Eq + Hash + Clone,
{
    let key: fn(&I::Item) -> I::Item = Clone::clone;
    UniqueBy::new(iterable.into_iter(), key)
}

/// Yields the elements of `iterable` in order, skipping any element whose
/// `key` was already seen.
///
/// # Examples
///
/// ```rust
/// use taipan::generators::unique_by;
///
/// let distinct: Vec<_> = unique_by(vec![-1, 1, -2, 3, 2], |x: &i32| x.abs()).collect();
/// assert_eq!(distinct, vec![-1, -2, 3]);
/// ```
pub fn unique_by<I, F, K>(iterable: I, key: F) -> UniqueBy<I::IntoIter, F, K>
where
    I: IntoIterator,
    F: FnMut(&I::Item) -> K,
    K: Eq + Hash,
{
    UniqueBy::new(iterable.into_iter(), key)
}

/// Iterator recipes as methods.
///
/// # Examples
///
/// ```rust
/// use taipan::generators::Recipes;
///
/// let batches: Vec<_> = (1..=4).batch_with(3, 0).unwrap().collect();
/// assert_eq!(batches, vec![vec![1, 2, 3], vec![4, 0, 0]]);
///
/// let distinct: Vec<_> = [3, 1, 3, 2, 1].into_iter().unique().collect();
/// assert_eq!(distinct, vec![3, 1, 2]);
/// ```
pub trait Recipes: Iterator + Sized {
    /// See [`batch`].
    ///
    /// # Errors
    ///
    /// Returns [`Error::Value`] if `n` is zero or negative.
    fn batch<N: TryInto<usize>>(self, n: N) -> Result<Batch<Self>, Error> {
        batch(self, n)
    }

    /// See [`batch_with`].
    ///
    /// # Errors
    ///
    /// Returns [`Error::Value`] if `n` is zero or negative.
    fn batch_with<N: TryInto<usize>>(
        self,
        n: N,
        fill: Self::Item,
    ) -> Result<PaddedBatch<Self, Self::Item>, Error>
    where
        Self::Item: Clone,
    {
        batch_with(self, n, fill)
    }

    /// See [`cycle_times`].
    ///
    /// # Errors
    ///
    /// Returns [`Error::Value`] if `times` is negative.
    fn cycle_times<N: TryInto<usize>>(self, times: N) -> Result<Cycle<Self, Self::Item>, Error>
    where
        Self::Item: Clone,
    {
        cycle_times(self, times)
    }

    /// See [`iterate`].
    fn iterate(&mut self, n: Option<usize>) {
        iterate(self, n);
    }

    /// See [`pad`].
    fn pad(self, fill: Self::Item) -> Pad<Self, Self::Item>
    where
        Self::Item: Clone,
    {
        pad(self, fill)
    }

    /// See [`pad_none`].
    fn pad_none(self) -> PadNone<Self>
    where
        Self::Item: Clone,
    {
        pad_none(self)
    }

    /// See [`unique`].
    fn unique(self) -> Unique<Self>
    where
        Self::Item: Eq + Hash + Clone,
    {
        unique(self)
    }

    /// See [`unique_by`].
    fn unique_by<F, K>(self, key: F) -> UniqueBy<Self, F, K>
    where
        F: FnMut(&Self::Item) -> K,
        K: Eq + Hash,
    {
        unique_by(self, key)
    }
}

impl<I: Iterator> Recipes for I {}

static_assertions::assert_impl_all!(Batch<std::vec::IntoIter<i32>>: Send, Sync);
static_assertions::assert_impl_all!(Cycle<std::vec::IntoIter<i32>, i32>: Send, Sync);
static_assertions::assert_impl_all!(Intertwine<std::vec::IntoIter<i32>>: Send, Sync);
static_assertions::assert_impl_all!(Unique<std::vec::IntoIter<i32>>: Send, Sync);
