use std::collections::HashSet;
use std::fmt;
use std::hash::Hash;
use std::iter::FusedIterator;

#[cfg(feature = "fxhash")]
type SeenState = rustc_hash::FxBuildHasher;

#[cfg(all(feature = "ahash", not(feature = "fxhash")))]
type SeenState = ahash::RandomState;

#[cfg(not(any(feature = "fxhash", feature = "ahash")))]
type SeenState = std::collections::hash_map::RandomState;

/// An iterator yielding only the first element for each distinct key.
///
/// Created by [`unique`](super::unique) and [`unique_by`](super::unique_by).
#[must_use = "iterators are lazy and do nothing unless consumed"]
pub struct UniqueBy<I, F, K> {
    iter: I,
    key: F,
    seen: HashSet<K, SeenState>,
}

/// The iterator returned by [`unique`](super::unique), keyed by the
/// elements themselves.
pub type Unique<I> = UniqueBy<I, fn(&<I as Iterator>::Item) -> <I as Iterator>::Item, <I as Iterator>::Item>;

impl<I, F, K> UniqueBy<I, F, K> {
    pub(super) fn new(iter: I, key: F) -> Self {
        Self {
            iter,
            key,
            seen: HashSet::default(),
        }
    }
}

impl<I, F, K> Iterator for UniqueBy<I, F, K>
where
    I: Iterator,
    F: FnMut(&I::Item) -> K,
    K: Eq + Hash,
{
    type Item = I::Item;

    fn next(&mut self) -> Option<I::Item> {
        let Self { iter, key, seen } = self;
        iter.find(|item| seen.insert(key(item)))
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let (lower, upper) = self.iter.size_hint();
        (lower.min(1), upper)
    }
}

impl<I, F, K> FusedIterator for UniqueBy<I, F, K>
where
    I: FusedIterator,
    F: FnMut(&I::Item) -> K,
    K: Eq + Hash,
{
}

impl<I: fmt::Debug, F, K: fmt::Debug> fmt::Debug for UniqueBy<I, F, K> {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        formatter
            .debug_struct("UniqueBy")
            .field("iter", &self.iter)
            .field("seen", &self.seen)
            .finish_non_exhaustive()
    }
}
