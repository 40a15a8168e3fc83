use std::iter::FusedIterator;

/// An iterator over fixed-size chunks of another iterator.
///
/// The last chunk holds whatever elements remain and may be shorter.
/// Created by [`batch`](super::batch).
#[derive(Debug, Clone)]
#[must_use = "iterators are lazy and do nothing unless consumed"]
pub struct Batch<I> {
    iter: I,
    size: usize,
}

impl<I> Batch<I> {
    pub(super) const fn new(iter: I, size: usize) -> Self {
        Self { iter, size }
    }
}

impl<I: Iterator> Iterator for Batch<I> {
    type Item = Vec<I::Item>;

    fn next(&mut self) -> Option<Self::Item> {
        let chunk: Vec<_> = self.iter.by_ref().take(self.size).collect();
        if chunk.is_empty() { None } else { Some(chunk) }
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let (lower, upper) = self.iter.size_hint();
        (
            lower.div_ceil(self.size),
            upper.map(|upper| upper.div_ceil(self.size)),
        )
    }
}

impl<I: FusedIterator> FusedIterator for Batch<I> {}

/// An iterator over fixed-size chunks of another iterator, padding the last
/// chunk with a fill value.
///
/// Created by [`batch_with`](super::batch_with).
#[derive(Debug, Clone)]
#[must_use = "iterators are lazy and do nothing unless consumed"]
pub struct PaddedBatch<I, T> {
    inner: Batch<I>,
    fill: T,
}

impl<I, T> PaddedBatch<I, T> {
    pub(super) const fn new(iter: I, size: usize, fill: T) -> Self {
        Self {
            inner: Batch::new(iter, size),
            fill,
        }
    }
}

impl<I, T> Iterator for PaddedBatch<I, T>
where
    I: Iterator<Item = T>,
    T: Clone,
{
    type Item = Vec<T>;

    fn next(&mut self) -> Option<Self::Item> {
        let mut chunk = self.inner.next()?;
        chunk.resize(self.inner.size, self.fill.clone());
        Some(chunk)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        self.inner.size_hint()
    }
}

impl<I, T> FusedIterator for PaddedBatch<I, T>
where
    I: FusedIterator<Item = T>,
    T: Clone,
{
}
