use std::collections::VecDeque;
use std::iter::FusedIterator;

/// An iterator taking one element from each source in turn, skipping
/// exhausted sources, until all of them are exhausted.
///
/// Created by [`intertwine`](super::intertwine).
#[derive(Debug, Clone)]
#[must_use = "iterators are lazy and do nothing unless consumed"]
pub struct Intertwine<I> {
    queue: VecDeque<I>,
}

impl<I> Intertwine<I> {
    pub(super) fn new(sources: impl IntoIterator<Item = I>) -> Self {
        Self {
            queue: sources.into_iter().collect(),
        }
    }
}

impl<I: Iterator> Iterator for Intertwine<I> {
    type Item = I::Item;

    fn next(&mut self) -> Option<I::Item> {
        while let Some(mut source) = self.queue.pop_front() {
            if let Some(item) = source.next() {
                self.queue.push_back(source);
                return Some(item);
            }
        }
        None
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        self.queue
            .iter()
            .map(Iterator::size_hint)
            .fold((0, Some(0)), |(lower, upper), (source_lower, source_upper)| {
                (
                    lower.saturating_add(source_lower),
                    upper.zip(source_upper).and_then(|(upper, source_upper)| upper.checked_add(source_upper)),
                )
            })
    }
}

impl<I: Iterator> FusedIterator for Intertwine<I> {}
