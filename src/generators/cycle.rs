use std::iter::FusedIterator;

/// An iterator repeating the elements of another iterator, either a fixed
/// number of times or indefinitely.
///
/// Elements are saved during the first pass, so the source is traversed
/// only once. Created by [`cycle`](super::cycle) and
/// [`cycle_times`](super::cycle_times).
#[derive(Debug, Clone)]
#[must_use = "iterators are lazy and do nothing unless consumed"]
pub struct Cycle<I, T> {
    source: Option<I>,
    saved: Vec<T>,
    index: usize,
    // Passes left, including the current one; `None` repeats forever.
    remaining: Option<usize>,
}

impl<I, T> Cycle<I, T> {
    pub(super) const fn new(source: I, times: Option<usize>) -> Self {
        Self {
            source: Some(source),
            saved: Vec::new(),
            index: 0,
            remaining: times,
        }
    }

    fn complete_pass(&mut self) {
        if let Some(remaining) = self.remaining.as_mut() {
            *remaining = remaining.saturating_sub(1);
        }
    }
}

impl<I, T> Iterator for Cycle<I, T>
where
    I: Iterator<Item = T>,
    T: Clone,
{
    type Item = T;

    fn next(&mut self) -> Option<T> {
        loop {
            if self.remaining == Some(0) {
                return None;
            }

            if let Some(source) = self.source.as_mut() {
                if let Some(item) = source.next() {
                    self.saved.push(item.clone());
                    return Some(item);
                }
                self.source = None;
                self.complete_pass();
                continue;
            }

            if self.saved.is_empty() {
                return None;
            }
            if let Some(item) = self.saved.get(self.index) {
                self.index += 1;
                return Some(item.clone());
            }
            self.index = 0;
            self.complete_pass();
        }
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        match self.remaining {
            Some(0) => (0, Some(0)),
            _ => (0, None),
        }
    }
}

impl<I, T> FusedIterator for Cycle<I, T>
where
    I: Iterator<Item = T>,
    T: Clone,
{
}
