use std::iter::{Fuse, FusedIterator};

/// An iterator yielding the elements of another iterator followed by an
/// infinite tail of a fill value.
///
/// Created by [`pad`](super::pad) and [`pad_none`](super::pad_none).
#[derive(Debug, Clone)]
#[must_use = "iterators are lazy and do nothing unless consumed"]
pub struct Pad<I, T> {
    iter: Fuse<I>,
    fill: T,
}

impl<I: Iterator, T> Pad<I, T> {
    pub(super) fn new(iter: I, fill: T) -> Self {
        Self {
            iter: iter.fuse(),
            fill,
        }
    }
}

impl<I, T> Iterator for Pad<I, T>
where
    I: Iterator<Item = T>,
    T: Clone,
{
    type Item = T;

    #[inline]
    fn next(&mut self) -> Option<T> {
        self.iter.next().or_else(|| Some(self.fill.clone()))
    }

    #[inline]
    fn size_hint(&self) -> (usize, Option<usize>) {
        (usize::MAX, None)
    }
}

impl<I, T> FusedIterator for Pad<I, T>
where
    I: Iterator<Item = T>,
    T: Clone,
{
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    fn test_fill_follows_source() {
        let padded: Vec<_> = Pad::new(["a", "b"].into_iter(), "-").take(5).collect();
        assert_eq!(padded, vec!["a", "b", "-", "-", "-"]);
    }

    #[rstest]
    fn test_empty_source_is_all_fill() {
        let padded: Vec<_> = Pad::new(std::iter::empty(), 7).take(3).collect();
        assert_eq!(padded, vec![7, 7, 7]);
    }
}
