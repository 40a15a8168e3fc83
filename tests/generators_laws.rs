#![cfg(feature = "generators")]
//! Property-based tests for the iterator recipes.
//!
//! ## Laws
//! - **Batch Concatenation**: flattening `batch(xs, n)` gives back `xs`
//! - **Batch Shape**: every chunk but the last has `n` elements
//! - **Cycle Length**: `cycle_times(xs, k)` yields `len(xs) * k` elements
//! - **Cycle Prefix**: `cycle(xs)` starts with `cycle_times(xs, k)`
//! - **Intertwine Permutation**: `intertwine` yields every element once and
//!   keeps the relative order of each source
//! - **Unique**: no duplicates, first occurrences in order
//! - **Pad**: the first `len(xs)` elements are `xs`, the rest are fill

use proptest::prelude::*;
use std::collections::HashSet;
use taipan::generators::{batch, batch_with, cycle, cycle_times, intertwine, iterate, pad, unique};

proptest! {
    #[test]
    fn prop_batch_concatenation(values in prop::collection::vec(any::<i32>(), 0..50), n in 1usize..8) {
        let flattened: Vec<i32> = batch(values.clone(), n).unwrap().flatten().collect();
        prop_assert_eq!(flattened, values);
    }

    #[test]
    fn prop_batch_shape(values in prop::collection::vec(any::<i32>(), 0..50), n in 1usize..8) {
        let batches: Vec<Vec<i32>> = batch(values.clone(), n).unwrap().collect();
        prop_assert_eq!(batches.len(), values.len().div_ceil(n));
        if let Some((last, init)) = batches.split_last() {
            prop_assert!(init.iter().all(|chunk| chunk.len() == n));
            prop_assert!(!last.is_empty() && last.len() <= n);
        }
    }

    #[test]
    fn prop_batch_with_fill_shape(values in prop::collection::vec(any::<i32>(), 0..50), n in 1usize..8) {
        let batches: Vec<Vec<i32>> = batch_with(values.clone(), n, 0).unwrap().collect();
        prop_assert!(batches.iter().all(|chunk| chunk.len() == n));
        let flattened: Vec<i32> = batches.into_iter().flatten().take(values.len()).collect();
        prop_assert_eq!(flattened, values);
    }

    #[test]
    fn prop_cycle_length(values in prop::collection::vec(any::<u8>(), 0..10), times in 0usize..5) {
        let repeated: Vec<u8> = cycle_times(values.clone(), times).unwrap().collect();
        prop_assert_eq!(repeated.len(), values.len() * times);
    }

    #[test]
    fn prop_cycle_prefix(values in prop::collection::vec(any::<u8>(), 1..10), times in 0usize..5) {
        let finite: Vec<u8> = cycle_times(values.clone(), times).unwrap().collect();
        let infinite: Vec<u8> = cycle(values).take(finite.len()).collect();
        prop_assert_eq!(infinite, finite);
    }

    #[test]
    fn prop_intertwine_permutation(sources in prop::collection::vec(prop::collection::vec(any::<u16>(), 0..6), 0..5)) {
        let tagged: Vec<Vec<(usize, u16)>> = sources
            .iter()
            .enumerate()
            .map(|(index, source)| source.iter().map(|value| (index, *value)).collect())
            .collect();
        let merged: Vec<(usize, u16)> = intertwine(tagged).collect();

        prop_assert_eq!(merged.len(), sources.iter().map(Vec::len).sum::<usize>());
        for (index, source) in sources.iter().enumerate() {
            let kept: Vec<u16> = merged
                .iter()
                .filter(|(origin, _)| *origin == index)
                .map(|(_, value)| *value)
                .collect();
            prop_assert_eq!(&kept, source);
        }
    }

    #[test]
    fn prop_unique(values in prop::collection::vec(0u8..10, 0..40)) {
        let distinct: Vec<u8> = unique(values.clone()).collect();

        let mut seen = HashSet::new();
        let expected: Vec<u8> = values.iter().copied().filter(|value| seen.insert(*value)).collect();
        prop_assert_eq!(distinct, expected);
    }

    #[test]
    fn prop_pad(values in prop::collection::vec(any::<i8>(), 0..10), extra in 0usize..10) {
        let padded: Vec<Option<i8>> = pad(values.iter().copied().map(Some), None)
            .take(values.len() + extra)
            .collect();
        let (head, tail) = padded.split_at(values.len());
        prop_assert!(head.iter().copied().eq(values.iter().copied().map(Some)));
        prop_assert!(tail.iter().all(Option::is_none));
    }

    #[test]
    fn prop_iterate_advances(values in prop::collection::vec(any::<i32>(), 0..20), n in 0usize..25) {
        let mut iterator = values.iter();
        iterate(&mut iterator, Some(n));
        prop_assert_eq!(iterator.next(), values.get(n));
    }
}
