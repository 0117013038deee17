//! Enumeration of ordered cube arrangements.
//!
//! An arrangement picks `n` distinct cube positions from a pool of `m` cubes
//! in a given order. There are `m! / (m - n)!` of them, produced lazily in
//! lexicographic order of the positions.

use itertools::{Itertools, Permutations};
use std::ops::Range;

/// Ordered, non-repeating cube positions
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Arrangement(pub Vec<usize>);

impl Arrangement {
    pub fn indices(&self) -> &[usize] {
        &self.0
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

/// Lazy iterator over every arrangement of `length` cubes out of `pool_size`.
pub struct Arrangements {
    inner: Permutations<Range<usize>>,
    remaining: usize,
}

impl Iterator for Arrangements {
    type Item = Arrangement;

    fn next(&mut self) -> Option<Arrangement> {
        let indices = self.inner.next()?;
        self.remaining = self.remaining.saturating_sub(1);
        Some(Arrangement(indices))
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.remaining, Some(self.remaining))
    }
}

impl ExactSizeIterator for Arrangements {}

/// Stream the arrangements of `length` cubes chosen from `pool_size`.
///
/// Nothing is produced when `length` is zero or exceeds `pool_size`.
pub fn arrangements(pool_size: usize, length: usize) -> Arrangements {
    let mut inner = (0..pool_size).permutations(length);
    if length == 0 {
        // permutations(0) yields a single empty arrangement
        inner.by_ref().for_each(drop);
    }
    let remaining = arrangement_count(pool_size, length);
    Arrangements { inner, remaining }
}

/// Materialize every arrangement up front.
pub fn all_arrangements(pool_size: usize, length: usize) -> Vec<Arrangement> {
    arrangements(pool_size, length).collect()
}

/// Number of arrangements of `length` cubes out of `pool_size`
pub fn arrangement_count(pool_size: usize, length: usize) -> usize {
    if length == 0 || length > pool_size {
        return 0;
    }
    (pool_size - length + 1..=pool_size).product()
}
