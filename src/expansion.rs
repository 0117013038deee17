//! Expansion of arrangements into candidate strings.

use crate::arrangement::Arrangement;
use crate::cube::CubePool;
use itertools::Itertools;
use std::collections::HashSet;

/// Every string spelled by picking one letter from each cube of the
/// arrangement, in positional order.
///
/// Each combination of faces is visited exactly once, so a single
/// arrangement never yields the same string twice.
pub fn expand<'a>(
    pool: &'a CubePool,
    arrangement: &'a Arrangement,
) -> impl Iterator<Item = String> + 'a {
    arrangement
        .indices()
        .iter()
        .map(move |&i| pool[i].letters().iter().copied())
        .multi_cartesian_product()
        .map(|letters| letters.into_iter().collect())
}

/// Number of strings [`expand`] yields for `arrangement`
pub fn expansion_count(pool: &CubePool, arrangement: &Arrangement) -> usize {
    if arrangement.is_empty() {
        return 0;
    }
    arrangement.indices().iter().map(|&i| pool[i].len()).product()
}

/// Deduplicated union of the expansions of a batch of arrangements
pub fn expand_batch(pool: &CubePool, batch: &[Arrangement]) -> HashSet<String> {
    let mut candidates = HashSet::new();
    for arrangement in batch {
        candidates.extend(expand(pool, arrangement));
    }
    candidates
}
