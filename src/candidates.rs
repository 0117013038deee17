//! The global set of candidate strings.

use std::collections::hash_set;
use std::collections::HashSet;

/// Deduplicated union of every batch result.
///
/// Owned by the coordinating thread; workers hand over their own sets and
/// never touch this one. Union is commutative, so the arrival order of
/// batches does not change the final contents.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CandidateSet {
    words: HashSet<String>,
}

impl CandidateSet {
    pub fn new() -> Self {
        Self::default()
    }

    /// Merge a batch result, returning the strings that were not present yet
    pub fn absorb(&mut self, batch: HashSet<String>) -> Vec<String> {
        if self.words.is_empty() {
            let fresh: Vec<String> = batch.iter().cloned().collect();
            self.words = batch;
            return fresh;
        }

        let mut fresh = Vec::new();
        for word in batch {
            if !self.words.contains(&word) {
                fresh.push(word.clone());
                self.words.insert(word);
            }
        }
        fresh
    }

    /// Merge another set into this one
    pub fn merge(&mut self, other: CandidateSet) {
        self.absorb(other.words);
    }

    pub fn contains(&self, word: &str) -> bool {
        self.words.contains(word)
    }

    pub fn len(&self) -> usize {
        self.words.len()
    }

    pub fn is_empty(&self) -> bool {
        self.words.is_empty()
    }

    pub fn iter(&self) -> hash_set::Iter<'_, String> {
        self.words.iter()
    }

    pub fn as_set(&self) -> &HashSet<String> {
        &self.words
    }

    pub fn into_inner(self) -> HashSet<String> {
        self.words
    }
}

impl FromIterator<String> for CandidateSet {
    fn from_iter<I: IntoIterator<Item = String>>(iter: I) -> Self {
        Self {
            words: iter.into_iter().collect(),
        }
    }
}

impl Extend<String> for CandidateSet {
    fn extend<I: IntoIterator<Item = String>>(&mut self, iter: I) {
        self.words.extend(iter);
    }
}

impl<'a> IntoIterator for &'a CandidateSet {
    type Item = &'a String;
    type IntoIter = hash_set::Iter<'a, String>;

    fn into_iter(self) -> Self::IntoIter {
        self.words.iter()
    }
}
