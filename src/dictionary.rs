//! Word list loading and filtering.

use crate::candidates::CandidateSet;
use crate::error::CubeError;
use rayon::prelude::*;
use std::collections::HashSet;
use std::fs;
use std::io;
use std::path::Path;

/// Immutable set of lowercase words.
#[derive(Debug, Clone, Default)]
pub struct Dictionary {
    words: HashSet<String>,
}

impl Dictionary {
    /// Load a word list with one word per line, in any case.
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self, CubeError> {
        let path = path.as_ref();
        let bytes = fs::read(path).map_err(|source| match source.kind() {
            io::ErrorKind::NotFound => CubeError::DictionaryNotFound(path.to_path_buf()),
            _ => CubeError::DictionaryRead {
                path: path.to_path_buf(),
                source,
            },
        })?;
        Ok(Self::parse(&String::from_utf8_lossy(&bytes)))
    }

    /// Build from text with one word per line
    pub fn parse(text: &str) -> Self {
        Self::from_words(text.lines())
    }

    pub fn from_words<I, S>(words: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let words = words
            .into_iter()
            .map(|w| w.as_ref().trim().to_lowercase())
            .filter(|w| !w.is_empty())
            .collect();
        Self { words }
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

    /// Sorted, deduplicated list of the candidates found in the dictionary.
    ///
    /// Candidates are lowercased before the lookup.
    pub fn filter<'a, I>(&self, candidates: I) -> Vec<String>
    where
        I: IntoIterator<Item = &'a str>,
    {
        let mut found: Vec<String> = candidates
            .into_iter()
            .map(str::to_lowercase)
            .filter(|w| self.words.contains(w))
            .collect();
        found.sort_unstable();
        found.dedup();
        found
    }

    /// Words of the candidate set present in the dictionary, sorted.
    pub fn matches(&self, candidates: &CandidateSet) -> Vec<String> {
        let mut found: Vec<String> = candidates
            .as_set()
            .par_iter()
            .map(|w| w.to_lowercase())
            .filter(|w| self.words.contains(w))
            .collect();
        found.par_sort_unstable();
        found.dedup();
        found
    }
}
