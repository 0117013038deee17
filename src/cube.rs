//! Letter cubes and the pool they are drawn from.
//!
//! A cube is the set of letters printed on its faces. Letters are stored
//! lowercase, sorted and deduplicated, so a letter repeated on two faces
//! counts as a single choice.

use crate::error::CubeError;
use std::fmt;
use std::ops::Index;
use std::str::FromStr;

/// Letters of the four cubes in the physical puzzle
const STANDARD_CUBES: [&str; 4] = ["akxplndu", "tkiors", "idvbefpq", "cegnhmu"];

/// A single letter cube.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Cube {
    letters: Vec<char>,
}

impl Cube {
    /// Build a cube from its face letters.
    pub fn new<I>(letters: I) -> Result<Self, CubeError>
    where
        I: IntoIterator<Item = char>,
    {
        let mut normalized = Vec::new();
        for c in letters {
            if !c.is_alphabetic() {
                return Err(CubeError::InvalidLetter(c));
            }
            normalized.extend(c.to_lowercase());
        }
        normalized.sort_unstable();
        normalized.dedup();

        if normalized.is_empty() {
            return Err(CubeError::EmptyCube);
        }
        Ok(Self { letters: normalized })
    }

    pub fn letters(&self) -> &[char] {
        &self.letters
    }

    pub fn len(&self) -> usize {
        self.letters.len()
    }

    pub fn is_empty(&self) -> bool {
        self.letters.is_empty()
    }

    pub fn contains(&self, c: char) -> bool {
        self.letters.binary_search(&c).is_ok()
    }
}

impl FromStr for Cube {
    type Err = CubeError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::new(s.trim().chars())
    }
}

impl fmt::Display for Cube {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for c in &self.letters {
            write!(f, "{}", c)?;
        }
        Ok(())
    }
}

/// An ordered collection of cubes. Arrangements refer to cubes by their
/// position in the pool.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CubePool {
    cubes: Vec<Cube>,
}

impl CubePool {
    pub fn new(cubes: Vec<Cube>) -> Self {
        Self { cubes }
    }

    /// The four cubes of the puzzle
    pub fn standard() -> Self {
        let cubes = STANDARD_CUBES
            .iter()
            .map(|letters| Cube {
                letters: sorted_letters(letters),
            })
            .collect();
        Self { cubes }
    }

    /// Parse one cube per string
    pub fn parse<S: AsRef<str>>(letters: &[S]) -> Result<Self, CubeError> {
        let cubes = letters
            .iter()
            .map(|s| s.as_ref().parse())
            .collect::<Result<Vec<Cube>, _>>()?;
        Ok(Self { cubes })
    }

    /// The pool to search for words of `length` letters.
    ///
    /// The pool is used as is when it has enough cubes, and is concatenated
    /// with itself otherwise.
    pub fn for_word_length(&self, length: usize) -> Result<CubePool, CubeError> {
        let invalid = CubeError::InvalidLength {
            length,
            pool_size: self.len(),
        };
        if length == 0 {
            return Err(invalid);
        }
        if length <= self.len() {
            return Ok(self.clone());
        }
        if length > self.len() * 2 {
            return Err(invalid);
        }

        let mut cubes = self.cubes.clone();
        cubes.extend_from_slice(&self.cubes);
        Ok(Self { cubes })
    }

    pub fn cubes(&self) -> &[Cube] {
        &self.cubes
    }

    pub fn len(&self) -> usize {
        self.cubes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.cubes.is_empty()
    }
}

impl Index<usize> for CubePool {
    type Output = Cube;

    fn index(&self, index: usize) -> &Cube {
        &self.cubes[index]
    }
}

impl fmt::Display for CubePool {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, cube) in self.cubes.iter().enumerate() {
            if i > 0 {
                write!(f, " ")?;
            }
            write!(f, "[{}]", cube)?;
        }
        Ok(())
    }
}

fn sorted_letters(letters: &str) -> Vec<char> {
    let mut chars: Vec<char> = letters.chars().collect();
    chars.sort_unstable();
    chars.dedup();
    chars
}
