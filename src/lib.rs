//! # Cube Words
//!
//! A multithreaded search for the dictionary words that can be spelled with a
//! set of letter cubes.
//!
//! Every ordered arrangement of `n` cubes from the pool is expanded into all the
//! strings obtained by picking one letter per cube. Arrangements are split into
//! batches and expanded in parallel, the per-batch results are merged into one
//! deduplicated candidate set, and the candidates are finally intersected with
//! a dictionary.

pub mod arrangement;
pub mod batch;
pub mod candidates;
pub mod cube;
pub mod dictionary;
pub mod engine;
pub mod error;
pub mod expansion;
pub mod progress;
pub mod prompt;
pub mod sink;

pub use arrangement::{all_arrangements, arrangement_count, arrangements, Arrangement};
pub use candidates::CandidateSet;
pub use cube::{Cube, CubePool};
pub use dictionary::Dictionary;
pub use engine::{SearchConfig, SearchEngine, SearchOutcome, SearchPlan};
pub use error::CubeError;
pub use progress::{ProgressEvent, ProgressHandle, ProgressReporter, ProgressSummary};
pub use sink::{CandidateSink, LineSink, NullSink};

/// Shortest word length accepted from the user
pub const MIN_WORD_LENGTH: usize = 3;

/// Longest word length accepted from the user
pub const MAX_WORD_LENGTH: usize = 8;

/// Batches handed to each worker when no other value is configured
pub const BATCHES_PER_WORKER: usize = 4;
