//! Error type shared by the whole crate.

use std::io;
use std::path::PathBuf;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum CubeError {
    #[error("dictionary file '{}' not found", .0.display())]
    DictionaryNotFound(PathBuf),

    #[error("failed to read dictionary '{}': {source}", .path.display())]
    DictionaryRead {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("a cube must carry at least one letter")]
    EmptyCube,

    #[error("'{0}' is not a letter")]
    InvalidLetter(char),

    #[error("cannot spell words of length {length} with a pool of {pool_size} cubes")]
    InvalidLength { length: usize, pool_size: usize },

    #[error("worker failed while expanding batch {batch}: {reason}")]
    WorkerFailed { batch: usize, reason: String },

    #[error("failed to write candidates: {0}")]
    Sink(#[source] io::Error),

    #[error(transparent)]
    Io(#[from] io::Error),

    #[error("search cancelled before all batches completed")]
    Cancelled,

    #[error("progress reporter thread panicked")]
    ReporterFailed,

    #[error("failed to start worker pool: {0}")]
    ThreadPool(#[from] rayon::ThreadPoolBuildError),
}
