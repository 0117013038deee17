//! Splitting the arrangement stream into contiguous batches.

/// Size of each batch so that roughly `batches_per_worker` batches go to
/// every worker. Never less than one.
pub fn batch_size(total: usize, workers: usize, batches_per_worker: usize) -> usize {
    let target = workers.max(1) * batches_per_worker.max(1);
    (total / target).max(1)
}

/// Number of batches needed to cover `total` items
pub fn batch_count(total: usize, size: usize) -> usize {
    let size = size.max(1);
    total.div_ceil(size)
}

/// Lazy adaptor pulling `size` items at a time from the inner iterator.
///
/// Only the last batch may be shorter than `size`.
pub struct Batches<I> {
    inner: I,
    size: usize,
}

impl<I: Iterator> Batches<I> {
    pub fn new(inner: I, size: usize) -> Self {
        Self {
            inner,
            size: size.max(1),
        }
    }
}

impl<I: Iterator> Iterator for Batches<I> {
    type Item = Vec<I::Item>;

    fn next(&mut self) -> Option<Self::Item> {
        let batch: Vec<_> = self.inner.by_ref().take(self.size).collect();
        if batch.is_empty() {
            None
        } else {
            Some(batch)
        }
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let (low, high) = self.inner.size_hint();
        (
            batch_count(low, self.size),
            high.map(|h| batch_count(h, self.size)),
        )
    }
}
