//! Parallel search over every cube arrangement.
//!
//! The arrangement stream is cut into batches and pushed through a bounded
//! work queue to a dedicated `rayon` pool. Each worker expands its batch into
//! a set of its own and sends that set back; the calling thread merges the
//! sets as they arrive, so there is no shared mutable state between workers.

use crate::arrangement::{arrangement_count, arrangements, Arrangement, Arrangements};
use crate::batch::{batch_count, batch_size, Batches};
use crate::candidates::CandidateSet;
use crate::cube::CubePool;
use crate::error::CubeError;
use crate::expansion::expand_batch;
use crate::progress::{ProgressHandle, ProgressReporter};
use crate::sink::{CandidateSink, NullSink};
use crate::BATCHES_PER_WORKER;
use crossbeam_channel::{bounded, Receiver, Sender};
use log::{debug, error, info, warn};
use rayon::ThreadPoolBuilder;
use std::any::Any;
use std::collections::HashSet;
use std::panic::{self, AssertUnwindSafe};
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;

type Job = (usize, Vec<Arrangement>);

/// Tuning knobs for the search
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SearchConfig {
    pub workers: usize,
    pub batches_per_worker: usize,
}

impl Default for SearchConfig {
    fn default() -> Self {
        Self {
            workers: rayon::current_num_threads(),
            batches_per_worker: BATCHES_PER_WORKER,
        }
    }
}

impl SearchConfig {
    pub fn with_workers(mut self, workers: usize) -> Self {
        self.workers = workers.max(1);
        self
    }

    pub fn with_batches_per_worker(mut self, batches: usize) -> Self {
        self.batches_per_worker = batches.max(1);
        self
    }
}

/// Everything known about a search before any batch is dispatched.
#[derive(Debug, Clone)]
pub struct SearchPlan {
    pool: CubePool,
    length: usize,
    arrangements: usize,
    batch_size: usize,
    batches: usize,
}

impl SearchPlan {
    /// The pool actually searched, doubled when needed
    pub fn pool(&self) -> &CubePool {
        &self.pool
    }

    pub fn length(&self) -> usize {
        self.length
    }

    pub fn arrangements(&self) -> usize {
        self.arrangements
    }

    pub fn batch_size(&self) -> usize {
        self.batch_size
    }

    pub fn batches(&self) -> usize {
        self.batches
    }

    /// Fresh lazy stream of the plan's batches
    pub fn batch_stream(&self) -> Batches<Arrangements> {
        Batches::new(arrangements(self.pool.len(), self.length), self.batch_size)
    }
}

#[derive(Debug)]
pub struct SearchOutcome {
    pub candidates: CandidateSet,
    pub batches: usize,
}

struct BatchResult {
    index: usize,
    candidates: Result<HashSet<String>, CubeError>,
}

pub struct SearchEngine {
    config: SearchConfig,
    cancel: Arc<AtomicBool>,
}

impl SearchEngine {
    pub fn new(config: SearchConfig) -> Self {
        Self {
            config,
            cancel: Arc::new(AtomicBool::new(false)),
        }
    }

    pub fn config(&self) -> &SearchConfig {
        &self.config
    }

    /// Flag that stops dispatching new batches once set. Batches already
    /// handed to workers still complete.
    pub fn cancel_flag(&self) -> Arc<AtomicBool> {
        self.cancel.clone()
    }

    pub fn plan(&self, base: &CubePool, length: usize) -> Result<SearchPlan, CubeError> {
        let pool = base.for_word_length(length)?;
        let arrangements = arrangement_count(pool.len(), length);
        let batch_size = batch_size(
            arrangements,
            self.config.workers,
            self.config.batches_per_worker,
        );
        let batches = batch_count(arrangements, batch_size);

        info!(
            "planned {} arrangements of {} out of {} cubes in {} batches of {}",
            arrangements,
            length,
            pool.len(),
            batches,
            batch_size
        );

        Ok(SearchPlan {
            pool,
            length,
            arrangements,
            batch_size,
            batches,
        })
    }

    /// Run a plan to completion.
    ///
    /// New candidates are forwarded to `sink` as batches arrive and every
    /// completed batch advances `progress` once. A sink error or a worker
    /// panic stops dispatching, lets in-flight batches drain and is returned.
    pub fn execute<S>(
        &self,
        plan: &SearchPlan,
        sink: &mut S,
        progress: &ProgressHandle,
    ) -> Result<SearchOutcome, CubeError>
    where
        S: CandidateSink + ?Sized,
    {
        let workers = self.config.workers.max(1);
        let threads = ThreadPoolBuilder::new()
            .num_threads(workers + 1)
            .thread_name(|i| format!("cube-search-{}", i))
            .build()?;

        let (job_tx, job_rx) = bounded::<Job>(workers);
        let (result_tx, result_rx) = bounded::<BatchResult>(workers);
        let abort = AtomicBool::new(false);
        let cancel: &AtomicBool = &self.cancel;
        let stop = (cancel, &abort);
        let pool = &plan.pool;

        let mut candidates = CandidateSet::new();
        let mut completed = 0;
        let mut failure: Option<CubeError> = None;

        threads.in_place_scope(|scope| {
            let batches = plan.batch_stream();
            scope.spawn(move |_| dispatch(batches, job_tx, stop));
            for worker in 0..workers {
                let job_rx = job_rx.clone();
                let result_tx = result_tx.clone();
                scope.spawn(move |_| expand_worker(worker, pool, job_rx, result_tx));
            }
            drop(job_rx);
            drop(result_tx);

            for result in result_rx.iter() {
                completed += 1;
                progress.advance();
                if failure.is_some() {
                    continue;
                }

                match result.candidates {
                    Ok(batch) => {
                        let produced = batch.len();
                        let fresh = candidates.absorb(batch);
                        debug!(
                            "batch {} produced {} candidates, {} new",
                            result.index,
                            produced,
                            fresh.len()
                        );
                        if let Err(e) = sink.accept(&fresh) {
                            error!("writing batch {} failed: {}", result.index, e);
                            failure = Some(CubeError::Sink(e));
                            abort.store(true, Ordering::Relaxed);
                        }
                    }
                    Err(e) => {
                        error!("{}", e);
                        failure = Some(e);
                        abort.store(true, Ordering::Relaxed);
                    }
                }
            }
        });

        if failure.is_none() {
            if let Err(e) = sink.flush() {
                failure = Some(CubeError::Sink(e));
            }
        }
        if let Some(e) = failure {
            return Err(e);
        }
        if completed < plan.batches {
            warn!(
                "search cancelled after {} of {} batches",
                completed, plan.batches
            );
            return Err(CubeError::Cancelled);
        }

        info!(
            "{} batches produced {} distinct candidates",
            completed,
            candidates.len()
        );
        Ok(SearchOutcome {
            candidates,
            batches: completed,
        })
    }

    /// Plan and execute without a sink or a visible progress bar.
    pub fn search(&self, base: &CubePool, length: usize) -> Result<CandidateSet, CubeError> {
        let plan = self.plan(base, length)?;
        let reporter = ProgressReporter::hidden(plan.batches());
        let outcome = self.execute(&plan, &mut NullSink, &reporter.handle());
        reporter.finish()?;
        Ok(outcome?.candidates)
    }
}

fn dispatch(
    batches: Batches<Arrangements>,
    queue: Sender<Job>,
    (cancel, abort): (&AtomicBool, &AtomicBool),
) {
    for (index, batch) in batches.enumerate() {
        if cancel.load(Ordering::Relaxed) || abort.load(Ordering::Relaxed) {
            debug!("dispatch stopped before batch {}", index);
            break;
        }
        if queue.send((index, batch)).is_err() {
            break;
        }
    }
}

fn expand_worker(
    worker: usize,
    pool: &CubePool,
    queue: Receiver<Job>,
    results: Sender<BatchResult>,
) {
    while let Ok((index, batch)) = queue.recv() {
        let candidates = panic::catch_unwind(AssertUnwindSafe(|| expand_batch(pool, &batch)))
            .map_err(|payload| CubeError::WorkerFailed {
                batch: index,
                reason: panic_message(payload.as_ref()),
            });
        if results.send(BatchResult { index, candidates }).is_err() {
            break;
        }
    }
    debug!("worker {} finished", worker);
}

fn panic_message(payload: &(dyn Any + Send)) -> String {
    if let Some(s) = payload.downcast_ref::<&str>() {
        s.to_string()
    } else if let Some(s) = payload.downcast_ref::<String>() {
        s.clone()
    } else {
        "unknown panic".to_string()
    }
}
