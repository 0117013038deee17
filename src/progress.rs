//! Progress reporting on a separate thread.
//!
//! The search sends one [`ProgressEvent::Advance`] per completed batch over a
//! channel; the reporter thread turns those into an `indicatif` progress bar.
//! The channel holds one slot per expected event, so senders never wait on
//! the display.

use crate::error::CubeError;
use crossbeam_channel::{bounded, Receiver, Sender};
use indicatif::{ProgressBar, ProgressStyle};
use std::thread::{self, JoinHandle};

const BAR_TEMPLATE: &str = "Generating candidates [{elapsed_precise}] {wide_bar} {pos}/{len} batches";

/// Message sent to the reporter thread.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ProgressEvent {
    /// One batch finished
    Advance,
    /// No more events will follow
    Finished,
}

/// What the reporter observed before it stopped.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ProgressSummary {
    pub advances: usize,
    /// Whether the end-of-stream sentinel arrived (as opposed to every
    /// sender being dropped)
    pub finished: bool,
}

/// Cloneable sending side handed to the search.
#[derive(Debug, Clone)]
pub struct ProgressHandle {
    sender: Sender<ProgressEvent>,
}

impl ProgressHandle {
    /// Signal one completed batch. A reporter that already stopped is ignored.
    pub fn advance(&self) {
        let _ = self.sender.send(ProgressEvent::Advance);
    }
}

/// Owner of the reporter thread.
pub struct ProgressReporter {
    sender: Sender<ProgressEvent>,
    handle: JoinHandle<ProgressSummary>,
}

impl ProgressReporter {
    /// Start a reporter expecting `total` advances, drawing onto `bar`.
    pub fn spawn(total: usize, bar: ProgressBar) -> Self {
        let (sender, receiver) = bounded(total + 1);
        bar.set_length(total as u64);
        let handle = thread::spawn(move || observe(receiver, bar));
        Self { sender, handle }
    }

    /// Reporter drawing a bar on stderr
    pub fn with_bar(total: usize) -> Self {
        let bar = ProgressBar::new(total as u64);
        if let Ok(style) = ProgressStyle::with_template(BAR_TEMPLATE) {
            bar.set_style(style);
        }
        Self::spawn(total, bar)
    }

    /// Reporter that counts events without drawing anything
    pub fn hidden(total: usize) -> Self {
        Self::spawn(total, ProgressBar::hidden())
    }

    pub fn handle(&self) -> ProgressHandle {
        ProgressHandle {
            sender: self.sender.clone(),
        }
    }

    /// Send the end-of-stream sentinel and wait for the thread to exit.
    pub fn finish(self) -> Result<ProgressSummary, CubeError> {
        let _ = self.sender.send(ProgressEvent::Finished);
        drop(self.sender);
        self.handle.join().map_err(|_| CubeError::ReporterFailed)
    }
}

fn observe(receiver: Receiver<ProgressEvent>, bar: ProgressBar) -> ProgressSummary {
    let mut summary = ProgressSummary::default();
    loop {
        match receiver.recv() {
            Ok(ProgressEvent::Advance) => {
                summary.advances += 1;
                bar.inc(1);
            }
            Ok(ProgressEvent::Finished) => {
                summary.finished = true;
                bar.finish();
                break;
            }
            Err(_) => {
                bar.abandon();
                break;
            }
        }
    }
    summary
}
