use cube_words::{ProgressEvent, ProgressReporter, ProgressSummary};
use std::thread;

#[test]
fn test_counts_advances() {
    let reporter = ProgressReporter::hidden(5);
    let handle = reporter.handle();
    for _ in 0..5 {
        handle.advance();
    }

    let summary = reporter.finish().unwrap();
    assert_eq!(
        summary,
        ProgressSummary {
            advances: 5,
            finished: true
        }
    );
}

#[test]
fn test_advances_from_many_threads() {
    let reporter = ProgressReporter::hidden(40);

    let senders: Vec<_> = (0..4)
        .map(|_| {
            let handle = reporter.handle();
            thread::spawn(move || {
                for _ in 0..10 {
                    handle.advance();
                }
            })
        })
        .collect();
    for sender in senders {
        sender.join().unwrap();
    }

    let summary = reporter.finish().unwrap();
    assert_eq!(summary.advances, 40);
    assert!(summary.finished);
}

#[test]
fn test_finish_without_work() {
    let summary = ProgressReporter::hidden(0).finish().unwrap();
    assert_eq!(summary.advances, 0);
    assert!(summary.finished);
}

#[test]
fn test_advance_after_finish_is_ignored() {
    let reporter = ProgressReporter::hidden(1);
    let handle = reporter.handle();
    handle.advance();
    let summary = reporter.finish().unwrap();

    handle.advance();
    assert_eq!(summary.advances, 1);
}

#[test]
fn test_event_variants() {
    assert_ne!(ProgressEvent::Advance, ProgressEvent::Finished);
}
