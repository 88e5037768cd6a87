//! Parallel pairwise matching for one assembly pass.
//!
//! ```text
//!                  job queue                      result channel
//!  coordinator ──▶ [PairJob; N] ──▶ worker 0 ──┐
//!                               ──▶ worker 1 ──┼──▶ (job, outcome) ──▶ coordinator
//!                               ──▶ worker k ──┘
//! ```
//!
//! Workers only read scanners. The coordinator alone moves scanners between
//! the unresolved and resolved sets, after the pass has drained.

use std::sync::atomic::{AtomicBool, Ordering};
use std::thread;

use crossbeam_channel::unbounded;
use log::debug;

use crate::core::{ResolvedScanner, Scanner};
use crate::error::{RegistrationError, Result};
use crate::matching::{OverlapMatcher, OverlapResult};

/// One overlap computation: candidate against a resolved reference.
#[derive(Clone, Copy, Debug)]
pub(super) struct PairJob<'a> {
    /// Position of the reference in resolution order.
    pub reference_index: usize,
    pub reference: &'a ResolvedScanner,
    pub candidate: &'a Scanner,
}

/// Result of a [`PairJob`].
#[derive(Debug)]
pub(super) struct PairOutcome<'a> {
    pub job: PairJob<'a>,
    pub overlap: Option<OverlapResult>,
}

/// Run `jobs` on `workers` scoped threads.
///
/// Outcomes come back in completion order. The first fatal matcher error
/// stops the remaining workers and is returned once all threads have joined.
/// A panicking worker becomes [`RegistrationError::WorkerFailed`], even when
/// several workers panic.
pub(super) fn run_pass<'a, M: OverlapMatcher>(
    matcher: &M,
    jobs: Vec<PairJob<'a>>,
    workers: usize,
) -> Result<Vec<PairOutcome<'a>>> {
    let workers = workers.clamp(1, jobs.len().max(1));
    let abort = AtomicBool::new(false);

    let (job_tx, job_rx) = unbounded::<PairJob<'a>>();
    let (result_tx, result_rx) = unbounded::<(PairJob<'a>, Result<Option<OverlapResult>>)>();

    for job in jobs {
        if job_tx.send(job).is_err() {
            break;
        }
    }
    drop(job_tx);

    thread::scope(|scope| {
        let handles: Vec<_> = (0..workers)
            .map(|worker| {
                let job_rx = job_rx.clone();
                let result_tx = result_tx.clone();
                let abort = &abort;
                scope.spawn(move || {
                    for job in job_rx.iter() {
                        if abort.load(Ordering::Relaxed) {
                            break;
                        }
                        debug!(
                            "Worker {} matching {} against {}",
                            worker,
                            job.candidate.id,
                            job.reference.id()
                        );
                        let outcome = matcher.match_pair(job.reference.scanner(), job.candidate);
                        if outcome.is_err() {
                            abort.store(true, Ordering::Relaxed);
                        }
                        if result_tx.send((job, outcome)).is_err() {
                            break;
                        }
                    }
                })
            })
            .collect();
        drop(result_tx);

        let mut outcomes = Vec::new();
        let mut first_error = None;
        for (job, outcome) in result_rx.iter() {
            match outcome {
                Ok(overlap) => outcomes.push(PairOutcome { job, overlap }),
                Err(e) => {
                    first_error.get_or_insert(e);
                }
            }
        }

        // Every handle must be joined, or the scope re-raises the panic
        let mut panicked = None;
        for handle in handles {
            if let Err(payload) = handle.join() {
                panicked.get_or_insert_with(|| panic_message(&*payload));
            }
        }

        if let Some(message) = panicked {
            return Err(RegistrationError::WorkerFailed(message));
        }
        match first_error {
            Some(e) => Err(e),
            None => Ok(outcomes),
        }
    })
}

fn panic_message(payload: &(dyn std::any::Any + Send)) -> String {
    if let Some(s) = payload.downcast_ref::<&str>() {
        (*s).to_string()
    } else if let Some(s) = payload.downcast_ref::<String>() {
        s.clone()
    } else {
        "worker panicked".to_string()
    }
}
