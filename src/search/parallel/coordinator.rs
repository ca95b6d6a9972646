//! Worker spawning and result collection.
//!
//! One thread per worker, each owning a full copy of the APTA and running the
//! identical deterministic search with its own rank. The sample's automaton
//! is built once and handed to every worker up front; between deepening
//! rounds the workers synchronize on a barrier, and the first solution aborts
//! the run for everyone. The coordinator just collects the winner's message.

use std::sync::Arc;
use std::thread;

use crossbeam_channel::{unbounded, Sender};

use crate::apta::Apta;
use crate::dfa::Dfa;
use crate::sample::Sample;
use crate::search::{Search, SearchOutcome};

use super::config::ParallelConfig;
use super::sync::{BarrierWait, RunSync, WorkerSolved};

/// Result of a parallel run: the first outcome reported, and which worker
/// found it.
#[derive(Debug)]
pub struct ParallelResult {
    pub outcome: SearchOutcome,
    pub worker_id: usize,
}

/// Build the APTA for `sample` and search it with the configured number of
/// workers. Returns `None` only if every worker died without reporting a
/// solution, which a healthy run never does: the deepening bound eventually
/// reaches the APTA size, where the search always succeeds.
pub fn run_parallel_search(sample: &Sample, config: &ParallelConfig) -> Option<ParallelResult> {
    let apta = Apta::from_sample(sample);
    let size = config.num_workers.max(1);
    let sync = Arc::new(RunSync::new(size));
    let (tx, rx) = unbounded::<WorkerSolved>();

    let handles: Vec<_> = (0..size)
        .map(|rank| {
            let apta = apta.clone();
            let sync = Arc::clone(&sync);
            let tx = tx.clone();
            thread::spawn(move || run_worker(rank, size, apta, &sync, &tx))
        })
        .collect();
    drop(tx);

    // First message wins; the channel closes once every worker has returned.
    let result = rx.recv().ok().map(|solved| ParallelResult {
        outcome: solved.outcome,
        worker_id: solved.worker_id,
    });

    for handle in handles {
        let _ = handle.join();
    }
    result
}

/// One worker's iterative-deepening loop. All workers increment the bound in
/// lockstep; whoever finds a solution aborts the run instead of re-joining
/// the barrier.
fn run_worker(rank: usize, size: usize, apta: Apta, sync: &RunSync, tx: &Sender<WorkerSolved>) {
    let mut search = Search::new(apta, rank, size).with_stop(sync.stop_flag());
    let mut max_red = 1;
    loop {
        if let Some(states) = search.run_bounded(max_red) {
            let outcome = SearchOutcome {
                dfa: Dfa::extract(search.apta(), &states),
                states,
                max_red,
            };
            let _ = tx.send(WorkerSolved {
                worker_id: rank,
                outcome,
            });
            sync.abort();
            return;
        }
        if let BarrierWait::Aborted = sync.wait() {
            return;
        }
        max_red += 1;
    }
}
