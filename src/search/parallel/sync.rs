//! Cross-worker coordination: round barrier, abort signal, result channel.
//!
//! Workers advance their deepening bound in lockstep through a barrier, and
//! the first worker to find a solution aborts the whole run. The abort
//! releases the barrier, so no peer is left waiting for a worker that
//! already returned. No further protocol exists: there is no graceful
//! shutdown and no result aggregation beyond the winner's single message.

use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::{Arc, Condvar, Mutex};

use crate::search::SearchOutcome;

/// Message a worker sends to the coordinator when it terminates with a
/// solution.
#[derive(Debug)]
pub struct WorkerSolved {
    pub worker_id: usize,
    pub outcome: SearchOutcome,
}

/// Shared coordination state for one run: the abort flag and a barrier whose
/// waiters are released early when the run is aborted.
#[derive(Debug)]
pub struct RunSync {
    parties: usize,
    stop: Arc<AtomicBool>,
    state: Mutex<BarrierState>,
    cond: Condvar,
}

#[derive(Debug)]
struct BarrierState {
    arrived: usize,
    generation: u64,
}

/// What a barrier wait ended with.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BarrierWait {
    /// Every worker arrived; all proceed to the next round.
    Released,
    /// The run was aborted while waiting.
    Aborted,
}

impl RunSync {
    pub fn new(parties: usize) -> Self {
        Self {
            parties: parties.max(1),
            stop: Arc::new(AtomicBool::new(false)),
            state: Mutex::new(BarrierState {
                arrived: 0,
                generation: 0,
            }),
            cond: Condvar::new(),
        }
    }

    /// The stop flag shared with each worker's search driver.
    pub fn stop_flag(&self) -> Arc<AtomicBool> {
        Arc::clone(&self.stop)
    }

    /// End the whole run: set the stop flag and release every barrier
    /// waiter. One-shot and one-way; there is no un-abort.
    pub fn abort(&self) {
        self.stop.store(true, Ordering::SeqCst);
        let _guard = self.lock();
        self.cond.notify_all();
    }

    pub fn is_aborted(&self) -> bool {
        self.stop.load(Ordering::SeqCst)
    }

    /// Block until all workers arrive or the run is aborted.
    pub fn wait(&self) -> BarrierWait {
        let mut state = self.lock();
        if self.is_aborted() {
            return BarrierWait::Aborted;
        }
        state.arrived += 1;
        if state.arrived == self.parties {
            state.arrived = 0;
            state.generation += 1;
            self.cond.notify_all();
            return BarrierWait::Released;
        }
        let generation = state.generation;
        while state.generation == generation && !self.is_aborted() {
            state = self
                .cond
                .wait(state)
                .unwrap_or_else(|poisoned| poisoned.into_inner());
        }
        if state.generation == generation {
            BarrierWait::Aborted
        } else {
            BarrierWait::Released
        }
    }

    fn lock(&self) -> std::sync::MutexGuard<'_, BarrierState> {
        self.state
            .lock()
            .unwrap_or_else(|poisoned| poisoned.into_inner())
    }
}
