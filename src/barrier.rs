//! Reusable stage barrier for the multithreaded engine
//!
//! Works like [`std::sync::Barrier`], except that it can be broken: once a worker fails,
//! every participant that is waiting or arrives later is released with the recorded error
//! instead of blocking on a rendezvous that can no longer complete.
//!
use std::sync::{Condvar, Mutex, MutexGuard, PoisonError};

use crate::error::FftError;

struct BarrierState {
    arrived: usize,
    generation: u64,
    failure: Option<FftError>,
}

pub(crate) struct StageBarrier {
    state: Mutex<BarrierState>,
    cvar: Condvar,
    num_workers: usize,
}

impl StageBarrier {
    pub fn new(num_workers: usize) -> Self {
        Self {
            state: Mutex::new(BarrierState {
                arrived: 0,
                generation: 0,
                failure: None,
            }),
            cvar: Condvar::new(),
            num_workers,
        }
    }

    /// Blocks until all `num_workers` participants have called `wait` for the current
    /// generation, then releases them together.
    ///
    /// # Errors
    ///
    /// Returns the failure recorded by [`StageBarrier::abort`] if the barrier is broken
    /// before the rendezvous completes.
    pub fn wait(&self) -> Result<(), FftError> {
        let mut state = self.lock();
        if let Some(failure) = state.failure {
            return Err(failure);
        }

        let generation = state.generation;
        state.arrived += 1;
        if state.arrived >= self.num_workers {
            state.arrived = 0;
            state.generation = generation.wrapping_add(1);
            self.cvar.notify_all();
            return Ok(());
        }

        while state.generation == generation && state.failure.is_none() {
            state = self
                .cvar
                .wait(state)
                .unwrap_or_else(PoisonError::into_inner);
        }

        match state.failure {
            Some(failure) if state.generation == generation => Err(failure),
            _ => Ok(()),
        }
    }

    /// Breaks the barrier. The first recorded failure wins.
    pub fn abort(&self, failure: FftError) {
        let mut state = self.lock();
        if state.failure.is_none() {
            state.failure = Some(failure);
        }
        self.cvar.notify_all();
    }

    pub fn failure(&self) -> Option<FftError> {
        self.lock().failure
    }

    /// Returns a guard that breaks the barrier if `worker` unwinds while holding it.
    pub fn unwind_guard(&self, worker: usize) -> UnwindGuard<'_> {
        UnwindGuard {
            barrier: self,
            worker,
            stage: 0,
        }
    }

    // The lock is never held across user code, so a poisoned mutex still holds
    // consistent state.
    fn lock(&self) -> MutexGuard<'_, BarrierState> {
        self.state.lock().unwrap_or_else(PoisonError::into_inner)
    }
}

/// Breaks its barrier with [`FftError::WorkerFailure`] when dropped during a panic.
pub(crate) struct UnwindGuard<'a> {
    barrier: &'a StageBarrier,
    worker: usize,
    /// Stage the worker is currently executing, `0` before the first stage
    pub stage: usize,
}

impl Drop for UnwindGuard<'_> {
    fn drop(&mut self) {
        if std::thread::panicking() {
            self.barrier.abort(FftError::WorkerFailure {
                worker: self.worker,
                stage: self.stage,
            });
        }
    }
}
