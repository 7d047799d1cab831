//! Multithreaded Decimation-in-Time FFT
//!
//! The bit-reversal permutation runs once on the calling thread. After that a fixed pool of
//! scoped workers executes the stages: during every stage each worker owns a disjoint,
//! statically assigned block of butterfly groups, and all workers meet at a
//! [`StageBarrier`] before the next stage reads across block boundaries.
//!
use std::marker::PhantomData;
use std::ops::Range;
use std::thread;

use num_complex::Complex;
use num_traits::{Float, FloatConst};
use tracing::{debug, trace, warn};

use crate::algorithms::bit_reversal::bit_reverse_permute;
use crate::barrier::StageBarrier;
use crate::error::{validate_size, FftError};
use crate::kernels::{butterfly_group, stage_span};
use crate::partition::{element_range, group_range};
use crate::twiddles::base_rotation;
use crate::utils::resolve_threads;

/// Upper bound on the worker pool of one transform. Larger requests cannot be served by
/// any host and fail before the data is touched.
const MAX_WORKERS: usize = 1 << 12;

/// The sequence buffer, shared by all workers of one transform.
///
/// Workers carve mutable sub-slices out of it; the partitioning guarantees that the
/// sub-slices taken between two barrier rendezvous never overlap.
struct SharedBuffer<'a, T> {
    ptr: *mut Complex<T>,
    len: usize,
    _marker: PhantomData<&'a mut [Complex<T>]>,
}

// Safety: the buffer is only an exclusive borrow split across threads, see `slice_mut`.
unsafe impl<T: Send> Send for SharedBuffer<'_, T> {}

// Safety: concurrent users only ever access disjoint ranges, see `slice_mut`.
unsafe impl<T: Send> Sync for SharedBuffer<'_, T> {}

impl<'a, T> SharedBuffer<'a, T> {
    fn new(data: &'a mut [Complex<T>]) -> Self {
        Self {
            ptr: data.as_mut_ptr(),
            len: data.len(),
            _marker: PhantomData,
        }
    }

    /// # Safety
    ///
    /// `range` must lie within the buffer, and no other slice obtained from this buffer that
    /// overlaps `range` may be alive while the returned slice is.
    #[allow(clippy::mut_from_ref)]
    unsafe fn slice_mut(&self, range: Range<usize>) -> &mut [Complex<T>] {
        debug_assert!(range.start <= range.end && range.end <= self.len);
        std::slice::from_raw_parts_mut(self.ptr.add(range.start), range.len())
    }
}

/// Multithreaded, in-place, forward DIT FFT.
///
/// `num_threads == 0` selects the host's hardware concurrency. Exactly that many workers are
/// spawned for the transform and joined before returning, even when a stage has fewer
/// groups than workers. The result is identical to [`crate::fft_dit`] for every thread
/// count, as each group is computed by the same kernel in the same order.
///
/// # Errors
///
/// - [`FftError::InvalidSize`] if `data.len()` is not a power of two; `data` is untouched.
/// - [`FftError::WorkerFailure`] if a worker thread panicked or could not be spawned. The
///   remaining workers are released and the contents of `data` are unspecified.
/// - [`FftError::WorkerFailure`] with `stage == 0` if more than 4096 workers are requested;
///   `data` is untouched.
pub fn fft_dit_multithreaded<T>(data: &mut [Complex<T>], num_threads: usize) -> Result<(), FftError>
where
    T: Float + FloatConst + Send + Sync,
{
    fft_dit_multithreaded_with(data, num_threads, butterfly_group)
}

/// Runs the multithreaded engine with `kernel` as the per-group butterfly routine.
pub(crate) fn fft_dit_multithreaded_with<T, K>(
    data: &mut [Complex<T>],
    num_threads: usize,
    kernel: K,
) -> Result<(), FftError>
where
    T: Float + FloatConst + Send + Sync,
    K: Fn(&mut [Complex<T>], Complex<T>) + Sync,
{
    let log_n = validate_size(data.len())?;
    let num_workers = resolve_threads(num_threads);
    if num_workers > MAX_WORKERS {
        warn!(
            requested = num_workers,
            max = MAX_WORKERS,
            "too many fft workers requested"
        );
        return Err(FftError::WorkerFailure {
            worker: MAX_WORKERS,
            stage: 0,
        });
    }
    debug!(
        len = data.len(),
        stages = log_n,
        workers = num_workers,
        "multithreaded fft"
    );

    bit_reverse_permute(data, log_n);
    if log_n == 0 {
        return Ok(());
    }

    let barrier = StageBarrier::new(num_workers);
    let buffer = SharedBuffer::new(data);

    thread::scope(|s| {
        let mut handles = Vec::with_capacity(num_workers);
        for worker in 0..num_workers {
            let (buffer, barrier, kernel) = (&buffer, &barrier, &kernel);
            let spawned = thread::Builder::new()
                .name(format!("fft-worker-{worker}"))
                .spawn_scoped(s, move || {
                    run_worker(worker, num_workers, log_n, buffer, barrier, kernel)
                });

            match spawned {
                Ok(handle) => handles.push(handle),
                Err(err) => {
                    warn!(worker, %err, "failed to spawn fft worker");
                    barrier.abort(FftError::WorkerFailure { worker, stage: 0 });
                    break;
                }
            }
        }

        for (worker, handle) in handles.into_iter().enumerate() {
            record_join(&barrier, worker, handle.join());
        }
    });

    match barrier.failure() {
        Some(failure) => {
            warn!(%failure, "fft aborted");
            Err(failure)
        }
        None => Ok(()),
    }
}

/// Reports a worker whose thread ended in a panic. Its unwind guard normally breaks the
/// barrier first, so this only records a failure when none is known yet.
fn record_join(barrier: &StageBarrier, worker: usize, joined: thread::Result<()>) {
    if joined.is_err() {
        barrier.abort(FftError::WorkerFailure { worker, stage: 0 });
    }
}

fn run_worker<T, K>(
    worker: usize,
    num_workers: usize,
    log_n: usize,
    buffer: &SharedBuffer<'_, T>,
    barrier: &StageBarrier,
    kernel: &K,
) where
    T: Float + FloatConst,
    K: Fn(&mut [Complex<T>], Complex<T>),
{
    let mut guard = barrier.unwind_guard(worker);

    for stage in 1..=log_n {
        guard.stage = stage;
        let span = stage_span(stage);
        let num_groups = buffer.len >> stage;

        let groups = match group_range(worker, num_workers, num_groups) {
            Ok(groups) => groups,
            Err(err) => {
                barrier.abort(err);
                return;
            }
        };
        trace!(worker, stage, ?groups, "stage assignment");

        if !groups.is_empty() {
            let wm = base_rotation(span);
            // Safety: ranges handed out for one stage are disjoint across workers, and
            // the barrier below separates them from the ranges of the next stage.
            let block = unsafe { buffer.slice_mut(element_range(&groups, span)) };
            block
                .chunks_exact_mut(span)
                .for_each(|group| kernel(group, wm));
        }

        if barrier.wait().is_err() {
            return;
        }
    }
}
