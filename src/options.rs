use crate::utils::{hardware_concurrency, resolve_threads};

/// Inputs with at least this many points are run multithreaded by [`Options::guess_options`].
///
/// Below it, spawning workers and synchronizing `log2(N)` stages costs more than the
/// butterflies themselves.
pub const MULTITHREADED_THRESHOLD: usize = 1 << 14;

/// Options controlling how a transform is executed.
///
/// Calling FFT routines without specifying options will automatically select reasonable defaults
/// depending on the input size and the host.
///
/// The execution mode never changes the result beyond floating-point tolerance, only the time it
/// takes to compute it.
#[non_exhaustive]
#[derive(Debug, Clone, Default)]
pub struct Options {
    pub mode: ExecutionMode,
    /// Worker threads for [`ExecutionMode::MultiThreaded`]. `0` means one per hardware thread.
    pub num_threads: usize,
}

impl Options {
    /// Picks the execution mode for an input of `input_size` points.
    pub fn guess_options(input_size: usize) -> Options {
        let mut options = Options::default();
        if input_size >= MULTITHREADED_THRESHOLD && hardware_concurrency() > 1 {
            options.mode = ExecutionMode::MultiThreaded;
        }
        options
    }

    pub fn single_threaded() -> Options {
        Options::default()
    }

    /// Multithreaded execution with `num_threads` workers (`0` for hardware concurrency).
    pub fn multithreaded(num_threads: usize) -> Options {
        Options {
            mode: ExecutionMode::MultiThreaded,
            num_threads,
        }
    }

    /// The worker count a transform will actually use.
    pub fn resolved_threads(&self) -> usize {
        match self.mode {
            ExecutionMode::SingleThreaded => 1,
            ExecutionMode::MultiThreaded => resolve_threads(self.num_threads),
        }
    }
}

/// The engine a transform runs on.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Default)]
pub enum ExecutionMode {
    #[default]
    /// All stages on the calling thread
    SingleThreaded,
    /// A fixed pool of workers splitting each stage's groups, synchronized per stage
    MultiThreaded,
}
