//! Error types

use thiserror::Error;

/// Errors that can occur while running a transform
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum FftError {
    /// The sequence length is not a power of two (zero included)
    #[error("Invalid transform size {len}: length must be a non-zero power of two")]
    InvalidSize { len: usize },

    /// A worker count of zero reached the partitioner without being resolved
    #[error("Invalid thread count: at least one worker thread is required")]
    InvalidThreadCount,

    /// Separate real and imaginary components of different lengths
    #[error("Length mismatch: {reals} real components but {imags} imaginary components")]
    LengthMismatch { reals: usize, imags: usize },

    /// A worker thread failed while executing a stage; the whole transform is aborted
    #[error("Worker {worker} failed during stage {stage}")]
    WorkerFailure { worker: usize, stage: usize },
}

/// Checks that `len` is a valid transform size and returns `log2(len)`.
pub(crate) fn validate_size(len: usize) -> Result<usize, FftError> {
    if len == 0 || !len.is_power_of_two() {
        return Err(FftError::InvalidSize { len });
    }
    Ok(len.ilog2() as usize)
}
