//! Utility functions such as building complex sequences and querying the host

use std::num::NonZeroUsize;

use num_complex::Complex;
use num_traits::Float;

use crate::error::FftError;

/// Number of hardware threads available to the process, or `1` if it cannot be determined.
pub fn hardware_concurrency() -> usize {
    std::thread::available_parallelism()
        .map(NonZeroUsize::get)
        .unwrap_or(1)
}

/// Worker count for a requested `num_threads`, where `0` means one per hardware thread.
pub(crate) fn resolve_threads(num_threads: usize) -> usize {
    if num_threads == 0 {
        hardware_concurrency()
    } else {
        num_threads
    }
}

/// Lifts real samples into a complex sequence with zero imaginary parts.
pub fn complex_from_reals<T: Float>(reals: &[T]) -> Vec<Complex<T>> {
    reals.iter().map(|re| Complex::new(*re, T::zero())).collect()
}

/// Utility function to combine separate vectors of real and imaginary components
/// into a single vector of Complex Number Structs.
///
/// # Errors
///
/// Returns [`FftError::LengthMismatch`] if `reals.len() != imags.len()`.
pub fn combine_re_im<T: Float>(reals: &[T], imags: &[T]) -> Result<Vec<Complex<T>>, FftError> {
    if reals.len() != imags.len() {
        return Err(FftError::LengthMismatch {
            reals: reals.len(),
            imags: imags.len(),
        });
    }

    Ok(reals
        .iter()
        .zip(imags.iter())
        .map(|(z_re, z_im)| Complex::new(*z_re, *z_im))
        .collect())
}
