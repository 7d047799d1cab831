//! In-place radix-2 Fast Fourier Transform with single-threaded and multithreaded engines.
//!
//! Both engines run the same iterative decimation-in-time Cooley-Tukey algorithm: the input is
//! bit-reversal permuted, then `log2(N)` butterfly stages combine groups of doubling span.
//! The multithreaded engine splits every stage's groups statically across a fixed pool of
//! workers that meet at a barrier between stages, so it produces the same coefficients as the
//! single-threaded engine.
//!
//! Twiddle factors are generated by accumulated rotation (`w *= wm` after every butterfly)
//! rather than evaluated per butterfly, trading a little accuracy at very large `N` for speed.
//!
//! ```
//! use num_complex::Complex64;
//! use stagefft::{fft, fft_multithreaded};
//!
//! let mut impulse = vec![Complex64::new(0.0, 0.0); 8];
//! impulse[0] = Complex64::new(1.0, 0.0);
//!
//! let mut spread = impulse.clone();
//! fft(&mut spread).unwrap();
//! assert!(spread.iter().all(|z| (z - Complex64::new(1.0, 0.0)).norm() < 1e-12));
//!
//! fft_multithreaded(&mut impulse, 2).unwrap();
//! assert!(impulse.iter().zip(&spread).all(|(a, b)| (a - b).norm() < 1e-12));
//! ```
use num_complex::Complex;
use num_traits::{Float, FloatConst};

pub use crate::algorithms::bit_reversal::bit_reverse_permutation;
pub use crate::algorithms::dit::fft_dit;
pub use crate::algorithms::parallel::fft_dit_multithreaded;
pub use crate::error::FftError;
pub use crate::options::{ExecutionMode, Options};
pub use crate::utils::{combine_re_im, complex_from_reals, hardware_concurrency};

pub mod algorithms;
mod barrier;
mod error;
mod kernels;
pub mod options;
mod partition;
mod twiddles;
pub mod utils;

/// Forward FFT of `data`, in place, on the calling thread.
///
/// # Errors
///
/// Returns [`FftError::InvalidSize`] if `data.len()` is not a power of two.
pub fn fft<T: Float + FloatConst>(data: &mut [Complex<T>]) -> Result<(), FftError> {
    fft_dit(data)
}

/// Forward FFT of `data`, in place, on `num_threads` worker threads.
///
/// `num_threads == 0` uses one worker per hardware thread.
///
/// # Errors
///
/// Returns [`FftError::InvalidSize`] if `data.len()` is not a power of two, and
/// [`FftError::WorkerFailure`] if a worker thread failed.
pub fn fft_multithreaded<T>(data: &mut [Complex<T>], num_threads: usize) -> Result<(), FftError>
where
    T: Float + FloatConst + Send + Sync,
{
    fft_dit_multithreaded(data, num_threads)
}

/// Forward FFT of `data`, in place, executed as described by `opts`.
///
/// # Errors
///
/// See [`fft`] and [`fft_multithreaded`].
pub fn fft_with_opts<T>(data: &mut [Complex<T>], opts: &Options) -> Result<(), FftError>
where
    T: Float + FloatConst + Send + Sync,
{
    match opts.mode {
        ExecutionMode::SingleThreaded => fft_dit(data),
        ExecutionMode::MultiThreaded => fft_dit_multithreaded(data, opts.num_threads),
    }
}

/// Forward FFT of real-valued `samples`, returning the complex coefficients.
///
/// # Errors
///
/// See [`fft_with_opts`].
pub fn fft_real<T>(samples: &[T], opts: &Options) -> Result<Vec<Complex<T>>, FftError>
where
    T: Float + FloatConst + Send + Sync,
{
    let mut data = complex_from_reals(samples);
    fft_with_opts(&mut data, opts)?;
    Ok(data)
}

/// Forward FFT of a signal given as separate real and imaginary components, returning the
/// complex coefficients.
///
/// # Errors
///
/// Returns [`FftError::LengthMismatch`] if `reals.len() != imags.len()`, otherwise see
/// [`fft_with_opts`].
pub fn fft_re_im<T>(reals: &[T], imags: &[T], opts: &Options) -> Result<Vec<Complex<T>>, FftError>
where
    T: Float + FloatConst + Send + Sync,
{
    let mut data = combine_re_im(reals, imags)?;
    fft_with_opts(&mut data, opts)?;
    Ok(data)
}
