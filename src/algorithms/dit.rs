//! Decimation-in-Time (DIT) FFT Implementation
//!
//! The DIT algorithm decomposes the DFT from small to large sub-problems. Input is processed in
//! bit-reversed order, and output is produced in natural order.
//!
//! ## Algorithm Overview
//!
//! 1. Apply bit-reversal to input data
//! 2. Start with small butterflies (size 2)
//! 3. Work up to stage `log(N)`, where `N` is the size of the input.
//!
use num_complex::Complex;
use num_traits::{Float, FloatConst};
use tracing::debug;

use crate::algorithms::bit_reversal::bit_reverse_permute;
use crate::error::{validate_size, FftError};
use crate::kernels::butterfly_stage;

/// Single-threaded, in-place, forward DIT FFT.
///
/// Runs every stage sequentially over the whole sequence. On success `data` holds the
/// discrete Fourier transform of the input, in natural order.
///
/// # Errors
///
/// Returns [`FftError::InvalidSize`] if `data.len()` is not a power of two. `data` is not
/// modified in that case.
pub fn fft_dit<T: Float + FloatConst>(data: &mut [Complex<T>]) -> Result<(), FftError> {
    let log_n = validate_size(data.len())?;
    debug!(len = data.len(), stages = log_n, "single-threaded fft");

    bit_reverse_permute(data, log_n);

    for stage in 1..=log_n {
        butterfly_stage(data, stage);
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use std::ops::Range;

    use utilities::assert_complex_closeness;
    use utilities::rustfft::{num_complex::Complex64, FftPlanner};

    use super::*;

    #[test]
    fn impulse() {
        let mut data = vec![
            Complex64::new(1.0, 0.0),
            Complex64::new(0.0, 0.0),
            Complex64::new(0.0, 0.0),
            Complex64::new(0.0, 0.0),
        ];
        fft_dit(&mut data).unwrap();

        data.iter()
            .for_each(|z| assert_complex_closeness(*z, Complex64::new(1.0, 0.0), 1e-9));
    }

    #[test]
    fn constant_signal_concentrates_in_dc() {
        let big_n = 32;
        let mut data = vec![Complex64::new(2.0, -1.0); big_n];
        fft_dit(&mut data).unwrap();

        assert_complex_closeness(data[0], Complex64::new(64.0, -32.0), 1e-9);
        data.iter()
            .skip(1)
            .for_each(|z| assert_complex_closeness(*z, Complex64::new(0.0, 0.0), 1e-9));
    }

    #[test]
    fn single_point() {
        let mut data = vec![Complex64::new(3.5, -2.0)];
        fft_dit(&mut data).unwrap();
        assert_eq!(data, vec![Complex64::new(3.5, -2.0)]);
    }

    #[test]
    fn fft() {
        let range = Range { start: 1, end: 15 };

        for k in range {
            let n = 1 << k;

            let mut data: Vec<Complex64> = (1..=n)
                .map(|i| Complex64::new(f64::from(i), f64::from(i)))
                .collect();
            fft_dit(&mut data).unwrap();

            let mut buffer: Vec<Complex64> = (1..=n)
                .map(|i| Complex64::new(f64::from(i), f64::from(i)))
                .collect();

            let mut planner = FftPlanner::new();
            let fft = planner.plan_fft_forward(buffer.len());
            fft.process(&mut buffer);

            data.iter()
                .zip(buffer.iter())
                .for_each(|(actual, expected)| assert_complex_closeness(*actual, *expected, 1e-2));
        }
    }

    #[test]
    fn fft_32() {
        let mut data: Vec<Complex<f32>> = (0..64).map(|i| Complex::new(i as f32, 0.0)).collect();
        fft_dit(&mut data).unwrap();

        let mut buffer: Vec<Complex<f32>> = (0..64).map(|i| Complex::new(i as f32, 0.0)).collect();
        FftPlanner::<f32>::new()
            .plan_fft_forward(buffer.len())
            .process(&mut buffer);

        data.iter()
            .zip(buffer.iter())
            .for_each(|(actual, expected)| assert_complex_closeness(*actual, *expected, 0.1));
    }

    #[test]
    fn invalid_size_leaves_data_untouched() {
        let original: Vec<Complex64> = (0..6).map(|i| Complex64::new(i as f64, 0.0)).collect();
        let mut data = original.clone();

        assert_eq!(fft_dit(&mut data), Err(FftError::InvalidSize { len: 6 }));
        assert_eq!(data, original);

        let mut empty: Vec<Complex64> = vec![];
        assert_eq!(fft_dit(&mut empty), Err(FftError::InvalidSize { len: 0 }));
    }
}
