pub extern crate rustfft;

// export rustfft to stagefft
use rand::{distributions::Uniform, prelude::*, rngs::StdRng};
use rustfft::num_complex::Complex;
use rustfft::num_traits::Float;

/// Asserts that two fp numbers are approximately equal.
///
/// # Panics
///
/// Panics if `actual` and `expected` are too far from each other
#[allow(dead_code)]
#[track_caller]
pub fn assert_float_closeness<T: Float + std::fmt::Display>(actual: T, expected: T, epsilon: T) {
    if (actual - expected).abs() >= epsilon {
        panic!(
            "Assertion failed: {actual} too far from expected value {expected} (with epsilon {epsilon})",
        );
    }
}

/// Asserts that two complex numbers are approximately equal, component-wise.
///
/// # Panics
///
/// Panics if either the real or the imaginary parts are too far from each other
#[track_caller]
pub fn assert_complex_closeness<T: Float + std::fmt::Display>(
    actual: Complex<T>,
    expected: Complex<T>,
    epsilon: T,
) {
    assert_float_closeness(actual.re, expected.re, epsilon);
    assert_float_closeness(actual.im, expected.im, epsilon);
}

/// Generate a random, complex, signal in the provided buffer
pub fn gen_random_signal<T>(signal: &mut [Complex<T>])
where
    T: Float + rand::distributions::uniform::SampleUniform,
{
    let mut rng = thread_rng();

    let uniform_dist = Uniform::new(T::from(-1.0).unwrap(), T::from(1.0).unwrap());
    for z in signal.iter_mut() {
        z.re = uniform_dist.sample(&mut rng);
        z.im = uniform_dist.sample(&mut rng);
    }
}

/// Generate `len` real samples drawn uniformly from `[low, high)` using a seeded rng,
/// so the same seed always yields the same signal.
pub fn gen_seeded_real_signal(len: usize, seed: u64, low: f64, high: f64) -> Vec<f64> {
    let mut rng = StdRng::seed_from_u64(seed);
    let uniform_dist = Uniform::new(low, high);
    (0..len).map(|_| uniform_dist.sample(&mut rng)).collect()
}
