//! Radix-2 DIT butterfly kernels
//!
//! Both engines funnel through [`butterfly_group`], so a group is always computed with the
//! same sequence of floating-point operations no matter which thread runs it.
//!
use num_complex::Complex;
use num_traits::{Float, FloatConst};

use crate::twiddles::{base_rotation, Twiddles};

/// Butterfly span `m = 2^stage` of a stage
#[inline]
pub(crate) const fn stage_span(stage: usize) -> usize {
    1 << stage
}

/// Runs all butterflies of one group in place.
///
/// `group` holds the `m` elements `data[k..k + m]`, and `wm` is the stage's base rotation
/// `e^{-2πi/m}`. Element `j` of the lower half is combined with element `j + m/2`; the
/// running twiddle starts at `1` and is advanced by `wm` after every butterfly.
#[multiversion::multiversion(targets(
    "x86_64+avx512f+avx512bw+avx512cd+avx512dq+avx512vl",
    "x86_64+avx2+fma",
    "x86_64+sse4.2",
    "x86+avx2+fma",
    "x86+sse4.2",
    "x86+sse2",
    "aarch64+neon",
))]
#[inline]
pub(crate) fn butterfly_group<T: Float>(group: &mut [Complex<T>], wm: Complex<T>) {
    let dist = group.len() >> 1;
    let (lower, upper) = group.split_at_mut(dist);

    lower
        .iter_mut()
        .zip(upper.iter_mut())
        .zip(Twiddles::from_rotation(wm))
        .for_each(|((z0, z1), w)| {
            let t = w * *z1;
            let u = *z0;
            *z0 = u + t;
            *z1 = u - t;
        });
}

/// Runs one full stage over the whole (already permuted) sequence.
pub(crate) fn butterfly_stage<T: Float + FloatConst>(data: &mut [Complex<T>], stage: usize) {
    let span = stage_span(stage);
    let wm = base_rotation(span);

    data.chunks_exact_mut(span)
        .for_each(|group| butterfly_group(group, wm));
}
