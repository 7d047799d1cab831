use num_complex::Complex;
use num_traits::{Float, FloatConst};

/// Twiddle factors of one butterfly group, generated by accumulated rotation.
///
/// The first factor is `1`; every following factor is the previous one multiplied by the
/// stage's base rotation `e^{-2πi/m}`. No trigonometric function is evaluated past
/// construction, so rounding error grows with the group length.
pub(crate) struct Twiddles<T> {
    wm: Complex<T>,
    w: Complex<T>,
}

impl<T: Float + FloatConst> Twiddles<T> {
    /// `span` is the butterfly span `m` of the stage (twice the number of butterflies per group).
    #[cfg(test)]
    pub fn new(span: usize) -> Self {
        Self::from_rotation(base_rotation(span))
    }
}

impl<T: Float> Twiddles<T> {
    /// Starts a fresh sequence at `1` that advances by `wm`
    pub fn from_rotation(wm: Complex<T>) -> Self {
        Self {
            wm,
            w: Complex::new(T::one(), T::zero()),
        }
    }
}

impl<T: Float> Iterator for Twiddles<T> {
    type Item = Complex<T>;

    #[inline]
    fn next(&mut self) -> Option<Complex<T>> {
        let w = self.w;
        self.w = w * self.wm;
        Some(w)
    }
}

/// `e^{-2πi/span}`, the rotation between consecutive twiddles of a stage
pub(crate) fn base_rotation<T: Float + FloatConst>(span: usize) -> Complex<T> {
    let theta = -(T::TAU() / T::from(span).unwrap_or_else(T::infinity));
    Complex::from_polar(T::one(), theta)
}
