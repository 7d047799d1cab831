//! Bit-Reversal Permutation
//!
//! Moves element `i` to position `reverse_bits(i)` (over `log2(N)` bits), which turns the
//! input of a decimation-in-time FFT into the order its iterative stages expect.
//! The permutation is an involution: applying it twice restores the original order.
//!
use crate::error::{validate_size, FftError};

/// Applies the bit-reversal permutation to `buf` in place.
///
/// ## References
/// <https://en.wikipedia.org/wiki/Bit-reversal_permutation>
///
/// # Errors
///
/// Returns [`FftError::InvalidSize`] if `buf.len()` is not a power of two. The buffer is
/// left untouched in that case.
pub fn bit_reverse_permutation<T>(buf: &mut [T]) -> Result<(), FftError> {
    let log_n = validate_size(buf.len())?;
    bit_reverse_permute(buf, log_n);
    Ok(())
}

/// Permutes `buf`, whose length must be exactly `2^log_n`.
pub(crate) fn bit_reverse_permute<T>(buf: &mut [T], log_n: usize) {
    debug_assert_eq!(buf.len(), 1 << log_n);

    // sizes 1 and 2 are fixed points
    if log_n < 2 {
        return;
    }

    let shift = usize::BITS as usize - log_n;
    for i in 0..buf.len() {
        let rev = i.reverse_bits() >> shift;
        // each pair is swapped once, from its smaller index
        if i < rev {
            buf.swap(i, rev);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    /// Reverses the `bits` lowest bits of `n` one at a time
    fn reverse_bits_naive(mut n: usize, bits: usize) -> usize {
        let mut reversed = 0;
        for _ in 0..bits {
            reversed = (reversed << 1) | (n & 1);
            n >>= 1;
        }
        reversed
    }

    #[test]
    fn bit_reversal() {
        let n = 3;
        let big_n = 1 << n;
        let mut buf: Vec<f64> = (0..big_n).map(f64::from).collect();
        bit_reverse_permutation(&mut buf).unwrap();
        assert_eq!(buf, vec![0.0, 4.0, 2.0, 6.0, 1.0, 5.0, 3.0, 7.0]);

        let n = 4;
        let big_n = 1 << n;
        let mut buf: Vec<f64> = (0..big_n).map(f64::from).collect();
        bit_reverse_permutation(&mut buf).unwrap();
        assert_eq!(
            buf,
            vec![
                0.0, 8.0, 4.0, 12.0, 2.0, 10.0, 6.0, 14.0, 1.0, 9.0, 5.0, 13.0, 3.0, 11.0, 7.0,
                15.0,
            ]
        );
    }

    #[test]
    fn matches_naive_reversal() {
        for log_n in 0..14 {
            let big_n = 1 << log_n;
            let mut buf: Vec<usize> = (0..big_n).collect();
            bit_reverse_permutation(&mut buf).unwrap();

            buf.iter()
                .enumerate()
                .for_each(|(i, v)| assert_eq!(*v, reverse_bits_naive(i, log_n)));
        }
    }

    #[test]
    fn self_inverse() {
        for log_n in 0..16 {
            let big_n = 1 << log_n;
            let original: Vec<usize> = (0..big_n).map(|i| i * 7 + 3).collect();
            let mut buf = original.clone();

            bit_reverse_permutation(&mut buf).unwrap();
            bit_reverse_permutation(&mut buf).unwrap();

            assert_eq!(buf, original);
        }
    }

    #[test]
    fn small_sizes_are_no_ops() {
        let mut one = vec!['a'];
        bit_reverse_permutation(&mut one).unwrap();
        assert_eq!(one, vec!['a']);

        let mut two = vec!['a', 'b'];
        bit_reverse_permutation(&mut two).unwrap();
        assert_eq!(two, vec!['a', 'b']);
    }

    #[test]
    fn rejects_non_power_of_two() {
        let mut buf: Vec<usize> = (0..12).collect();
        assert_eq!(
            bit_reverse_permutation(&mut buf),
            Err(FftError::InvalidSize { len: 12 })
        );
        assert_eq!(buf, (0..12).collect::<Vec<_>>());

        let mut empty: Vec<usize> = vec![];
        assert_eq!(
            bit_reverse_permutation(&mut empty),
            Err(FftError::InvalidSize { len: 0 })
        );
    }
}
