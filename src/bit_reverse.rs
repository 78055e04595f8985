//! In-place bit reversal permutation.
//!
//! A decimation-in-time butterfly network consumes its input in bit reversed order: the element
//! at index `i` belongs at the index whose `log2(N)`-bit binary representation is `i` reversed.
//! Applying this permutation up front is what lets the iterative transform work in place without
//! the even/odd copies of the recursive form.

/// Permutes `buf` into bit reversed order.
///
/// `buf.len()` must be a power of two; the caller checks this.
pub(crate) fn bit_reverse_permutation<T>(buf: &mut [T]) {
    let n = buf.len();
    let mut j = 0;

    for i in 1..n {
        let mut bit = n >> 1;

        while (j & bit) != 0 {
            j ^= bit;
            bit >>= 1;
        }
        j ^= bit;

        if i < j {
            buf.swap(i, j);
        }
    }
}
