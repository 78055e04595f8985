//! Iterative, in-place Decimation-in-Time FFT
//!
//! Same transform as the recursive version, unrolled bottom-up.
//!
//! ## Algorithm Overview
//!
//! 1. Apply bit-reversal to input data
//! 2. Start with small butterflies (size 2)
//! 3. Work up to stage `log(N)`, where `N` is the size of the input.
//!
//! After the bit reversal, every block of `chunk_size` elements holds, in its first half, the
//! transform of the even samples of that block and, in its second half, the transform of the odd
//! samples. That is exactly the pair of buffers the recursive form would have built, so the
//! combine step is the same arithmetic, done in place.
//!
use crate::bit_reverse::bit_reverse_permutation;
use crate::complex::Complex;
use crate::twiddles::Twiddles;

/// One butterfly stage over every block of `chunk_size` elements.
#[inline]
fn fft_dit_chunk_n(signal: &mut [Complex], chunk_size: usize) {
    let dist = chunk_size >> 1;

    signal.chunks_exact_mut(chunk_size).for_each(|chunk| {
        let (s0, s1) = chunk.split_at_mut(dist);

        s0.iter_mut()
            .zip(s1.iter_mut())
            .zip(Twiddles::new(chunk_size))
            .for_each(|((lo, hi), w)| {
                let p = *lo;
                let q = w * *hi;
                *lo = p + q;
                *hi = p - q;
            });
    });
}

/// Unnormalized iterative radix-2 DIT FFT.
///
/// `signal.len()` must be a power of two.
pub fn fft_iterative(signal: &mut [Complex]) {
    let n = signal.len();
    if n <= 1 {
        return;
    }

    bit_reverse_permutation(signal);

    let log_n = n.ilog2();
    for stage in 0..log_n {
        let chunk_size = 2 << stage;
        fft_dit_chunk_n(signal, chunk_size);
    }
}
