//! Recursive Decimation-in-Time FFT
//!
//! The textbook form of Cooley-Tukey: every call splits its input by index parity into two new
//! buffers, transforms each of them, and combines the results back into the caller's slice.
//!
//! ## Memory
//!
//! Each level allocates two buffers of half the parent's length, for `O(N log N)` transient
//! allocation over the whole recursion tree. Nothing outlives the call.
//!
use crate::algorithms::combine;
use crate::complex::Complex;

/// Unnormalized recursive radix-2 DIT FFT.
///
/// `signal.len()` must be a power of two.
pub fn fft_recursive(signal: &mut [Complex]) {
    let n = signal.len();
    if n <= 1 {
        return;
    }

    // Splitting odd and even
    let (mut evens, mut odds): (Vec<_>, Vec<_>) =
        signal.chunks_exact(2).map(|c| (c[0], c[1])).unzip();

    fft_recursive(&mut evens);
    fft_recursive(&mut odds);

    let (out_lo, out_hi) = signal.split_at_mut(n / 2);
    combine(&evens, &odds, out_lo, out_hi);
}
