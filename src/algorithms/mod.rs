//! FFT Algorithm Implementations
//!
//! Both algorithms compute the same radix-2 decimation-in-time transform and leave the
//! coefficients in natural order. Neither one normalizes; the `1/sqrt(N)` scaling is applied
//! once by the caller after the whole transform has run.
//!
//! ## Available Algorithms
//!
//! - **Recursive**: splits the signal into even and odd indexed halves, copies each into a fresh
//!   buffer, transforms them recursively and combines. Simple, but allocates at every level.
//!
//! - **Iterative**: bit reverses the signal in place, then runs the same combine step bottom-up
//!   over blocks of size 2, 4, ..., N. No allocations.

pub mod iterative;
pub mod recursive;

use crate::complex::Complex;
use crate::twiddles::Twiddles;

/// Combines two half-size transforms into one.
///
/// `evens` and `odds` hold the transforms of the even and odd indexed samples. The result is
/// written to `out_lo` (indices `0..N/2`) and `out_hi` (indices `N/2..N`).
#[inline]
pub(crate) fn combine(
    evens: &[Complex],
    odds: &[Complex],
    out_lo: &mut [Complex],
    out_hi: &mut [Complex],
) {
    let chunk_size = evens.len() << 1;

    evens
        .iter()
        .zip(odds.iter())
        .zip(out_lo.iter_mut().zip(out_hi.iter_mut()))
        .zip(Twiddles::new(chunk_size))
        .for_each(|(((&p, &odd), (lo, hi)), w)| {
            let q = w * odd;
            *lo = p + q;
            *hi = p - q;
        });
}
