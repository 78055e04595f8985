use std::f64::consts::PI;

use num_traits::One;

use crate::complex::Complex;

/// Yields the successive powers `w^0, w^1, w^2, ...` of the primitive root of unity
/// `w = e^(-2*pi*i / chunk_size)`.
///
/// Each power is obtained from the previous one by a single complex multiplication with `w`,
/// rather than by evaluating `cos`/`sin` per index.
pub(crate) struct Twiddles {
    base: Complex,
    current: Complex,
}

impl Twiddles {
    /// `chunk_size` is the length of the sub-transform being combined; the butterflies of that
    /// combine step consume the first `chunk_size / 2` items.
    pub fn new(chunk_size: usize) -> Self {
        let theta = -2.0 * PI / chunk_size as f64;
        Self {
            base: Complex::from_polar_unit(theta),
            current: Complex::one(),
        }
    }
}

impl Iterator for Twiddles {
    type Item = Complex;

    fn next(&mut self) -> Option<Complex> {
        let w = self.current;
        self.current = self.current * self.base;
        Some(w)
    }
}
