//! A radix-2 Cooley-Tukey Fast Fourier Transform over [`Complex`] samples.
//!
//! The transform runs in place, uses decimation-in-time and scales its output by `1/sqrt(N)`,
//! which makes it unitary: the energy of the signal is preserved.
//!
//! ```
//! use ctfft::{fft, Complex};
//!
//! let mut signal = vec![Complex::new(1.0, 0.0), Complex::new(1.0, 0.0)];
//! fft(&mut signal).unwrap();
//! assert!((signal[0].real - std::f64::consts::SQRT_2).abs() < 1e-12);
//! ```

use crate::algorithms::iterative::fft_iterative;
use crate::algorithms::recursive::fft_recursive;
pub use crate::complex::Complex;
pub use crate::error::FftError;
use crate::options::{Algorithm, Options};

pub mod algorithms;
mod bit_reverse;
pub mod complex;
pub mod error;
pub mod options;
pub mod signal;
mod twiddles;

/// Forward FFT with orthonormal scaling, computed in place.
///
/// On success `signal[k]` holds the `k`-th DFT coefficient of the original signal multiplied by
/// `1/sqrt(N)`, where `N = signal.len()`.
///
/// # Errors
///
/// Returns [`FftError::InvalidLength`] if `signal.len()` is zero or not a power of two. The
/// signal is left untouched in that case.
pub fn fft(signal: &mut [Complex]) -> Result<(), FftError> {
    fft_with_opts(signal, &Options::default())
}

/// Same as [`fft`], but lets the caller pick the algorithm through [`Options`].
///
/// # Errors
///
/// Returns [`FftError::InvalidLength`] if `signal.len()` is zero or not a power of two.
pub fn fft_with_opts(signal: &mut [Complex], opts: &Options) -> Result<(), FftError> {
    let n = signal.len();
    if !n.is_power_of_two() {
        return Err(FftError::InvalidLength(n));
    }

    match opts.algorithm {
        Algorithm::Recursive => fft_recursive(signal),
        Algorithm::Iterative => fft_iterative(signal),
    }

    // Normalization happens exactly once, after the whole transform
    let factor = 1.0 / (n as f64).sqrt();
    for z in signal.iter_mut() {
        *z *= factor;
    }

    Ok(())
}

/// Forward FFT, with orthonormal scaling, on a slice of [`num_complex::Complex64`].
///
/// The slice is reinterpreted in place, no copy is made.
///
/// # Errors
///
/// Returns [`FftError::InvalidLength`] if `signal.len()` is zero or not a power of two.
#[cfg(feature = "complex-nums")]
pub fn fft_num_complex(signal: &mut [num_complex::Complex64]) -> Result<(), FftError> {
    fft(bytemuck::cast_slice_mut(signal))
}

#[cfg(test)]
mod tests {
    use std::f64::consts::SQRT_2;

    use utilities::{
        assert_complex_closeness, assert_float_closeness, gen_random_signal,
        orthonormal_reference_fft,
    };

    use super::*;

    const ALGORITHMS: [Algorithm; 2] = [Algorithm::Recursive, Algorithm::Iterative];

    fn random_signal(n: usize) -> Vec<Complex> {
        let mut reals = vec![0.0; n];
        let mut imags = vec![0.0; n];
        gen_random_signal(&mut reals, &mut imags);
        reals
            .into_iter()
            .zip(imags)
            .map(|(re, im)| Complex::new(re, im))
            .collect()
    }

    fn energy(signal: &[Complex]) -> f64 {
        signal.iter().map(Complex::norm_sqr).sum()
    }

    #[test]
    fn base_case() {
        for algorithm in ALGORITHMS {
            let mut signal = vec![Complex::new(-2.5, 0.75)];
            fft_with_opts(&mut signal, &Options::with_algorithm(algorithm)).unwrap();
            assert_eq!(signal, vec![Complex::new(-2.5, 0.75)]);
        }
    }

    #[test]
    fn impulse_of_four() {
        for algorithm in ALGORITHMS {
            let mut signal = vec![
                Complex::new(1.0, 0.0),
                Complex::new(0.0, 0.0),
                Complex::new(0.0, 0.0),
                Complex::new(0.0, 0.0),
            ];
            fft_with_opts(&mut signal, &Options::with_algorithm(algorithm)).unwrap();

            for z in &signal {
                assert_complex_closeness((*z).into(), (0.5, 0.0), 1e-12);
            }
        }
    }

    #[test]
    fn constant_pair() {
        for algorithm in ALGORITHMS {
            let mut signal = vec![Complex::new(1.0, 0.0), Complex::new(1.0, 0.0)];
            fft_with_opts(&mut signal, &Options::with_algorithm(algorithm)).unwrap();

            assert_complex_closeness(signal[0].into(), (SQRT_2, 0.0), 1e-12);
            assert_complex_closeness(signal[1].into(), (0.0, 0.0), 1e-12);
        }
    }

    #[test]
    fn normalization_is_applied_once() {
        // A constant signal of ones transforms to sqrt(N) in bin 0. Normalizing at every level
        // of the recursion would instead shrink it much further for N > 2.
        for k in 0..12 {
            let n = 1 << k;
            let mut signal = vec![Complex::new(1.0, 0.0); n];
            fft(&mut signal).unwrap();

            assert_complex_closeness(signal[0].into(), ((n as f64).sqrt(), 0.0), 1e-9);
            for z in &signal[1..] {
                assert_complex_closeness((*z).into(), (0.0, 0.0), 1e-9);
            }
        }
    }

    #[test]
    fn parseval() {
        for algorithm in ALGORITHMS {
            for k in 0..14 {
                let n = 1 << k;
                let mut signal = random_signal(n);
                let energy_in = energy(&signal);

                fft_with_opts(&mut signal, &Options::with_algorithm(algorithm)).unwrap();

                assert_float_closeness(energy(&signal), energy_in, 1e-9 * n as f64);
            }
        }
    }

    #[test]
    fn linearity() {
        let n = 1 << 10;
        let a = random_signal(n);
        let b = random_signal(n);

        let mut sum: Vec<Complex> = a.iter().zip(b.iter()).map(|(x, y)| *x + *y).collect();
        let mut fa = a;
        let mut fb = b;

        fft(&mut sum).unwrap();
        fft(&mut fa).unwrap();
        fft(&mut fb).unwrap();

        sum.iter()
            .zip(fa.iter().zip(fb.iter()))
            .for_each(|(s, (x, y))| assert_complex_closeness((*s).into(), (*x + *y).into(), 1e-9));
    }

    #[test]
    fn length_preserved_and_finite() {
        for k in 0..12 {
            let n = 1 << k;
            let mut signal = random_signal(n);
            fft(&mut signal).unwrap();

            assert_eq!(signal.len(), n);
            assert!(signal.iter().all(Complex::is_finite));
        }
    }

    #[test]
    fn invalid_lengths_are_rejected() {
        for n in [0, 3, 5, 6, 7, 12, 1000] {
            for algorithm in ALGORITHMS {
                let original: Vec<Complex> =
                    (0..n).map(|i| Complex::new(i as f64, 1.0)).collect();
                let mut signal = original.clone();

                let result = fft_with_opts(&mut signal, &Options::with_algorithm(algorithm));

                assert_eq!(result, Err(FftError::InvalidLength(n)));
                assert_eq!(signal, original);
            }
        }
    }

    #[test]
    fn fft_vs_rustfft() {
        for algorithm in ALGORITHMS {
            for k in 1..13 {
                let n = 1 << k;
                let mut signal: Vec<Complex> = (1..=n)
                    .map(|i| Complex::new(f64::from(i), f64::from(i)))
                    .collect();
                let pairs: Vec<(f64, f64)> = signal.iter().map(|z| (*z).into()).collect();
                let expected = orthonormal_reference_fft(&pairs);

                fft_with_opts(&mut signal, &Options::with_algorithm(algorithm)).unwrap();

                signal
                    .iter()
                    .zip(expected)
                    .for_each(|(z, e)| assert_complex_closeness((*z).into(), e, 1e-4));
            }
        }
    }

    #[test]
    fn nan_propagates_without_error() {
        let mut signal = vec![Complex::new(0.0, 0.0); 8];
        signal[3] = Complex::new(f64::NAN, 0.0);

        assert!(fft(&mut signal).is_ok());
        assert!(signal.iter().any(|z| !z.is_finite()));
    }

    #[cfg(feature = "complex-nums")]
    #[test]
    fn num_complex_buffer() {
        use num_complex::Complex64;

        let mut signal = vec![
            Complex64::new(1.0, 0.0),
            Complex64::new(0.0, 0.0),
            Complex64::new(0.0, 0.0),
            Complex64::new(0.0, 0.0),
        ];
        fft_num_complex(&mut signal).unwrap();

        for z in &signal {
            assert_complex_closeness((z.re, z.im), (0.5, 0.0), 1e-12);
        }

        let mut odd = vec![Complex64::new(1.0, 0.0); 3];
        assert_eq!(fft_num_complex(&mut odd), Err(FftError::InvalidLength(3)));
    }
}
