pub extern crate rustfft;

// export rustfft to ctfft
use rand::{distributions::Uniform, prelude::*};
use rustfft::num_complex::Complex64;
use rustfft::num_traits::Float;
use rustfft::FftPlanner;

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

/// Asserts that two complex numbers, given as `(re, im)` pairs, are approximately equal
/// component-wise.
///
/// # Panics
///
/// Panics if either component of `actual` is too far from the one in `expected`
#[track_caller]
pub fn assert_complex_closeness(actual: (f64, f64), expected: (f64, f64), epsilon: f64) {
    if (actual.0 - expected.0).abs() >= epsilon || (actual.1 - expected.1).abs() >= epsilon {
        panic!(
            "Assertion failed: {actual:?} too far from expected value {expected:?} (with epsilon {epsilon})",
        );
    }
}

/// Generate a random, complex, signal in the provided buffers
///
/// # Panics
///
/// Panics if `reals.len() != imags.len()`
pub fn gen_random_signal<T>(reals: &mut [T], imags: &mut [T])
where
    T: Float + rand::distributions::uniform::SampleUniform,
{
    assert_eq!(
        reals.len(),
        imags.len(),
        "Real and imaginary slices must be of equal length"
    );

    let mut rng = thread_rng();

    let uniform_dist = Uniform::new(T::from(-1.0).unwrap(), T::from(1.0).unwrap());
    for (real, imag) in reals.iter_mut().zip(imags.iter_mut()) {
        *real = uniform_dist.sample(&mut rng);
        *imag = uniform_dist.sample(&mut rng);
    }
}

/// Forward FFT computed by RustFFT, scaled by `1/sqrt(n)` so that it matches an orthonormal
/// transform. Used as the independent reference in tests.
pub fn orthonormal_reference_fft(signal: &[(f64, f64)]) -> Vec<(f64, f64)> {
    let mut buffer: Vec<Complex64> = signal
        .iter()
        .map(|&(re, im)| Complex64::new(re, im))
        .collect();

    let mut planner = FftPlanner::new();
    let fft = planner.plan_fft_forward(buffer.len());
    fft.process(&mut buffer);

    let factor = 1.0 / (signal.len() as f64).sqrt();
    buffer
        .iter()
        .map(|z| (z.re * factor, z.im * factor))
        .collect()
}
