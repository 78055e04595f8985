//! Synthetic input signals and the plain-text spectrum format used to check results.
//!
//! The text format is one sample per line, written as `re,im`.
use std::f64::consts::PI;
use std::fmt::Write;

use crate::complex::Complex;
use crate::error::FftError;

/// Rounds to two decimal places.
pub fn round(x: f64) -> f64 {
    (x * 100.0).round() / 100.0
}

/// Samples a sum of two complex sinusoids (frequencies 10 and 25, amplitudes 1 and 0.5) at `len`
/// evenly spaced phases over `[0, pi)`. Both components are rounded to two decimals.
pub fn generate_inputs(len: usize) -> Vec<Complex> {
    generate_inputs_iter(len).collect()
}

fn generate_inputs_iter(len: usize) -> impl Iterator<Item = Complex> {
    (0..len).map(move |i| {
        let theta = i as f64 / len as f64 * PI;
        let re = (10.0 * theta).cos() + 0.5 * (25.0 * theta).cos();
        let im = (10.0 * theta).sin() + 0.5 * (25.0 * theta).sin();
        Complex::new(round(re), round(im))
    })
}

/// Same as [`generate_inputs`], but reports a signal too large to allocate instead of aborting.
///
/// # Errors
///
/// Returns [`FftError::SignalTooLarge`] if `len` samples cannot be allocated.
pub fn try_generate_inputs(len: usize) -> Result<Vec<Complex>, FftError> {
    let mut signal = Vec::new();
    signal
        .try_reserve_exact(len)
        .map_err(|_| FftError::SignalTooLarge(len))?;
    signal.extend(generate_inputs_iter(len));
    Ok(signal)
}

/// Formats every sample as `re,im`, one per line.
///
/// Components go through [`round`] before printing, so the text reads back to exactly what
/// [`first_mismatch`] compares against.
pub fn format_spectrum(spectrum: &[Complex]) -> String {
    let mut out = String::with_capacity(spectrum.len() * 12);
    for z in spectrum {
        // writing into a String cannot fail
        let _ = writeln!(out, "{:.2},{:.2}", round(z.real), round(z.imag));
    }
    out
}

/// Parses the output of [`format_spectrum`]. Blank lines are skipped.
///
/// # Errors
///
/// Returns [`FftError::MalformedReference`] for the first line that is not two comma separated
/// floats. Line numbers start at 1.
pub fn parse_reference(text: &str) -> Result<Vec<Complex>, FftError> {
    text.lines()
        .enumerate()
        .filter(|(_, line)| !line.trim().is_empty())
        .map(|(idx, line)| {
            let malformed = || FftError::MalformedReference {
                line: idx + 1,
                content: line.to_string(),
            };

            let (re, im) = line.split_once(',').ok_or_else(malformed)?;
            let re = re.trim().parse::<f64>().map_err(|_| malformed())?;
            let im = im.trim().parse::<f64>().map_err(|_| malformed())?;
            Ok(Complex::new(re, im))
        })
        .collect()
}

/// Index of the first sample of `actual`, rounded to two decimals, that differs from
/// `expected`. A length mismatch is reported at the end of the shorter sequence.
pub fn first_mismatch(actual: &[Complex], expected: &[Complex]) -> Option<usize> {
    let found = actual
        .iter()
        .zip(expected.iter())
        .position(|(a, e)| Complex::new(round(a.real), round(a.imag)) != *e);

    match found {
        Some(idx) => Some(idx),
        None if actual.len() != expected.len() => Some(actual.len().min(expected.len())),
        None => None,
    }
}
