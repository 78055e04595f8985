/// Options to pick how the transform is computed.
///
/// Calling FFT routines without specifying options runs the recursive algorithm. Every choice
/// here yields the same coefficients with the same `1/sqrt(N)` scaling; only speed and memory use
/// differ.
#[non_exhaustive]
#[derive(Debug, Clone, Default)]
pub struct Options {
    pub algorithm: Algorithm,
}

/// Inputs at least this long are transformed iteratively by [`Options::guess_options`].
const ITERATIVE_THRESHOLD: usize = 1 << 16;

impl Options {
    /// Options that run the given algorithm.
    pub fn with_algorithm(algorithm: Algorithm) -> Options {
        Options { algorithm }
    }

    /// Reasonable options for a signal of `input_size` elements.
    pub fn guess_options(input_size: usize) -> Options {
        let mut options = Options::default();
        if input_size >= ITERATIVE_THRESHOLD {
            options.algorithm = Algorithm::Iterative;
        }
        options
    }
}

/// The algorithm used to compute the transform.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Default)]
pub enum Algorithm {
    #[default]
    /// Split into even/odd copies and recurse. Allocates at every level.
    Recursive,
    /// Bit reversal followed by in-place butterfly passes.
    ///
    /// Avoids the per-level allocations, which matters once the signal stops fitting in cache.
    Iterative,
}
