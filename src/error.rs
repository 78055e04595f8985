use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq)]
pub enum FftError {
    #[error("signal length must be a non-zero power of two (found: {0})")]
    InvalidLength(usize),

    #[error("signal of {0} samples is too large to allocate")]
    SignalTooLarge(usize),

    #[error("malformed reference line {line}: {content:?} (expected \"re,im\")")]
    MalformedReference { line: usize, content: String },
}
