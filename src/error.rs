//! Error taxonomy for share decoding and interpolation

use num_bigint::BigInt;

/// Result type returned by the decoder and the evaluator.
pub type Result<T> = std::result::Result<T, RecoverError>;

/// Failures of the pure reconstruction core.
///
/// Every variant is deterministic: retrying the same input reproduces it.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum RecoverError {
    #[error("Base {base} is outside the supported range 2..=36")]
    InvalidBase { base: u32 },

    #[error("Character '{digit}' is not a valid digit in base {base}")]
    InvalidDigit { digit: char, base: u32 },

    #[error("Share value has no digits")]
    EmptyValue,

    #[error("Share index {x} appears more than once among the selected shares")]
    DuplicateShareIndex { x: BigInt },

    #[error("Insufficient shares: need at least {required}, but only {available} provided")]
    InsufficientShares { required: usize, available: usize },

    #[error("Interpolated value {numerator}/{denominator} is not an integer")]
    NonIntegralResult {
        numerator: BigInt,
        denominator: BigInt,
    },
}
