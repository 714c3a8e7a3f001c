//! Error types for Reed-Solomon codec operations

use thiserror::Error;

/// Type alias for Result with RsError
pub type Result<T> = std::result::Result<T, RsError>;

/// Internal cause of a decode failure.
///
/// All of these collapse to [`RsError::Uncorrectable`] at the API boundary;
/// the cause is kept for diagnostics and logged at debug level.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DecodeFailure {
    /// The extended-Euclidean recurrence never reached its stopping
    /// condition within 2t iterations.
    SolverStalled,
    /// The root search found fewer roots than the locator degree.
    TooFewRoots,
    /// A recovered error position lies outside the codeword.
    LocatorOutOfRange,
    /// The locator derivative evaluated to zero at an error position.
    ZeroDerivative,
}

impl std::fmt::Display for DecodeFailure {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            DecodeFailure::SolverStalled => write!(f, "key-equation solver stalled"),
            DecodeFailure::TooFewRoots => write!(f, "too few locator roots"),
            DecodeFailure::LocatorOutOfRange => write!(f, "error position outside codeword"),
            DecodeFailure::ZeroDerivative => write!(f, "zero locator derivative"),
        }
    }
}

/// Errors that can occur during Reed-Solomon operations
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum RsError {
    /// Codec parameters out of range
    #[error("invalid codec parameters: parity length must be even and 0 < parity < codeword length <= 255")]
    InvalidParameters,

    /// Encode/decode input has the wrong length
    #[error("input length mismatch: expected {expected} bytes, got {actual}")]
    InputLength { expected: usize, actual: usize },

    /// Division by the zero element or the zero polynomial
    #[error("division by zero in GF(2^8)")]
    DivisionByZero,

    /// The received block's error pattern exceeds correction capacity
    #[error("uncorrectable error pattern: {0}")]
    Uncorrectable(DecodeFailure),
}
