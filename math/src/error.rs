use thiserror::Error;

/// Common result type used across this crate.
pub type Result<T, E = MathError> = core::result::Result<T, E>;

/// Top-level error type for decoding, enumeration and interpolation.
#[derive(Debug, Clone, Eq, PartialEq, Error)]
#[non_exhaustive]
pub enum MathError {
    #[error("invalid base {0}: expected an integer in 2..=36")]
    InvalidBase(String),
    #[error("invalid digit at position {position} of {value:?} for base {base}")]
    InvalidDigit {
        value: String,
        position: usize,
        base: u32,
    },
    #[error("invalid subset size {size} for {available} points")]
    InvalidSubsetSize { size: usize, available: usize },
    #[error("degenerate subset: x = {0} appears more than once")]
    DegenerateSubset(u64),
    #[error("lagrange coefficient for x = {0} is not an integer")]
    InexactDivision(u64),
}

impl MathError {
    /// Whether this error only disqualifies the subset being interpolated.
    ///
    /// Corrupted shares routinely produce non-integral coefficients, so the
    /// caller skips such subsets instead of aborting.
    pub fn is_subset_local(&self) -> bool {
        matches!(self, MathError::InexactDivision(_))
    }
}
