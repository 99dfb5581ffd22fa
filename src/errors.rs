use thiserror::Error;

/// A result type for sampling methods
pub type Result<T> = std::result::Result<T, DoeError>;

/// An error raised when a design of experiments cannot be generated
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum DoeError {
    /// When a sample count, a dimension or a strategy option is out of range
    #[error("Invalid argument: {0}")]
    InvalidArgument(String),
    /// When bounds do not match the dimension or have an empty extent
    #[error("Invalid bounds: {0}")]
    InvalidBounds(String),
    /// When the candidate pool is too small to select the requested samples
    #[error("Insufficient candidates: {requested} samples requested from {available} candidates")]
    InsufficientCandidates {
        /// Number of samples requested
        requested: usize,
        /// Number of candidates available
        available: usize,
    },
}
