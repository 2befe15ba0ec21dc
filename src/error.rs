//! Crate error type.

use thiserror::Error as ThisError;

/// Errors raised by precondition checks before any search work begins.
///
/// Contract violations that can only arise from a bug (an out-of-range
/// city index inside an already-validated [`Tour`](crate::models::Tour))
/// panic instead; see the `# Panics` sections on the affected functions.
#[derive(Debug, Clone, PartialEq, ThisError)]
pub enum Error {
    /// The instance has too few cities for a meaningful tour.
    #[error("at least 2 cities are required, got {0}")]
    TooFewCities(usize),
    /// The RCL control parameter is outside `[0, 1]` or non-finite.
    #[error("alpha must be in [0, 1], got {0}")]
    InvalidAlpha(f64),
    /// The iteration budget is zero.
    #[error("iteration budget must be at least 1")]
    ZeroIterations,
    /// A city sequence that is not a permutation of `0..len`.
    #[error("invalid tour: {0}")]
    InvalidTour(String),
}

pub type Result<T> = std::result::Result<T, Error>;
