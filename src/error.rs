//! Error types for the burg-forecast library.

use thiserror::Error;

/// Result type alias for forecast operations.
pub type Result<T> = std::result::Result<T, ForecastError>;

/// Errors that can occur during model estimation and forecasting.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum ForecastError {
    /// Input data is empty.
    #[error("empty input data")]
    EmptyData,

    /// Insufficient data points for the operation.
    #[error("insufficient data: need at least {needed}, got {got}")]
    InsufficientData { needed: usize, got: usize },

    /// Invalid parameter value.
    #[error("invalid parameter: {0}")]
    InvalidParameter(String),

    /// Dimension mismatch between data structures.
    #[error("dimension mismatch: expected {expected}, got {got}")]
    DimensionMismatch { expected: usize, got: usize },

    /// Model has not been fitted yet.
    #[error("model must be fitted before prediction")]
    FitRequired,

    /// Missing values (NaN or infinity) detected in data.
    #[error("missing values detected in data")]
    MissingValues,

    /// The Burg recursion collapsed: the total prediction-error energy
    /// vanished at the given stage, so the reflection coefficient is
    /// undefined. Typically caused by a constant or exactly
    /// linearly-recurrent series whose residual energy reaches zero
    /// before the requested order.
    #[error("degenerate recursion: error energy vanished at stage {stage}")]
    DegenerateRecursion { stage: usize },
}
