//! Typed harness errors.

use thiserror::Error;

/// Failure of an episode run or series computation.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum HarnessError {
    /// The policy has no action for an observation the environment produced.
    #[error("policy has no action for observation {observation}")]
    MissingAction { observation: String },
    /// A rolling window was zero or longer than the series.
    #[error("invalid rolling window {window} for series of length {len}")]
    InvalidWindow { window: usize, len: usize },
    /// A chart series has differently sized x and y columns.
    #[error("series {label:?} has {x_len} x values but {y_len} y values")]
    SeriesLengthMismatch {
        label: String,
        x_len: usize,
        y_len: usize,
    },
}
