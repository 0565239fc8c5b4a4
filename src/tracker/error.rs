//! Error type for tracker contract violations.

use thiserror::Error;

/// Errors reported by the tracker when a caller breaks the input contract.
///
/// Every variant is raised before any tracker state is touched, so a rejected
/// frame leaves identities, positions and counters exactly as they were.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum TrackerError {
    /// A detection box with a non-positive width or height, or one whose
    /// bottom-right corner falls outside the `i32` coordinate range.
    #[error("detection {index} has an invalid box of {width}x{height}")]
    InvalidBox {
        index: usize,
        width: i32,
        height: i32,
    },
    /// Parallel box and category sequences of different lengths.
    #[error("got {boxes} boxes but {categories} categories")]
    LengthMismatch { boxes: usize, categories: usize },
    /// A label outside the closed category set.
    #[error("unknown category label `{0}`")]
    UnknownCategory(String),
    #[error("invalid tracker config: {0}")]
    InvalidConfig(String),
}
