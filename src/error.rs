use thiserror::Error;

pub type Result<T> = std::result::Result<T, Error>;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum Error {
    /// The present and future grids of an advance have different dimensions.
    #[error("dimension mismatch: present is {present:?}, future is {future:?} (width, height)")]
    DimensionMismatch {
        present: (usize, usize),
        future: (usize, usize),
    },
    #[error("grid dimensions must be positive, got {width}x{height}")]
    EmptyDimensions { width: usize, height: usize },
    #[error("grid of {width}x{height} cells is too large")]
    TooLarge { width: usize, height: usize },
    #[error("cell buffer has length {actual}, expected {expected}")]
    BufferLength { expected: usize, actual: usize },
    #[error("invalid rule: {0}")]
    ParseRule(String),
    #[error("invalid pattern: {0}")]
    ParsePattern(String),
}
