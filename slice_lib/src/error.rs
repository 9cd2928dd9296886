use nalgebra::Vector2;
use thiserror::Error;

/// Error type for `slice_lib`
#[derive(Error, Debug, Clone, PartialEq)]
pub enum Error {
    #[error("table size must be at least 2, got {0}")]
    InvalidTableSize(usize),
    #[error("control point position {0} is not a number")]
    InvalidControlPoint(f32),
    #[error("image size mismatch: expected {expected:?}, got {actual:?}")]
    SizeMismatch {
        expected: Vector2<usize>,
        actual: Vector2<usize>,
    },
    #[error("expected {expected} samples, got {actual}")]
    DataLength { expected: usize, actual: usize },
    #[error("reslice axes do not span a plane")]
    DegenerateAxes,
    #[error("parse error on line {line}: {message}")]
    Parse { line: usize, message: String },
}

pub type Result<T> = std::result::Result<T, Error>;
