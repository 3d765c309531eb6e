use thiserror::Error;

pub type Result<T> = std::result::Result<T, GridError>;

/// Failures raised while building or reading a [`GridSnapshot`](crate::grid::GridSnapshot).
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum GridError {
    #[error("invalid grid dimensions {width}x{height}: both must be positive")]
    InvalidDimension { width: u32, height: u32 },

    #[error("pixel ({x}, {y}) is outside the {width}x{height} grid")]
    OutOfRange { x: u32, y: u32, width: u32, height: u32 },

    #[error("grid dimensions {width}x{height} are too large to address")]
    TooLarge { width: u32, height: u32 },

    #[error("pixel buffer has {actual} elements, expected {expected}")]
    BufferSize { expected: usize, actual: usize },
}
