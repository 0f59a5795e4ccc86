use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum MatmulError {
    /// Operands of different dimension, or a row whose length differs from the row count.
    #[error("dimension mismatch: expected {expected}, got {got}")]
    DimensionMismatch { expected: usize, got: usize },
    /// Zero or non-dividing block size or split count, or N = 0.
    #[error("invalid dimension: {}", invalid_dimension_reason(.dim, .divisor))]
    InvalidDimension { dim: usize, divisor: usize },
    #[error("failed to build worker pool: {0}")]
    WorkerPool(String),
}

fn invalid_dimension_reason(dim: &usize, divisor: &usize) -> String {
    if *dim == 0 {
        "matrix must have at least one row".to_string()
    } else if *divisor == 0 {
        format!("block size or split count of 0 for a {}x{} matrix", dim, dim)
    } else {
        format!("{} does not evenly divide {}", divisor, dim)
    }
}

pub type Result<T> = std::result::Result<T, MatmulError>;
