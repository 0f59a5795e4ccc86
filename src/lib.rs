//! Block-decomposed integer matrix multiplication.
//!
//! The N×N product is cut into (N/S)×(N/S) square blocks of size S. Each
//! block is an independent unit of work: it reads all of A and B and writes
//! only its own cells, so blocks run concurrently without locks. The call
//! returns once every block has finished.
//!
//! ## Usage
//!
//! ```
//! use block_matmul::{Matrix, multiply};
//!
//! let a = Matrix::from_rows(vec![vec![1, 2, -1], vec![0, 2, 1], vec![1, 1, 1]]).unwrap();
//! let b = Matrix::from_rows(vec![vec![0, 2, 1], vec![1, 1, 1], vec![1, 2, -1]]).unwrap();
//!
//! let c = multiply(&a, &b, 1).unwrap();
//! assert_eq!(c.to_rows(), vec![vec![1, 2, 4], vec![3, 4, 1], vec![2, 5, 1]]);
//! ```
//!
//! To bound the number of threads, use [`multiply_with_workers`]:
//!
//! ```
//! use block_matmul::{Matrix, multiply_with_workers};
//!
//! let a = Matrix::identity(6).unwrap();
//! let c = multiply_with_workers(&a, &a, 2, 4).unwrap();
//! assert_eq!(c, a);
//! ```
//!
//! ## What's inside
//!
//! - `matrix`: square matrix type and the naive i-j-k reference product
//! - `blocked`: block plan and disjoint mutable block views
//! - `kernels`: the per-block dot-product kernel
//! - `threaded`: per-block rayon tasks on a dedicated pool, joined before return

pub mod blocked;
pub mod error;
pub mod kernels;
pub mod matrix;
pub mod threaded;

pub use blocked::{BlockCoord, BlockPlan};
pub use error::{MatmulError, Result};
pub use matrix::{Matrix, multiply_naive};

/// Matrix multiply: C = A × B, one concurrent unit of work per S×S block.
///
/// Uses as many worker threads as the machine offers, but at least two
/// and never more than there are blocks. Block size does not change the
/// result.
///
/// # Errors
///
/// - `DimensionMismatch` if A and B differ in dimension.
/// - `InvalidDimension` if `block_size` is 0 or does not divide N.
/// - `WorkerPool` if the worker threads cannot be spawned.
///
/// Dimension errors are reported before any thread is spawned.
pub fn multiply(a: &Matrix, b: &Matrix, block_size: usize) -> Result<Matrix> {
    multiply_with_workers(a, b, block_size, threaded::default_worker_count())
}

/// Same as [`multiply`] but with at most `max_workers` threads.
///
/// `max_workers` of 0 is treated as 1.
pub fn multiply_with_workers(
    a: &Matrix,
    b: &Matrix,
    block_size: usize,
    max_workers: usize,
) -> Result<Matrix> {
    check_same_dim(a, b)?;
    let plan = BlockPlan::new(a.dim(), block_size)?;
    threaded::multiply_blocks_mt(a, b, &plan, max_workers)
}

/// Same as [`multiply`], sized by the number of blocks per axis instead of
/// the block size: S = N / `splits`.
///
/// # Errors
///
/// - `DimensionMismatch` if A and B differ in dimension.
/// - `InvalidDimension` if `splits` is 0 or does not divide N.
pub fn multiply_split(a: &Matrix, b: &Matrix, splits: usize) -> Result<Matrix> {
    check_same_dim(a, b)?;
    let plan = BlockPlan::from_splits(a.dim(), splits)?;
    threaded::multiply_blocks_mt(a, b, &plan, threaded::default_worker_count())
}

fn check_same_dim(a: &Matrix, b: &Matrix) -> Result<()> {
    if a.dim() != b.dim() {
        return Err(MatmulError::DimensionMismatch {
            expected: a.dim(),
            got: b.dim(),
        });
    }
    Ok(())
}
