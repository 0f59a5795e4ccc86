use crate::error::{MatmulError, Result};
use crate::matrix::Matrix;

/// Naive matrix multiplication using i-j-k loop order.
///
/// This is the textbook triple-loop implementation on a single thread.
/// Accumulation wraps on overflow, same as the blocked paths, so the two
/// agree bit for bit on any input.
///
/// Use this as a correctness baseline, not for performance.
///
/// # Errors
///
/// `DimensionMismatch` if `a` and `b` differ in dimension.
pub fn multiply_naive(a: &Matrix, b: &Matrix) -> Result<Matrix> {
    if a.dim() != b.dim() {
        return Err(MatmulError::DimensionMismatch {
            expected: a.dim(),
            got: b.dim(),
        });
    }

    let n = a.dim();
    let (a, b) = (a.as_slice(), b.as_slice());
    let mut c = Matrix::zeros(n)?;
    let out = c.as_mut_slice();

    for i in 0..n {
        for j in 0..n {
            let mut sum = 0i64;
            for p in 0..n {
                sum = sum.wrapping_add(a[i * n + p].wrapping_mul(b[p * n + j]));
            }
            out[i * n + j] = sum;
        }
    }

    Ok(c)
}
