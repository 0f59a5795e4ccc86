use crate::blocked::BlockMut;
use crate::matrix::Matrix;

/// Computes one block of C = A × B in place.
///
/// Each cell of the block gets the full dot product of its row of A with
/// its column of B, so the block reads all of A and B but writes only its
/// own cells. Overwrites rather than accumulates, and wraps on overflow.
///
/// `a` and `b` must have the dimension the block was planned for.
pub fn compute_block(a: &Matrix, b: &Matrix, block: &mut BlockMut<'_>) {
    let n = a.dim();
    let b = b.as_slice();
    let origin = block.coord();
    debug_assert!(
        origin.row + block.size() <= n && origin.col + block.size() <= n,
        "block at {:?} of size {} overruns a {}x{} matrix",
        origin,
        block.size(),
        n,
        n
    );

    for (dr, segment) in block.rows_mut().enumerate() {
        let a_row = a.row(origin.row + dr);
        for (dc, cell) in segment.iter_mut().enumerate() {
            let col = origin.col + dc;
            *cell = a_row.iter().enumerate().fold(0i64, |acc, (p, &x)| {
                acc.wrapping_add(x.wrapping_mul(b[p * n + col]))
            });
        }
    }
}
