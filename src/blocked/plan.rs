//! Block partitioning of the result matrix.
//!
//! A [`BlockPlan`] is a validated (N, S) pair. Splitting a result buffer
//! through it yields one [`BlockMut`] per S×S block, each holding S row
//! segments borrowed mutably from that buffer. The segments come from
//! `chunks_mut`, so the borrow checker guarantees that no two blocks
//! alias and concurrent writes need no locking.

use crate::error::{MatmulError, Result};

/// Top-left corner of a block within the result matrix.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct BlockCoord {
    pub row: usize,
    pub col: usize,
}

/// Block size S validated against matrix dimension N.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BlockPlan {
    dim: usize,
    block_size: usize,
}

impl BlockPlan {
    /// # Errors
    ///
    /// `InvalidDimension` if `dim` or `block_size` is zero, or if
    /// `block_size` does not divide `dim`.
    pub fn new(dim: usize, block_size: usize) -> Result<Self> {
        if dim == 0 || block_size == 0 || dim % block_size != 0 {
            return Err(MatmulError::InvalidDimension {
                dim,
                divisor: block_size,
            });
        }
        Ok(Self { dim, block_size })
    }

    /// Plan with `splits` blocks along each axis, i.e. S = N / splits.
    ///
    /// # Errors
    ///
    /// `InvalidDimension` if `splits` is zero or does not divide `dim`.
    pub fn from_splits(dim: usize, splits: usize) -> Result<Self> {
        if dim == 0 || splits == 0 || dim % splits != 0 {
            return Err(MatmulError::InvalidDimension {
                dim,
                divisor: splits,
            });
        }
        Self::new(dim, dim / splits)
    }

    pub fn dim(&self) -> usize {
        self.dim
    }

    pub fn block_size(&self) -> usize {
        self.block_size
    }

    /// Blocks along each axis.
    pub fn splits(&self) -> usize {
        self.dim / self.block_size
    }

    pub fn block_count(&self) -> usize {
        self.splits() * self.splits()
    }

    /// Block corners in row-major order.
    pub fn coords(&self) -> impl Iterator<Item = BlockCoord> + '_ {
        let step = self.block_size;
        (0..self.dim).step_by(step).flat_map(move |row| {
            (0..self.dim)
                .step_by(step)
                .map(move |col| BlockCoord { row, col })
        })
    }

    /// Splits a row-major N×N buffer into disjoint block views, ordered
    /// like [`coords`](Self::coords).
    ///
    /// # Panics
    ///
    /// Panics if `out` does not hold exactly N×N elements.
    pub fn split_blocks<'a>(&self, out: &'a mut [i64]) -> Vec<BlockMut<'a>> {
        assert_eq!(
            out.len(),
            self.dim * self.dim,
            "result: expected {}x{}={} elements",
            self.dim,
            self.dim,
            self.dim * self.dim
        );

        let bs = self.block_size;
        let splits = self.splits();
        let mut blocks: Vec<BlockMut<'a>> = self
            .coords()
            .map(|coord| BlockMut {
                coord,
                rows: Vec::with_capacity(bs),
            })
            .collect();

        for (r, row) in out.chunks_mut(self.dim).enumerate() {
            let band = (r / bs) * splits;
            for (block_col, segment) in row.chunks_mut(bs).enumerate() {
                blocks[band + block_col].rows.push(segment);
            }
        }

        blocks
    }
}

/// Mutable view of one S×S block of the result.
#[derive(Debug)]
pub struct BlockMut<'a> {
    coord: BlockCoord,
    rows: Vec<&'a mut [i64]>,
}

impl BlockMut<'_> {
    pub fn coord(&self) -> BlockCoord {
        self.coord
    }

    pub fn size(&self) -> usize {
        self.rows.len()
    }

    /// Row segments of the block, top to bottom. Segment `i` covers
    /// result row `coord.row + i`, columns `coord.col..coord.col + S`.
    pub fn rows_mut(&mut self) -> impl Iterator<Item = &mut [i64]> {
        self.rows.iter_mut().map(|segment| &mut **segment)
    }
}
