use std::fmt;
use std::ops::RangeInclusive;

use rand::Rng;

use crate::error::{MatmulError, Result};

/// Square N×N matrix of `i64`, stored row-major in one buffer.
///
/// Every constructor guarantees N > 0 and that each row holds exactly N
/// elements, so the multiply paths only need to compare dimensions.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Matrix {
    dim: usize,
    data: Vec<i64>,
}

impl Matrix {
    /// Builds a matrix from nested rows.
    ///
    /// # Errors
    ///
    /// `InvalidDimension` for zero rows, `DimensionMismatch` when any row
    /// length differs from the number of rows.
    ///
    /// # Example
    ///
    /// ```
    /// use block_matmul::Matrix;
    ///
    /// let m = Matrix::from_rows(vec![vec![1, 2], vec![3, 4]]).unwrap();
    /// assert_eq!(m.dim(), 2);
    /// assert_eq!(m.get(1, 0), 3);
    /// ```
    pub fn from_rows(rows: Vec<Vec<i64>>) -> Result<Self> {
        let dim = rows.len();
        if dim == 0 {
            return Err(MatmulError::InvalidDimension { dim, divisor: 0 });
        }

        let mut data = Vec::with_capacity(dim * dim);
        for row in rows {
            if row.len() != dim {
                return Err(MatmulError::DimensionMismatch {
                    expected: dim,
                    got: row.len(),
                });
            }
            data.extend(row);
        }

        Ok(Self { dim, data })
    }

    /// Zero-filled N×N matrix.
    pub fn zeros(dim: usize) -> Result<Self> {
        if dim == 0 {
            return Err(MatmulError::InvalidDimension { dim, divisor: 0 });
        }
        Ok(Self {
            dim,
            data: vec![0; dim * dim],
        })
    }

    pub fn identity(dim: usize) -> Result<Self> {
        let mut m = Self::zeros(dim)?;
        for i in 0..dim {
            m.data[i * dim + i] = 1;
        }
        Ok(m)
    }

    /// Random matrix with entries drawn uniformly from `range`.
    ///
    /// # Panics
    ///
    /// Panics if `range` is empty, e.g. `5..=4`.
    pub fn random<R: Rng>(
        dim: usize,
        range: RangeInclusive<i64>,
        rng: &mut R,
    ) -> Result<Self> {
        if dim == 0 {
            return Err(MatmulError::InvalidDimension { dim, divisor: 0 });
        }
        let data = (0..dim * dim)
            .map(|_| rng.gen_range(range.clone()))
            .collect();
        Ok(Self { dim, data })
    }

    pub fn dim(&self) -> usize {
        self.dim
    }

    /// # Panics
    ///
    /// Panics if `row` or `col` is out of bounds.
    pub fn get(&self, row: usize, col: usize) -> i64 {
        assert!(
            row < self.dim && col < self.dim,
            "index ({}, {}) out of bounds for {}x{}",
            row,
            col,
            self.dim,
            self.dim
        );
        self.data[row * self.dim + col]
    }

    pub fn row(&self, row: usize) -> &[i64] {
        &self.data[row * self.dim..(row + 1) * self.dim]
    }

    /// Row-major view of all N×N elements.
    pub fn as_slice(&self) -> &[i64] {
        &self.data
    }

    pub(crate) fn as_mut_slice(&mut self) -> &mut [i64] {
        &mut self.data
    }

    pub fn to_rows(&self) -> Vec<Vec<i64>> {
        self.data.chunks(self.dim).map(<[i64]>::to_vec).collect()
    }
}

impl fmt::Display for Matrix {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[")?;
        for (i, row) in self.data.chunks(self.dim).enumerate() {
            if i > 0 {
                write!(f, " ")?;
            }
            write!(f, "[")?;
            for (j, v) in row.iter().enumerate() {
                if j > 0 {
                    write!(f, " ")?;
                }
                write!(f, "{}", v)?;
            }
            write!(f, "]")?;
        }
        write!(f, "]")
    }
}
