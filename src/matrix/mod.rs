//! The square integer matrix type and the naive reference product.
//!
//! The naive product is the correctness baseline the blocked, threaded
//! implementation is checked against.

pub mod naive_ijk;
pub mod square;

pub use naive_ijk::multiply_naive;
pub use square::Matrix;
