//! Per-block compute kernel.
//!
//! `block_dot` fills one S×S block of the product from full rows of A and
//! full columns of B. It is the body every concurrent unit of work runs.

pub mod block_dot;

pub use block_dot::compute_block;
