//! Partitioning of the result matrix into disjoint square blocks.
//!
//! Every block becomes one independent unit of work for the threaded
//! dispatcher.

pub mod plan;

pub use plan::{BlockCoord, BlockMut, BlockPlan};
