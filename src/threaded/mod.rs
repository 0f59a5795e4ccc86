//! Multi-threaded block dispatch.
//!
//! Every block is its own rayon task on a pool built for the call, and the
//! pool is drained before the product is handed back. Worker count adapts
//! to the number of blocks, so a single-block plan runs on one worker.

pub mod dispatch;

pub use dispatch::{MIN_WORKERS, default_worker_count, multiply_blocks_mt};
