//! Fan-out of block units over a dedicated rayon worker pool.

use std::num::NonZeroUsize;
use std::thread;

use log::{debug, trace};
use rayon::ThreadPoolBuilder;
use rayon::prelude::*;

use crate::blocked::{BlockMut, BlockPlan};
use crate::error::{MatmulError, Result};
use crate::kernels::compute_block;
use crate::matrix::Matrix;

/// Fewest workers a multiply runs on whenever there is more than one block.
pub const MIN_WORKERS: usize = 2;

/// Multi-threaded block multiplication: one unit of work per block.
///
/// The result is split into disjoint [`BlockMut`] views up front. Each view
/// is its own rayon task, picked up by whichever pool worker is free, so
/// units are scheduled independently and in no fixed order. The pool is
/// built per call with at most `max_workers` threads and `install` returns
/// only after every task has finished, so the caller never observes a
/// partly filled matrix. Units never run on the calling thread.
///
/// # Arguments
///
/// * `max_workers` - Maximum threads (actual may be fewer when there are fewer blocks)
///
/// # Errors
///
/// `DimensionMismatch` if `a`, `b` and `plan` disagree on N, `WorkerPool`
/// if the worker threads cannot be spawned.
pub fn multiply_blocks_mt(
    a: &Matrix,
    b: &Matrix,
    plan: &BlockPlan,
    max_workers: usize,
) -> Result<Matrix> {
    for dim in [a.dim(), b.dim()] {
        if dim != plan.dim() {
            return Err(MatmulError::DimensionMismatch {
                expected: plan.dim(),
                got: dim,
            });
        }
    }

    let mut c = Matrix::zeros(plan.dim())?;
    let workers = choose_worker_count(plan.block_count(), max_workers);

    debug!(
        "multiplying {}x{} in {} blocks of {}x{} on {} worker(s)",
        plan.dim(),
        plan.dim(),
        plan.block_count(),
        plan.block_size(),
        plan.block_size(),
        workers
    );

    let blocks = plan.split_blocks(c.as_mut_slice());
    for_each_block(blocks, workers, |block| compute_block(a, b, block))?;

    Ok(c)
}

/// Runs `f` once per block, each block a separate task on a fresh pool of
/// `workers` threads. Returns after the last task completes; a panicking
/// task is re-raised here.
fn for_each_block<F>(blocks: Vec<BlockMut<'_>>, workers: usize, f: F) -> Result<()>
where
    F: Fn(&mut BlockMut<'_>) + Sync,
{
    let pool = ThreadPoolBuilder::new()
        .num_threads(workers)
        .thread_name(|i| format!("block-matmul-worker-{}", i))
        .build()
        .map_err(|e| MatmulError::WorkerPool(e.to_string()))?;

    pool.install(|| {
        blocks
            .into_par_iter()
            .with_max_len(1)
            .for_each(|mut block| {
                trace!(
                    "worker {:?} computing block at {:?}",
                    rayon::current_thread_index(),
                    block.coord()
                );
                f(&mut block);
            })
    });

    Ok(())
}

/// Machine parallelism, but never fewer than [`MIN_WORKERS`].
pub fn default_worker_count() -> usize {
    thread::available_parallelism()
        .map(NonZeroUsize::get)
        .unwrap_or(1)
        .max(MIN_WORKERS)
}

fn choose_worker_count(units: usize, max_workers: usize) -> usize {
    max_workers.max(1).min(units.max(1))
}
