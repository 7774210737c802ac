#[cfg(test)]
#[path = "../../tests/unit/utils/parallel_test.rs"]
mod parallel_test;

use super::GenericResult;
use rayon::prelude::*;
use rayon::{ThreadPool as RayonThreadPool, ThreadPoolBuilder};

/// Represents a thread pool wrapper.
pub struct ThreadPool {
    inner: RayonThreadPool,
}

impl ThreadPool {
    /// Creates a new instance of `ThreadPool` with exact amount of threads.
    pub fn new(num_threads: usize) -> GenericResult<Self> {
        ThreadPoolBuilder::new()
            .num_threads(num_threads)
            .thread_name(|idx| format!("tsp-worker-{idx}"))
            .build()
            .map(|inner| Self { inner })
            .map_err(|err| format!("cannot build a thread pool: '{err}'").into())
    }

    /// Returns amount of threads in the pool.
    pub fn size(&self) -> usize {
        self.inner.current_num_threads()
    }

    /// Executes given operation on thread pool.
    pub fn execute<OP, R>(&self, op: OP) -> R
    where
        OP: FnOnce() -> R + Send,
        R: Send,
    {
        self.inner.install(op)
    }
}

/// Maps collection and collects results into vector in parallel.
/// Each item is processed by its own task, results keep the source order.
pub fn parallel_into_collect<T, F, R>(source: Vec<T>, map_op: F) -> Vec<R>
where
    T: Send,
    F: Fn(T) -> R + Sync + Send,
    R: Send,
{
    source.into_par_iter().with_max_len(1).map(map_op).collect()
}
