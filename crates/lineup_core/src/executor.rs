//! Parallel dispatch
//!
//! Evaluation code only needs one capability: run a batch of independent
//! tasks and hand back every result, in no particular order. [`Executor`]
//! names that capability so the simulation layers never depend on a
//! specific worker pool.

use crate::error::{Result, SimError};
use rayon::prelude::*;
use rayon::{ThreadPool, ThreadPoolBuilder};
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;

pub trait Executor: Send + Sync {
    /// Apply `f` to every item and collect the results. Result order is
    /// unspecified.
    fn map<I, R, F>(&self, items: I, f: F) -> Vec<R>
    where
        I: IntoIterator,
        I::IntoIter: Send,
        I::Item: Send,
        R: Send,
        F: Fn(I::Item) -> R + Send + Sync;
}

/// Runs tasks on a rayon pool: either the global one or a dedicated pool
/// with a fixed number of workers.
#[derive(Debug, Clone, Default)]
pub struct RayonExecutor {
    pool: Option<Arc<ThreadPool>>,
}

impl RayonExecutor {
    /// Use the global rayon pool.
    pub fn global() -> Self {
        Self { pool: None }
    }

    /// Use a dedicated pool of `workers` threads, or the global pool when
    /// `workers` is `None`.
    pub fn new(workers: Option<usize>) -> Result<Self> {
        let Some(workers) = workers else {
            return Ok(Self::global());
        };

        let pool = ThreadPoolBuilder::new()
            .num_threads(workers)
            .thread_name(|i| format!("lineup-worker-{i}"))
            .build()
            .map_err(|err| SimError::WorkerPool(err.to_string()))?;

        log::debug!("Started worker pool with {} threads", workers);
        Ok(Self { pool: Some(Arc::new(pool)) })
    }

    pub fn workers(&self) -> usize {
        match &self.pool {
            Some(pool) => pool.current_num_threads(),
            None => rayon::current_num_threads(),
        }
    }
}

impl Executor for RayonExecutor {
    fn map<I, R, F>(&self, items: I, f: F) -> Vec<R>
    where
        I: IntoIterator,
        I::IntoIter: Send,
        I::Item: Send,
        R: Send,
        F: Fn(I::Item) -> R + Send + Sync,
    {
        let iter = items.into_iter();
        let run = move || iter.par_bridge().map(f).collect::<Vec<R>>();
        match &self.pool {
            Some(pool) => pool.install(run),
            None => run(),
        }
    }
}

/// Runs tasks one after another on the calling thread.
#[derive(Debug, Clone, Copy, Default)]
pub struct SequentialExecutor;

impl Executor for SequentialExecutor {
    fn map<I, R, F>(&self, items: I, f: F) -> Vec<R>
    where
        I: IntoIterator,
        I::IntoIter: Send,
        I::Item: Send,
        R: Send,
        F: Fn(I::Item) -> R + Send + Sync,
    {
        items.into_iter().map(f).collect()
    }
}

/// Cooperative stop signal for long sweeps. Clones share the same flag.
#[derive(Debug, Clone, Default)]
pub struct CancellationToken {
    cancelled: Arc<AtomicBool>,
}

impl CancellationToken {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn cancel(&self) {
        self.cancelled.store(true, Ordering::Relaxed);
    }

    pub fn is_cancelled(&self) -> bool {
        self.cancelled.load(Ordering::Relaxed)
    }
}
