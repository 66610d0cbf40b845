//! Bounded worker pool for blocking filesystem calls
//!
//! Metadata queries, whole-file overwrites and removals are plain blocking
//! syscalls. They run on a dedicated compio [`Dispatcher`] so they never
//! occupy the runtime that drives the caller's futures. Results come back
//! through a oneshot receiver, so the caller suspends instead of blocking.

use crate::error::{Result, StorageError};
use compio::dispatcher::Dispatcher;
use std::num::NonZeroUsize;
use tracing::trace;

/// Fixed-size pool of worker threads for blocking jobs
pub struct OffloadPool {
    dispatcher: Dispatcher,
    workers: usize,
}

impl OffloadPool {
    /// Spawn a pool with `workers` threads
    ///
    /// # Errors
    ///
    /// Returns `Err(StorageError)` if:
    /// - `workers` is 0 (`config`)
    /// - The worker threads cannot be spawned (`errno`)
    pub fn new(workers: usize) -> Result<Self> {
        let threads = NonZeroUsize::new(workers).ok_or_else(|| {
            StorageError::Config("worker_threads must be greater than 0".to_string())
        })?;

        let dispatcher = Dispatcher::builder().worker_threads(threads).build()?;

        Ok(Self {
            dispatcher,
            workers,
        })
    }

    /// Number of worker threads
    #[must_use]
    pub const fn workers(&self) -> usize {
        self.workers
    }

    /// Run a blocking closure on the pool and await its result
    ///
    /// # Errors
    ///
    /// Returns `Err(StorageError::Offload)` if the pool refuses the job or
    /// the worker goes away before delivering a result.
    pub async fn run<F, T>(&self, job: F) -> Result<T>
    where
        F: FnOnce() -> T + Send + 'static,
        T: Send + 'static,
    {
        trace!("dispatching blocking job to offload pool");
        let receiver = self
            .dispatcher
            .dispatch(move || async move { job() })
            .map_err(|e| StorageError::Offload(format!("failed to dispatch job: {e:?}")))?;

        receiver
            .await
            .map_err(|e| StorageError::Offload(format!("failed to receive job result: {e:?}")))
    }
}

impl std::fmt::Debug for OffloadPool {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("OffloadPool")
            .field("workers", &self.workers)
            .finish_non_exhaustive()
    }
}
