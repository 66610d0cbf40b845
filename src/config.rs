//! Storage configuration
//!
//! Fixed at construction time; a [`LocalFilesystemStorage`](crate::backends::LocalFilesystemStorage)
//! never mutates its configuration afterwards.

use crate::error::{Result, StorageError};
use std::path::{Path, PathBuf};

/// Default number of offload worker threads
pub const DEFAULT_WORKER_THREADS: usize = 2;

/// Default chunk size for streamed reads and writes (128 KiB)
pub const DEFAULT_CHUNK_SIZE: usize = 128 * 1024;

/// Configuration for the local filesystem backend
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StorageConfig {
    /// Directory used by `store` when the caller gives none
    pub default_path: Option<PathBuf>,

    /// Worker threads in the offload pool for blocking calls
    pub worker_threads: usize,

    /// Bytes per streamed read/write operation
    pub chunk_size: usize,
}

impl Default for StorageConfig {
    fn default() -> Self {
        Self {
            default_path: None,
            worker_threads: DEFAULT_WORKER_THREADS,
            chunk_size: DEFAULT_CHUNK_SIZE,
        }
    }
}

impl StorageConfig {
    /// Set the default destination directory
    #[must_use]
    pub fn with_default_path(mut self, path: impl AsRef<Path>) -> Self {
        self.default_path = Some(path.as_ref().to_path_buf());
        self
    }

    /// Set the offload pool size
    #[must_use]
    pub const fn with_worker_threads(mut self, worker_threads: usize) -> Self {
        self.worker_threads = worker_threads;
        self
    }

    /// Set the streaming chunk size
    #[must_use]
    pub const fn with_chunk_size(mut self, chunk_size: usize) -> Self {
        self.chunk_size = chunk_size;
        self
    }

    /// Validate the configuration
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - `worker_threads` is 0
    /// - `chunk_size` is 0
    pub fn validate(&self) -> Result<()> {
        if self.worker_threads == 0 {
            return Err(StorageError::Config(
                "worker_threads must be greater than 0".to_string(),
            ));
        }

        if self.chunk_size == 0 {
            return Err(StorageError::Config(
                "chunk_size must be greater than 0".to_string(),
            ));
        }

        Ok(())
    }
}
