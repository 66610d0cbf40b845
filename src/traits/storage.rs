//! Storage trait for named binary resources
//!
//! This trait provides a unified interface for storing, fetching, updating and
//! deleting files that can be implemented by the local filesystem backend as
//! well as any remote object-store backend. The backend is chosen when the
//! value is constructed; callers are generic over `S: Storage`.

use crate::error::Result;
use crate::file::File;
use std::path::{Path, PathBuf};

/// Capability contract for a file storage backend
///
/// Every operation is asynchronous and completes exactly once, either with
/// its success value or a [`StorageError`](crate::error::StorageError).
/// No operation blocks the calling thread.
///
/// # Examples
///
/// ```rust,ignore
/// let storage = LocalFilesystemStorage::new(StorageConfig::default())?;
/// let path = storage.store(File::new("test.md", "hello"), Some(dir)).await?;
/// let file = storage.fetch(&path).await?;
/// assert_eq!(file.filename(), "test.md");
/// ```
#[allow(async_fn_in_trait)]
pub trait Storage: Send + Sync + 'static {
    /// Persist a new file and return the resolved path it was written to
    ///
    /// # Parameters
    ///
    /// * `file` - Name and contents to store
    /// * `at` - Destination directory; falls back to the backend's default
    ///
    /// # Errors
    ///
    /// Returns `Err(StorageError)` if:
    /// - No destination could be resolved (`pathRequired`)
    /// - The file's name is empty (`emptyPath`)
    /// - Something already exists at the resolved path (`fileExists`)
    /// - An I/O error occurs (`errno`)
    async fn store(&self, file: File, at: Option<&Path>) -> Result<PathBuf>;

    /// Read an existing file
    ///
    /// # Errors
    ///
    /// Returns `Err(StorageError)` if:
    /// - The path does not exist (`noFile`)
    /// - No file name can be derived from the path (`emptyPath`)
    /// - Its size cannot be determined (`fileSize`)
    /// - An I/O error occurs (`errno`)
    async fn fetch(&self, path: &Path) -> Result<File>;

    /// Replace an existing file's contents and return what is now on disk
    ///
    /// # Errors
    ///
    /// Returns `Err(StorageError)` if the path does not exist (`noFile`),
    /// the overwrite fails (`errno`), or the read-back fails (see [`Storage::fetch`]).
    async fn write(&self, path: &Path, data: &[u8]) -> Result<File>;

    /// Remove an existing file
    ///
    /// # Errors
    ///
    /// Returns `Err(StorageError)` if the path does not exist (`noFile`) or
    /// removal fails (`errno`).
    async fn delete(&self, path: &Path) -> Result<()>;

    /// Backend name for debugging/logging
    fn name(&self) -> &'static str {
        "unknown"
    }
}
