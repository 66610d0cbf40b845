//! Local filesystem backend implementation
//!
//! Streams file contents through compio's completion-based I/O (io_uring on
//! Linux) in fixed-size chunks, and sends the calls that can only block
//! (existence and size checks, whole-file overwrite, removal) to a bounded
//! [`OffloadPool`].
//!
//! There is no per-path locking. Concurrent operations on the same path
//! race at the OS level; callers that need ordering must serialise them.

use crate::config::StorageConfig;
use crate::error::{Result, StorageError};
use crate::file::File;
use crate::filesystem::{close_after, read_chunked, write_chunked};
use crate::offload::OffloadPool;
use crate::traits::{FileInspector, OsFileInspector, Storage};
use compio::fs::OpenOptions;
use std::io::{self, Write};
use std::path::{Path, PathBuf};
use std::sync::Arc;
use tracing::debug;

/// Local filesystem backend
///
/// Cloning is cheap: clones share the offload pool and inspector.
#[derive(Clone)]
pub struct LocalFilesystemStorage {
    config: StorageConfig,
    inspector: Arc<dyn FileInspector>,
    pool: Arc<OffloadPool>,
}

impl LocalFilesystemStorage {
    /// Create a backend that inspects paths with the OS `stat`
    ///
    /// # Errors
    ///
    /// Returns `Err(StorageError)` if the configuration is invalid or the
    /// offload pool cannot be started.
    pub fn new(config: StorageConfig) -> Result<Self> {
        Self::with_inspector(config, OsFileInspector)
    }

    /// Create a backend with a custom metadata accessor
    ///
    /// # Errors
    ///
    /// Returns `Err(StorageError)` if the configuration is invalid or the
    /// offload pool cannot be started.
    pub fn with_inspector(config: StorageConfig, inspector: impl FileInspector) -> Result<Self> {
        config.validate()?;
        let pool = OffloadPool::new(config.worker_threads)?;

        debug!(
            workers = config.worker_threads,
            chunk_size = config.chunk_size,
            default_path = ?config.default_path,
            "local storage ready"
        );

        Ok(Self {
            config,
            inspector: Arc::new(inspector),
            pool: Arc::new(pool),
        })
    }

    /// Configuration this backend was built with
    #[must_use]
    pub const fn config(&self) -> &StorageConfig {
        &self.config
    }

    /// Directory used by `store` when none is given
    #[must_use]
    pub fn default_path(&self) -> Option<&Path> {
        self.config.default_path.as_deref()
    }

    /// Join the effective directory and the file's name
    fn resolve_target(&self, file: &File, at: Option<&Path>) -> Result<PathBuf> {
        let dir = at
            .or_else(|| self.default_path())
            .ok_or(StorageError::PathRequired)?;
        if file.filename().is_empty() {
            return Err(StorageError::EmptyPath(dir.display().to_string()));
        }
        Ok(dir.join(file.filename()))
    }

    async fn exists(&self, path: &Path) -> Result<bool> {
        let inspector = Arc::clone(&self.inspector);
        let owned = path.to_path_buf();
        self.pool.run(move || inspector.exists(&owned)).await
    }

    async fn require_existing(&self, path: &Path) -> Result<()> {
        if self.exists(path).await? {
            Ok(())
        } else {
            Err(StorageError::NoFile(path.to_path_buf()))
        }
    }

    async fn file_size(&self, path: &Path) -> Result<usize> {
        let inspector = Arc::clone(&self.inspector);
        let owned = path.to_path_buf();
        let size = self.pool.run(move || inspector.size(&owned)).await?;

        size.ok()
            .and_then(|s| usize::try_from(s).ok())
            .ok_or_else(|| StorageError::FileSize(path.to_path_buf()))
    }

    /// Existence check, size query, then a chunked read of the whole file
    async fn read_file(&self, path: &Path) -> Result<File> {
        self.require_existing(path).await?;

        let filename = path
            .file_name()
            .map(|name| name.to_string_lossy().into_owned())
            .filter(|name| !name.is_empty())
            .ok_or_else(|| StorageError::EmptyPath(path.display().to_string()))?;

        let size = self.file_size(path).await?;

        let handle = compio::fs::File::open(path).await?;
        let payload = read_chunked(&handle, size, self.config.chunk_size).await;
        let payload = close_after(handle, payload, path).await?;

        debug!(path = %path.display(), bytes = payload.len(), "fetched file");
        Ok(File::new(filename, payload))
    }
}

impl std::fmt::Debug for LocalFilesystemStorage {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("LocalFilesystemStorage")
            .field("config", &self.config)
            .field("pool", &self.pool)
            .finish_non_exhaustive()
    }
}

impl Storage for LocalFilesystemStorage {
    async fn store(&self, file: File, at: Option<&Path>) -> Result<PathBuf> {
        let target = self.resolve_target(&file, at)?;
        debug!(path = %target.display(), bytes = file.len(), "storing file");

        // O_CREAT|O_EXCL: existence check and creation are one syscall
        let mut handle = OpenOptions::new()
            .read(true)
            .write(true)
            .create_new(true)
            .open(&target)
            .await
            .map_err(|e| match e.kind() {
                io::ErrorKind::AlreadyExists => StorageError::FileExists(target.clone()),
                _ => StorageError::from(e),
            })?;

        let written = write_chunked(&mut handle, file.payload(), self.config.chunk_size).await;
        let written = close_after(handle, written, &target).await?;

        debug!(path = %target.display(), bytes = written, "stored file");
        Ok(target)
    }

    async fn fetch(&self, path: &Path) -> Result<File> {
        debug!(path = %path.display(), "fetching file");
        self.read_file(path).await
    }

    async fn write(&self, path: &Path, data: &[u8]) -> Result<File> {
        debug!(path = %path.display(), bytes = data.len(), "overwriting file");
        self.require_existing(path).await?;

        let owned = path.to_path_buf();
        let data = data.to_vec();
        // No O_CREAT: a file removed since the check is reported, not recreated
        self.pool
            .run(move || -> io::Result<()> {
                let mut file = std::fs::OpenOptions::new()
                    .write(true)
                    .truncate(true)
                    .open(&owned)?;
                file.write_all(&data)
            })
            .await??;

        self.read_file(path).await
    }

    async fn delete(&self, path: &Path) -> Result<()> {
        debug!(path = %path.display(), "deleting file");
        self.require_existing(path).await?;

        let owned = path.to_path_buf();
        self.pool.run(move || std::fs::remove_file(&owned)).await??;

        Ok(())
    }

    fn name(&self) -> &'static str {
        "local"
    }
}
