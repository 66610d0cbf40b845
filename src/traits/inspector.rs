//! Filesystem metadata accessor
//!
//! The local backend asks a [`FileInspector`] whether a path exists and how
//! large it is. Implementations are plain blocking calls; the backend only
//! ever invokes them on its offload pool.

use std::io;
use std::path::Path;

/// Blocking metadata queries used by the local backend
pub trait FileInspector: Send + Sync + 'static {
    /// Whether anything exists at `path`
    fn exists(&self, path: &Path) -> bool;

    /// Size in bytes of the file at `path`
    ///
    /// # Errors
    ///
    /// Returns the underlying I/O error if metadata cannot be read.
    fn size(&self, path: &Path) -> io::Result<u64>;
}

/// Inspector backed by the operating system's `stat`
#[derive(Debug, Default, Clone, Copy)]
pub struct OsFileInspector;

impl FileInspector for OsFileInspector {
    fn exists(&self, path: &Path) -> bool {
        // symlink_metadata so a dangling link still counts as occupying the name
        std::fs::symlink_metadata(path).is_ok()
    }

    fn size(&self, path: &Path) -> io::Result<u64> {
        std::fs::metadata(path).map(|m| m.len())
    }
}
