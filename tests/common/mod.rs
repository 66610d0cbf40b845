use filestash::{LocalFilesystemStorage, StorageConfig};
use std::path::Path;
use tempfile::TempDir;

/// 500 bytes of markdown-ish text
#[allow(dead_code)]
pub fn sample_markdown() -> Vec<u8> {
    let line = b"# filestash sample line for round-trip tests ##\n";
    line.iter().copied().cycle().take(500).collect()
}

/// Temporary directory plus a backend with no default path
#[allow(dead_code)]
pub fn storage_without_default() -> anyhow::Result<(TempDir, LocalFilesystemStorage)> {
    let temp_dir = TempDir::new()?;
    let storage = LocalFilesystemStorage::new(StorageConfig::default())?;
    Ok((temp_dir, storage))
}

/// Backend whose default path is `dir`
#[allow(dead_code)]
pub fn storage_with_default(dir: &Path) -> anyhow::Result<LocalFilesystemStorage> {
    Ok(LocalFilesystemStorage::new(
        StorageConfig::default().with_default_path(dir),
    )?)
}
