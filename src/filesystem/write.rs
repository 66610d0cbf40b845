//! Chunked file writing
//!
//! Streams a payload into an open file one positional write per chunk. A
//! single scratch buffer is handed to compio and returned after each write.

use crate::error::{Result, StorageError};
use compio::fs::File;
use compio::io::AsyncWriteAt;
use tracing::trace;

/// Write all of `content` to `file` starting at offset 0
///
/// Short writes are resumed from where they stopped.
///
/// # Parameters
///
/// * `file` - Open, writable handle
/// * `content` - Bytes to write
/// * `chunk_size` - Upper bound on bytes per write operation
///
/// # Returns
///
/// Returns the number of bytes written.
///
/// # Errors
///
/// Returns `Err(StorageError)` if a write fails or makes no progress.
pub async fn write_chunked(file: &mut File, content: &[u8], chunk_size: usize) -> Result<u64> {
    let mut buffer = Vec::with_capacity(chunk_size.min(content.len()));
    let mut offset = 0usize;

    while offset < content.len() {
        let end = (offset + chunk_size).min(content.len());
        buffer.clear();
        buffer.extend_from_slice(&content[offset..end]);

        let buf_result = file.write_at(buffer, offset as u64).await;
        let bytes_written = buf_result.0?;
        buffer = buf_result.1;

        if bytes_written == 0 {
            return Err(StorageError::Errno {
                code: -1,
                message: format!("write made no progress at offset {offset}"),
            });
        }

        trace!(offset, bytes_written, "wrote chunk");
        offset += bytes_written;
    }

    Ok(offset as u64)
}

#[cfg(test)]
mod tests {
    use super::*;
    use compio::fs::OpenOptions;
    use std::fs;
    use tempfile::TempDir;

    async fn create(path: &std::path::Path) -> std::io::Result<File> {
        OpenOptions::new().write(true).create(true).open(path).await
    }

    #[compio::test]
    async fn test_write_small_file() -> anyhow::Result<()> {
        let temp_dir = TempDir::new()?;
        let path = temp_dir.path().join("test.txt");

        let mut file = create(&path).await?;
        let written = write_chunked(&mut file, b"Hello, World!", 4096).await?;
        file.close().await?;

        assert_eq!(written, 13);
        assert_eq!(fs::read(&path)?, b"Hello, World!");

        Ok(())
    }

    #[compio::test]
    async fn test_write_empty_file() -> anyhow::Result<()> {
        let temp_dir = TempDir::new()?;
        let path = temp_dir.path().join("empty.txt");

        let mut file = create(&path).await?;
        let written = write_chunked(&mut file, b"", 4096).await?;
        file.close().await?;

        assert_eq!(written, 0);
        assert_eq!(fs::read(&path)?.len(), 0);

        Ok(())
    }

    #[compio::test]
    async fn test_write_spans_many_chunks() -> anyhow::Result<()> {
        let temp_dir = TempDir::new()?;
        let path = temp_dir.path().join("large.dat");
        let data: Vec<u8> = (0..10_000).map(|i| (i % 256) as u8).collect();

        let mut file = create(&path).await?;
        let written = write_chunked(&mut file, &data, 777).await?;
        file.close().await?;

        assert_eq!(written, 10_000);
        assert_eq!(fs::read(&path)?, data);

        Ok(())
    }
}
