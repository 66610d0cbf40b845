//! Chunked file reading
//!
//! Streams an open file into a buffer sized up front, one positional read
//! per chunk, so the runtime is free between chunks.

use crate::error::Result;
use bytes::{Bytes, BytesMut};
use compio::buf::{IntoInner, IoBuf};
use compio::fs::File;
use compio::io::AsyncReadAt;
use tracing::trace;

/// Read up to `size` bytes from `file` in `chunk_size` pieces
///
/// The accumulator is allocated once with capacity `size`. Each read is
/// capped to its chunk through a slice of the scratch buffer, so no read
/// goes past `size`. Reading stops at `size` bytes or at EOF, whichever
/// comes first.
///
/// # Parameters
///
/// * `file` - Open handle positioned anywhere (reads are positional)
/// * `size` - Expected byte count, normally from metadata
/// * `chunk_size` - Bytes per read operation
///
/// # Errors
///
/// Returns `Err(StorageError)` if any read fails.
pub async fn read_chunked(file: &File, size: usize, chunk_size: usize) -> Result<Bytes> {
    let mut content = BytesMut::with_capacity(size);
    let mut buffer = vec![0u8; chunk_size.min(size).max(1)];
    let mut offset = 0usize;

    while offset < size {
        let wanted = (size - offset).min(chunk_size);

        // read_at fills the whole capacity it is given; the slice bounds it
        let buf_result = file.read_at(buffer.slice(..wanted), offset as u64).await;
        let bytes_read = buf_result.0?;
        buffer = buf_result.1.into_inner();

        if bytes_read == 0 {
            break; // EOF
        }

        trace!(offset, bytes_read, "read chunk");
        content.extend_from_slice(&buffer[..bytes_read]);
        offset += bytes_read;
    }

    Ok(content.freeze())
}
