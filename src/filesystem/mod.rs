//! Shared streaming file operations
//!
//! Chunked read/write over compio file handles, plus the close-on-exit
//! helper every operation that opens a handle goes through.

pub mod handle;
pub mod read;
pub mod write;

pub use handle::close_after;
pub use read::read_chunked;
pub use write::write_chunked;
