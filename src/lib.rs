//! filestash - pluggable async file storage
//!
//! A [`Storage`] trait for storing, fetching, overwriting and deleting named
//! binary resources, and [`LocalFilesystemStorage`], a backend that streams
//! bytes to and from local disk with compio and keeps blocking syscalls on a
//! bounded offload pool.
//!
//! ```rust,ignore
//! use filestash::{File, LocalFilesystemStorage, Storage, StorageConfig};
//!
//! #[compio::main]
//! async fn main() -> filestash::Result<()> {
//!     let storage = LocalFilesystemStorage::new(
//!         StorageConfig::default().with_default_path("/srv/uploads"),
//!     )?;
//!     let path = storage.store(File::new("notes.md", "# hi"), None).await?;
//!     let file = storage.fetch(&path).await?;
//!     assert_eq!(file.extension(), Some("md"));
//!     Ok(())
//! }
//! ```

pub mod backends;
pub mod cli;
pub mod config;
pub mod error;
pub mod file;
pub mod filesystem;
pub mod offload;
pub mod traits;

pub use backends::LocalFilesystemStorage;
pub use config::StorageConfig;
pub use error::{Result, StorageError};
pub use file::File;
pub use traits::{FileInspector, OsFileInspector, Storage};
