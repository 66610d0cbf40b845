//! Core traits for storage abstraction
//!
//! [`Storage`] is the capability contract every backend implements.
//! [`FileInspector`] is the metadata accessor the local backend consults
//! for existence and size checks. Both are designed to work with compio's
//! async I/O model.

pub mod inspector;
pub mod storage;

pub use inspector::{FileInspector, OsFileInspector};
pub use storage::Storage;
