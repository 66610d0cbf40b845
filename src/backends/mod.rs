//! Storage backend implementations
//!
//! This module provides concrete implementations of the [`Storage`](crate::traits::Storage)
//! trait. Only the local filesystem backend ships today; remote object-store
//! backends slot in beside it and are picked when the storage is constructed.

pub mod local;

// Re-export main types for convenience
pub use local::LocalFilesystemStorage;
