//! Error types for storage operations
//!
//! Every failure is a [`StorageError`] delivered through the operation's
//! future. Each variant carries a stable machine-readable identifier
//! (see [`StorageError::identifier`]) and a human-readable reason.

use std::io;
use std::path::PathBuf;
use thiserror::Error;

/// Result alias used throughout the crate
pub type Result<T> = std::result::Result<T, StorageError>;

/// Uniform error value for all storage backends
#[derive(Debug, Error)]
pub enum StorageError {
    /// Neither an explicit destination nor a default path was available
    #[error("a destination path is required: none was given and no default path is configured")]
    PathRequired,

    /// Exclusive create found something already at the target path
    #[error("a file already exists at {}", .0.display())]
    FileExists(PathBuf),

    /// The operation's target does not exist
    #[error("no file exists at {}", .0.display())]
    NoFile(PathBuf),

    /// No base name could be derived from the path
    #[error("cannot derive a file name from path '{0}'")]
    EmptyPath(String),

    /// Metadata query for the file size failed
    #[error("unable to determine the size of {}", .0.display())]
    FileSize(PathBuf),

    /// Any other OS-level failure
    #[error("OS error {code}: {message}")]
    Errno {
        /// Raw OS error code (-1 when the error did not originate from the OS)
        code: i32,
        /// OS error message
        message: String,
    },

    /// The offload pool could not accept or finish a blocking job
    #[error("offload pool failure: {0}")]
    Offload(String),

    /// The storage configuration is unusable
    #[error("invalid configuration: {0}")]
    Config(String),
}

impl StorageError {
    /// Stable error-kind tag
    #[must_use]
    pub const fn identifier(&self) -> &'static str {
        match self {
            Self::PathRequired => "pathRequired",
            Self::FileExists(_) => "fileExists",
            Self::NoFile(_) => "noFile",
            Self::EmptyPath(_) => "emptyPath",
            Self::FileSize(_) => "fileSize",
            Self::Errno { .. } => "errno",
            Self::Offload(_) => "offload",
            Self::Config(_) => "config",
        }
    }

    /// Human-readable detail
    #[must_use]
    pub fn reason(&self) -> String {
        self.to_string()
    }

    /// OS error code, if this is an OS-level failure
    #[must_use]
    pub const fn os_code(&self) -> Option<i32> {
        match self {
            Self::Errno { code, .. } => Some(*code),
            _ => None,
        }
    }
}

impl From<io::Error> for StorageError {
    fn from(e: io::Error) -> Self {
        Self::Errno {
            code: e.raw_os_error().unwrap_or(-1),
            message: e.to_string(),
        }
    }
}
