//! Command-line interface definitions
//!
//! Arguments are grouped by the component that consumes them: storage
//! construction, logging, and the operation to run.

use crate::config::{StorageConfig, DEFAULT_CHUNK_SIZE, DEFAULT_WORKER_THREADS};
use anyhow::Result;
use clap::{Parser, Subcommand};
use std::path::PathBuf;

/// Store, fetch, overwrite and delete files on local disk using `io_uring`
#[derive(Parser, Debug, Clone)]
#[command(author, version, about, long_about = None)]
pub struct Args {
    /// Storage backend configuration
    #[command(flatten)]
    pub storage: StorageArgs,

    /// Output and logging configuration
    #[command(flatten)]
    pub output: OutputConfig,

    /// Operation to perform
    #[command(subcommand)]
    pub command: Command,
}

// ============================================================================
// FUNCTIONAL GROUPS: Organized by what component consumes them
// ============================================================================

/// Storage configuration
///
/// Used by: `LocalFilesystemStorage::new()`
#[derive(clap::Args, Debug, Clone)]
#[command(next_help_heading = "Storage Options")]
pub struct StorageArgs {
    /// Default directory for `store` when `--at` is not given
    #[arg(long, value_name = "DIR")]
    pub dir: Option<PathBuf>,

    /// Worker threads for blocking filesystem calls
    #[arg(long, default_value_t = DEFAULT_WORKER_THREADS)]
    pub workers: usize,

    /// Streaming chunk size in KB
    #[arg(long, default_value_t = DEFAULT_CHUNK_SIZE / 1024)]
    pub chunk_size_kb: usize,
}

impl StorageArgs {
    /// Build the backend configuration
    #[must_use]
    pub fn to_config(&self) -> StorageConfig {
        let config = StorageConfig::default()
            .with_worker_threads(self.workers)
            .with_chunk_size(self.chunk_size_kb.saturating_mul(1024));

        match &self.dir {
            Some(dir) => config.with_default_path(dir),
            None => config,
        }
    }
}

/// Output and logging configuration
#[derive(clap::Args, Debug, Clone)]
#[command(next_help_heading = "Output Options")]
pub struct OutputConfig {
    /// Verbose output (-v, -vv, -vvv)
    #[arg(short, long, action = clap::ArgAction::Count)]
    pub verbose: u8,

    /// Quiet mode (suppress all output except errors)
    #[arg(short, long)]
    pub quiet: bool,
}

impl OutputConfig {
    /// Log level implied by the flags
    #[must_use]
    pub const fn log_level(&self) -> tracing::Level {
        if self.quiet {
            return tracing::Level::ERROR;
        }
        match self.verbose {
            0 => tracing::Level::WARN,
            1 => tracing::Level::INFO,
            2 => tracing::Level::DEBUG,
            _ => tracing::Level::TRACE,
        }
    }
}

/// Storage operations
#[derive(Subcommand, Debug, Clone)]
pub enum Command {
    /// Store a local file as a new file; prints the resolved path
    Store {
        /// File whose contents are stored
        #[arg(value_name = "SOURCE")]
        source: PathBuf,

        /// Destination directory (overrides --dir)
        #[arg(long, value_name = "DIR")]
        at: Option<PathBuf>,

        /// Stored file name (defaults to the source's file name)
        #[arg(long)]
        name: Option<String>,
    },

    /// Fetch a stored file
    Fetch {
        /// Path of the stored file
        path: PathBuf,

        /// Write the payload here instead of stdout
        #[arg(short, long, value_name = "FILE")]
        output: Option<PathBuf>,
    },

    /// Replace a stored file's contents; prints the new size
    Write {
        /// Path of the stored file
        path: PathBuf,

        /// File whose contents replace it
        #[arg(value_name = "SOURCE")]
        source: PathBuf,
    },

    /// Delete a stored file
    Delete {
        /// Path of the stored file
        path: PathBuf,
    },
}

impl Args {
    /// Validate command-line arguments
    ///
    /// # Errors
    ///
    /// This function will return an error if:
    /// - Both --quiet and --verbose options are used
    /// - The worker count or chunk size is 0
    /// - `store --name` is empty
    pub fn validate(&self) -> Result<()> {
        if self.output.quiet && self.output.verbose > 0 {
            anyhow::bail!("--quiet and --verbose cannot be used together");
        }

        self.storage.to_config().validate()?;

        if let Command::Store {
            name: Some(name), ..
        } = &self.command
        {
            if name.is_empty() {
                anyhow::bail!("--name must not be empty");
            }
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn parse(args: &[&str]) -> Args {
        Args::parse_from(std::iter::once("filestash").chain(args.iter().copied()))
    }

    #[test]
    fn test_store_defaults() {
        let args = parse(&["store", "notes.md"]);
        assert!(args.validate().is_ok());
        assert_eq!(args.storage.workers, 2);
        assert_eq!(args.storage.chunk_size_kb, 128);

        let config = args.storage.to_config();
        assert_eq!(config.default_path, None);
        assert_eq!(config.chunk_size, 128 * 1024);
        assert!(matches!(args.command, Command::Store { at: None, name: None, .. }));
    }

    #[test]
    fn test_storage_options_flow_into_config() {
        let args = parse(&[
            "--dir",
            "/srv/Test Files",
            "--workers",
            "4",
            "--chunk-size-kb",
            "8",
            "fetch",
            "/srv/Test Files/a.md",
        ]);
        let config = args.storage.to_config();
        assert_eq!(config.default_path, Some(PathBuf::from("/srv/Test Files")));
        assert_eq!(config.worker_threads, 4);
        assert_eq!(config.chunk_size, 8 * 1024);
    }

    #[test]
    fn test_quiet_and_verbose_conflict() {
        let args = parse(&["-q", "-v", "delete", "x"]);
        assert!(args.validate().is_err());
    }

    #[test]
    fn test_zero_workers_rejected() {
        let args = parse(&["--workers", "0", "delete", "x"]);
        assert!(args.validate().is_err());
    }

    #[test]
    fn test_empty_name_rejected() {
        let args = parse(&["store", "a.txt", "--name", ""]);
        assert!(args.validate().is_err());
    }

    #[test]
    fn test_log_levels() {
        assert_eq!(parse(&["delete", "x"]).output.log_level(), tracing::Level::WARN);
        assert_eq!(parse(&["-vv", "delete", "x"]).output.log_level(), tracing::Level::DEBUG);
        assert_eq!(parse(&["-q", "delete", "x"]).output.log_level(), tracing::Level::ERROR);
    }
}
