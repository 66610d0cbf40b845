//! filestash - command-line front end for the local storage backend

use anyhow::{Context, Result};
use clap::Parser;
use filestash::cli::{Args, Command};
use filestash::filesystem::{close_after, write_chunked};
use filestash::{File, LocalFilesystemStorage, Storage};
use std::io::Write;
use std::path::Path;
use tracing::info;

#[compio::main]
async fn main() -> Result<()> {
    let args = Args::parse();
    args.validate()?;

    tracing_subscriber::fmt()
        .with_max_level(args.output.log_level())
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();

    let storage = LocalFilesystemStorage::new(args.storage.to_config())
        .context("failed to initialise storage")?;

    let chunk_size = storage.config().chunk_size;
    run(&storage, args.command, chunk_size).await
}

async fn run<S: Storage>(storage: &S, command: Command, chunk_size: usize) -> Result<()> {
    match command {
        Command::Store { source, at, name } => {
            let name = match name {
                Some(name) => name,
                None => file_name_of(&source)?,
            };
            let payload = compio::fs::read(&source)
                .await
                .with_context(|| format!("failed to read {}", source.display()))?;

            let path = storage.store(File::new(name, payload), at.as_deref()).await?;
            info!(backend = storage.name(), path = %path.display(), "stored");
            println!("{}", path.display());
        }
        Command::Fetch { path, output } => {
            let file = storage.fetch(&path).await?;
            info!(filename = file.filename(), bytes = file.len(), "fetched");

            match output {
                Some(output) => {
                    let mut handle = compio::fs::File::create(&output)
                        .await
                        .with_context(|| format!("failed to create {}", output.display()))?;
                    let written =
                        write_chunked(&mut handle, file.payload(), chunk_size).await;
                    close_after(handle, written, &output).await?;
                }
                None => {
                    let mut stdout = std::io::stdout().lock();
                    stdout.write_all(file.payload())?;
                    stdout.flush()?;
                }
            }
        }
        Command::Write { path, source } => {
            let data = compio::fs::read(&source)
                .await
                .with_context(|| format!("failed to read {}", source.display()))?;

            let file = storage.write(&path, &data).await?;
            info!(filename = file.filename(), bytes = file.len(), "overwritten");
            println!("{}", file.len());
        }
        Command::Delete { path } => {
            storage.delete(&path).await?;
            info!(path = %path.display(), "deleted");
        }
    }

    Ok(())
}

fn file_name_of(path: &Path) -> Result<String> {
    path.file_name()
        .map(|name| name.to_string_lossy().into_owned())
        .with_context(|| format!("cannot derive a file name from {}", path.display()))
}
