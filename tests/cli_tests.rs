//! Command-line tests for the filestash binary

use assert_cmd::Command;
use predicates::prelude::*;
use std::fs;
use tempfile::TempDir;

fn filestash() -> Command {
    Command::cargo_bin("filestash").expect("binary should build")
}

#[test]
fn test_store_prints_resolved_path() -> anyhow::Result<()> {
    let temp_dir = TempDir::new()?;
    let source = temp_dir.path().join("source.md");
    fs::write(&source, b"# hello")?;
    let store_dir = temp_dir.path().join("Test Files");
    fs::create_dir(&store_dir)?;

    filestash()
        .args(["--dir"])
        .arg(&store_dir)
        .args(["store"])
        .arg(&source)
        .args(["--name", "test.md"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Test Files/test.md"));

    assert_eq!(fs::read(store_dir.join("test.md"))?, b"# hello");

    Ok(())
}

#[test]
fn test_store_without_dir_fails() -> anyhow::Result<()> {
    let temp_dir = TempDir::new()?;
    let source = temp_dir.path().join("source.txt");
    fs::write(&source, b"data")?;

    filestash()
        .arg("store")
        .arg(&source)
        .assert()
        .failure()
        .stderr(predicate::str::contains("destination path is required"));

    Ok(())
}

#[test]
fn test_fetch_writes_payload_to_stdout() -> anyhow::Result<()> {
    let temp_dir = TempDir::new()?;
    let stored = temp_dir.path().join("stored.txt");
    fs::write(&stored, b"payload bytes")?;

    filestash()
        .arg("fetch")
        .arg(&stored)
        .assert()
        .success()
        .stdout("payload bytes");

    Ok(())
}

#[test]
fn test_fetch_to_output_file() -> anyhow::Result<()> {
    let temp_dir = TempDir::new()?;
    let stored = temp_dir.path().join("stored.txt");
    let output = temp_dir.path().join("copy.txt");
    fs::write(&stored, b"copied")?;

    filestash()
        .arg("fetch")
        .arg(&stored)
        .arg("--output")
        .arg(&output)
        .assert()
        .success();

    assert_eq!(fs::read(&output)?, b"copied");

    Ok(())
}

#[test]
fn test_write_then_delete() -> anyhow::Result<()> {
    let temp_dir = TempDir::new()?;
    let stored = temp_dir.path().join("stored.txt");
    let replacement = temp_dir.path().join("replacement.txt");
    fs::write(&stored, b"old contents that are long")?;
    fs::write(&replacement, b"Some updated content!")?;

    filestash()
        .arg("write")
        .arg(&stored)
        .arg(&replacement)
        .assert()
        .success()
        .stdout(predicate::str::diff("21\n"));
    assert_eq!(fs::read(&stored)?, b"Some updated content!");

    filestash().arg("delete").arg(&stored).assert().success();
    assert!(!stored.exists());

    filestash()
        .arg("delete")
        .arg(&stored)
        .assert()
        .failure()
        .stderr(predicate::str::contains("no file exists"));

    Ok(())
}

#[test]
fn test_fetch_to_output_with_small_chunks() -> anyhow::Result<()> {
    let temp_dir = TempDir::new()?;
    let stored = temp_dir.path().join("stored.bin");
    let output = temp_dir.path().join("copy.bin");
    let data: Vec<u8> = (0..5000).map(|i| (i % 241) as u8).collect();
    fs::write(&stored, &data)?;

    filestash()
        .args(["--chunk-size-kb", "1", "fetch"])
        .arg(&stored)
        .arg("--output")
        .arg(&output)
        .assert()
        .success();

    assert_eq!(fs::read(&output)?, data);

    Ok(())
}
