//! Provides utility functions for file system operations critical to the application.
//!
//! This includes validating the data directory and listing its instance
//! files, writing the results table, and initializing the walk log writer.
//! It uses macros from the parent `app` module for verbose logging.

use std::fs::{self, File, OpenOptions};
use std::io::{BufWriter, Error as IoError, Write};
use std::path::{Path, PathBuf};

use super::error::AppError;
use super::verbose_eprintln;

/// Validates the data directory and returns its instance files.
///
/// Only regular files with a `.txt` extension (any case) are returned, sorted
/// by path so every run processes instances in the same order.
///
/// # Errors
/// Returns `AppError::InvalidPath` if the path does not exist or is not a
/// directory, and `AppError::Io` if it cannot be listed.
pub fn list_instance_files(data_dir: &Path, quiet_mode: bool) -> Result<Vec<PathBuf>, AppError> {
    if !data_dir.exists() {
        let error_msg = format!("Directory not found: {}", data_dir.display());
        verbose_eprintln!(quiet_mode, "Input Error: {}", error_msg);
        return Err(AppError::InvalidPath(error_msg));
    }
    if !data_dir.is_dir() {
        let error_msg = format!("Path is not a directory: {}", data_dir.display());
        verbose_eprintln!(quiet_mode, "Input Error: {}", error_msg);
        return Err(AppError::InvalidPath(error_msg));
    }

    let mut files: Vec<PathBuf> = fs::read_dir(data_dir)?
        .filter_map(|entry| entry.ok().map(|e| e.path()))
        .filter(|path| path.is_file() && is_instance_file(path))
        .collect();
    files.sort();
    Ok(files)
}

fn is_instance_file(path: &Path) -> bool {
    path.extension()
        .and_then(|ext| ext.to_str())
        .is_some_and(|ext| ext.eq_ignore_ascii_case("txt"))
}

/// Writes string content to a specified file, creating or overwriting it.
///
/// The content goes through a `BufWriter`, which is flushed before returning
/// so the caller sees the complete file immediately.
///
/// # Errors
/// Returns an `IoError` if any file operation (opening, writing, flushing) fails.
pub fn write_content_to_file(file_path: &Path, content: &str) -> Result<(), IoError> {
    let file = OpenOptions::new()
        .create(true)
        .write(true)
        .truncate(true)
        .open(file_path)?;
    let mut writer = BufWriter::new(file);
    writer.write_all(content.as_bytes())?;
    writer.flush()?;
    Ok(())
}

/// Initializes and returns a `BufWriter<File>` for the witness walk log.
///
/// The file is truncated so the log only covers the current run. The writer is
/// not flushed here; the orchestrator flushes it once all instances are done.
///
/// # Errors
/// Returns an `IoError` if the file cannot be opened or created.
pub fn init_walk_log_writer(file_path: &Path) -> Result<BufWriter<File>, IoError> {
    let file = OpenOptions::new()
        .create(true)
        .write(true)
        .truncate(true) // Overwrite the walk log each run.
        .open(file_path)?;
    Ok(BufWriter::new(file))
}
