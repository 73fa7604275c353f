//! Main application orchestrator.
//!
//! Coordinates a batch run over a directory of instances:
//! 1. Initializes logging (verbose log and witness walk log) unless quiet.
//! 2. Lists the `*.txt` instance files of the data directory.
//! 3. For each file, loads the instance and solves all five constraints via
//!    `processing`, under the configured per-query time budget. Instances that
//!    fail to load or solve are logged and skipped.
//! 4. Writes the tab-separated results table to the output file.
//! 5. Provides summary messages to the user.
//!
//! Adheres to command-line arguments like `quiet_mode` for controlling verbosity.

use super::cli::Cli;
use super::error::AppError;
use super::file_handler;
use super::logger;
use super::processing::{self, InstanceRow};
use super::{verbose_eprintln, verbose_println}; // Macros for conditional logging.
use crate::path::BoundedRunner;
use std::io::Write; // For BufWriter::flush
use std::path::Path;
use std::time::Duration;

const VERBOSE_LOG_NAME: &str = "red-scare.log";
const WALK_LOG_NAME: &str = "walks.log";

/// Runs the main application logic based on parsed command-line arguments.
///
/// Both logs are written next to the results table.
///
/// # Arguments
/// * `cli` - The `Cli` struct containing parsed command-line arguments.
///
/// # Errors
/// Returns `AppError` if the data directory is invalid or the results table
/// cannot be written. Per-instance failures are logged and do not abort the run.
pub fn run_app(cli: Cli) -> Result<(), AppError> {
    let quiet_mode = cli.quiet;
    let log_dir = cli
        .output
        .parent()
        .filter(|p| !p.as_os_str().is_empty())
        .unwrap_or_else(|| Path::new("."))
        .to_path_buf();

    if !quiet_mode {
        let log_path = log_dir.join(VERBOSE_LOG_NAME);
        if let Err(e) = logger::init_global_logger(&log_path.to_string_lossy()) {
            // Verbose file logging is unavailable; the run continues.
            eprintln!(
                "Warning: Failed to initialize verbose logger ({}): {}. Verbose file logging will be unavailable.",
                log_path.display(),
                e
            );
        } else {
            verbose_println!(quiet_mode, "Verbose logging initialized to {}", log_path.display());
            flush_logger("after initialization");
        }
    }

    let instance_files = file_handler::list_instance_files(&cli.data_dir, quiet_mode)?;

    let runner = BoundedRunner::new(cli.timeout_ms.map(Duration::from_millis));
    match runner.limit() {
        Some(limit) => verbose_println!(quiet_mode, "Time budget per query: {:?}", limit),
        None => verbose_println!(quiet_mode, "Time budget per query: unbounded"),
    }

    // Witness walks are only logged in verbose mode.
    let mut walk_log_writer = if quiet_mode {
        None
    } else {
        let walk_log_path = log_dir.join(WALK_LOG_NAME);
        match file_handler::init_walk_log_writer(&walk_log_path) {
            Ok(writer) => Some(writer),
            Err(e) => {
                verbose_eprintln!(
                    quiet_mode,
                    "[ERROR] Failed to open walk log ({}): {}. Walks will not be logged.",
                    walk_log_path.display(),
                    e
                );
                None
            }
        }
    };

    let mut rows: Vec<InstanceRow> = Vec::with_capacity(instance_files.len());
    let mut failed = 0usize;

    for file_path in &instance_files {
        verbose_println!(
            quiet_mode,
            "\n============================================================"
        );
        verbose_println!(quiet_mode, "Processing File: {}", file_path.display());
        verbose_println!(
            quiet_mode,
            "============================================================"
        );

        let row = processing::load_instance(file_path, quiet_mode).and_then(|instance| {
            processing::solve_instance(&instance, &runner, quiet_mode, walk_log_writer.as_mut())
        });
        match row {
            Ok(row) => rows.push(row),
            Err(e) => {
                failed += 1;
                verbose_eprintln!(
                    quiet_mode,
                    "[ERROR] Skipping {}: {}",
                    file_path.display(),
                    e
                );
            }
        }

        if !quiet_mode {
            flush_logger("after processing an instance");
        }
    }

    if let Some(writer) = walk_log_writer.as_mut() {
        if let Err(e) = writer.flush() {
            verbose_eprintln!(
                quiet_mode,
                "[WARNING] Failed to flush walk log: {}. Some walks might be lost.",
                e
            );
        }
    }

    let table = processing::render_results_table(&rows);
    if let Err(e) = file_handler::write_content_to_file(&cli.output, &table) {
        verbose_eprintln!(
            quiet_mode,
            "[ERROR] Failed to write results table ({}): {}",
            cli.output.display(),
            e
        );
        if !quiet_mode {
            flush_logger("on error");
        }
        return Err(AppError::Io(e));
    }

    verbose_println!(
        quiet_mode,
        "\n[INFO] {} instance(s) solved, {} skipped. Results written to {}",
        rows.len(),
        failed,
        cli.output.display()
    );

    if !quiet_mode {
        flush_logger("before exit");
    }

    if quiet_mode {
        println!("Done.");
    } else {
        println!(
            "\nProcessed {} instance(s) ({} skipped). Results in '{}', verbose output in '{}', walks in '{}'.",
            rows.len(),
            failed,
            cli.output.display(),
            log_dir.join(VERBOSE_LOG_NAME).display(),
            log_dir.join(WALK_LOG_NAME).display()
        );
    }

    Ok(())
}

/// Flushes the verbose log; failures go to stderr since the log itself failed.
fn flush_logger(when: &str) {
    if let Err(e) = logger::flush_global_logger() {
        eprintln!("[WARNING] Failed to flush {} {}: {}", VERBOSE_LOG_NAME, when, e);
    }
}
