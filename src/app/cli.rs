use clap::Parser;
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[clap(author, version, about = "Solves the five red/blue walk constraints for every instance in a directory.", long_about = None)]
pub struct Cli {
    /// Directory with instance files (*.txt)
    pub data_dir: PathBuf,

    /// Where to write the tab-separated results table
    #[clap(short, long, default_value = "results.txt")]
    pub output: PathBuf,

    /// Time budget per query in milliseconds; unbounded if omitted.
    #[clap(short, long = "timeout-ms", value_name = "MS")]
    pub timeout_ms: Option<u64>,

    /// Suppress verbose output, only printing 'Done.' on success or errors.
    #[clap(short, long)]
    pub quiet: bool,
}
