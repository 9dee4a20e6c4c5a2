use std::path::PathBuf;

use clap::Parser;
use tracing_subscriber::EnvFilter;

mod cli;
mod rank;
mod report;
mod rules;
mod scan;

/// Print the largest files under a directory, skipping anything matched by
/// its `.gitignore`.
#[derive(clap::Parser)]
#[command(version)]
pub struct Cli {
    /// Directory to scan. Its `.gitignore` (if any) decides what is skipped.
    #[clap(default_value = ".")]
    root: PathBuf,

    /// How many files to report.
    #[clap(short = 'n', long, default_value_t = 20)]
    count: usize,

    /// Extra patterns, in `.gitignore` syntax, applied after the file's own.
    #[clap(long = "ignore", value_name = "PATTERN")]
    ignore: Vec<String>,

    /// Output one JSON object per file instead of a table.
    #[clap(long, default_value_t = false, conflicts_with = "human_readable")]
    json: bool,

    /// Show sizes as KB/MB/GB instead of raw byte counts.
    #[clap(short = 'H', long, default_value_t = false)]
    human_readable: bool,
}

fn main() {
    dotenvy::dotenv().ok();

    if std::env::var("LOG_STYLE").as_deref().unwrap_or("human") == "json" {
        tracing_subscriber::fmt()
            .with_env_filter(EnvFilter::from_default_env())
            .with_writer(std::io::stderr)
            .event_format(tracing_subscriber::fmt::format::json())
            .init();
    } else {
        tracing_subscriber::fmt()
            .with_env_filter(EnvFilter::from_default_env())
            .with_writer(std::io::stderr)
            .init();
    }

    cli::main(Cli::parse())
}
