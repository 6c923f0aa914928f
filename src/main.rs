//! Command-line interface for loggen
//!
//! # Usage Examples
//!
//! ```bash
//! # Generate the default 100 MiB log.csv in the current directory
//! loggen
//!
//! # Generate a 1 GiB file
//! loggen --size 1G
//!
//! # Raw byte counts and fractional sizes work too
//! loggen -s 524288
//! loggen -s 1.5G
//! ```

use anyhow::Context;
use clap::Parser;
use loggen::{size, LogPopulator};

/// Output filename, fixed so downstream loaders can rely on it.
const OUTPUT_PATH: &str = "log.csv";

#[derive(Parser)]
#[command(name = "loggen")]
#[command(about = "Generate a synthetic CSV log file of approximately a target size")]
struct Cli {
    /// Target file size, e.g. 100MB, 1G, 512K, or a raw byte count
    #[arg(long, short = 's', default_value = "100MB")]
    size: String,
}

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "loggen=info".into()),
        )
        .init();

    let cli = Cli::parse();

    // Validate the size before touching the filesystem, so a bad argument
    // leaves no partial output behind.
    let target_bytes = match size::target_bytes(&cli.size) {
        Ok(bytes) => bytes,
        Err(e) => {
            eprintln!("Error: {e}");
            std::process::exit(2);
        }
    };

    if let Err(e) = run(target_bytes) {
        eprintln!("Error: {e:#}");
        std::process::exit(1);
    }
}

fn run(target_bytes: u64) -> anyhow::Result<()> {
    let mut populator = LogPopulator::new();
    let metrics = populator
        .populate(OUTPUT_PATH, target_bytes)
        .with_context(|| format!("Failed to generate '{OUTPUT_PATH}'"))?;

    tracing::info!(
        "Done: {} rows, {} bytes written to '{}' in {:?}",
        metrics.rows_written,
        metrics.file_size_bytes,
        OUTPUT_PATH,
        metrics.total_duration
    );

    Ok(())
}
