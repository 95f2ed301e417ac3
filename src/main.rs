//! kindle-tldr
//!
//! Distills a Kindle's `My Clippings.txt` export into one `<title>-TLDR.md`
//! summary per book: highlights grouped by title, ordered by position, with
//! partial duplicate highlights collapsed.

use std::fs;
use std::path::PathBuf;
use std::process;

use anyhow::Context;
use clap::Parser;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use kindle_tldr::config::Config;
use kindle_tldr::{clippings, device, digest};

#[derive(Parser, Debug)]
#[command(name = "kindle-tldr")]
#[command(about = "Distills a Kindle clippings export into per-book TLDR notes", long_about = None)]
struct Cli {
    /// Mount point of the e-reader
    device_root: PathBuf,

    /// Directory the TLDR documents are written to
    output_dir: PathBuf,
}

fn main() {
    // Initialize tracing
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "kindle_tldr=info".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    // Load configuration
    dotenvy::dotenv().ok();

    let cli = Cli::parse();
    let config = Config::from_env();

    if let Err(e) = run(&cli, &config) {
        tracing::error!("{:#}", e);
        process::exit(1);
    }
}

fn run(cli: &Cli, config: &Config) -> anyhow::Result<()> {
    let raw = device::read_export(&cli.device_root, &config.export.clippings_path)
        .context("reading clippings export")?;

    let groups = clippings::parse_export(&raw, &config.export.delimiter);
    tracing::info!("parsed highlights for {} books", groups.len());

    fs::create_dir_all(&cli.output_dir)
        .with_context(|| format!("creating output directory {}", cli.output_dir.display()))?;

    for (title, mut group) in groups {
        let count = group.len();
        let path = digest::write_digest(&title, &mut group, &cli.output_dir)
            .with_context(|| format!("writing digest for '{}'", title))?;
        tracing::info!("{}: {} highlights -> {}", title, count, path.display());
    }

    if config.truncate_after_run {
        device::truncate_export(&cli.device_root, &config.export.clippings_path)
            .context("truncating clippings export")?;
        tracing::info!("clippings export truncated");
    }

    Ok(())
}
