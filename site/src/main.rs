//! # domainify-site (binary)
//!
//! Build step for the Domainify homepage: renders the page and writes the
//! deployable static site.
//!
//! ```bash
//! # From the crate directory
//! domainify-site --out-dir dist
//!
//! # Machine-readable summary
//! domainify-site --out-dir dist --json
//! ```

use std::path::PathBuf;
use std::process::ExitCode;

use anyhow::{Context, Result};
use clap::Parser;
use tracing::info;

use domainify_site::generate::build_site;

#[derive(Parser, Debug)]
#[command(name = "domainify-site")]
#[command(about = "Render the Domainify homepage into a static site directory")]
#[command(version)]
struct Args {
    /// Output directory for the rendered site
    #[arg(long, default_value = "dist")]
    out_dir: PathBuf,

    /// Static asset directory copied verbatim into the output (skipped if absent)
    #[arg(long, default_value = "static")]
    static_dir: PathBuf,

    /// Log level (trace, debug, info, warn, error)
    #[arg(long, default_value = "info")]
    log_level: String,

    /// Print the build summary as JSON on stdout
    #[arg(long)]
    json: bool,
}

fn run() -> Result<()> {
    let args = Args::parse();

    // Logging goes to stderr; stdout carries only the summary
    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| args.log_level.parse().unwrap_or_default()),
        )
        .init();

    info!("domainify-site v{}", env!("CARGO_PKG_VERSION"));

    let summary = build_site(&args.out_dir, Some(&args.static_dir))
        .with_context(|| format!("building site into {}", args.out_dir.display()))?;

    if args.json {
        println!(
            "{}",
            serde_json::to_string_pretty(&summary).context("serializing build summary")?
        );
    } else {
        println!(
            "site written to {} ({} pages, {} assets)",
            summary.out_dir.display(),
            summary.pages.len(),
            summary.assets_copied
        );
    }

    Ok(())
}

fn main() -> ExitCode {
    match run() {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("[domainify-site] Error: {:#}", e);
            ExitCode::FAILURE
        }
    }
}
