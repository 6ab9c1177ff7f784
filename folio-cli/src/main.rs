//! Folio — one-shot portfolio page generator.
//!
//! # Usage
//!
//! ```text
//! <site>/bin/folio
//! ```
//!
//! Reads `<site>/data/projects.json`, renders `<site>/templates/index.html`
//! and writes `<site>/index.html`, where `<site>` is the directory above the
//! one holding the binary. Set `RUST_LOG=debug` for stage-by-stage logs.

use std::process::ExitCode;

use anyhow::{Context, Result};
use clap::Parser;
use colored::Colorize;

use folio_site::{GenerateReport, SitePaths};

// ---------------------------------------------------------------------------
// CLI entry point
// ---------------------------------------------------------------------------

#[derive(Parser, Debug)]
#[command(
    name = "folio",
    version,
    about = "Render the portfolio page from data/projects.json and templates/index.html",
    long_about = None,
)]
struct Cli {}

fn init_tracing() {
    use tracing_subscriber::{fmt, EnvFilter};

    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));
    let _ = fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_writer(std::io::stderr)
        .try_init();
}

fn print_report(report: &GenerateReport) {
    println!(
        "{} Successfully generated portfolio at {}",
        "✓".green(),
        report.output_path.display()
    );
}

// ---------------------------------------------------------------------------
// Main
// ---------------------------------------------------------------------------

fn main() -> Result<ExitCode> {
    let _cli = Cli::parse();
    init_tracing();

    let paths = SitePaths::discover().context("could not locate the folio executable")?;
    tracing::debug!("site paths: {:?}", paths);

    match folio_site::generate(&paths) {
        Ok(report) => {
            print_report(&report);
            Ok(ExitCode::SUCCESS)
        }
        Err(err) if err.is_missing_data_source() => {
            eprintln!("{} {err}", "Error:".red());
            Ok(ExitCode::FAILURE)
        }
        Err(err) => Err(err).with_context(|| {
            format!("failed to generate {}", paths.output_file.display())
        }),
    }
}
