//! Command-line entry point: compare two archives and print or write a report.

use anyhow::{Context, Result, bail};
use clap::Parser;
use std::path::Path;
use std::process::ExitCode;
use std::time::Duration;
use tokio::io::AsyncWriteExt;
use tracing_subscriber::EnvFilter;

use zipdiff::output::write_report;
use zipdiff::{Cli, compare_locations};

/// Status when `--exit-with-status` is set and the archives differ.
const EXIT_DIFFERENCES: u8 = 1;
/// Status for any failure.
const EXIT_ERROR: u8 = 2;

#[tokio::main]
async fn main() -> ExitCode {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();

    match run(&cli).await {
        Ok(true) if cli.exit_with_status => ExitCode::from(EXIT_DIFFERENCES),
        Ok(_) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("zipdiff: {:#}", e);
            ExitCode::from(EXIT_ERROR)
        }
    }
}

/// Compare the two archives named on the command line and emit the report.
///
/// Returns whether any differences were found.
async fn run(cli: &Cli) -> Result<bool> {
    let config = cli.comparison_config()?;

    let comparison = compare_locations(&cli.file1, &cli.file2, &config);
    let result = match cli.timeout {
        Some(secs) => match tokio::time::timeout(Duration::from_secs(secs), comparison).await {
            Ok(result) => result?,
            Err(_) => bail!("comparison timed out after {} seconds", secs),
        },
        None => comparison.await?,
    };

    let format = cli.output_format();
    match &cli.output {
        Some(output) => write_report(&result, Path::new(output), format)
            .await
            .with_context(|| format!("Cannot write report to {}", output))?,
        None => {
            let report = format.render_to_vec(&result)?;
            let mut stdout = tokio::io::stdout();
            stdout.write_all(&report).await?;
            stdout.flush().await?;
        }
    }

    Ok(result.has_differences())
}
