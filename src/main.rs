// Entrypoint for the uploader.
// - Keeps `main` small: parse flags, build an `Uploader`, run it once.
// - Every failure is printed to stdout and turns into exit code 1.

use anyhow::Context;
use clap::Parser;
use gup::cli::{report_parse_error, Cli};
use gup::config::UploaderConfig;
use gup::workflow::Uploader;
use std::process::ExitCode;
use tracing::debug;
use tracing_subscriber::EnvFilter;

fn main() -> ExitCode {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")))
        .with_writer(std::io::stderr)
        .init();

    let cli = match Cli::try_parse() {
        Ok(cli) => cli,
        Err(e) => return report_parse_error(&e),
    };

    if let Err(e) = run(cli) {
        debug!("{:?}", e);
        println!("Error: {:#}", e);
        return ExitCode::from(1);
    }
    ExitCode::SUCCESS
}

fn run(cli: Cli) -> anyhow::Result<()> {
    // `GUP_API_URL` overrides https://api.github.com, see `UploaderConfig::from_env`.
    let uploader = Uploader::new(UploaderConfig::from_env()).context("Failed to set up HTTP client")?;

    let result = uploader.upload(&cli.file, &cli.github_url)?;
    match result.new_commit_id {
        Some(sha) => println!("File uploaded successfully! Commit SHA: {}", sha),
        None => println!("File uploaded successfully!"),
    }
    Ok(())
}
