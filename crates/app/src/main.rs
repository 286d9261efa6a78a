//! oapub - Main Entry Point
//!
//! Parses arguments, loads configuration, installs logging and runs the
//! publish pipeline.

use std::path::Path;
use std::process::ExitCode;

use clap::Parser;
use oapub::config::CONFIG_FILE;
use oapub::{AppConfig, Cli, logging};
use oapub_application::PublishOutcome;

fn main() -> ExitCode {
    let cli = Cli::parse();

    let config = match AppConfig::load(Path::new(CONFIG_FILE)) {
        Ok(config) => config,
        Err(e) => {
            eprintln!("Error: invalid configuration: {e}");
            return ExitCode::FAILURE;
        }
    };

    logging::init(cli.log.as_deref().or(config.log_filter.as_deref()));

    match oapub::run(&cli, &config) {
        Ok(PublishOutcome::Published(report)) => {
            tracing::info!(
                location = %report.receipt.location,
                paths = report.paths,
                operations = report.operations,
                tags = report.tags,
                servers = report.servers,
                "published"
            );
            ExitCode::SUCCESS
        }
        Ok(PublishOutcome::NoMetadata) => {
            tracing::warn!(
                collection = %cli.collection.display(),
                "no OpenAPI metadata configured (add oa__* collection variables); nothing exported"
            );
            ExitCode::SUCCESS
        }
        Err(e) => {
            eprintln!("Error: {e:#}");
            ExitCode::FAILURE
        }
    }
}
