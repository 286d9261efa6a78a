//! oapub - publish API collections as `OpenAPI` documents
//!
//! Wires the application use cases to the infrastructure adapters for the
//! `oapub` command line tool.

pub mod cli;
pub mod config;
pub mod logging;

use anyhow::Context;
use oapub_application::{FileSaver, PublishCollection, PublishOutcome};
use oapub_infrastructure::{
    DirectoryFileSaver, OpenApiYamlExporter, StdoutFileSaver, load_collection,
};

pub use cli::Cli;
pub use config::AppConfig;

/// Loads the collection named on the command line and publishes it.
///
/// `--stdout` takes precedence over any output directory; otherwise
/// `--output-dir` overrides the configured directory.
///
/// # Errors
///
/// Returns an error if the collection cannot be loaded, its metadata is
/// invalid, a request URL cannot be parsed, or the file cannot be saved.
pub fn run(cli: &Cli, config: &AppConfig) -> anyhow::Result<PublishOutcome> {
    let collection = load_collection(&cli.collection)
        .with_context(|| format!("failed to load {}", cli.collection.display()))?;

    let outcome = if cli.stdout {
        publish(&collection, StdoutFileSaver::stdout())
    } else {
        let dir = cli.output_dir.as_ref().unwrap_or(&config.output_dir);
        let saver = DirectoryFileSaver::new(dir);
        tracing::debug!(dir = %saver.dir().display(), "writing to directory");
        publish(&collection, saver)
    };

    outcome.with_context(|| format!("failed to publish collection '{}'", collection.name))
}

fn publish<S: FileSaver>(
    collection: &oapub_domain::Collection,
    saver: S,
) -> oapub_application::PublishResult<PublishOutcome> {
    PublishCollection::new(OpenApiYamlExporter::new(saver)).execute(collection)
}
