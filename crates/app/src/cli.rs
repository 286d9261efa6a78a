//! Command line interface.

use std::path::PathBuf;

use clap::{Parser, ValueHint};

/// Publish an API collection as an `OpenAPI` 3.0.3 YAML document
#[derive(Debug, Parser)]
#[command(name = "oapub", version, about, long_about = None)]
pub struct Cli {
    /// Collection JSON file to publish
    #[arg(value_name = "COLLECTION", value_hint = ValueHint::FilePath)]
    pub collection: PathBuf,

    /// Directory the `<name>.yml` file is written to
    #[arg(short, long, value_name = "DIR", value_hint = ValueHint::DirPath, conflicts_with = "stdout")]
    pub output_dir: Option<PathBuf>,

    /// Print the YAML to standard output instead of writing a file
    #[arg(long)]
    pub stdout: bool,

    /// Log filter, e.g. `debug` or `oapub_application=trace`
    #[arg(long, value_name = "FILTER")]
    pub log: Option<String>,
}
