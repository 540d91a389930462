use anyhow::Result;
use clap::Parser;
use std::path::PathBuf;

use super::commands;

/// Entry point for the `flatconf` command-line interface.
#[derive(Debug, Parser)]
#[command(
    name = "flatconf",
    about = "Typed flat-file configuration reader",
    version,
    long_about = None
)]
pub struct Cli {
    /// Default configuration file declaring keys, types and default values
    pub defaults: PathBuf,

    /// Optional overlay file with `key = value` overrides
    pub overlay: Option<PathBuf>,

    /// Print a single value instead of the full configuration dump
    #[arg(short = 'g', long = "get", value_name = "KEY")]
    pub get: Option<String>,

    /// Type to read the `--get` key as (int, float, string or bool)
    #[arg(long = "as", value_name = "TYPE", default_value = "string")]
    pub value_type: String,
}

impl Cli {
    pub fn run(self) -> Result<()> {
        commands::run(self)
    }
}
