//! Command-line arguments

use std::path::PathBuf;

use clap::{Args, Parser, Subcommand};
use leakguard_schemas::DEFAULT_TOP_SENSORS;

/// Locate pipeline leaks from sensor pressure snapshots
#[derive(Parser, Debug)]
#[command(name = "leakguard", version, about)]
pub struct Cli {
    /// Log filter for diagnostics on stderr (e.g. "info", "leakguard_core=debug")
    #[arg(long, global = true, env = "LEAKGUARD_LOG", default_value = "warn")]
    pub log_level: String,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Estimate the leak location for one request
    Predict(PredictArgs),
    /// Show a model package's metadata and resolved configuration
    ModelInfo(ModelArgs),
}

#[derive(Args, Debug, Clone)]
pub struct ModelArgs {
    /// Model package (JSON)
    #[arg(long, env = "LEAKGUARD_MODEL")]
    pub model: PathBuf,
}

#[derive(Args, Debug, Clone)]
pub struct PredictArgs {
    #[command(flatten)]
    pub model: ModelArgs,

    /// Request file; reads stdin when omitted
    #[arg(long)]
    pub input: Option<PathBuf>,

    /// Number of ranked sensors to report
    #[arg(long, default_value_t = DEFAULT_TOP_SENSORS)]
    pub top: usize,

    /// Indent the JSON output
    #[arg(long)]
    pub pretty: bool,
}
